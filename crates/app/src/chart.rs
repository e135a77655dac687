// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The availability chart dataset.

use lifeflow_domain::{StockLevel, TypeAvailability};
use serde::Serialize;

/// One chart segment: a blood type and its stocked units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartDatum {
    /// Segment label, e.g. `"O-"`.
    pub category: String,
    /// Segment value.
    pub quantity: u32,
    /// Stock level, used to color the segment.
    pub status: StockLevel,
}

/// Builds the chart dataset from a stock table, preserving row order.
#[must_use]
pub fn availability_dataset(stock: &[TypeAvailability]) -> Vec<ChartDatum> {
    stock
        .iter()
        .map(|row| ChartDatum {
            category: row.blood_type.as_str().to_owned(),
            quantity: row.units,
            status: row.level,
        })
        .collect()
}
