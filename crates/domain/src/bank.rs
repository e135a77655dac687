// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{BloodType, StockLevel};
use serde::{Deserialize, Serialize};

/// Stock of one blood type at one bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAvailability {
    /// The blood type this row describes.
    pub blood_type: BloodType,
    /// Units currently on hand.
    pub units: u32,
    /// Level tag assigned by the bank.
    pub level: StockLevel,
}

impl TypeAvailability {
    /// Creates an availability row.
    #[must_use]
    pub const fn new(blood_type: BloodType, units: u32, level: StockLevel) -> Self {
        Self {
            blood_type,
            units,
            level,
        }
    }
}

/// A blood bank with its per-type availability table.
///
/// Banks are immutable records seeded at page load; the UI never mutates
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodBank {
    /// Identifier, e.g. `BB-001`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Contact phone.
    pub phone: String,
    /// Opening hours, free text.
    pub hours: String,
    /// Distance from the searching user, in kilometres.
    pub distance_km: f64,
    /// One row per stocked blood type.
    pub availability: Vec<TypeAvailability>,
}

impl BloodBank {
    /// Units on hand for a blood type, zero if the type is not stocked.
    #[must_use]
    pub fn units_of(&self, blood_type: BloodType) -> u32 {
        self.availability
            .iter()
            .find(|row| row.blood_type == blood_type)
            .map_or(0, |row| row.units)
    }

    /// Whether at least one unit of the given type is on hand.
    #[must_use]
    pub fn has_stock(&self, blood_type: BloodType) -> bool {
        self.units_of(blood_type) > 0
    }
}
