// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{BloodType, DonorAvailability};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered donor as shown on the find-blood listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorProfile {
    /// Identifier, e.g. `D-001`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The donor's blood type.
    pub blood_type: BloodType,
    /// District and city, free text.
    pub location: String,
    /// Distance from the searching user, in kilometres.
    pub distance_km: f64,
    /// Date of the most recent donation.
    pub last_donation: NaiveDate,
    /// Whether the donor can currently donate.
    pub availability: DonorAvailability,
    /// Displayed match score. This is seeded data, never computed; the
    /// filter engine does no ranking.
    pub match_score: u8,
    /// Lifetime donation count.
    pub donation_count: u32,
}
