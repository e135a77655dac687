// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-page query shapes for the filter engine.
//!
//! Every dimension carries an explicit "no filter" sentinel: `None` for
//! categorical dimensions, the empty string for text dimensions. A
//! sentinel dimension matches every record, so the default query matches
//! all records.

use crate::types::{BloodType, RequestStatus, Urgency};
use serde::{Deserialize, Serialize};

/// Filter dimensions for the blood bank listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankQuery {
    /// Substring matched against city, address, or bank name.
    pub location: String,
    /// Requires at least one unit of this type on hand.
    pub blood_type: Option<BloodType>,
}

/// Filter dimensions for the public requests listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestQuery {
    /// Exact blood type match.
    pub blood_type: Option<BloodType>,
    /// Substring matched against the request location.
    pub location: String,
    /// Exact urgency match.
    pub urgency: Option<Urgency>,
    /// Exact status match.
    pub status: Option<RequestStatus>,
}

/// Filter dimensions for the donor listing on the find-blood page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorQuery {
    /// Exact blood type match.
    pub blood_type: Option<BloodType>,
    /// Substring matched against the donor location.
    pub location: String,
}

/// The single free-text query on the community page.
///
/// One query filters all three tabs: posts (content, author, tags),
/// events (title, description, location), and stories (name, story).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityQuery {
    /// Substring matched case-insensitively.
    pub text: String,
}
