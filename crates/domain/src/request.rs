// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{BloodType, FulfillmentStatus, RequestStatus, Urgency};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A blood request on the public requests listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodRequest {
    /// Identifier, e.g. `REQ-001`.
    pub id: String,
    /// Patient the request is for.
    pub patient_name: String,
    /// Requested blood type.
    pub blood_type: BloodType,
    /// Requested units.
    pub units: u8,
    /// Requesting hospital.
    pub hospital: String,
    /// District and city, free text.
    pub location: String,
    /// Urgency of the need.
    pub urgency: Urgency,
    /// When the request was placed.
    pub requested_at: NaiveDateTime,
    /// Fulfillment state on the public listing.
    pub status: RequestStatus,
    /// Contact phone for responders.
    pub contact_phone: String,
    /// Free-text notes, if any.
    pub notes: Option<String>,
}

/// A request in the hospital dashboard's own queue.
///
/// Locally submitted requests are prepended to the queue with status
/// `Pending`; they exist only for the lifetime of the page and are never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedRequest {
    /// Identifier, e.g. `REQ-042`.
    pub id: String,
    /// Requested blood type.
    pub blood_type: BloodType,
    /// Requested units.
    pub units: u8,
    /// Urgency of the need.
    pub urgency: Urgency,
    /// Dashboard-side fulfillment state.
    pub status: FulfillmentStatus,
    /// When the request was placed.
    pub requested_at: NaiveDateTime,
    /// Originating hospital, when the queue aggregates several.
    pub hospital: Option<String>,
}
