// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod bank;
mod community;
mod dates;
mod donor;
mod error;
mod field;
mod query;
mod request;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use bank::{BloodBank, TypeAvailability};
pub use community::{CommunityEvent, CommunityPost, DonorStory};
pub use dates::{parse_date, parse_datetime};
pub use donor::DonorProfile;
pub use error::DomainError;
pub use field::{FieldKind, FieldSet, FieldSpec, FieldValue, FormSpec, StepSpec};
pub use query::{BankQuery, CommunityQuery, DonorQuery, RequestQuery};
pub use request::{BloodRequest, QueuedRequest};
pub use types::{
    BloodType, DonorAvailability, FulfillmentStatus, RequestStatus, StockLevel, Urgency,
};
pub use validation::{Violation, ViolationKind, ViolationSet, validate_step};
