// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing or parsing domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The string is not one of the eight ABO/Rh blood type tags.
    UnknownBloodType(String),
    /// The string is not a recognized urgency level.
    UnknownUrgency(String),
    /// The string is not a recognized request status.
    UnknownRequestStatus(String),
    /// The string is not a recognized fulfillment status.
    UnknownFulfillmentStatus(String),
    /// The string is not a recognized stock level.
    UnknownStockLevel(String),
    /// The string is not a recognized donor availability.
    UnknownAvailability(String),
    /// A date or datetime literal failed to parse.
    InvalidDate {
        /// The literal that failed to parse.
        value: String,
        /// The parser's error message.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBloodType(value) => write!(f, "Unknown blood type: {value}"),
            Self::UnknownUrgency(value) => write!(f, "Unknown urgency: {value}"),
            Self::UnknownRequestStatus(value) => write!(f, "Unknown request status: {value}"),
            Self::UnknownFulfillmentStatus(value) => {
                write!(f, "Unknown fulfillment status: {value}")
            }
            Self::UnknownStockLevel(value) => write!(f, "Unknown stock level: {value}"),
            Self::UnknownAvailability(value) => write!(f, "Unknown donor availability: {value}"),
            Self::InvalidDate { value, reason } => {
                write!(f, "Failed to parse date '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
