// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The eight ABO/Rh blood type tags.
///
/// Blood types are fixed domain constants. The string representation is
/// the conventional tag (`A+`, `O-`, ...) used everywhere a blood type is
/// displayed, filtered on, or selected in a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    /// A positive
    #[serde(rename = "A+")]
    APositive,
    /// A negative
    #[serde(rename = "A-")]
    ANegative,
    /// B positive
    #[serde(rename = "B+")]
    BPositive,
    /// B negative
    #[serde(rename = "B-")]
    BNegative,
    /// AB positive
    #[serde(rename = "AB+")]
    AbPositive,
    /// AB negative
    #[serde(rename = "AB-")]
    AbNegative,
    /// O positive
    #[serde(rename = "O+")]
    OPositive,
    /// O negative
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodType {
    /// All blood types in conventional display order.
    pub const ALL: [Self; 8] = [
        Self::APositive,
        Self::ANegative,
        Self::BPositive,
        Self::BNegative,
        Self::AbPositive,
        Self::AbNegative,
        Self::OPositive,
        Self::ONegative,
    ];

    /// Parses a blood type from its conventional tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of the eight tags.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "A+" => Ok(Self::APositive),
            "A-" => Ok(Self::ANegative),
            "B+" => Ok(Self::BPositive),
            "B-" => Ok(Self::BNegative),
            "AB+" => Ok(Self::AbPositive),
            "AB-" => Ok(Self::AbNegative),
            "O+" => Ok(Self::OPositive),
            "O-" => Ok(Self::ONegative),
            _ => Err(DomainError::UnknownBloodType(s.to_string())),
        }
    }

    /// Returns the conventional tag for this blood type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
        }
    }
}

impl FromStr for BloodType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for BloodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgency of a blood request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Urgency {
    /// Routine need; no time pressure beyond normal scheduling.
    #[default]
    Normal,
    /// Needed within days.
    Urgent,
    /// Needed immediately; surfaced with emergency styling.
    Critical,
}

impl Urgency {
    /// Parses an urgency level from its display string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a recognized urgency level.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Normal" => Ok(Self::Normal),
            "Urgent" => Ok(Self::Urgent),
            "Critical" => Ok(Self::Critical),
            _ => Err(DomainError::UnknownUrgency(s.to_string())),
        }
    }

    /// Returns the display string for this urgency level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Urgent => "Urgent",
            Self::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a blood request on the public requests listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Open and awaiting donors.
    Open,
    /// A donor has responded; fulfillment underway.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Fully fulfilled.
    Fulfilled,
    /// Expired without fulfillment through this channel.
    Expired,
}

impl RequestStatus {
    /// Parses a request status from its display string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a recognized status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Open" => Ok(Self::Open),
            "In Progress" => Ok(Self::InProgress),
            "Fulfilled" => Ok(Self::Fulfilled),
            "Expired" => Ok(Self::Expired),
            _ => Err(DomainError::UnknownRequestStatus(s.to_string())),
        }
    }

    /// Returns the display string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Fulfilled => "Fulfilled",
            Self::Expired => "Expired",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a request in the hospital dashboard queue.
///
/// The dashboard tracks its own lifecycle, distinct from the public
/// listing: locally submitted requests start as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FulfillmentStatus {
    /// Submitted, not yet picked up.
    Pending,
    /// Being matched against stock or donors.
    Processing,
    /// Completed.
    Fulfilled,
    /// Withdrawn by the hospital.
    Cancelled,
}

impl FulfillmentStatus {
    /// Parses a fulfillment status from its display string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a recognized status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Processing" => Ok(Self::Processing),
            "Fulfilled" => Ok(Self::Fulfilled),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::UnknownFulfillmentStatus(s.to_string())),
        }
    }

    /// Returns the display string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Fulfilled => "Fulfilled",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stock level tag attached to a per-type availability row.
///
/// Levels are assigned by the supplying bank, not derived from the unit
/// count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockLevel {
    /// Comfortable supply.
    High,
    /// Adequate supply.
    Medium,
    /// Running low.
    Low,
    /// Critically short.
    Critical,
}

impl StockLevel {
    /// Parses a stock level from its display string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a recognized level.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "High" => Ok(Self::High),
            "Medium" => Ok(Self::Medium),
            "Low" => Ok(Self::Low),
            "Critical" => Ok(Self::Critical),
            _ => Err(DomainError::UnknownStockLevel(s.to_string())),
        }
    }

    /// Returns the display string for this level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for StockLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a registered donor can currently donate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DonorAvailability {
    /// Eligible and reachable.
    Available,
    /// Inside the 56-day deferral window after a donation.
    #[serde(rename = "Recently Donated")]
    RecentlyDonated,
    /// Not currently donating.
    Unavailable,
}

impl DonorAvailability {
    /// Parses a donor availability from its display string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a recognized availability.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Available" => Ok(Self::Available),
            "Recently Donated" => Ok(Self::RecentlyDonated),
            "Unavailable" => Ok(Self::Unavailable),
            _ => Err(DomainError::UnknownAvailability(s.to_string())),
        }
    }

    /// Returns the display string for this availability.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::RecentlyDonated => "Recently Donated",
            Self::Unavailable => "Unavailable",
        }
    }
}

impl std::fmt::Display for DonorAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
