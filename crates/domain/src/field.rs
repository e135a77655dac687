// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::BloodType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The current value of a single form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Free text (text inputs and text areas).
    Text(String),
    /// An ISO calendar date, no time component.
    Date(NaiveDate),
    /// One of the eight blood type tags.
    BloodType(BloodType),
    /// A selection from a fixed label set other than blood types.
    Choice(String),
    /// A checkbox.
    Flag(bool),
    /// A bounded integer (e.g. requested units).
    Count(u8),
}

impl FieldValue {
    /// Whether this value carries no user input.
    ///
    /// Empty text and the empty select sentinel count as blank; an
    /// unchecked flag does not (the checkbox state itself is input).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Choice(s) => s.is_empty(),
            _ => false,
        }
    }
}

/// An ordered mapping from field name to current value.
///
/// Insertion order is preserved and defines rendering/tab order. Setting
/// an existing name overwrites the value in place without moving it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSet {
    entries: Vec<(String, FieldValue)>,
}

impl FieldSet {
    /// Creates an empty field set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets a field, overwriting in place if the name already exists.
    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        let name: String = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Returns the current value of a field, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Number of fields currently set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no fields are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// The declared shape of a field, used by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// ISO calendar date.
    Date,
    /// Blood type select.
    BloodType,
    /// Select from a fixed label set.
    Choice {
        /// The permitted labels.
        options: Vec<String>,
    },
    /// Checkbox.
    Flag,
    /// Bounded integer with inclusive bounds.
    Count {
        /// Inclusive lower bound.
        min: u8,
        /// Inclusive upper bound.
        max: u8,
    },
}

impl FieldKind {
    /// Returns the name of this kind, for violation messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::BloodType => "blood type",
            Self::Choice { .. } => "choice",
            Self::Flag => "flag",
            Self::Count { .. } => "count",
        }
    }

    /// Whether a value has the shape this kind declares.
    #[must_use]
    pub const fn admits(&self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (Self::Text, FieldValue::Text(_))
                | (Self::Date, FieldValue::Date(_))
                | (Self::BloodType, FieldValue::BloodType(_))
                | (Self::Choice { .. }, FieldValue::Choice(_))
                | (Self::Flag, FieldValue::Flag(_))
                | (Self::Count { .. }, FieldValue::Count(_))
        )
    }
}

/// Declaration of a single named field within a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// The field name, unique within its form.
    pub name: String,
    /// The declared shape.
    pub kind: FieldKind,
    /// Whether a blank value blocks step advancement.
    pub required: bool,
}

impl FieldSpec {
    /// Declares a required field.
    #[must_use]
    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
        }
    }

    /// Declares an optional field.
    #[must_use]
    pub fn optional(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
        }
    }
}

/// The ordered fields of one wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSpec {
    /// Fields in rendering order.
    pub fields: Vec<FieldSpec>,
}

impl StepSpec {
    /// Creates a step from its fields.
    #[must_use]
    pub const fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }
}

/// A complete multi-step form declaration.
///
/// Steps are numbered from 1; a single-step form is a one-step wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSpec {
    name: String,
    steps: Vec<StepSpec>,
}

impl FormSpec {
    /// Creates a form from its name and ordered steps.
    ///
    /// # Arguments
    ///
    /// * `name` - Identifies the form in submission payloads
    /// * `steps` - At least one step, in order
    #[must_use]
    pub fn new(name: impl Into<String>, steps: Vec<StepSpec>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Returns the form name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the 1-based index of the final step.
    #[must_use]
    pub fn last_step(&self) -> u8 {
        u8::try_from(self.steps.len()).unwrap_or(u8::MAX)
    }

    /// Returns the declaration for a 1-based step index, if in range.
    #[must_use]
    pub fn step(&self, step: u8) -> Option<&StepSpec> {
        if step == 0 {
            return None;
        }
        self.steps.get(usize::from(step) - 1)
    }
}
