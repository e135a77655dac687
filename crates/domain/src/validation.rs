// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::field::{FieldKind, FieldSet, FieldValue, FormSpec};
use serde::{Deserialize, Serialize};

/// The constraint a field failed to meet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// A required field is absent or blank.
    MissingRequired,
    /// The value's shape does not match the field's declared kind.
    TypeMismatch {
        /// The kind the declaration expects.
        expected: String,
    },
    /// A count is outside its inclusive bounds.
    OutOfRange {
        /// Inclusive lower bound.
        min: u8,
        /// Inclusive upper bound.
        max: u8,
    },
    /// A choice value is not a member of the permitted label set.
    UnknownChoice,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired => write!(f, "required"),
            Self::TypeMismatch { expected } => write!(f, "expected {expected}"),
            Self::OutOfRange { min, max } => write!(f, "must be between {min} and {max}"),
            Self::UnknownChoice => write!(f, "not a permitted option"),
        }
    }
}

/// One unmet constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The field that failed.
    pub field: String,
    /// What it failed.
    pub kind: ViolationKind,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// The violations found when validating one step.
///
/// A step may advance if and only if its violation set is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationSet {
    violations: Vec<Violation>,
}

impl ViolationSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Whether the step may advance.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Iterates in field-declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    /// Whether any violation names the given field.
    #[must_use]
    pub fn contains_field(&self, name: &str) -> bool {
        self.violations.iter().any(|v| v.field == name)
    }

    fn push(&mut self, field: &str, kind: ViolationKind) {
        self.violations.push(Violation {
            field: field.to_string(),
            kind,
        });
    }
}

impl FromIterator<Violation> for ViolationSet {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for ViolationSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first: bool = true;
        for violation in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
            first = false;
        }
        Ok(())
    }
}

/// Validates one step of a form against the current field values.
///
/// Rules are per-field and declarative: required presence, type
/// conformance, numeric bounds, and choice membership. Field set entries
/// not declared by the step are ignored, and there are no cross-field
/// rules. A step index with no declaration yields an empty set.
#[must_use]
pub fn validate_step(form: &FormSpec, step: u8, fields: &FieldSet) -> ViolationSet {
    let mut violations: ViolationSet = ViolationSet::new();
    let Some(step_spec) = form.step(step) else {
        return violations;
    };

    for spec in &step_spec.fields {
        let Some(value) = fields.get(&spec.name) else {
            if spec.required {
                violations.push(&spec.name, ViolationKind::MissingRequired);
            }
            continue;
        };

        if !spec.kind.admits(value) {
            violations.push(
                &spec.name,
                ViolationKind::TypeMismatch {
                    expected: spec.kind.name().to_owned(),
                },
            );
            continue;
        }

        match (&spec.kind, value) {
            (FieldKind::Count { min, max }, FieldValue::Count(n)) => {
                if !(*min..=*max).contains(n) {
                    violations.push(
                        &spec.name,
                        ViolationKind::OutOfRange {
                            min: *min,
                            max: *max,
                        },
                    );
                }
            }
            (FieldKind::Choice { options }, FieldValue::Choice(label)) => {
                if label.is_empty() {
                    if spec.required {
                        violations.push(&spec.name, ViolationKind::MissingRequired);
                    }
                } else if !options.iter().any(|o| o == label) {
                    violations.push(&spec.name, ViolationKind::UnknownChoice);
                }
            }
            (FieldKind::Flag, FieldValue::Flag(checked)) => {
                // A required checkbox must be checked (consent boxes).
                if spec.required && !checked {
                    violations.push(&spec.name, ViolationKind::MissingRequired);
                }
            }
            _ => {
                if spec.required && value.is_blank() {
                    violations.push(&spec.name, ViolationKind::MissingRequired);
                }
            }
        }
    }

    violations
}
