// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lifeflow_domain::ViolationSet;

/// Errors that can occur during wizard state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The current step's validation rules are violated.
    ValidationFailed(ViolationSet),
    /// Submission was requested before the final step.
    NotAtFinalStep {
        /// The step the wizard is on.
        step: u8,
        /// The final step of the form.
        last: u8,
    },
    /// A gateway call is already outstanding for this wizard instance.
    AlreadySubmitting,
    /// The wizard has succeeded; only `reset` is permitted.
    FormLocked,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed(violations) => {
                write!(f, "Validation failed: {violations}")
            }
            Self::NotAtFinalStep { step, last } => {
                write!(f, "Cannot submit from step {step}; the form has {last} steps")
            }
            Self::AlreadySubmitting => write!(f, "A submission is already in flight"),
            Self::FormLocked => {
                write!(f, "The form has been submitted; reset it to start over")
            }
        }
    }
}

impl std::error::Error for CoreError {}
