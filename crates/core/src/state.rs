// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lifeflow_domain::FieldSet;
use serde::{Deserialize, Serialize};

/// Where this wizard instance stands with respect to submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// No submission attempted since the last reset.
    #[default]
    Idle,
    /// A gateway call is outstanding. At most one call is in flight per
    /// wizard instance; navigation is rejected while it runs.
    Submitting,
    /// The gateway accepted the submission. Terminal: fields may not be
    /// mutated until the wizard is reset.
    Succeeded,
    /// The gateway rejected the submission. The wizard remains at the
    /// final step with its fields intact so the user can retry.
    Failed {
        /// The gateway's rejection message, for an error banner.
        message: String,
    },
}

impl SubmissionStatus {
    /// Whether further field mutation is forbidden.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// The complete state of one wizard instance.
///
/// Each page owns its own `WizardState`; no state is shared across
/// instances. The state is only transitioned through [`crate::apply`] and
/// the submission driver, never mutated by arbitrary code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    /// Current step, 1-based, within `[1, form.last_step()]`.
    pub step: u8,
    /// Snapshot of every field value entered so far.
    pub fields: FieldSet,
    /// Submission lifecycle state.
    pub status: SubmissionStatus,
}

impl WizardState {
    /// Creates the initial state: step 1, no fields, idle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: 1,
            fields: FieldSet::new(),
            status: SubmissionStatus::Idle,
        }
    }

    /// Whether the wizard is locked pending a reset.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
