// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{SubmissionStatus, WizardState};
use lifeflow_domain::{FormSpec, ViolationSet, validate_step};

/// Applies a command to a wizard state, producing the new state.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects, leaving the caller's state untouched.
///
/// # Arguments
///
/// * `form` - The form declaration this wizard instance runs
/// * `state` - The current state (immutable)
/// * `command` - The transition to apply
///
/// # Errors
///
/// Returns an error if:
/// - `Advance` is requested while the current step has violations
/// - `Advance` or `Retreat` is requested while a submission is in flight
/// - Any command other than `Reset` is requested after success
pub fn apply(
    form: &FormSpec,
    state: &WizardState,
    command: Command,
) -> Result<WizardState, CoreError> {
    match command {
        Command::Advance => {
            guard_navigation(state)?;

            let violations: ViolationSet = validate_step(form, state.step, &state.fields);
            if !violations.is_empty() {
                return Err(CoreError::ValidationFailed(violations));
            }

            // No-op past the final step.
            let mut new_state: WizardState = state.clone();
            if new_state.step < form.last_step() {
                new_state.step += 1;
            }
            Ok(new_state)
        }
        Command::Retreat => {
            guard_navigation(state)?;

            // No-op before step 1; going backward is never gated.
            let mut new_state: WizardState = state.clone();
            if new_state.step > 1 {
                new_state.step -= 1;
            }
            Ok(new_state)
        }
        Command::UpdateField { name, value } => {
            if state.is_terminal() {
                return Err(CoreError::FormLocked);
            }

            let mut new_state: WizardState = state.clone();
            new_state.fields.set(name, value);
            Ok(new_state)
        }
        Command::Reset => Ok(WizardState::new()),
    }
}

/// Navigation is rejected during an in-flight submission and after
/// success; field edits during submission remain allowed (the status is
/// not terminal) and success unlocks only through `Reset`.
fn guard_navigation(state: &WizardState) -> Result<(), CoreError> {
    match state.status {
        SubmissionStatus::Submitting => Err(CoreError::AlreadySubmitting),
        SubmissionStatus::Succeeded => Err(CoreError::FormLocked),
        SubmissionStatus::Idle | SubmissionStatus::Failed { .. } => Ok(()),
    }
}
