// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::gateway::{SubmissionGateway, SubmissionOutcome, SubmissionPayload};
use crate::state::{SubmissionStatus, WizardState};
use lifeflow_domain::{FormSpec, ViolationSet, validate_step};

/// Begins a submission, yielding the in-flight state.
///
/// Valid only at the final step with an empty violation set and no
/// submission outstanding. The returned state carries status
/// `Submitting` with step and fields unchanged.
///
/// # Errors
///
/// Returns an error, without state mutation, if:
/// - The wizard is not at the final step
/// - The final step's validation rules are violated
/// - A submission is already in flight
/// - The wizard has already succeeded
pub fn begin_submit(form: &FormSpec, state: &WizardState) -> Result<WizardState, CoreError> {
    match state.status {
        SubmissionStatus::Submitting => return Err(CoreError::AlreadySubmitting),
        SubmissionStatus::Succeeded => return Err(CoreError::FormLocked),
        SubmissionStatus::Idle | SubmissionStatus::Failed { .. } => {}
    }

    let last: u8 = form.last_step();
    if state.step < last {
        return Err(CoreError::NotAtFinalStep {
            step: state.step,
            last,
        });
    }

    let violations: ViolationSet = validate_step(form, state.step, &state.fields);
    if !violations.is_empty() {
        return Err(CoreError::ValidationFailed(violations));
    }

    let mut submitting: WizardState = state.clone();
    submitting.status = SubmissionStatus::Submitting;
    Ok(submitting)
}

/// Resolves an in-flight submission against the gateway's verdict.
///
/// Acceptance yields `Succeeded`; rejection yields `Failed` carrying the
/// gateway's message. Step and fields are unchanged either way, so a
/// failed wizard stays at the final step ready for another attempt.
#[must_use]
pub fn finish_submit(state: &WizardState, outcome: &SubmissionOutcome) -> WizardState {
    let mut resolved: WizardState = state.clone();
    resolved.status = if outcome.success {
        SubmissionStatus::Succeeded
    } else {
        SubmissionStatus::Failed {
            message: outcome.message.clone(),
        }
    };
    resolved
}

/// Submits the completed form through the gateway.
///
/// Composes [`begin_submit`], the gateway call, and [`finish_submit`].
/// The single suspension point is the gateway call; callers that need to
/// observe the in-flight state drive the two halves themselves.
///
/// # Errors
///
/// Returns an error under the same conditions as [`begin_submit`]. A
/// gateway rejection is not an error: it resolves to a `Failed` state.
pub async fn submit<G: SubmissionGateway>(
    form: &FormSpec,
    state: &WizardState,
    gateway: &G,
) -> Result<WizardState, CoreError> {
    let submitting: WizardState = begin_submit(form, state)?;
    let payload: SubmissionPayload = SubmissionPayload::new(form.name(), submitting.fields.clone());
    let outcome: SubmissionOutcome = gateway.submit(payload).await;
    Ok(finish_submit(&submitting, &outcome))
}
