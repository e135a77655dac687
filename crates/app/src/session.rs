// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A page's live wizard session.
//!
//! [`FormSession`] binds a form definition, the current wizard state,
//! and a submission gateway. Pages drive it with the command methods;
//! the state machine itself decides what each command is allowed to do.

use crate::error::AppError;
use lifeflow_core::{Command, SubmissionGateway, SubmissionStatus, WizardState, apply};
use lifeflow_domain::{FieldValue, FormSpec};

/// One form's wizard session.
#[derive(Debug, Clone)]
pub struct FormSession<G> {
    form: FormSpec,
    state: WizardState,
    gateway: G,
}

impl<G: SubmissionGateway> FormSession<G> {
    /// Opens a session at step 1 with no fields entered.
    #[must_use]
    pub fn new(form: FormSpec, gateway: G) -> Self {
        Self {
            form,
            state: WizardState::new(),
            gateway,
        }
    }

    /// The form this session is bound to.
    #[must_use]
    pub const fn form(&self) -> &FormSpec {
        &self.form
    }

    /// The current wizard state.
    #[must_use]
    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    /// Moves to the next step if the current step validates.
    ///
    /// # Errors
    ///
    /// Returns an error if the current step has violations or the
    /// session is submitting or already succeeded.
    pub fn advance(&mut self) -> Result<(), AppError> {
        self.dispatch(Command::Advance)
    }

    /// Moves back one step without validating.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is submitting or already
    /// succeeded.
    pub fn retreat(&mut self) -> Result<(), AppError> {
        self.dispatch(Command::Retreat)
    }

    /// Sets one field's value, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has already succeeded.
    pub fn update_field(
        &mut self,
        name: impl Into<String>,
        value: FieldValue,
    ) -> Result<(), AppError> {
        self.dispatch(Command::UpdateField {
            name: name.into(),
            value,
        })
    }

    /// Returns the session to step 1 with no fields entered.
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` keeps the command methods uniform.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.dispatch(Command::Reset)
    }

    /// Submits the completed form through the gateway.
    ///
    /// Resolves to `Succeeded` or `Failed`, as the gateway decides.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not at its final step, the
    /// final step has violations, or a submission is already under way.
    pub async fn submit(&mut self) -> Result<SubmissionStatus, AppError> {
        let next: WizardState = lifeflow_core::submit(&self.form, &self.state, &self.gateway)
            .await
            .inspect_err(|error| {
                tracing::warn!(form = %self.form.name(), %error, "Submission refused");
            })?;
        tracing::info!(
            form = %self.form.name(),
            status = ?next.status,
            "Submission resolved"
        );
        self.state = next;
        Ok(self.state.status.clone())
    }

    fn dispatch(&mut self, command: Command) -> Result<(), AppError> {
        let next: WizardState =
            apply(&self.form, &self.state, command).inspect_err(|error| {
                tracing::debug!(form = %self.form.name(), %error, "Command refused");
            })?;
        self.state = next;
        Ok(())
    }
}
