// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The boundary call that transmits a completed form.
//!
//! The gateway is a pluggable dependency: production wiring does not
//! exist in this system, so the shipped implementation is a fixed-delay
//! stand-in that always accepts. Tests substitute deterministic stubs.

use lifeflow_domain::FieldSet;
use serde::Serialize;
use std::time::Duration;

/// The completed form handed to the gateway.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    /// The form's name, from its declaration.
    pub form: String,
    /// Every field value at submission time, in rendering order.
    pub fields: FieldSet,
}

impl SubmissionPayload {
    /// Creates a payload.
    #[must_use]
    pub fn new(form: impl Into<String>, fields: FieldSet) -> Self {
        Self {
            form: form.into(),
            fields,
        }
    }
}

/// The gateway's verdict on a submission.
///
/// One attempt, no timeout, no retry, no cancellation: transport-level
/// failure is not modeled, only acceptance or rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    /// Whether the submission was accepted.
    pub success: bool,
    /// A human-readable message for the success or error banner.
    pub message: String,
}

impl SubmissionOutcome {
    /// An accepting outcome.
    #[must_use]
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A rejecting outcome.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// An external collaborator that receives completed forms.
pub trait SubmissionGateway {
    /// Transmits a completed form and resolves to the gateway's verdict.
    fn submit(&self, payload: SubmissionPayload) -> impl Future<Output = SubmissionOutcome> + Send;
}

/// The stand-in gateway: resolves successfully after a fixed delay.
///
/// This mirrors the absent backend; it must stay substitutable, not
/// become load-bearing behavior.
#[derive(Debug, Clone)]
pub struct FixedDelayGateway {
    delay: Duration,
}

impl FixedDelayGateway {
    /// Creates a gateway that accepts every payload after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl SubmissionGateway for FixedDelayGateway {
    async fn submit(&self, payload: SubmissionPayload) -> SubmissionOutcome {
        tokio::time::sleep(self.delay).await;
        SubmissionOutcome::accepted(format!("{} submitted successfully", payload.form))
    }
}
