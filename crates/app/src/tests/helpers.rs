// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lifeflow_core::{SubmissionGateway, SubmissionOutcome, SubmissionPayload};
use lifeflow_domain::{BloodType, FieldSet, FieldValue};

/// A gateway that resolves immediately with a fixed verdict.
pub struct StubGateway {
    pub outcome: SubmissionOutcome,
}

impl StubGateway {
    pub fn accepting() -> Self {
        Self {
            outcome: SubmissionOutcome::accepted("stored"),
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            outcome: SubmissionOutcome::rejected(message),
        }
    }
}

impl SubmissionGateway for StubGateway {
    async fn submit(&self, _payload: SubmissionPayload) -> SubmissionOutcome {
        self.outcome.clone()
    }
}

/// A gateway that rejects its first call and accepts every later one.
pub struct FlakyGateway {
    rejected_once: std::sync::Mutex<bool>,
}

impl FlakyGateway {
    pub fn new() -> Self {
        Self {
            rejected_once: std::sync::Mutex::new(false),
        }
    }
}

impl SubmissionGateway for FlakyGateway {
    async fn submit(&self, _payload: SubmissionPayload) -> SubmissionOutcome {
        let mut rejected = self.rejected_once.lock().expect("lock is never poisoned");
        if *rejected {
            SubmissionOutcome::accepted("stored")
        } else {
            *rejected = true;
            SubmissionOutcome::rejected("queue full")
        }
    }
}

/// A draft that satisfies the dashboard's new-request form.
pub fn create_request_draft() -> FieldSet {
    let mut draft: FieldSet = FieldSet::new();
    draft.set("blood_type", FieldValue::BloodType(BloodType::ONegative));
    draft.set("units", FieldValue::Count(3));
    draft.set("urgency", FieldValue::Choice(String::from("Critical")));
    draft
}
