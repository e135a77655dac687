// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::gateway::{SubmissionGateway, SubmissionOutcome, SubmissionPayload};
use crate::state::WizardState;
use lifeflow_domain::{
    BloodType, FieldKind, FieldSet, FieldSpec, FieldValue, FormSpec, StepSpec, StockLevel,
};

/// A three-step form shaped like the donor registration wizard.
pub fn create_test_form() -> FormSpec {
    FormSpec::new(
        "donor_registration",
        vec![
            StepSpec::new(vec![
                FieldSpec::required("first_name", FieldKind::Text),
                FieldSpec::required("last_name", FieldKind::Text),
            ]),
            StepSpec::new(vec![
                FieldSpec::required("blood_type", FieldKind::BloodType),
                FieldSpec::optional("medical_conditions", FieldKind::Text),
            ]),
            StepSpec::new(vec![FieldSpec::required("agree_to_terms", FieldKind::Flag)]),
        ],
    )
}

/// A state at the final step of the test form with every step satisfied.
pub fn create_completed_state() -> WizardState {
    let mut state: WizardState = WizardState::new();
    state.step = 3;
    state.fields = create_completed_fields();
    state
}

pub fn create_completed_fields() -> FieldSet {
    let mut fields: FieldSet = FieldSet::new();
    fields.set("first_name", FieldValue::Text(String::from("Sarah")));
    fields.set("last_name", FieldValue::Text(String::from("Wilson")));
    fields.set("blood_type", FieldValue::BloodType(BloodType::ONegative));
    fields.set("agree_to_terms", FieldValue::Flag(true));
    fields
}

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

/// A gateway that records the payload it was handed.
pub struct RecordingGateway {
    pub seen: std::sync::Mutex<Vec<SubmissionPayload>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self {
            seen: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl SubmissionGateway for RecordingGateway {
    async fn submit(&self, payload: SubmissionPayload) -> SubmissionOutcome {
        self.seen.lock().unwrap().push(payload);
        SubmissionOutcome::accepted("recorded")
    }
}

/// Availability rows for a bank fixture.
pub fn availability_row(
    blood_type: BloodType,
    units: u32,
    level: StockLevel,
) -> lifeflow_domain::TypeAvailability {
    lifeflow_domain::TypeAvailability::new(blood_type, units, level)
}
