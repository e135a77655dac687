// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The hospital dashboard: stock table, request queue, and the
//! new-request flow.
//!
//! The queue is page-local. Submitted drafts are validated against the
//! new-request form, assigned a random `REQ-nnn` identifier, and
//! prepended with status `Pending`; nothing is persisted.

use crate::catalog;
use crate::chart::{ChartDatum, availability_dataset};
use crate::error::AppError;
use crate::forms::new_request_form;
use lifeflow_domain::{
    FieldSet, FieldValue, FormSpec, FulfillmentStatus, QueuedRequest, TypeAvailability, Urgency,
    ViolationKind, ViolationSet, validate_step,
};

/// The hospital dashboard's page state.
#[derive(Debug, Clone)]
pub struct HospitalDashboard {
    form: FormSpec,
    stock: Vec<TypeAvailability>,
    queue: Vec<QueuedRequest>,
}

impl HospitalDashboard {
    /// Creates a dashboard seeded with the catalog's stock and queue.
    ///
    /// # Errors
    ///
    /// Returns an error if a catalog seed literal fails to parse.
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            form: new_request_form(),
            stock: catalog::hospital_stock(),
            queue: catalog::hospital_queue()?,
        })
    }

    /// The stock table, one row per blood type.
    #[must_use]
    pub fn stock(&self) -> &[TypeAvailability] {
        &self.stock
    }

    /// The request queue, newest submissions first.
    #[must_use]
    pub fn queue(&self) -> &[QueuedRequest] {
        &self.queue
    }

    /// The chart dataset for the stock table.
    #[must_use]
    pub fn chart_data(&self) -> Vec<ChartDatum> {
        availability_dataset(&self.stock)
    }

    /// Validates a request draft and prepends it to the queue.
    ///
    /// The new request gets a random `REQ-nnn` identifier, the current
    /// time, and status `Pending`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidDraft`] if the draft fails the
    /// new-request form's validation.
    pub fn submit_request(&mut self, draft: &FieldSet) -> Result<QueuedRequest, AppError> {
        let violations: ViolationSet = validate_step(&self.form, 1, draft);
        if !violations.is_empty() {
            tracing::warn!(%violations, "Rejected request draft");
            return Err(AppError::InvalidDraft { violations });
        }

        let (blood_type, units, urgency) = match (
            draft.get("blood_type"),
            draft.get("units"),
            draft.get("urgency"),
        ) {
            (
                Some(FieldValue::BloodType(blood_type)),
                Some(FieldValue::Count(units)),
                Some(FieldValue::Choice(label)),
            ) => (*blood_type, *units, Urgency::parse(label)?),
            _ => {
                return Err(AppError::InvalidDraft {
                    violations: draft_shape_violations(draft),
                });
            }
        };

        let request = QueuedRequest {
            id: format!("REQ-{:03}", rand::random::<u16>() % 1000),
            blood_type,
            units,
            urgency,
            status: FulfillmentStatus::Pending,
            requested_at: chrono::Utc::now().naive_utc(),
            hospital: None,
        };
        tracing::info!(
            id = %request.id,
            blood_type = %request.blood_type,
            units = request.units,
            urgency = %request.urgency,
            "Queued new blood request"
        );
        self.queue.insert(0, request.clone());
        Ok(request)
    }
}

/// Violations for a draft whose fields passed validation but do not
/// carry the kinds the extraction expects.
fn draft_shape_violations(draft: &FieldSet) -> ViolationSet {
    [
        ("blood_type", "blood type"),
        ("units", "count"),
        ("urgency", "choice"),
    ]
    .into_iter()
    .filter(|(name, _)| draft.get(name).is_none())
    .map(|(name, expected)| lifeflow_domain::Violation {
        field: name.to_owned(),
        kind: ViolationKind::TypeMismatch {
            expected: expected.to_owned(),
        },
    })
    .collect()
}
