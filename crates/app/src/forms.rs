// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Form definitions, one builder per page form.
//!
//! Each builder returns the complete [`FormSpec`] the page binds its
//! wizard to. Field names match the page's input names; validation is
//! driven entirely by the declaration, no page holds its own rules.

use lifeflow_domain::{FieldKind, FieldSpec, FormSpec, StepSpec, Urgency};

fn urgency_options() -> Vec<String> {
    [Urgency::Normal, Urgency::Urgent, Urgency::Critical]
        .iter()
        .map(|u| u.as_str().to_owned())
        .collect()
}

fn subject_options() -> Vec<String> {
    [
        "Donation Inquiry",
        "Blood Request",
        "Technical Support",
        "Partnership Opportunity",
        "Other",
    ]
    .iter()
    .map(|s| (*s).to_owned())
    .collect()
}

/// The three-step donor registration wizard on the donate page.
///
/// Step 1 collects identity and address, step 2 donation history, and
/// step 3 the terms consent.
#[must_use]
pub fn donor_registration() -> FormSpec {
    FormSpec::new(
        "donor_registration",
        vec![
            StepSpec::new(vec![
                FieldSpec::required("first_name", FieldKind::Text),
                FieldSpec::required("last_name", FieldKind::Text),
                FieldSpec::required("email", FieldKind::Text),
                FieldSpec::required("phone", FieldKind::Text),
                FieldSpec::required("date_of_birth", FieldKind::Date),
                FieldSpec::required("address", FieldKind::Text),
                FieldSpec::required("city", FieldKind::Text),
                FieldSpec::required("state", FieldKind::Text),
                FieldSpec::required("zip_code", FieldKind::Text),
            ]),
            StepSpec::new(vec![
                FieldSpec::required("blood_type", FieldKind::BloodType),
                FieldSpec::optional("last_donation", FieldKind::Date),
                FieldSpec::optional("medical_conditions", FieldKind::Text),
            ]),
            StepSpec::new(vec![FieldSpec::required(
                "agree_to_terms",
                FieldKind::Flag,
            )]),
        ],
    )
}

/// The three-step hospital registration wizard on the register page.
#[must_use]
pub fn hospital_registration() -> FormSpec {
    FormSpec::new(
        "hospital_registration",
        vec![
            StepSpec::new(vec![
                FieldSpec::required("email", FieldKind::Text),
                FieldSpec::required("password", FieldKind::Text),
                FieldSpec::required("confirm_password", FieldKind::Text),
            ]),
            StepSpec::new(vec![
                FieldSpec::required("hospital_name", FieldKind::Text),
                FieldSpec::required("license_number", FieldKind::Text),
                FieldSpec::required("contact_person", FieldKind::Text),
                FieldSpec::required("hospital_phone", FieldKind::Text),
            ]),
            StepSpec::new(vec![
                FieldSpec::required("hospital_address", FieldKind::Text),
                FieldSpec::required("hospital_city", FieldKind::Text),
                FieldSpec::required("hospital_state", FieldKind::Text),
                FieldSpec::required("hospital_zip_code", FieldKind::Text),
                FieldSpec::required("agree_to_terms", FieldKind::Flag),
            ]),
        ],
    )
}

/// The single-step contact form.
#[must_use]
pub fn contact_form() -> FormSpec {
    FormSpec::new(
        "contact",
        vec![StepSpec::new(vec![
            FieldSpec::required("name", FieldKind::Text),
            FieldSpec::required("email", FieldKind::Text),
            FieldSpec::optional("phone", FieldKind::Text),
            FieldSpec::required(
                "subject",
                FieldKind::Choice {
                    options: subject_options(),
                },
            ),
            FieldSpec::required("message", FieldKind::Text),
        ])],
    )
}

/// The single-step login form.
#[must_use]
pub fn login_form() -> FormSpec {
    FormSpec::new(
        "login",
        vec![StepSpec::new(vec![
            FieldSpec::required("email", FieldKind::Text),
            FieldSpec::required("password", FieldKind::Text),
            FieldSpec::optional("remember_me", FieldKind::Flag),
        ])],
    )
}

/// The dashboard's new-request form. Units are capped at 20 per request.
#[must_use]
pub fn new_request_form() -> FormSpec {
    FormSpec::new(
        "new_request",
        vec![StepSpec::new(vec![
            FieldSpec::required("blood_type", FieldKind::BloodType),
            FieldSpec::required("units", FieldKind::Count { min: 1, max: 20 }),
            FieldSpec::required(
                "urgency",
                FieldKind::Choice {
                    options: urgency_options(),
                },
            ),
        ])],
    )
}
