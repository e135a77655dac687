// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::field::{FieldKind, FieldSet, FieldSpec, FieldValue, FormSpec, StepSpec};

/// A two-step form: names on step 1, blood details on step 2.
pub fn create_test_form() -> FormSpec {
    FormSpec::new(
        "test_form",
        vec![
            StepSpec::new(vec![
                FieldSpec::required("first_name", FieldKind::Text),
                FieldSpec::required("last_name", FieldKind::Text),
                FieldSpec::optional("phone", FieldKind::Text),
            ]),
            StepSpec::new(vec![
                FieldSpec::required("blood_type", FieldKind::BloodType),
                FieldSpec::required("units", FieldKind::Count { min: 1, max: 20 }),
                FieldSpec::required(
                    "urgency",
                    FieldKind::Choice {
                        options: vec![
                            String::from("Normal"),
                            String::from("Urgent"),
                            String::from("Critical"),
                        ],
                    },
                ),
                FieldSpec::required("agree_to_terms", FieldKind::Flag),
            ]),
        ],
    )
}

/// Field values that satisfy step 1 of the test form.
pub fn create_step_one_fields() -> FieldSet {
    let mut fields: FieldSet = FieldSet::new();
    fields.set("first_name", FieldValue::Text(String::from("Michael")));
    fields.set("last_name", FieldValue::Text(String::from("Brown")));
    fields
}
