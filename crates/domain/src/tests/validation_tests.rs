// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::field::{FieldSet, FieldValue, FormSpec};
use crate::tests::helpers::{create_step_one_fields, create_test_form};
use crate::types::BloodType;
use crate::validation::{ViolationKind, ViolationSet, validate_step};

#[test]
fn test_complete_step_has_no_violations() {
    let form: FormSpec = create_test_form();
    let fields: FieldSet = create_step_one_fields();

    let violations: ViolationSet = validate_step(&form, 1, &fields);
    assert!(violations.is_empty());
}

#[test]
fn test_missing_required_field_is_reported() {
    let form: FormSpec = create_test_form();
    let mut fields: FieldSet = FieldSet::new();
    fields.set("first_name", FieldValue::Text(String::from("Michael")));

    let violations: ViolationSet = validate_step(&form, 1, &fields);
    assert_eq!(violations.len(), 1);
    assert!(violations.contains_field("last_name"));
}

#[test]
fn test_blank_text_counts_as_missing() {
    let form: FormSpec = create_test_form();
    let mut fields: FieldSet = create_step_one_fields();
    fields.set("first_name", FieldValue::Text(String::from("  ")));

    let violations: ViolationSet = validate_step(&form, 1, &fields);
    assert!(violations.contains_field("first_name"));
    let kind: &ViolationKind = &violations.iter().next().unwrap().kind;
    assert_eq!(*kind, ViolationKind::MissingRequired);
}

#[test]
fn test_optional_field_may_be_absent() {
    let form: FormSpec = create_test_form();
    let fields: FieldSet = create_step_one_fields();

    // "phone" is declared optional and not set.
    let violations: ViolationSet = validate_step(&form, 1, &fields);
    assert!(violations.is_empty());
}

#[test]
fn test_type_mismatch_is_reported() {
    let form: FormSpec = create_test_form();
    let mut fields: FieldSet = create_step_one_fields();
    fields.set("first_name", FieldValue::Flag(true));

    let violations: ViolationSet = validate_step(&form, 1, &fields);
    assert_eq!(
        violations.iter().next().unwrap().kind,
        ViolationKind::TypeMismatch {
            expected: String::from("text"),
        }
    );
}

#[test]
fn test_count_out_of_range_is_reported() {
    let form: FormSpec = create_test_form();
    let mut fields: FieldSet = step_two_fields();
    fields.set("units", FieldValue::Count(21));

    let violations: ViolationSet = validate_step(&form, 2, &fields);
    assert_eq!(
        violations.iter().next().unwrap().kind,
        ViolationKind::OutOfRange { min: 1, max: 20 }
    );
}

#[test]
fn test_count_bounds_are_inclusive() {
    let form: FormSpec = create_test_form();
    let mut fields: FieldSet = step_two_fields();

    fields.set("units", FieldValue::Count(1));
    assert!(validate_step(&form, 2, &fields).is_empty());

    fields.set("units", FieldValue::Count(20));
    assert!(validate_step(&form, 2, &fields).is_empty());
}

#[test]
fn test_unknown_choice_is_reported() {
    let form: FormSpec = create_test_form();
    let mut fields: FieldSet = step_two_fields();
    fields.set("urgency", FieldValue::Choice(String::from("Immediate")));

    let violations: ViolationSet = validate_step(&form, 2, &fields);
    assert_eq!(
        violations.iter().next().unwrap().kind,
        ViolationKind::UnknownChoice
    );
}

#[test]
fn test_empty_choice_on_required_select_counts_as_missing() {
    let form: FormSpec = create_test_form();
    let mut fields: FieldSet = step_two_fields();
    fields.set("urgency", FieldValue::Choice(String::new()));

    let violations: ViolationSet = validate_step(&form, 2, &fields);
    assert_eq!(
        violations.iter().next().unwrap().kind,
        ViolationKind::MissingRequired
    );
}

#[test]
fn test_required_flag_must_be_checked() {
    let form: FormSpec = create_test_form();
    let mut fields: FieldSet = step_two_fields();
    fields.set("agree_to_terms", FieldValue::Flag(false));

    let violations: ViolationSet = validate_step(&form, 2, &fields);
    assert!(violations.contains_field("agree_to_terms"));
}

#[test]
fn test_undeclared_fields_are_ignored() {
    let form: FormSpec = create_test_form();
    let mut fields: FieldSet = create_step_one_fields();
    fields.set("not_in_any_step", FieldValue::Count(200));

    let violations: ViolationSet = validate_step(&form, 1, &fields);
    assert!(violations.is_empty());
}

#[test]
fn test_validation_only_sees_the_given_step() {
    let form: FormSpec = create_test_form();
    let fields: FieldSet = create_step_one_fields();

    // Step 2 requirements are all unmet, but step 1 validates clean.
    assert!(validate_step(&form, 1, &fields).is_empty());
    assert!(!validate_step(&form, 2, &fields).is_empty());
}

#[test]
fn test_violations_round_trip_through_json() {
    let form: FormSpec = create_test_form();
    let mut fields: FieldSet = step_two_fields();
    fields.set("blood_type", FieldValue::Text(String::from("O-")));
    fields.set("units", FieldValue::Count(21));

    let violations: ViolationSet = validate_step(&form, 2, &fields);
    assert_eq!(violations.len(), 2);

    let json: String = serde_json::to_string(&violations).unwrap();
    let restored: ViolationSet = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, violations);
}

#[test]
fn test_out_of_range_step_yields_empty_set() {
    let form: FormSpec = create_test_form();
    let fields: FieldSet = FieldSet::new();

    assert!(validate_step(&form, 0, &fields).is_empty());
    assert!(validate_step(&form, 9, &fields).is_empty());
}

fn step_two_fields() -> FieldSet {
    let mut fields: FieldSet = FieldSet::new();
    fields.set("blood_type", FieldValue::BloodType(BloodType::ONegative));
    fields.set("units", FieldValue::Count(3));
    fields.set("urgency", FieldValue::Choice(String::from("Urgent")));
    fields.set("agree_to_terms", FieldValue::Flag(true));
    fields
}
