// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::AppError;
use crate::forms;
use crate::session::FormSession;
use crate::tests::helpers::{FlakyGateway, StubGateway};
use lifeflow_core::{CoreError, SubmissionGateway, SubmissionStatus};
use lifeflow_domain::{BloodType, FieldValue};

fn fill_contact_form<G: SubmissionGateway>(session: &mut FormSession<G>) {
    session
        .update_field("name", FieldValue::Text(String::from("Ada Lovelace")))
        .expect("idle session accepts updates");
    session
        .update_field("email", FieldValue::Text(String::from("ada@example.com")))
        .expect("idle session accepts updates");
    session
        .update_field("subject", FieldValue::Choice(String::from("Other")))
        .expect("idle session accepts updates");
    session
        .update_field("message", FieldValue::Text(String::from("Hello there")))
        .expect("idle session accepts updates");
}

#[test]
fn test_advance_is_blocked_until_the_step_validates() {
    let mut session: FormSession<StubGateway> =
        FormSession::new(forms::donor_registration(), StubGateway::accepting());

    let refused = session.advance();
    assert!(matches!(
        refused,
        Err(AppError::Form(CoreError::ValidationFailed(_)))
    ));
    assert_eq!(session.state().step, 1);
}

#[test]
fn test_retreat_is_a_noop_at_step_one() {
    let mut session: FormSession<StubGateway> =
        FormSession::new(forms::donor_registration(), StubGateway::accepting());

    session.retreat().expect("retreat is never gated");
    assert_eq!(session.state().step, 1);
}

#[test]
fn test_reset_clears_fields_and_returns_to_step_one() {
    let mut session: FormSession<StubGateway> =
        FormSession::new(forms::contact_form(), StubGateway::accepting());
    fill_contact_form(&mut session);

    session.reset().expect("reset is always allowed");
    assert_eq!(session.state().step, 1);
    assert!(session.state().fields.is_empty());
    assert_eq!(session.state().status, SubmissionStatus::Idle);
}

#[tokio::test]
async fn test_single_step_form_submits_from_step_one() {
    let mut session: FormSession<StubGateway> =
        FormSession::new(forms::contact_form(), StubGateway::accepting());
    fill_contact_form(&mut session);

    let status: SubmissionStatus = session.submit().await.expect("completed form submits");
    assert_eq!(status, SubmissionStatus::Succeeded);
    assert!(session.state().is_terminal());
}

#[tokio::test]
async fn test_gateway_rejection_surfaces_as_failed_status() {
    let mut session: FormSession<StubGateway> =
        FormSession::new(forms::contact_form(), StubGateway::rejecting("queue full"));
    fill_contact_form(&mut session);

    let status: SubmissionStatus = session.submit().await.expect("rejection is not an error");
    assert_eq!(
        status,
        SubmissionStatus::Failed {
            message: String::from("queue full"),
        }
    );
    assert!(!session.state().is_terminal());
}

#[tokio::test]
async fn test_failed_session_may_resubmit() {
    let mut session: FormSession<FlakyGateway> =
        FormSession::new(forms::contact_form(), FlakyGateway::new());
    fill_contact_form(&mut session);

    let first: SubmissionStatus = session.submit().await.expect("rejection is not an error");
    assert!(matches!(first, SubmissionStatus::Failed { .. }));

    let second: SubmissionStatus = session.submit().await.expect("retry submits");
    assert_eq!(second, SubmissionStatus::Succeeded);
}

#[tokio::test]
async fn test_succeeded_session_refuses_further_edits() {
    let mut session: FormSession<StubGateway> =
        FormSession::new(forms::contact_form(), StubGateway::accepting());
    fill_contact_form(&mut session);
    session.submit().await.expect("completed form submits");

    let refused = session.update_field("name", FieldValue::Text(String::from("Eve")));
    assert!(matches!(refused, Err(AppError::Form(CoreError::FormLocked))));
}

#[test]
fn test_multi_step_session_walks_the_donor_wizard() {
    let mut session: FormSession<StubGateway> =
        FormSession::new(forms::donor_registration(), StubGateway::accepting());

    for (name, value) in [
        ("first_name", FieldValue::Text(String::from("Michael"))),
        ("last_name", FieldValue::Text(String::from("Brown"))),
        ("email", FieldValue::Text(String::from("mb@example.com"))),
        ("phone", FieldValue::Text(String::from("(555) 111-2222"))),
        ("address", FieldValue::Text(String::from("12 Elm St"))),
        ("city", FieldValue::Text(String::from("Healthcare City"))),
        ("state", FieldValue::Text(String::from("HC"))),
        ("zip_code", FieldValue::Text(String::from("12345"))),
    ] {
        session
            .update_field(name, value)
            .expect("idle session accepts updates");
    }
    session
        .update_field(
            "date_of_birth",
            FieldValue::Date(
                chrono::NaiveDate::from_ymd_opt(1990, 6, 1).expect("literal date is valid"),
            ),
        )
        .expect("idle session accepts updates");

    session.advance().expect("step 1 is complete");
    assert_eq!(session.state().step, 2);

    session
        .update_field("blood_type", FieldValue::BloodType(BloodType::ONegative))
        .expect("idle session accepts updates");
    session.advance().expect("step 2 is complete");
    assert_eq!(session.state().step, 3);

    session.retreat().expect("retreat is never gated");
    assert_eq!(session.state().step, 2);
}
