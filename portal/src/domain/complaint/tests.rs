//! Regression coverage for the complaint entity model.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rstest::{fixture, rstest};
use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::domain::{Email, ErrorCode, Role, User, UserId};

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 9, hour, minute, 0)
        .single()
        .expect("valid fixture timestamp")
}

#[fixture]
fn submitter() -> User {
    User::try_from_strings("u1", "Ada", "a@x.edu", Role::Student).expect("valid user")
}

#[fixture]
fn complaint(submitter: User) -> Complaint {
    let submission = ComplaintSubmission::new(Category::Safety, Priority::High, "Broken lock", true)
        .expect("valid submission");
    Complaint::submitted(
        ComplaintId::new("ABC123").expect("valid id"),
        &submitter,
        submission,
        at(9, 0),
    )
}

#[rstest]
#[case(Status::Submitted, "submitted", "SUBMITTED", 0)]
#[case(Status::UnderReview, "under-review", "UNDER_REVIEW", 1)]
#[case(Status::Assigned, "assigned", "ASSIGNED", 2)]
#[case(Status::Investigating, "investigating", "INVESTIGATING", 3)]
#[case(Status::Resolved, "resolved", "RESOLVED", 4)]
#[case(Status::Archived, "archived", "ARCHIVED", 5)]
fn status_wire_names_labels_and_stages(
    #[case] status: Status,
    #[case] wire: &str,
    #[case] label: &str,
    #[case] stage: usize,
) {
    assert_eq!(status.as_str(), wire);
    assert_eq!(wire.parse::<Status>(), Ok(status));
    assert_eq!(status.label(), label);
    assert_eq!(status.stage(), stage);
    assert_eq!(
        serde_json::to_value(status).expect("serialise status"),
        json!(wire)
    );
}

#[rstest]
fn every_category_parses_from_its_wire_name() {
    for category in Category::ALL {
        assert_eq!(category.as_str().parse::<Category>(), Ok(category));
    }
}

#[rstest]
#[case("Safety")]
#[case("under_review")]
#[case("")]
fn closed_sets_reject_unknown_values(#[case] raw: &str) {
    assert!(raw.parse::<Category>().is_err());
    assert!(raw.parse::<Priority>().is_err());
    assert!(raw.parse::<Status>().is_err());
}

#[rstest]
fn default_priority_is_medium() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[rstest]
#[case("", ComplaintValidationError::EmptyId)]
#[case("AB C", ComplaintValidationError::InvalidId { input: "AB C".to_owned() })]
#[case("AB/C", ComplaintValidationError::InvalidId { input: "AB/C".to_owned() })]
fn complaint_id_rejects_invalid_values(
    #[case] raw: &str,
    #[case] expected: ComplaintValidationError,
) {
    assert_eq!(ComplaintId::new(raw), Err(expected));
}

#[rstest]
fn complaint_id_accepts_legacy_base36_ids() {
    let id = ComplaintId::new("K3J9Z0QX7A").expect("legacy id is valid");
    assert_eq!(id.as_ref(), "K3J9Z0QX7A");
}

#[rstest]
fn complaint_id_from_uuid_is_upper_hex() {
    let uuid = Uuid::parse_str("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid uuid");
    let id = ComplaintId::from_uuid(uuid);
    assert_eq!(id.as_ref(), "3FA85F6457174562B3FC2C963F66AFA6");
}

#[rstest]
#[case("safety", "high", "", ComplaintValidationError::EmptyDescription)]
#[case("safety", "high", "   \n", ComplaintValidationError::EmptyDescription)]
#[case(
    "noise",
    "high",
    "Loud",
    ComplaintValidationError::UnknownCategory { input: "noise".to_owned() }
)]
#[case(
    "safety",
    "critical",
    "Loud",
    ComplaintValidationError::UnknownPriority { input: "critical".to_owned() }
)]
fn submission_form_rejects_invalid_input(
    #[case] category: &str,
    #[case] priority: &str,
    #[case] description: &str,
    #[case] expected: ComplaintValidationError,
) {
    let result = ComplaintSubmission::try_from_form(category, priority, description, true);
    assert_eq!(result, Err(expected));
}

#[rstest]
fn submission_rejects_overlong_description() {
    let description = "x".repeat(DESCRIPTION_MAX + 1);
    let result = ComplaintSubmission::new(Category::Other, Priority::Low, description, true);
    assert_eq!(
        result,
        Err(ComplaintValidationError::DescriptionTooLong {
            max: DESCRIPTION_MAX
        })
    );
}

#[rstest]
fn submission_accepts_description_at_limit() {
    let description = "é".repeat(DESCRIPTION_MAX);
    let result = ComplaintSubmission::new(Category::Other, Priority::Low, description, true);
    assert!(result.is_ok());
}

#[rstest]
fn submission_carries_unconfirmed_flag() {
    let form = ComplaintSubmission::try_from_form("academic", "low", "Late grades", false)
        .expect("shape is valid");
    assert!(!form.anonymity_confirmed());
}

#[rstest]
#[case(Some("Fixed"), Some("Fixed"))]
#[case(Some(""), None)]
#[case(Some("   "), None)]
#[case(None, None)]
fn status_update_normalises_blank_feedback(
    #[case] feedback: Option<&str>,
    #[case] expected: Option<&str>,
) {
    let update = StatusUpdate::try_from_form("resolved", feedback).expect("valid status");
    assert_eq!(update.status(), Status::Resolved);
    assert_eq!(update.feedback(), expected);
}

#[rstest]
fn status_update_maps_unknown_status_to_invalid_status() {
    let err = StatusUpdate::try_from_form("closed", None).expect_err("status must be rejected");
    assert_eq!(
        err,
        ComplaintValidationError::UnknownStatus {
            input: "closed".to_owned()
        }
    );
    assert_eq!(Error::from(err).code(), ErrorCode::InvalidStatus);
}

#[rstest]
fn other_validation_errors_map_to_validation_code() {
    let error = Error::from(ComplaintValidationError::AnonymityNotConfirmed);
    assert_eq!(error.code(), ErrorCode::ValidationError);
}

#[rstest]
fn submitted_complaint_has_initial_state(complaint: Complaint, submitter: User) {
    assert_eq!(complaint.status(), Status::Submitted);
    assert_eq!(complaint.created_at(), complaint.updated_at());
    assert_eq!(complaint.user_id(), submitter.id());
    assert_eq!(
        complaint.anonymous_email(),
        Some(&Email::new("a@x.edu").expect("valid email"))
    );
    assert!(complaint.admin_feedback().is_none());
}

#[rstest]
fn with_status_keeps_feedback_when_none_given(complaint: Complaint) {
    let resolved = complaint.with_status(Status::Resolved, Some("Fixed".to_owned()), at(10, 0));
    let archived = resolved.with_status(Status::Archived, None, at(11, 0));

    assert_eq!(archived.status(), Status::Archived);
    assert_eq!(archived.admin_feedback(), Some("Fixed"));
    assert_eq!(archived.created_at(), complaint.created_at());
    assert_eq!(archived.updated_at(), at(11, 0));
}

#[rstest]
fn with_status_never_moves_updated_at_backwards(complaint: Complaint) {
    let later = complaint.with_status(Status::Assigned, None, at(12, 0));
    let skewed = later.with_status(Status::Investigating, None, at(10, 0));
    assert_eq!(skewed.updated_at(), at(12, 0));
}

#[rstest]
fn draft_rejects_updated_before_created(complaint: Complaint) {
    let result = Complaint::new(ComplaintDraft {
        id: complaint.id().clone(),
        user_id: UserId::new("u1").expect("valid id"),
        anonymous_email: None,
        category: Category::Academic,
        priority: Priority::Low,
        status: Status::Submitted,
        description: "x".to_owned(),
        created_at: at(10, 0),
        updated_at: at(10, 0) - Duration::seconds(1),
        admin_feedback: None,
    });
    assert_eq!(result, Err(ComplaintValidationError::UpdatedBeforeCreated));
}

#[rstest]
fn serialises_with_camel_case_keys_and_omits_unset_optionals() {
    let complaint = Complaint::new(ComplaintDraft {
        id: ComplaintId::new("ABC123").expect("valid id"),
        user_id: UserId::new("u1").expect("valid id"),
        anonymous_email: None,
        category: Category::Facilities,
        priority: Priority::Urgent,
        status: Status::UnderReview,
        description: "Flooded basement".to_owned(),
        created_at: at(9, 0),
        updated_at: at(9, 30),
        admin_feedback: None,
    })
    .expect("valid complaint");

    let value = serde_json::to_value(&complaint).expect("serialise complaint");
    assert_eq!(
        value,
        json!({
            "id": "ABC123",
            "userId": "u1",
            "category": "facilities",
            "description": "Flooded basement",
            "priority": "urgent",
            "status": "under-review",
            "createdAt": "2026-03-09T09:00:00Z",
            "updatedAt": "2026-03-09T09:30:00Z"
        })
    );
}

#[rstest]
fn round_trip_preserves_sub_second_timestamps(complaint: Complaint) {
    let precise = complaint.with_status(
        Status::Resolved,
        Some("Fixed".to_owned()),
        at(10, 0) + Duration::nanoseconds(123_456_789),
    );
    let text = serde_json::to_string(&precise).expect("serialise complaint");
    let decoded: Complaint = serde_json::from_str(&text).expect("deserialise complaint");
    assert_eq!(decoded, precise);
    assert_eq!(decoded.updated_at(), precise.updated_at());
}

#[rstest]
fn deserialises_browser_style_records() {
    let decoded: Complaint = serde_json::from_value(json!({
        "id": "K3J9Z0QX7A",
        "userId": "4fzyo82mr9",
        "category": "academic",
        "description": "Unfair grading",
        "priority": "medium",
        "status": "submitted",
        "createdAt": "2024-05-01T09:30:00.000Z",
        "updatedAt": "2024-05-01T09:30:00.000Z",
        "anonymousEmail": "b@x.edu"
    }))
    .expect("browser record decodes");

    assert_eq!(decoded.id().as_ref(), "K3J9Z0QX7A");
    assert_eq!(
        decoded.anonymous_email(),
        Some(&Email::new("b@x.edu").expect("valid email"))
    );
}

#[rstest]
#[case(json!({"status": "closed"}))]
#[case(json!({"id": ""}))]
#[case(json!({"updatedAt": "2026-03-09T08:00:00Z"}))]
#[case(json!({"category": "noise"}))]
fn deserialisation_rejects_invalid_records(#[case] overrides: serde_json::Value) {
    let mut record = json!({
        "id": "ABC123",
        "userId": "u1",
        "category": "safety",
        "description": "Broken lock",
        "priority": "high",
        "status": "submitted",
        "createdAt": "2026-03-09T09:00:00Z",
        "updatedAt": "2026-03-09T09:00:00Z"
    });
    if let (Some(target), Some(patch)) = (record.as_object_mut(), overrides.as_object()) {
        for (key, value) in patch {
            target.insert(key.clone(), value.clone());
        }
    }

    let result: Result<Complaint, _> = serde_json::from_value(record);
    assert!(result.is_err());
}
