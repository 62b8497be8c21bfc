//! Tests for CLI parsing, dispatch, and rendering.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::Value;
use tempfile::TempDir;

use super::*;
use crate::domain::ports::{FormIdentityProvider, UuidComplaintIdGenerator};
use crate::domain::{Complaint, Status, TransitionTable};
use crate::outbound::persistence::InMemoryComplaintRepository;

type Session = SessionContext<FormIdentityProvider, InMemoryComplaintRepository>;

#[fixture]
fn session() -> Session {
    let store =
        ComplaintStore::open(InMemoryComplaintRepository::new()).expect("empty store opens");
    let engine = LifecycleEngine::new(
        TransitionTable::permissive(),
        Arc::new(DefaultClock),
        Arc::new(UuidComplaintIdGenerator),
    );
    SessionContext::new(FormIdentityProvider, engine, store)
}

fn parse(email: &str, role: &str, command: &[&str]) -> Cli {
    let mut args = vec![
        "grievance-portal",
        "--name",
        "Fixture",
        "--email",
        email,
        "--password",
        "pw",
        "--role",
        role,
    ];
    args.extend_from_slice(command);
    Cli::try_parse_from(args).expect("arguments parse")
}

fn submit(session: &mut Session, email: &str) -> ComplaintView {
    let cli = parse(
        email,
        "student",
        &[
            "submit",
            "--category",
            "safety",
            "--priority",
            "high",
            "--description",
            "Broken lock",
            "--confirm-anonymity",
        ],
    );
    match execute(session, &cli).expect("submit succeeds") {
        Outcome::Submitted(view) => view,
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[rstest]
fn priority_defaults_to_medium() {
    let cli = parse(
        "a@x.edu",
        "student",
        &["submit", "--category", "other", "--description", "Noise"],
    );
    match cli.command {
        Command::Submit {
            priority,
            confirm_anonymity,
            ..
        } => {
            assert_eq!(priority, "medium");
            assert!(!confirm_anonymity);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[rstest]
fn submission_without_confirmation_is_a_validation_error(mut session: Session) {
    let cli = parse(
        "a@x.edu",
        "student",
        &["submit", "--category", "other", "--description", "Noise"],
    );
    let err = execute(&mut session, &cli).expect_err("confirmation missing");
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[rstest]
fn member_lists_only_own_complaints(mut session: Session) {
    let mine = submit(&mut session, "a@x.edu");
    submit(&mut session, "b@x.edu");

    let listing = execute(&mut session, &parse("a@x.edu", "faculty", &["list"])).expect("list");

    assert_eq!(listing, Outcome::Listing(vec![mine]));
}

#[rstest]
fn admin_lists_everything_and_updates(mut session: Session) {
    let first = submit(&mut session, "a@x.edu");
    submit(&mut session, "b@x.edu");

    let listing =
        execute(&mut session, &parse("root@x.edu", "admin", &["list"])).expect("admin list");
    let Outcome::Listing(views) = listing else {
        panic!("expected listing");
    };
    assert_eq!(views.len(), 2);

    let update = parse(
        "root@x.edu",
        "admin",
        &[
            "update",
            first.id.as_ref(),
            "--status",
            "resolved",
            "--feedback",
            "Fixed",
        ],
    );
    let Outcome::Updated(updated) = execute(&mut session, &update).expect("update") else {
        panic!("expected update");
    };
    assert_eq!(updated.status, Status::Resolved);
    assert_eq!(updated.admin_feedback.as_deref(), Some("Fixed"));
}

#[rstest]
#[case(&["summary"])]
#[case(&["update", "ABC", "--status", "resolved"])]
fn member_cannot_run_admin_commands(mut session: Session, #[case] command: &[&str]) {
    let err = execute(&mut session, &parse("a@x.edu", "student", command))
        .expect_err("member session");
    assert_eq!(err.code(), ErrorCode::Forbidden);
}

#[rstest]
#[case(&["remove", "ABC"])]
#[case(&["track", "ABC"])]
#[case(&["submit", "--category", "other", "--description", "x", "--confirm-anonymity"])]
fn admin_cannot_run_member_commands(mut session: Session, #[case] command: &[&str]) {
    let err = execute(&mut session, &parse("root@x.edu", "admin", command))
        .expect_err("admin session");
    assert_eq!(err.code(), ErrorCode::Forbidden);
}

#[rstest]
fn unknown_status_is_invalid_status(mut session: Session) {
    let created = submit(&mut session, "a@x.edu");
    let cli = parse(
        "root@x.edu",
        "admin",
        &["update", created.id.as_ref(), "--status", "closed"],
    );
    let err = execute(&mut session, &cli).expect_err("unknown status");
    assert_eq!(err.code(), ErrorCode::InvalidStatus);
}

#[rstest]
fn blank_password_is_rejected(mut session: Session) {
    let cli = Cli::try_parse_from([
        "grievance-portal",
        "--name",
        "Ada",
        "--email",
        "a@x.edu",
        "--password",
        "",
        "list",
    ])
    .expect("arguments parse");
    let err = execute(&mut session, &cli).expect_err("blank password");
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[rstest]
fn removing_unknown_id_is_not_found(mut session: Session) {
    submit(&mut session, "a@x.edu");
    let err = execute(
        &mut session,
        &parse("a@x.edu", "student", &["remove", "NOPE"]),
    )
    .expect_err("unknown id");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(session.store().complaints().len(), 1);
}

#[rstest]
fn track_renders_reached_stages(mut session: Session) {
    let created = submit(&mut session, "a@x.edu");
    let outcome = execute(
        &mut session,
        &parse("a@x.edu", "student", &["track", created.id.as_ref()]),
    )
    .expect("track");

    let mut text = Vec::new();
    write_text(&mut text, &outcome).expect("render");
    let text = String::from_utf8(text).expect("utf-8 output");

    assert!(text.contains("[x] SUBMITTED  <"));
    assert!(text.contains("[ ] UNDER_REVIEW"));
}

#[rstest]
fn json_output_hides_submitter_identity(mut session: Session) {
    submit(&mut session, "a@x.edu");
    let outcome =
        execute(&mut session, &parse("root@x.edu", "admin", &["list"])).expect("admin list");

    let mut buffer = Vec::new();
    write_json(&mut buffer, &outcome).expect("render");
    let value: Value = serde_json::from_slice(&buffer).expect("valid json");

    assert_eq!(value["outcome"], "listing");
    let record = &value["data"][0];
    assert_eq!(record["status"], "submitted");
    assert!(record.get("userId").is_none());
    assert!(record.get("anonymousEmail").is_none());
}

#[rstest]
fn summary_text_lists_total_and_statuses(mut session: Session) {
    submit(&mut session, "a@x.edu");
    let outcome =
        execute(&mut session, &parse("root@x.edu", "admin", &["summary"])).expect("summary");

    let mut text = Vec::new();
    write_text(&mut text, &outcome).expect("render");
    let text = String::from_utf8(text).expect("utf-8 output");

    assert!(text.starts_with("TOTAL CASES: 1\n"));
    assert!(text.contains("SUBMITTED"));
    assert!(text.contains("ARCHIVED"));
}

#[rstest]
fn error_json_uses_snake_case_code() {
    let mut buffer = Vec::new();
    write_error_json(&mut buffer, &Error::forbidden("admins only")).expect("render");
    let value: Value = serde_json::from_slice(&buffer).expect("valid json");
    assert_eq!(value["error"]["code"], "forbidden");
    assert_eq!(value["error"]["message"], "admins only");
}

#[rstest]
fn adapter_errors_convert_to_domain_payloads() {
    let err = CliError::Config("missing".to_owned());
    assert_eq!(err.code(), ErrorCode::ValidationError);
    assert_eq!(err.to_domain().message(), "invalid configuration: missing");
}

fn file_settings(dir: &TempDir, delay_ms: u64) -> PortalSettings {
    PortalSettings {
        data_dir: Some(
            dir.path()
                .to_str()
                .expect("utf-8 temporary path")
                .to_owned(),
        ),
        store_key: Some("campus".to_owned()),
        transition_delay_ms: delay_ms,
        log_format: None,
    }
}

fn submit_args() -> Cli {
    parse(
        "a@x.edu",
        "student",
        &[
            "submit",
            "--category",
            "safety",
            "--description",
            "Broken lock",
            "--confirm-anonymity",
        ],
    )
}

fn stored(dir: &TempDir) -> Option<Vec<Complaint>> {
    let text = std::fs::read_to_string(dir.path().join("campus.json")).ok()?;
    serde_json::from_str(&text).ok()
}

#[rstest]
fn run_persists_submission_and_confirms_after_delay() {
    let dir = TempDir::new().expect("temporary directory");
    let settings = file_settings(&dir, 150);
    let mut out = Vec::new();

    let started = Instant::now();
    run(&submit_args(), &settings, &mut out).expect("submit runs");

    assert!(started.elapsed() >= Duration::from_millis(150));
    let text = String::from_utf8(out).expect("utf-8 output");
    assert!(text.contains("submitted; keep this id to track it"));
    let complaints = stored(&dir).expect("record written");
    assert_eq!(complaints.len(), 1);
    assert!(
        complaints
            .first()
            .is_some_and(|complaint| complaint.description() == "Broken lock"
                && text.contains(complaint.id().as_ref()))
    );
}

#[rstest]
fn run_commits_before_delay_starts() {
    let dir = TempDir::new().expect("temporary directory");
    let settings = file_settings(&dir, 1_500);
    let cli = submit_args();

    let worker = thread::spawn(move || {
        let mut out = Vec::new();
        run(&cli, &settings, &mut out).map(|()| out)
    });

    let deadline = Instant::now() + Duration::from_millis(1_000);
    let mut seen_early = false;
    while Instant::now() < deadline {
        if stored(&dir).is_some_and(|complaints| complaints.len() == 1) {
            seen_early = !worker.is_finished();
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }

    let out = worker
        .join()
        .expect("worker thread")
        .expect("submit runs");
    assert!(seen_early, "record must be on disk while the confirmation waits");
    assert!(!out.is_empty());
}

#[rstest]
fn run_skips_delay_for_reads() {
    let dir = TempDir::new().expect("temporary directory");
    run(&submit_args(), &file_settings(&dir, 0), &mut Vec::new()).expect("seed complaint");
    let settings = file_settings(&dir, 10_000);
    let list = parse("a@x.edu", "student", &["--json", "list"]);
    let mut out = Vec::new();

    let started = Instant::now();
    run(&list, &settings, &mut out).expect("list runs");

    assert!(started.elapsed() < Duration::from_secs(5));
    let value: Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(value["outcome"], "listing");
    assert_eq!(value["data"].as_array().map(Vec::len), Some(1));
}

#[rstest]
fn run_rejects_unsafe_store_key() {
    let dir = TempDir::new().expect("temporary directory");
    let mut settings = file_settings(&dir, 0);
    settings.store_key = Some("../escape".to_owned());

    let err = run(&submit_args(), &settings, &mut Vec::new()).expect_err("unsafe key");

    assert!(matches!(err, CliError::StoreKey(_)));
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[rstest]
#[case("student", &["remove", "bad!id"])]
#[case("student", &["track", "bad!id"])]
#[case("admin", &["update", "bad!id", "--status", "resolved"])]
fn malformed_ids_are_not_found(
    mut session: Session,
    #[case] role: &str,
    #[case] command: &[&str],
) {
    let err = execute(&mut session, &parse("a@x.edu", role, command)).expect_err("malformed id");
    assert_eq!(err.code(), ErrorCode::NotFound);
}
