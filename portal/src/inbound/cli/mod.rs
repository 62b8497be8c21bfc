//! Command-line adapter.
//!
//! Each invocation signs in from the supplied form fields, asks the session
//! for the caller's workspace, and runs one command against it. Commands
//! outside the caller's workspace fail with `Forbidden`.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use clap::{Parser, Subcommand};
use mockable::DefaultClock;
use thiserror::Error;
use tracing::debug;

use crate::config::PortalSettings;
use crate::domain::ports::{
    ComplaintRepository, FormIdentityProvider, IdentityProvider, UuidComplaintIdGenerator,
};
use crate::domain::{
    ComplaintId, ComplaintStore, ComplaintSubmission, Error, ErrorCode, LifecycleEngine,
    LoginForm, SessionContext, StatusUpdate, TransitionTable, Workspace,
};
use crate::outbound::persistence::{JsonFileComplaintRepository, StoreKeyError};

mod render;
#[cfg(test)]
mod tests;

pub use render::{
    ComplaintView, Outcome, write_error_json, write_error_text, write_json, write_text,
};

/// `grievance-portal` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "grievance-portal",
    about = "Submit and track grievances, or review them as an administrator",
    version
)]
pub struct Cli {
    /// Name shown for the session.
    #[arg(long, value_name = "name")]
    pub name: String,
    /// Email used to find your complaints across sessions.
    #[arg(long, value_name = "email")]
    pub email: String,
    /// Password; required but not verified.
    #[arg(long, value_name = "password")]
    pub password: String,
    /// One of student, faculty, staff, admin.
    #[arg(long, value_name = "role", default_value = "student")]
    pub role: String,
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands available to a session.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the complaints visible to you.
    List,
    /// File a new complaint.
    Submit {
        /// Complaint category.
        #[arg(long, value_name = "category")]
        category: String,
        /// Complaint priority.
        #[arg(long, value_name = "priority", default_value = "medium")]
        priority: String,
        /// What happened.
        #[arg(long, value_name = "text")]
        description: String,
        /// Acknowledge that your identity is recorded but hidden from reviewers.
        #[arg(long)]
        confirm_anonymity: bool,
    },
    /// Withdraw one of your complaints.
    Remove {
        /// Tracking id.
        id: String,
    },
    /// Change a complaint's status (administrators only).
    Update {
        /// Tracking id.
        id: String,
        /// New status.
        #[arg(long, value_name = "status")]
        status: String,
        /// Feedback for the submitter.
        #[arg(long, value_name = "text")]
        feedback: Option<String>,
    },
    /// Show the progress of one of your complaints.
    Track {
        /// Tracking id.
        id: String,
    },
    /// Count cases per status (administrators only).
    Summary,
}

/// Errors surfaced by the CLI adapter.
#[derive(Debug, Error)]
pub enum CliError {
    /// A domain operation failed.
    #[error(transparent)]
    Domain(#[from] Error),
    /// Configuration could not be loaded or was invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// The configured store key was rejected.
    #[error("invalid store key: {0}")]
    StoreKey(#[from] StoreKeyError),
    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
    /// Output could not be encoded.
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    /// Domain error code, or `internal_error` for adapter failures.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Domain(error) => error.code(),
            Self::Config(_) | Self::StoreKey(_) => ErrorCode::ValidationError,
            Self::Output(_) | Self::Encode(_) => ErrorCode::InternalError,
        }
    }

    /// The error as a domain payload, for JSON output.
    pub fn to_domain(&self) -> Error {
        match self {
            Self::Domain(error) => error.clone(),
            other => Error::new(other.code(), other.to_string()),
        }
    }
}

/// Sign in from `cli` and run its command against `session`.
pub fn execute<P, R>(session: &mut SessionContext<P, R>, cli: &Cli) -> Result<Outcome, Error>
where
    P: IdentityProvider,
    R: ComplaintRepository,
{
    let form = LoginForm::try_from_parts(&cli.name, &cli.email, &cli.password, &cli.role)?;
    session.sign_in(&form)?;
    let workspace = session.workspace()?;

    match &cli.command {
        Command::List => Ok(Outcome::Listing(match workspace {
            Workspace::Admin(desk) => views(desk.complaints()),
            Workspace::Member(desk) => views(desk.complaints()),
        })),
        Command::Submit {
            category,
            priority,
            description,
            confirm_anonymity,
        } => {
            let mut desk = workspace.into_member()?;
            let submission = ComplaintSubmission::try_from_form(
                category,
                priority,
                description,
                *confirm_anonymity,
            )?;
            let created = desk.submit(submission)?;
            Ok(Outcome::Submitted(ComplaintView::from(&created)))
        }
        Command::Remove { id } => {
            let mut desk = workspace.into_member()?;
            let removed = desk.remove(&tracking_id(id)?)?;
            Ok(Outcome::Removed(ComplaintView::from(&removed)))
        }
        Command::Update {
            id,
            status,
            feedback,
        } => {
            let mut desk = workspace.into_admin()?;
            let update = StatusUpdate::try_from_form(status, feedback.as_deref())?;
            let updated = desk.update_status(&tracking_id(id)?, update)?;
            Ok(Outcome::Updated(ComplaintView::from(&updated)))
        }
        Command::Track { id } => {
            let desk = workspace.into_member()?;
            let track = desk.track(&tracking_id(id)?)?;
            Ok(Outcome::Tracked(track))
        }
        Command::Summary => {
            let desk = workspace.into_admin()?;
            Ok(Outcome::Summary(desk.summary()))
        }
    }
}

/// An id that cannot name any complaint is reported like an unknown one.
fn tracking_id(raw: &str) -> Result<ComplaintId, Error> {
    ComplaintId::new(raw).map_err(|_| Error::not_found(format!("complaint {raw} not found")))
}

fn views(complaints: Vec<&crate::domain::Complaint>) -> Vec<ComplaintView> {
    complaints.into_iter().map(ComplaintView::from).collect()
}

/// Run `cli` against the file-backed store described by `settings`.
///
/// Mutations are committed before the configured transition delay starts;
/// only the confirmation waits.
pub fn run(cli: &Cli, settings: &PortalSettings, out: &mut impl Write) -> Result<(), CliError> {
    let key = settings.store_key()?;
    let data_dir = settings.data_dir();
    let repository = JsonFileComplaintRepository::open(&data_dir, &key)
        .map_err(|error| Error::persistence_failure(error.to_string()))?;
    let store = ComplaintStore::open(repository)?;
    let engine = LifecycleEngine::new(
        TransitionTable::permissive(),
        Arc::new(DefaultClock),
        Arc::new(UuidComplaintIdGenerator),
    );
    let mut session = SessionContext::new(FormIdentityProvider, engine, store);

    let outcome = execute(&mut session, cli)?;
    session.sign_out();

    let delay = settings.transition_delay();
    if outcome.is_mutation() && !delay.is_zero() {
        debug!(delay_ms = settings.transition_delay_ms, "pacing confirmation");
        thread::sleep(delay);
    }

    if cli.json {
        write_json(out, &outcome)?;
    } else {
        write_text(out, &outcome)?;
    }
    Ok(())
}
