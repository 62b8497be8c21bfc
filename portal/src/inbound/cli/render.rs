//! Text and JSON rendering of command outcomes.
//!
//! Rendered complaints never carry the submitter's user id or email; only
//! the tracking id and the complaint content leave the domain.

use std::io::{self, Write};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::{
    CaseSummary, Category, Complaint, ComplaintId, Error, ErrorCode, Priority, Status, StatusTrack,
};

/// Complaint fields safe to show to any projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintView {
    /// Tracking identifier.
    pub id: ComplaintId,
    /// Subject area.
    pub category: Category,
    /// Submitter-assigned urgency.
    pub priority: Priority,
    /// Workflow status.
    pub status: Status,
    /// Free-text description.
    pub description: String,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last mutation instant.
    pub updated_at: DateTime<Utc>,
    /// Administrator feedback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_feedback: Option<String>,
}

impl From<&Complaint> for ComplaintView {
    fn from(value: &Complaint) -> Self {
        Self {
            id: value.id().clone(),
            category: value.category(),
            priority: value.priority(),
            status: value.status(),
            description: value.description().to_owned(),
            created_at: value.created_at(),
            updated_at: value.updated_at(),
            admin_feedback: value.admin_feedback().map(str::to_owned),
        }
    }
}

/// Result of one CLI command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "outcome", content = "data")]
pub enum Outcome {
    /// The caller's projection.
    Listing(Vec<ComplaintView>),
    /// A complaint was filed.
    Submitted(ComplaintView),
    /// A complaint's status changed.
    Updated(ComplaintView),
    /// A complaint was withdrawn.
    Removed(ComplaintView),
    /// Tracker strip for one complaint.
    Tracked(StatusTrack),
    /// Administrator case counts.
    Summary(CaseSummary),
}

impl Outcome {
    /// Whether the command changed the collection.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::Submitted(_) | Self::Updated(_) | Self::Removed(_)
        )
    }
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a Error,
}

/// Write `outcome` as human-readable text.
pub fn write_text(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Listing(views) if views.is_empty() => writeln!(out, "no complaints"),
        Outcome::Listing(views) => {
            for view in views {
                write_view(out, view)?;
            }
            Ok(())
        }
        Outcome::Submitted(view) => writeln!(
            out,
            "complaint {} submitted; keep this id to track it",
            view.id
        ),
        Outcome::Updated(view) => {
            writeln!(out, "complaint {} is now {}", view.id, view.status.label())?;
            if let Some(feedback) = &view.admin_feedback {
                writeln!(out, "feedback: {feedback}")?;
            }
            Ok(())
        }
        Outcome::Removed(view) => writeln!(out, "complaint {} removed", view.id),
        Outcome::Tracked(track) => write_track(out, track),
        Outcome::Summary(summary) => {
            writeln!(out, "TOTAL CASES: {}", summary.total)?;
            for (status, count) in &summary.by_status {
                writeln!(out, "{:<14} {count}", status.label())?;
            }
            Ok(())
        }
    }
}

fn write_view(out: &mut impl Write, view: &ComplaintView) -> io::Result<()> {
    writeln!(
        out,
        "{}  {}  {}  {}  updated {}",
        view.id,
        view.status.label(),
        view.category,
        view.priority,
        timestamp(view.updated_at)
    )?;
    writeln!(out, "    {}", view.description)?;
    if let Some(feedback) = &view.admin_feedback {
        writeln!(out, "    feedback: {feedback}")?;
    }
    Ok(())
}

fn write_track(out: &mut impl Write, track: &StatusTrack) -> io::Result<()> {
    writeln!(
        out,
        "complaint {} last updated {}",
        track.complaint_id,
        timestamp(track.updated_at)
    )?;
    for stage in &track.stages {
        let mark = if stage.reached { 'x' } else { ' ' };
        let pointer = if stage.current { "  <" } else { "" };
        writeln!(out, "[{mark}] {}{pointer}", stage.status.label())?;
    }
    if let Some(feedback) = &track.admin_feedback {
        writeln!(out, "feedback: {feedback}")?;
    }
    Ok(())
}

fn timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Write `outcome` as a pretty-printed JSON document.
pub fn write_json(out: &mut impl Write, outcome: &Outcome) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *out, outcome)?;
    writeln!(out).map_err(serde_json::Error::io)
}

/// Write `error` as a JSON `{"error": ...}` document.
pub fn write_error_json(out: &mut impl Write, error: &Error) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *out, &ErrorEnvelope { error })?;
    writeln!(out).map_err(serde_json::Error::io)
}

/// Write `error` as a single line of text.
pub fn write_error_text(out: &mut impl Write, code: ErrorCode, message: &str) -> io::Result<()> {
    writeln!(out, "error[{}]: {message}", code.as_str())
}
