//! Read models rendered by the dashboards.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Complaint, ComplaintId, Status};

/// One step of the tracker strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackStage {
    /// Status shown at this step.
    pub status: Status,
    /// Whether the complaint has reached or passed this step.
    pub reached: bool,
    /// Whether this is the complaint's current status.
    pub current: bool,
}

/// Progress of a single complaint through the status ordering.
///
/// Statuses are flat, so `reached` only reflects position in the tracker
/// ordering; a reopened complaint shows the earlier stages as reached again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusTrack {
    /// Tracked complaint.
    pub complaint_id: ComplaintId,
    /// Current status.
    pub status: Status,
    /// Last mutation instant.
    pub updated_at: DateTime<Utc>,
    /// Administrator feedback, when recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_feedback: Option<String>,
    /// Every status in tracker order.
    pub stages: Vec<TrackStage>,
}

impl StatusTrack {
    /// Build the tracker strip for `complaint`.
    pub fn of(complaint: &Complaint) -> Self {
        let current = complaint.status();
        let stages = Status::ALL
            .into_iter()
            .map(|status| TrackStage {
                status,
                reached: status.stage() <= current.stage(),
                current: status == current,
            })
            .collect();
        Self {
            complaint_id: complaint.id().clone(),
            status: current,
            updated_at: complaint.updated_at(),
            admin_feedback: complaint.admin_feedback().map(str::to_owned),
            stages,
        }
    }
}

/// Case counts for the administrator overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummary {
    /// Total number of cases.
    pub total: usize,
    /// Cases per status; every status is present, zero counts included.
    pub by_status: BTreeMap<Status, usize>,
}

impl CaseSummary {
    /// Count the given complaints.
    pub fn of<'a>(complaints: impl IntoIterator<Item = &'a Complaint>) -> Self {
        let mut by_status: BTreeMap<Status, usize> =
            Status::ALL.into_iter().map(|status| (status, 0)).collect();
        let mut total = 0;
        for complaint in complaints {
            total += 1;
            *by_status.entry(complaint.status()).or_default() += 1;
        }
        Self { total, by_status }
    }

    /// Number of cases in `status`.
    pub fn count(&self, status: Status) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}
