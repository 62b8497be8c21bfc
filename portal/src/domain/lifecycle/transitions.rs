//! Explicit status transition table.

use crate::domain::Status;

const STATUS_COUNT: usize = Status::ALL.len();

/// Which status changes an administrator may apply.
///
/// Indexed by [`Status::stage`]. The default table is permissive: every
/// status may move to every status, including itself, and resolved or
/// archived complaints may be reopened. A stricter workflow is expressed by
/// building a table with [`TransitionTable::from_pairs`].
///
/// # Examples
/// ```
/// use grievance_portal::domain::{Status, TransitionTable};
///
/// let strict = TransitionTable::from_pairs([(Status::Submitted, Status::UnderReview)]);
/// assert!(strict.allows(Status::Submitted, Status::UnderReview));
/// assert!(!strict.allows(Status::Resolved, Status::Submitted));
/// assert!(TransitionTable::permissive().allows(Status::Archived, Status::Submitted));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    allowed: [[bool; STATUS_COUNT]; STATUS_COUNT],
}

impl TransitionTable {
    /// Table allowing every transition.
    pub fn permissive() -> Self {
        Self {
            allowed: [[true; STATUS_COUNT]; STATUS_COUNT],
        }
    }

    /// Table allowing only the listed `(from, to)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Status, Status)>) -> Self {
        let mut allowed = [[false; STATUS_COUNT]; STATUS_COUNT];
        for (from, to) in pairs {
            if let Some(cell) = allowed
                .get_mut(from.stage())
                .and_then(|row| row.get_mut(to.stage()))
            {
                *cell = true;
            }
        }
        Self { allowed }
    }

    /// Whether `from` may move to `to`.
    pub fn allows(&self, from: Status, to: Status) -> bool {
        self.allowed
            .get(from.stage())
            .and_then(|row| row.get(to.stage()))
            .copied()
            .unwrap_or(false)
    }

    /// Statuses reachable from `from`, in tracker order.
    pub fn targets(&self, from: Status) -> Vec<Status> {
        Status::ALL
            .into_iter()
            .filter(|to| self.allows(from, *to))
            .collect()
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::permissive()
    }
}
