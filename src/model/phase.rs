//! Phase types: the three stages of the grading pipeline and their derived state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one of the three pipeline phases.
///
/// Ordering follows the pipeline: processing, then grading, then delivery.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PhaseId {
    /// Intake: submission through arrival at the Japan warehouse.
    Processing,

    /// Time at PSA.
    Grading,

    /// Return trip to the customer.
    Delivery,
}

impl PhaseId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Grading => "grading",
            Self::Delivery => "delivery",
        }
    }
}

impl fmt::Display for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A static phase definition: display metadata plus its ordered member tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub id: PhaseId,
    pub title: &'static str,
    pub icon: &'static str,

    /// Status tokens owned by this phase, in pipeline order.
    pub members: &'static [&'static str],
}

impl Phase {
    /// Zero-based position of `token` in this phase's member list.
    pub fn position(&self, token: &str) -> Option<usize> {
        self.members.iter().position(|m| *m == token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.position(token).is_some()
    }
}

/// How far along a phase is, as shown on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseStatus {
    /// Nothing recorded and not the current phase.
    Pending,

    /// The card's current status belongs to this phase.
    Current,

    /// Every member has been recorded.
    Completed,

    /// Some members recorded, but not current and not finished.
    Partial,
}

impl PhaseStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Current => "current",
            Self::Completed => "completed",
            Self::Partial => "partial",
        }
    }
}

/// The derived state of one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhaseProgress {
    pub status: PhaseStatus,

    /// Percentage in `0..=100`.
    pub progress: u8,
}

impl PhaseProgress {
    pub const PENDING: Self = Self {
        status: PhaseStatus::Pending,
        progress: 0,
    };
}
