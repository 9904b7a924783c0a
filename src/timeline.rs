//! Timeline derivation: from a card's status history to per-phase progress.
//!
//! Everything here is a pure function of the history and the current status.
//! Inputs are borrowed and never modified; nothing is cached between calls.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::labels::LabelMap;
use crate::model::{Phase, PhaseId, PhaseProgress, PhaseStatus, StatusEvent};
use crate::phases::PHASES;

/// The derived timeline for one card, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineView<'a> {
    /// Classification and progress per phase, in pipeline order.
    pub phases: BTreeMap<PhaseId, PhaseProgress>,

    /// The status history sorted by `created_at`, oldest first.
    pub history: Vec<StatusEvent>,

    #[serde(skip)]
    labels: &'a LabelMap,
}

impl TimelineView<'_> {
    /// The display label for a status token.
    pub fn label_of<'t>(&'t self, token: &'t str) -> &'t str {
        self.labels.label_of(token)
    }

    /// Progress for one phase. Every phase is always present.
    pub fn phase(&self, id: PhaseId) -> PhaseProgress {
        self.phases.get(&id).copied().unwrap_or(PhaseProgress::PENDING)
    }

    /// The phase the card currently sits in, if its current status is known.
    pub fn active_phase(&self) -> Option<PhaseId> {
        self.phases
            .iter()
            .find(|(_, p)| p.status == PhaseStatus::Current)
            .map(|(id, _)| *id)
    }

    /// Mean progress across all phases, rounded half-up.
    pub fn overall_progress(&self) -> u8 {
        let sum: usize = self.phases.values().map(|p| usize::from(p.progress)).sum();
        percent(sum, self.phases.len() * 100)
    }
}

/// Derive the timeline for a card.
///
/// `current_status` may be empty or unknown; it then matches no phase and
/// every phase falls back to count-based classification.
pub fn compute_timeline<'a>(
    statuses: &[StatusEvent],
    current_status: &str,
    labels: &'a LabelMap,
) -> TimelineView<'a> {
    let phases = PHASES
        .iter()
        .map(|phase| (phase.id, classify(phase, statuses, current_status)))
        .collect();

    TimelineView {
        phases,
        history: sorted_history(statuses),
        labels,
    }
}

/// A copy of `statuses` ordered by `created_at`, oldest first.
///
/// The sort is stable: events sharing a timestamp keep their input order.
/// Unparsable timestamps sort as the oldest, ahead of every valid one.
pub fn sorted_history(statuses: &[StatusEvent]) -> Vec<StatusEvent> {
    let mut history = statuses.to_vec();
    // `None < Some(_)`, so unparsable timestamps land first.
    history.sort_by_cached_key(StatusEvent::timestamp);
    history
}

/// Classify a single phase.
pub fn classify(phase: &Phase, statuses: &[StatusEvent], current_status: &str) -> PhaseProgress {
    let total = phase.members.len();
    let completed = statuses
        .iter()
        .filter(|e| phase.contains(&e.status))
        .count();
    let current_position = phase.position(current_status);

    if let Some(index) = current_position {
        // Take whichever signal shows more advancement.
        let reached = (index + 1).max(completed);
        return PhaseProgress {
            status: PhaseStatus::Current,
            progress: percent(reached, total),
        };
    }

    if completed == 0 {
        PhaseProgress::PENDING
    } else if completed >= total {
        PhaseProgress {
            status: PhaseStatus::Completed,
            progress: 100,
        }
    } else {
        PhaseProgress {
            status: PhaseStatus::Partial,
            progress: percent(completed, total),
        }
    }
}

/// `count / total` as a percentage, rounded half-up and capped at 100.
fn percent(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (count.saturating_mul(200) + total) / (total * 2);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}
