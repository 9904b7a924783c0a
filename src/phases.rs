//! The static phase table.
//!
//! Every status token a card can occupy belongs to exactly one phase.
//! The table is compiled in and never changes at runtime; keep the
//! member lists disjoint or progress stops adding up across the pipeline.
//! [`audit_partition`] checks that.

use crate::model::{Phase, PhaseId};

pub const PROCESSING: Phase = Phase {
    id: PhaseId::Processing,
    title: "Processing",
    icon: "inbox",
    members: &[
        "submit",
        "received_by_us",
        "data_input",
        "delivery_to_jp",
        "received_by_jp_wh",
    ],
};

pub const GRADING: Phase = Phase {
    id: PhaseId::Grading,
    title: "Grading",
    icon: "award",
    members: &[
        "delivery_to_psa",
        "received_by_psa",
        "psa_order_prep",
        "psa_research",
        "psa_grading",
        "psa_assembly",
        "psa_quality_check",
        "psa_completed",
        "delivery_from_psa",
    ],
};

pub const DELIVERY: Phase = Phase {
    id: PhaseId::Delivery,
    title: "Delivery",
    icon: "truck",
    members: &[
        "received_back_jp_wh",
        "delivery_from_jp",
        "received_back_by_us",
        "shipped_to_customer",
        "delivered",
    ],
};

/// All phases, in pipeline order.
pub const PHASES: [Phase; 3] = [PROCESSING, GRADING, DELIVERY];

/// Errors reported by [`audit_partition`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    #[error("status '{token}' is listed in both {first} and {second}")]
    Overlap {
        token: &'static str,
        first: PhaseId,
        second: PhaseId,
    },

    #[error("phase {0} has no member statuses")]
    EmptyPhase(PhaseId),
}

/// The phase that owns `token`, if any.
pub fn phase_of(token: &str) -> Option<&'static Phase> {
    PHASES.iter().find(|p| p.contains(token))
}

/// Every status token, in pipeline order.
pub fn vocabulary() -> impl Iterator<Item = &'static str> {
    PHASES.iter().flat_map(|p| p.members.iter().copied())
}

/// Check that the phase table partitions the status vocabulary.
pub fn audit_partition() -> Result<(), PartitionError> {
    audit(&PHASES)
}

fn audit(phases: &[Phase]) -> Result<(), PartitionError> {
    for (i, phase) in phases.iter().enumerate() {
        if phase.members.is_empty() {
            return Err(PartitionError::EmptyPhase(phase.id));
        }
        for (j, &token) in phase.members.iter().enumerate() {
            // A repeat inside the same phase breaks positional progress too.
            if phase.members[..j].contains(&token) {
                return Err(PartitionError::Overlap {
                    token,
                    first: phase.id,
                    second: phase.id,
                });
            }
            if let Some(later) = phases[i + 1..].iter().find(|p| p.contains(token)) {
                return Err(PartitionError::Overlap {
                    token,
                    first: phase.id,
                    second: later.id,
                });
            }
        }
    }
    Ok(())
}
