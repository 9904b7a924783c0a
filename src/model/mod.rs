//! Core data model for gradeline.
//!
//! These types describe a card's journey through the grading pipeline:
//! status events, the card that owns them, and the phases they group into.

mod card;
mod phase;
mod status;

pub use card::Card;
pub use phase::{Phase, PhaseId, PhaseProgress, PhaseStatus};
pub use status::StatusEvent;
