//! Reading card documents.
//!
//! A card document is what the card resource returns:
//!
//! ```text
//! { "id": "...", "status": "psa_grading", "statuses": [ { "status": "...", "created_at": "..." }, ... ] }
//! ```
//!
//! A bare array of status events is accepted too; the current status is
//! then empty unless the caller supplies one.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use crate::model::{Card, StatusEvent};
use crate::phases;

/// Errors that can occur while reading a card document.
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("card input is empty")]
    Empty,
}

pub type Result<T> = core::result::Result<T, CardError>;

impl Card {
    /// Parse a card document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let trimmed = json.trim_start();
        if trimmed.is_empty() {
            return Err(CardError::Empty);
        }
        // Pick the shape up front so serde reports the real field error.
        let card = if trimmed.starts_with('[') {
            Self {
                statuses: serde_json::from_str::<Vec<StatusEvent>>(json)?,
                ..Self::default()
            }
        } else {
            serde_json::from_str(json)?
        };
        tracing::debug!(
            id = card.id.as_deref().unwrap_or("-"),
            status = %card.status,
            events = card.statuses.len(),
            "read card"
        );
        Ok(card)
    }

    /// Read a card document from a file.
    pub fn read_from(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read a card document from stdin.
    pub fn read_stdin() -> Result<Self> {
        let mut json = String::new();
        io::stdin().read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// History tokens that belong to no phase, deduplicated, in first-seen order.
    ///
    /// These are tolerated by the timeline but usually mean the API grew a
    /// status the phase table doesn't know yet.
    pub fn unknown_tokens(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = Vec::new();
        for event in &self.statuses {
            let token = event.status.as_str();
            if phases::phase_of(token).is_none() && !unknown.contains(&token) {
                unknown.push(token);
            }
        }
        unknown
    }
}
