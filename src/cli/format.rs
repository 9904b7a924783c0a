//! Output formatting for CLI display.

use crate::labels::LabelMap;
use crate::phases::PHASES;
use crate::timeline::TimelineView;

const BAR_WIDTH: usize = 20;

/// A fixed-width progress bar, e.g. `[#####...............]`.
pub(super) fn progress_bar(progress: u8) -> String {
    let filled = (usize::from(progress.min(100)) * BAR_WIDTH + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Render a timeline for the terminal.
pub(super) fn format_timeline(
    view: &TimelineView<'_>,
    card_id: Option<&str>,
    current: &str,
) -> String {
    let mut out = String::new();

    let current_label = if current.is_empty() {
        "unknown status"
    } else {
        view.label_of(current)
    };
    out.push_str(&format!(
        "Card {} · {current_label} · {}% overall\n",
        card_id.unwrap_or("-"),
        view.overall_progress()
    ));

    let active = view.active_phase();
    for phase in &PHASES {
        let p = view.phase(phase.id);
        let marker = if active == Some(phase.id) { ">" } else { " " };
        out.push_str(&format!(
            "{marker} {:<11} {} {:>3}%  {}\n",
            phase.title,
            progress_bar(p.progress),
            p.progress,
            p.status.as_str()
        ));
    }

    out.push_str("\nHistory\n");
    if view.history.is_empty() {
        out.push_str("  (no status events)\n");
    }
    for event in &view.history {
        let at = if event.created_at.is_empty() {
            "(no timestamp)"
        } else {
            event.created_at.as_str()
        };
        out.push_str(&format!("  {at:<25} {}\n", view.label_of(&event.status)));
    }

    out
}

/// Render the phase table with member labels.
pub(super) fn format_phases(labels: &LabelMap) -> String {
    let mut out = String::new();
    for phase in &PHASES {
        out.push_str(&format!(
            "{} ({}, {} statuses)\n",
            phase.title,
            phase.id,
            phase.members.len()
        ));
        for (i, token) in phase.members.iter().enumerate() {
            out.push_str(&format!(
                "  {:>2}. {token:<22} {}\n",
                i + 1,
                labels.label_of(token)
            ));
        }
    }
    out
}
