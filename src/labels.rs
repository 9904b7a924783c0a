//! Human-readable labels for status tokens.
//!
//! Lookup is total: a token with no label is shown as itself.

use std::collections::BTreeMap;

/// Built-in labels, one per vocabulary token.
const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("submit", "Submitted"),
    ("received_by_us", "Received by us"),
    ("data_input", "Data input"),
    ("delivery_to_jp", "In transit to Japan"),
    ("received_by_jp_wh", "Received at Japan warehouse"),
    ("delivery_to_psa", "In transit to PSA"),
    ("received_by_psa", "Received by PSA"),
    ("psa_order_prep", "Order prep"),
    ("psa_research", "Research & ID"),
    ("psa_grading", "PSA grading"),
    ("psa_assembly", "Assembly"),
    ("psa_quality_check", "Quality check"),
    ("psa_completed", "Grading complete"),
    ("delivery_from_psa", "Shipped from PSA"),
    ("received_back_jp_wh", "Back at Japan warehouse"),
    ("delivery_from_jp", "In transit from Japan"),
    ("received_back_by_us", "Back with us"),
    ("shipped_to_customer", "Shipped to customer"),
    ("delivered", "Delivered"),
];

/// Maps status tokens to display labels.
///
/// User overrides (from the `[labels]` config table) win over the built-ins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    overrides: BTreeMap<String, String>,
}

impl LabelMap {
    pub fn with_overrides(overrides: BTreeMap<String, String>) -> Self {
        Self { overrides }
    }

    /// The display label for `token`, or `token` itself when unmapped.
    pub fn label_of<'a>(&'a self, token: &'a str) -> &'a str {
        if let Some(label) = self.overrides.get(token) {
            return label;
        }
        DEFAULT_LABELS
            .iter()
            .find(|(t, _)| *t == token)
            .map_or(token, |(_, label)| label)
    }
}
