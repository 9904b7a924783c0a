//! Card: one graded submission as returned by the card resource.

use serde::{Deserialize, Deserializer, Serialize};

use super::status::{StatusEvent, nullable_string};

/// A submitted card: its current status and its recorded history.
///
/// The current status is reported independently of `statuses` and is not
/// guaranteed to match the chronologically last event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card identifier. Numeric ids from the API are kept as their decimal text.
    #[serde(
        default,
        deserialize_with = "card_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    /// The card's latest known status token. Empty when unknown.
    #[serde(default, deserialize_with = "nullable_string")]
    pub status: String,

    /// Recorded status events, in whatever order the API returned them.
    #[serde(default)]
    pub statuses: Vec<StatusEvent>,
}

/// An id as the API may send it: a string or a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

fn card_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(|id| match id {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}
