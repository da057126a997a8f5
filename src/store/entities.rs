use serde::{Deserialize, Serialize};

/// A single record in the `album` table.
///
/// The id is assigned by the store on insert and immutable afterwards;
/// clients creating an album leave it unset. Every field defaults to its
/// zero value when absent from a JSON body, so a partial create request
/// decodes and inserts rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    /// Store-assigned identifier
    pub id: i64,
    /// Album title
    pub title: String,
    /// Artist name, used by the artist lookup
    pub artist: String,
    /// Retail price
    pub price: f64,
}
