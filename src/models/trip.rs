use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, TimestampMilliSeconds};

/// Top-level travel record owned by the couple. The API is the source of
/// truth; the client only mutates it through the edit submission. Date fields
/// travel over the wire as epoch milliseconds.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub start_date: DateTime<Utc>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image: Option<String>,
}
