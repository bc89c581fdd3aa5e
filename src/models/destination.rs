use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::trip::Trip;

/// One stop within a trip. Created through the add submission path; the
/// optional fields stay whatever the form sent, including empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
    pub description: String,
    #[serde(default)]
    pub images: Option<String>,
    #[serde(default)]
    pub map_url: Option<String>,
}

/// The detail view the API serves for a single trip: the trip record plus its
/// destinations. This is the value cached under `("detail_destination", id)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripDetail {
    #[serde(flatten)]
    pub trip: Trip,
    #[serde(default)]
    pub destinations: Vec<Destination>,
}
