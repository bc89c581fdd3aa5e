use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use serde_with::{serde_as, TimestampMilliSeconds};

use crate::form::{
    draft::{FormDraft, DATE_FORMAT},
    schema::Mode,
};

/// Body of the edit-trip call. Dates leave the client as epoch milliseconds;
/// `endDate` is absent from the JSON when the form left it empty.
#[serde_as]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTripData {
    pub name: String,
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub start_date: DateTime<Utc>,
    pub images: Option<String>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

/// Body of the add-destination call: the raw draft fields plus the action
/// discriminator the API expects.
#[derive(Debug, Clone, Serialize)]
pub struct AddDestinationData {
    pub destination: BTreeMap<&'static str, String>,
    pub action: &'static str,
}

/// One fully shaped outgoing mutation.
#[derive(Debug, Clone)]
pub enum TripMutation {
    Edit { id: String, data: EditTripData },
    Add { id: String, data: AddDestinationData },
}

impl TripMutation {
    pub fn trip_id(&self) -> &str {
        match self {
            TripMutation::Edit { id, .. } | TripMutation::Add { id, .. } => id,
        }
    }
}

/// A value the adapter refused, scoped to the field it came from so the form
/// can show it inline.
#[derive(Debug)]
pub struct InvalidField {
    pub field: &'static str,
    pub message: String,
}

/// Shape a validated draft into the payload for the mode's operation. Date
/// strings are converted to timestamps here and nowhere earlier; a string
/// that does not parse as a calendar date comes back as a field error.
pub fn build_mutation(mode: &Mode, draft: &FormDraft) -> Result<TripMutation, InvalidField> {
    let id = mode.trip().id.clone();
    match mode {
        Mode::Edit { .. } => {
            let start_date = parse_form_date("start_date", draft.value("start_date"))?;
            let end_date = draft
                .optional_value("end_date")
                .map(|raw| parse_form_date("end_date", raw))
                .transpose()?;
            let data = EditTripData {
                name: draft.value("name").to_string(),
                start_date,
                images: draft.optional_value("images").map(str::to_string),
                end_date,
            };
            Ok(TripMutation::Edit { id, data })
        }
        Mode::Create { .. } => {
            // The destination date is sent verbatim, but it still has to be a
            // real calendar date.
            parse_form_date("date", draft.value("date"))?;
            let data = AddDestinationData {
                destination: draft.values().clone(),
                action: "add",
            };
            Ok(TripMutation::Add { id, data })
        }
    }
}

fn parse_form_date(field: &'static str, raw: &str) -> Result<DateTime<Utc>, InvalidField> {
    let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| InvalidField {
        field,
        message: format!("'{}' is not a valid date", raw.trim()),
    })?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
