use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::{form::schema::Schema, models::trip::Trip};

/// Calendar-date format for every date field inside the draft.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Transient state of one open form: field values and field errors, both
/// keyed by field name. Lives exactly as long as the modal instance.
#[derive(Debug)]
pub struct FormDraft {
    schema: Schema,
    values: BTreeMap<&'static str, String>,
    errors: BTreeMap<&'static str, String>,
}

impl FormDraft {
    pub fn new(schema: Schema) -> Self {
        let values = schema
            .rules()
            .iter()
            .map(|rule| (rule.name, String::new()))
            .collect();
        Self {
            schema,
            values,
            errors: BTreeMap::new(),
        }
    }

    /// Write one field and re-validate it immediately.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        let Some(rule) = self.schema.rule(field) else {
            warn!(field, "ignoring unknown form field");
            return;
        };
        let value = value.into();
        match rule.validate(&value) {
            Some(message) => {
                self.errors.insert(rule.name, message);
            }
            None => {
                self.errors.remove(rule.name);
            }
        }
        self.values.insert(rule.name, value);
    }

    pub fn set_date(&mut self, field: &str, value: DateTime<Utc>) {
        self.set(field, value.format(DATE_FORMAT).to_string());
    }

    /// Pre-fill from an existing trip record, used in edit mode at modal-open
    /// time. Timestamps are written as UTC calendar dates; an absent end date
    /// leaves the field empty.
    pub fn prefill_from_trip(&mut self, trip: &Trip) {
        self.set("name", trip.name.clone());
        self.set_date("start_date", trip.start_date);
        if let Some(end) = trip.end_date {
            self.set_date("end_date", end);
        }
        if let Some(image) = trip.image.as_deref() {
            self.set("images", image);
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or_default()
    }

    /// A trimmed value, or `None` when the field was left empty.
    pub fn optional_value(&self, field: &str) -> Option<&str> {
        self.values
            .get(field)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<&'static str, String> {
        &self.errors
    }

    pub fn values(&self) -> &BTreeMap<&'static str, String> {
        &self.values
    }

    /// Validate the whole draft against the schema. Returns true when the
    /// draft may be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        for rule in self.schema.rules() {
            let value = self.values.get(rule.name).map(String::as_str).unwrap_or_default();
            if let Some(message) = rule.validate(value) {
                self.errors.insert(rule.name, message);
            }
        }
        self.errors.is_empty()
    }

    /// Attach an error the schema could not catch, e.g. a date string the
    /// submission adapter failed to parse.
    pub fn reject(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}
