use crate::models::trip::Trip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
}

/// One declarative field rule. The schema carries no behaviour beyond
/// checking a single value against its requirement.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub requirement: Requirement,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn required(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            requirement: Requirement::Required,
            message,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            requirement: Requirement::Optional,
            message: "",
        }
    }

    pub fn validate(&self, value: &str) -> Option<String> {
        match self.requirement {
            Requirement::Required if value.trim().is_empty() => Some(self.message.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Schema {
    rules: &'static [FieldRule],
}

impl Schema {
    pub fn rules(&self) -> &'static [FieldRule] {
        self.rules
    }

    pub fn rule(&self, field: &str) -> Option<&'static FieldRule> {
        self.rules.iter().find(|rule| rule.name == field)
    }
}

pub const ADD_DESTINATION: Schema = Schema {
    rules: &[
        FieldRule::required("name", "Trip is required"),
        FieldRule::required("date", "Date is required"),
        FieldRule::optional("time"),
        FieldRule::required("description", "Description is required"),
        FieldRule::optional("images"),
        FieldRule::optional("map_url"),
    ],
};

pub const EDIT_TRIP: Schema = Schema {
    rules: &[
        FieldRule::required("name", "Trip is required"),
        FieldRule::required("start_date", "Date is required"),
        FieldRule::optional("end_date"),
        FieldRule::optional("images"),
    ],
};

/// What the modal was opened for. Each variant owns the trip context it needs
/// and the rule set it validates with, both fixed at construction.
#[derive(Debug, Clone)]
pub enum Mode {
    /// Add a destination to an existing trip.
    Create { parent: Trip },
    /// Edit the trip record itself.
    Edit { trip: Trip },
}

impl Mode {
    pub fn schema(&self) -> Schema {
        match self {
            Mode::Create { .. } => ADD_DESTINATION,
            Mode::Edit { .. } => EDIT_TRIP,
        }
    }

    /// The trip this modal operates on: the parent when adding a destination,
    /// the record itself when editing.
    pub fn trip(&self) -> &Trip {
        match self {
            Mode::Create { parent } => parent,
            Mode::Edit { trip } => trip,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Mode::Create { .. } => "Add new destination",
            Mode::Edit { .. } => "Edit trip",
        }
    }
}
