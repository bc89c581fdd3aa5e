pub mod draft;
pub mod schema;
