//! JSON schema and validation for structured trip requests.

pub mod schema;
pub mod validation;

pub use schema::{trip_request_schema, SchemaHandle};
pub use validation::{
    deserialize_with_path, parse_trip_request, parse_trip_request_str, validate_against,
};
