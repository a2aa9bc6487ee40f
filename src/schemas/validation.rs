use crate::{
    error::{PlannerError, Result},
    schemas::{trip_request_schema, SchemaHandle},
    types::TripRequest,
};
use jsonschema::{Draft, JSONSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;

const MAX_SCHEMA_ERRORS: usize = 3;

/// Validate a JSON payload against a schema, reporting at most a few failing paths.
pub fn validate_against(schema: &SchemaHandle, payload: &Value) -> Result<()> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema.schema_json())
        .map_err(|err| {
            PlannerError::Validation(format!(
                "Failed to prepare `{}` schema for validation: {}",
                schema.schema_name(),
                err
            ))
        })?;

    if let Err(errors) = validator.validate(payload) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "payload failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(PlannerError::Validation(format!(
            "Payload does not match `{}` schema: {}",
            schema.schema_name(),
            detail_str
        )));
    }

    Ok(())
}

/// Deserialize with the failing field path in the error message
pub fn deserialize_with_path<T: DeserializeOwned>(payload: Value) -> Result<T> {
    serde_path_to_error::deserialize(payload).map_err(|e| {
        PlannerError::Validation(format!("Invalid value at {}: {}", e.path(), e.inner()))
    })
}

/// Turn user-supplied JSON into a checked `TripRequest`.
///
/// Runs the JSON schema first, then deserialization, then the invariants the
/// schema cannot express (such as whitespace-only place names).
pub fn parse_trip_request(payload: Value) -> Result<TripRequest> {
    validate_against(trip_request_schema(), &payload)?;
    let request: TripRequest = deserialize_with_path(payload)?;
    request.validate()?;
    Ok(request)
}

pub fn parse_trip_request_str(input: &str) -> Result<TripRequest> {
    let payload: Value = serde_json::from_str(input)?;
    parse_trip_request(payload)
}
