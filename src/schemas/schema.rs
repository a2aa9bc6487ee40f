use crate::types::TripRequest;
use schemars::{
    schema::{RootSchema, SchemaObject},
    schema_for,
};
use serde_json::Value;
use std::sync::{Arc, OnceLock};

/// Cached JSON schema for a request type.
#[derive(Clone, Debug)]
pub struct SchemaHandle {
    schema_name: &'static str,
    schema_json: Arc<Value>,
}

impl SchemaHandle {
    pub fn from_root_schema(schema_name: &'static str, mut root: RootSchema) -> Self {
        apply_title(&mut root.schema, schema_name);
        let schema_json = serde_json::to_value(root)
            .unwrap_or_else(|err| panic!("failed to serialize schema for {}: {}", schema_name, err));

        Self {
            schema_name,
            schema_json: Arc::new(schema_json),
        }
    }

    pub fn schema_name(&self) -> &'static str {
        self.schema_name
    }

    pub fn schema_json(&self) -> &Value {
        self.schema_json.as_ref()
    }

    pub fn schema_json_arc(&self) -> Arc<Value> {
        Arc::clone(&self.schema_json)
    }
}

fn apply_title(schema_object: &mut SchemaObject, title: &'static str) {
    let metadata = schema_object.metadata();
    if metadata.title.is_none() {
        metadata.title = Some(title.to_string());
    }
}

/// Schema of the structured trip request accepted by the planner
pub fn trip_request_schema() -> &'static SchemaHandle {
    static SCHEMA: OnceLock<SchemaHandle> = OnceLock::new();
    SCHEMA.get_or_init(|| SchemaHandle::from_root_schema("TripRequest", schema_for!(TripRequest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_request_schema_lists_required_fields() {
        let schema = trip_request_schema().schema_json();
        assert_eq!(schema["title"], "TripRequest");
        assert_eq!(schema["type"], "object");

        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(required.contains(&"destination"));
        assert!(required.contains(&"travelMode"));
        assert!(!required.contains(&"preferences"));
    }

    #[test]
    fn schema_is_built_once() {
        let first = trip_request_schema().schema_json_arc();
        let second = trip_request_schema().schema_json_arc();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
