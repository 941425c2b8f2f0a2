//! Array payload validation for listing responses.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// A listing response that isn't the array of records we expect.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("expected a JSON array, got {0}")]
    NotAnArray(&'static str),
    #[error("malformed record: {0}")]
    Record(#[from] serde_json::Error),
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Require `value` to be a JSON array and decode each element as `T`.
pub fn parse_array<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, PayloadError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(PayloadError::from))
            .collect(),
        other => Err(PayloadError::NotAnArray(kind(&other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WorkspaceRecord;
    use serde_json::json;

    #[test]
    fn test_array_decodes() {
        let records: Vec<WorkspaceRecord> =
            parse_array(json!([{"id": 1, "nome_workspace": "A"}])).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "1");
    }

    #[test]
    fn test_object_is_rejected() {
        let err = parse_array::<WorkspaceRecord>(json!({"data": []})).unwrap_err();
        assert!(matches!(err, PayloadError::NotAnArray("object")));
    }

    #[test]
    fn test_null_is_rejected() {
        let err = parse_array::<WorkspaceRecord>(Value::Null).unwrap_err();
        assert!(matches!(err, PayloadError::NotAnArray("null")));
    }

    #[test]
    fn test_non_object_element_is_rejected() {
        let err = parse_array::<WorkspaceRecord>(json!(["oops"])).unwrap_err();
        assert!(matches!(err, PayloadError::Record(_)));
    }
}
