//! Workspace and instance data shared by the server and the browser.
//!
//! The webhook backend speaks Portuguese field names (`nome_workspace`,
//! `numero_telefone`, ...). The `*Record` types mirror that wire format and
//! tolerate loose typing; the view models are what the pages render.

mod dates;
mod instance;
mod payload;
mod workspace;

pub use dates::format_created_at;
pub use instance::{
    CreateInstanceRequest, Instance, InstanceRecord, InstanceStatus, NO_PHONE_LABEL,
};
pub use payload::{parse_array, PayloadError};
pub use workspace::{CreateWorkspaceRequest, Workspace, WorkspaceRecord};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Placeholder shown for absent labels.
pub const MISSING_LABEL: &str = "—";

/// Entities that live in a keyed list on a page.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Rejected user input for a create form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("name must not be empty")]
    Empty,
}

/// Trim a user-entered name, rejecting blank input.
pub fn validate_name(raw: &str) -> Result<String, NameError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    Ok(trimmed.to_string())
}

/// Accept string or numeric identifiers and always hand back a string.
pub(crate) fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Optional text field that may arrive as a number (phone numbers often do).
pub(crate) fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Drop blank strings so fallbacks kick in.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
