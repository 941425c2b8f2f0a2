//! Workspace wire record and view model.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{de_id, de_opt_text, format_created_at, Keyed};

const UNNAMED_WORKSPACE: &str = "Sem nome";

/// Workspace as returned by `GET {base}/workspaces`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceRecord {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub nome_workspace: Option<String>,
    #[serde(default, deserialize_with = "de_count")]
    pub instance_count: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub created_at: Option<String>,
}

/// Body for `POST {base}/workspace`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWorkspaceRequest {
    pub nome_workspace: String,
}

/// Workspace card data.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub instance_count: u32,
    pub created_at: String,
}

impl Workspace {
    /// `"2 Instâncias"`
    pub fn instance_label(&self) -> String {
        format!("{} Instâncias", self.instance_count)
    }
}

impl From<WorkspaceRecord> for Workspace {
    fn from(record: WorkspaceRecord) -> Self {
        let name = super::non_blank(record.nome_workspace.as_deref())
            .unwrap_or(UNNAMED_WORKSPACE)
            .to_string();
        Self {
            created_at: format_created_at(record.created_at.as_deref()),
            instance_count: record.instance_count.unwrap_or(0),
            id: record.id,
            name,
        }
    }
}

impl Keyed for Workspace {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Instance counts arrive as numbers or numeric strings; anything else is unknown.
fn de_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().map(clamp_count).or_else(|| n.as_f64().and_then(whole_count)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .map(clamp_count)
                .or_else(|| s.parse::<f64>().ok().and_then(whole_count))
        }
        _ => None,
    })
}

fn clamp_count(n: u64) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// `2.0` is a count; `2.5` is not. Negative counts can't occur and read as 0.
fn whole_count(n: f64) -> Option<u32> {
    if !n.is_finite() || n.fract() != 0.0 {
        return None;
    }
    Some(n.clamp(0.0, f64::from(u32::MAX)) as u32)
}
