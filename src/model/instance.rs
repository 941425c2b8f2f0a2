//! Instance wire record, status and view model.

use base64::Engine;
use serde::{Deserialize, Serialize};

use super::{de_id, de_opt_text, format_created_at, non_blank, Keyed, MISSING_LABEL};

/// Shown instead of a phone number when the instance has none yet.
pub const NO_PHONE_LABEL: &str = "Não conectado";

const UNNAMED_INSTANCE: &str = "Sem nome";

/// Instance as returned by `GET {base}/instancias?workspaceId=<id>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceRecord {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub nome_instancia: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub numero_telefone: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub status_whatsapp: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub ultima_atividade: Option<String>,
    #[serde(default, alias = "qrcode", deserialize_with = "de_opt_text")]
    pub qr_code: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub webhook_url: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub api_key: Option<String>,
}

/// Body for `POST {base}/instancia`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateInstanceRequest {
    pub nome_instancia: String,
    pub workspace_id: String,
}

/// Messaging session state of an instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InstanceStatus {
    Connected,
    #[default]
    Disconnected,
    Connecting,
}

impl InstanceStatus {
    /// Parse the backend's `status_whatsapp`, case-insensitively.
    /// Unknown or missing values read as disconnected.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("connected") => Self::Connected,
            Some("connecting") => Self::Connecting,
            _ => Self::Disconnected,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "Conectado",
            Self::Disconnected => "Desconectado",
            Self::Connecting => "Conectando",
        }
    }
}

/// Instance card and detail data.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub status: InstanceStatus,
    pub created_at: String,
    pub last_activity: String,
    pub qr_code: Option<String>,
    pub webhook_url: Option<String>,
    pub api_key: Option<String>,
}

impl Instance {
    /// Image source for the connection QR code.
    ///
    /// `data:` and `http(s)` sources are used as is. A bare payload is
    /// base64 PNG; line breaks inside it are dropped, and anything that
    /// still doesn't decode yields `None`.
    pub fn qr_code_src(&self) -> Option<String> {
        let raw = self.qr_code.as_deref()?.trim();
        if raw.starts_with("data:") || raw.starts_with("http://") || raw.starts_with("https://")
        {
            return Some(raw.to_string());
        }
        let payload: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        base64::engine::general_purpose::STANDARD
            .decode(&payload)
            .ok()
            .filter(|bytes| !bytes.is_empty())
            .map(|_| format!("data:image/png;base64,{payload}"))
    }
}

impl From<InstanceRecord> for Instance {
    fn from(record: InstanceRecord) -> Self {
        Self {
            name: non_blank(record.nome_instancia.as_deref())
                .unwrap_or(UNNAMED_INSTANCE)
                .to_string(),
            phone_number: non_blank(record.numero_telefone.as_deref())
                .unwrap_or(NO_PHONE_LABEL)
                .to_string(),
            status: InstanceStatus::from_wire(record.status_whatsapp.as_deref()),
            created_at: format_created_at(record.created_at.as_deref()),
            last_activity: non_blank(record.ultima_atividade.as_deref())
                .unwrap_or(MISSING_LABEL)
                .to_string(),
            qr_code: non_blank(record.qr_code.as_deref()).map(str::to_string),
            webhook_url: non_blank(record.webhook_url.as_deref()).map(str::to_string),
            api_key: non_blank(record.api_key.as_deref()).map(str::to_string),
            id: record.id,
        }
    }
}

impl Keyed for Instance {
    fn key(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn instance(value: Value) -> Instance {
        serde_json::from_value::<InstanceRecord>(value).unwrap().into()
    }

    #[test]
    fn test_defaults_for_missing_optionals() {
        let inst = instance(json!({
            "id": 3,
            "nome_instancia": "Vendas",
            "created_at": "2025-08-07T12:00:00Z"
        }));
        assert_eq!(inst.id, "3");
        assert_eq!(inst.name, "Vendas");
        assert_eq!(inst.phone_number, NO_PHONE_LABEL);
        assert_eq!(inst.status, InstanceStatus::Disconnected);
        assert_eq!(inst.created_at, "07 de ago, 2025");
        assert_eq!(inst.last_activity, MISSING_LABEL);
        assert!(inst.qr_code.is_none());
    }

    #[test]
    fn test_null_and_blank_phone() {
        let inst = instance(json!({"id": 1, "numero_telefone": null}));
        assert_eq!(inst.phone_number, NO_PHONE_LABEL);
        let inst = instance(json!({"id": 1, "numero_telefone": "  "}));
        assert_eq!(inst.phone_number, NO_PHONE_LABEL);
    }

    #[test]
    fn test_numeric_phone_is_text() {
        let inst = instance(json!({"id": 1, "numero_telefone": 5511999990001_u64}));
        assert_eq!(inst.phone_number, "5511999990001");
    }

    #[test]
    fn test_status_lowercased() {
        let inst = instance(json!({"id": 1, "status_whatsapp": "CONNECTED"}));
        assert_eq!(inst.status, InstanceStatus::Connected);
        let inst = instance(json!({"id": 1, "status_whatsapp": " Connecting "}));
        assert_eq!(inst.status, InstanceStatus::Connecting);
    }

    #[test]
    fn test_unknown_status_is_disconnected() {
        assert_eq!(
            InstanceStatus::from_wire(Some("banned")),
            InstanceStatus::Disconnected
        );
        assert_eq!(InstanceStatus::from_wire(None), InstanceStatus::Disconnected);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(InstanceStatus::Connected.label(), "Conectado");
        assert_eq!(InstanceStatus::Disconnected.label(), "Desconectado");
        assert_eq!(InstanceStatus::Connecting.label(), "Conectando");
    }

    #[test]
    fn test_qr_code_alias_and_src() {
        let inst = instance(json!({"id": 1, "qrcode": "iVBORw0KGgo="}));
        assert_eq!(
            inst.qr_code_src().as_deref(),
            Some("data:image/png;base64,iVBORw0KGgo=")
        );
    }

    #[test]
    fn test_qr_code_data_uri_passthrough() {
        let uri = "data:image/svg+xml;base64,PHN2Zy8+";
        let inst = instance(json!({"id": 1, "qr_code": uri}));
        assert_eq!(inst.qr_code_src().as_deref(), Some(uri));
    }

    #[test]
    fn test_qr_code_wrapped_base64() {
        let inst = instance(json!({"id": 1, "qr_code": "iVBORw0K\nGgo=\r\n"}));
        assert_eq!(
            inst.qr_code_src().as_deref(),
            Some("data:image/png;base64,iVBORw0KGgo=")
        );
    }

    #[test]
    fn test_qr_code_url_passthrough() {
        let url = "https://cdn.example.com/qr/1.png";
        let inst = instance(json!({"id": 1, "qr_code": url}));
        assert_eq!(inst.qr_code_src().as_deref(), Some(url));
    }

    #[test]
    fn test_qr_code_garbage_is_dropped() {
        let inst = instance(json!({"id": 1, "qr_code": "not base64 !!"}));
        assert_eq!(inst.qr_code_src(), None);
    }

    #[test]
    fn test_credentials_carried() {
        let inst = instance(json!({
            "id": "i-1",
            "webhook_url": "https://hooks.example.com/i-1",
            "api_key": "sk_live_abc"
        }));
        assert_eq!(inst.webhook_url.as_deref(), Some("https://hooks.example.com/i-1"));
        assert_eq!(inst.api_key.as_deref(), Some("sk_live_abc"));
    }
}
