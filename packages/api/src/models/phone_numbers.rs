//! Registered WhatsApp recipients.
//!
//! `notification_types` travels as a JSON array encoded inside a string.
//! Older rows were written with single quotes, so parsing normalizes them
//! before decoding and falls back to [`DEFAULT_ALERT_TYPE`] on anything
//! unreadable.

use serde::{Deserialize, Serialize};

/// Risk classes a recipient can subscribe to, in display order.
pub const ALERT_TYPES: [&str; 4] = ["MUITO CRÍTICO", "CRITICO", "ATENÇÃO", "VENCIDO"];

pub const DEFAULT_ALERT_TYPE: &str = "MUITO CRÍTICO";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhoneNumber {
    pub id: i64,
    pub number: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub can_query_ai: bool,
    #[serde(default)]
    pub notification_types: Option<String>,
}

impl PhoneNumber {
    pub fn alert_types(&self) -> Vec<String> {
        parse_alert_types(self.notification_types.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPhoneNumber {
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub notification_types: String,
}

/// Partial update; absent fields are left alone by the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PhoneNumberUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_query_ai: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_types: Option<String>,
}

pub fn parse_alert_types(raw: Option<&str>) -> Vec<String> {
    let fallback = || vec![DEFAULT_ALERT_TYPE.to_string()];
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return fallback();
    };
    match serde_json::from_str::<Vec<String>>(&raw.replace('\'', "\"")) {
        Ok(types) => types,
        Err(_) => fallback(),
    }
}

pub fn encode_alert_types(types: &[String]) -> String {
    serde_json::to_string(types).unwrap_or_else(|_| "[]".to_string())
}

/// Add `kind` when absent, remove it when present.
pub fn toggle_alert_type(types: &mut Vec<String>, kind: &str) {
    if let Some(pos) = types.iter().position(|t| t == kind) {
        types.remove(pos);
    } else {
        types.push(kind.to_string());
    }
}
