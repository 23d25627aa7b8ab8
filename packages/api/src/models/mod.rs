//! # Transport models
//!
//! Thin shapes for the JSON the backend returns. They hold no invariants of
//! their own; every field the UI can live without is `#[serde(default)]` so a
//! partially populated response still renders.
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | [`auth`] | `/api/auth/*` |
//! | [`products`] | `/api/products*` |
//! | [`dashboard`] | `/api/dashboard/summary`, `/api/clients/summary` |
//! | [`uploads`] | `/api/uploads*`, `/api/client-uploads` |
//! | [`phone_numbers`] | `/api/phone-numbers*` |
//! | [`notifications`] | `/api/notifications*` |
//! | [`ai`] | `/api/ai/query` |

pub mod ai;
pub mod auth;
pub mod dashboard;
pub mod notifications;
pub mod phone_numbers;
pub mod products;
pub mod uploads;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Accept a string, a number or null where the UI only needs display text.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_string")]
        codigo: String,
    }

    #[test]
    fn test_lenient_string() {
        let row: Row = serde_json::from_str(r#"{"codigo": 12345}"#).unwrap();
        assert_eq!(row.codigo, "12345");
        let row: Row = serde_json::from_str(r#"{"codigo": "A-1"}"#).unwrap();
        assert_eq!(row.codigo, "A-1");
        let row: Row = serde_json::from_str(r#"{"codigo": null}"#).unwrap();
        assert_eq!(row.codigo, "");
        let row: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(row.codigo, "");
    }
}
