use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotificationLog {
    pub id: i64,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub sent_at: Option<String>,
}

impl NotificationLog {
    pub fn direction_label(&self) -> &'static str {
        if self.direction == "outbound" {
            "Saída"
        } else {
            "Entrada"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NotificationPage {
    #[serde(default)]
    pub items: Vec<NotificationLog>,
    #[serde(default)]
    pub total: u64,
}

/// Outcome of a manual notification run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TriggerResult {
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub skipped: u64,
    #[serde(default)]
    pub errors: Vec<Value>,
}

impl TriggerResult {
    pub fn summary(&self) -> String {
        format!(
            "✅ Processado! Enviado: {} | Ignorado (já enviou): {} | Erros: {}",
            self.sent,
            self.skipped,
            self.errors.len()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SchedulerJob {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub next_run: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SchedulerStatus {
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub jobs: Vec<SchedulerJob>,
}

impl SchedulerStatus {
    pub fn next_run(&self) -> Option<&str> {
        self.jobs.first().and_then(|j| j.next_run.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EvolutionInstance {
    #[serde(default, rename = "instanceName")]
    pub instance_name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// WhatsApp gateway connection state.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EvolutionStatus {
    #[serde(default)]
    pub instance: Option<EvolutionInstance>,
    #[serde(default)]
    pub state: Option<String>,
}

impl EvolutionStatus {
    pub fn is_connected(&self) -> bool {
        self.instance
            .as_ref()
            .and_then(|i| i.state.as_deref())
            == Some("open")
    }

    pub fn is_closed(&self) -> bool {
        self.state.as_deref() == Some("close")
    }

    pub fn instance_name(&self) -> Option<&str> {
        self.instance.as_ref().and_then(|i| i.instance_name.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QrCode {
    #[serde(default)]
    pub base64: Option<String>,
}

/// QR payload; gateway versions disagree on whether it is nested.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EvolutionQr {
    #[serde(default)]
    pub qrcode: Option<QrCode>,
    #[serde(default)]
    pub base64: Option<String>,
}

impl EvolutionQr {
    pub fn image(&self) -> Option<&str> {
        self.qrcode
            .as_ref()
            .and_then(|q| q.base64.as_deref())
            .or(self.base64.as_deref())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_summary() {
        let result: TriggerResult =
            serde_json::from_str(r#"{"sent": 3, "skipped": 1, "errors": []}"#).unwrap();
        let summary = result.summary();
        assert!(summary.contains("Enviado: 3"));
        assert!(summary.contains("Ignorado (já enviou): 1"));
        assert!(summary.contains("Erros: 0"));
    }

    #[test]
    fn test_evolution_status() {
        let status: EvolutionStatus = serde_json::from_str(
            r#"{"instance": {"instanceName": "akram", "state": "open"}}"#,
        )
        .unwrap();
        assert!(status.is_connected());
        assert_eq!(status.instance_name(), Some("akram"));

        let closed: EvolutionStatus = serde_json::from_str(r#"{"state": "close"}"#).unwrap();
        assert!(!closed.is_connected());
        assert!(closed.is_closed());
    }

    #[test]
    fn test_qr_image_shapes() {
        let nested: EvolutionQr =
            serde_json::from_str(r#"{"qrcode": {"base64": "data:image/png;base64,AA"}}"#).unwrap();
        assert_eq!(nested.image(), Some("data:image/png;base64,AA"));

        let flat: EvolutionQr = serde_json::from_str(r#"{"base64": "data:x"}"#).unwrap();
        assert_eq!(flat.image(), Some("data:x"));

        let empty: EvolutionQr = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.image(), None);
    }

    #[test]
    fn test_scheduler_next_run() {
        let status: SchedulerStatus = serde_json::from_str(
            r#"{"running": true, "jobs": [{"id": "daily", "next_run": "2025-03-02T08:00:00"}]}"#,
        )
        .unwrap();
        assert!(status.running);
        assert_eq!(status.next_run(), Some("2025-03-02T08:00:00"));
        assert_eq!(SchedulerStatus::default().next_run(), None);
    }
}
