use serde::Deserialize;

/// A row of the product or client upload history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadRecord {
    pub id: i64,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub row_count: Option<u64>,
    #[serde(default)]
    pub uploaded_by: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Completed,
    Failed,
    Processing,
}

impl UploadStatus {
    pub fn parse(status: &str) -> Self {
        match status {
            "completed" => UploadStatus::Completed,
            "failed" => UploadStatus::Failed,
            _ => UploadStatus::Processing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UploadStatus::Completed => "Concluído",
            UploadStatus::Failed => "Erro",
            UploadStatus::Processing => "Processando",
        }
    }
}

impl UploadRecord {
    pub fn status(&self) -> UploadStatus {
        UploadStatus::parse(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(UploadStatus::parse("completed").label(), "Concluído");
        assert_eq!(UploadStatus::parse("failed").label(), "Erro");
        assert_eq!(UploadStatus::parse("pending").label(), "Processando");
        assert_eq!(UploadStatus::parse("").label(), "Processando");
    }
}
