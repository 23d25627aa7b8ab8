//! Spreadsheet files accepted by the upload endpoints.
//!
//! Upload methods on [`ApiClient`](crate::ApiClient) only take a
//! [`SpreadsheetFile`], so a file with the wrong extension is turned away
//! here and never reaches the network.

use reqwest::multipart::{Form, Part};

use crate::error::{ApiError, ApiResult};

pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["xlsx", "csv"];

pub const REJECTED_MESSAGE: &str = "Apenas arquivos .xlsx e .csv são aceitos";

/// Value for the file input's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = ".xlsx,.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct SpreadsheetFile {
    name: String,
    bytes: Vec<u8>,
}

impl SpreadsheetFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> ApiResult<Self> {
        let name = name.into();
        if !is_accepted(&name) {
            return Err(ApiError::Rejected(REJECTED_MESSAGE.to_string()));
        }
        Ok(Self { name, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn mime(&self) -> &'static str {
        if self.extension().as_deref() == Some("csv") {
            "text/csv"
        } else {
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        }
    }

    fn extension(&self) -> Option<String> {
        extension_of(&self.name)
    }

    /// Multipart body with the file under the `file` field.
    pub(crate) fn into_form(self) -> ApiResult<Form> {
        let mime = self.mime();
        let part = Part::bytes(self.bytes)
            .file_name(self.name)
            .mime_str(mime)
            .map_err(|e| ApiError::Rejected(e.to_string()))?;
        Ok(Form::new().part("file", part))
    }
}

fn extension_of(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

pub fn is_accepted(name: &str) -> bool {
    extension_of(name).is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_extensions() {
        assert!(is_accepted("estoque.xlsx"));
        assert!(is_accepted("ESTOQUE.XLSX"));
        assert!(is_accepted("clientes.2025.csv"));
    }

    #[test]
    fn test_rejected_extensions() {
        for name in ["estoque.xls", "estoque.pdf", "estoque", "csv", "estoque.csv.txt"] {
            let err = SpreadsheetFile::new(name, vec![1, 2, 3]).unwrap_err();
            assert_eq!(err, ApiError::Rejected(REJECTED_MESSAGE.to_string()), "{name}");
        }
    }

    #[test]
    fn test_file_keeps_name_and_bytes() {
        let file = SpreadsheetFile::new("base.csv", b"a;b\n1;2".to_vec()).unwrap();
        assert_eq!(file.name(), "base.csv");
        assert_eq!(file.len(), 7);
        assert_eq!(file.mime(), "text/csv");
    }
}
