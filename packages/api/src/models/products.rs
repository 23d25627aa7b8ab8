use serde::Deserialize;

use super::lenient_string;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub codigo: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub embalagem: Option<String>,
    #[serde(default)]
    pub estoque: Option<f64>,
    #[serde(default)]
    pub quantidade: Option<f64>,
    #[serde(default)]
    pub validade: Option<String>,
    #[serde(default)]
    pub classe: Option<String>,
    #[serde(default)]
    pub preco_com_st: Option<f64>,
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(default)]
    pub filial: Option<String>,
    #[serde(default)]
    pub comprador: Option<String>,
}

/// One page of `/api/products`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub items: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

impl ProductPage {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Distinct values offered by the filter selects.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub filiais: Vec<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub ufs: Vec<String>,
    #[serde(default)]
    pub compradores: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductStats {
    #[serde(default)]
    pub total_products: u64,
    #[serde(default)]
    pub total_muito_critico: u64,
    #[serde(default)]
    pub total_critico: u64,
    #[serde(default)]
    pub total_atencao: u64,
    #[serde(default)]
    pub total_vencido: u64,
    #[serde(default)]
    pub total_custo_muito_critico: f64,
}

/// `/api/products/recalculate-classes` acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecalculateResult {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data_atual: String,
}

impl RecalculateResult {
    pub fn summary(&self) -> String {
        format!("{} (Data: {})", self.message, self.data_atual)
    }
}

/// Visual tone of a risk class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClasseTone {
    None,
    Expired,
    VeryCritical,
    Critical,
    Attention,
    Other,
}

impl ClasseTone {
    /// Classify a backend label. Order matters: "MUITO CRÍTICO" must not be
    /// taken for plain "CRITICO".
    pub fn of(classe: Option<&str>) -> Self {
        let Some(classe) = classe.filter(|c| !c.trim().is_empty()) else {
            return ClasseTone::None;
        };
        let upper = classe.to_uppercase();
        if upper.contains("VENCIDO") {
            ClasseTone::Expired
        } else if upper.contains("MUITO") {
            ClasseTone::VeryCritical
        } else if upper.contains("CRITICO") || upper.contains("CRÍTICO") {
            ClasseTone::Critical
        } else if upper.contains("ATENÇÃO") || upper.contains("ATENCAO") {
            ClasseTone::Attention
        } else {
            ClasseTone::Other
        }
    }

    /// Chart color for this class.
    pub fn color(self) -> Option<&'static str> {
        match self {
            ClasseTone::VeryCritical => Some("#09090b"),
            ClasseTone::Critical => Some("#ef4444"),
            ClasseTone::Attention => Some("#eab308"),
            ClasseTone::Expired => Some("#6b7280"),
            ClasseTone::Other => Some("#22c55e"),
            ClasseTone::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classe_tone() {
        assert_eq!(ClasseTone::of(None), ClasseTone::None);
        assert_eq!(ClasseTone::of(Some("")), ClasseTone::None);
        assert_eq!(ClasseTone::of(Some("VENCIDO")), ClasseTone::Expired);
        assert_eq!(ClasseTone::of(Some("MUITO CRÍTICO")), ClasseTone::VeryCritical);
        assert_eq!(ClasseTone::of(Some("muito critico")), ClasseTone::VeryCritical);
        assert_eq!(ClasseTone::of(Some("CRITICO")), ClasseTone::Critical);
        assert_eq!(ClasseTone::of(Some("ATENÇÃO")), ClasseTone::Attention);
        assert_eq!(ClasseTone::of(Some("Atencao")), ClasseTone::Attention);
        assert_eq!(ClasseTone::of(Some("OUTROS")), ClasseTone::Other);
    }

    #[test]
    fn test_product_page_navigation() {
        let page: ProductPage =
            serde_json::from_str(r#"{"items": [], "total": 95, "page": 2, "total_pages": 4}"#)
                .unwrap();
        assert!(page.has_previous());
        assert!(page.has_next());

        let last = ProductPage {
            page: 4,
            ..page
        };
        assert!(!last.has_next());
    }

    #[test]
    fn test_product_with_numeric_codigo() {
        let product: Product = serde_json::from_str(
            r#"{"id": 1, "codigo": 778, "descricao": "Dipirona 500mg", "preco_com_st": 12.5}"#,
        )
        .unwrap();
        assert_eq!(product.codigo, "778");
        assert_eq!(product.preco_com_st, Some(12.5));
        assert!(product.classe.is_none());
    }

    #[test]
    fn test_recalculate_summary() {
        let result = RecalculateResult {
            message: "Classes recalculadas".to_string(),
            data_atual: "2025-03-01".to_string(),
        };
        assert_eq!(result.summary(), "Classes recalculadas (Data: 2025-03-01)");
    }
}
