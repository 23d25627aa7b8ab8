use serde::{Deserialize, Serialize};

/// Canned questions offered as chips on an empty chat.
pub const SUGGESTIONS: [&str; 5] = [
    "Quais produtos vencem essa semana?",
    "Qual o custo total dos produtos muito críticos?",
    "Quantos produtos estão vencidos?",
    "Quais produtos da filial 3B estão em atenção?",
    "Qual o produto mais próximo de vencer?",
];

#[derive(Debug, Clone, Serialize)]
pub struct AiQuery {
    pub question: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AiAnswer {
    #[serde(default)]
    pub answer: String,
}
