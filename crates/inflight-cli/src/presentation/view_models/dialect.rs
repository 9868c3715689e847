use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DialectListViewModel {
    pub dialects: Vec<DialectEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DialectEntry {
    pub name: String,
    pub description: String,
    /// In match order; empty for the filler fallback
    pub patterns: Vec<String>,
    /// Tried only on completion lines
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub terminal_patterns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub builtin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}
