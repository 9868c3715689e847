use crate::presentation::view_models::{CommandResultViewModel, DialectEntry, DialectListViewModel};
use inflight_parser::{DialectSet, FILLER_DIALECT, get_dialect_metadata};

pub fn present_dialects(dialects: &DialectSet) -> CommandResultViewModel<DialectListViewModel> {
    let mut entries: Vec<DialectEntry> = dialects
        .iter()
        .map(|dialect| DialectEntry {
            name: dialect.name.clone(),
            description: dialect.description.clone(),
            patterns: dialect.patterns().map(str::to_string).collect(),
            terminal_patterns: dialect.terminal_patterns().map(str::to_string).collect(),
            kind: dialect.kind().map(str::to_string),
            builtin: dialect.is_builtin(),
            example: get_dialect_metadata(&dialect.name).map(|meta| meta.example.to_string()),
        })
        .collect();

    entries.push(DialectEntry {
        name: FILLER_DIALECT.to_string(),
        description: "fallback: first dotted name left after dropping filler words".to_string(),
        patterns: Vec::new(),
        terminal_patterns: Vec::new(),
        kind: None,
        builtin: true,
        example: None,
    });

    CommandResultViewModel::new(DialectListViewModel { dialects: entries })
}
