use std::fmt;

use crate::presentation::view_models::{CreateView, DialectListViewModel, ViewMode};

impl CreateView for DialectListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(DialectListView { data: self, mode })
    }
}

struct DialectListView<'a> {
    data: &'a DialectListViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for DialectListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => {
                for dialect in &self.data.dialects {
                    writeln!(f, "{}", dialect.name)?;
                }
            }
            ViewMode::Compact | ViewMode::Standard => {
                writeln!(f, "{:<12} {:<10} {:<8} DESCRIPTION", "DIALECT", "KIND", "SOURCE")?;
                for dialect in &self.data.dialects {
                    writeln!(
                        f,
                        "{:<12} {:<10} {:<8} {}",
                        dialect.name,
                        dialect.kind.as_deref().unwrap_or("-"),
                        if dialect.builtin { "builtin" } else { "config" },
                        dialect.description
                    )?;
                }
            }
            ViewMode::Verbose => {
                for (i, dialect) in self.data.dialects.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "{}: {}", dialect.name, dialect.description)?;
                    if let Some(kind) = &dialect.kind {
                        writeln!(f, "  kind:    {}", kind)?;
                    }
                    for pattern in &dialect.patterns {
                        writeln!(f, "  pattern: {}", pattern)?;
                    }
                    for pattern in &dialect.terminal_patterns {
                        writeln!(f, "  on done: {}", pattern)?;
                    }
                    if let Some(example) = &dialect.example {
                        writeln!(f, "  example: {}", example)?;
                    }
                }
            }
        }
        Ok(())
    }
}
