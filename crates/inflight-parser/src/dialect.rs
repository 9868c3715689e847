use crate::registry::{self, DOTTED_NAME, FILLER_DIALECT};
use inflight_types::Phase;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static DOTTED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{}$", DOTTED_NAME)).unwrap());

/// Tokens dropped before looking for a task name in an unrecognized body
const FILLER_TOKENS: &[&str] = &[
    "sql", "python", "model", "created", "creating", "file", "loaded", "in", "of",
];

static BUILTIN: LazyLock<Vec<Dialect>> = LazyLock::new(|| {
    registry::get_all_dialects()
        .iter()
        .map(|meta| Dialect {
            name: meta.name.to_string(),
            description: meta.description.to_string(),
            patterns: meta
                .patterns
                .iter()
                .map(|p| Regex::new(p).unwrap())
                .collect(),
            terminal_patterns: meta
                .terminal_patterns
                .iter()
                .map(|p| Regex::new(p).unwrap())
                .collect(),
            kind: meta.kind.map(str::to_string),
            builtin: true,
        })
        .collect()
});

/// User-supplied dialect, as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Patterns tried only on completion lines
    #[serde(default)]
    pub terminal_patterns: Vec<String>,
    #[serde(default)]
    pub kind: Option<String>,
}

#[derive(Debug)]
pub enum DialectError {
    InvalidPattern { dialect: String, source: regex::Error },
    MissingNameGroup { dialect: String, pattern: String },
    NoPatterns { dialect: String },
    DuplicateName { dialect: String },
}

impl fmt::Display for DialectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialectError::InvalidPattern { dialect, source } => {
                write!(f, "dialect '{}': invalid pattern: {}", dialect, source)
            }
            DialectError::MissingNameGroup { dialect, pattern } => write!(
                f,
                "dialect '{}': pattern '{}' has no (?P<name>...) group",
                dialect, pattern
            ),
            DialectError::NoPatterns { dialect } => {
                write!(f, "dialect '{}' has no patterns", dialect)
            }
            DialectError::DuplicateName { dialect } => {
                write!(f, "dialect '{}' is already defined", dialect)
            }
        }
    }
}

impl std::error::Error for DialectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DialectError::InvalidPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A named set of body patterns that pull the task name (and optionally the
/// kind) out of one family of dbt progress lines
#[derive(Debug, Clone)]
pub struct Dialect {
    pub name: String,
    pub description: String,
    patterns: Vec<Regex>,
    terminal_patterns: Vec<Regex>,
    kind: Option<String>,
    builtin: bool,
}

impl Dialect {
    pub fn is_builtin(&self) -> bool {
        self.builtin
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }

    pub fn terminal_patterns(&self) -> impl Iterator<Item = &str> {
        self.terminal_patterns.iter().map(Regex::as_str)
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn from_spec(spec: &DialectSpec) -> Result<Self, DialectError> {
        if spec.patterns.is_empty() && spec.terminal_patterns.is_empty() {
            return Err(DialectError::NoPatterns {
                dialect: spec.name.clone(),
            });
        }

        Ok(Self {
            name: spec.name.clone(),
            description: spec.description.clone(),
            patterns: compile(&spec.name, &spec.patterns)?,
            terminal_patterns: compile(&spec.name, &spec.terminal_patterns)?,
            kind: spec.kind.clone(),
            builtin: false,
        })
    }

    fn match_body(&self, body: &str, phase: Phase) -> Option<BodyMatch> {
        let terminal: &[Regex] = if phase.is_terminal() {
            &self.terminal_patterns
        } else {
            &[]
        };
        self.patterns.iter().chain(terminal).find_map(|re| {
            let caps = re.captures(body)?;
            let name = caps.name("name")?.as_str().to_string();
            let kind = caps
                .name("kind")
                .map(|m| m.as_str().to_string())
                .or_else(|| self.kind.clone());
            Some(BodyMatch {
                dialect: self.name.clone(),
                task_name: Some(name),
                kind,
            })
        })
    }
}

/// What a dialect extracted from the body of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyMatch {
    pub dialect: String,
    pub task_name: Option<String>,
    pub kind: Option<String>,
}

/// Ordered dialect table; the first dialect whose pattern matches wins and
/// the filler rule runs when none does
#[derive(Debug, Clone)]
pub struct DialectSet {
    dialects: Vec<Dialect>,
}

impl Default for DialectSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DialectSet {
    pub fn builtin() -> Self {
        Self {
            dialects: BUILTIN.clone(),
        }
    }

    /// Append a user dialect; it is tried after the built-ins
    pub fn push_spec(&mut self, spec: &DialectSpec) -> Result<(), DialectError> {
        if spec.name == FILLER_DIALECT || self.dialects.iter().any(|d| d.name == spec.name) {
            return Err(DialectError::DuplicateName {
                dialect: spec.name.clone(),
            });
        }
        self.dialects.push(Dialect::from_spec(spec)?);
        Ok(())
    }

    pub fn with_specs(specs: &[DialectSpec]) -> Result<Self, DialectError> {
        let mut set = Self::builtin();
        for spec in specs {
            set.push_spec(spec)?;
        }
        Ok(set)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dialect> {
        self.dialects.iter()
    }

    pub fn len(&self) -> usize {
        self.dialects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialects.is_empty()
    }

    pub fn match_body(&self, body: &str, phase: Phase) -> BodyMatch {
        self.dialects
            .iter()
            .find_map(|d| d.match_body(body, phase))
            .unwrap_or_else(|| filler_match(body))
    }
}

fn compile(dialect: &str, patterns: &[String]) -> Result<Vec<Regex>, DialectError> {
    let mut compiled = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let re = Regex::new(pattern).map_err(|source| DialectError::InvalidPattern {
            dialect: dialect.to_string(),
            source,
        })?;
        if !re.capture_names().flatten().any(|n| n == "name") {
            return Err(DialectError::MissingNameGroup {
                dialect: dialect.to_string(),
                pattern: pattern.clone(),
            });
        }
        compiled.push(re);
    }
    Ok(compiled)
}

/// Last resort: drop filler words and take the first dotted identifier left
fn filler_match(body: &str) -> BodyMatch {
    let task_name = body
        .split_whitespace()
        .filter(|token| !FILLER_TOKENS.contains(token))
        .find(|token| DOTTED_REGEX.is_match(token))
        .map(str::to_string);

    BodyMatch {
        dialect: FILLER_DIALECT.to_string(),
        task_name,
        kind: None,
    }
}
