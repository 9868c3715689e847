/// Static description of a built-in line dialect
#[derive(Debug, Clone)]
pub struct DialectMetadata {
    pub name: &'static str,
    pub description: &'static str,
    /// Body patterns, matched against the text between the phase keyword and
    /// the trailing `[...]` annotation. Each needs a `name` group.
    pub patterns: &'static [&'static str],
    /// Tried after `patterns`, and only on completion lines (never START)
    pub terminal_patterns: &'static [&'static str],
    /// Kind recorded when the pattern has no `kind` group
    pub kind: Option<&'static str>,
    pub example: &'static str,
}

/// Dotted `schema.object` identifier (more segments are allowed for
/// adapters that print `database.schema.object`)
pub(crate) const DOTTED_NAME: &str = r"\w+(?:\.\w+)+";

pub const FILLER_DIALECT: &str = "filler";

const DIALECTS: &[DialectMetadata] = &[
    DialectMetadata {
        name: "model",
        description: "dbt run / build models",
        patterns: &[
            r"^(?:(?:created|creating)\s+)?(?:sql|python)\s+(?P<kind>\w+(?:\s+\w+)*?)\s+model\s+(?P<name>\w+(?:\.\w+)+)$",
        ],
        terminal_patterns: &[],
        kind: None,
        example: "10:03:19  1 of 10 OK created sql table model hyrule.source_quests  [SELECT in 10.78s]",
    },
    DialectMetadata {
        name: "seed",
        description: "dbt seed",
        patterns: &[r"^(?:loaded\s+)?seed\s+file\s+(?P<name>\w+(?:\.\w+)+)$"],
        terminal_patterns: &[],
        kind: Some("seed"),
        example: "09:12:40  1 of 3 OK loaded seed file hyrule.raw_rupees  [INSERT 120 in 0.21s]",
    },
    DialectMetadata {
        name: "snapshot",
        description: "dbt snapshot",
        patterns: &[r"^(?:snapshot|snapshotted)\s+(?P<name>\w+(?:\.\w+)+)$"],
        terminal_patterns: &[],
        kind: Some("snapshot"),
        example: "09:12:41  1 of 1 OK snapshotted snapshots.quests_snapshot  [INSERT 0 1 in 0.92s]",
    },
    DialectMetadata {
        name: "freshness",
        description: "dbt source freshness",
        patterns: &[r"^(?:STALE\s+)?freshness\s+of\s+(?P<name>\w+(?:\.\w+)+)$"],
        terminal_patterns: &[],
        kind: Some("freshness"),
        example: "11:20:05  2 of 4 WARN freshness of hyrule.fairies  [WARN in 0.44s]",
    },
    DialectMetadata {
        name: "skipped",
        description: "nodes skipped after an upstream failure",
        patterns: &[r"^relation\s+(?P<name>\w+(?:\.\w+)+)(?:\s+due\s+to\b.*)?$"],
        terminal_patterns: &[],
        kind: None,
        example: "10:09:02  14 of 20 SKIP relation hyrule.mart_worlds due to ephemeral model error  [ERROR SKIP]",
    },
    DialectMetadata {
        name: "test",
        description: "dbt test / build data tests",
        patterns: &[r"^test\s+(?P<name>\w+(?:\.\w+)*)$"],
        terminal_patterns: &[r"^(?:\d+\s+)?(?P<name>\w+)$"],
        kind: Some("test"),
        example: "10:09:10  15 of 20 FAIL 3 not_null_fct_quests_quest_id  [FAIL 3 in 0.12s]",
    },
];

pub fn get_all_dialects() -> &'static [DialectMetadata] {
    DIALECTS
}

pub fn get_dialect_names() -> Vec<&'static str> {
    DIALECTS.iter().map(|d| d.name).collect()
}

pub fn get_dialect_metadata(name: &str) -> Option<&'static DialectMetadata> {
    DIALECTS.iter().find(|d| d.name == name)
}
