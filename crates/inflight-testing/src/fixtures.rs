use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A captured dbt log bundled with the test suite
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub name: &'static str,
    pub text: &'static str,
}

/// The example run shown by `inflight example`; numbering restarts at
/// `11 of 12` after the `of 10` cohort
pub const HYRULE_EXAMPLE: Fixture = Fixture {
    name: "hyrule_example",
    text: include_str!("../fixtures/hyrule_example.log"),
};

/// dbt Cloud console copy: every line starts with a pasted "[0m" remnant
pub const DBT_CLOUD_RUN1: Fixture = Fixture {
    name: "dbt_cloud_run1",
    text: include_str!("../fixtures/dbt_cloud_run1.log"),
};

/// dbt Core run with dot leaders and one failed model
pub const DBT_CORE_RUN1: Fixture = Fixture {
    name: "dbt_core_run1",
    text: include_str!("../fixtures/dbt_core_run1.log"),
};

/// dbt Core build with ANSI colors: seeds, tests, a snapshot and a skip
pub const DBT_CORE_RUN2: Fixture = Fixture {
    name: "dbt_core_run2",
    text: include_str!("../fixtures/dbt_core_run2.log"),
};

/// dbt Core source freshness with PASS, WARN and ERROR STALE results
pub const DBT_CORE_SOURCE_FRESHNESS1: Fixture = Fixture {
    name: "dbt_core_source_freshness1",
    text: include_str!("../fixtures/dbt_core_source_freshness1.log"),
};

pub fn all() -> [Fixture; 5] {
    [
        HYRULE_EXAMPLE,
        DBT_CLOUD_RUN1,
        DBT_CORE_RUN1,
        DBT_CORE_RUN2,
        DBT_CORE_SOURCE_FRESHNESS1,
    ]
}

/// Temporary directory holding fixture logs as files, for CLI tests
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a fixture to `<name>.log` and return its path
    pub fn place(&self, fixture: Fixture) -> Result<PathBuf> {
        self.write(&format!("{}.log", fixture.name), fixture.text)
    }

    pub fn write(&self, file_name: &str, text: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(file_name);
        std::fs::write(&path, text)?;
        Ok(path)
    }
}
