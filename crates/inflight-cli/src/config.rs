use anyhow::{Result, anyhow};
use inflight_engine::Options;
use inflight_parser::{DialectSpec, Limits, LogParser};
use inflight_types::JoinKey;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "INFLIGHT_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit `--config` path
/// 2. INFLIGHT_CONFIG environment variable
/// 3. `<user config dir>/inflight/config.toml`
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(path));
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Some(expand_tilde(Path::new(&env_path)));
    }

    dirs::config_dir().map(|dir| dir.join("inflight").join("config.toml"))
}

fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub join_key: JoinKey,
    pub limits: Limits,
    pub dialects: Vec<DialectSpec>,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("failed to read config {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("invalid config {}: {}", path.display(), e))?;

        // Compile the extra dialects now so a bad pattern fails at startup
        config.parser()?;

        tracing::debug!(
            path = %path.display(),
            dialects = config.dialects.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Built-in dialects followed by the ones declared in this file
    pub fn parser(&self) -> Result<LogParser> {
        LogParser::new()
            .with_limits(self.limits)
            .with_extra_dialects(&self.dialects)
            .map_err(|e| anyhow!("invalid dialect in config: {}", e))
    }

    pub fn options(&self) -> Result<Options> {
        Ok(Options::default()
            .with_join_key(self.join_key)
            .with_parser(self.parser()?))
    }
}
