use clap::ValueEnum;
use inflight_types::JoinKey;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum JoinKeyArg {
    /// Match by task index alone
    Index,
    /// Match by task index within its `of <total>` group
    Cohort,
}

impl fmt::Display for JoinKeyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinKeyArg::Index => write!(f, "index"),
            JoinKeyArg::Cohort => write!(f, "cohort"),
        }
    }
}

impl From<JoinKeyArg> for JoinKey {
    fn from(arg: JoinKeyArg) -> Self {
        match arg {
            JoinKeyArg::Index => JoinKey::TaskIndex,
            JoinKeyArg::Cohort => JoinKey::Cohort,
        }
    }
}
