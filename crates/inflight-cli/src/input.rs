use anyhow::{Result, anyhow};
use is_terminal::IsTerminal;
use std::io::Read;
use std::path::PathBuf;

/// Where the log text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` both mean stdin
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }

    /// Read at most `max_bytes + 1` bytes: enough for the parser to reject
    /// an oversized log without pulling all of it into memory.
    pub fn read(&self, max_bytes: usize) -> Result<String> {
        let limit = (max_bytes as u64).saturating_add(1);
        let mut buf = Vec::new();

        match self {
            InputSource::File(path) => {
                let file = std::fs::File::open(path)
                    .map_err(|e| anyhow!("failed to read {}: {}", path.display(), e))?;
                file.take(limit)
                    .read_to_end(&mut buf)
                    .map_err(|e| anyhow!("failed to read {}: {}", path.display(), e))?;
            }
            InputSource::Stdin => {
                let stdin = std::io::stdin();
                if stdin.is_terminal() {
                    eprintln!("Paste a dbt log, then press Ctrl-D:");
                }
                stdin
                    .lock()
                    .take(limit)
                    .read_to_end(&mut buf)
                    .map_err(|e| anyhow!("failed to read stdin: {}", e))?;
            }
        }

        tracing::debug!(source = %self, bytes = buf.len(), "read input");
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some(PathBuf::from("-"))),
            InputSource::Stdin
        );
        assert_eq!(
            InputSource::from_arg(Some(PathBuf::from("run.log"))),
            InputSource::File(PathBuf::from("run.log"))
        );
    }

    #[test]
    fn test_read_stops_one_byte_past_the_limit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.log");
        std::fs::write(&path, "x".repeat(100)).unwrap();

        let text = InputSource::File(path).read(10).unwrap();
        assert_eq!(text.len(), 11);
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = InputSource::File(PathBuf::from("/nonexistent/run.log"))
            .read(1024)
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/run.log"));
    }
}
