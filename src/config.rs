//! Loading parser limits from a TOML file.

use std::path::Path;

use thiserror::Error;

use crate::parser::ParserLimits;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Parse limits from TOML text. Missing keys keep their defaults.
pub fn parse_limits(text: &str) -> Result<ParserLimits, toml::de::Error> {
    toml::from_str(text)
}

/// Read limits from `path`.
pub fn load_limits(path: impl AsRef<Path>) -> Result<ParserLimits, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: display.clone(),
        source,
    })?;
    parse_limits(&text).map_err(|source| ConfigError::Toml { path: display, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_TOKENS};

    #[test]
    fn test_parse_limits() {
        let limits = parse_limits("max_tokens = 64\nmax_depth = 4\n").unwrap();
        assert_eq!(limits, ParserLimits { max_tokens: 64, max_depth: 4 });

        let limits = parse_limits("").unwrap();
        assert_eq!(limits.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(limits.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(parse_limits("max_width = 3").is_err());
        assert!(parse_limits("max_depth = \"deep\"").is_err());
    }

    #[test]
    fn test_load_limits() {
        let path = std::env::temp_dir().join(format!("cmd-recognizer-limits-{}.toml", std::process::id()));
        std::fs::write(&path, "max_depth = 9\n").unwrap();
        let limits = load_limits(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(limits.max_depth, 9);

        let err = load_limits(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
