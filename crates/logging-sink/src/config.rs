//! crates/logging-sink/src/config.rs
//! Rendering configuration for terminal-style consoles.

use std::env;

/// Environment variable holding the indentation width per group level.
pub const INDENT_ENV: &str = "GROUPLOG_INDENT";
/// Environment variable toggling ANSI escape output.
pub const ANSI_ENV: &str = "GROUPLOG_ANSI";
/// Environment variable toggling backtraces on `trace` output.
pub const BACKTRACE_ENV: &str = "GROUPLOG_BACKTRACE";

/// Error produced when a configuration token cannot be applied.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The token had no `=value` part.
    #[error("missing value in config token: {0}")]
    MissingValue(String),
    /// The key is not a known setting.
    #[error("unknown config key: {0}")]
    UnknownKey(String),
    /// The value of a numeric setting did not parse.
    #[error("invalid number for {key}: {value}")]
    InvalidNumber {
        /// Setting name.
        key: String,
        /// Offending value.
        value: String,
    },
    /// The value of a boolean setting did not parse.
    #[error("invalid boolean for {key}: {value}")]
    InvalidBool {
        /// Setting name.
        key: String,
        /// Offending value.
        value: String,
    },
}

/// Settings for [`WriterConsole`](crate::WriterConsole) and friends.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConsoleConfig {
    /// Spaces added per open group.
    pub indent_width: usize,
    /// Whether ANSI escape sequences (used by `clear`) may be written.
    pub ansi: bool,
    /// Whether `trace` output carries a captured backtrace.
    pub backtrace: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            ansi: false,
            backtrace: false,
        }
    }
}

impl ConsoleConfig {
    /// Sets the indentation width.
    #[must_use]
    pub const fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Enables or disables ANSI output.
    #[must_use]
    pub const fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Enables or disables backtraces on `trace` output.
    #[must_use]
    pub const fn with_backtrace(mut self, backtrace: bool) -> Self {
        self.backtrace = backtrace;
        self
    }

    /// Apply a single `key=value` token (e.g., "indent=4", "ansi=off").
    pub fn apply_token(&mut self, token: &str) -> Result<(), ConfigError> {
        let (key, value) = parse_token(token)?;

        match key {
            "indent" => {
                self.indent_width = value.parse().map_err(|_| ConfigError::InvalidNumber {
                    key: key.to_owned(),
                    value: value.to_owned(),
                })?;
            }
            "ansi" => self.ansi = parse_bool(key, value)?,
            "backtrace" => self.backtrace = parse_bool(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_owned())),
        }

        Ok(())
    }

    /// Builds a configuration from the `GROUPLOG_*` environment variables.
    ///
    /// Unset variables keep their defaults. Invalid values are reported
    /// through `tracing` and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlays the `GROUPLOG_*` environment variables onto `self`.
    pub fn apply_env(&mut self) {
        self.apply_lookup(|name| env::var(name).ok());
    }

    /// Overlays settings from an arbitrary variable lookup onto `self`.
    pub fn apply_lookup<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for (name, key) in [
            (INDENT_ENV, "indent"),
            (ANSI_ENV, "ansi"),
            (BACKTRACE_ENV, "backtrace"),
        ] {
            let Some(value) = lookup(name) else {
                continue;
            };
            if let Err(error) = self.apply_token(&format!("{key}={value}")) {
                tracing::warn!(target: "grouplog::config", variable = name, %error, "ignoring invalid setting");
            }
        }
    }
}

/// Parse a token like "indent=4" into ("indent", "4").
fn parse_token(token: &str) -> Result<(&str, &str), ConfigError> {
    let Some((key, value)) = token.split_once('=') else {
        return Err(ConfigError::MissingValue(token.to_owned()));
    };
    let (key, value) = (key.trim(), value.trim());
    if value.is_empty() {
        return Err(ConfigError::MissingValue(token.to_owned()));
    }
    Ok((key, value))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_terminal_console() {
        let config = ConsoleConfig::default();
        assert_eq!(config.indent_width, 2);
        assert!(!config.ansi);
        assert!(!config.backtrace);
    }

    #[test]
    fn apply_indent_token() {
        let mut config = ConsoleConfig::default();
        config.apply_token("indent=4").expect("valid token");
        assert_eq!(config.indent_width, 4);

        config.apply_token(" indent = 0 ").expect("whitespace tolerated");
        assert_eq!(config.indent_width, 0);
    }

    #[test]
    fn apply_bool_tokens() {
        let mut config = ConsoleConfig::default();
        config.apply_token("ansi=on").expect("valid token");
        config.apply_token("backtrace=YES").expect("valid token");
        assert!(config.ansi);
        assert!(config.backtrace);

        config.apply_token("ansi=0").expect("valid token");
        assert!(!config.ansi);
    }

    #[test]
    fn apply_token_errors() {
        let mut config = ConsoleConfig::default();
        assert_eq!(
            config.apply_token("indent"),
            Err(ConfigError::MissingValue("indent".to_owned()))
        );
        assert_eq!(
            config.apply_token("indent="),
            Err(ConfigError::MissingValue("indent=".to_owned()))
        );
        assert_eq!(
            config.apply_token("colour=1"),
            Err(ConfigError::UnknownKey("colour".to_owned()))
        );
        assert_eq!(
            config.apply_token("indent=-1"),
            Err(ConfigError::InvalidNumber {
                key: "indent".to_owned(),
                value: "-1".to_owned(),
            })
        );
        assert_eq!(
            config.apply_token("ansi=maybe"),
            Err(ConfigError::InvalidBool {
                key: "ansi".to_owned(),
                value: "maybe".to_owned(),
            })
        );
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn error_messages_name_the_problem() {
        let error = ConfigError::InvalidNumber {
            key: "indent".to_owned(),
            value: "x".to_owned(),
        };
        assert_eq!(error.to_string(), "invalid number for indent: x");
    }

    #[test]
    fn lookup_reads_variables_and_skips_invalid() {
        let vars: HashMap<&str, &str> = [
            (INDENT_ENV, "3"),
            (ANSI_ENV, "nonsense"),
            (BACKTRACE_ENV, "true"),
        ]
        .into_iter()
        .collect();

        let mut config = ConsoleConfig::default();
        config.apply_lookup(|name| vars.get(name).map(|v| (*v).to_owned()));
        assert_eq!(config.indent_width, 3);
        assert!(!config.ansi);
        assert!(config.backtrace);
    }

    #[test]
    fn lookup_without_variables_keeps_existing_settings() {
        let mut config = ConsoleConfig::default().with_ansi(true);
        config.apply_lookup(|_| None);
        assert_eq!(config, ConsoleConfig::default().with_ansi(true));
    }

    #[test]
    fn builders_chain() {
        let config = ConsoleConfig::default()
            .with_indent_width(8)
            .with_ansi(true)
            .with_backtrace(true);
        assert_eq!(config.indent_width, 8);
        assert!(config.ansi);
        assert!(config.backtrace);
    }
}
