//! Error types for the zeppelin simulation.
//!
//! The simulation itself never fails at runtime: reaching the destination,
//! leaving the map and running out of time are reported through
//! [`Outcome`](crate::resources::session::Outcome). The only failures are
//! configuration problems, which are rejected before a session is built.

use std::fmt;

/// Errors that can occur while loading or validating a [`GameConfig`].
///
/// [`GameConfig`]: crate::resources::gameconfig::GameConfig
#[derive(Debug)]
pub enum ConfigError {
    /// The INI file could not be read or parsed.
    Load(String),
    /// Failed to write the configuration file.
    Io(std::io::Error),
    /// JSON (de)serialization failed.
    Json(serde_json::Error),
    /// A value is outside its allowed range.
    Invalid {
        /// Dotted `section.key` name of the offending value.
        field: &'static str,
        /// Human readable description of the constraint.
        reason: String,
    },
    /// The configured craft name is not in the profile registry.
    UnknownCraft(String),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(msg) => write!(f, "Failed to load config file: {}", msg),
            ConfigError::Io(e) => write!(f, "Failed to write config file: {}", e),
            ConfigError::Json(e) => write!(f, "Invalid JSON config: {}", e),
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid config value `{}`: {}", field, reason)
            }
            ConfigError::UnknownCraft(name) => write!(f, "Unknown craft profile `{}`", name),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_display_names_field() {
        let err = ConfigError::invalid("wind.smoothing", "must be in (0, 1]");
        assert_eq!(
            err.to_string(),
            "Invalid config value `wind.smoothing`: must be in (0, 1]"
        );
    }

    #[test]
    fn test_unknown_craft_display() {
        let err = ConfigError::UnknownCraft("L99".into());
        assert_eq!(err.to_string(), "Unknown craft profile `L99`");
    }

    #[test]
    fn test_io_error_has_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "nope");
        let err: ConfigError = io.into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
