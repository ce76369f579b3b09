//! Shared TOML loading for the `config/*.toml` files.
use std::{fmt, fs, path::Path};

use bevy::log::warn;
use serde::de::DeserializeOwned;

/// Failure reading or parsing a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Read { path: String, message: String },
    Parse { path: String, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, message } => write!(f, "failed to read {}: {}", path, message),
            Self::Parse { path, message } => write!(f, "failed to parse {}: {}", path, message),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parses a TOML document into `T`, tagging errors with `origin`.
pub fn parse_toml<T: DeserializeOwned>(origin: &str, data: &str) -> Result<T, ConfigError> {
    toml::from_str::<T>(data).map_err(|err| ConfigError::Parse {
        path: origin.to_string(),
        message: err.to_string(),
    })
}

/// Reads and parses a TOML file from disk.
pub fn load_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let data = fs::read_to_string(path).map_err(|err| ConfigError::Read {
        path: origin.clone(),
        message: err.to_string(),
    })?;
    parse_toml(&origin, &data)
}

/// Loads `path`, falling back to `T::default()` with a warning on any failure.
pub fn load_or_default<T: DeserializeOwned + Default>(path: impl AsRef<Path>) -> T {
    match load_toml(path) {
        Ok(value) => value,
        Err(err) => {
            warn!("{}. Falling back to defaults.", err);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Default, PartialEq)]
    #[serde(default)]
    struct Sample {
        speed: f32,
        label: String,
    }

    #[test]
    fn parses_partial_documents_with_defaults() {
        let parsed: Sample = parse_toml("inline", "speed = 2.5").expect("valid toml");
        assert_eq!(parsed.speed, 2.5);
        assert!(parsed.label.is_empty());
    }

    #[test]
    fn parse_errors_name_their_origin() {
        let err = parse_toml::<Sample>("config/broken.toml", "speed = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config/broken.toml"));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let err = load_toml::<Sample>("config/definitely-missing.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));

        let value: Sample = load_or_default("config/definitely-missing.toml");
        assert_eq!(value, Sample::default());
    }
}
