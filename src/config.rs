use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "ethcal.toml";

/// Top-level ethcal configuration.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EthcalConfig {
    /// Ethiopic calendar settings.
    #[serde(default)]
    pub ethiopic: EthiopicToml,

    /// Output settings.
    #[serde(default)]
    pub display: DisplayToml,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EthiopicToml {
    #[serde(default = "default_era")]
    pub era: String,
}

impl Default for EthiopicToml {
    fn default() -> Self {
        Self { era: default_era() }
    }
}

fn default_era() -> String {
    "auto".to_string()
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_script")]
    pub script: String,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            format: default_format(),
            script: default_script(),
        }
    }
}

fn default_format() -> String {
    "slash".to_string()
}
fn default_script() -> String {
    "geez".to_string()
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
/// read if present, and built-in defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<EthcalConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !fallback.is_file() {
                debug!("no config file, using defaults");
                return Ok(EthcalConfig::default());
            }
            fallback
        }
    };

    debug!(path = %path.display(), "reading config");
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: EthcalConfig = toml::from_str("").unwrap();
        assert_eq!(config, EthcalConfig::default());
        assert_eq!(config.ethiopic.era, "auto");
        assert_eq!(config.display.format, "slash");
        assert_eq!(config.display.script, "geez");
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config: EthcalConfig = toml::from_str(
            r#"
            [display]
            format = "long"
            "#,
        )
        .unwrap();
        assert_eq!(config.display.format, "long");
        assert_eq!(config.display.script, "geez");
        assert_eq!(config.ethiopic.era, "auto");
    }

    #[test]
    fn full_config() {
        let config: EthcalConfig = toml::from_str(
            r#"
            [ethiopic]
            era = "amete-alem"

            [display]
            format = "month-year"
            script = "latin"
            "#,
        )
        .unwrap();
        assert_eq!(config.ethiopic.era, "amete-alem");
        assert_eq!(config.display.format, "month-year");
        assert_eq!(config.display.script, "latin");
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<EthcalConfig, _> = toml::from_str(
            r#"
            [display]
            colour = "red"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn load_from_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ethiopic]\nera = \"amete-mihret\"").unwrap();
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.ethiopic.era, "amete-mihret");
        assert_eq!(config.display, DisplayToml::default());
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load(Some(&missing)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }

    #[test]
    fn load_invalid_toml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ethiopic\nera = 1").unwrap();
        let err = load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse TOML config"));
    }
}
