//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --format html --sheet rentals.toml                                 │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     RENTAL_FORMAT=json                                                 │
//! │     RENTAL_SHEET=./rentals.toml                                        │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <PATH>, or ./rental-statement.toml if present             │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     format = text, built-in reference sheet                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # rental-statement.toml
//! format = "all"             # text | html | json | all
//! sheet = "rentals.toml"
//! ```

use rental_core::StatementFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "rental-statement.toml";

/// Environment variable overriding the output format.
pub const ENV_FORMAT: &str = "RENTAL_FORMAT";

/// Environment variable overriding the rental sheet path.
pub const ENV_SHEET: &str = "RENTAL_SHEET";

// =============================================================================
// Output Format
// =============================================================================

/// What the CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
    /// Text statement, blank lines, then the HTML statement.
    All,
}

impl OutputFormat {
    /// Statement formats to print, in order.
    pub fn statement_formats(&self) -> Vec<StatementFormat> {
        match self {
            OutputFormat::Text => vec![StatementFormat::Text],
            OutputFormat::Html => vec![StatementFormat::Html],
            OutputFormat::Json => vec![StatementFormat::Json],
            OutputFormat::All => vec![StatementFormat::Text, StatementFormat::Html],
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::All => write!(f, "all"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "both" => Ok(OutputFormat::All),
            other => match other.parse::<StatementFormat>() {
                Ok(StatementFormat::Text) => Ok(OutputFormat::Text),
                Ok(StatementFormat::Html) => Ok(OutputFormat::Html),
                Ok(StatementFormat::Json) => Ok(OutputFormat::Json),
                Err(_) => Err(CliError::InvalidConfig(format!(
                    "Unknown output format: '{}'. Valid options: text, html, json, all",
                    other
                ))),
            },
        }
    }
}

// =============================================================================
// CLI Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Rental sheet to print. `None` prints the built-in reference sheet.
    #[serde(default)]
    pub sheet: Option<PathBuf>,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagOverrides {
    pub sheet: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    /// Loads configuration from file, environment and flags, then validates
    /// the merged result.
    ///
    /// An explicitly given config file must exist; the default one is
    /// optional.
    pub fn load(config_path: Option<&Path>, flags: &FlagOverrides) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    debug!(path = DEFAULT_CONFIG_FILE, "Config file not found, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.apply_flags(flags);
        config.validate()?;

        Ok(config)
    }

    /// Reads a TOML config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CliError::ConfigLoadFailed(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> CliResult<Self> {
        toml::from_str(contents).map_err(|e| CliError::ConfigLoadFailed(e.to_string()))
    }

    /// Applies `RENTAL_*` overrides read through `lookup`.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(format) = lookup(ENV_FORMAT) {
            match format.parse() {
                Ok(parsed) => {
                    debug!(format = %format, "Overriding output format from environment");
                    self.format = parsed;
                }
                Err(e) => warn!("Ignoring {}: {}", ENV_FORMAT, e),
            }
        }

        if let Some(sheet) = lookup(ENV_SHEET) {
            debug!(sheet = %sheet, "Overriding rental sheet from environment");
            self.sheet = Some(PathBuf::from(sheet));
        }
    }

    /// Applies command-line flags over everything else.
    pub fn apply_flags(&mut self, flags: &FlagOverrides) {
        if let Some(format) = flags.format {
            self.format = format;
        }
        if let Some(sheet) = &flags.sheet {
            self.sheet = Some(sheet.clone());
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if let Some(sheet) = &self.sheet {
            if sheet.as_os_str().is_empty() {
                return Err(CliError::InvalidConfig(
                    "sheet path must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.sheet.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("Both".parse::<OutputFormat>().unwrap(), OutputFormat::All);
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_all_prints_text_then_html() {
        assert_eq!(
            OutputFormat::All.statement_formats(),
            vec![StatementFormat::Text, StatementFormat::Html]
        );
    }

    #[test]
    fn test_from_toml() {
        let config =
            CliConfig::from_toml_str("format = \"json\"\nsheet = \"rentals.toml\"\n").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.sheet, Some(PathBuf::from("rentals.toml")));

        let empty = CliConfig::from_toml_str("").unwrap();
        assert_eq!(empty, CliConfig::default());

        assert!(matches!(
            CliConfig::from_toml_str("format = \"pdf\""),
            Err(CliError::ConfigLoadFailed(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> =
            HashMap::from([(ENV_FORMAT, "html"), (ENV_SHEET, "/tmp/sheet.json")]);
        let mut config = CliConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.format, OutputFormat::Html);
        assert_eq!(config.sheet, Some(PathBuf::from("/tmp/sheet.json")));
    }

    #[test]
    fn test_bad_format_override_is_ignored() {
        let mut config = CliConfig {
            format: OutputFormat::Json,
            sheet: None,
        };
        config.apply_overrides(|key| (key == ENV_FORMAT).then(|| "pdf".to_string()));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_flags_win_over_environment() {
        let mut config = CliConfig::default();
        config.apply_overrides(|key| match key {
            ENV_FORMAT => Some("json".to_string()),
            ENV_SHEET => Some("env.toml".to_string()),
            _ => None,
        });
        config.apply_flags(&FlagOverrides {
            sheet: None,
            format: Some(OutputFormat::Html),
        });

        assert_eq!(config.format, OutputFormat::Html);
        assert_eq!(config.sheet, Some(PathBuf::from("env.toml")));
    }

    #[test]
    fn test_load_rejects_empty_sheet_flag() {
        let dir = std::env::temp_dir().join(format!("rental-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rental-statement.toml");
        std::fs::write(&path, "sheet = \"rentals.toml\"\n").unwrap();

        let flags = FlagOverrides {
            sheet: Some(PathBuf::new()),
            format: None,
        };
        let err = CliConfig::load(Some(&path), &flags).unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_validate_rejects_empty_sheet() {
        let config = CliConfig {
            format: OutputFormat::Text,
            sheet: Some(PathBuf::new()),
        };
        assert!(matches!(config.validate(), Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let path = Path::new("/nonexistent/rental-statement.toml");
        let err = CliConfig::load(Some(path), &FlagOverrides::default()).unwrap_err();
        assert!(matches!(err, CliError::ConfigLoadFailed(_)));
    }
}
