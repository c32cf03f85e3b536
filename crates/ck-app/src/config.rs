//! Application configuration, loaded from YAML.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Display and sweep settings. Every field has a default, so a partial (or
/// empty) document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Digits after the decimal point in displayed results
    pub precision: usize,
    pub sweep: SweepDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            sweep: SweepDefaults::default(),
        }
    }
}

/// Range used when a sweep request leaves bounds or step count out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepDefaults {
    pub start: f64,
    pub end: f64,
    pub steps: usize,
    /// Upper limit on samples per sweep
    pub max_steps: usize,
}

impl Default for SweepDefaults {
    fn default() -> Self {
        Self {
            start: 0.1,
            end: 10.0,
            steps: 50,
            max_steps: 500,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> AppResult<()> {
        if self.precision > 17 {
            return Err(AppError::Config(format!(
                "precision must be at most 17, got {}",
                self.precision
            )));
        }

        let sweep = &self.sweep;
        if !sweep.start.is_finite() || !sweep.end.is_finite() {
            return Err(AppError::Config(format!(
                "sweep bounds must be finite, got {} to {}",
                sweep.start, sweep.end
            )));
        }
        if sweep.steps < 2 || sweep.steps > sweep.max_steps {
            return Err(AppError::Config(format!(
                "sweep steps must be between 2 and max_steps ({}), got {}",
                sweep.max_steps, sweep.steps
            )));
        }
        Ok(())
    }
}

/// Parse and validate a YAML document.
pub fn parse_config(text: &str) -> AppResult<AppConfig> {
    // serde_yaml reads an empty document as null
    let config: AppConfig = if text.trim().is_empty() {
        AppConfig::default()
    } else {
        serde_yaml::from_str(text)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> AppResult<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.precision, 6);
        assert_eq!(config.sweep.start, 0.1);
        assert_eq!(config.sweep.end, 10.0);
        assert_eq!(config.sweep.steps, 50);
        assert_eq!(config.sweep.max_steps, 500);
        config.validate().unwrap();
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = parse_config("precision: 3\nsweep:\n  steps: 20\n").unwrap();
        assert_eq!(config.precision, 3);
        assert_eq!(config.sweep.steps, 20);
        assert_eq!(config.sweep.end, 10.0);
        assert_eq!(config.sweep.max_steps, 500);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
        assert_eq!(parse_config("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            parse_config("sweep:\n  steps: 1\n"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            parse_config("sweep:\n  steps: 600\n"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(parse_config("precision: 40\n"), Err(AppError::Config(_))));
        assert!(matches!(
            parse_config("precision: [1, 2]\n"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn yaml_round_trip() {
        let config = AppConfig {
            precision: 4,
            sweep: SweepDefaults {
                start: 1.0,
                end: 2.0,
                steps: 11,
                max_steps: 100,
            },
        };
        let text = serde_yaml::to_string(&config).unwrap();
        assert_eq!(parse_config(&text).unwrap(), config);
    }

    #[test]
    fn missing_path_is_default_and_missing_file_is_error() {
        assert_eq!(load_config(None).unwrap(), AppConfig::default());

        let path = std::env::temp_dir().join("chemkit-no-such-config.yaml");
        assert!(matches!(
            load_config(Some(&path)),
            Err(AppError::ConfigRead { .. })
        ));
    }
}
