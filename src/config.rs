//! Rendering configuration
//!
//! Loaded from a TOML file such as:
//!
//! ```toml
//! color = "auto"      # auto | always | never
//! week_start = "Mon"  # first day of "thisweek" / "nextweek"
//! padding = 1         # spaces between aligned columns
//! ```

use crate::error::{RenderError, Result};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Whether to emit ANSI styling
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Color when the destination is a terminal and `NO_COLOR` is unset
    #[default]
    auto,
    always,
    never,
}

impl ColorChoice {
    /// Decide color support given whether the destination is a terminal
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::always => true,
            ColorChoice::never => false,
            ColorChoice::auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorChoice::auto),
            "always" => Ok(ColorChoice::always),
            "never" => Ok(ColorChoice::never),
            _ => Err(format!(
                "Invalid color choice '{}'. Valid options are: auto, always, never",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub color: ColorChoice,
    pub week_start: Weekday,
    pub padding: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::auto,
            week_start: Weekday::Mon,
            padding: 1,
        }
    }
}

impl RenderConfig {
    /// Load from a TOML file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RenderError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.color, ColorChoice::auto);
        assert_eq!(config.week_start, Weekday::Mon);
        assert_eq!(config.padding, 1);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RenderConfig::from_toml_str("week_start = \"Sun\"").unwrap();
        assert_eq!(config.week_start, Weekday::Sun);
        assert_eq!(config.color, ColorChoice::auto);
        assert_eq!(config.padding, 1);
    }

    #[test]
    fn test_full_toml() {
        let config =
            RenderConfig::from_toml_str("color = \"never\"\nweek_start = \"Monday\"\npadding = 3")
                .unwrap();
        assert_eq!(config.color, ColorChoice::never);
        assert_eq!(config.week_start, Weekday::Mon);
        assert_eq!(config.padding, 3);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = RenderConfig::from_toml_str("color = \"sometimes\"").unwrap_err();
        assert!(matches!(err, RenderError::Config(_)));
    }

    #[test]
    fn test_explicit_color_choices_ignore_terminal() {
        assert!(ColorChoice::always.resolve(false));
        assert!(!ColorChoice::never.resolve(true));
        assert!(!ColorChoice::auto.resolve(false));
    }

    #[test]
    fn test_color_choice_from_str() {
        assert_eq!("always".parse::<ColorChoice>(), Ok(ColorChoice::always));
        assert!("rainbow".parse::<ColorChoice>().is_err());
    }
}
