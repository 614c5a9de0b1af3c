use serde::{de::Deserializer, Deserialize, Serialize};
use std::{fmt, path::PathBuf};

use crate::ConfigError;

const DEFAULT_DIR_NAME: &str = ".paycycle";

/// Stores user-configurable preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub currency_precision: Option<u8>,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub date_style: DateStyle,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the book and its backups.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            currency_precision: None,
            ui_color_enabled: Self::default_ui_color_enabled(),
            date_style: DateStyle::default(),
            data_root: None,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 6] = [
        "locale",
        "currency",
        "precision",
        "color",
        "date-style",
        "data-root",
    ];

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Application base directory: `$PAYCYCLE_HOME`, else `~/.paycycle`.
    pub fn app_base_dir() -> PathBuf {
        if let Some(custom) = std::env::var_os("PAYCYCLE_HOME") {
            return PathBuf::from(custom);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    /// Where the book lives: the configured root, or `<base>/data`.
    pub fn resolve_data_root(&self, base: &std::path::Path) -> PathBuf {
        match &self.data_root {
            Some(path) => path.clone(),
            None => base.join("data"),
        }
    }

    /// Updates one setting from its textual form, as typed by the user.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "locale" => self.locale = non_empty(key, value)?,
            "currency" => self.currency = non_empty(key, value)?.to_ascii_uppercase(),
            "precision" => {
                self.currency_precision = if value.eq_ignore_ascii_case("auto") {
                    None
                } else {
                    let digits = value.parse::<u8>().map_err(|_| invalid(key, "expected 0-4 or `auto`"))?;
                    if digits > 4 {
                        return Err(invalid(key, "expected 0-4 or `auto`"));
                    }
                    Some(digits)
                }
            }
            "color" => self.ui_color_enabled = parse_switch(key, value)?,
            "date-style" => self.date_style = DateStyle::from_str(value),
            "data-root" => {
                self.data_root = if value.is_empty() || value.eq_ignore_ascii_case("default") {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Key/value pairs for display, in [`Config::KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("locale", self.locale.clone()),
            ("currency", self.currency.clone()),
            (
                "precision",
                self.currency_precision
                    .map(|digits| digits.to_string())
                    .unwrap_or_else(|| "auto".into()),
            ),
            ("color", if self.ui_color_enabled { "on" } else { "off" }.into()),
            ("date-style", self.date_style.to_string()),
            (
                "data-root",
                self.data_root
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "default".into()),
            ),
        ]
    }
}

fn non_empty(key: &str, value: &str) -> Result<String, ConfigError> {
    if value.is_empty() {
        Err(invalid(key, "value cannot be empty"))
    } else {
        Ok(value.to_string())
    }
}

fn parse_switch(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(invalid(key, "expected on/off")),
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}

/// How dates are rendered in reports.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `2024-06-10`
    Short,
    /// `Mon 10 Jun 2024`
    #[default]
    Medium,
}

impl DateStyle {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| DateStyle::from_str(v.trim()))
            .unwrap_or_default()
    }

    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "short" | "iso" => DateStyle::Short,
            _ => DateStyle::Medium,
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DateStyle::Short => "short",
            DateStyle::Medium => "medium",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for DateStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(DateStyle::from_value(value))
    }
}
