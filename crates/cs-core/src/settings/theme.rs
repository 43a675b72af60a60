use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-selected color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppTheme {
    Light,
    Dark,
    #[default]
    System,
}

/// Theme actually applied after resolving `System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl AppTheme {
    /// Resolves `System` against the platform's dark-mode preference.
    /// 根据系统的深色模式偏好解析 `System`。
    pub fn resolve(self, prefers_dark: bool) -> EffectiveTheme {
        match self {
            AppTheme::Light => EffectiveTheme::Light,
            AppTheme::Dark => EffectiveTheme::Dark,
            AppTheme::System if prefers_dark => EffectiveTheme::Dark,
            AppTheme::System => EffectiveTheme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppTheme::Light => "light",
            AppTheme::Dark => "dark",
            AppTheme::System => "system",
        }
    }
}

impl fmt::Display for AppTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EffectiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectiveTheme::Light => f.write_str("light"),
            EffectiveTheme::Dark => f.write_str("dark"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`, expected one of: light, dark, system")]
pub struct ParseThemeError(pub String);

impl FromStr for AppTheme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(AppTheme::Light),
            "dark" => Ok(AppTheme::Dark),
            "system" => Ok(AppTheme::System),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}
