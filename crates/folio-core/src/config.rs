use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::error::FolioError;
use crate::theme::accent_by_name;
use crate::theme::default_accent;
use crate::theme::ThemeDefaults;
use crate::theme::ThemeMode;
use crate::theme::DEFAULT_ACCENT_NAME;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub navigation: NavigationConfig,
    pub palette: PaletteConfig,
    pub tooltip: TooltipConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Reads `path` if it exists. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|err| FolioError::io(path, err))?;
        toml::from_str(&raw).map_err(|source| FolioError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, FolioError> {
        toml::from_str(raw).map_err(|source| FolioError::ConfigParse {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Unknown accent names fall back to the built-in default.
    pub fn theme_defaults(&self) -> ThemeDefaults {
        let accent = accent_by_name(&self.theme.default_accent).unwrap_or_else(|| {
            tracing::warn!(
                accent = %self.theme.default_accent,
                "configured default accent is not in the palette"
            );
            default_accent()
        });
        ThemeDefaults {
            mode: self.theme.default_mode,
            accent,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    pub default_mode: ThemeMode,
    pub default_accent: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_mode: ThemeMode::Dark,
            default_accent: DEFAULT_ACCENT_NAME.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NavigationConfig {
    pub settle_delay_ms: u64,
    pub scroll_margin_rows: u16,
    pub transition_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 350,
            scroll_margin_rows: 2,
            transition_ms: 200,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PaletteConfig {
    pub focus_delay_ms: u64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self { focus_delay_ms: 50 }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TooltipConfig {
    pub delay_ms: u64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self { delay_ms: 500 }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
[theme]
default_mode = "system"

[navigation]
settle_delay_ms = 500
"#,
        )
        .expect("parse");

        assert_eq!(config.theme.default_mode, ThemeMode::System);
        assert_eq!(config.theme.default_accent, "Copper");
        assert_eq!(config.navigation.settle_delay_ms, 500);
        assert_eq!(config.navigation.scroll_margin_rows, 2);
        assert_eq!(config.palette.focus_delay_ms, 50);
        assert_eq!(config.tooltip.delay_ms, 500);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempdir().expect("tmpdir");
        let config = Config::load(&dir.path().join("absent.toml")).expect("load");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = tempdir().expect("tmpdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[theme\n").expect("write");

        let err = Config::load(&path).expect_err("should fail");
        assert!(matches!(err, FolioError::ConfigParse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn unknown_default_accent_falls_back_to_copper() {
        let config = Config::from_toml_str("[theme]\ndefault_accent = \"Chartreuse\"\n").expect("parse");
        let defaults = config.theme_defaults();
        assert_eq!(defaults.accent.name, "Copper");
        assert_eq!(defaults.mode, ThemeMode::Dark);
    }

    #[test]
    fn accent_lookup_ignores_case() {
        let config = Config::from_toml_str("[theme]\ndefault_accent = \"teal\"\n").expect("parse");
        assert_eq!(config.theme_defaults().accent.name, "Teal");
    }
}
