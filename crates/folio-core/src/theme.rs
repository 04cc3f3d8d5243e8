use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::FolioError;
use crate::persistence::PreferenceStorage;
use crate::persistence::PreferenceWrite;

pub const MODE_STORAGE_KEY: &str = "theme-mode";
pub const ACCENT_STORAGE_KEY: &str = "theme-accent";
pub const DEFAULT_ACCENT_NAME: &str = "Copper";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = FolioError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(FolioError::UnknownMode(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedMode {
    Light,
    Dark,
}

impl ResolvedMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_mode(self) -> ThemeMode {
        match self {
            Self::Light => ThemeMode::Light,
            Self::Dark => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccentColor {
    pub name: &'static str,
    pub hex: &'static str,
    pub rgb: [u8; 3],
}

pub const ACCENT_COLORS: [AccentColor; 8] = [
    AccentColor {
        name: "Lavender",
        hex: "#8764B8",
        rgb: [0x87, 0x64, 0xB8],
    },
    AccentColor {
        name: "Storm",
        hex: "#7A7AE6",
        rgb: [0x7A, 0x7A, 0xE6],
    },
    AccentColor {
        name: "Teal",
        hex: "#0EA5A5",
        rgb: [0x0E, 0xA5, 0xA5],
    },
    AccentColor {
        name: "Rose",
        hex: "#D4729C",
        rgb: [0xD4, 0x72, 0x9C],
    },
    AccentColor {
        name: "Copper",
        hex: "#C68B59",
        rgb: [0xC6, 0x8B, 0x59],
    },
    AccentColor {
        name: "Sage",
        hex: "#6B9E78",
        rgb: [0x6B, 0x9E, 0x78],
    },
    AccentColor {
        name: "Sky",
        hex: "#60A5FA",
        rgb: [0x60, 0xA5, 0xFA],
    },
    AccentColor {
        name: "Slate",
        hex: "#8B9EB3",
        rgb: [0x8B, 0x9E, 0xB3],
    },
];

/// Looks an accent up by its display name, ignoring ASCII case.
pub fn accent_by_name(name: &str) -> Option<AccentColor> {
    let name = name.trim();
    ACCENT_COLORS
        .iter()
        .find(|color| color.name.eq_ignore_ascii_case(name))
        .copied()
}

pub fn default_accent() -> AccentColor {
    accent_by_name(DEFAULT_ACCENT_NAME).unwrap_or(ACCENT_COLORS[4])
}

/// Presentation attributes derived from the preference; what the render
/// layer reads instead of the raw mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppliedTheme {
    pub resolved: ResolvedMode,
    pub accent: AccentColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDefaults {
    pub mode: ThemeMode,
    pub accent: AccentColor,
}

impl Default for ThemeDefaults {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Dark,
            accent: default_accent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeUpdate {
    pub applied: AppliedTheme,
    pub persist: PreferenceWrite,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeStore {
    mode: ThemeMode,
    accent: AccentColor,
    system: ResolvedMode,
}

impl ThemeStore {
    pub fn new(mode: ThemeMode, accent: AccentColor, system: ResolvedMode) -> Self {
        Self {
            mode,
            accent,
            system,
        }
    }

    /// Reads both keys independently; anything absent or malformed falls
    /// back to `defaults`.
    pub fn load(
        storage: &dyn PreferenceStorage,
        defaults: ThemeDefaults,
        system: ResolvedMode,
    ) -> Self {
        let mode = match storage.get(MODE_STORAGE_KEY) {
            Some(raw) => raw.parse::<ThemeMode>().unwrap_or_else(|_| {
                tracing::debug!(value = %raw, "ignoring malformed stored theme mode");
                defaults.mode
            }),
            None => defaults.mode,
        };
        let accent = storage
            .get(ACCENT_STORAGE_KEY)
            .and_then(|raw| accent_by_name(&raw))
            .unwrap_or(defaults.accent);
        Self::new(mode, accent, system)
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn accent(&self) -> AccentColor {
        self.accent
    }

    pub fn system_scheme(&self) -> ResolvedMode {
        self.system
    }

    pub fn resolved_mode(&self) -> ResolvedMode {
        match self.mode {
            ThemeMode::Light => ResolvedMode::Light,
            ThemeMode::Dark => ResolvedMode::Dark,
            ThemeMode::System => self.system,
        }
    }

    pub fn applied(&self) -> AppliedTheme {
        AppliedTheme {
            resolved: self.resolved_mode(),
            accent: self.accent,
        }
    }

    pub fn set_mode(&mut self, mode: ThemeMode) -> ThemeUpdate {
        self.mode = mode;
        ThemeUpdate {
            applied: self.applied(),
            persist: PreferenceWrite::new(MODE_STORAGE_KEY, mode.as_str()),
        }
    }

    pub fn set_accent(&mut self, accent: AccentColor) -> ThemeUpdate {
        self.accent = accent;
        ThemeUpdate {
            applied: self.applied(),
            persist: PreferenceWrite::new(ACCENT_STORAGE_KEY, accent.name),
        }
    }

    /// Host color-scheme signal. Returns the new presentation only when the
    /// resolved mode actually moved.
    pub fn set_system_scheme(&mut self, scheme: ResolvedMode) -> Option<AppliedTheme> {
        let before = self.resolved_mode();
        self.system = scheme;
        if self.resolved_mode() == before {
            None
        } else {
            Some(self.applied())
        }
    }

    pub fn next_accent(&self) -> AccentColor {
        let idx = ACCENT_COLORS
            .iter()
            .position(|color| color.name == self.accent.name)
            .unwrap_or(0);
        ACCENT_COLORS[(idx + 1) % ACCENT_COLORS.len()]
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        let defaults = ThemeDefaults::default();
        Self::new(defaults.mode, defaults.accent, ResolvedMode::Dark)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::persistence::MemoryPreferenceStorage;

    #[test]
    fn system_mode_follows_host_signal_without_set_mode() {
        let mut store = ThemeStore::new(ThemeMode::System, default_accent(), ResolvedMode::Dark);
        assert_eq!(store.resolved_mode(), ResolvedMode::Dark);

        let applied = store.set_system_scheme(ResolvedMode::Light).expect("resolved moved");
        assert_eq!(applied.resolved, ResolvedMode::Light);
        assert_eq!(store.resolved_mode(), ResolvedMode::Light);
        assert_eq!(store.mode(), ThemeMode::System);
    }

    #[test]
    fn explicit_mode_ignores_host_signal() {
        let mut store = ThemeStore::new(ThemeMode::Dark, default_accent(), ResolvedMode::Dark);
        assert_eq!(store.set_system_scheme(ResolvedMode::Light), None);
        assert_eq!(store.resolved_mode(), ResolvedMode::Dark);
        assert_eq!(store.system_scheme(), ResolvedMode::Light);
    }

    #[test]
    fn dark_then_system_with_light_host_resolves_light() {
        let mut store = ThemeStore::new(ThemeMode::Light, default_accent(), ResolvedMode::Light);
        store.set_mode(ThemeMode::Dark);
        assert_eq!(store.resolved_mode(), ResolvedMode::Dark);
        let update = store.set_mode(ThemeMode::System);
        assert_eq!(update.applied.resolved, ResolvedMode::Light);
        assert_eq!(store.resolved_mode(), ResolvedMode::Light);
    }

    #[test]
    fn each_setter_persists_only_its_own_key() {
        let mut store = ThemeStore::default();
        let mode_update = store.set_mode(ThemeMode::Light);
        assert_eq!(mode_update.persist, PreferenceWrite::new(MODE_STORAGE_KEY, "light"));

        let teal = accent_by_name("Teal").expect("teal");
        let accent_update = store.set_accent(teal);
        assert_eq!(accent_update.persist, PreferenceWrite::new(ACCENT_STORAGE_KEY, "Teal"));
        assert_eq!(accent_update.applied.accent, teal);
    }

    #[test]
    fn load_falls_back_on_missing_and_malformed_values() {
        let mut storage = MemoryPreferenceStorage::default();
        let store = ThemeStore::load(&storage, ThemeDefaults::default(), ResolvedMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.accent().name, "Copper");

        storage.set(MODE_STORAGE_KEY, "sepia").expect("set");
        storage.set(ACCENT_STORAGE_KEY, "Chartreuse").expect("set");
        let store = ThemeStore::load(&storage, ThemeDefaults::default(), ResolvedMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.accent().name, "Copper");
    }

    #[test]
    fn persisted_accent_survives_reload() {
        let mut storage = MemoryPreferenceStorage::default();
        let mut store = ThemeStore::load(&storage, ThemeDefaults::default(), ResolvedMode::Dark);
        let update = store.set_accent(accent_by_name("Teal").expect("teal"));
        storage.apply(&update.persist).expect("persist");

        let reloaded = ThemeStore::load(&storage, ThemeDefaults::default(), ResolvedMode::Dark);
        assert_eq!(reloaded.accent().name, "Teal");
        assert_eq!(reloaded.mode(), ThemeMode::Dark);
    }

    #[test]
    fn accent_cycle_wraps() {
        let store = ThemeStore::new(
            ThemeMode::Dark,
            accent_by_name("Slate").expect("slate"),
            ResolvedMode::Dark,
        );
        assert_eq!(store.next_accent().name, "Lavender");
    }

    #[test]
    fn mode_parsing_is_case_insensitive() {
        assert_eq!("SYSTEM".parse::<ThemeMode>().expect("parse"), ThemeMode::System);
        assert!("auto".parse::<ThemeMode>().is_err());
    }
}
