//! Display modes and their persisted selection.
//!
//! The selected mode is written to a [`ThemeStore`] on every change and read
//! back on the next start. Modes only change colors; nothing else reacts
//! to them.

use std::{
    fmt, fs,
    io::ErrorKind,
    path::PathBuf,
    str::FromStr,
    sync::{Mutex, RwLock},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
    Sepia,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [DisplayMode::Light, DisplayMode::Dark, DisplayMode::Sepia];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
            DisplayMode::Sepia => "sepia",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            DisplayMode::Light => Palette {
                background: "#ffffff",
                text: "#111827",
                root_class: None,
            },
            DisplayMode::Dark => Palette {
                background: "#111827",
                text: "#f3f4f6",
                root_class: Some("dark"),
            },
            DisplayMode::Sepia => Palette {
                background: "#fefdf8",
                text: "#4a4a4a",
                root_class: Some("sepia"),
            },
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownDisplayMode(pub String);

impl fmt::Display for UnknownDisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown display mode `{}`", self.0)
    }
}

impl FromStr for DisplayMode {
    type Err = UnknownDisplayMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(DisplayMode::Light),
            "dark" => Ok(DisplayMode::Dark),
            "sepia" => Ok(DisplayMode::Sepia),
            other => Err(UnknownDisplayMode(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    #[serde(rename = "rootClass")]
    pub root_class: Option<&'static str>,
}

/// Somewhere the selected mode survives a restart.
pub trait ThemeStore: Send + Sync {
    fn load(&self) -> Result<Option<DisplayMode>>;
    fn save(&self, mode: DisplayMode) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct SavedTheme {
    theme: DisplayMode,
}

/// JSON file holding `{ "theme": "<mode>" }`.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<DisplayMode>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read theme file {}", self.path.display())
                })
            }
        };
        match serde_json::from_str::<SavedTheme>(&raw) {
            Ok(saved) => Ok(Some(saved.theme)),
            Err(e) => {
                warn!("Ignoring unreadable theme file {}: {}", self.path.display(), e);
                Ok(None)
            }
        }
    }

    fn save(&self, mode: DisplayMode) -> Result<()> {
        let raw = serde_json::to_string(&SavedTheme { theme: mode })
            .context("Failed to encode theme")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write theme file {}", self.path.display()))
    }
}

#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    saved: Mutex<Option<DisplayMode>>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<DisplayMode>> {
        Ok(*self.saved.lock().map_err(|_| anyhow::anyhow!("theme store poisoned"))?)
    }

    fn save(&self, mode: DisplayMode) -> Result<()> {
        *self.saved.lock().map_err(|_| anyhow::anyhow!("theme store poisoned"))? = Some(mode);
        Ok(())
    }
}

/// The current display mode plus the store it is mirrored to.
pub struct ThemeSettings {
    mode: RwLock<DisplayMode>,
    store: Box<dyn ThemeStore>,
}

impl ThemeSettings {
    pub fn restore(store: Box<dyn ThemeStore>) -> Self {
        let mode = match store.load() {
            Ok(Some(mode)) => {
                info!("Restored display mode {}", mode);
                mode
            }
            Ok(None) => DisplayMode::default(),
            Err(e) => {
                warn!("Could not restore display mode: {:#}", e);
                DisplayMode::default()
            }
        };
        Self {
            mode: RwLock::new(mode),
            store,
        }
    }

    pub fn current(&self) -> DisplayMode {
        self.mode.read().map(|mode| *mode).unwrap_or_default()
    }

    /// Persists `mode`, then makes it current. A failed save leaves the
    /// current mode untouched.
    pub fn set(&self, mode: DisplayMode) -> Result<()> {
        let mut current = self
            .mode
            .write()
            .map_err(|_| anyhow::anyhow!("display mode lock poisoned"))?;
        self.store.save(mode)?;
        *current = mode;
        debug!("Display mode set to {}", mode);
        Ok(())
    }

    #[cfg(test)]
    fn into_store(self) -> Box<dyn ThemeStore> {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_theme_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("inkwell-theme-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn starts_light_without_a_saved_mode() {
        let settings = ThemeSettings::restore(Box::<MemoryThemeStore>::default());
        assert_eq!(settings.current(), DisplayMode::Light);
    }

    #[test]
    fn last_selected_mode_survives_a_reload() {
        let settings = ThemeSettings::restore(Box::<MemoryThemeStore>::default());
        for mode in DisplayMode::ALL {
            settings.set(mode).unwrap();
        }
        let reloaded = ThemeSettings::restore(settings.into_store());
        assert_eq!(reloaded.current(), DisplayMode::Sepia);
    }

    struct ReadOnlyStore;

    impl ThemeStore for ReadOnlyStore {
        fn load(&self) -> Result<Option<DisplayMode>> {
            Ok(Some(DisplayMode::Dark))
        }

        fn save(&self, _mode: DisplayMode) -> Result<()> {
            anyhow::bail!("read-only theme store")
        }
    }

    #[test]
    fn failed_save_keeps_the_current_mode() {
        let settings = ThemeSettings::restore(Box::new(ReadOnlyStore));
        assert_eq!(settings.current(), DisplayMode::Dark);
        assert!(settings.set(DisplayMode::Sepia).is_err());
        assert_eq!(settings.current(), DisplayMode::Dark);
    }

    #[test]
    fn file_store_round_trips_through_disk() {
        let path = temp_theme_path("roundtrip");
        let _ = fs::remove_file(&path);

        let settings = ThemeSettings::restore(Box::new(FileThemeStore::new(&path)));
        assert_eq!(settings.current(), DisplayMode::Light);
        settings.set(DisplayMode::Dark).unwrap();

        let reloaded = ThemeSettings::restore(Box::new(FileThemeStore::new(&path)));
        assert_eq!(reloaded.current(), DisplayMode::Dark);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn garbled_theme_file_falls_back_to_default() {
        let path = temp_theme_path("garbled");
        fs::write(&path, "{ \"theme\": \"neon\" }").unwrap();
        let store = FileThemeStore::new(&path);
        assert_eq!(store.load().unwrap(), None);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn only_three_modes_parse() {
        assert_eq!("sepia".parse::<DisplayMode>(), Ok(DisplayMode::Sepia));
        assert!("Sepia".parse::<DisplayMode>().is_err());
        assert!("neon".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn sepia_palette_uses_warm_paper_colors() {
        let palette = DisplayMode::Sepia.palette();
        assert_eq!(palette.background, "#fefdf8");
        assert_eq!(palette.text, "#4a4a4a");
        assert_eq!(palette.root_class, Some("sepia"));
        assert_eq!(DisplayMode::Light.palette().root_class, None);
    }
}
