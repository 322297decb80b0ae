//! Configuration file handling for pixtile.
//!
//! Settings live in `config.toml` under the platform config directory
//! (for example `~/.config/pixtile/config.toml` on Linux). Every field has a
//! default, so a missing file or a partial file is fine.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use pixtile_core::{AnimationSpeed, CREAM, NAVY, Palette, Rgb};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";

/// Errors from reading or writing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("could not determine a configuration directory")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Tile colors as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub primary: Rgb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Rgb>,
    pub background: Rgb,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            primary: CREAM,
            secondary: None,
            background: NAVY,
        }
    }
}

impl PaletteConfig {
    pub fn to_palette(self) -> Palette {
        let palette = Palette::new(self.primary, self.background);
        match self.secondary {
            Some(secondary) => palette.with_secondary(secondary),
            None => palette,
        }
    }
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shuffle the pattern catalogue.
    pub randomize: bool,
    /// Shuffle seed. Unset means a fresh order on every start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub speed: AnimationSpeed,
    /// Show the warped banner above the grid.
    pub show_background: bool,
    pub palette: PaletteConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            randomize: false,
            seed: None,
            speed: AnimationSpeed::default(),
            show_background: true,
            palette: PaletteConfig::default(),
        }
    }
}

impl Config {
    /// Location of the config file for this platform.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "pixtile").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the platform location, falling back to defaults if the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write to the platform location. Returns the path written.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)
    }

    pub fn palette(&self) -> Palette {
        self.palette.to_palette()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.show_background);
        assert_eq!(config.speed, AnimationSpeed::Normal);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "randomize = true\nseed = 42\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.randomize);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.palette, PaletteConfig::default());
    }

    #[test]
    fn test_palette_and_speed_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r##"
speed = "fast"
show_background = false

[palette]
primary = "#FF8800"
secondary = "#00FF00"
background = "#000000"
"##,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.speed, AnimationSpeed::Fast);
        assert!(!config.show_background);

        let palette = config.palette();
        assert_eq!(palette.primary(), Rgb::new(0xFF, 0x88, 0x00));
        assert_eq!(palette.secondary(), Rgb::new(0x00, 0xFF, 0x00));
        assert_eq!(palette.background(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_secondary_falls_back_to_primary() {
        let palette = PaletteConfig::default().to_palette();
        assert_eq!(palette.secondary(), palette.primary());
    }

    #[test]
    fn test_invalid_color_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[palette]\nprimary = \"not-a-color\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
    }

    #[test]
    fn test_save_creates_directories_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("pixtile").join(CONFIG_FILE);
        let config = Config {
            randomize: true,
            seed: Some(1234),
            speed: AnimationSpeed::Slow,
            show_background: false,
            palette: PaletteConfig {
                primary: Rgb::new(1, 2, 3),
                secondary: Some(Rgb::new(4, 5, 6)),
                background: Rgb::new(7, 8, 9),
            },
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_unset_seed_is_omitted() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(!text.contains("seed"));
        assert!(text.contains("primary = \"#EDFEC1\""));
    }
}
