use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Glyphs, PlayerColor, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_level: String,
    pub board: BoardConfig,
    pub display: DisplayConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub size: usize,
}

/// Cell glyphs for console rendering. Each must be three characters wide.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub dark_glyph: String,
    pub light_glyph: String,
    pub empty_glyph: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Color that moves first.
    pub first: PlayerColor,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: "warn".to_string(),
            board: BoardConfig::default(),
            display: DisplayConfig::default(),
            game: GameConfig::default(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { size: DEFAULT_SIZE }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let glyphs = Glyphs::default();
        DisplayConfig {
            dark_glyph: glyphs.dark,
            light_glyph: glyphs.light,
            empty_glyph: glyphs.empty,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first: PlayerColor::Dark,
        }
    }
}

impl DisplayConfig {
    pub fn glyphs(&self) -> Glyphs {
        Glyphs {
            dark: self.dark_glyph.clone(),
            light: self.light_glyph.clone(),
            empty: self.empty_glyph.clone(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.board.size;
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(ConfigError::Validation(format!(
                "board.size must be in [{MIN_SIZE}, {MAX_SIZE}], got {size}"
            )));
        }
        if size % 2 != 0 {
            return Err(ConfigError::Validation(format!(
                "board.size must be even, got {size}"
            )));
        }

        for (key, glyph) in [
            ("display.dark_glyph", &self.display.dark_glyph),
            ("display.light_glyph", &self.display.light_glyph),
            ("display.empty_glyph", &self.display.empty_glyph),
        ] {
            if glyph.chars().count() != 3 {
                return Err(ConfigError::Validation(format!(
                    "{key} must be exactly 3 characters, got {glyph:?}"
                )));
            }
        }

        if !self.game.first.is_disc() {
            return Err(ConfigError::Validation(
                "game.first must be \"dark\" or \"light\"".into(),
            ));
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Validation("log_level must not be empty".into()));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
size = 10
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.size, 10);
        assert_eq!(config.display.dark_glyph, " X ");
        assert_eq!(config.game.first, PlayerColor::Dark);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_first_color_parses_lowercase() {
        let config: AppConfig = toml::from_str("[game]\nfirst = \"light\"\n").unwrap();
        assert_eq!(config.game.first, PlayerColor::Light);
    }

    #[test]
    fn test_validation_rejects_odd_size() {
        let mut config = AppConfig::default();
        config.board.size = 7;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_size_out_of_range() {
        let mut config = AppConfig::default();
        config.board.size = 0;
        assert!(config.validate().is_err());
        config.board.size = 28;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_wide_glyph() {
        let mut config = AppConfig::default();
        config.display.light_glyph = "O".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("display.light_glyph"));
    }

    #[test]
    fn test_validation_counts_chars_not_bytes() {
        let mut config = AppConfig::default();
        config.display.dark_glyph = " \u{25cf} ".into();
        config.validate().expect("three-char unicode glyph is fine");
    }

    #[test]
    fn test_validation_rejects_empty_first_player() {
        let mut config = AppConfig::default();
        config.game.first = PlayerColor::Empty;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.size, 8);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reversi.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
log_level = "debug"

[board]
size = 6
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.size, 6);
        assert_eq!(config.log_level, "debug");
        // Others are defaults
        assert_eq!(config.display.empty_glyph, " - ");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reversi.toml");
        std::fs::write(&path, "[board]\nsize = 5\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_display_glyphs() {
        let glyphs = DisplayConfig::default().glyphs();
        assert_eq!(glyphs, Glyphs::default());
    }
}
