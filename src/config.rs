use crate::consts;
use crate::game::duel::Player;
use crate::options::Options;
use ratatui::style::Style;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a TOML configuration file
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Gameplay rules
    pub(crate) options: Options,

    /// Colors & styles
    pub(crate) theme: Theme,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("duelsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's
    /// contents could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Presentation styles, configurable as `parse-style` strings in the
/// `[theme]` table (e.g. `player1 = "bold cyan"`).  The simulation knows
/// nothing of these; they are applied at draw time.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(from = "RawTheme")]
pub(crate) struct Theme {
    pub(crate) player1: Style,
    pub(crate) player2: Style,
    pub(crate) food: Style,
}

impl Theme {
    /// The style a player's snake and wreckage are drawn in
    pub(crate) fn snake(&self, player: Player) -> Style {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }
}

impl Default for Theme {
    fn default() -> Theme {
        RawTheme::default().into()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct RawTheme {
    player1: Option<parse_style::Style>,
    player2: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
}

impl From<RawTheme> for Theme {
    fn from(value: RawTheme) -> Theme {
        Theme {
            player1: value.player1.map_or(consts::P1_STYLE, Style::from),
            player2: value.player2.map_or(consts::P2_STYLE, Style::from),
            food: value.food.map_or(consts::FOOD_STYLE, Style::from),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
