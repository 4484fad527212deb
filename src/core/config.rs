//! Rule constants, session configuration, and consumed settings.
//!
//! - `SessionConfig`: how a session runs (RNG seed, countdown length,
//!   tick interval). Built by the embedding app.
//! - `Settings`: player names, accent colors, feedback toggles and imagery.
//!   Owned and persisted by an external settings store; the engine only
//!   reads it.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;
use super::player::{PlayerId, PlayerPair};

/// Lowest face of the die.
pub const DIE_MIN: u8 = 1;

/// Highest face of the die.
pub const DIE_MAX: u8 = 20;

/// Number of numbered memory cells in each player's grid.
pub const MEMORY_CELLS: u8 = 10;

/// Length of the final countdown, in seconds.
pub const COUNTDOWN_SECONDS: u32 = 300;

/// Clock tick period.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub const DEFAULT_PLAYER_ONE_NAME: &str = "PLAYER 1";
pub const DEFAULT_PLAYER_TWO_NAME: &str = "PLAYER 2";
pub const DEFAULT_PLAYER_ONE_COLOR: &str = "#3C91E6";
pub const DEFAULT_PLAYER_TWO_COLOR: &str = "#C33C54";
pub const DEFAULT_SELECTED_COLOR: &str = "#F4D35E";

/// An accent color in `#RRGGBB` or `#RRGGBBAA` form.
///
/// Stored upper-cased so equality does not depend on how the settings
/// store spelled it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse a hex color.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] unless the input is `#` followed
    /// by six or eight hex digits.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let digits = raw
            .strip_prefix('#')
            .ok_or_else(|| ConfigError::InvalidColor(raw.to_owned()))?;

        let valid_len = digits.len() == 6 || digits.len() == 8;
        if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(raw.to_owned()));
        }

        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    /// The normalized `#RRGGBB[AA]` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque reference to an image owned by the asset collaborator (a URI).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(pub String);

/// Display and feedback settings consumed read-only by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Display names.
    pub player_names: PlayerPair<String>,

    /// Accent color per player.
    pub player_colors: PlayerPair<Color>,

    /// Accent used for the selected memory cell.
    pub selected_color: Color,

    /// Whether cues should produce sound.
    pub sound_on: bool,

    /// Whether cues should produce haptic feedback.
    pub haptics_on: bool,

    /// Whether the foreground HUD image is drawn.
    pub keep_hud: bool,

    pub background_image: Option<ImageRef>,

    pub foreground_image: Option<ImageRef>,
}

impl Default for Settings {
    fn default() -> Self {
        // The defaults are literals known to parse.
        let color = |raw: &str| Color(raw.to_owned());
        Self {
            player_names: PlayerPair::new(
                DEFAULT_PLAYER_ONE_NAME.to_owned(),
                DEFAULT_PLAYER_TWO_NAME.to_owned(),
            ),
            player_colors: PlayerPair::new(
                color(DEFAULT_PLAYER_ONE_COLOR),
                color(DEFAULT_PLAYER_TWO_COLOR),
            ),
            selected_color: color(DEFAULT_SELECTED_COLOR),
            sound_on: true,
            haptics_on: true,
            keep_hud: true,
            background_image: None,
            foreground_image: None,
        }
    }
}

impl Settings {
    /// Set a player's display name.
    #[must_use]
    pub fn with_player_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        self.player_names[player] = name.into();
        self
    }

    /// Set a player's accent color.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] if `color` is not a hex color.
    pub fn with_player_color(mut self, player: PlayerId, color: &str) -> Result<Self, ConfigError> {
        self.player_colors[player] = Color::parse(color)?;
        Ok(self)
    }

    /// Set the selected-cell accent color.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] if `color` is not a hex color.
    pub fn with_selected_color(mut self, color: &str) -> Result<Self, ConfigError> {
        self.selected_color = Color::parse(color)?;
        Ok(self)
    }

    /// Turn sound cues on or off.
    #[must_use]
    pub fn with_sound(mut self, on: bool) -> Self {
        self.sound_on = on;
        self
    }

    /// Turn haptic cues on or off.
    #[must_use]
    pub fn with_haptics(mut self, on: bool) -> Self {
        self.haptics_on = on;
        self
    }

    /// Get a player's display name.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.player_names[player]
    }

    /// Get a player's accent color.
    #[must_use]
    pub fn player_color(&self, player: PlayerId) -> &Color {
        &self.player_colors[player]
    }

    /// Accent of the player whose turn it is; the clock is tinted with it.
    #[must_use]
    pub fn turn_color(&self, current_turn: Option<PlayerId>) -> Option<&Color> {
        current_turn.map(|player| self.player_color(player))
    }

    /// The foreground image, only while the HUD is kept.
    #[must_use]
    pub fn hud_image(&self) -> Option<&ImageRef> {
        if self.keep_hud {
            self.foreground_image.as_ref()
        } else {
            None
        }
    }
}

/// How a session runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for dice rolls. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Length of the final countdown, in seconds.
    pub countdown_seconds: u32,

    /// Period of the clock ticker.
    pub tick_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            countdown_seconds: COUNTDOWN_SECONDS,
            tick_interval: TICK_INTERVAL,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with the table defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Change the final countdown length.
    #[must_use]
    pub fn with_countdown_seconds(mut self, seconds: u32) -> Self {
        self.countdown_seconds = seconds;
        self
    }

    /// Change the ticker period.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Check the configuration can drive a session.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCountdown`] for a zero-length countdown
    /// and [`ConfigError::InvalidTickInterval`] for a zero tick interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown_seconds == 0 {
            return Err(ConfigError::InvalidCountdown);
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::InvalidTickInterval);
        }
        Ok(())
    }
}
