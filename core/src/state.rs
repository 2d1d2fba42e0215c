use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Coarse lifecycle phase of a game session. Transitions are driven by the
/// engine elsewhere; this crate only owns the tag set and its stable
/// lowercase wire names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Start,
    Playing,
    Paused,
    Won,
    Lost,
}

impl GameState {
    pub const ALL: [GameState; 5] = [
        GameState::Start,
        GameState::Playing,
        GameState::Paused,
        GameState::Won,
        GameState::Lost,
    ];

    pub const fn as_str(self) -> &'static str {
        use GameState::*;
        match self {
            Start => "start",
            Playing => "playing",
            Paused => "paused",
            Won => "won",
            Lost => "lost",
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Start
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ParseError::UnknownState { name: s.into() })
    }
}
