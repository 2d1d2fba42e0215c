#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use icon::*;
pub use key::*;
pub use state::*;
pub use types::*;

mod error;
mod icon;
mod key;
mod state;
mod types;

/// Named difficulty preset: board dimensions plus mine count.
///
/// The preset catalog ([`GameMode::EASY`], [`GameMode::MEDIUM`],
/// [`GameMode::HARD`]) is the authoritative configuration surface; the
/// engine and UI consume it read-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMode {
    pub name: Cow<'static, str>,
    pub mine_count: CellCount,
    pub width: Coord,
    pub height: Coord,
}

impl GameMode {
    pub const EASY: GameMode = GameMode::new_static("Easy", 10, 10, 10);
    pub const MEDIUM: GameMode = GameMode::new_static("Medium", 40, 16, 16);
    pub const HARD: GameMode = GameMode::new_static("Hard", 100, 30, 16);

    pub const PRESETS: [GameMode; 3] = [Self::EASY, Self::MEDIUM, Self::HARD];

    pub const fn new_static(
        name: &'static str,
        mine_count: CellCount,
        width: Coord,
        height: Coord,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            mine_count,
            width,
            height,
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    /// Whether the preset leaves at least one safe cell. The constructor
    /// does not enforce this; callers building custom modes check it
    /// themselves.
    pub const fn is_playable(&self) -> bool {
        self.mine_count < self.total_cells()
    }

    pub fn by_name(name: &str) -> Option<GameMode> {
        Self::PRESETS.into_iter().find(|mode| mode.name == name)
    }
}

impl Default for GameMode {
    fn default() -> Self {
        Self::EASY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn presets_leave_safe_cells() {
        for mode in GameMode::PRESETS {
            assert!(
                mode.is_playable(),
                "{} has too many mines",
                mode.name
            );
        }
    }

    #[test]
    fn preset_dimensions_match_catalog() {
        assert_eq!(GameMode::EASY.total_cells(), 100);
        assert_eq!(GameMode::MEDIUM.total_cells(), 256);
        assert_eq!(GameMode::HARD.total_cells(), 480);
        assert_eq!(GameMode::HARD.mine_count, 100);
    }

    #[test]
    fn by_name_finds_presets() {
        assert_eq!(GameMode::by_name("Medium"), Some(GameMode::MEDIUM));
        assert_eq!(GameMode::by_name("Nightmare"), None);
    }

    #[test]
    fn default_is_easy() {
        assert_eq!(GameMode::default(), GameMode::EASY);
    }

    #[test]
    fn mode_round_trips_through_json() {
        let json = serde_json::to_string(&GameMode::HARD).unwrap();
        let back: GameMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GameMode::HARD);
        assert_eq!(back.name.to_string(), "Hard");
    }
}
