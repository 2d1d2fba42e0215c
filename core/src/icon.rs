use core::fmt;
use serde::{Deserialize, Serialize};

/// Display glyphs the UI layer renders for cells and controls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Mine,
    Explode,
    Flag,
    Reload,
    Home,
}

impl Icon {
    pub const ALL: [Icon; 5] = [
        Icon::Mine,
        Icon::Explode,
        Icon::Flag,
        Icon::Reload,
        Icon::Home,
    ];

    pub const fn glyph(self) -> &'static str {
        use Icon::*;
        match self {
            Mine => "💣",
            Explode => "💥",
            Flag => "🚩",
            Reload => "⟳",
            Home => "⌂",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}
