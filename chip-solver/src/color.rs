use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chip end colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Color {
    Blue,
    Red,
    Yellow,
    Orange,
    Purple,
    Green,
}

impl Color {
    pub const COUNT: usize = 6;

    pub const ALL: [Color; Color::COUNT] = [
        Color::Blue,
        Color::Red,
        Color::Yellow,
        Color::Orange,
        Color::Purple,
        Color::Green,
    ];

    /// Dense position in `Color::ALL`, used for per-color tables.
    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Blue => "Blue",
            Color::Red => "Red",
            Color::Yellow => "Yellow",
            Color::Orange => "Orange",
            Color::Purple => "Purple",
            Color::Green => "Green",
        };
        f.write_str(name)
    }
}
