use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A two-ended colored chip. Either end may face forward in a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorChip {
    pub left: Color,
    pub right: Color,
}

impl ColorChip {
    pub fn new(left: Color, right: Color) -> Self {
        Self { left, right }
    }

    pub fn is_loop(&self) -> bool {
        self.left == self.right
    }

    /// `(from, to)` as traversed; flipped chips run right to left.
    pub fn oriented(&self, flipped: bool) -> (Color, Color) {
        if flipped {
            (self.right, self.left)
        } else {
            (self.left, self.right)
        }
    }

    /// Flip flag needed to enter this chip from `color`, or `None` if the chip
    /// does not touch it. A loop chip is never flipped.
    pub fn entering_from(&self, color: Color) -> Option<bool> {
        if self.left == color {
            Some(false)
        } else if self.right == color {
            Some(true)
        } else {
            None
        }
    }
}

impl fmt::Display for ColorChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}
