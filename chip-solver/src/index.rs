use crate::chip::ColorChip;
use crate::color::Color;

/// Color -> indices of the chips touching that color, in input order.
///
/// A chip with two distinct ends is listed under both; a loop chip once.
#[derive(Clone, Debug, Default)]
pub struct ColorIndex {
    by_color: [Vec<usize>; Color::COUNT],
}

impl ColorIndex {
    pub fn build(chips: &[ColorChip]) -> Self {
        let mut index = Self::default();
        for (i, chip) in chips.iter().enumerate() {
            index.by_color[chip.left.slot()].push(i);
            if !chip.is_loop() {
                index.by_color[chip.right.slot()].push(i);
            }
        }
        index
    }

    /// Chips touching `color`; empty when no chip does.
    pub fn candidates(&self, color: Color) -> &[usize] {
        &self.by_color[color.slot()]
    }

    pub fn contains(&self, color: Color) -> bool {
        !self.by_color[color.slot()].is_empty()
    }
}
