use crate::chip::ColorChip;
use crate::color::Color;
use crate::error::ChainError;
use serde::{Deserialize, Serialize};

/// Snapshot of a chain: chip indices in traversal order with a parallel
/// orientation flag per chip. Empty means no chain was found.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainResult {
    indices: Vec<usize>,
    flips: Vec<bool>,
}

impl ChainResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a result from raw parts without checking them; `links` does.
    pub fn from_parts(indices: Vec<usize>, flips: Vec<bool>) -> Self {
        Self { indices, flips }
    }

    pub(crate) fn snapshot(path: &[(usize, bool)]) -> Self {
        let (indices, flips) = path.iter().copied().unzip();
        Self { indices, flips }
    }

    pub fn has_path(&self) -> bool {
        !self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn flips(&self) -> &[bool] {
        &self.flips
    }

    /// Pairs the recorded indices with `chips`.
    ///
    /// Everything is checked up front, so the returned iterator cannot fail.
    /// It borrows both sides and can be cloned to walk the chain again.
    pub fn links<'a>(&'a self, chips: &'a [ColorChip]) -> Result<ChainLinks<'a>, ChainError> {
        if self.indices.len() != self.flips.len() {
            return Err(ChainError::LengthMismatch {
                indices: self.indices.len(),
                flips: self.flips.len(),
            });
        }
        if let Some(&index) = self.indices.iter().find(|&&i| i >= chips.len()) {
            return Err(ChainError::IndexOutOfRange {
                index,
                chip_count: chips.len(),
            });
        }
        Ok(ChainLinks {
            chips,
            indices: &self.indices,
            flips: &self.flips,
            pos: 0,
        })
    }
}

/// One chip of a reconstructed chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainLink<'a> {
    pub index: usize,
    pub chip: &'a ColorChip,
    pub flipped: bool,
}

impl ChainLink<'_> {
    pub fn from_color(&self) -> Color {
        self.chip.oriented(self.flipped).0
    }

    pub fn to_color(&self) -> Color {
        self.chip.oriented(self.flipped).1
    }
}

#[derive(Clone, Debug)]
pub struct ChainLinks<'a> {
    chips: &'a [ColorChip],
    indices: &'a [usize],
    flips: &'a [bool],
    pos: usize,
}

impl<'a> Iterator for ChainLinks<'a> {
    type Item = ChainLink<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = *self.indices.get(self.pos)?;
        let flipped = self.flips[self.pos];
        let chips = self.chips;
        self.pos += 1;
        Some(ChainLink {
            index,
            chip: &chips[index],
            flipped,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.indices.len() - self.pos;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for ChainLinks<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color::*;

    fn chips() -> Vec<ColorChip> {
        vec![
            ColorChip::new(Yellow, Blue),
            ColorChip::new(Yellow, Green),
        ]
    }

    #[test]
    fn links_apply_orientation() {
        let chips = chips();
        let result = ChainResult::from_parts(vec![0, 1], vec![true, false]);
        let colors: Vec<_> = result
            .links(&chips)
            .unwrap()
            .map(|l| (l.from_color(), l.to_color()))
            .collect();
        assert_eq!(colors, vec![(Blue, Yellow), (Yellow, Green)]);
    }

    #[test]
    fn links_can_be_walked_twice() {
        let chips = chips();
        let result = ChainResult::from_parts(vec![0, 1], vec![true, false]);
        let links = result.links(&chips).unwrap();
        assert_eq!(links.len(), 2);
        let first: Vec<_> = links.clone().map(|l| l.index).collect();
        let second: Vec<_> = links.map(|l| l.index).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn length_mismatch_is_reported() {
        let result = ChainResult::from_parts(vec![0, 1], vec![false]);
        let err = result.links(&chips()).unwrap_err();
        assert!(matches!(
            err,
            ChainError::LengthMismatch {
                indices: 2,
                flips: 1
            }
        ));
        assert!(err.is_reconstruction_inconsistency());
    }

    #[test]
    fn foreign_chip_list_is_reported() {
        let result = ChainResult::from_parts(vec![0, 5], vec![false, false]);
        let err = result.links(&chips()).unwrap_err();
        assert!(matches!(
            err,
            ChainError::IndexOutOfRange {
                index: 5,
                chip_count: 2
            }
        ));
    }

    #[test]
    fn empty_result_has_no_path() {
        let result = ChainResult::empty();
        assert!(!result.has_path());
        assert_eq!(result.links(&[]).unwrap().count(), 0);
    }

    #[test]
    fn serde_keeps_both_sequences() {
        let result = ChainResult::from_parts(vec![3, 1], vec![false, true]);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"indices":[3,1],"flips":[false,true]}"#);
        let back: ChainResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
