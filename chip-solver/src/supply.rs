use crate::chip::ColorChip;
use crate::color::Color;
use crate::error::ChainError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;
use std::path::Path;

/// On-disk chip list: `{"chips": [{"left": "Blue", "right": "Yellow"}, ...]}`
#[derive(Debug, Deserialize)]
struct ChipFile {
    #[serde(default)]
    chips: Option<Vec<ColorChip>>,
}

/// Five chips that chain Blue to Green using every one of them.
pub fn sample_chips() -> Vec<ColorChip> {
    vec![
        ColorChip::new(Color::Blue, Color::Yellow),
        ColorChip::new(Color::Red, Color::Orange),
        ColorChip::new(Color::Yellow, Color::Red),
        ColorChip::new(Color::Orange, Color::Purple),
        ColorChip::new(Color::Purple, Color::Green),
    ]
}

/// A missing or `null` chip list is invalid input; an empty one is not.
pub fn parse_chips(json: &str) -> Result<Vec<ColorChip>, ChainError> {
    let file: ChipFile = serde_json::from_str(json)?;
    file.chips
        .ok_or_else(|| ChainError::InvalidInput("chip list is missing".into()))
}

pub fn load_chips(path: impl AsRef<Path>) -> Result<Vec<ColorChip>, ChainError> {
    let text = std::fs::read_to_string(path)?;
    parse_chips(&text)
}

/// `count` chips with both ends drawn uniformly from every color.
pub fn random_chips(count: usize, seed: u64) -> Vec<ColorChip> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let left = *Color::ALL.choose(&mut rng).unwrap_or(&Color::Blue);
            let right = *Color::ALL.choose(&mut rng).unwrap_or(&Color::Green);
            ColorChip::new(left, right)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chip_list() {
        let chips = parse_chips(
            r#"{"chips": [{"left": "Blue", "right": "Yellow"}, {"left": "Yellow", "right": "Green"}]}"#,
        )
        .unwrap();
        assert_eq!(
            chips,
            vec![
                ColorChip::new(Color::Blue, Color::Yellow),
                ColorChip::new(Color::Yellow, Color::Green),
            ]
        );
    }

    #[test]
    fn empty_list_is_valid() {
        assert!(parse_chips(r#"{"chips": []}"#).unwrap().is_empty());
    }

    #[test]
    fn missing_or_null_list_is_invalid_input() {
        for json in [r#"{}"#, r#"{"chips": null}"#] {
            assert!(matches!(
                parse_chips(json),
                Err(ChainError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn unknown_color_is_a_parse_error() {
        let err = parse_chips(r#"{"chips": [{"left": "Teal", "right": "Blue"}]}"#).unwrap_err();
        assert!(matches!(err, ChainError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_chips("/nonexistent/chips.json").unwrap_err();
        assert!(matches!(err, ChainError::Io(_)));
    }

    #[test]
    fn random_chips_are_reproducible() {
        let a = random_chips(20, 42);
        assert_eq!(a.len(), 20);
        assert_eq!(a, random_chips(20, 42));
        assert!(random_chips(0, 42).is_empty());
    }
}
