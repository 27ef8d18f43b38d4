use crate::color::Color;
use crate::error::ChainError;
use serde::{Deserialize, Serialize};

/// Boundary colors and the optional visit budget for one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub start: Color,
    pub end: Color,
    /// Stop after this many recursive steps and keep the best chain so far.
    /// `None` searches to the exact optimum.
    pub max_visits: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start: Color::Blue,
            end: Color::Green,
            max_visits: None,
        }
    }
}

impl SearchConfig {
    pub fn new(start: Color, end: Color) -> Self {
        Self {
            start,
            end,
            max_visits: None,
        }
    }

    pub fn with_max_visits(mut self, max_visits: Option<u64>) -> Self {
        self.max_visits = max_visits;
        self
    }

    pub fn validate(&self) -> Result<(), ChainError> {
        if self.start == self.end {
            return Err(ChainError::InvalidConfig(format!(
                "start and end must differ (both are {})",
                self.start
            )));
        }
        if self.max_visits == Some(0) {
            return Err(ChainError::InvalidConfig(
                "max_visits must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
