pub mod chain;
pub mod chip;
pub mod color;
pub mod config;
pub mod error;
pub mod index;
pub mod render;
pub mod search;
pub mod supply;
pub mod union_find;

pub use chain::{ChainLink, ChainLinks, ChainResult};
pub use chip::ColorChip;
pub use color::Color;
pub use config::SearchConfig;
pub use error::ChainError;
pub use search::{find_longest_chain, ChainSearch, SearchOutcome, SearchStats};
