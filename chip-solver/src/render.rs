use crate::chain::ChainResult;
use crate::chip::ColorChip;
use crate::color::Color;
use crate::config::SearchConfig;
use crate::error::ChainError;
use serde::Serialize;

/// Text form: boundary, each chip as traversed, boundary, then usage.
pub fn render_chain(
    result: &ChainResult,
    chips: &[ColorChip],
    config: &SearchConfig,
) -> Result<String, ChainError> {
    if !result.has_path() {
        return Ok(no_chain_message(config));
    }

    let mut parts = vec![config.start.to_string()];
    for link in result.links(chips)? {
        let (from, to) = link.chip.oriented(link.flipped);
        parts.push(format!("[{}, {}]", from, to));
    }
    parts.push(config.end.to_string());

    Ok(format!(
        "{}\nChips used: {}/{}",
        parts.join(" "),
        result.len(),
        chips.len()
    ))
}

pub fn no_chain_message(config: &SearchConfig) -> String {
    format!("No valid {}→{} chain exists.", config.start, config.end)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportLink {
    pub index: usize,
    pub left: Color,
    pub right: Color,
    pub flipped: bool,
}

/// Machine-readable form of a search result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChainReport {
    pub start: Color,
    pub end: Color,
    pub used: usize,
    pub total: usize,
    pub links: Vec<ReportLink>,
}

impl ChainReport {
    pub fn new(
        result: &ChainResult,
        chips: &[ColorChip],
        config: &SearchConfig,
    ) -> Result<Self, ChainError> {
        let links = result
            .links(chips)?
            .map(|link| ReportLink {
                index: link.index,
                left: link.chip.left,
                right: link.chip.right,
                flipped: link.flipped,
            })
            .collect();
        Ok(Self {
            start: config.start,
            end: config.end,
            used: result.len(),
            total: chips.len(),
            links,
        })
    }
}
