//! Longest START -> END chip chain by exhaustive depth-first search.
//!
//! Being "at" a color means the chain built so far ends there. From each color
//! every unused chip touching it is tried in index order, entering the chip from
//! its matching end. Reaching END closes the branch: a chain never passes
//! through END and continues.
//!
//! A branch is cut as soon as `path length + unused chips <= best length`,
//! since no ordering of the rest could produce a strictly longer chain. Ties
//! keep the first chain found.

use crate::chain::ChainResult;
use crate::chip::ColorChip;
use crate::color::Color;
use crate::config::SearchConfig;
use crate::index::ColorIndex;
use crate::union_find::ColorComponents;
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Recursive steps entered.
    pub visited: u64,
    /// Candidate loops cut by the length bound.
    pub pruned: u64,
    /// Times a strictly longer chain replaced the best one.
    pub improvements: u64,
    /// The visit budget ran out; the chain is the best found, not the optimum.
    pub budget_exhausted: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub chain: ChainResult,
    pub stats: SearchStats,
}

#[derive(Clone, Debug, Default)]
pub struct ChainSearch {
    config: SearchConfig,
}

impl ChainSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, chips: &[ColorChip]) -> SearchOutcome {
        let SearchConfig {
            start,
            end,
            max_visits,
        } = self.config;

        if chips.is_empty() {
            debug!("no chips supplied");
            return SearchOutcome::default();
        }
        let mut components = ColorComponents::from_chips(chips);
        if !components.connected(start, end) {
            debug!(
                %start,
                %end,
                components = components.count(),
                "boundary colors are not linked by any chips"
            );
            return SearchOutcome::default();
        }

        let index = ColorIndex::build(chips);
        let mut dfs = Dfs {
            chips,
            index: &index,
            end,
            max_visits,
            used: vec![false; chips.len()],
            remaining: chips.len(),
            path: Vec::with_capacity(chips.len()),
            best: ChainResult::empty(),
            stats: SearchStats::default(),
        };
        dfs.visit(start);

        let Dfs { best, stats, .. } = dfs;
        if stats.budget_exhausted {
            warn!(
                visited = stats.visited,
                best = best.len(),
                "visit budget exhausted; chain may not be the longest"
            );
        }
        info!(
            chips = chips.len(),
            length = best.len(),
            visited = stats.visited,
            pruned = stats.pruned,
            improvements = stats.improvements,
            "search finished"
        );
        SearchOutcome { chain: best, stats }
    }
}

/// Longest Blue -> Green chain with no visit budget.
pub fn find_longest_chain(chips: &[ColorChip]) -> ChainResult {
    ChainSearch::default().run(chips).chain
}

/// Per-call search state. `used`, `remaining` and `path` are restored on
/// return from every branch.
struct Dfs<'a> {
    chips: &'a [ColorChip],
    index: &'a ColorIndex,
    end: Color,
    max_visits: Option<u64>,
    used: Vec<bool>,
    remaining: usize,
    path: Vec<(usize, bool)>,
    best: ChainResult,
    stats: SearchStats,
}

impl Dfs<'_> {
    fn visit(&mut self, current: Color) {
        if let Some(limit) = self.max_visits {
            if self.stats.visited >= limit {
                self.stats.budget_exhausted = true;
                return;
            }
        }
        self.stats.visited += 1;

        if current == self.end {
            if self.path.len() > self.best.len() {
                self.best = ChainResult::snapshot(&self.path);
                self.stats.improvements += 1;
                debug!(length = self.path.len(), "longer chain found");
            }
            return;
        }

        let (index, chips) = (self.index, self.chips);
        for &i in index.candidates(current) {
            if self.used[i] {
                continue;
            }
            if self.path.len() + self.remaining <= self.best.len() {
                self.stats.pruned += 1;
                break;
            }
            let chip = &chips[i];
            let Some(flipped) = chip.entering_from(current) else {
                continue;
            };
            let (_, next) = chip.oriented(flipped);

            self.take(i, flipped);
            self.visit(next);
            self.release(i);

            if self.stats.budget_exhausted {
                break;
            }
        }
    }

    fn take(&mut self, i: usize, flipped: bool) {
        self.used[i] = true;
        self.remaining -= 1;
        self.path.push((i, flipped));
    }

    fn release(&mut self, i: usize) {
        let popped = self.path.pop();
        debug_assert_eq!(popped.map(|(j, _)| j), Some(i));
        self.remaining += 1;
        self.used[i] = false;
    }
}
