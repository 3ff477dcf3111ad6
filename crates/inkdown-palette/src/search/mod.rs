//! Command search: matching strategies, ranking, caching and orchestration.
//!
//! Control flow: [`SearchEngine`] normalizes the query, waits out the
//! debounce, consults the cache, runs either the shortcut path or all four
//! general strategies, merges and ranks the candidates, writes the cache and
//! returns the list. Shared mutable state (catalog, usage, cache) lives
//! behind mutexes so the engine can be held by multi-threaded hosts.

pub mod cache;
pub mod debounce;
pub mod distance;
pub mod engine;
pub mod ranking;
pub mod shortcut;
pub mod strategies;
pub mod usage;

pub use engine::SearchEngine;

use std::sync::Arc;
use std::time::Instant;

use crate::commands::Command;

/// How a result matched the query.
///
/// Variant order doubles as strategy precedence: when two candidates for the
/// same command tie on base score, the earlier variant wins deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchType {
    /// An alias equals the full shortcut query.
    ShortcutExact,
    /// An alias starts with the shortcut query.
    ShortcutPrefix,
    /// Name or alias equals the query.
    Exact,
    /// Name or alias starts with the query.
    Prefix,
    /// Name or description contains the query.
    Contains,
    /// Edit-distance similarity at or above the threshold.
    Fuzzy,
    /// Browse view: empty or below-minimum-length query.
    All,
}

/// A single ranked search hit.
///
/// Results are ephemeral: only the ordered list a search returns is cached,
/// never an individual result.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The matched command. The catalog remains the owner of the descriptor;
    /// results only share it.
    pub command: Arc<Command>,
    /// Composite score, always non-negative.
    pub score: i64,
    pub match_type: MatchType,
    /// Position of the command in the catalog at match time (stable
    /// tie-break).
    pub catalog_index: usize,
    /// When this result was computed.
    pub computed_at: Instant,
}

impl SearchResult {
    pub(crate) fn new(
        command: &Arc<Command>,
        score: i64,
        match_type: MatchType,
        catalog_index: usize,
    ) -> Self {
        Self {
            command: Arc::clone(command),
            score,
            match_type,
            catalog_index,
            computed_at: Instant::now(),
        }
    }
}
