//! General matching strategies: exact, prefix, contains and fuzzy.
//!
//! Each strategy scores every available command independently; the ranking
//! step merges and deduplicates the concatenated candidates. Strategies are
//! a closed set dispatched through a function table.

use std::sync::Arc;

use crate::commands::Command;
use crate::search::distance::similarity;
use crate::search::{MatchType, SearchResult};

pub(crate) const WEIGHT_EXACT: i64 = 100;
pub(crate) const WEIGHT_ALIAS_EXACT: i64 = 90;
pub(crate) const WEIGHT_PREFIX: f64 = 80.0;
pub(crate) const ALIAS_PREFIX_FACTOR: f64 = 0.9;
pub(crate) const WEIGHT_CONTAINS: f64 = 30.0;
pub(crate) const WEIGHT_DESCRIPTION: f64 = 20.0;
pub(crate) const WEIGHT_FUZZY: f64 = 50.0;
pub(crate) const ALIAS_FUZZY_FACTOR: f64 = 0.8;

/// The closed set of general strategies, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Exact,
    Prefix,
    Contains,
    Fuzzy,
}

impl Strategy {
    /// All general strategies in precedence order.
    pub const ALL: [Self; 4] = [Self::Exact, Self::Prefix, Self::Contains, Self::Fuzzy];
}

/// Per-query matching parameters derived from the engine options.
#[derive(Debug, Clone, Copy)]
pub struct MatchContext {
    pub case_sensitive: bool,
    pub fuzzy_threshold: f64,
}

type StrategyFn = fn(&str, usize, &Arc<Command>, &MatchContext) -> Option<SearchResult>;

/// Run one strategy across the given commands.
///
/// The query must already be normalized (trimmed, case-folded per the
/// active case-sensitivity option).
pub fn run_strategy(
    strategy: Strategy,
    query: &str,
    commands: &[(usize, Arc<Command>)],
    ctx: &MatchContext,
) -> Vec<SearchResult> {
    let matcher: StrategyFn = match strategy {
        Strategy::Exact => match_exact,
        Strategy::Prefix => match_prefix,
        Strategy::Contains => match_contains,
        Strategy::Fuzzy => match_fuzzy,
    };
    commands
        .iter()
        .filter_map(|(index, command)| matcher(query, *index, command, ctx))
        .collect()
}

/// Run all general strategies and concatenate their candidates.
pub fn run_all(
    query: &str,
    commands: &[(usize, Arc<Command>)],
    ctx: &MatchContext,
) -> Vec<SearchResult> {
    Strategy::ALL
        .iter()
        .flat_map(|strategy| run_strategy(*strategy, query, commands, ctx))
        .collect()
}

fn fold(text: &str, ctx: &MatchContext) -> String {
    if ctx.case_sensitive {
        text.to_string()
    } else {
        text.to_lowercase()
    }
}

fn round(score: f64) -> i64 {
    score.round() as i64
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Name equality beats alias equality; a command contributes at most one
/// exact result.
fn match_exact(
    query: &str,
    index: usize,
    command: &Arc<Command>,
    ctx: &MatchContext,
) -> Option<SearchResult> {
    if fold(&command.name, ctx) == query {
        return Some(SearchResult::new(command, WEIGHT_EXACT, MatchType::Exact, index));
    }
    if command.aliases.iter().any(|alias| fold(alias, ctx) == query) {
        return Some(SearchResult::new(
            command,
            WEIGHT_ALIAS_EXACT,
            MatchType::Exact,
            index,
        ));
    }
    None
}

/// Name-prefix and alias-prefix matches, keeping only the better of the two.
/// Ties prefer the name-based score.
fn match_prefix(
    query: &str,
    index: usize,
    command: &Arc<Command>,
    ctx: &MatchContext,
) -> Option<SearchResult> {
    let query_len = char_len(query) as f64;

    let name = fold(&command.name, ctx);
    let name_score = name
        .starts_with(query)
        .then(|| round(WEIGHT_PREFIX * query_len / char_len(&name) as f64));

    let alias_score = command
        .aliases
        .iter()
        .filter_map(|alias| {
            let alias = fold(alias, ctx);
            alias.starts_with(query).then(|| {
                round(WEIGHT_PREFIX * query_len / char_len(&alias) as f64 * ALIAS_PREFIX_FACTOR)
            })
        })
        .max();

    let score = match (name_score, alias_score) {
        (Some(name), Some(alias)) if alias > name => alias,
        (Some(name), _) => name,
        (None, Some(alias)) => alias,
        (None, None) => return None,
    };
    Some(SearchResult::new(command, score, MatchType::Prefix, index))
}

/// Name substring match scaled by query/name length ratio; description
/// substring match scores a flat weight only when the name does not contain
/// the query.
fn match_contains(
    query: &str,
    index: usize,
    command: &Arc<Command>,
    ctx: &MatchContext,
) -> Option<SearchResult> {
    let query_len = char_len(query) as f64;
    let name = fold(&command.name, ctx);
    if name.contains(query) {
        let score = round(WEIGHT_CONTAINS * query_len / char_len(&name) as f64);
        return Some(SearchResult::new(command, score, MatchType::Contains, index));
    }
    if fold(&command.description, ctx).contains(query) {
        return Some(SearchResult::new(
            command,
            WEIGHT_DESCRIPTION as i64,
            MatchType::Contains,
            index,
        ));
    }
    None
}

/// Normalized Levenshtein similarity against name, aliases (scaled) and
/// description (lower weight), gated per field by the threshold. The best
/// surviving field wins.
fn match_fuzzy(
    query: &str,
    index: usize,
    command: &Arc<Command>,
    ctx: &MatchContext,
) -> Option<SearchResult> {
    let mut best: Option<i64> = None;
    let mut consider = |score: i64| {
        if best.is_none_or(|current| score > current) {
            best = Some(score);
        }
    };

    let name_similarity = similarity(query, &fold(&command.name, ctx));
    if name_similarity >= ctx.fuzzy_threshold {
        consider(round(WEIGHT_FUZZY * name_similarity));
    }
    for alias in &command.aliases {
        let alias_similarity = similarity(query, &fold(alias, ctx));
        if alias_similarity >= ctx.fuzzy_threshold {
            consider(round(WEIGHT_FUZZY * alias_similarity * ALIAS_FUZZY_FACTOR));
        }
    }
    let description_similarity = similarity(query, &fold(&command.description, ctx));
    if description_similarity >= ctx.fuzzy_threshold {
        consider(round(WEIGHT_DESCRIPTION * description_similarity));
    }

    best.map(|score| SearchResult::new(command, score, MatchType::Fuzzy, index))
}
