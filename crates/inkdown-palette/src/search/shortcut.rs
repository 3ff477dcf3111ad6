//! Shortcut (`:`) query handling.
//!
//! A query starting with the sentinel is matched against aliases only: a
//! full-query exact match wins outright, otherwise alias-prefix matches are
//! returned, otherwise nothing. There is no fallback to the general
//! strategies; the shortcut namespace is closed, so a short input like `:s`
//! never drags in low-precision fuzzy hits.

use std::sync::Arc;

use crate::commands::{Command, SHORTCUT_SENTINEL};
use crate::search::{MatchType, SearchResult};

pub(crate) const WEIGHT_SHORTCUT_EXACT: i64 = 2000;
pub(crate) const WEIGHT_SHORTCUT_PREFIX: i64 = 1500;

/// Whether a normalized query uses the shortcut syntax.
pub fn is_shortcut_query(query: &str) -> bool {
    query.starts_with(SHORTCUT_SENTINEL)
}

/// Match a shortcut query against command aliases.
///
/// Alias comparison is case-insensitive regardless of the engine's
/// case-sensitivity option, so the shortcut namespace behaves uniformly.
pub fn match_shortcut(query: &str, commands: &[(usize, Arc<Command>)]) -> Vec<SearchResult> {
    let folded = query.to_lowercase();

    let exact: Vec<SearchResult> = commands
        .iter()
        .filter(|(_, command)| {
            command
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase() == folded)
        })
        .map(|(index, command)| {
            SearchResult::new(command, WEIGHT_SHORTCUT_EXACT, MatchType::ShortcutExact, *index)
        })
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    commands
        .iter()
        .filter(|(_, command)| {
            command
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase().starts_with(&folded))
        })
        .map(|(index, command)| {
            SearchResult::new(
                command,
                WEIGHT_SHORTCUT_PREFIX,
                MatchType::ShortcutPrefix,
                *index,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(specs: &[(&str, &[&str])]) -> Vec<(usize, Arc<Command>)> {
        specs
            .iter()
            .enumerate()
            .map(|(index, (name, aliases))| {
                let command =
                    Command::new(&format!("cmd{index}"), name, "").with_aliases(aliases);
                (index, Arc::new(command))
            })
            .collect()
    }

    #[test]
    fn detects_shortcut_queries() {
        assert!(is_shortcut_query(":s"));
        assert!(!is_shortcut_query("save"));
        assert!(!is_shortcut_query(""));
    }

    #[test]
    fn exact_alias_match_suppresses_prefix_matches() {
        let commands = commands(&[("Save", &[":s"]), ("Save as", &[":save"])]);
        let results = match_shortcut(":s", &commands);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].command.name, "Save");
        assert_eq!(results[0].score, WEIGHT_SHORTCUT_EXACT);
        assert_eq!(results[0].match_type, MatchType::ShortcutExact);
    }

    #[test]
    fn prefix_matches_when_no_exact_alias() {
        let commands = commands(&[("Save", &[":save"]), ("Split", &[":sp"])]);
        let results = match_shortcut(":s", &commands);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.score == WEIGHT_SHORTCUT_PREFIX));
    }

    #[test]
    fn no_fallback_outside_the_alias_namespace() {
        // Even a description containing the literal query must not match.
        let mut entries = commands(&[("Mystery", &[])]);
        entries[0].1 = Arc::new(Command::new("m", "Mystery", "about :xyz123 things"));
        assert!(match_shortcut(":xyz123", &entries).is_empty());
    }

    #[test]
    fn alias_matching_is_case_insensitive() {
        let commands = commands(&[("Table of contents", &[":TOC"])]);
        assert_eq!(match_shortcut(":toc", &commands).len(), 1);
    }
}
