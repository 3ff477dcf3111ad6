//! Merging, deduplication and ordering of match candidates.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::search::SearchResult;
use crate::search::usage::UsageTracker;

/// Deduplicate candidates by command id, keeping the highest base score.
///
/// On equal scores the earlier strategy wins (exact > prefix > contains >
/// fuzzy, via the [`MatchType`](crate::search::MatchType) variant order),
/// keeping the outcome deterministic.
pub fn dedupe(candidates: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut best: HashMap<String, SearchResult> = HashMap::new();
    for candidate in candidates {
        match best.entry(candidate.command.id.clone()) {
            Entry::Occupied(mut slot) => {
                let current = slot.get();
                if candidate.score > current.score
                    || (candidate.score == current.score
                        && candidate.match_type < current.match_type)
                {
                    slot.insert(candidate);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
        }
    }
    best.into_values().collect()
}

/// Apply usage/recency bonuses and produce the final descending order.
///
/// With `apply_bonuses` off, results are ordered by base score with the same
/// deterministic tie-breaks.
pub fn rank(
    mut results: Vec<SearchResult>,
    usage: &UsageTracker,
    apply_bonuses: bool,
) -> Vec<SearchResult> {
    if apply_bonuses {
        for result in &mut results {
            result.score += usage.usage_bonus(&result.command.id);
            result.score += usage.recency_bonus(&result.command.id);
        }
    }
    results.sort_by(compare);
    results
}

/// Descending score; ties broken by ascending name length (code points),
/// then the command's priority hint, then catalog position.
fn compare(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| {
            a.command
                .name
                .chars()
                .count()
                .cmp(&b.command.name.chars().count())
        })
        .then_with(|| a.command.priority.cmp(&b.command.priority))
        .then_with(|| a.catalog_index.cmp(&b.catalog_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;
    use crate::search::MatchType;
    use std::sync::Arc;

    fn result(id: &str, name: &str, score: i64, match_type: MatchType) -> SearchResult {
        SearchResult::new(&Arc::new(Command::new(id, name, "")), score, match_type, 0)
    }

    #[test]
    fn dedupe_keeps_the_highest_score() {
        let merged = dedupe(vec![
            result("a", "A", 40, MatchType::Prefix),
            result("a", "A", 38, MatchType::Fuzzy),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].score, 40);
        assert_eq!(merged[0].match_type, MatchType::Prefix);
    }

    #[test]
    fn dedupe_breaks_score_ties_by_strategy_precedence() {
        let merged = dedupe(vec![
            result("a", "A", 40, MatchType::Fuzzy),
            result("a", "A", 40, MatchType::Prefix),
        ]);
        assert_eq!(merged[0].match_type, MatchType::Prefix);
    }

    #[test]
    fn dedupe_leaves_distinct_commands_alone() {
        let merged = dedupe(vec![
            result("a", "A", 40, MatchType::Prefix),
            result("b", "B", 38, MatchType::Fuzzy),
        ]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn rank_orders_by_descending_score() {
        let usage = UsageTracker::new();
        let ranked = rank(
            vec![
                result("low", "Low", 10, MatchType::Contains),
                result("high", "High", 90, MatchType::Exact),
            ],
            &usage,
            true,
        );
        assert_eq!(ranked[0].command.id, "high");
    }

    #[test]
    fn rank_adds_usage_and_recency_bonuses() {
        let mut usage = UsageTracker::new();
        usage.record_usage("used");
        let ranked = rank(
            vec![
                result("fresh", "Fresh", 50, MatchType::Prefix),
                result("used", "Used!", 50, MatchType::Prefix),
            ],
            &usage,
            true,
        );
        // 50 + 5 (usage) + 10 (recency front) = 65 beats 50.
        assert_eq!(ranked[0].command.id, "used");
        assert_eq!(ranked[0].score, 65);
    }

    #[test]
    fn disabled_ranking_skips_bonuses() {
        let mut usage = UsageTracker::new();
        usage.record_usage("used");
        let ranked = rank(
            vec![result("used", "Used", 50, MatchType::Prefix)],
            &usage,
            false,
        );
        assert_eq!(ranked[0].score, 50);
    }

    #[test]
    fn score_ties_prefer_shorter_names() {
        let usage = UsageTracker::new();
        let ranked = rank(
            vec![
                result("long", "save as copy", 46, MatchType::Prefix),
                result("short", "save", 46, MatchType::Prefix),
            ],
            &usage,
            true,
        );
        assert_eq!(ranked[0].command.id, "short");
    }
}
