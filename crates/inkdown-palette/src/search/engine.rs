//! Search orchestration.
//!
//! Normalizes the raw query, waits out the debounce, then picks one of three
//! code paths: the browse view for empty or too-short queries, the closed
//! shortcut path for `:` queries, or the four general strategies. Results
//! flow through deduplication and ranking before the cache write.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::commands::{Command, CommandCatalog};
use crate::config::SearchOptions;
use crate::error::Result;
use crate::search::cache::ResultCache;
use crate::search::debounce::Debouncer;
use crate::search::strategies::MatchContext;
use crate::search::usage::UsageTracker;
use crate::search::{MatchType, SearchResult, ranking, shortcut, strategies};

/// Base score for the browse view (empty or below-minimum-length query).
/// Above any general-strategy score, below the shortcut weights.
const WEIGHT_BROWSE: i64 = 1000;

/// The palette search engine: the single entry point for queries.
///
/// All shared mutable state (catalog, usage, cache) sits behind mutexes, so
/// the engine takes `&self` everywhere and can be held in an `Arc` by
/// multi-threaded hosts; single-threaded hosts pay an uncontended lock.
pub struct SearchEngine {
    options: SearchOptions,
    catalog: Mutex<CommandCatalog>,
    usage: Mutex<UsageTracker>,
    cache: Mutex<ResultCache>,
    debouncer: Debouncer,
}

impl SearchEngine {
    /// Create an engine with the given options.
    ///
    /// Fails fast with [`Error::Config`](crate::Error::Config) on invalid
    /// option values; nothing is silently clamped.
    pub fn new(options: SearchOptions) -> Result<Self> {
        options.validate()?;
        let debouncer = Debouncer::new(Duration::from_millis(options.debounce_ms));
        Ok(Self {
            options,
            catalog: Mutex::new(CommandCatalog::new()),
            usage: Mutex::new(UsageTracker::new()),
            cache: Mutex::new(ResultCache::new()),
            debouncer,
        })
    }

    /// Engine pre-loaded with the built-in editor command set.
    pub fn with_builtins(options: SearchOptions) -> Result<Self> {
        let engine = Self::new(options)?;
        let accepted = engine.set_commands(crate::commands::builtin_commands());
        debug!(accepted, "loaded built-in commands");
        Ok(engine)
    }

    /// Debounced search. A call superseded by a newer keystroke resolves to
    /// an empty list; a search never fails.
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        if !self.debouncer.wait().await {
            debug!(query, "search superseded during debounce");
            return Vec::new();
        }
        self.search_now(query)
    }

    /// Synchronous search, bypassing the debounce timer. Callers that use
    /// this directly must tolerate out-of-order delivery themselves.
    pub fn search_now(&self, query: &str) -> Vec<SearchResult> {
        let normalized = self.normalize(query);

        if normalized.is_empty() || normalized.chars().count() < self.options.min_query_length {
            return self.browse();
        }

        if self.options.enable_caching {
            if let Some(results) = self.cache.lock().get(&normalized) {
                debug!(query = %normalized, hits = results.len(), "cache hit");
                return results;
            }
        }

        let commands: Vec<(usize, Arc<Command>)> = self.catalog.lock().available().collect();

        let candidates = if shortcut::is_shortcut_query(&normalized) {
            shortcut::match_shortcut(&normalized, &commands)
        } else {
            let ctx = MatchContext {
                case_sensitive: self.options.case_sensitive,
                fuzzy_threshold: self.options.fuzzy_threshold,
            };
            strategies::run_all(&normalized, &commands, &ctx)
        };

        let mut results = self.finalize(ranking::dedupe(candidates));
        results.truncate(self.options.max_results);

        if self.options.enable_caching {
            self.cache.lock().put(&normalized, results.clone());
        }
        debug!(query = %normalized, hits = results.len(), "search complete");
        results
    }

    /// Replace the indexed catalog and invalidate the cache. Malformed
    /// descriptors are rejected individually (partial success); returns the
    /// number of commands accepted.
    pub fn set_commands(&self, commands: Vec<Command>) -> usize {
        let mut catalog = self.catalog.lock();
        *catalog = CommandCatalog::new();
        let accepted = catalog.load(commands);
        drop(catalog);
        self.cache.lock().invalidate_all();
        accepted
    }

    /// Register one command; a duplicate id replaces the prior entry.
    /// Invalidates the cache.
    pub fn register(&self, command: Command) -> Result<String> {
        let id = self.catalog.lock().register(command)?;
        self.cache.lock().invalidate_all();
        Ok(id)
    }

    /// Remove a command. Idempotent; invalidates the cache.
    pub fn unregister(&self, id: &str) {
        self.catalog.lock().unregister(id);
        self.cache.lock().invalidate_all();
    }

    /// Administrative category re-assignment. Returns `false` for unknown
    /// identifiers.
    pub fn reclassify(&self, id: &str, category: &str) -> bool {
        let changed = self.catalog.lock().reclassify(id, category);
        if changed {
            self.cache.lock().invalidate_all();
        }
        changed
    }

    /// Record an execution reported by the dispatcher.
    pub fn record_usage(&self, command_id: &str) {
        self.usage.lock().record_usage(command_id);
    }

    /// Drop all usage state (counts and recency).
    pub fn reset_usage(&self) {
        self.usage.lock().reset();
    }

    /// Available commands in a category, in insertion order.
    pub fn commands_in_category(&self, category: &str) -> Vec<Arc<Command>> {
        self.catalog.lock().get_by_category(category)
    }

    pub fn command_count(&self) -> usize {
        self.catalog.lock().len()
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Browse view: every available command with a flat base score, still
    /// ranked by the usual bonuses and tie-breaks. Not cached -- it is a
    /// single catalog pass and must reflect usage immediately.
    fn browse(&self) -> Vec<SearchResult> {
        let candidates: Vec<SearchResult> = self
            .catalog
            .lock()
            .available()
            .map(|(index, command)| {
                SearchResult::new(&command, WEIGHT_BROWSE, MatchType::All, index)
            })
            .collect();
        let mut results = self.finalize(candidates);
        results.truncate(self.options.max_results);
        results
    }

    fn finalize(&self, results: Vec<SearchResult>) -> Vec<SearchResult> {
        let usage = self.usage.lock();
        ranking::rank(results, &usage, self.options.enable_ranking)
    }

    fn normalize(&self, query: &str) -> String {
        let trimmed = query.trim();
        if self.options.case_sensitive {
            trimmed.to_string()
        } else {
            trimmed.to_lowercase()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtin_commands;

    fn engine() -> SearchEngine {
        let options = SearchOptions {
            debounce_ms: 0,
            ..SearchOptions::default()
        };
        SearchEngine::with_builtins(options).unwrap()
    }

    #[test]
    fn invalid_options_fail_at_construction() {
        let options = SearchOptions {
            max_results: 0,
            ..SearchOptions::default()
        };
        assert!(SearchEngine::new(options).is_err());
    }

    #[test]
    fn query_is_trimmed_and_lowercased() {
        let engine = engine();
        let padded = engine.search_now("  SAVE Document  ");
        let plain = engine.search_now("save document");
        assert_eq!(padded[0].command.id, plain[0].command.id);
        assert_eq!(padded[0].score, plain[0].score);
    }

    #[test]
    fn empty_query_returns_browse_view() {
        let engine = engine();
        let results = engine.search_now("");
        assert_eq!(results.len(), builtin_commands().len());
        assert!(results.iter().all(|r| r.match_type == MatchType::All));
    }

    #[test]
    fn below_minimum_length_returns_browse_view() {
        let options = SearchOptions {
            debounce_ms: 0,
            min_query_length: 3,
            ..SearchOptions::default()
        };
        let engine = SearchEngine::with_builtins(options).unwrap();
        let results = engine.search_now("sa");
        assert!(results.iter().all(|r| r.match_type == MatchType::All));
    }

    #[test]
    fn max_results_bounds_the_list() {
        let options = SearchOptions {
            debounce_ms: 0,
            max_results: 3,
            ..SearchOptions::default()
        };
        let engine = SearchEngine::with_builtins(options).unwrap();
        assert_eq!(engine.search_now("").len(), 3);
    }

    #[test]
    fn shortcut_queries_take_the_shortcut_path() {
        let engine = engine();
        let results = engine.search_now(":s");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].command.id, "file.save");
        assert_eq!(results[0].match_type, MatchType::ShortcutExact);
    }

    #[test]
    fn unknown_shortcut_yields_nothing() {
        let engine = engine();
        assert!(engine.search_now(":zzz").is_empty());
    }

    #[test]
    fn register_and_unregister_show_up_in_search() {
        let engine = engine();
        engine
            .register(Command::new("custom.hello", "Hello world", ""))
            .unwrap();
        assert!(!engine.search_now("hello world").is_empty());
        engine.unregister("custom.hello");
        let results = engine.search_now("hello world");
        assert!(results.iter().all(|r| r.command.id != "custom.hello"));
    }

    #[test]
    fn set_commands_invalidates_cached_results() {
        let engine = engine();
        let before = engine.search_now("save");
        assert!(!before.is_empty());
        engine.set_commands(vec![Command::new("only", "Only command", "")]);
        let after = engine.search_now("save");
        assert!(after.iter().all(|r| r.command.id == "only"));
    }

    #[test]
    fn disabling_cache_recomputes_each_time() {
        let options = SearchOptions {
            debounce_ms: 0,
            enable_caching: false,
            ..SearchOptions::default()
        };
        let engine = SearchEngine::with_builtins(options).unwrap();
        let first = engine.search_now("save");
        let second = engine.search_now("save");
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn reclassify_moves_a_command_between_categories() {
        let engine = engine();
        assert!(engine.reclassify("file.save", "archive"));
        let archive = engine.commands_in_category("archive");
        assert_eq!(archive.len(), 1);
        assert_eq!(archive[0].id, "file.save");
    }

    #[tokio::test(start_paused = true)]
    async fn debounced_search_resolves_after_the_delay() {
        let engine = SearchEngine::with_builtins(SearchOptions::default()).unwrap();
        let results = engine.search("save").await;
        assert!(!results.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_search_resolves_empty() {
        let engine = SearchEngine::with_builtins(SearchOptions::default()).unwrap();
        let first = engine.search("sav");
        let second = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            engine.search("save").await
        };
        let (first, second) = tokio::join!(first, second);
        assert!(first.is_empty());
        assert!(!second.is_empty());
    }
}
