//! Inkdown command palette engine.
//!
//! Matches free-text input against the registered command set and returns a
//! ranked, deduplicated result list in real time:
//! - four general strategies (exact, prefix, contains, fuzzy/edit-distance)
//! - a closed `:` shortcut namespace matched against aliases only
//! - usage- and recency-based score bonuses
//! - per-query memoization with TTL and bounded size
//! - debounced orchestration with last-write-wins supersession
//!
//! [`SearchEngine`] is the single entry point; the `search` module holds the
//! pipeline internals.

pub mod commands;
pub mod config;
pub mod error;
pub mod search;
pub mod tracing_init;

pub use commands::{
    Command, CommandCatalog, CommandParameter, ContextPredicate, ParamKind, builtin_commands,
};
pub use config::{SearchOptions, load_options};
pub use error::{Error, Result};
pub use search::{MatchType, SearchEngine, SearchResult};
