//! Command descriptors for the palette catalog.

pub mod builtin;
pub mod catalog;

pub use builtin::builtin_commands;
pub use catalog::CommandCatalog;

use std::fmt;
use std::sync::Arc;

/// Sentinel character introducing shortcut aliases and shortcut queries.
pub const SHORTCUT_SENTINEL: char = ':';

/// No-argument predicate deciding whether a command is available in the
/// current editor context, evaluated at query time.
pub type ContextPredicate = Arc<dyn Fn() -> bool + Send + Sync>;

/// Type tag of a command parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
}

/// A single declared command parameter.
#[derive(Debug, Clone)]
pub struct CommandParameter {
    pub name: String,
    pub required: bool,
    pub kind: ParamKind,
}

/// A single command entry in the palette catalog.
#[derive(Clone)]
pub struct Command {
    /// Stable unique identifier, distinct from the display name. Immutable
    /// once registered.
    pub id: String,
    /// Display name, plain text.
    pub name: String,
    /// Short description, plain text.
    pub description: String,
    /// Free-form grouping label.
    pub category: String,
    /// Display-only glyph; never participates in ranking.
    pub icon: Option<String>,
    /// Declared parameters, in order.
    pub params: Vec<CommandParameter>,
    /// Alias strings; shortcut aliases carry the leading `:` sentinel.
    pub aliases: Vec<String>,
    pub enabled: bool,
    /// Tie-break hint, lower sorts first.
    pub priority: i32,
    /// Context predicate; `None` means always available.
    pub when: Option<ContextPredicate>,
}

impl Command {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: "general".to_string(),
            icon: None,
            params: Vec::new(),
            aliases: Vec::new(),
            enabled: true,
            priority: 0,
            when: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    #[must_use]
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases.extend(aliases.iter().map(ToString::to_string));
        self
    }

    #[must_use]
    pub fn with_param(mut self, name: &str, required: bool, kind: ParamKind) -> Self {
        self.params.push(CommandParameter {
            name: name.to_string(),
            required,
            kind,
        });
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the context predicate evaluated at query time.
    #[must_use]
    pub fn with_when(mut self, when: ContextPredicate) -> Self {
        self.when = Some(when);
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Whether the command is currently available for search.
    pub fn is_available(&self) -> bool {
        self.enabled && self.when.as_ref().is_none_or(|when| when())
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("aliases", &self.aliases)
            .field("enabled", &self.enabled)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}
