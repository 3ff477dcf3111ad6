//! In-memory command catalog and alias index.
//!
//! Pure data container: registration, lookup and the alias index live here.
//! Matching and ranking read from it but never mutate it. Validation happens
//! once at the registration boundary so the matching strategies can assume
//! well-formed descriptors.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::commands::Command;
use crate::error::{Error, Result};

/// Registry of command descriptors, preserving insertion order.
#[derive(Default)]
pub struct CommandCatalog {
    entries: Vec<Arc<Command>>,
    by_id: HashMap<String, usize>,
    /// Lower-cased alias -> catalog index. When two commands claim the same
    /// alias the first one in iteration order wins; the catalog itself does
    /// not reject the duplicate.
    alias_index: HashMap<String, usize>,
}

impl CommandCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command, returning its (possibly generated) identifier.
    ///
    /// A duplicate identifier replaces the prior entry in place. Malformed
    /// descriptors fail with [`Error::Validation`] and leave the catalog
    /// untouched.
    pub fn register(&mut self, mut command: Command) -> Result<String> {
        validate(&command)?;
        if command.id.is_empty() {
            command.id = format!("cmd-{}", Uuid::new_v4());
        }
        let id = command.id.clone();
        match self.by_id.get(&id) {
            Some(&index) => self.entries[index] = Arc::new(command),
            None => {
                self.by_id.insert(id.clone(), self.entries.len());
                self.entries.push(Arc::new(command));
            }
        }
        self.rebuild_alias_index();
        Ok(id)
    }

    /// Bulk-register a batch of commands. Malformed descriptors are rejected
    /// individually (partial success); returns the number accepted.
    pub fn load(&mut self, commands: Vec<Command>) -> usize {
        let mut accepted = 0;
        for command in commands {
            match self.register(command) {
                Ok(_) => accepted += 1,
                Err(err) => warn!(%err, "rejected command registration"),
            }
        }
        accepted
    }

    /// Remove a command and its aliases. Idempotent.
    pub fn unregister(&mut self, id: &str) {
        if let Some(index) = self.by_id.remove(id) {
            self.entries.remove(index);
            self.rebuild_indexes();
        }
    }

    /// All commands currently available for search (enabled and passing
    /// their context predicate), in insertion order.
    pub fn get_all(&self) -> Vec<Arc<Command>> {
        self.available().map(|(_, command)| command).collect()
    }

    /// Available commands in the given category, in insertion order.
    pub fn get_by_category(&self, category: &str) -> Vec<Arc<Command>> {
        self.available()
            .filter(|(_, command)| command.category == category)
            .map(|(_, command)| command)
            .collect()
    }

    /// Available commands paired with their stable catalog index.
    pub fn available(&self) -> impl Iterator<Item = (usize, Arc<Command>)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, command)| command.is_available())
            .map(|(index, command)| (index, Arc::clone(command)))
    }

    /// Look up a command by identifier regardless of availability.
    pub fn get(&self, id: &str) -> Option<Arc<Command>> {
        self.by_id.get(id).map(|&index| Arc::clone(&self.entries[index]))
    }

    /// Resolve an alias to its owning command (first writer wins).
    pub fn resolve_alias(&self, alias: &str) -> Option<Arc<Command>> {
        self.alias_index
            .get(&alias.to_lowercase())
            .map(|&index| Arc::clone(&self.entries[index]))
    }

    /// Administrative category re-assignment. Returns `false` when the
    /// identifier is unknown.
    pub fn reclassify(&mut self, id: &str, category: &str) -> bool {
        let Some(&index) = self.by_id.get(id) else {
            return false;
        };
        Arc::make_mut(&mut self.entries[index]).category = category.to_string();
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn rebuild_indexes(&mut self) {
        self.by_id = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, command)| (command.id.clone(), index))
            .collect();
        self.rebuild_alias_index();
    }

    fn rebuild_alias_index(&mut self) {
        self.alias_index.clear();
        for (index, command) in self.entries.iter().enumerate() {
            for alias in &command.aliases {
                self.alias_index.entry(alias.to_lowercase()).or_insert(index);
            }
        }
    }
}

fn validate(command: &Command) -> Result<()> {
    if command.name.trim().is_empty() {
        return Err(Error::Validation(format!(
            "command {:?} has an empty name",
            command.id
        )));
    }
    if command.aliases.iter().any(|alias| alias.trim().is_empty()) {
        return Err(Error::Validation(format!(
            "command {:?} has an empty alias",
            command.id
        )));
    }
    if command.params.iter().any(|param| param.name.trim().is_empty()) {
        return Err(Error::Validation(format!(
            "command {:?} has a parameter without a name",
            command.id
        )));
    }
    Ok(())
}
