//! # Vendor Table
//!
//! Folds parsed rules into an insertion-ordered `prefix -> vendor` table.
//!
//! A `/28` or `/36` block replaces the plain OUI entry it was carved out of,
//! so the table never holds both a block and its enclosing OUI when the block
//! appears later in the registry.

use std::collections::HashMap;

use ouisql_common::prefix::{self, PrefixError};
use ouisql_common::warn;

use crate::parser::Rule;

/// Insertion-ordered map from prefix key to vendor name.
///
/// Replacing an existing key keeps its position. Removed keys leave a hole
/// that iteration skips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorTable {
    slots: Vec<Option<(String, String)>>,
    index: HashMap<String, usize>,
}

impl VendorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, name: String) {
        match self.index.get(&key) {
            Some(&slot) => {
                if let Some(entry) = self.slots[slot].as_mut() {
                    entry.1 = name;
                }
            }
            None => {
                self.index.insert(key.clone(), self.slots.len());
                self.slots.push(Some((key, name)));
            }
        }
    }

    /// Removes `key`, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.index.remove(key) {
            Some(slot) => {
                self.slots[slot] = None;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let slot = *self.index.get(key)?;
        self.slots[slot].as_ref().map(|(_, name)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots
            .iter()
            .flatten()
            .map(|(key, name)| (key.as_str(), name.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The line had a prefix but no name column.
    MissingName,
    Prefix(PrefixError),
}

/// A registry rule that did not make it into the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRule {
    pub rule: Rule,
    pub reason: SkipReason,
}

/// Result of folding a registry into a [`VendorTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub table: VendorTable,
    /// Rules that were classified and inserted.
    pub applied: usize,
    /// Plain OUI entries displaced by a longer block.
    pub overridden: usize,
    pub skipped: Vec<SkippedRule>,
}

impl BuildReport {
    /// Applies one rule, reporting and skipping it if it cannot be classified.
    pub fn apply(mut self, rule: &Rule) -> Self {
        let Some(name) = rule.vendor_name() else {
            warn!(line = rule.line, "Unable to parse rule: {:?}", rule.fields);
            self.skipped.push(SkippedRule {
                rule: rule.clone(),
                reason: SkipReason::MissingName,
            });
            return self;
        };

        match prefix::classify(rule.prefix()) {
            Ok(key) => {
                let overrides = key.overrides_oui();
                self.table.insert(key.key, name.to_string());
                // The OUI entry goes even when it was inserted by this very rule.
                if overrides && self.table.remove(&key.oui) {
                    self.overridden += 1;
                }
                self.applied += 1;
            }
            Err(err) => {
                warn!(
                    line = rule.line,
                    prefix = rule.prefix(),
                    "Unable to parse rule: {:?}",
                    rule.fields
                );
                self.skipped.push(SkippedRule {
                    rule: rule.clone(),
                    reason: SkipReason::Prefix(err),
                });
            }
        }

        self
    }
}

/// Folds `rules` into a fresh table. Deterministic for a given input.
pub fn build(rules: &[Rule]) -> BuildReport {
    rules.iter().fold(BuildReport::default(), BuildReport::apply)
}
