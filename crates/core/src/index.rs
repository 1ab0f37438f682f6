//! Symbol index: native and managed full names to elements.

use crate::config::DuplicatePolicy;
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::error::{BindscopeError, Result};
use crate::model::{Element, ElementId, ElementKind};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    pub id: ElementId,
    pub kind: ElementKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Table {
    Native,
    Managed,
}

impl Table {
    fn as_str(self) -> &'static str {
        match self {
            Table::Native => "native",
            Table::Managed => "managed",
        }
    }
}

/// Key under which an element is re-inserted when its plain key is taken by
/// an element of another kind.
pub fn prefixed_key(kind: ElementKind, name: &str) -> String {
    format!("{}:{}", kind.index_prefix(), name)
}

pub struct SymbolIndex {
    native: HashMap<String, IndexEntry>,
    managed: HashMap<String, IndexEntry>,
    policy: DuplicatePolicy,
    sink: Arc<dyn DiagnosticSink>,
}

impl SymbolIndex {
    pub fn new(policy: DuplicatePolicy, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            native: HashMap::new(),
            managed: HashMap::new(),
            policy,
            sink,
        }
    }

    pub fn len(&self) -> usize {
        self.native.len() + self.managed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.native.is_empty() && self.managed.is_empty()
    }

    /// Registers `element` under its native and (when known) managed full name.
    pub fn add(&mut self, element: &Element) -> Result<()> {
        self.add_native(element)?;
        self.add_managed(element)
    }

    pub fn add_native(&mut self, element: &Element) -> Result<()> {
        let key = element.full_name.clone();
        self.insert(Table::Native, key, element.id(), element.kind())
    }

    pub fn add_managed(&mut self, element: &Element) -> Result<()> {
        match element.full_managed_name.as_deref() {
            Some(key) if !key.is_empty() => {
                self.insert(Table::Managed, key.to_string(), element.id(), element.kind())
            }
            _ => Ok(()),
        }
    }

    /// Drops `key` from the native table, plain or kind-prefixed, as long
    /// as it still points at `element`. Returns whether anything was removed.
    pub fn remove_native(&mut self, key: &str, element: &Element) -> bool {
        Self::remove_from(&mut self.native, key, element)
    }

    pub fn remove_managed(&mut self, key: &str, element: &Element) -> bool {
        Self::remove_from(&mut self.managed, key, element)
    }

    fn remove_from(map: &mut HashMap<String, IndexEntry>, key: &str, element: &Element) -> bool {
        let mut removed = false;
        for k in [key.to_string(), prefixed_key(element.kind(), key)] {
            if map.get(&k).is_some_and(|e| e.id == element.id()) {
                map.remove(&k);
                removed = true;
            }
        }
        removed
    }

    fn insert(
        &mut self,
        table: Table,
        key: String,
        id: ElementId,
        kind: ElementKind,
    ) -> Result<()> {
        if key.is_empty() {
            return Err(BindscopeError::InvalidElement(format!(
                "{} {} has an empty name and cannot be indexed",
                kind.label(),
                id
            )));
        }

        let policy = self.policy;
        let map = match table {
            Table::Native => &mut self.native,
            Table::Managed => &mut self.managed,
        };

        let existing = match map.get(&key).copied() {
            Some(existing) if existing.kind != kind && existing.id != id => existing,
            _ => {
                map.insert(key, IndexEntry { id, kind });
                return Ok(());
            }
        };

        if policy == DuplicatePolicy::Strict {
            return Err(BindscopeError::DuplicateIndexEntry {
                name: key,
                index: table.as_str(),
                existing: existing.kind.index_prefix(),
                new: kind.index_prefix(),
            });
        }

        let prefixed = prefixed_key(kind, &key);
        if map.get(&prefixed).is_some_and(|e| e.id == id) {
            return Ok(());
        }
        map.insert(prefixed.clone(), IndexEntry { id, kind });

        self.sink.emit(Diagnostic::new(
            DiagnosticKind::DuplicateIndexEntry,
            format!(
                "Duplicate type name '{}' in {} index. Existing entry is a {}, new entry is a {}",
                key,
                table.as_str(),
                existing.kind.index_prefix(),
                kind.index_prefix()
            ),
        ));
        tracing::debug!("Prefixed new index entry as '{}'", prefixed);
        Ok(())
    }

    /// Looks `name` up in the native index, then in the managed one.
    ///
    /// With a `kind_hint`, an entry of the hinted kind stored under its
    /// prefixed key wins over a plain entry of another kind. Each table is
    /// searched completely (plain, then prefixed) before the next one, so a
    /// native prefixed entry is preferred to a managed plain one. `context`
    /// only enriches the error message.
    pub fn lookup(
        &self,
        name: &str,
        kind_hint: Option<ElementKind>,
        context: Option<&Element>,
    ) -> Result<ElementId> {
        self.try_lookup(name, kind_hint)
            .map(|e| e.id)
            .ok_or_else(|| BindscopeError::TypeNotFound {
                name: name.to_string(),
                context: context
                    .map(|c| format!(" Called on behalf of: {}", c.describe()))
                    .unwrap_or_default(),
            })
    }

    pub fn try_lookup(&self, name: &str, kind_hint: Option<ElementKind>) -> Option<IndexEntry> {
        Self::lookup_in(&self.native, name, kind_hint)
            .or_else(|| Self::lookup_in(&self.managed, name, kind_hint))
    }

    fn lookup_in(
        map: &HashMap<String, IndexEntry>,
        name: &str,
        kind_hint: Option<ElementKind>,
    ) -> Option<IndexEntry> {
        let plain = map.get(name).copied();
        let Some(hint) = kind_hint else {
            return plain;
        };
        if plain.is_some_and(|e| e.kind == hint) {
            return plain;
        }
        map.get(&prefixed_key(hint, name)).copied().or(plain)
    }

    pub fn contains_native(&self, name: &str) -> bool {
        self.native.contains_key(name)
    }

    pub fn contains_managed(&self, name: &str) -> bool {
        self.managed.contains_key(name)
    }
}

impl std::fmt::Debug for SymbolIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolIndex")
            .field("native", &self.native.len())
            .field("managed", &self.managed.len())
            .field("policy", &self.policy)
            .finish()
    }
}
