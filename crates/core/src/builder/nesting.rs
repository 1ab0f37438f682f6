use super::BuildContext;
use crate::diagnostics::DiagnosticKind;
use crate::error::Result;
use crate::model::{ElementId, ElementKind, Hierarchy};
use crate::naming::split_last_segment;
use indexmap::IndexMap;

/// Reparenting decisions collected against an unchanged tree and applied
/// afterwards in one go, so the outcome does not depend on visiting order.
#[derive(Debug, Default, Clone)]
pub struct PlannedMoves {
    moves: IndexMap<ElementId, ElementId>,
}

impl PlannedMoves {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `element` goes under `new_parent`. Returns the previously
    /// planned parent, if any; the latest plan wins.
    pub fn plan(&mut self, element: ElementId, new_parent: ElementId) -> Option<ElementId> {
        self.moves.insert(element, new_parent)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn target(&self, element: ElementId) -> Option<ElementId> {
        self.moves.get(&element).copied()
    }

    /// Moves every planned element and returns them in planning order.
    pub fn apply(self, hierarchy: &mut Hierarchy) -> Result<Vec<ElementId>> {
        let mut moved = Vec::with_capacity(self.moves.len());
        for (element, parent) in self.moves {
            hierarchy.add_member(parent, element)?;
            moved.push(element);
        }
        Ok(moved)
    }
}

impl BuildContext<'_> {
    /// Nests namespace members under the class their full name points at
    /// (`a.B.C` goes under class `a.B`).
    pub(super) fn nest_types(&mut self) -> Result<()> {
        let mut moves = PlannedMoves::new();
        for ns in self.hierarchy.namespaces().to_vec() {
            for member in self.hierarchy[ns].members().to_vec() {
                if let Some(target) = self.select_new_parent(member, ElementKind::is_class)? {
                    self.plan_move(&mut moves, member, target);
                }
            }
        }

        if moves.is_empty() {
            return Ok(());
        }
        tracing::debug!("Nesting {} types", moves.len());

        let moved = moves.apply(&mut self.hierarchy)?;
        for id in moved {
            self.rebase_name(id);
        }
        Ok(())
    }

    /// Nests enums under the namespace or type their name points at. Runs
    /// after name generation since enum names may be managed ones.
    pub(super) fn nest_enums(&mut self) -> Result<()> {
        let mut moves = PlannedMoves::new();
        for enm in self.hierarchy.root_enums().collect::<Vec<_>>() {
            let target = self.select_new_parent(enm, |k| {
                matches!(
                    k,
                    ElementKind::Namespace | ElementKind::Class | ElementKind::Interface
                )
            })?;
            if let Some(target) = target {
                self.plan_move(&mut moves, enm, target);
            }
        }

        if moves.is_empty() {
            return Ok(());
        }
        tracing::debug!("Nesting {} enums", moves.len());

        for id in moves.apply(&mut self.hierarchy)? {
            // Keys registered while the enum sat at the root no longer name it.
            let enm = &self.hierarchy[id];
            self.index.remove_native(&enm.full_name, enm);
            if let Some(stale) = enm.full_managed_name.as_deref() {
                self.index.remove_managed(stale, enm);
            }

            let parent = self.hierarchy[id].parent();
            let full_name = self.hierarchy.compose_full_name(parent, &self.hierarchy[id].name);
            self.hierarchy[id].full_name = full_name;
            self.index.add_native(&self.hierarchy[id])?;
            self.name_subtree(id)?;
        }
        Ok(())
    }

    fn plan_move(&self, moves: &mut PlannedMoves, element: ElementId, target: ElementId) {
        if let Some(previous) = moves.plan(element, target) {
            self.warn(
                DiagnosticKind::AlreadyReparented,
                format!(
                    "Element {} was already re-parented under {}",
                    self.hierarchy[element].full_name, self.hierarchy[previous].full_name
                ),
            );
        }
    }

    /// The element named by the full name of `element` minus its last
    /// segment, when it is of an accepted kind. A missing name is fatal.
    fn select_new_parent(
        &self,
        element: ElementId,
        accept: impl Fn(&ElementKind) -> bool,
    ) -> Result<Option<ElementId>> {
        let e = &self.hierarchy[element];
        let (Some(ns_or_type), _) = split_last_segment(&e.full_name) else {
            return Ok(None);
        };

        let candidate = self.index.lookup(ns_or_type, None, Some(e)).inspect_err(|_| {
            tracing::error!(
                "Error selecting new parent for element '{}' ({})",
                e.full_name,
                e.location
            );
        })?;
        if candidate == element || !accept(&self.hierarchy[candidate].kind()) {
            return Ok(None);
        }
        Ok(Some(candidate))
    }

    /// Keeps `full_name` and shortens `name` so the ancestor chain still
    /// composes to it.
    fn rebase_name(&mut self, id: ElementId) {
        let Some(parent) = self.hierarchy[id].parent().element() else {
            return;
        };
        let prefix = format!("{}.", self.hierarchy[parent].full_name);
        let element = &mut self.hierarchy[id];
        if let Some(rest) = element.full_name.strip_prefix(&prefix) {
            element.name = rest.to_string();
        }
    }
}
