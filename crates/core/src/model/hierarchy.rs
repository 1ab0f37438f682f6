use super::element::{Element, ElementData, ElementId, Parent};
use super::kind::ElementKind;
use crate::error::{BindscopeError, Result};
use crate::naming::{NameTranslator, PlainTranslator};
use std::ops::{Index, IndexMut};

/// The output tree: an arena of elements linked by parent/member edges.
///
/// Ownership is the parent/member relation only. Base types and the
/// interface/invoker pair are plain [`ElementId`] associations.
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    elements: Vec<Element>,
    namespaces: Vec<ElementId>,
    enums: Vec<ElementId>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an element with no owner yet.
    pub(crate) fn alloc(
        &mut self,
        kind: ElementKind,
        name: impl Into<String>,
        data: ElementData,
    ) -> ElementId {
        let id = ElementId::new(self.elements.len());
        self.elements.push(Element::new(id, kind, name.into(), data));
        id
    }

    pub(crate) fn push_namespace(&mut self, id: ElementId) {
        self.elements[id.index()].parent = Parent::Root;
        if !self.namespaces.contains(&id) {
            self.namespaces.push(id);
        }
    }

    pub(crate) fn push_enum(&mut self, id: ElementId) {
        if !self.enums.contains(&id) {
            self.enums.push(id);
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.index())
    }

    /// Every element ever allocated, including detached ones.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Root namespaces in ingest order.
    pub fn namespaces(&self) -> &[ElementId] {
        &self.namespaces
    }

    /// Every top-level enum record, wherever it ended up being nested.
    pub fn enums(&self) -> &[ElementId] {
        &self.enums
    }

    /// Top-level enums that were not nested into a namespace or type.
    pub fn root_enums(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.enums
            .iter()
            .copied()
            .filter(|id| self[*id].parent == Parent::Root)
    }

    /// Namespace root with the given native name.
    pub fn find_namespace(&self, name: &str) -> Option<ElementId> {
        self.namespaces
            .iter()
            .copied()
            .find(|id| self[*id].full_name == name)
    }

    /// Namespace root whose native or managed name matches `name`, ignoring
    /// ASCII case.
    pub fn find_namespace_ignore_case(&self, name: &str) -> Option<ElementId> {
        self.namespaces.iter().copied().find(|id| {
            let ns = &self[*id];
            ns.full_name.eq_ignore_ascii_case(name)
                || ns
                    .full_managed_name
                    .as_deref()
                    .is_some_and(|m| m.eq_ignore_ascii_case(name))
        })
    }

    /// First reachable element with the given native full name.
    pub fn find_by_full_name(&self, full_name: &str) -> Option<ElementId> {
        self.walk_all()
            .into_iter()
            .find(|id| self[*id].full_name == full_name)
    }

    /// First reachable element with the given full managed name.
    pub fn find_by_full_managed_name(&self, full_managed_name: &str) -> Option<ElementId> {
        self.walk_all()
            .into_iter()
            .find(|id| self[*id].full_managed_name.as_deref() == Some(full_managed_name))
    }

    /// Number of reachable elements of `kind`.
    pub fn count(&self, kind: ElementKind) -> usize {
        self.walk_all()
            .into_iter()
            .filter(|id| self[*id].kind() == kind)
            .count()
    }

    pub fn find_member(&self, parent: ElementId, name: &str) -> Option<ElementId> {
        self[parent]
            .members
            .iter()
            .copied()
            .find(|id| self[*id].name == name)
    }

    /// Attaches `child` to `parent`, removing it from its current owner first.
    pub fn add_member(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        if parent == child || self.ancestors(parent).any(|a| a == child) {
            return Err(BindscopeError::InvalidElement(format!(
                "adding {} under {} would create a cycle",
                self[child].full_name, self[parent].full_name
            )));
        }

        self.detach(child);
        self.elements[parent.index()].members.push(child);
        self.elements[child.index()].parent = Parent::Element(parent);
        Ok(())
    }

    /// Removes `child` from `parent`. Returns `false` when it was not a member.
    pub fn remove_member(&mut self, parent: ElementId, child: ElementId) -> bool {
        if self[child].parent != Parent::Element(parent) {
            return false;
        }
        self.detach(child);
        true
    }

    fn detach(&mut self, child: ElementId) {
        match self.elements[child.index()].parent {
            Parent::Element(old) => self.elements[old.index()].members.retain(|m| *m != child),
            Parent::Root => self.namespaces.retain(|n| *n != child),
            Parent::Detached => {}
        }
        self.elements[child.index()].parent = Parent::Detached;
    }

    /// Parent chain of `id`, nearest first.
    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(self[id].parent.element(), move |p| self[*p].parent.element())
    }

    /// Pre-order traversal of the subtree rooted at `root`.
    pub fn walk(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self[id].members.iter().rev().copied());
        }
        out
    }

    /// Pre-order traversal of every reachable element: namespaces first,
    /// then root-level enums.
    pub fn walk_all(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        for ns in &self.namespaces {
            out.extend(self.walk(*ns));
        }
        for e in self.root_enums() {
            out.extend(self.walk(e));
        }
        out
    }

    /// Reachable classes, interfaces, invokers and enums in traversal order.
    pub fn objects(&self) -> Vec<ElementId> {
        self.walk_all()
            .into_iter()
            .filter(|id| self[*id].is_object())
            .collect()
    }

    pub fn compose_full_name(&self, parent: Parent, name: &str) -> String {
        match parent.element() {
            Some(p) => format!("{}.{}", self[p].full_name, name),
            None => name.to_string(),
        }
    }

    pub fn compose_full_managed_name(&self, parent: Parent, managed: &str) -> String {
        match parent.element() {
            Some(p) if !self[p].full_managed_name_str().is_empty() => {
                format!("{}.{}", self[p].full_managed_name_str(), managed)
            }
            _ => managed.to_string(),
        }
    }

    /// Full native name implied by the ancestor chain of `id`.
    pub fn chain_full_name(&self, id: ElementId) -> String {
        let mut segments: Vec<&str> = self.ancestors(id).map(|a| self[a].name.as_str()).collect();
        segments.reverse();
        segments.push(&self[id].name);
        segments.join(".")
    }

    /// The managed (or full managed) name of `id` if already set, otherwise
    /// one derived from the native name by upper-casing every segment.
    pub fn managed_name_or_derive(&self, id: ElementId, full: bool) -> Result<String> {
        let element = &self[id];
        let (managed, native) = if full {
            (&element.full_managed_name, &element.full_name)
        } else {
            (&element.managed_name, &element.name)
        };
        match managed {
            Some(m) if !m.is_empty() => Ok(m.clone()),
            _ => PlainTranslator::default().translate(native),
        }
    }

    /// Links an interface with its invoker, both ways.
    pub(crate) fn link_invoker(&mut self, interface: ElementId, invoker: ElementId) {
        if let Some(o) = self.elements[interface.index()].object_mut() {
            o.invoker = Some(invoker);
        }
        if let Some(o) = self.elements[invoker.index()].object_mut() {
            o.invoked_interface = Some(interface);
        }
    }
}

impl Index<ElementId> for Hierarchy {
    type Output = Element;

    fn index(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }
}

impl IndexMut<ElementId> for Hierarchy {
    fn index_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.index()]
    }
}
