use super::BuildContext;
use crate::error::Result;
use crate::model::{ElementId, ElementKind};

impl BuildContext<'_> {
    /// Resolves the collected base type names of every type, then drops the
    /// `Implements` records they came from.
    pub(super) fn resolve_base_types(&mut self) -> Result<()> {
        for id in self.hierarchy.objects() {
            self.resolve_object(id)?;
        }

        let implements: Vec<ElementId> = self
            .hierarchy
            .walk_all()
            .into_iter()
            .filter(|id| self.hierarchy[*id].kind() == ElementKind::Implements)
            .collect();
        for id in implements {
            if let Some(parent) = self.hierarchy[id].parent().element() {
                self.hierarchy.remove_member(parent, id);
            }
        }
        Ok(())
    }

    fn resolve_object(&mut self, id: ElementId) -> Result<()> {
        let element = &self.hierarchy[id];
        let Some(obj) = element.object() else {
            return Ok(());
        };
        if obj.do_not_add_base_types || obj.base_types.is_some() {
            return Ok(());
        }

        let mut resolved = Vec::with_capacity(obj.base_type_names.len());
        for name in &obj.base_type_names {
            let base = self.index.lookup(name, Some(ElementKind::Interface), Some(element))?;
            if base != id && !resolved.contains(&base) {
                resolved.push(base);
            }
        }

        if resolved.is_empty() {
            let (default, hint) = match element.kind() {
                ElementKind::Interface => (&self.config.base_interface, ElementKind::Interface),
                _ => (&self.config.root_object_type, ElementKind::Class),
            };
            let base = self.index.lookup(default, Some(hint), Some(element))?;
            if base != id {
                resolved.push(base);
            }
        }

        tracing::trace!("{} resolved {} base types", element.full_name, resolved.len());
        if let Some(obj) = self.hierarchy[id].object_mut() {
            obj.base_types = Some(resolved);
        }
        Ok(())
    }
}
