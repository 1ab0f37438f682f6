use super::BuildContext;
use crate::error::Result;
use crate::model::{Element, ElementId, ElementKind};
use crate::naming::{erase_type_reference, interface_name, invoker_name};

impl BuildContext<'_> {
    pub(super) fn generate_managed_names(&mut self) -> Result<()> {
        for ns in self.hierarchy.namespaces().to_vec() {
            self.name_subtree(ns)?;
        }
        for enm in self.hierarchy.root_enums().collect::<Vec<_>>() {
            self.name_subtree(enm)?;
        }
        Ok(())
    }

    /// Names `root` and everything below it, parents before children.
    pub(super) fn name_subtree(&mut self, root: ElementId) -> Result<()> {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            self.assign_managed_name(id)?;
            stack.extend(self.hierarchy[id].members().iter().rev().copied());
        }
        Ok(())
    }

    /// Sets the managed names of a single element from its parent's full
    /// managed name and registers types and namespaces in the managed index.
    pub(super) fn assign_managed_name(&mut self, id: ElementId) -> Result<()> {
        let element = &self.hierarchy[id];
        let managed = match element.managed_name_override.as_deref() {
            Some(literal) => literal.to_string(),
            None => self.derive_managed_name(element)?,
        };
        let full_managed = match element.kind() {
            ElementKind::Namespace => managed.clone(),
            _ => self
                .hierarchy
                .compose_full_managed_name(element.parent(), &managed),
        };

        let element = &mut self.hierarchy[id];
        element.managed_name = Some(managed);
        element.full_managed_name = Some(full_managed);

        let element = &self.hierarchy[id];
        if element.is_object() || element.kind() == ElementKind::Namespace {
            self.index.add_managed(element)?;
        }
        Ok(())
    }

    fn derive_managed_name(&self, element: &Element) -> Result<String> {
        let t = self.translator;
        let name = element.name.as_str();
        match element.kind() {
            ElementKind::Namespace
            | ElementKind::Class
            | ElementKind::Enum
            | ElementKind::Method
            | ElementKind::Constructor
            | ElementKind::TypeParameter
            | ElementKind::MethodParameter => t.translate(name),
            ElementKind::Interface => Ok(interface_name(&t.translate(name)?)),
            ElementKind::InterfaceInvoker => Ok(invoker_name(&t.translate(name)?)),
            ElementKind::Field => t.translate_field(name),
            ElementKind::Implements
            | ElementKind::Exception
            | ElementKind::TypeParameterGenericConstraint => {
                t.translate(erase_type_reference(name))
            }
        }
    }
}
