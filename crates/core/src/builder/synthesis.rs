use super::BuildContext;
use crate::error::{BindscopeError, Result};
use crate::model::{ElementData, ElementId, ElementKind, ObjectData};
use crate::naming::invoker_name;
use bindscope_api::ApiVisibility;

impl BuildContext<'_> {
    /// Gives every interface that needs one an invoker class next to it.
    pub(super) fn synthesize_invokers(&mut self) -> Result<()> {
        let interfaces: Vec<ElementId> = self
            .hierarchy
            .walk_all()
            .into_iter()
            .filter(|id| {
                let e = &self.hierarchy[*id];
                e.kind() == ElementKind::Interface
                    && e.object()
                        .is_some_and(|o| o.invoker.is_none() && !o.invoker_not_needed)
            })
            .collect();

        for iface in &interfaces {
            self.synthesize_invoker(*iface)?;
        }
        tracing::debug!("Synthesized {} interface invokers", interfaces.len());
        Ok(())
    }

    fn synthesize_invoker(&mut self, iface: ElementId) -> Result<ElementId> {
        let interface = &self.hierarchy[iface];
        let Some(parent) = interface.parent().element() else {
            return Err(BindscopeError::InvalidElement(format!(
                "invoker requires interface {} to be nested in an element",
                interface.full_name
            )));
        };

        let data = ObjectData {
            visibility: ApiVisibility::Internal,
            base_type_names: vec![
                self.config.root_object_type.clone(),
                interface.full_name.clone(),
            ],
            invoked_interface: Some(iface),
            ..Default::default()
        };
        let name = invoker_name(&interface.name);
        let invoker = self
            .hierarchy
            .alloc(ElementKind::InterfaceInvoker, name, ElementData::Object(data));
        self.hierarchy.add_member(parent, invoker)?;

        let full_name = self
            .hierarchy
            .compose_full_name(parent.into(), &self.hierarchy[invoker].name);
        self.hierarchy[invoker].full_name = full_name;

        self.assign_managed_name(invoker)?;
        self.index.add_native(&self.hierarchy[invoker])?;
        self.hierarchy.link_invoker(iface, invoker);

        tracing::debug!(
            "Invoker {} created for interface {}",
            self.hierarchy[invoker].full_name,
            self.hierarchy[iface].full_name
        );
        Ok(invoker)
    }
}
