use super::BuildContext;
use crate::error::Result;
use crate::model::{ElementData, ElementId, ElementKind, ObjectData};
use crate::naming::split_last_segment;
use bindscope_api::ApiNamespace;

impl BuildContext<'_> {
    /// Makes sure the types every default base type points at exist.
    pub(super) fn bootstrap(&mut self) -> Result<()> {
        let runtime_name = self.config.runtime_namespace.clone();
        let runtime = match self.hierarchy.find_namespace_ignore_case(&runtime_name) {
            Some(ns) => ns,
            None => {
                tracing::debug!(
                    "Creating {} namespace (not found in API description)",
                    runtime_name
                );
                let ns = self.synthesize_namespace(&runtime_name)?;
                self.hierarchy[ns].managed_name_override = Some(runtime_name.clone());
                ns
            }
        };

        let base_interface = self.config.base_interface.clone();
        let has_base_interface = self.hierarchy[runtime].members().iter().any(|m| {
            let member = &self.hierarchy[*m];
            member.kind() == ElementKind::Interface
                && member.full_name.eq_ignore_ascii_case(&base_interface)
        });
        if !has_base_interface {
            tracing::debug!("Synthesizing {} interface", base_interface);
            let iface = self.synthesize_object(runtime, ElementKind::Interface, &base_interface)?;
            let element = &mut self.hierarchy[iface];
            element.use_global = true;
            if let Some(obj) = element.object_mut() {
                obj.invoker_not_needed = true;
                obj.do_not_add_base_types = true;
            }
            self.index.add(&self.hierarchy[iface])?;
        }

        if self.config.synthesize_root_object {
            self.bootstrap_root_object()?;
        }
        Ok(())
    }

    fn bootstrap_root_object(&mut self) -> Result<()> {
        let root_object = self.config.root_object_type.clone();
        let defined = self
            .index
            .try_lookup(&root_object, Some(ElementKind::Class))
            .is_some_and(|e| e.kind.is_class());
        if defined {
            return Ok(());
        }

        let namespace = match split_last_segment(&root_object) {
            (Some(ns), _) => match self.hierarchy.find_namespace(ns) {
                Some(id) => id,
                None => self.synthesize_namespace(ns)?,
            },
            (None, _) => self.synthesize_namespace(&root_object)?,
        };

        tracing::debug!("Synthesizing {} class", root_object);
        let class = self.synthesize_object(namespace, ElementKind::Class, &root_object)?;
        if let Some(obj) = self.hierarchy[class].object_mut() {
            obj.do_not_add_base_types = true;
            obj.invoker_not_needed = true;
        }
        self.index.add(&self.hierarchy[class])?;
        Ok(())
    }

    fn synthesize_namespace(&mut self, name: &str) -> Result<ElementId> {
        let ns = self.hierarchy.alloc(
            ElementKind::Namespace,
            name,
            ElementData::Namespace(ApiNamespace::default()),
        );
        self.hierarchy[ns].ignore_for_code_generation = true;
        self.hierarchy.push_namespace(ns);
        self.index.add(&self.hierarchy[ns])?;
        Ok(ns)
    }

    /// Creates a type that is needed by generated code but not described by
    /// the API, named after the last segment of `full_name`.
    fn synthesize_object(
        &mut self,
        namespace: ElementId,
        kind: ElementKind,
        full_name: &str,
    ) -> Result<ElementId> {
        let (_, name) = split_last_segment(full_name);
        let id = self
            .hierarchy
            .alloc(kind, name, ElementData::Object(ObjectData::default()));
        self.hierarchy.add_member(namespace, id)?;

        let element = &mut self.hierarchy[id];
        element.full_name = full_name.to_string();
        element.ignore_for_code_generation = true;
        Ok(id)
    }
}
