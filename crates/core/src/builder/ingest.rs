use super::BuildContext;
use crate::diagnostics::DiagnosticKind;
use crate::error::{BindscopeError, Result};
use crate::model::{ElementData, ElementId, ElementKind, ObjectData, Parent};
use crate::naming::{erase_type_reference, split_last_segment};
use bindscope_api::{ApiElement, ApiElementKind, ApiTypeInfo};

/// Unprocessed attribute under which the API merge source file is kept.
const MERGE_SOURCE_FILE: &str = "merge.SourceFile";

fn object_data(info: &ApiTypeInfo) -> ObjectData {
    ObjectData {
        is_abstract: info.is_abstract,
        is_static: info.is_static,
        is_final: info.is_final,
        visibility: info.visibility,
        ..Default::default()
    }
}

/// Whether a raw record of kind `child` may appear under an element of kind
/// `parent`.
fn accepts(parent: ElementKind, child: &ApiElementKind) -> bool {
    use ApiElementKind as A;
    match parent {
        ElementKind::Namespace => matches!(child, A::Class(_) | A::Interface(_)),
        ElementKind::Class => matches!(
            child,
            A::Field(_) | A::Constructor(_) | A::Method(_) | A::Implements(_) | A::TypeParameter(_)
        ),
        ElementKind::Interface => matches!(
            child,
            A::Field(_) | A::Method(_) | A::Implements(_) | A::TypeParameter(_)
        ),
        ElementKind::Enum => matches!(child, A::Field(_) | A::Method(_)),
        ElementKind::Method | ElementKind::Constructor => matches!(
            child,
            A::MethodParameter(_) | A::TypeParameter(_) | A::Exception(_)
        ),
        ElementKind::TypeParameter => matches!(child, A::TypeParameterGenericConstraint(_)),
        ElementKind::InterfaceInvoker
        | ElementKind::Field
        | ElementKind::Implements
        | ElementKind::TypeParameterGenericConstraint
        | ElementKind::MethodParameter
        | ElementKind::Exception => false,
    }
}

fn element_kind_and_data(raw: &ApiElementKind) -> Option<(ElementKind, ElementData)> {
    use ApiElementKind as A;
    if let Some(info) = raw.type_info() {
        let mut data = object_data(info);
        let kind = match raw {
            A::Class(class) => {
                if let Some(extends) = class.extends.as_deref().map(erase_type_reference) {
                    if !extends.is_empty() {
                        data.base_type_names.push(extends.to_string());
                    }
                }
                ElementKind::Class
            }
            A::Interface(_) => ElementKind::Interface,
            _ => {
                data.do_not_add_base_types = true;
                ElementKind::Enum
            }
        };
        return Some((kind, ElementData::Object(data)));
    }

    let mapped = match raw {
        A::Namespace(ns) => (ElementKind::Namespace, ElementData::Namespace(ns.clone())),
        A::Field(f) => (ElementKind::Field, ElementData::Field(f.clone())),
        A::Constructor(m) => (ElementKind::Constructor, ElementData::Method(m.clone())),
        A::Method(m) => (ElementKind::Method, ElementData::Method(m.clone())),
        A::Implements(i) => (ElementKind::Implements, ElementData::Implements(i.clone())),
        A::TypeParameter(t) => (ElementKind::TypeParameter, ElementData::TypeParameter(t.clone())),
        A::TypeParameterGenericConstraint(c) => (
            ElementKind::TypeParameterGenericConstraint,
            ElementData::Constraint(c.clone()),
        ),
        A::MethodParameter(p) => {
            (ElementKind::MethodParameter, ElementData::MethodParameter(p.clone()))
        }
        A::Exception(e) => (ElementKind::Exception, ElementData::Exception(e.clone())),
        A::Class(_) | A::Interface(_) | A::Enum(_) | A::Unsupported => return None,
    };
    Some(mapped)
}

impl BuildContext<'_> {
    pub(super) fn ingest(&mut self, raw: &[ApiElement]) -> Result<()> {
        for record in raw {
            match &record.kind {
                ApiElementKind::Namespace(_) => {
                    self.ingest_namespace(record)?;
                }
                ApiElementKind::Enum(_) => {
                    self.ingest_enum(record)?;
                }
                _ => self.unsupported(record, "top level"),
            }
        }
        tracing::debug!(
            "Ingested {} namespaces and {} enums",
            self.hierarchy.namespaces().len(),
            self.hierarchy.enums().len()
        );
        Ok(())
    }

    fn unsupported(&self, record: &ApiElement, place: &str) {
        self.warn(
            DiagnosticKind::UnsupportedElementKind,
            format!(
                "Unsupported element '{}' of kind '{}' at {}",
                record.name,
                record.tag(),
                place
            ),
        );
    }

    fn ingest_namespace(&mut self, record: &ApiElement) -> Result<ElementId> {
        let id = self.create_element(record, Parent::Root)?;
        self.hierarchy.push_namespace(id);
        self.ingest_children(id, record)?;
        self.index.add_native(&self.hierarchy[id])?;
        Ok(id)
    }

    /// Enums are read with their full (dotted) name. They stay at the root
    /// until they are nested after name generation.
    fn ingest_enum(&mut self, record: &ApiElement) -> Result<ElementId> {
        if record.name.starts_with('.') {
            return Err(BindscopeError::InvalidElement(format!(
                "enum name '{}' must not start with a dot",
                record.name
            )));
        }

        let id = self.create_element(record, Parent::Root)?;
        let (_, last) = split_last_segment(&record.name);
        let enm = &mut self.hierarchy[id];
        enm.name = last.to_string();
        enm.full_name = record.name.clone();

        self.hierarchy.push_enum(id);
        self.ingest_children(id, record)?;
        self.index.add_native(&self.hierarchy[id])?;
        Ok(id)
    }

    fn ingest_children(&mut self, parent: ElementId, record: &ApiElement) -> Result<()> {
        let parent_kind = self.hierarchy[parent].kind();
        for child in &record.children {
            if !accepts(parent_kind, &child.kind) {
                let place = format!("{} {}", parent_kind.label(), self.hierarchy[parent].full_name);
                self.unsupported(child, &place);
                continue;
            }

            let id = self.create_element(child, Parent::Element(parent))?;
            if self.hierarchy[id].kind() == ElementKind::Implements {
                let base = erase_type_reference(&child.name).to_string();
                if let Some(obj) = self.hierarchy[parent].object_mut() {
                    if !base.is_empty() && !obj.base_type_names.contains(&base) {
                        obj.base_type_names.push(base);
                    }
                }
            }

            self.ingest_children(id, child)?;
            if self.hierarchy[id].is_object() {
                self.index.add_native(&self.hierarchy[id])?;
            }
        }
        Ok(())
    }

    /// Mirrors a raw record as an element under `parent`, without its children.
    fn create_element(&mut self, record: &ApiElement, parent: Parent) -> Result<ElementId> {
        let Some((kind, data)) = element_kind_and_data(&record.kind) else {
            return Err(BindscopeError::InvalidElement(format!(
                "'{}' has no element kind",
                record.name
            )));
        };

        // Types may be listed with their package prefix.
        let mut name = record.name.as_str();
        if let Some(p) = parent.element() {
            let ns = &self.hierarchy[p];
            if ns.kind() == ElementKind::Namespace {
                if let Some(rest) = name
                    .strip_prefix(ns.full_name.as_str())
                    .and_then(|r| r.strip_prefix('.'))
                {
                    name = rest;
                }
            }
        }

        let full_name = self.hierarchy.compose_full_name(parent, name);
        let id = self.hierarchy.alloc(kind, name, data);
        let element = &mut self.hierarchy[id];
        element.full_name = full_name;
        element.managed_name_override = record.managed_name.clone().filter(|m| !m.is_empty());
        element.name_generic_aware = record.name_generic_aware.clone();
        element.jni_signature = record.jni_signature.clone();
        element.location = record.location.clone();
        element.deprecation = record.deprecation.clone();
        element.api_since = record.api_since.clone();
        element.api_until = record.api_until.clone();
        element.unprocessed_attributes = record.other_attributes.clone();
        if let Some(source) = &record.merge_source_file {
            element
                .unprocessed_attributes
                .insert(MERGE_SOURCE_FILE.to_string(), source.clone());
        }
        element.is_bound_api = true;
        if record.location.is_known() {
            element.add_comment(record.location.to_string());
        }

        if let Some(p) = parent.element() {
            self.hierarchy.add_member(p, id)?;
        }
        Ok(id)
    }
}
