use super::attributes::CustomAttribute;
use super::kind::ElementKind;
use bindscope_api::{
    ApiException, ApiField, ApiGenericConstraint, ApiImplements, ApiMethod, ApiMethodParameter,
    ApiNamespace, ApiTypeParameter, ApiVisibility, Deprecation, SourceLocation,
};
use std::collections::BTreeMap;
use std::fmt;

/// Stable handle of an element inside its [`super::Hierarchy`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owner of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parent {
    /// Top level of the hierarchy (namespaces and not-yet-nested enums).
    #[default]
    Root,
    Element(ElementId),
    /// Removed from the tree (consumed `Implements` records).
    Detached,
}

impl Parent {
    pub fn element(self) -> Option<ElementId> {
        match self {
            Parent::Element(id) => Some(id),
            _ => None,
        }
    }
}

impl From<ElementId> for Parent {
    fn from(id: ElementId) -> Self {
        Parent::Element(id)
    }
}

/// Type-level data shared by classes, interfaces, invokers and enums.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectData {
    pub is_abstract: bool,
    pub is_static: bool,
    pub is_final: bool,
    pub visibility: ApiVisibility,
    /// Unresolved base type names in declaration order (`extends` first).
    pub base_type_names: Vec<String>,
    /// Filled by base type resolution.
    pub base_types: Option<Vec<ElementId>>,
    pub do_not_add_base_types: bool,
    pub invoker: Option<ElementId>,
    pub invoker_not_needed: bool,
    /// Set on invokers only.
    pub invoked_interface: Option<ElementId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementData {
    Namespace(ApiNamespace),
    Object(ObjectData),
    Field(ApiField),
    Method(ApiMethod),
    TypeParameter(ApiTypeParameter),
    Constraint(ApiGenericConstraint),
    MethodParameter(ApiMethodParameter),
    Exception(ApiException),
    Implements(ApiImplements),
}

#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) id: ElementId,
    pub(crate) kind: ElementKind,
    pub name: String,
    pub full_name: String,
    pub managed_name: Option<String>,
    pub full_managed_name: Option<String>,
    /// Managed name given by the API record, used verbatim.
    pub managed_name_override: Option<String>,
    pub name_generic_aware: Option<String>,
    pub jni_signature: Option<String>,
    pub location: SourceLocation,
    pub deprecation: Deprecation,
    pub api_since: Option<String>,
    pub api_until: Option<String>,
    pub comments: Vec<String>,
    pub(crate) custom_attributes: Vec<CustomAttribute>,
    pub unprocessed_attributes: BTreeMap<String, String>,
    pub ignore_for_code_generation: bool,
    /// Created from an API record rather than synthesized.
    pub is_bound_api: bool,
    pub use_global: bool,
    pub data: ElementData,
    pub(crate) parent: Parent,
    pub(crate) members: Vec<ElementId>,
}

impl Element {
    pub(crate) fn new(id: ElementId, kind: ElementKind, name: String, data: ElementData) -> Self {
        Self {
            id,
            kind,
            full_name: name.clone(),
            name,
            managed_name: None,
            full_managed_name: None,
            managed_name_override: None,
            name_generic_aware: None,
            jni_signature: None,
            location: SourceLocation::default(),
            deprecation: Deprecation::default(),
            api_since: None,
            api_until: None,
            comments: Vec::new(),
            custom_attributes: Vec::new(),
            unprocessed_attributes: BTreeMap::new(),
            ignore_for_code_generation: false,
            is_bound_api: false,
            use_global: false,
            data,
            parent: Parent::Root,
            members: Vec::new(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn parent(&self) -> Parent {
        self.parent
    }

    pub fn members(&self) -> &[ElementId] {
        &self.members
    }

    pub fn custom_attributes(&self) -> &[CustomAttribute] {
        &self.custom_attributes
    }

    /// Adds `attribute` unless an equal one is already present.
    pub fn add_custom_attribute(&mut self, attribute: CustomAttribute) -> bool {
        if self.custom_attributes.contains(&attribute) {
            return false;
        }
        self.custom_attributes.push(attribute);
        true
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    pub fn is_object(&self) -> bool {
        self.kind.is_object()
    }

    pub fn object(&self) -> Option<&ObjectData> {
        match &self.data {
            ElementData::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn object_mut(&mut self) -> Option<&mut ObjectData> {
        match &mut self.data {
            ElementData::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Resolved base types; empty before resolution.
    pub fn base_types(&self) -> &[ElementId] {
        self.object()
            .and_then(|o| o.base_types.as_deref())
            .unwrap_or(&[])
    }

    pub fn managed_name_str(&self) -> &str {
        self.managed_name.as_deref().unwrap_or("")
    }

    pub fn full_managed_name_str(&self) -> &str {
        self.full_managed_name.as_deref().unwrap_or("")
    }

    /// Full name and location, used to give lookup failures some context.
    pub fn describe(&self) -> String {
        if self.location.is_known() {
            format!("{} at {}", self.full_name, self.location)
        } else {
            self.full_name.clone()
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.label(), self.full_name)
    }
}
