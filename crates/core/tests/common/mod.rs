#![allow(dead_code)]

use bindscope_api::{
    ApiClass, ApiElement, ApiElementKind, ApiField, ApiImplements, ApiMethod, ApiMethodParameter,
    ApiNamespace, ApiTypeInfo, SourceLocation,
};
use bindscope_core::diagnostics::CollectingSink;
use bindscope_core::{BuilderConfig, ElementId, Hierarchy, HierarchyBuilder};
use std::sync::Arc;

pub fn namespace(name: &str, children: Vec<ApiElement>) -> ApiElement {
    ApiElement::new(ApiElementKind::Namespace(ApiNamespace::default()), name)
        .with_children(children)
}

pub fn class(name: &str) -> ApiElement {
    ApiElement::new(ApiElementKind::Class(ApiClass::default()), name)
}

pub fn class_extending(name: &str, extends: &str) -> ApiElement {
    ApiElement::new(
        ApiElementKind::Class(ApiClass {
            extends: Some(extends.to_string()),
            ..Default::default()
        }),
        name,
    )
}

pub fn interface(name: &str) -> ApiElement {
    ApiElement::new(ApiElementKind::Interface(ApiTypeInfo::default()), name)
}

pub fn enumeration(name: &str) -> ApiElement {
    ApiElement::new(ApiElementKind::Enum(ApiTypeInfo::default()), name)
}

pub fn implements(name: &str) -> ApiElement {
    ApiElement::new(ApiElementKind::Implements(ApiImplements::default()), name)
}

pub fn method(name: &str, signature: &str) -> ApiElement {
    ApiElement::new(ApiElementKind::Method(ApiMethod::default()), name)
        .with_jni_signature(signature)
}

pub fn constructor(name: &str) -> ApiElement {
    ApiElement::new(ApiElementKind::Constructor(ApiMethod::default()), name)
}

pub fn parameter(name: &str, type_name: &str) -> ApiElement {
    ApiElement::new(
        ApiElementKind::MethodParameter(ApiMethodParameter {
            type_name: type_name.to_string(),
            jni_type: None,
        }),
        name,
    )
}

pub fn field(name: &str) -> ApiElement {
    ApiElement::new(ApiElementKind::Field(ApiField::default()), name)
}

pub fn at(element: ApiElement, line: u32, column: Option<u32>) -> ApiElement {
    element.with_location(SourceLocation::new("api.xml", line, column))
}

/// The `android.os.Process` slice used by most scenarios.
pub fn process_api() -> Vec<ApiElement> {
    vec![namespace(
        "android.os",
        vec![
            class("Process").with_child(method("myPid", "()I")),
            interface("android.os.Process.OnUidImportanceListener"),
        ],
    )]
}

pub fn builder(config: BuilderConfig) -> (HierarchyBuilder, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let builder = HierarchyBuilder::new(config).with_sink(sink.clone());
    (builder, sink)
}

pub fn build(forest: &[ApiElement]) -> Hierarchy {
    let (builder, _) = builder(BuilderConfig::default());
    builder.build(forest).expect("build should succeed")
}

pub fn by_managed(h: &Hierarchy, full_managed_name: &str) -> ElementId {
    h.find_by_full_managed_name(full_managed_name)
        .unwrap_or_else(|| panic!("no element managed as {}", full_managed_name))
}

/// Full managed names of the resolved base types of `id`.
pub fn base_types(h: &Hierarchy, id: ElementId) -> Vec<String> {
    h[id]
        .base_types()
        .iter()
        .map(|b| h[*b].full_managed_name_str().to_string())
        .collect()
}
