use super::visibility::ApiVisibility;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kind tag of a raw API element together with its kind-specific attributes.
///
/// Tags the reader does not know deserialize to `Unsupported`; the hierarchy
/// builder reports and skips them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApiElementKind {
    Namespace(ApiNamespace),
    Class(ApiClass),
    Interface(ApiTypeInfo),
    Enum(ApiTypeInfo),
    Field(ApiField),
    Constructor(ApiMethod),
    Method(ApiMethod),
    Implements(ApiImplements),
    TypeParameter(ApiTypeParameter),
    TypeParameterGenericConstraint(ApiGenericConstraint),
    MethodParameter(ApiMethodParameter),
    Exception(ApiException),
    #[serde(other)]
    Unsupported,
}

impl ApiElementKind {
    /// The serialized tag of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ApiElementKind::Namespace(_) => "namespace",
            ApiElementKind::Class(_) => "class",
            ApiElementKind::Interface(_) => "interface",
            ApiElementKind::Enum(_) => "enum",
            ApiElementKind::Field(_) => "field",
            ApiElementKind::Constructor(_) => "constructor",
            ApiElementKind::Method(_) => "method",
            ApiElementKind::Implements(_) => "implements",
            ApiElementKind::TypeParameter(_) => "type_parameter",
            ApiElementKind::TypeParameterGenericConstraint(_) => {
                "type_parameter_generic_constraint"
            }
            ApiElementKind::MethodParameter(_) => "method_parameter",
            ApiElementKind::Exception(_) => "exception",
            ApiElementKind::Unsupported => "unsupported",
        }
    }

    /// Type attributes shared by classes, interfaces and enums.
    pub fn type_info(&self) -> Option<&ApiTypeInfo> {
        match self {
            ApiElementKind::Class(c) => Some(&c.type_info),
            ApiElementKind::Interface(t) | ApiElementKind::Enum(t) => Some(t),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct ApiNamespace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jni_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct ApiTypeInfo {
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(rename = "final")]
    pub is_final: bool,
    pub visibility: ApiVisibility,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct ApiClass {
    #[serde(flatten)]
    pub type_info: ApiTypeInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends_generic_aware: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jni_extends: Option<String>,
    pub obfuscated: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct ApiField {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_generic_aware: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub transient: bool,
    #[serde(rename = "volatile")]
    pub is_volatile: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(rename = "final")]
    pub is_final: bool,
    pub visibility: ApiVisibility,
}

/// Shared by methods and constructors.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct ApiMethod {
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(rename = "final")]
    pub is_final: bool,
    pub visibility: ApiVisibility,
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jni_return: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_return: Option<String>,
    pub native: bool,
    pub synchronized: bool,
    pub bridge: bool,
    pub synthetic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct ApiImplements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jni_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct ApiTypeParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_bound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jni_class_bound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_bounds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jni_interface_bounds: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct ApiGenericConstraint {
    #[serde(rename = "type")]
    pub type_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct ApiMethodParameter {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jni_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct ApiException {
    #[serde(rename = "type")]
    pub type_name: String,
}
