use super::kind::ApiElementKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Where an element was read from.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash, JsonSchema)]
#[serde(default)]
pub struct SourceLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl SourceLocation {
    pub fn new(document_path: impl Into<String>, line: u32, column: Option<u32>) -> Self {
        Self {
            document_path: Some(document_path.into()),
            line: Some(line),
            column,
        }
    }

    pub fn is_known(&self) -> bool {
        self.document_path.as_deref().is_some_and(|p| !p.is_empty()) && self.line.is_some()
    }
}

/// Renders `path [line:col]` when a column is known, `path:line` otherwise,
/// and nothing when the location is unknown.
impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(path), Some(line)) = (self.document_path.as_deref(), self.line) else {
            return Ok(());
        };
        if path.is_empty() {
            return Ok(());
        }
        match self.column {
            Some(col) if col > 0 => write!(f, "{} [{}:{}]", path, line, col),
            _ => write!(f, "{}:{}", path, line),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct Deprecation {
    pub deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
}

/// A single raw API element (namespace, type, member or member part).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct ApiElement {
    #[serde(flatten)]
    pub kind: ApiElementKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_generic_aware: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jni_signature: Option<String>,
    #[serde(default)]
    pub location: SourceLocation,
    #[serde(default)]
    pub deprecation: Deprecation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_until: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_source_file: Option<String>,
    /// Attributes the reader did not interpret, kept for round-tripping.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub other_attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ApiElement>,
}

impl ApiElement {
    pub fn new(kind: ApiElementKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            managed_name: None,
            name_generic_aware: None,
            jni_signature: None,
            location: SourceLocation::default(),
            deprecation: Deprecation::default(),
            api_since: None,
            api_until: None,
            merge_source_file: None,
            other_attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: ApiElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ApiElement>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    pub fn with_managed_name(mut self, managed_name: impl Into<String>) -> Self {
        self.managed_name = Some(managed_name.into());
        self
    }

    pub fn with_jni_signature(mut self, signature: impl Into<String>) -> Self {
        self.jni_signature = Some(signature.into());
        self
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }
}

/// Reads a raw element forest from its JSON representation.
pub fn forest_from_json(json: &str) -> serde_json::Result<Vec<ApiElement>> {
    serde_json::from_str(json)
}

/// JSON schema of the raw element forest accepted by [`forest_from_json`].
pub fn forest_schema() -> schemars::Schema {
    schemars::schema_for!(Vec<ApiElement>)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display() {
        let loc = SourceLocation::new("api.xml", 12, Some(4));
        assert_eq!(loc.to_string(), "api.xml [12:4]");

        let loc = SourceLocation::new("api.xml", 12, None);
        assert_eq!(loc.to_string(), "api.xml:12");

        assert_eq!(SourceLocation::default().to_string(), "");
        assert!(!SourceLocation::default().is_known());
    }
}
