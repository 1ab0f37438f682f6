use serde::Deserialize;

/// How the symbol index treats a key collision between elements of
/// different kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Re-key the later element as `"<kind>:<name>"` and warn.
    #[default]
    Prefix,
    /// Fail with `DuplicateIndexEntry`.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Namespace holding runtime-support types that are not part of the API
    /// description. Stored under its managed name.
    pub runtime_namespace: String,
    /// Implicit base of every interface without an explicit one.
    pub base_interface: String,
    /// Implicit base of every class without an explicit one (native name).
    pub root_object_type: String,
    /// Synthesize `root_object_type` when the input does not define it.
    pub synthesize_root_object: bool,
    /// Upper-case two-letter name segments entirely (`os` -> `OS`).
    pub upper_case_two_letter_segments: bool,
    /// Keep dots when translating dotted namespace names.
    pub preserve_dots: bool,
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            runtime_namespace: "Android.Runtime".to_string(),
            base_interface: "Android.Runtime.IJavaObject".to_string(),
            root_object_type: "java.lang.Object".to_string(),
            synthesize_root_object: true,
            upper_case_two_letter_segments: true,
            preserve_dots: true,
            duplicate_policy: DuplicatePolicy::Prefix,
        }
    }
}

impl BuilderConfig {
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn strict(mut self) -> Self {
        self.duplicate_policy = DuplicatePolicy::Strict;
        self
    }
}
