use crate::error::{ApiError, ApiResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Member or type visibility. Read from and written as the textual form
/// (`"protected internal"`), see the [`FromStr`] impl.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub enum ApiVisibility {
    #[default]
    Unknown,
    Public,
    Protected,
    Private,
    Internal,
    ProtectedInternal,
    PrivateProtected,
}

impl ApiVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVisibility::Unknown => "",
            ApiVisibility::Public => "public",
            ApiVisibility::Protected => "protected",
            ApiVisibility::Private => "private",
            ApiVisibility::Internal => "internal",
            ApiVisibility::ProtectedInternal => "protected internal",
            ApiVisibility::PrivateProtected => "private protected",
        }
    }
}

impl fmt::Display for ApiVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the textual visibility used by API descriptions.
///
/// Comparison is case-insensitive. Two-word visibilities are accepted in
/// either order (`"internal protected"` is the same as `"protected internal"`).
/// An empty string is `Unknown`.
impl FromStr for ApiVisibility {
    type Err = ApiError;

    fn from_str(s: &str) -> ApiResult<Self> {
        let v = s.trim().to_ascii_lowercase();
        if v.is_empty() {
            return Ok(ApiVisibility::Unknown);
        }

        match v.as_str() {
            "public" => return Ok(ApiVisibility::Public),
            "protected" => return Ok(ApiVisibility::Protected),
            "private" => return Ok(ApiVisibility::Private),
            "internal" => return Ok(ApiVisibility::Internal),
            _ => {}
        }

        let parts: Vec<&str> = v.split_whitespace().collect();
        match parts.as_slice() {
            ["protected", "internal"] | ["internal", "protected"] => {
                Ok(ApiVisibility::ProtectedInternal)
            }
            ["private", "protected"] | ["protected", "private"] => {
                Ok(ApiVisibility::PrivateProtected)
            }
            _ => Err(ApiError::InvalidVisibility(s.to_string())),
        }
    }
}

impl TryFrom<String> for ApiVisibility {
    type Error = ApiError;

    fn try_from(value: String) -> ApiResult<Self> {
        value.parse()
    }
}

impl From<ApiVisibility> for String {
    fn from(visibility: ApiVisibility) -> Self {
        visibility.as_str().to_string()
    }
}
