use std::fmt;

use serde::{Deserialize, Serialize};

/// Registered name of a style (`"thumb"`, `"dynamic_50x50%23"`).
///
/// Dynamic names are always stored in their escaped form; see
/// `domain::naming` for the token <-> name mapping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleName(String);

impl StyleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StyleName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for StyleName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for StyleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single rendition an attachment can be processed into.
///
/// `geometry` is the processing instruction as given by the caller; for
/// dynamic styles it is the raw token the name was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDefinition {
    pub name: StyleName,
    pub geometry: String,
    pub dynamic: bool,
}

impl StyleDefinition {
    /// A style declared up front on the attachment definition.
    pub fn new_static(name: impl Into<StyleName>, geometry: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            geometry: geometry.into(),
            dynamic: false,
        }
    }

    /// A style minted at request time from a raw token.
    pub fn new_dynamic(name: StyleName, token: impl Into<String>) -> Self {
        Self {
            name,
            geometry: token.into(),
            dynamic: true,
        }
    }
}
