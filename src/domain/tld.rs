use std::fmt;

use serde::{Deserialize, Serialize};

/// A top-level-domain label, normalized to lowercase Unicode form.
///
/// Equality is exact string equality; the store enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tld(String);

impl Tld {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tld {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}
