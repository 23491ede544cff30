//! Discount category keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A normalized customer-category name used as the registry's lookup key.
///
/// Surrounding whitespace is trimmed and the name is lowercased, so `"VIP"`,
/// `" vip "` and `"vip"` are the same key. An empty name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Normalize `raw` into a key.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCategory`] when `raw` is empty or only
    /// whitespace.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCategory);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CategoryKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CategoryKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CategoryKey> for String {
    fn from(key: CategoryKey) -> Self {
        key.0
    }
}

impl AsRef<str> for CategoryKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_case_folded() {
        let upper = CategoryKey::new("VIP").unwrap();
        let lower = CategoryKey::new("vip").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.as_str(), "vip");
    }

    #[test]
    fn test_key_is_trimmed() {
        let key = CategoryKey::new("  Premium\t").unwrap();
        assert_eq!(key.as_str(), "premium");
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(CategoryKey::new(""), Err(DomainError::EmptyCategory));
        assert_eq!(CategoryKey::new("   "), Err(DomainError::EmptyCategory));
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let key = CategoryKey::new("ÉTUDIANT").unwrap();
        assert_eq!(key.as_str(), "étudiant");
    }

    #[test]
    fn test_parse_and_display() {
        let key: CategoryKey = "Student".parse().unwrap();
        assert_eq!(key.to_string(), "student");
    }
}
