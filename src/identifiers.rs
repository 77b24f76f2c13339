//! Domain text types for the knowledge tree.
//!
//! These types provide type-safe wrappers around the strings the player types
//! in. Both reject empty (or whitespace-only) input at construction, so a tree
//! can never hold an empty animal name or question.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Name of a single animal stored in a leaf.
///
/// Surrounding whitespace is trimmed; the interior is kept exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Animal(String);

impl Animal {
    /// Create a new animal name.
    ///
    /// # Examples
    ///
    /// ```
    /// use guess_animal::identifiers::Animal;
    ///
    /// let cat = Animal::new("  cat ")?;
    /// assert_eq!(cat.as_str(), "cat");
    /// assert!(Animal::new("   ").is_err());
    /// # Ok::<(), guess_animal::Error>(())
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self> {
        non_empty(value.into(), "animal name").map(Self)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the name into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A yes/no question that tells two groups of animals apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionText(String);

impl QuestionText {
    /// Create a new question.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        non_empty(value.into(), "question").map(Self)
    }

    /// Get the question as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the question into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn non_empty(value: String, what: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyText { what });
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

macro_rules! text_impls {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                self.as_str()
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $ty {
            type Error = Error;

            fn try_from(value: String) -> Result<Self> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = Error;

            fn try_from(value: &str) -> Result<Self> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

text_impls!(Animal);
text_impls!(QuestionText);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_trims_whitespace() {
        let animal = Animal::new("\t  snow leopard \n").unwrap();
        assert_eq!(animal.as_str(), "snow leopard");
        assert_eq!(animal.to_string(), "snow leopard");
    }

    #[test]
    fn test_empty_text_rejected() {
        assert!(matches!(
            Animal::new(""),
            Err(Error::EmptyText {
                what: "animal name"
            })
        ));
        assert!(matches!(
            QuestionText::new("   "),
            Err(Error::EmptyText { what: "question" })
        ));
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let ok: Animal = serde_json::from_str("\"dog\"").unwrap();
        assert_eq!(ok, "dog");
        assert!(serde_json::from_str::<Animal>("\"  \"").is_err());
        assert!(serde_json::from_str::<QuestionText>("\"\"").is_err());
    }
}
