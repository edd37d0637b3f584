//! Collection identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated name of a document collection.
///
/// Collection names are provider-assigned path segments: non-empty,
/// no slashes, no whitespace.
///
/// # Example
///
/// ```
/// use aula_core::CollectionId;
///
/// let classes = CollectionId::new("classes").unwrap();
/// assert_eq!(classes.as_str(), "classes");
/// assert!(CollectionId::new("a/b").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionId(String);

impl CollectionId {
    /// Create a new collection id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or contains `/` or
    /// whitespace.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the collection name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::Collection {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if let Some(c) = s.chars().find(|c| *c == '/' || c.is_whitespace()) {
            return Err(InvalidInputError::Collection {
                value: s.to_string(),
                reason: format!("contains forbidden character '{}'", c),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CollectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CollectionId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CollectionId> for String {
    fn from(id: CollectionId) -> Self {
        id.0
    }
}
