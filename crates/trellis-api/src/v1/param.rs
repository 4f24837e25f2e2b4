//! Parameter values
//!
//! The scalar/array/object union carried by task parameters and artifact
//! values, with its substitution-token extraction.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::substitution::substitution_expressions;

/// Discriminator for the active [`ParamValue`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Scalar string
    String,
    /// Ordered sequence of strings
    Array,
    /// Mapping from attribute name to string value
    Object,
}

/// Value carried by a parameter or artifact
///
/// Serialized untagged: the JSON shape (string, array, or object) is the
/// type discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Scalar string value
    String(String),
    /// Ordered sequence of string values
    Array(Vec<String>),
    /// Attribute-to-value mapping, declaration order preserved
    Object(IndexMap<String, String>),
}

impl ParamValue {
    /// The active variant's discriminator
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ParamKind {
        match self {
            Self::String(_) => ParamKind::String,
            Self::Array(_) => ParamKind::Array,
            Self::Object(_) => ParamKind::Object,
        }
    }

    /// All `$( ... )` tokens in the value, walking every element or
    /// attribute value for the compound variants
    pub(crate) fn substitution_expressions(&self) -> Vec<String> {
        match self {
            Self::String(value) => substitution_expressions(value),
            Self::Array(items) => items
                .iter()
                .flat_map(|item| substitution_expressions(item))
                .collect(),
            Self::Object(map) => map
                .values()
                .flat_map(|value| substitution_expressions(value))
                .collect(),
        }
    }
}

impl Default for ParamValue {
    fn default() -> Self {
        Self::String(String::new())
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// A named parameter on a pipeline task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name
    pub name: String,
    /// Parameter value
    pub value: ParamValue,
}

impl Param {
    /// Extract every substitution token in the parameter value
    ///
    /// Returns the tokens and whether any were found.
    #[must_use]
    pub fn substitution_expressions(&self) -> (Vec<String>, bool) {
        let expressions = self.value.substitution_expressions();
        let found = !expressions.is_empty();
        (expressions, found)
    }
}
