//! Legacy (`v1beta1`) pipeline artifact schema
//!
//! Kept structurally parallel to [`crate::v1`] but defined independently:
//! the two schemas evolve on their own, and [`conversion`] is the only
//! bridge between them. Task definitions read from storage under one
//! version and served under the other pass every artifact collection
//! through that bridge.

mod conversion;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Legacy value union carried by an artifact
///
/// Same untagged wire shape as [`crate::v1::ParamValue`].
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

impl Default for ParamValue {
    fn default() -> Self {
        Self::String(String::new())
    }
}

/// Legacy reference to the task that produces an artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRef {
    /// Referenced task name
    pub name: String,
    /// Task kind, when the name alone is ambiguous
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Legacy artifact declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Artifact name
    pub name: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Carried value
    #[serde(default)]
    pub value: ParamValue,
    /// Producing task, when declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_ref: Option<TaskRef>,
    /// Type tag
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub r#type: String,
}

/// Legacy input/output artifact collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artifacts {
    /// Consumed artifacts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<Artifact>,
    /// Produced artifacts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<Artifact>,
}
