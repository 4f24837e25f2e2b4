//! Artifact declarations
//!
//! An [`Artifact`] is a named, typed value a pipeline task produces or
//! consumes; [`Artifacts`] groups a task's declared inputs and outputs.

use serde::{Deserialize, Serialize};

use super::param::{ParamKind, ParamValue};
use crate::name::{validate_artifact_name, NameError};

/// Reference to the task that produces an artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRef {
    /// Referenced task name
    pub name: String,
    /// Task kind, when the name alone is ambiguous
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A named, typed value produced or consumed by a pipeline task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Artifact name; must satisfy [`crate::name::ARTIFACT_NAME_FORMAT`]
    pub name: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Carried value; the active variant is the type discriminator
    #[serde(default)]
    pub value: ParamValue,
    /// Producing task, when declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_ref: Option<TaskRef>,
    /// Type tag
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub r#type: String,
}

impl Artifact {
    /// Check the artifact name against the shared name format
    ///
    /// # Errors
    /// Returns [`NameError::InvalidName`] if the name does not match.
    pub fn validate_name(&self) -> Result<(), NameError> {
        validate_artifact_name(&self.name)
    }

    /// Extract every `$( ... )` token from the artifact value
    ///
    /// The scalar value is scanned directly; array and object values are
    /// scanned element by element. Returns the tokens and whether any
    /// were found.
    #[must_use]
    pub fn substitution_expressions(&self) -> (Vec<String>, bool) {
        let expressions = self.value.substitution_expressions();
        let found = !expressions.is_empty();
        (expressions, found)
    }

    /// Extraction variant for declared *input* artifacts
    ///
    /// Only string- and object-valued inputs are scanned; array-valued
    /// inputs yield no expressions. That restriction is part of the input
    /// contract, not an oversight.
    #[must_use]
    pub fn input_substitution_expressions(&self) -> (Vec<String>, bool) {
        let expressions = match self.value.kind() {
            ParamKind::String | ParamKind::Object => self.value.substitution_expressions(),
            ParamKind::Array => Vec::new(),
        };
        let found = !expressions.is_empty();
        (expressions, found)
    }
}

/// Declared input and output artifacts of a pipeline task
///
/// Order matches declaration order; uniqueness is not enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artifacts {
    /// Consumed artifacts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<Artifact>,
    /// Produced artifacts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<Artifact>,
}
