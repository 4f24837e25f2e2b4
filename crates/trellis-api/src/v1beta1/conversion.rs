//! Conversion between the legacy and current artifact schemas
//!
//! Every struct conversion destructures its source exhaustively (no `..`
//! rest pattern), so a field added to either schema stops compiling here
//! instead of being dropped on the wire. Conversions are infallible: the
//! two value unions are isomorphic.
//!
//! The converter always produces a fresh owned copy; neither direction
//! aliases its source.

use super::{Artifact, Artifacts, ParamValue, TaskRef};
use crate::v1;

impl From<&ParamValue> for v1::ParamValue {
    fn from(value: &ParamValue) -> Self {
        match value {
            ParamValue::String(s) => Self::String(s.clone()),
            ParamValue::Array(items) => Self::Array(items.clone()),
            ParamValue::Object(map) => Self::Object(map.clone()),
        }
    }
}

impl From<&v1::ParamValue> for ParamValue {
    fn from(value: &v1::ParamValue) -> Self {
        match value {
            v1::ParamValue::String(s) => Self::String(s.clone()),
            v1::ParamValue::Array(items) => Self::Array(items.clone()),
            v1::ParamValue::Object(map) => Self::Object(map.clone()),
        }
    }
}

impl TaskRef {
    /// Convert to the current schema
    #[must_use]
    pub fn convert_to(&self) -> v1::TaskRef {
        let Self { name, kind } = self;
        v1::TaskRef {
            name: name.clone(),
            kind: kind.clone(),
        }
    }

    /// Rebuild the legacy representation from the current schema
    #[must_use]
    pub fn convert_from(source: &v1::TaskRef) -> Self {
        let v1::TaskRef { name, kind } = source;
        Self {
            name: name.clone(),
            kind: kind.clone(),
        }
    }
}

impl Artifact {
    /// Convert to the current schema
    ///
    /// Name, type, and description are copied verbatim; validation is
    /// assumed to have already run against the source schema. An absent
    /// producing-task reference stays absent.
    #[must_use]
    pub fn convert_to(&self) -> v1::Artifact {
        let Self {
            name,
            description,
            value,
            task_ref,
            r#type,
        } = self;
        v1::Artifact {
            name: name.clone(),
            description: description.clone(),
            value: value.into(),
            task_ref: task_ref.as_ref().map(TaskRef::convert_to),
            r#type: r#type.clone(),
        }
    }

    /// Rebuild the legacy representation from the current schema
    #[must_use]
    pub fn convert_from(source: &v1::Artifact) -> Self {
        let v1::Artifact {
            name,
            description,
            value,
            task_ref,
            r#type,
        } = source;
        Self {
            name: name.clone(),
            description: description.clone(),
            value: value.into(),
            task_ref: task_ref.as_ref().map(TaskRef::convert_from),
            r#type: r#type.clone(),
        }
    }
}

impl Artifacts {
    /// Convert the whole collection to the current schema
    ///
    /// Inputs and outputs are rebuilt from empty, element by element, in
    /// original order.
    #[must_use]
    pub fn convert_to(&self) -> v1::Artifacts {
        let Self { inputs, outputs } = self;
        v1::Artifacts {
            inputs: inputs.iter().map(Artifact::convert_to).collect(),
            outputs: outputs.iter().map(Artifact::convert_to).collect(),
        }
    }

    /// Rebuild the legacy collection from the current schema
    #[must_use]
    pub fn convert_from(source: &v1::Artifacts) -> Self {
        let v1::Artifacts { inputs, outputs } = source;
        Self {
            inputs: inputs.iter().map(Artifact::convert_from).collect(),
            outputs: outputs.iter().map(Artifact::convert_from).collect(),
        }
    }
}
