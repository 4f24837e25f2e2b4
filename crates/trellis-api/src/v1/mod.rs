//! Current (`v1`) pipeline artifact schema
//!
//! Primary home of the artifact data model and the reference resolver.
//! The legacy schema lives in [`crate::v1beta1`] and converts to and from
//! these types.

mod artifact;
mod artifact_ref;
mod param;
mod task;

pub use artifact::{Artifact, Artifacts, TaskRef};
pub use artifact_ref::{
    artifact_refs, looks_like_artifact_ref, looks_like_contains_artifact_refs,
    parse_artifact_expression, parse_artifact_name, ArtifactIndex, ArtifactRef, RefParseError,
    ARTIFACT_ARTIFACTS_PART, ARTIFACT_FINALLY_PART, ARTIFACT_TASK_PART,
};
pub use param::{Param, ParamKind, ParamValue};
pub use task::{PipelineTask, WhenExpression};
