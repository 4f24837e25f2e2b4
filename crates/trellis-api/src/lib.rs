//! Trellis API types
//!
//! Versioned wire schemas for pipeline artifacts and the pure logic that
//! operates on them.
//!
//! # Core Concepts
//!
//! - [`v1::Artifact`] / [`v1::Artifacts`]: named, typed values produced and
//!   consumed by pipeline tasks
//! - [`v1::ArtifactRef`]: structured decoding of one textual artifact
//!   reference expression (`tasks.<task>.artifacts.<direction>.<name>`)
//! - [`v1beta1`]: the legacy artifact schema plus lossless conversion to
//!   and from [`v1`]
//! - [`name`]: shared artifact name-format validation
//! - [`substitution`]: `$( ... )` substitution-token scanning
//!
//! Everything in this crate is pure, synchronous computation over
//! immutable borrows: no I/O, no locks, no shared mutable state beyond
//! lazily compiled regexes.
//!
//! # Example
//!
//! ```
//! use trellis_api::v1::{parse_artifact_expression, ArtifactIndex};
//!
//! let r = parse_artifact_expression("tasks.build.artifacts.outputs.sbom").unwrap();
//! assert_eq!(r.pipeline_task, "build");
//! assert_eq!(r.artifact, "sbom");
//! assert_eq!(r.index, ArtifactIndex::Whole);
//! ```

pub mod name;
pub mod substitution;
pub mod v1;
pub mod v1beta1;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
