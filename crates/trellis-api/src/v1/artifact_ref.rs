//! Artifact reference expressions
//!
//! Recognizes and parses textual references to another task's artifacts,
//! as they appear inside `$( ... )` substitution tokens:
//!
//! - `tasks.<task>.artifacts.<direction>.<name>` — whole value
//! - `tasks.<task>.artifacts.<direction>.<name>[<idx>]` — array element
//!   (or `[*]` for all elements)
//! - `tasks.<task>.artifacts.<direction>.<objectName>.<attribute>` —
//!   object attribute
//!
//! Classification is deliberately permissive (segment-shape match) while
//! parsing is strict (exact segment count, fixed keyword positions): the
//! cheap pre-filter skips the vast majority of plain-text expressions
//! before the structured parse runs.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading keyword of an ordinary task reference
pub const ARTIFACT_TASK_PART: &str = "tasks";
/// Leading keyword of a finally-task reference
pub const ARTIFACT_FINALLY_PART: &str = "finally";
/// Keyword at segment 2 of every artifact reference
pub const ARTIFACT_ARTIFACTS_PART: &str = "artifacts";

const ARTIFACT_EXPRESSION_FORMAT: &str = "tasks.<taskName>.artifacts.<direction>.<artifactName>";
// Expressions of the form <artifactName>.<attribute> are treated as object
// artifacts. A scalar artifact whose name contains a dot must use brackets
// to avoid being read as an object access.
const OBJECT_ARTIFACT_EXPRESSION_FORMAT: &str =
    "tasks.<taskName>.artifacts.<direction>.<objectArtifactName>.<individualAttribute>";

static ARRAY_INDEXING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([0-9]+|\*)\]$").expect("array indexing pattern is valid"));

/// Element selection parsed from an artifact reference
///
/// Distinguishes "no bracket suffix" from an explicit `[0]` and from
/// `[*]`; conflating the three misresolves a whole-array reference as
/// element 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ArtifactIndex {
    /// No bracket suffix: the whole value
    #[default]
    Whole,
    /// Explicit `[N]` element selection
    Position(usize),
    /// `[*]`: all elements
    Star,
}

impl ArtifactIndex {
    /// The selected position, with [`Whole`](Self::Whole) and
    /// [`Star`](Self::Star) mapping to 0 for callers that only handle
    /// scalar positions
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Whole | Self::Star => 0,
            Self::Position(index) => *index,
        }
    }
}

/// Structured decoding of one artifact reference expression
///
/// At most one of `index` (meaningful selection) and `property`
/// (non-empty) applies to a given expression; both are unset for a plain
/// whole-value reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ArtifactRef {
    /// Name of the task producing the referenced artifact
    pub pipeline_task: String,
    /// Bare artifact name, without any index suffix
    pub artifact: String,
    /// Element selection, for array-valued artifacts
    pub index: ArtifactIndex,
    /// Attribute name, for object-valued artifacts; empty otherwise
    pub property: String,
}

/// Errors from [`parse_artifact_expression`]
///
/// `NoMatch` is the expected outcome for the many non-artifact
/// expressions that share a string pool with artifact references; it is
/// a unit variant so that misses cost nothing to construct.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefParseError {
    /// The expression is not shaped like an artifact reference at all
    #[error(
        "not an artifact reference; must be one of the form 1). {ARTIFACT_EXPRESSION_FORMAT:?}; 2). {OBJECT_ARTIFACT_EXPRESSION_FORMAT:?}"
    )]
    NoMatch,
    /// The expression is artifact-shaped but matches neither accepted form
    #[error(
        "malformed artifact reference {expression:?}; must be one of the form 1). {ARTIFACT_EXPRESSION_FORMAT:?}; 2). {OBJECT_ARTIFACT_EXPRESSION_FORMAT:?}"
    )]
    Malformed {
        /// The offending expression
        expression: String,
    },
}

/// Cheap shape pre-filter for artifact reference expressions
///
/// True iff the expression has at least 4 dot-separated segments, starts
/// with [`ARTIFACT_TASK_PART`] or [`ARTIFACT_FINALLY_PART`], and has
/// [`ARTIFACT_ARTIFACTS_PART`] at segment 2. Not a full grammar check:
/// strings it accepts may still fail to parse.
#[must_use]
pub fn looks_like_artifact_ref(expression: &str) -> bool {
    let segments: Vec<&str> = expression.split('.').collect();
    segments.len() >= 4
        && (segments[0] == ARTIFACT_TASK_PART || segments[0] == ARTIFACT_FINALLY_PART)
        && segments[2] == ARTIFACT_ARTIFACTS_PART
}

/// True iff any expression in the batch passes [`looks_like_artifact_ref`]
///
/// Used as a fast guard before running strict validation elsewhere.
#[must_use]
pub fn looks_like_contains_artifact_refs(expressions: &[String]) -> bool {
    expressions
        .iter()
        .any(|expression| looks_like_artifact_ref(expression))
}

/// Split a trailing `[<idx>]` suffix off an artifact name
///
/// The suffix token is either a decimal integer or `*`. Returns the bare
/// name and the raw token, empty when no suffix was present.
///
/// ```
/// use trellis_api::v1::parse_artifact_name;
///
/// assert_eq!(parse_artifact_name("items[3]"), ("items".to_string(), "3".to_string()));
/// assert_eq!(parse_artifact_name("items[*]"), ("items".to_string(), "*".to_string()));
/// assert_eq!(parse_artifact_name("items"), ("items".to_string(), String::new()));
/// ```
#[must_use]
pub fn parse_artifact_name(name: &str) -> (String, String) {
    match ARRAY_INDEXING_REGEX.find(name) {
        Some(suffix) => {
            let token = &name[suffix.start() + 1..suffix.end() - 1];
            (name[..suffix.start()].to_string(), token.to_string())
        }
        None => (name.to_string(), String::new()),
    }
}

/// Parse one expression into an [`ArtifactRef`]
///
/// Accepts exactly the 5-segment form (optionally index-suffixed) and the
/// 6-segment object-attribute form.
///
/// # Errors
/// - [`RefParseError::NoMatch`] when the shape pre-filter rejects the
///   expression
/// - [`RefParseError::Malformed`] when the shape matches but the segment
///   count is neither 5 nor 6, or the index token is out of range
pub fn parse_artifact_expression(expression: &str) -> Result<ArtifactRef, RefParseError> {
    if !looks_like_artifact_ref(expression) {
        return Err(RefParseError::NoMatch);
    }
    let malformed = || RefParseError::Malformed {
        expression: expression.to_string(),
    };
    let segments: Vec<&str> = expression.split('.').collect();
    match segments.len() {
        // tasks.<task>.artifacts.<direction>.<name[idx]>
        5 => {
            let (artifact, token) = parse_artifact_name(segments[4]);
            let index = match token.as_str() {
                "" => ArtifactIndex::Whole,
                "*" => ArtifactIndex::Star,
                digits => ArtifactIndex::Position(digits.parse().map_err(|_| malformed())?),
            };
            Ok(ArtifactRef {
                pipeline_task: segments[1].to_string(),
                artifact,
                index,
                property: String::new(),
            })
        }
        // tasks.<task>.artifacts.<direction>.<objectName>.<attribute>
        6 => Ok(ArtifactRef {
            pipeline_task: segments[1].to_string(),
            artifact: segments[4].to_string(),
            index: ArtifactIndex::Whole,
            property: segments[5].to_string(),
        }),
        _ => Err(malformed()),
    }
}

/// Parse a batch of expressions, keeping only the artifact references
///
/// Parse failures are silently skipped: an expression that is not an
/// artifact reference is usually some other kind of substitution
/// expression, which is a normal input here.
#[must_use]
pub fn artifact_refs(expressions: &[String]) -> Vec<ArtifactRef> {
    expressions
        .iter()
        .filter_map(|expression| parse_artifact_expression(expression).ok())
        .collect()
}
