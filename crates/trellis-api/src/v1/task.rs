//! Pipeline task surface
//!
//! The three places an artifact reference can appear on a task —
//! parameter values, guard (`when`) expressions, and declared input
//! artifacts — and the aggregation entry point that walks them.

use serde::{Deserialize, Serialize};

use super::artifact::Artifacts;
use super::artifact_ref::{artifact_refs, ArtifactRef};
use super::param::Param;
use crate::substitution::substitution_expressions;

/// Guard expression on a pipeline task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhenExpression {
    /// Left-hand operand, possibly containing substitution tokens
    pub input: String,
    /// Comparison operator
    pub operator: String,
    /// Right-hand operands, possibly containing substitution tokens
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl WhenExpression {
    /// Extract every substitution token from the input and the values,
    /// in that order
    #[must_use]
    pub fn substitution_expressions(&self) -> (Vec<String>, bool) {
        let mut expressions = substitution_expressions(&self.input);
        for value in &self.values {
            expressions.extend(substitution_expressions(value));
        }
        let found = !expressions.is_empty();
        (expressions, found)
    }
}

/// A single task within a pipeline definition
///
/// Only the surfaces the reference resolver walks are modeled here; the
/// embedding definition owns the task and everything it contains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineTask {
    /// Task name
    pub name: String,
    /// Declared parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
    /// Guard expressions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub when: Vec<WhenExpression>,
    /// Declared input and output artifacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Artifacts>,
}

impl PipelineTask {
    /// Collect every artifact reference the task depends on
    ///
    /// Walks parameter values, then guard expressions, then declared
    /// input artifacts, running each batch of substitution tokens through
    /// the reference parser. References are returned in source order with
    /// no de-duplication; tokens that are not artifact references are
    /// skipped.
    #[must_use]
    pub fn artifact_refs(&self) -> Vec<ArtifactRef> {
        let mut refs = Vec::new();
        for param in &self.params {
            let (expressions, _) = param.substitution_expressions();
            refs.extend(artifact_refs(&expressions));
        }
        for when_expression in &self.when {
            let (expressions, _) = when_expression.substitution_expressions();
            refs.extend(artifact_refs(&expressions));
        }
        if let Some(artifacts) = &self.artifacts {
            for input in &artifacts.inputs {
                let (expressions, _) = input.input_substitution_expressions();
                refs.extend(artifact_refs(&expressions));
            }
        }
        refs
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::v1::{Artifact, ArtifactIndex, ParamValue};

    #[test]
    fn when_expression_scans_input_then_values() {
        let when = WhenExpression {
            input: "$(tasks.a.artifacts.outputs.x)".into(),
            operator: "in".into(),
            values: vec!["$(params.flag)".into(), "$(tasks.b.artifacts.outputs.y)".into()],
        };
        let (expressions, found) = when.substitution_expressions();
        assert!(found);
        assert_eq!(
            expressions,
            vec![
                "tasks.a.artifacts.outputs.x",
                "params.flag",
                "tasks.b.artifacts.outputs.y",
            ]
        );
    }

    #[test]
    fn aggregates_refs_in_source_order() {
        let task = PipelineTask {
            name: "deploy".into(),
            params: vec![Param {
                name: "sbom".into(),
                value: ParamValue::from("$(tasks.a.artifacts.outputs.x)"),
            }],
            when: vec![WhenExpression {
                input: "$(tasks.b.artifacts.outputs.y[0])".into(),
                operator: "in".into(),
                values: vec!["ready".into()],
            }],
            artifacts: Some(Artifacts {
                inputs: vec![Artifact {
                    name: "meta".into(),
                    description: None,
                    value: ParamValue::from("$(tasks.c.artifacts.outputs.z.attr)"),
                    task_ref: None,
                    r#type: "object".into(),
                }],
                outputs: vec![],
            }),
        };

        let refs = task.artifact_refs();
        assert_eq!(refs.len(), 3);

        assert_eq!(refs[0].pipeline_task, "a");
        assert_eq!(refs[0].artifact, "x");
        assert_eq!(refs[0].index, ArtifactIndex::Whole);
        assert_eq!(refs[0].property, "");

        assert_eq!(refs[1].pipeline_task, "b");
        assert_eq!(refs[1].artifact, "y");
        assert_eq!(refs[1].index, ArtifactIndex::Position(0));

        assert_eq!(refs[2].pipeline_task, "c");
        assert_eq!(refs[2].artifact, "z");
        assert_eq!(refs[2].property, "attr");
    }

    #[test]
    fn mixed_expression_kinds_do_not_produce_refs() {
        let task = PipelineTask {
            name: "noop".into(),
            params: vec![Param {
                name: "p".into(),
                value: ParamValue::from("$(params.foo) and $(context.pipeline.name)"),
            }],
            when: vec![],
            artifacts: None,
        };
        assert!(task.artifact_refs().is_empty());
    }

    #[test]
    fn array_valued_inputs_contribute_nothing() {
        let task = PipelineTask {
            name: "consume".into(),
            params: vec![],
            when: vec![],
            artifacts: Some(Artifacts {
                inputs: vec![Artifact {
                    name: "items".into(),
                    description: None,
                    value: ParamValue::Array(vec!["$(tasks.a.artifacts.outputs.x)".into()]),
                    task_ref: None,
                    r#type: "string".into(),
                }],
                outputs: vec![],
            }),
        };
        assert!(task.artifact_refs().is_empty());
    }

    #[test]
    fn duplicate_refs_are_kept() {
        let task = PipelineTask {
            name: "dup".into(),
            params: vec![
                Param {
                    name: "p1".into(),
                    value: ParamValue::from("$(tasks.a.artifacts.outputs.x)"),
                },
                Param {
                    name: "p2".into(),
                    value: ParamValue::from("$(tasks.a.artifacts.outputs.x)"),
                },
            ],
            when: vec![],
            artifacts: None,
        };
        let refs = task.artifact_refs();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0], refs[1]);
    }
}
