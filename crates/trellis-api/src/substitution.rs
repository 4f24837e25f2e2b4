//! `$( ... )` substitution-token scanning
//!
//! Parameter values, guard expressions, and artifact values embed
//! substitution tokens of the form `$(tasks.build.artifacts.outputs.sbom)`.
//! This module extracts the token bodies; classifying them is the
//! resolver's job.

use once_cell::sync::Lazy;
use regex::Regex;

static SUBSTITUTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\(([^)]+)\)").expect("substitution pattern is valid"));

/// Extract the body of every `$( ... )` token in `value`, in order of
/// appearance
///
/// Text outside tokens is ignored; an unterminated `$(` yields nothing.
#[must_use]
pub fn substitution_expressions(value: &str) -> Vec<String> {
    SUBSTITUTION_REGEX
        .captures_iter(value)
        .map(|captures| captures[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_single_token() {
        assert_eq!(
            substitution_expressions("$(tasks.build.artifacts.outputs.sbom)"),
            vec!["tasks.build.artifacts.outputs.sbom"]
        );
    }

    #[test]
    fn extracts_tokens_in_order() {
        let got = substitution_expressions("a $(first) b $(second) c");
        assert_eq!(got, vec!["first", "second"]);
    }

    #[test]
    fn ignores_plain_text() {
        assert!(substitution_expressions("no tokens here").is_empty());
    }

    #[test]
    fn ignores_unterminated_token() {
        assert!(substitution_expressions("$(never closed").is_empty());
    }

    #[test]
    fn ignores_empty_token() {
        assert!(substitution_expressions("$()").is_empty());
    }
}
