//! Artifact feature configuration
//!
//! Loads the [`ArtifactConfig`] — the list of registered artifact type
//! declarations — from an in-memory string map, typically the data of a
//! cluster config object.
//!
//! The name of that config object is an explicit value: the embedding
//! application resolves the `ARTIFACT_CONFIG` environment variable once
//! at process start and passes the result to
//! [`artifact_config_name`]. Nothing in this crate reads the process
//! environment.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Environment variable the embedding application consults at startup
/// for the config object name
pub const ARTIFACT_CONFIG_ENV: &str = "ARTIFACT_CONFIG";

/// Config object name used when no override is supplied
pub const DEFAULT_ARTIFACT_CONFIG_NAME: &str = "artifact-config";

/// Key inside the config map holding the JSON-encoded type list
const ARTIFACT_TYPES_KEY: &str = "type";

/// Resolve the config object name from an optional override
///
/// The override is the value the application read from
/// [`ARTIFACT_CONFIG_ENV`] at startup; empty or absent overrides fall
/// back to [`DEFAULT_ARTIFACT_CONFIG_NAME`].
#[must_use]
pub fn artifact_config_name(override_name: Option<&str>) -> &str {
    match override_name {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_ARTIFACT_CONFIG_NAME,
    }
}

/// One registered artifact type declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactType {
    /// Declared type name
    pub r#type: String,
    /// Task reference string associated with the type
    pub task_ref: String,
}

/// Artifact configuration: the registered artifact types
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Registered type declarations
    #[serde(rename = "artifact-type", default)]
    pub types: Vec<ArtifactType>,
}

impl ArtifactConfig {
    /// Build the config from a string map
    ///
    /// The value under the `"type"` key is JSON-decoded; a missing key
    /// yields an empty config.
    ///
    /// # Errors
    /// Returns [`ConfigError::Decode`] verbatim if the value is not valid
    /// JSON for the type list. There is no partial recovery.
    pub fn from_map(config_map: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let Some(raw) = config_map.get(ARTIFACT_TYPES_KEY) else {
            return Ok(Self::default());
        };
        tracing::debug!(raw = %raw, "decoding artifact type list");
        let config: Self = serde_json::from_str(raw)?;
        tracing::debug!(types = config.types.len(), "artifact config loaded");
        Ok(config)
    }
}

/// Errors from artifact configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The type list value is not valid JSON
    #[error("failed to decode artifact type list: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn config_name_defaults_without_override() {
        assert_eq!(artifact_config_name(None), "artifact-config");
        assert_eq!(artifact_config_name(Some("")), "artifact-config");
    }

    #[test]
    fn config_name_honors_override() {
        assert_eq!(artifact_config_name(Some("custom-config")), "custom-config");
    }

    #[test]
    fn missing_key_yields_empty_config() {
        let config = ArtifactConfig::from_map(&HashMap::new()).unwrap();
        assert_eq!(config, ArtifactConfig::default());
        assert!(config.types.is_empty());
    }

    #[test]
    fn decodes_type_list() {
        let map = HashMap::from([(
            "type".to_string(),
            r#"{"artifact-type":[{"type":"image","taskRef":"build-image"},{"type":"sbom","taskRef":"gen-sbom"}]}"#
                .to_string(),
        )]);
        let config = ArtifactConfig::from_map(&map).unwrap();
        assert_eq!(
            config.types,
            vec![
                ArtifactType {
                    r#type: "image".into(),
                    task_ref: "build-image".into(),
                },
                ArtifactType {
                    r#type: "sbom".into(),
                    task_ref: "gen-sbom".into(),
                },
            ]
        );
    }

    #[test]
    fn empty_type_list_is_valid() {
        let map = HashMap::from([("type".to_string(), "{}".to_string())]);
        let config = ArtifactConfig::from_map(&map).unwrap();
        assert!(config.types.is_empty());
    }

    #[test]
    fn malformed_json_surfaces_decode_error() {
        let map = HashMap::from([("type".to_string(), "not json".to_string())]);
        let err = ArtifactConfig::from_map(&map).unwrap_err();
        assert!(matches!(err, ConfigError::Decode(_)));
        assert!(err.to_string().contains("failed to decode"));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let map = HashMap::from([("other".to_string(), "garbage".to_string())]);
        assert!(ArtifactConfig::from_map(&map).unwrap().types.is_empty());
    }
}
