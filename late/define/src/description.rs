//! Parsed API descriptions.
//!
//! An [`ApiDescription`] is built from an OpenAPI document (YAML or JSON).
//! Only the parts the generator needs are kept: document metadata and one
//! [`OperationDescriptor`] per supported path + verb pair, in the order the
//! document lists them.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::errors::DefineError;
use crate::types::{HttpVerb, OperationDescriptor};

/// Raw document shape. Path items keep arbitrary values so non-operation keys
/// (`parameters`, `summary`, `servers`, ...) never fail deserialization.
#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    #[serde(default)]
    info: Option<ApiInfo>,
    #[serde(default)]
    servers: Vec<ServerEntry>,
    #[serde(default)]
    paths: IndexMap<String, IndexMap<String, serde_yaml::Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOperation {
    #[serde(default)]
    tags: Vec<String>,
    operation_id: Option<String>,
    summary: Option<String>,
}

/// The `info` block of a description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiInfo {
    /// API title.
    #[serde(default)]
    pub title: String,
    /// API version string.
    #[serde(default)]
    pub version: String,
}

/// One entry of the `servers` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerEntry {
    /// Server URL.
    pub url: String,
}

/// A parsed, immutable API description.
///
/// ## Examples
///
/// ```
/// use late_define::{ApiDescription, HttpVerb};
///
/// let description = ApiDescription::from_yaml_str(r#"
/// paths:
///   /v1/posts:
///     get:
///       tags: [Posts]
///       operationId: listPosts
///     post:
///       tags: [Posts]
///       operationId: createPost
/// "#).unwrap();
///
/// let ids: Vec<_> = description
///     .operations()
///     .iter()
///     .filter_map(|op| op.operation_id.as_deref())
///     .collect();
/// assert_eq!(ids, ["listPosts", "createPost"]);
/// assert_eq!(description.operations()[1].verb, HttpVerb::Post);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiDescription {
    info: Option<ApiInfo>,
    servers: Vec<ServerEntry>,
    operations: Vec<OperationDescriptor>,
}

impl ApiDescription {
    /// Loads a description from disk, choosing the parser by file extension.
    ///
    /// ## Errors
    ///
    /// - [`DefineError::NotFound`] if the file does not exist
    /// - [`DefineError::UnsupportedFormat`] for extensions other than
    ///   `.yaml`, `.yml` and `.json`
    /// - a parse error if the document is malformed
    pub fn load(path: &Path) -> Result<Self, DefineError> {
        if !path.exists() {
            return Err(DefineError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = fs::read_to_string(path).map_err(|source| DefineError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&content),
            "json" => Self::from_json_str(&content),
            _ => Err(DefineError::UnsupportedFormat { extension }),
        }
    }

    /// Parses a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, DefineError> {
        let raw: RawDocument = serde_yaml::from_str(content)?;
        Self::from_raw(raw)
    }

    /// Parses a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, DefineError> {
        let raw: RawDocument = serde_json::from_str(content)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDocument) -> Result<Self, DefineError> {
        let mut operations = Vec::new();

        for (path, item) in raw.paths {
            for (key, value) in item {
                let Ok(verb) = HttpVerb::from_str(&key) else {
                    continue;
                };

                let record: RawOperation = serde_yaml::from_value(value).map_err(|source| {
                    DefineError::InvalidOperation {
                        verb,
                        path: path.clone(),
                        source,
                    }
                })?;

                operations.push(OperationDescriptor {
                    path: path.clone(),
                    verb,
                    tags: record.tags,
                    operation_id: non_blank(record.operation_id),
                    summary: non_blank(record.summary),
                });
            }
        }

        Ok(Self {
            info: raw.info,
            servers: raw.servers,
            operations,
        })
    }

    /// Builds a description directly from descriptors.
    pub fn from_operations(operations: Vec<OperationDescriptor>) -> Self {
        Self {
            info: None,
            servers: Vec::new(),
            operations,
        }
    }

    /// Document metadata, if present.
    pub fn info(&self) -> Option<&ApiInfo> {
        self.info.as_ref()
    }

    /// Declared servers.
    pub fn servers(&self) -> &[ServerEntry] {
        &self.servers
    }

    /// Supported operations in path order x verb order.
    pub fn operations(&self) -> &[OperationDescriptor] {
        &self.operations
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
openapi: 3.0.3
info:
  title: Late API
  version: "1.0.0"
servers:
  - url: https://getlate.dev/api
paths:
  /v1/posts:
    parameters:
      - name: profileId
        in: query
    get:
      tags: [Posts]
      operationId: listPosts
      summary: List posts
      responses:
        200:
          description: OK
    post:
      tags: [Posts]
      operationId: createPost
  /v1/health:
    head:
      summary: Liveness check
    get: {}
"#;

    #[test]
    fn parses_operations_in_document_order() {
        let description = ApiDescription::from_yaml_str(SAMPLE).unwrap();
        let ops = description.operations();

        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0].operation_id.as_deref(), Some("listPosts"));
        assert_eq!(ops[0].summary.as_deref(), Some("List posts"));
        assert_eq!(ops[1].operation_id.as_deref(), Some("createPost"));
        assert_eq!(ops[2].path, "/v1/health");
        assert_eq!(ops[2].verb, HttpVerb::Get);
    }

    #[test]
    fn skips_unsupported_verbs_and_non_operation_keys() {
        let description = ApiDescription::from_yaml_str(SAMPLE).unwrap();
        assert!(
            description
                .operations()
                .iter()
                .all(|op| op.summary.as_deref() != Some("Liveness check"))
        );
    }

    #[test]
    fn reads_info_and_servers() {
        let description = ApiDescription::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(description.info().unwrap().title, "Late API");
        assert_eq!(description.servers()[0].url, "https://getlate.dev/api");
    }

    #[test]
    fn blank_operation_id_is_absent() {
        let description = ApiDescription::from_yaml_str(
            "paths:\n  /v1/logs:\n    get:\n      operationId: '  '\n",
        )
        .unwrap();
        assert_eq!(description.operations()[0].operation_id, None);
    }

    #[test]
    fn parses_json_documents() {
        let json = r#"{
            "paths": {
                "/v1/media/presign": {
                    "post": { "tags": ["Media"], "operationId": "getMediaPresignedUrl" }
                }
            }
        }"#;
        let description = ApiDescription::from_json_str(json).unwrap();
        assert_eq!(description.operations()[0].tags, vec!["Media"]);
    }

    #[test]
    fn malformed_operation_names_path_and_verb() {
        let err = ApiDescription::from_yaml_str("paths:\n  /v1/posts:\n    get:\n      tags: 7\n")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("GET"), "{message}");
        assert!(message.contains("/v1/posts"), "{message}");
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = ApiDescription::load(&temp_dir.path().join("openapi.yaml")).unwrap_err();
        assert!(matches!(err, DefineError::NotFound { .. }));
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("openapi.toml");
        fs::write(&path, "paths = {}").unwrap();

        let err = ApiDescription::load(&path).unwrap_err();
        assert!(matches!(err, DefineError::UnsupportedFormat { .. }));
    }

    #[test]
    fn load_reads_yaml_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("openapi.yml");
        fs::write(&path, SAMPLE).unwrap();

        let description = ApiDescription::load(&path).unwrap();
        assert_eq!(description.operations().len(), 3);
    }
}
