//! Minimal document object model for the OpenAPI subset the viewer displays.
//!
//! This is the external-collaborator boundary: mechanical serde structs plus
//! a loader that attempts JSON first and falls back to YAML. Only the fields
//! the extraction layer enumerates are modeled; everything else in a
//! document is ignored on deserialization. `$ref` values are represented as
//! unresolved [`RefOr::Ref`] and degrade to omitted detail sections rather
//! than errors.

use crate::model::{HttpMethod, LoadError};
use serde::Deserialize;
use std::collections::HashMap;

/// Parse document bytes, attempting JSON first and YAML second.
///
/// # Errors
///
/// Returns [`LoadError::Unrecognized`] carrying both parser messages when
/// neither serialization form yields a document.
pub fn load(bytes: &[u8]) -> Result<Document, LoadError> {
    match serde_json::from_slice::<Document>(bytes) {
        Ok(doc) => Ok(doc),
        Err(json_err) => serde_yaml::from_slice::<Document>(bytes).map_err(|yaml_err| {
            LoadError::Unrecognized {
                json_error: json_err.to_string(),
                yaml_error: yaml_err.to_string(),
            }
        }),
    }
}

/// A parsed interface-description document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    /// Dialect version string, e.g. `3.0.3` or `3.1.0`.
    pub openapi: String,
    /// Title/version metadata.
    pub info: Info,
    /// Path templates mapped to their operations.
    #[serde(default)]
    pub paths: HashMap<String, PathItem>,
    /// Reusable components grouped by kind.
    #[serde(default)]
    pub components: Components,
    /// Named webhooks (3.1+ documents only).
    #[serde(default)]
    pub webhooks: HashMap<String, PathItem>,
}

impl Document {
    /// Whether the document dialect defines webhooks (3.1 or later).
    pub fn supports_webhooks(&self) -> bool {
        let mut parts = self.openapi.split('.');
        let major: u32 = match parts.next().and_then(|p| p.parse().ok()) {
            Some(v) => v,
            None => return false,
        };
        let minor: u32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        major > 3 || (major == 3 && minor >= 1)
    }
}

/// Document metadata shown in the footer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    /// Document title.
    #[serde(default)]
    pub title: String,
    /// Document version (of the described API, not the dialect).
    #[serde(default)]
    pub version: String,
    /// Optional prose description.
    #[serde(default)]
    pub description: Option<String>,
}

/// The operations available on one path (or one webhook).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    /// GET operation, if present.
    #[serde(default)]
    pub get: Option<Operation>,
    /// POST operation, if present.
    #[serde(default)]
    pub post: Option<Operation>,
    /// PUT operation, if present.
    #[serde(default)]
    pub put: Option<Operation>,
    /// DELETE operation, if present.
    #[serde(default)]
    pub delete: Option<Operation>,
    /// PATCH operation, if present.
    #[serde(default)]
    pub patch: Option<Operation>,
    /// HEAD operation, if present.
    #[serde(default)]
    pub head: Option<Operation>,
    /// OPTIONS operation, if present.
    #[serde(default)]
    pub options: Option<Operation>,
    /// TRACE operation, if present.
    #[serde(default)]
    pub trace: Option<Operation>,
}

impl PathItem {
    /// The operation bound to `method`, if any.
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Trace => self.trace.as_ref(),
        }
    }

    /// Iterate over all present (method, operation) pairs.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        HttpMethod::ALL
            .iter()
            .filter_map(move |&m| self.operation(m).map(|op| (m, op)))
    }
}

/// One HTTP operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    /// Short summary.
    #[serde(default)]
    pub summary: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Operation id.
    #[serde(rename = "operationId", default)]
    pub operation_id: String,
    /// Operation parameters (possibly references).
    #[serde(default)]
    pub parameters: Vec<RefOr<Parameter>>,
    /// Request body (possibly a reference).
    #[serde(rename = "requestBody", default)]
    pub request_body: Option<RefOr<RequestBody>>,
    /// Responses keyed by status code (or `default`).
    #[serde(default)]
    pub responses: HashMap<String, RefOr<Response>>,
}

/// Either an unresolved `$ref` or an inline value.
///
/// The `Ref` variant must be tried first: an inline struct whose fields are
/// all defaulted would otherwise absorb `{"$ref": …}` maps.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RefOr<T> {
    /// An unresolved reference to another part of the document.
    Ref(Reference),
    /// An inline value.
    Item(T),
}

impl<T> RefOr<T> {
    /// The inline value, or `None` for an unresolved reference.
    pub fn as_item(&self) -> Option<&T> {
        match self {
            RefOr::Ref(_) => None,
            RefOr::Item(item) => Some(item),
        }
    }
}

/// An unresolved `$ref` target.
#[derive(Debug, Clone, Deserialize)]
pub struct Reference {
    /// The reference target, e.g. `#/components/schemas/Pet`.
    #[serde(rename = "$ref")]
    pub target: String,
}

/// One operation parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    #[serde(default)]
    pub name: String,
    /// Where the parameter lives: `query`, `path`, `header`, `cookie`.
    #[serde(rename = "in", default)]
    pub location: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Whether the parameter is required.
    #[serde(default)]
    pub required: bool,
    /// Value schema.
    #[serde(default)]
    pub schema: Option<RefOr<Schema>>,
    /// Example value, shown verbatim.
    #[serde(default)]
    pub example: Option<serde_json::Value>,
}

/// A request body definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Whether a body is required.
    #[serde(default)]
    pub required: bool,
    /// Media types mapped to their payload definitions.
    #[serde(default)]
    pub content: HashMap<String, MediaType>,
}

/// One media-type payload definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
    /// Payload schema.
    #[serde(default)]
    pub schema: Option<RefOr<Schema>>,
}

/// A response definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    /// Response description (required by the dialect, but tolerated absent).
    #[serde(default)]
    pub description: Option<String>,
    /// Media types mapped to their payload definitions.
    #[serde(default)]
    pub content: HashMap<String, MediaType>,
    /// Response headers.
    #[serde(default)]
    pub headers: HashMap<String, RefOr<Header>>,
}

/// A response-header definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Header {
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Whether the header is required.
    #[serde(default)]
    pub required: bool,
    /// Value schema.
    #[serde(default)]
    pub schema: Option<RefOr<Schema>>,
}

/// A security scheme definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityScheme {
    /// Scheme type: `http`, `apiKey`, `oauth2`, `openIdConnect`.
    #[serde(rename = "type", default)]
    pub scheme_type: String,
    /// HTTP auth scheme name, e.g. `bearer`.
    #[serde(default)]
    pub scheme: String,
    /// Bearer token format hint.
    #[serde(rename = "bearerFormat", default)]
    pub bearer_format: String,
    /// Where an API key lives.
    #[serde(rename = "in", default)]
    pub location: String,
    /// API key name.
    #[serde(default)]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
}

/// A data schema. Only the display-relevant subset is modeled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    /// Type name, or an array of type names in 3.1 documents.
    #[serde(rename = "type", default)]
    pub schema_type: Option<SchemaType>,
    /// Format hint, e.g. `int64`, `date-time`.
    #[serde(default)]
    pub format: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Names of required properties.
    #[serde(default)]
    pub required: Vec<String>,
    /// Object properties.
    #[serde(default)]
    pub properties: HashMap<String, RefOr<Schema>>,
    /// Array element schema.
    #[serde(default)]
    pub items: Option<Box<RefOr<Schema>>>,
}

/// A single type name (3.0) or a set of type names (3.1).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// One type name.
    One(String),
    /// Several type names (3.1 nullable unions and the like).
    Many(Vec<String>),
}

impl SchemaType {
    /// Comma-joined display label.
    pub fn label(&self) -> String {
        match self {
            SchemaType::One(name) => name.clone(),
            SchemaType::Many(names) => names.join(", "),
        }
    }

    /// Whether this is a multi-type union.
    pub fn is_many(&self) -> bool {
        matches!(self, SchemaType::Many(names) if names.len() != 1)
    }
}

/// The six components sub-maps the viewer displays.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    /// Reusable schemas.
    #[serde(default)]
    pub schemas: HashMap<String, RefOr<Schema>>,
    /// Reusable request bodies.
    #[serde(rename = "requestBodies", default)]
    pub request_bodies: HashMap<String, RefOr<RequestBody>>,
    /// Reusable responses.
    #[serde(default)]
    pub responses: HashMap<String, RefOr<Response>>,
    /// Reusable parameters.
    #[serde(default)]
    pub parameters: HashMap<String, RefOr<Parameter>>,
    /// Reusable headers.
    #[serde(default)]
    pub headers: HashMap<String, RefOr<Header>>,
    /// Security schemes.
    #[serde(rename = "securitySchemes", default)]
    pub security_schemes: HashMap<String, RefOr<SecurityScheme>>,
}
