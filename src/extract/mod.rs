//! Extraction of navigable collections from a parsed document.
//!
//! Produces the three collections the viewer browses, fully sorted by
//! deterministic composite keys. The document's internal maps are
//! hash-ordered, so every collection is explicitly sorted here; repeated
//! extraction of the same document yields identical sequences, byte for
//! byte, including the precomputed detail text.
//!
//! Sort keys:
//! - endpoints: path, then method name
//! - webhooks: name, then method name
//! - components: kind name, then component name
//!
//! Method-name ordering is strictly lexicographic (DELETE before GET); that
//! is the pinned contract, not verb priority.

pub mod format;

use crate::document::Document;
use crate::model::{Component, ComponentKind, Endpoint, Webhook};

/// The three sorted collections produced at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Path+method operations.
    pub endpoints: Vec<Endpoint>,
    /// Reusable components of all kinds.
    pub components: Vec<Component>,
    /// Named webhooks (empty for pre-3.1 documents).
    pub webhooks: Vec<Webhook>,
}

/// Extract and sort all three collections.
pub fn extract(doc: &Document) -> Catalog {
    Catalog {
        endpoints: extract_endpoints(doc),
        components: extract_components(doc),
        webhooks: extract_webhooks(doc),
    }
}

/// One entry per (path, method) pair, sorted by path then method name.
pub fn extract_endpoints(doc: &Document) -> Vec<Endpoint> {
    let mut endpoints = Vec::new();

    for (path, item) in &doc.paths {
        for (method, op) in item.operations() {
            endpoints.push(Endpoint {
                path: path.clone(),
                method,
                summary: op.summary.clone(),
                description: op.description.clone(),
                detail: format::endpoint_detail(op),
                folded: true,
            });
        }
    }

    endpoints.sort_by(|a, b| {
        a.path
            .cmp(&b.path)
            .then_with(|| a.method.as_str().cmp(b.method.as_str()))
    });
    endpoints
}

/// One entry per (webhook name, method) pair, sorted by name then method
/// name. Empty unless the document dialect is 3.1 or later.
pub fn extract_webhooks(doc: &Document) -> Vec<Webhook> {
    if !doc.supports_webhooks() {
        return Vec::new();
    }

    let mut webhooks = Vec::new();
    for (name, item) in &doc.webhooks {
        for (method, op) in item.operations() {
            webhooks.push(Webhook {
                name: name.clone(),
                method,
                summary: op.summary.clone(),
                description: op.description.clone(),
                operation_id: op.operation_id.clone(),
                detail: format::webhook_detail(op),
                folded: true,
            });
        }
    }

    webhooks.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.method.as_str().cmp(b.method.as_str()))
    });
    webhooks
}

/// One entry per named component, all kinds flattened into one collection,
/// sorted by kind name then component name.
///
/// A `$ref` where a definition was expected degrades to a placeholder
/// detail line; extraction never fails on a partially-populated entity.
pub fn extract_components(doc: &Document) -> Vec<Component> {
    let mut components = Vec::new();
    let section = &doc.components;

    for (name, schema) in &section.schemas {
        let (description, detail) = match schema.as_item() {
            Some(s) => (s.description.clone(), format::schema_detail(s)),
            None => (String::new(), "No schema details available".to_string()),
        };
        components.push(Component {
            name: name.clone(),
            kind: ComponentKind::Schema,
            description,
            detail,
            folded: true,
        });
    }

    for (name, body) in &section.request_bodies {
        let (description, detail) = match body.as_item() {
            Some(b) => (b.description.clone(), format::request_body_detail(b)),
            None => (
                String::new(),
                "No request body details available".to_string(),
            ),
        };
        components.push(Component {
            name: name.clone(),
            kind: ComponentKind::RequestBody,
            description,
            detail,
            folded: true,
        });
    }

    for (name, response) in &section.responses {
        let (description, detail) = match response.as_item() {
            Some(r) => (
                r.description.clone().unwrap_or_default(),
                format::response_detail(r),
            ),
            None => (String::new(), "No response details available".to_string()),
        };
        components.push(Component {
            name: name.clone(),
            kind: ComponentKind::Response,
            description,
            detail,
            folded: true,
        });
    }

    for (name, param) in &section.parameters {
        let (description, detail) = match param.as_item() {
            Some(p) => (p.description.clone(), format::parameter_detail(p)),
            None => (String::new(), "No parameter details available".to_string()),
        };
        components.push(Component {
            name: name.clone(),
            kind: ComponentKind::Parameter,
            description,
            detail,
            folded: true,
        });
    }

    for (name, header) in &section.headers {
        let (description, detail) = match header.as_item() {
            Some(h) => (h.description.clone(), format::header_detail(h)),
            None => (String::new(), "No header details available".to_string()),
        };
        components.push(Component {
            name: name.clone(),
            kind: ComponentKind::Header,
            description,
            detail,
            folded: true,
        });
    }

    for (name, scheme) in &section.security_schemes {
        let (description, detail) = match scheme.as_item() {
            Some(s) => (s.description.clone(), format::security_scheme_detail(s)),
            None => (
                String::new(),
                "No security scheme details available".to_string(),
            ),
        };
        components.push(Component {
            name: name.clone(),
            kind: ComponentKind::SecurityScheme,
            description,
            detail,
            folded: true,
        });
    }

    components.sort_by(|a, b| {
        a.kind
            .as_str()
            .cmp(b.kind.as_str())
            .then_with(|| a.name.cmp(&b.name))
    });
    components
}
