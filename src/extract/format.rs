//! Pure detail-text formatters.
//!
//! Every formatter is a pure function of its entity: calling it twice on the
//! same value yields byte-identical output. Wherever a map is enumerated,
//! the keys are sorted first (media types and property names
//! lexicographically, response codes numerically then lexicographically) so
//! the output does not depend on hash iteration order.
//!
//! Absent nested values produce empty sections, never errors: a formatter's
//! job is to show what is there.

use crate::document::{
    Header, Operation, Parameter, RequestBody, Response, Schema, SecurityScheme,
};
use std::cmp::Ordering;

/// Total order for response codes: numeric codes ascending, then
/// non-numeric tokens (e.g. `default`) lexicographically.
pub fn response_code_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u32>(), b.parse::<u32>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Sort response codes in place using [`response_code_order`].
pub fn sort_response_codes(codes: &mut [String]) {
    codes.sort_by(|a, b| response_code_order(a, b));
}

fn sorted_keys<'a, V>(map: &'a std::collections::HashMap<String, V>) -> Vec<&'a String> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort_unstable();
    keys
}

/// Detail text for an endpoint's operation.
pub fn endpoint_detail(op: &Operation) -> String {
    let mut lines = Vec::new();

    if !op.summary.is_empty() {
        lines.push(format!("Summary: {}", op.summary));
    }
    if !op.description.is_empty() {
        lines.push(format!("Description: {}", op.description));
    }

    if !op.parameters.is_empty() {
        lines.push("Parameters:".to_string());
        for param in &op.parameters {
            if let Some(param) = param.as_item() {
                lines.push(format!(
                    "  - {} ({}): {}",
                    param.name, param.location, param.description
                ));
            }
        }
    }

    if let Some(body) = op.request_body.as_ref().and_then(|b| b.as_item()) {
        lines.push("Request Body:".to_string());
        for media_type in sorted_keys(&body.content) {
            lines.push(format!("  - {media_type}"));
        }
    }

    if !op.responses.is_empty() {
        lines.push("Responses:".to_string());
        let mut codes: Vec<String> = op.responses.keys().cloned().collect();
        sort_response_codes(&mut codes);
        for code in &codes {
            if let Some(resp) = op.responses[code].as_item() {
                if let Some(desc) = &resp.description {
                    lines.push(format!("  - {code}: {desc}"));
                }
            }
        }
    }

    lines.join("\n")
}

/// Detail text for a webhook's operation.
pub fn webhook_detail(op: &Operation) -> String {
    let mut lines = Vec::new();

    if !op.summary.is_empty() {
        lines.push(format!("Summary: {}", op.summary));
    }
    if !op.description.is_empty() {
        lines.push(format!("Description: {}", op.description));
    }
    if !op.operation_id.is_empty() {
        lines.push(format!("Operation ID: {}", op.operation_id));
    }

    lines.join("\n")
}

/// Detail text for a schema component.
pub fn schema_detail(schema: &Schema) -> String {
    let mut lines = Vec::new();

    if let Some(ty) = &schema.schema_type {
        if ty.is_many() {
            lines.push(format!("Types: {}", ty.label()));
        } else {
            lines.push(format!("Type: {}", ty.label()));
        }
    }
    if !schema.format.is_empty() {
        lines.push(format!("Format: {}", schema.format));
    }
    if !schema.required.is_empty() {
        lines.push(format!("Required: {}", schema.required.join(", ")));
    }

    if !schema.properties.is_empty() {
        lines.push("Properties:".to_string());
        for name in sorted_keys(&schema.properties) {
            let prop_type = schema.properties[name]
                .as_item()
                .and_then(|p| p.schema_type.as_ref())
                .map(|t| t.label())
                .unwrap_or_else(|| "unknown".to_string());
            lines.push(format!("  - {name}: {prop_type}"));
        }
    }

    if let Some(ty) = schema
        .items
        .as_deref()
        .and_then(|i| i.as_item())
        .and_then(|i| i.schema_type.as_ref())
    {
        if ty.is_many() {
            lines.push(format!("Items Types: {}", ty.label()));
        } else {
            lines.push(format!("Items Type: {}", ty.label()));
        }
    }

    lines.join("\n")
}

/// Detail text for a request-body component.
pub fn request_body_detail(body: &RequestBody) -> String {
    let mut lines = Vec::new();

    if body.required {
        lines.push("Required: true".to_string());
    }

    if !body.content.is_empty() {
        lines.push("Content Types:".to_string());
        for media_type in sorted_keys(&body.content) {
            let mut line = format!("  - {media_type}");
            if let Some(ty) = body.content[media_type]
                .schema
                .as_ref()
                .and_then(|s| s.as_item())
                .and_then(|s| s.schema_type.as_ref())
            {
                if ty.is_many() {
                    line.push_str(&format!(" (types: {})", ty.label()));
                } else {
                    line.push_str(&format!(" (type: {})", ty.label()));
                }
            }
            lines.push(line);
        }
    }

    lines.join("\n")
}

/// Detail text for a response component.
pub fn response_detail(response: &Response) -> String {
    let mut lines = Vec::new();

    if !response.content.is_empty() {
        lines.push("Content Types:".to_string());
        for media_type in sorted_keys(&response.content) {
            let mut line = format!("  - {media_type}");
            if let Some(ty) = response.content[media_type]
                .schema
                .as_ref()
                .and_then(|s| s.as_item())
                .and_then(|s| s.schema_type.as_ref())
            {
                if ty.is_many() {
                    line.push_str(&format!(" (types: {})", ty.label()));
                } else {
                    line.push_str(&format!(" (type: {})", ty.label()));
                }
            }
            lines.push(line);
        }
    }

    if !response.headers.is_empty() {
        lines.push("Headers:".to_string());
        for name in sorted_keys(&response.headers) {
            lines.push(format!("  - {name}"));
        }
    }

    lines.join("\n")
}

/// Detail text for a parameter component.
pub fn parameter_detail(param: &Parameter) -> String {
    let mut lines = Vec::new();

    lines.push(format!("In: {}", param.location));
    if param.required {
        lines.push("Required: true".to_string());
    }

    if let Some(schema) = param.schema.as_ref().and_then(|s| s.as_item()) {
        if let Some(ty) = &schema.schema_type {
            if ty.is_many() {
                lines.push(format!("Types: {}", ty.label()));
            } else {
                lines.push(format!("Type: {}", ty.label()));
            }
            if !schema.format.is_empty() {
                lines.push(format!("Format: {}", schema.format));
            }
        }
    }

    if let Some(example) = &param.example {
        let shown = match example {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        lines.push(format!("Example: {shown}"));
    }

    lines.join("\n")
}

/// Detail text for a header component.
pub fn header_detail(header: &Header) -> String {
    let mut lines = Vec::new();

    if header.required {
        lines.push("Required: true".to_string());
    }

    if let Some(schema) = header.schema.as_ref().and_then(|s| s.as_item()) {
        if let Some(ty) = &schema.schema_type {
            if ty.is_many() {
                lines.push(format!("Types: {}", ty.label()));
            } else {
                lines.push(format!("Type: {}", ty.label()));
            }
            if !schema.format.is_empty() {
                lines.push(format!("Format: {}", schema.format));
            }
        }
    }

    lines.join("\n")
}

/// Detail text for a security-scheme component.
pub fn security_scheme_detail(scheme: &SecurityScheme) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Type: {}", scheme.scheme_type));
    if !scheme.scheme.is_empty() {
        lines.push(format!("Scheme: {}", scheme.scheme));
    }
    if !scheme.bearer_format.is_empty() {
        lines.push(format!("Bearer Format: {}", scheme.bearer_format));
    }
    if !scheme.location.is_empty() {
        lines.push(format!("In: {}", scheme.location));
    }
    if !scheme.name.is_empty() {
        lines.push(format!("Name: {}", scheme.name));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{MediaType, RefOr, SchemaType};
    use std::collections::HashMap;

    #[test]
    fn numeric_codes_sort_numerically_before_tokens() {
        let mut codes: Vec<String> = ["500", "200", "default", "404", "201"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        sort_response_codes(&mut codes);
        assert_eq!(codes, vec!["200", "201", "404", "500", "default"]);
    }

    #[test]
    fn all_tokens_sort_lexicographically() {
        let mut codes: Vec<String> = ["default", "error", "abc"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        sort_response_codes(&mut codes);
        assert_eq!(codes, vec!["abc", "default", "error"]);
    }

    #[test]
    fn code_order_is_total_and_consistent() {
        let codes = ["100", "200", "5xx", "default", "99"];
        for a in codes {
            assert_eq!(response_code_order(a, a), Ordering::Equal);
            for b in codes {
                assert_eq!(
                    response_code_order(a, b),
                    response_code_order(b, a).reverse()
                );
            }
        }
    }

    fn operation_fixture() -> Operation {
        let mut responses = HashMap::new();
        responses.insert(
            "404".to_string(),
            RefOr::Item(Response {
                description: Some("not found".to_string()),
                ..Response::default()
            }),
        );
        responses.insert(
            "200".to_string(),
            RefOr::Item(Response {
                description: Some("ok".to_string()),
                ..Response::default()
            }),
        );
        responses.insert(
            "default".to_string(),
            RefOr::Item(Response {
                description: Some("unexpected".to_string()),
                ..Response::default()
            }),
        );

        let mut content = HashMap::new();
        content.insert("application/json".to_string(), MediaType::default());
        content.insert("application/xml".to_string(), MediaType::default());

        Operation {
            summary: "List pets".to_string(),
            description: "Returns all pets".to_string(),
            parameters: vec![RefOr::Item(Parameter {
                name: "limit".to_string(),
                location: "query".to_string(),
                description: "page size".to_string(),
                ..Parameter::default()
            })],
            request_body: Some(RefOr::Item(RequestBody {
                content,
                ..RequestBody::default()
            })),
            responses,
            ..Operation::default()
        }
    }

    #[test]
    fn endpoint_detail_orders_sections_and_codes() {
        let detail = endpoint_detail(&operation_fixture());
        let expected = "Summary: List pets\n\
                        Description: Returns all pets\n\
                        Parameters:\n  - limit (query): page size\n\
                        Request Body:\n  - application/json\n  - application/xml\n\
                        Responses:\n  - 200: ok\n  - 404: not found\n  - default: unexpected";
        assert_eq!(detail, expected);
    }

    #[test]
    fn endpoint_detail_is_deterministic() {
        let op = operation_fixture();
        assert_eq!(endpoint_detail(&op), endpoint_detail(&op));
    }

    #[test]
    fn empty_operation_formats_to_empty_string() {
        assert_eq!(endpoint_detail(&Operation::default()), "");
        assert_eq!(webhook_detail(&Operation::default()), "");
    }

    #[test]
    fn webhook_detail_includes_operation_id() {
        let op = Operation {
            summary: "New pet".to_string(),
            operation_id: "petAdded".to_string(),
            ..Operation::default()
        };
        assert_eq!(
            webhook_detail(&op),
            "Summary: New pet\nOperation ID: petAdded"
        );
    }

    #[test]
    fn schema_detail_sorts_properties() {
        let mut properties = HashMap::new();
        properties.insert(
            "zebra".to_string(),
            RefOr::Item(Schema {
                schema_type: Some(SchemaType::One("string".to_string())),
                ..Schema::default()
            }),
        );
        properties.insert(
            "alpha".to_string(),
            RefOr::Item(Schema {
                schema_type: Some(SchemaType::One("integer".to_string())),
                ..Schema::default()
            }),
        );
        properties.insert("ref".to_string(), RefOr::Ref(crate::document::Reference {
            target: "#/components/schemas/Other".to_string(),
        }));

        let schema = Schema {
            schema_type: Some(SchemaType::One("object".to_string())),
            required: vec!["alpha".to_string()],
            properties,
            ..Schema::default()
        };

        let detail = schema_detail(&schema);
        let expected = "Type: object\n\
                        Required: alpha\n\
                        Properties:\n  - alpha: integer\n  - ref: unknown\n  - zebra: string";
        assert_eq!(detail, expected);
    }

    #[test]
    fn schema_detail_labels_type_unions() {
        let schema = Schema {
            schema_type: Some(SchemaType::Many(vec![
                "string".to_string(),
                "null".to_string(),
            ])),
            ..Schema::default()
        };
        assert_eq!(schema_detail(&schema), "Types: string, null");
    }

    #[test]
    fn parameter_detail_shows_string_examples_unquoted() {
        let param = Parameter {
            location: "path".to_string(),
            required: true,
            example: Some(serde_json::Value::String("fluffy".to_string())),
            ..Parameter::default()
        };
        assert_eq!(
            parameter_detail(&param),
            "In: path\nRequired: true\nExample: fluffy"
        );
    }

    #[test]
    fn security_scheme_detail_lists_present_fields_only() {
        let scheme = SecurityScheme {
            scheme_type: "http".to_string(),
            scheme: "bearer".to_string(),
            bearer_format: "JWT".to_string(),
            ..SecurityScheme::default()
        };
        assert_eq!(
            security_scheme_detail(&scheme),
            "Type: http\nScheme: bearer\nBearer Format: JWT"
        );
    }

    #[test]
    fn response_detail_sorts_media_types_and_headers() {
        let mut content = HashMap::new();
        content.insert("text/plain".to_string(), MediaType::default());
        content.insert("application/json".to_string(), MediaType::default());
        let mut headers = HashMap::new();
        headers.insert("X-Rate-Limit".to_string(), RefOr::Item(Header::default()));
        headers.insert("ETag".to_string(), RefOr::Item(Header::default()));

        let response = Response {
            description: Some("ok".to_string()),
            content,
            headers,
        };
        let detail = response_detail(&response);
        let expected = "Content Types:\n  - application/json\n  - text/plain\n\
                        Headers:\n  - ETag\n  - X-Rate-Limit";
        assert_eq!(detail, expected);
    }
}
