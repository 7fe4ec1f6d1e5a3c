//! HTTP method enum shared by endpoints and webhooks.

use std::fmt;

/// The eight HTTP methods an OpenAPI path item can carry.
///
/// Collection ordering sorts by the method *name* (`as_str`), which is
/// strictly lexicographic: DELETE sorts before GET. That is the pinned
/// contract, not REST verb priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpMethod {
    /// DELETE
    Delete,
    /// GET
    Get,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
    /// PATCH
    Patch,
    /// POST
    Post,
    /// PUT
    Put,
    /// TRACE
    Trace,
}

impl HttpMethod {
    /// All methods, in name order.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Delete,
        HttpMethod::Get,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Patch,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Trace,
    ];

    /// Uppercase method name as it appears in list rows and sort keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Delete => "DELETE",
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Parse a method name case-insensitively (webhook maps use lowercase keys).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "delete" => Some(HttpMethod::Delete),
            "get" => Some(HttpMethod::Get),
            "head" => Some(HttpMethod::Head),
            "options" => Some(HttpMethod::Options),
            "patch" => Some(HttpMethod::Patch),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "trace" => Some(HttpMethod::Trace),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
