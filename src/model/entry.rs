//! Navigable list entries produced by extraction.
//!
//! Each entry type pairs immutable identity/content with a single mutable
//! `folded` flag. Folding changes the entry's rendered height and nothing
//! else: identity and collection position are fixed at load time.

use super::http_method::HttpMethod;

/// Shared behavior of rows in a navigable collection: the fold flag and the
/// detail block it controls.
pub trait FoldableRow {
    /// Whether the detail block is currently hidden.
    fn is_folded(&self) -> bool;

    /// Flip the fold flag.
    fn toggle_fold(&mut self);

    /// Precomputed detail text, newline-separated, no trailing newline.
    fn detail_text(&self) -> &str;

    /// Rendered height in rows.
    ///
    /// A folded row occupies exactly one line. An unfolded row occupies its
    /// main line, one line per detail line, and a trailing blank separator.
    fn rendered_height(&self) -> usize {
        if self.is_folded() {
            1
        } else {
            1 + self.detail_text().lines().count() + 1
        }
    }
}

/// One HTTP operation bound to one path. Identity = (path, method).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// URL template, e.g. `/pets/{petId}`.
    pub path: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Operation summary (may be empty).
    pub summary: String,
    /// Operation description (may be empty).
    pub description: String,
    /// Precomputed detail text shown when unfolded.
    pub detail: String,
    /// Fold flag; starts folded.
    pub folded: bool,
}

/// A named, method-bound callback operation. Identity = (name, method).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Webhook {
    /// Webhook name (the key in the document's webhook map).
    pub name: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Operation summary (may be empty).
    pub summary: String,
    /// Operation description (may be empty).
    pub description: String,
    /// Operation id (may be empty).
    pub operation_id: String,
    /// Precomputed detail text shown when unfolded.
    pub detail: String,
    /// Fold flag; starts folded.
    pub folded: bool,
}

/// The kind of a reusable component.
///
/// Variants are declared in alphabetical order of their display names, so
/// kind-name ordering and declaration ordering agree (pinned by test).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentKind {
    /// Reusable response header.
    Header,
    /// Reusable operation parameter.
    Parameter,
    /// Reusable request body.
    RequestBody,
    /// Reusable response.
    Response,
    /// Reusable data schema.
    Schema,
    /// Security scheme definition.
    SecurityScheme,
}

impl ComponentKind {
    /// Display name, also the primary sort key for the components collection.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Header => "Header",
            ComponentKind::Parameter => "Parameter",
            ComponentKind::RequestBody => "RequestBody",
            ComponentKind::Response => "Response",
            ComponentKind::Schema => "Schema",
            ComponentKind::SecurityScheme => "SecurityScheme",
        }
    }
}

/// A named reusable definition. Identity = (kind, name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Component name (the key in its components sub-map).
    pub name: String,
    /// Which components sub-map it came from.
    pub kind: ComponentKind,
    /// Component description (may be empty).
    pub description: String,
    /// Precomputed detail text shown when unfolded.
    pub detail: String,
    /// Fold flag; starts folded.
    pub folded: bool,
}

macro_rules! impl_foldable {
    ($ty:ty) => {
        impl FoldableRow for $ty {
            fn is_folded(&self) -> bool {
                self.folded
            }

            fn toggle_fold(&mut self) {
                self.folded = !self.folded;
            }

            fn detail_text(&self) -> &str {
                &self.detail
            }
        }
    };
}

impl_foldable!(Endpoint);
impl_foldable!(Webhook);
impl_foldable!(Component);
