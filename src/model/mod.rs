//! Domain model: list entries, HTTP methods, keyboard actions, errors.

pub mod entry;
pub mod error;
pub mod http_method;
pub mod key_action;

pub use entry::{Component, ComponentKind, Endpoint, FoldableRow, Webhook};
pub use error::{AppError, InputError, LoadError};
pub use http_method::HttpMethod;
pub use key_action::KeyAction;
