//! oav - terminal viewer for OpenAPI interface documents.
//!
//! Loads a JSON or YAML document, extracts sorted collections of
//! operations, components and webhooks, and browses them in a scrollable,
//! foldable full-screen list.
//!
//! Layering, pure core to impure shell:
//! - [`document`]: serde model of the displayed document subset + loader
//! - [`extract`]: sorted collections with precomputed detail text
//! - [`state`]: cursor/scroll/fold engine over variable-height rows
//! - [`view`]: ratatui renderer and the terminal event loop
//! - [`source`], [`logging`], [`config`], [`model`]: input, tracing,
//!   keybindings and shared domain types

pub mod config;
pub mod document;
pub mod extract;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
