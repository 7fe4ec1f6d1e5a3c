//! Cross-module scenario and property tests.

mod determinism;
mod render_contract;
