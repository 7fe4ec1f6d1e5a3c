//! Rendering contract tests against a test backend.
//!
//! These drive the real ratatui draw path and inspect the produced buffer:
//! markers appear exactly when entries are clipped, the frame never grows
//! past the viewport, and the help modal overlays the base view.

use crate::model::KeyAction;
use crate::test_harness::{empty_doc_json, petstore_31_json, state_from};
use crate::view::TuiApp;
use ratatui::backend::TestBackend;
use std::time::Instant;

fn now() -> Instant {
    Instant::now()
}

/// Extract the buffer as one string per terminal row.
fn buffer_rows(app: &TuiApp<TestBackend>) -> Vec<String> {
    let buffer = app.terminal().backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn app_at(width: u16, height: u16, json: &str) -> TuiApp<TestBackend> {
    let mut state = state_from(json);
    state.resize(width, height);
    let mut app =
        TuiApp::with_backend(TestBackend::new(width, height), state).expect("test backend");
    app.draw().expect("draw succeeds");
    app
}

fn redraw(app: &mut TuiApp<TestBackend>) {
    app.draw().expect("draw succeeds");
}

#[test]
fn base_frame_shows_tabs_list_and_footer() {
    let app = app_at(80, 24, petstore_31_json());
    let rows = buffer_rows(&app);

    assert!(rows[0].contains("Requests"));
    assert!(rows[0].contains("Webhooks"));
    assert!(rows[0].contains("Components"));
    let body = rows.join("\n");
    assert!(body.contains("GET"));
    assert!(body.contains("/owners"));
    assert!(body.contains("Petstore v1.0.0"));
}

#[test]
fn all_five_endpoints_fit_on_a_tall_terminal_without_markers() {
    let app = app_at(80, 24, petstore_31_json());
    let body = buffer_rows(&app).join("\n");
    assert!(!body.contains("More items above"));
    assert!(!body.contains("More items below"));
}

#[test]
fn below_marker_appears_when_the_window_is_short() {
    // Height 11 leaves a content budget of 3 for five endpoints.
    let app = app_at(80, 11, petstore_31_json());
    let body = buffer_rows(&app).join("\n");
    assert!(body.contains("More items below"));
    assert!(!body.contains("More items above"));
}

#[test]
fn above_marker_appears_after_jumping_to_the_bottom() {
    let mut app = app_at(80, 11, petstore_31_json());
    app.state_mut().apply(KeyAction::JumpBottom, now());
    redraw(&mut app);
    let body = buffer_rows(&app).join("\n");
    assert!(body.contains("More items above"));
}

#[test]
fn unfolding_reveals_detail_lines() {
    let mut app = app_at(80, 24, petstore_31_json());
    // Cursor starts on GET /owners (first in path order).
    app.state_mut().apply(KeyAction::ToggleFold, now());
    redraw(&mut app);
    let body = buffer_rows(&app).join("\n");
    assert!(body.contains("Summary: List owners"));
    assert!(body.contains("- 200: owners"));
}

#[test]
fn empty_document_renders_an_empty_list_without_panicking() {
    let app = app_at(80, 24, empty_doc_json());
    let rows = buffer_rows(&app);
    assert!(rows[0].contains("Requests"));
    assert!(!rows[0].contains("Webhooks"), "empty webhooks tab is hidden");
    let body = rows.join("\n");
    assert!(body.contains("Requests (0)"));
    assert!(body.contains("Empty v0.0.0"));
}

#[test]
fn tiny_terminal_still_renders() {
    // Content budget bottoms out at one row; nothing may panic.
    let mut app = app_at(20, 6, petstore_31_json());
    app.state_mut().apply(KeyAction::JumpBottom, now());
    app.state_mut().apply(KeyAction::ToggleFold, now());
    redraw(&mut app);
    assert_eq!(buffer_rows(&app).len(), 6);
}

#[test]
fn help_modal_overlays_the_list() {
    let mut app = app_at(80, 24, petstore_31_json());
    app.state_mut().apply(KeyAction::ToggleHelp, now());
    redraw(&mut app);
    let body = buffer_rows(&app).join("\n");
    assert!(body.contains("Help"));
    assert!(body.contains("Jump to the top"));

    app.state_mut().apply(KeyAction::Dismiss, now());
    redraw(&mut app);
    let body = buffer_rows(&app).join("\n");
    assert!(!body.contains("Jump to the top"));
}

#[test]
fn webhook_view_lists_hooks_after_a_switch() {
    let mut app = app_at(80, 24, petstore_31_json());
    app.state_mut().apply(KeyAction::NextView, now());
    redraw(&mut app);
    let body = buffer_rows(&app).join("\n");
    assert!(body.contains("newPet"));
    assert!(body.contains("pet.deleted"));
    assert!(body.contains("Webhooks (2)"));
}

#[test]
fn component_view_shows_kind_badges() {
    let mut app = app_at(100, 24, petstore_31_json());
    app.state_mut().apply(KeyAction::PrevView, now());
    redraw(&mut app);
    let body = buffer_rows(&app).join("\n");
    assert!(body.contains("Schema:"));
    assert!(body.contains("SecurityScheme:"));
    assert!(body.contains("Components (7)"));
}
