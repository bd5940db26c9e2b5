// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn drag_reports_deltas_between_moves() {
    let mut drag = DragState::default();
    drag.begin(7, 100.0, 100.0);
    assert_eq!(drag.update(7, 110.0, 95.0, 0.5), Some((10.0, -5.0)));
    // deltas are relative to the last reported position
    assert_eq!(drag.update(7, 112.0, 95.0, 0.5), Some((2.0, 0.0)));
}

#[test]
fn drag_ignores_other_pointers_and_idle_state() {
    let mut drag = DragState::default();
    assert_eq!(drag.update(1, 5.0, 5.0, 0.5), None);
    drag.begin(1, 0.0, 0.0);
    assert_eq!(drag.update(2, 50.0, 50.0, 0.5), None);
    assert!(!drag.end(2));
    assert!(drag.active);
    assert!(drag.end(1));
    assert!(!drag.active);
    assert_eq!(drag.update(1, 60.0, 60.0, 0.5), None);
}

#[test]
fn drag_dead_zone_accumulates_small_moves() {
    let mut drag = DragState::default();
    drag.begin(3, 0.0, 0.0);
    assert_eq!(drag.update(3, 0.2, 0.1, 0.5), None);
    // the small move was not consumed, so it is included once the threshold is passed
    assert_eq!(drag.update(3, 0.6, 0.1, 0.5), Some((0.6, 0.1)));
}

#[test]
fn css_pixels_scale_to_backing_store() {
    // 400x300 CSS box backing an 800x600 canvas (devicePixelRatio 2)
    assert_eq!(css_to_canvas_px(100.0, 50.0, 400.0, 300.0, 800.0, 600.0), (200.0, 100.0));
    // degenerate layout passes coordinates through
    assert_eq!(css_to_canvas_px(10.0, 20.0, 0.0, 300.0, 800.0, 600.0), (10.0, 20.0));
}

#[test]
fn wheel_delta_modes_convert_to_pixels() {
    assert_eq!(wheel_delta_px(53.0, 0, 16.0, 800.0), 53.0);
    assert_eq!(wheel_delta_px(3.0, 1, 16.0, 800.0), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2, 16.0, 800.0), -800.0);
    assert_eq!(wheel_delta_px(7.0, 9, 16.0, 800.0), 7.0);
}

#[test]
fn keys_map_to_commands() {
    assert_eq!(command_for_key("g"), Some(KeyCommand::Generate));
    assert_eq!(command_for_key("G"), Some(KeyCommand::Generate));
    assert_eq!(command_for_key("Enter"), None);
    assert_eq!(command_for_key("r"), Some(KeyCommand::Reset));
    assert_eq!(command_for_key("a"), Some(KeyCommand::ToggleAnimationMode));
    assert_eq!(command_for_key("F"), Some(KeyCommand::FitView));
    assert_eq!(command_for_key("1"), Some(KeyCommand::SelectBatch(100)));
    assert_eq!(command_for_key("2"), Some(KeyCommand::SelectBatch(1_000)));
    assert_eq!(command_for_key("3"), Some(KeyCommand::SelectBatch(10_000)));
}

#[test]
fn unmapped_keys_are_ignored() {
    for key in ["x", "4", "Escape", " ", "ArrowUp", ""] {
        assert_eq!(command_for_key(key), None, "key {key:?} should not map");
    }
}

#[test]
fn batch_select_values_parse() {
    assert_eq!(parse_batch_count("100"), Some(100));
    assert_eq!(parse_batch_count(" 10000 "), Some(10_000));
    assert_eq!(parse_batch_count("1_000"), Some(1_000));
    assert_eq!(parse_batch_count("lots"), None);
    assert_eq!(parse_batch_count("-5"), None);
}
