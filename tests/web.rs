// Browser-side checks of the JS-facing API. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use scrollbar_core::{ScrollbarUpdate, WasmScrollbar};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn unknown_orientation_throws() {
    assert!(WasmScrollbar::new(r#"{"orientation":"diagonal"}"#).is_err());

    let mut bar = WasmScrollbar::new("{}").unwrap();
    assert!(bar.set_orientation("diagonal").is_err());
    assert_eq!(bar.orientation(), "horizontal");
}

#[wasm_bindgen_test]
fn errors_are_thrown_as_error_objects() {
    let mut bar = WasmScrollbar::new("{}").unwrap();
    let err = bar.set_orientation("diagonal").unwrap_err();
    let err = err.dyn_into::<js_sys::Error>().unwrap();
    assert_eq!(
        String::from(err.message()),
        "Invalid orientation value \"diagonal\"."
    );
}

#[wasm_bindgen_test]
fn drag_reports_value_event() {
    let mut bar = WasmScrollbar::new(r#"{"value":0.5}"#).unwrap();
    bar.set_track_length(200.0);
    bar.mount();
    bar.drain().unwrap();

    assert!(bar.thumb_press(0, 10.0));
    assert!(bar.pointer_move(80.0));
    let update: ScrollbarUpdate = serde_json::from_str(&bar.drain().unwrap()).unwrap();
    assert_eq!(update.value, 1.0);
    assert_eq!(update.mode, "draggingThumb");
    assert_eq!(update.thumb_css.offset, "70.000%");
}

#[wasm_bindgen_test]
fn apply_step_rejects_unknown_kind() {
    let mut bar = WasmScrollbar::new("{}").unwrap();
    assert!(bar.apply_step("sideways").is_err());
    assert_eq!(bar.apply_step("incrementLarge").unwrap(), true);
}
