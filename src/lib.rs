// scrollbar_core: engine behind the <plain-scrollbar> custom element.
// Interaction state and geometry live here; the element's JS measures, forwards input
// and applies effects.
// See DESIGN.md: Grounding ledger

mod effects;
mod error;
mod geometry;
mod host;
mod policy;
mod repeat;
mod types;
mod widget;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub use effects::{Effect, EffectRecorder};
pub use error::ScrollbarError;
pub use geometry::{
    percent, pixel_offset_for_value, press_position_direction, thumb_layout, track_travel,
    value_delta_for_pixel_delta, PressDirection, ThumbCss, ThumbLayout,
};
pub use host::{Presentation, Scheduler};
pub use policy::{page_size, StepPolicy};
pub use repeat::{RepeatChain, RepeatTiming};
pub use types::*;
pub use widget::Scrollbar;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js_error(err: ScrollbarError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Everything JS needs after a call: effects to apply plus the state to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarUpdate {
    pub effects: Vec<Effect>,
    pub thumb: ThumbLayout,
    pub thumb_css: ThumbCss,
    pub value: f64,
    pub mode: String,
}

/// Scrollbar engine exposed to JavaScript.
///
/// Calls record effects; JS reads them with `drain()` after each input.
///
/// # Example JSON Config
/// ```json
/// { "value": 0, "thumb_size": 0.3, "orientation": "vertical",
///   "repeat_delay_ms": 300, "repeat_interval_ms": 100 }
/// ```
#[wasm_bindgen]
pub struct WasmScrollbar {
    inner: Scrollbar<EffectRecorder>,
    policy: StepPolicy,
}

#[wasm_bindgen]
impl WasmScrollbar {
    /// Create a scrollbar from JSON configuration. Unknown orientations throw.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmScrollbar, JsValue> {
        let config = ScrollbarConfig::from_json(config_json).map_err(to_js_error)?;
        Ok(WasmScrollbar {
            inner: Scrollbar::with_config(EffectRecorder::new(), &config),
            policy: StepPolicy::default(),
        })
    }

    /// Name of the custom event to dispatch for `Dispatch` effects.
    pub fn event_name() -> String {
        SCROLLBAR_EVENT_NAME.to_string()
    }

    pub fn value(&self) -> f64 {
        self.inner.value()
    }

    pub fn set_value(&mut self, v: f64) -> bool {
        self.inner.set_value(v)
    }

    pub fn thumb_size(&self) -> f64 {
        self.inner.thumb_size()
    }

    pub fn set_thumb_size(&mut self, s: f64) -> bool {
        self.inner.set_thumb_size(s)
    }

    pub fn orientation(&self) -> String {
        self.inner.orientation().to_string()
    }

    /// Boolean form of `orientation`: false = horizontal, true = vertical.
    pub fn is_vertical(&self) -> bool {
        self.inner.orientation().is_vertical()
    }

    /// Returns true if the `orientation` attribute should be reflected.
    pub fn set_orientation(&mut self, orientation: &str) -> Result<bool, JsValue> {
        self.inner
            .set_orientation_str(orientation)
            .map_err(to_js_error)
    }

    pub fn mode(&self) -> String {
        self.inner.mode().name().to_string()
    }

    /// `connectedCallback`.
    pub fn mount(&mut self) {
        self.inner.on_mount();
    }

    /// `disconnectedCallback`.
    pub fn unmount(&mut self) {
        self.inner.on_unmount();
    }

    /// Track size along the active axis, from `getBoundingClientRect()`.
    pub fn set_track_length(&mut self, pixels: f64) {
        self.inner.host_mut().set_track_length(pixels);
    }

    /// `button` is `MouseEvent.button`. Returns true if the event was consumed.
    pub fn trough_press(&mut self, button: u8, press_pixel: f64) -> bool {
        self.inner
            .on_trough_press(PointerButton::from_dom_button(button), press_pixel)
            .is_consumed()
    }

    /// `which` is 1 (up/left) or 2 (down/right); anything else is ignored.
    pub fn button_press(&mut self, button: u8, which: u8) -> bool {
        match ScrollButton::from_index(which) {
            Some(which) => self
                .inner
                .on_button_press(PointerButton::from_dom_button(button), which)
                .is_consumed(),
            None => false,
        }
    }

    pub fn thumb_press(&mut self, button: u8, pointer_pos: f64) -> bool {
        self.inner
            .on_thumb_press(PointerButton::from_dom_button(button), pointer_pos)
            .is_consumed()
    }

    pub fn pointer_move(&mut self, pointer_pos: f64) -> bool {
        self.inner.on_global_pointer_move(pointer_pos).is_consumed()
    }

    pub fn pointer_up(&mut self) -> bool {
        self.inner.on_global_pointer_up().is_consumed()
    }

    /// Called from the `setTimeout` callback of a `ScheduleTimer` effect.
    pub fn repeat_timer(&mut self, id: u32) -> bool {
        let id = TimerId::new(id);
        if !self.inner.host_mut().expire(id) {
            return false;
        }
        self.inner.on_repeat_timer(id)
    }

    /// Apply the default step policy for an event kind received from `scrollbar-input`.
    pub fn apply_step(&mut self, kind: &str) -> Result<bool, JsValue> {
        let kind: ScrollEventKind =
            serde_json::from_value(serde_json::Value::String(kind.to_string()))
                .map_err(|e| to_js_error(e.into()))?;
        Ok(self.step(kind))
    }

    /// Drain recorded effects as JSON (`ScrollbarUpdate`).
    pub fn drain(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.take_update()).map_err(|e| to_js_error(e.into()))
    }
}

impl WasmScrollbar {
    pub fn step(&mut self, kind: ScrollEventKind) -> bool {
        match self
            .policy
            .next_value(kind, self.inner.value(), self.inner.thumb_size())
        {
            Some(next) => self.inner.set_value(next),
            None => false,
        }
    }

    pub fn take_update(&mut self) -> ScrollbarUpdate {
        let thumb = self.inner.thumb_layout();
        ScrollbarUpdate {
            effects: self.inner.host_mut().take_effects(),
            thumb,
            thumb_css: thumb.to_css(),
            value: self.inner.value(),
            mode: self.inner.mode().name().to_string(),
        }
    }
}
