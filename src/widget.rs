// Interaction state machine: pointer presses, drags and auto-repeat turned into a value in [0, 1].
// Rule: at most one control is held at a time, and every exit path releases timers and listeners.
// See DESIGN.md: Module notes (widget)

use crate::error::ScrollbarError;
use crate::geometry::{self, ThumbLayout};
use crate::host::{Presentation, Scheduler};
use crate::repeat::{RepeatChain, RepeatTiming};
use crate::types::*;

/// The scrollbar engine. Owns its host, which renders it and runs its timers.
pub struct Scrollbar<H> {
    host: H,
    value: f64,
    thumb_size: f64,
    orientation: Orientation,
    mode: InteractionMode,
    repeat: Option<RepeatChain>,
    timing: RepeatTiming,
    attached: bool,
    listening: bool,
}

impl<H> Scrollbar<H>
where
    H: Presentation + Scheduler,
{
    pub fn new(host: H) -> Self {
        Self::with_config(host, &ScrollbarConfig::default())
    }

    pub fn with_config(host: H, config: &ScrollbarConfig) -> Self {
        Scrollbar {
            host,
            value: geometry::clamp_unit(config.value).unwrap_or(0.0),
            thumb_size: geometry::clamp_unit(config.thumb_size).unwrap_or(0.3),
            orientation: config.orientation,
            mode: InteractionMode::Idle,
            repeat: None,
            timing: RepeatTiming {
                delay_ms: config.repeat_delay_ms,
                interval_ms: config.repeat_interval_ms,
            },
            attached: false,
            listening: false,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn thumb_size(&self) -> f64 {
        self.thumb_size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether document-level pointer listeners are currently installed.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn pending_repeat(&self) -> Option<TimerId> {
        self.repeat.as_ref().map(RepeatChain::timer)
    }

    pub fn thumb_layout(&self) -> ThumbLayout {
        geometry::thumb_layout(self.value, self.thumb_size, self.orientation)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    /// Clamp and store a new position. Returns false if nothing changed.
    pub fn set_value(&mut self, v: f64) -> bool {
        let Some(v) = geometry::clamp_unit(v) else {
            return false;
        };
        if v == self.value {
            return false;
        }
        self.value = v;
        self.refresh_layout();
        true
    }

    /// Clamp and store a new relative thumb length. Returns false if nothing changed.
    pub fn set_thumb_size(&mut self, s: f64) -> bool {
        let Some(s) = geometry::clamp_unit(s) else {
            return false;
        };
        if s == self.thumb_size {
            return false;
        }
        self.thumb_size = s;
        self.refresh_layout();
        true
    }

    /// Returns true when the caller should reflect the new orientation into its attribute.
    pub fn set_orientation(&mut self, orientation: Orientation) -> bool {
        if orientation == self.orientation {
            return false;
        }
        self.orientation = orientation;
        self.refresh_layout();
        true
    }

    /// Attribute form of `set_orientation`. Unknown strings fail without touching state.
    pub fn set_orientation_str(&mut self, s: &str) -> Result<bool, ScrollbarError> {
        let orientation = s.parse::<Orientation>()?;
        Ok(self.set_orientation(orientation))
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    pub fn on_mount(&mut self) {
        log::debug!("[scrollbar] mounted ({})", self.orientation);
        self.attached = true;
        // A press can't survive a remount; drop anything left behind.
        self.stop_repeat();
        self.release_listeners();
        self.mode = InteractionMode::Idle;
        self.refresh_layout();
        self.refresh_style();
    }

    pub fn on_unmount(&mut self) {
        log::debug!("[scrollbar] unmounted while {}", self.mode.name());
        self.attached = false;
        self.stop_repeat();
        self.release_listeners();
        self.mode = InteractionMode::Idle;
    }

    // -------------------------------------------------------------------------
    // Pointer input
    // -------------------------------------------------------------------------

    /// Press on the trough, `press_pixel` measured from the trough's leading edge.
    pub fn on_trough_press(
        &mut self,
        button: PointerButton,
        press_pixel: f64,
    ) -> EventDisposition {
        if !self.accepts_press(button) {
            return EventDisposition::Ignored;
        }
        let direction = geometry::press_position_direction(
            press_pixel,
            self.host.track_length(),
            self.thumb_size,
            self.value,
        );
        self.enter(InteractionMode::TroughActive);
        self.start_repeat(direction.page_event());
        EventDisposition::Consumed
    }

    pub fn on_button_press(
        &mut self,
        button: PointerButton,
        which: ScrollButton,
    ) -> EventDisposition {
        if !self.accepts_press(button) {
            return EventDisposition::Ignored;
        }
        let mode = match which {
            ScrollButton::Button1 => InteractionMode::Button1Active,
            ScrollButton::Button2 => InteractionMode::Button2Active,
        };
        self.enter(mode);
        self.start_repeat(which.step_event());
        EventDisposition::Consumed
    }

    /// Press on the thumb, `pointer_pos` in document coordinates along the active axis.
    pub fn on_thumb_press(&mut self, button: PointerButton, pointer_pos: f64) -> EventDisposition {
        if !self.accepts_press(button) {
            return EventDisposition::Ignored;
        }
        self.enter(InteractionMode::DraggingThumb(DragAnchor {
            start_pointer_pos: pointer_pos,
            start_value: self.value,
        }));
        EventDisposition::Consumed
    }

    pub fn on_global_pointer_move(&mut self, pointer_pos: f64) -> EventDisposition {
        let InteractionMode::DraggingThumb(anchor) = self.mode else {
            return EventDisposition::Ignored;
        };
        let delta = geometry::value_delta_for_pixel_delta(
            pointer_pos - anchor.start_pointer_pos,
            self.host.track_length(),
            self.thumb_size,
        );
        if self.set_value(anchor.start_value + delta) {
            log::trace!("[scrollbar] drag -> {:.4}", self.value);
            self.host.dispatch(ScrollEventKind::Value);
        }
        EventDisposition::Consumed
    }

    /// Release whatever is held. Safe to call repeatedly.
    pub fn on_global_pointer_up(&mut self) -> EventDisposition {
        if self.mode.is_idle() {
            self.release_listeners();
            return EventDisposition::Ignored;
        }
        log::debug!("[scrollbar] release {}", self.mode.name());
        self.stop_repeat();
        self.mode = InteractionMode::Idle;
        self.release_listeners();
        self.refresh_style();
        EventDisposition::Consumed
    }

    /// Deliver an expired repeat timer. Returns true if it produced an emission.
    pub fn on_repeat_timer(&mut self, id: TimerId) -> bool {
        if !self.mode.repeats() {
            return false;
        }
        match self.repeat.as_mut() {
            Some(chain) => chain.fire(&mut self.host, id, self.timing),
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn accepts_press(&self, button: PointerButton) -> bool {
        if !button.is_primary() {
            return false;
        }
        if !self.attached {
            log::debug!("[scrollbar] press while unmounted, ignoring");
            return false;
        }
        if !self.mode.is_idle() {
            log::debug!("[scrollbar] press while {}, ignoring", self.mode.name());
            return false;
        }
        true
    }

    fn enter(&mut self, mode: InteractionMode) {
        log::debug!("[scrollbar] {} -> {}", self.mode.name(), mode.name());
        self.mode = mode;
        self.acquire_listeners();
        self.refresh_style();
    }

    fn start_repeat(&mut self, kind: ScrollEventKind) {
        self.stop_repeat();
        self.repeat = Some(RepeatChain::start(&mut self.host, kind, self.timing));
    }

    fn stop_repeat(&mut self) {
        if let Some(chain) = self.repeat.take() {
            chain.cancel(&mut self.host);
        }
    }

    fn acquire_listeners(&mut self) {
        if self.attached && !self.listening {
            self.host.attach_global_listeners();
            self.listening = true;
        }
    }

    fn release_listeners(&mut self) {
        if self.listening {
            self.host.detach_global_listeners();
            self.listening = false;
        }
    }

    fn refresh_layout(&mut self) {
        if self.attached {
            self.host.request_layout_refresh();
        }
    }

    fn refresh_style(&mut self) {
        if self.attached {
            self.host.request_style_refresh();
        }
    }
}
