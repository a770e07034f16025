// Collaborators the widget drives but does not own: the rendered element and a timer source.
// See DESIGN.md: Module notes (host)

use crate::types::{ScrollEventKind, TimerId};

/// Presentation layer around the widget (markup, styling, event target).
pub trait Presentation {
    /// Current pixel length of the track along the active axis.
    fn track_length(&self) -> f64;

    /// Reposition/resize the thumb from the widget's value, thumb size and orientation.
    fn request_layout_refresh(&mut self);

    /// Toggle active/hover visuals from the widget's interaction mode.
    fn request_style_refresh(&mut self);

    /// Bubble a `scrollbar-input` event carrying `kind`.
    fn dispatch(&mut self, kind: ScrollEventKind);

    /// Start receiving pointer move/up from the whole document.
    fn attach_global_listeners(&mut self);

    fn detach_global_listeners(&mut self);
}

/// Deferred-callback source. Expired timers are delivered back through
/// `Scrollbar::on_repeat_timer`.
pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u32) -> TimerId;

    /// Canceling an unknown or already-fired timer is a no-op.
    fn cancel(&mut self, id: TimerId);
}
