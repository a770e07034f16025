// Recording host for the JS boundary: collaborator calls become an ordered effect list.
// JS applies the effects (CSS, listeners, setTimeout, CustomEvent) and calls back in.
// See DESIGN.md: Module notes (effects)

use serde::{Deserialize, Serialize};

use crate::host::{Presentation, Scheduler};
use crate::types::{ScrollEventKind, TimerId};

/// A side effect the presentation layer must perform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Effect {
    /// Reposition/resize the thumb.
    Layout,
    /// Re-apply active classes.
    Style,
    /// Dispatch `scrollbar-input` with `kind` as detail.
    Dispatch { kind: ScrollEventKind },
    /// `setTimeout` and report expiry through `repeat_timer(id)`.
    ScheduleTimer { id: u32, delay_ms: u32 },
    /// `clearTimeout` for a previously scheduled id.
    CancelTimer { id: u32 },
    /// Add document-level mousemove/mouseup listeners.
    AttachListeners,
    /// Remove document-level mousemove/mouseup listeners.
    DetachListeners,
}

/// Host that records effects instead of performing them.
#[derive(Debug, Clone, Default)]
pub struct EffectRecorder {
    track_length: f64,
    next_timer: u32,
    pending: Vec<TimerId>,
    effects: Vec<Effect>,
}

impl EffectRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_track_length(track_length: f64) -> Self {
        EffectRecorder {
            track_length,
            ..Self::default()
        }
    }

    /// Cache the track length measured by JS. Negative or NaN sizes collapse to zero.
    pub fn set_track_length(&mut self, track_length: f64) {
        self.track_length = if track_length.is_nan() {
            0.0
        } else {
            track_length.max(0.0)
        };
    }

    /// Mark a timer as fired. Returns false for ids that were canceled or never scheduled.
    pub fn expire(&mut self, id: TimerId) -> bool {
        match self.pending.iter().position(|p| *p == id) {
            Some(index) => {
                self.pending.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn pending_timers(&self) -> usize {
        self.pending.len()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Hand the recorded effects over, leaving the buffer empty.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}

impl Presentation for EffectRecorder {
    fn track_length(&self) -> f64 {
        self.track_length
    }

    fn request_layout_refresh(&mut self) {
        self.effects.push(Effect::Layout);
    }

    fn request_style_refresh(&mut self) {
        self.effects.push(Effect::Style);
    }

    fn dispatch(&mut self, kind: ScrollEventKind) {
        self.effects.push(Effect::Dispatch { kind });
    }

    fn attach_global_listeners(&mut self) {
        self.effects.push(Effect::AttachListeners);
    }

    fn detach_global_listeners(&mut self) {
        self.effects.push(Effect::DetachListeners);
    }
}

impl Scheduler for EffectRecorder {
    fn schedule(&mut self, delay_ms: u32) -> TimerId {
        // Ids start at 1 so JS can treat 0 as "no timer".
        self.next_timer = self.next_timer.wrapping_add(1).max(1);
        let id = TimerId::new(self.next_timer);
        self.pending.push(id);
        self.effects.push(Effect::ScheduleTimer {
            id: id.as_u32(),
            delay_ms,
        });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if self.expire(id) {
            self.effects.push(Effect::CancelTimer { id: id.as_u32() });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_ids_are_unique_and_nonzero() {
        let mut host = EffectRecorder::new();
        let a = host.schedule(300);
        let b = host.schedule(100);
        assert_ne!(a, b);
        assert!(a.as_u32() > 0);
        assert_eq!(host.pending_timers(), 2);
    }

    #[test]
    fn cancel_unknown_timer_is_noop() {
        let mut host = EffectRecorder::new();
        host.cancel(TimerId::new(42));
        assert!(host.effects().is_empty());

        let id = host.schedule(300);
        host.take_effects();
        host.cancel(id);
        host.cancel(id);
        assert_eq!(host.take_effects(), vec![Effect::CancelTimer { id: id.as_u32() }]);
    }

    #[test]
    fn expired_timer_cannot_be_canceled() {
        let mut host = EffectRecorder::new();
        let id = host.schedule(300);
        assert!(host.expire(id));
        assert!(!host.expire(id));
        host.take_effects();
        host.cancel(id);
        assert!(host.effects().is_empty());
    }

    #[test]
    fn track_length_is_sanitized() {
        let mut host = EffectRecorder::with_track_length(200.0);
        assert_eq!(host.track_length(), 200.0);
        host.set_track_length(-5.0);
        assert_eq!(host.track_length(), 0.0);
        host.set_track_length(f64::NAN);
        assert_eq!(host.track_length(), 0.0);
    }

    #[test]
    fn effects_serialize_with_type_tag() {
        let json = serde_json::to_string(&vec![
            Effect::Dispatch {
                kind: ScrollEventKind::DecrementSmall,
            },
            Effect::ScheduleTimer { id: 3, delay_ms: 300 },
            Effect::Layout,
        ])
        .unwrap();
        assert_eq!(
            json,
            r#"[{"type":"Dispatch","kind":"decrementSmall"},{"type":"ScheduleTimer","id":3,"delay_ms":300},{"type":"Layout"}]"#
        );
    }
}
