// Auto-repeat for held buttons and trough presses.
// Emit now, again after a delay, then on an interval until canceled.
// See DESIGN.md: Module notes (repeat)

use crate::host::{Presentation, Scheduler};
use crate::types::{ScrollEventKind, TimerId};

/// Delays of an auto-repeat chain, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatTiming {
    pub delay_ms: u32,
    pub interval_ms: u32,
}

impl Default for RepeatTiming {
    fn default() -> Self {
        RepeatTiming {
            delay_ms: 300,
            interval_ms: 100,
        }
    }
}

/// A live repeat chain. Holds the handle of the one pending timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatChain {
    kind: ScrollEventKind,
    timer: TimerId,
    emissions: u32,
}

impl RepeatChain {
    /// Emit `kind` once and schedule the first repeat.
    pub fn start<H>(host: &mut H, kind: ScrollEventKind, timing: RepeatTiming) -> Self
    where
        H: Presentation + Scheduler,
    {
        log::debug!("[repeat] start {} (delay {}ms)", kind, timing.delay_ms);
        host.dispatch(kind);
        let timer = host.schedule(timing.delay_ms);
        RepeatChain {
            kind,
            timer,
            emissions: 1,
        }
    }

    /// Handle an expired timer. Ids other than the pending one are stale and ignored.
    pub fn fire<H>(&mut self, host: &mut H, id: TimerId, timing: RepeatTiming) -> bool
    where
        H: Presentation + Scheduler,
    {
        if id != self.timer {
            log::trace!("[repeat] ignoring stale timer {:?}", id);
            return false;
        }
        host.dispatch(self.kind);
        self.emissions += 1;
        log::trace!("[repeat] {} emission #{}", self.kind, self.emissions);
        self.timer = host.schedule(timing.interval_ms);
        true
    }

    pub fn cancel<S: Scheduler>(self, host: &mut S) {
        log::debug!("[repeat] stop {} after {} emissions", self.kind, self.emissions);
        host.cancel(self.timer);
    }

    pub fn kind(&self) -> ScrollEventKind {
        self.kind
    }

    pub fn timer(&self) -> TimerId {
        self.timer
    }

    pub fn emissions(&self) -> u32 {
        self.emissions
    }
}
