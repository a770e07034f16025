// Step magnitudes for listeners of `scrollbar-input`. The widget only names the step;
// the listener decides how far it goes.
// See DESIGN.md: Module notes (policy)

use crate::types::ScrollEventKind;

/// Ratio of hidden to visible content in normalized value units.
/// A thumb covering the whole track hides nothing and pages by zero.
pub fn page_size(thumb_size: f64) -> f64 {
    let visible = thumb_size.clamp(0.0, 1.0);
    if visible >= 1.0 {
        return 0.0;
    }
    visible / (1.0 - visible)
}

/// Converts discrete scrollbar events into new values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPolicy {
    /// Small step = page size / `small_divisor` (arrow buttons).
    pub small_divisor: f64,
    /// Large step = page size / `large_divisor` (trough paging).
    pub large_divisor: f64,
}

impl Default for StepPolicy {
    fn default() -> Self {
        StepPolicy {
            small_divisor: 5.0,
            large_divisor: 2.0,
        }
    }
}

impl StepPolicy {
    pub fn small_step(&self, thumb_size: f64) -> f64 {
        page_size(thumb_size) / self.small_divisor
    }

    pub fn large_step(&self, thumb_size: f64) -> f64 {
        page_size(thumb_size) / self.large_divisor
    }

    /// Unclamped target value for a step event. `Value` events return `None`:
    /// the drag already moved the widget.
    pub fn next_value(&self, kind: ScrollEventKind, value: f64, thumb_size: f64) -> Option<f64> {
        let next = match kind {
            ScrollEventKind::IncrementSmall => value + self.small_step(thumb_size),
            ScrollEventKind::DecrementSmall => value - self.small_step(thumb_size),
            ScrollEventKind::IncrementLarge => value + self.large_step(thumb_size),
            ScrollEventKind::DecrementLarge => value - self.large_step(thumb_size),
            ScrollEventKind::Value => return None,
        };
        Some(next)
    }
}
