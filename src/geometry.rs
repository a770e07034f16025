// Pixel <-> normalized value mapping along the track. Pure functions, no state.
// See DESIGN.md: Module notes (geometry)

use serde::{Deserialize, Serialize};

use crate::types::{Orientation, ScrollEventKind};

/// Below this many pixels of travel the track is treated as collapsed.
pub const EPS: f64 = 1e-9;

/// Clamp a write to [0, 1]. NaN has no meaningful position and is rejected.
pub fn clamp_unit(v: f64) -> Option<f64> {
    if v.is_nan() {
        None
    } else {
        Some(v.clamp(0.0, 1.0))
    }
}

/// Pixel distance the thumb's leading edge can travel.
pub fn track_travel(track_length: f64, thumb_size: f64) -> f64 {
    track_length * (1.0 - thumb_size)
}

/// Leading-edge position of the thumb as a fraction of the track length.
pub fn pixel_offset_for_value(value: f64, thumb_size: f64) -> f64 {
    (1.0 - thumb_size) * value
}

/// Map a pointer movement in pixels to a change of the normalized value.
/// A collapsed track (hidden or unmounted element) yields no movement.
pub fn value_delta_for_pixel_delta(delta_pixels: f64, track_length: f64, thumb_size: f64) -> f64 {
    let travel = track_travel(track_length, thumb_size);
    if travel < EPS {
        return 0.0;
    }
    delta_pixels / travel
}

/// Which way a trough press pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressDirection {
    Forward,
    Backward,
}

impl PressDirection {
    pub fn page_event(&self) -> ScrollEventKind {
        match self {
            PressDirection::Forward => ScrollEventKind::IncrementLarge,
            PressDirection::Backward => ScrollEventKind::DecrementLarge,
        }
    }
}

/// Compare the press position against the thumb's leading edge in pixels.
/// Pressing exactly on the edge pages backward.
pub fn press_position_direction(
    press_pixel: f64,
    track_length: f64,
    thumb_size: f64,
    value: f64,
) -> PressDirection {
    let threshold = track_length * (1.0 - thumb_size) * value;
    if press_pixel > threshold {
        PressDirection::Forward
    } else {
        PressDirection::Backward
    }
}

/// Thumb placement handed to the presentation layer, as fractions of the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThumbLayout {
    pub orientation: Orientation,
    /// Leading edge (left or top).
    pub offset: f64,
    /// Width or height.
    pub length: f64,
}

pub fn thumb_layout(value: f64, thumb_size: f64, orientation: Orientation) -> ThumbLayout {
    ThumbLayout {
        orientation,
        offset: pixel_offset_for_value(value, thumb_size),
        length: thumb_size,
    }
}

impl ThumbLayout {
    pub fn to_css(&self) -> ThumbCss {
        ThumbCss {
            offset: percent(self.offset),
            length: percent(self.length),
        }
    }
}

/// Thumb placement as CSS percentages, ready for `style.left`/`style.width`
/// (or `top`/`height` when vertical).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbCss {
    pub offset: String,
    pub length: String,
}

/// Format a fraction as a CSS percentage, e.g. `0.35` -> `"35.000%"`.
pub fn percent(v: f64) -> String {
    format!("{:.3}%", v * 100.0)
}
