// Strong typing over strings. Enums for orientation, pointer buttons, event kinds and modes.
// See DESIGN.md: Module notes (types)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScrollbarError;

/// Name of the custom DOM event the element dispatches.
pub const SCROLLBAR_EVENT_NAME: &str = "scrollbar-input";

/// Scrollbar orientation. Reflected to the `orientation` attribute as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}

impl FromStr for Orientation {
    type Err = ScrollbarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            other => Err(ScrollbarError::InvalidOrientation(other.to_string())),
        }
    }
}

impl TryFrom<String> for Orientation {
    type Error = ScrollbarError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Orientation> for String {
    fn from(o: Orientation) -> Self {
        o.as_str().to_string()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mouse button that produced a press, decoded from `MouseEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(u8),
}

impl PointerButton {
    pub fn from_dom_button(code: u8) -> Self {
        match code {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, PointerButton::Primary)
    }
}

/// One of the two arrow buttons at the ends of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollButton {
    /// Up/left arrow. Decrements.
    Button1,
    /// Down/right arrow. Increments.
    Button2,
}

impl ScrollButton {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(ScrollButton::Button1),
            2 => Some(ScrollButton::Button2),
            _ => None,
        }
    }

    pub fn step_event(&self) -> ScrollEventKind {
        match self {
            ScrollButton::Button1 => ScrollEventKind::DecrementSmall,
            ScrollButton::Button2 => ScrollEventKind::IncrementSmall,
        }
    }
}

/// Semantic payload of the `scrollbar-input` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScrollEventKind {
    IncrementSmall,
    DecrementSmall,
    IncrementLarge,
    DecrementLarge,
    /// Continuous change from a thumb drag; the widget already moved.
    Value,
}

impl ScrollEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollEventKind::IncrementSmall => "incrementSmall",
            ScrollEventKind::DecrementSmall => "decrementSmall",
            ScrollEventKind::IncrementLarge => "incrementLarge",
            ScrollEventKind::DecrementLarge => "decrementLarge",
            ScrollEventKind::Value => "value",
        }
    }
}

impl fmt::Display for ScrollEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the thumb drag started. Only exists inside `InteractionMode::DraggingThumb`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Pointer coordinate along the active axis at press time.
    pub start_pointer_pos: f64,
    pub start_value: f64,
}

/// What the user is currently holding down. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    DraggingThumb(DragAnchor),
    Button1Active,
    Button2Active,
    TroughActive,
}

impl InteractionMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionMode::Idle)
    }

    /// Modes that own an auto-repeat chain.
    pub fn repeats(&self) -> bool {
        matches!(
            self,
            InteractionMode::Button1Active
                | InteractionMode::Button2Active
                | InteractionMode::TroughActive
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            InteractionMode::Idle => "idle",
            InteractionMode::DraggingThumb(_) => "draggingThumb",
            InteractionMode::Button1Active => "button1Active",
            InteractionMode::Button2Active => "button2Active",
            InteractionMode::TroughActive => "troughActive",
        }
    }
}

/// Opaque handle for a scheduled repeat callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(u32);

impl TimerId {
    pub fn new(id: u32) -> Self {
        TimerId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Whether the widget handled a pointer event. `Consumed` means the embedder
/// should stop propagation and prevent the default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    Consumed,
    Ignored,
}

impl EventDisposition {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventDisposition::Consumed)
    }
}

/// Scrollbar configuration passed from JS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarConfig {
    #[serde(default)]
    pub value: f64,
    #[serde(default = "default_thumb_size")]
    pub thumb_size: f64,
    #[serde(default)]
    pub orientation: Orientation,
    /// Delay before the first auto-repeat (milliseconds).
    #[serde(default = "default_repeat_delay")]
    pub repeat_delay_ms: u32,
    /// Interval between subsequent auto-repeats (milliseconds).
    #[serde(default = "default_repeat_interval")]
    pub repeat_interval_ms: u32,
}

fn default_thumb_size() -> f64 {
    0.3
}

fn default_repeat_delay() -> u32 {
    300
}

fn default_repeat_interval() -> u32 {
    100
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        ScrollbarConfig {
            value: 0.0,
            thumb_size: default_thumb_size(),
            orientation: Orientation::Horizontal,
            repeat_delay_ms: default_repeat_delay(),
            repeat_interval_ms: default_repeat_interval(),
        }
    }
}

impl ScrollbarConfig {
    pub fn from_json(json: &str) -> Result<Self, ScrollbarError> {
        let config: ScrollbarConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ScrollbarError> {
        if self.repeat_interval_ms == 0 {
            return Err(ScrollbarError::InvalidConfig(
                "repeat_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
