//! L4 Atomic Layer: Closed vocabularies shared by every reveal component

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::RevealKind;
use crate::error::Error;

/// One of the two auxiliary regions at either end of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Top,
    Bottom,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Direction::Top),
            "bottom" => Ok(Direction::Bottom),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

/// Classified drag direction for the current touch sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intent {
    #[default]
    None,
    /// Finger moving down while the list sits at its top edge
    TowardTop,
    /// Finger moving up while the list sits at its bottom edge
    TowardBottom,
}

impl Intent {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Intent::None => None,
            Intent::TowardTop => Some(Direction::Top),
            Intent::TowardBottom => Some(Direction::Bottom),
        }
    }
}

/// Scroll state reported by the inner list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListScrollState {
    #[default]
    Idle,
    Dragging,
    Settling,
}

/// Origin of a nested scroll sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSource {
    Touch,
    Fling,
}

/// Raw pointer input along the scroll axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { y: f32 },
    Move { y: f32 },
    Up,
    Cancel,
}

/// Notification delivered to listeners once a region is fully revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "direction", rename_all = "snake_case")]
pub enum RevealEvent {
    Load(Direction),
    Refresh(Direction),
}

impl RevealEvent {
    pub fn new(kind: RevealKind, direction: Direction) -> Self {
        match kind {
            RevealKind::Load => RevealEvent::Load(direction),
            RevealKind::Refresh => RevealEvent::Refresh(direction),
        }
    }

    pub fn direction(&self) -> Direction {
        match *self {
            RevealEvent::Load(direction) | RevealEvent::Refresh(direction) => direction,
        }
    }
}

/// Inner scrollable list as seen by the coordinator
pub trait ScrollTarget {
    /// Whether the list can still scroll its own content toward `direction`
    fn can_scroll_beyond(&self, direction: Direction) -> bool;
}

/// Optional busy-indicator capability of a region
pub trait LoadIndicator {
    fn loading(&mut self);
    fn reset(&mut self);
}
