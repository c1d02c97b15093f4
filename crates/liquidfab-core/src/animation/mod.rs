//! Frame-driven open/close animation.
//!
//! The driver owns a single optional [`Timeline`]; `None` means idle. Each
//! call to [`LiquidBase::tick`] recomputes every cell position from the
//! elapsed time alone, so stopping or replacing a run needs no rollback.

mod base;
mod easing;
mod timeline;

pub use base::{LiquidBase, TickOutcome};
pub use easing::ease_in_ease_out;
pub use timeline::{Phase, Timeline};

use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Direction the cells fan out from the button (screen coordinates, y down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Right,
    Left,
    Down,
}

impl Direction {
    /// Offset of `distance` along this direction.
    pub fn offset(self, distance: f64) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -distance),
            Direction::Right => Vec2::new(distance, 0.0),
            Direction::Left => Vec2::new(-distance, 0.0),
            Direction::Down => Vec2::new(0.0, distance),
        }
    }
}
