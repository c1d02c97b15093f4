//! liquidfab Core Library
//!
//! Platform-agnostic model of a liquid floating action button: the circle
//! geometry, the connector engine that melts neighbouring circles together,
//! the frame-driven open/close animation and the button shell around them.
//! Rendering is delegated to a [`DrawTarget`] supplied by the host.

pub mod animation;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod layer;
pub mod shapes;
pub mod widget;

pub use animation::{Direction, LiquidBase, Phase, TickOutcome, Timeline, ease_in_ease_out};
pub use config::{AnimationConfig, ButtonConfig};
pub use engine::LiquidEngine;
pub use error::{ConfigError, LiquidError};
pub use layer::ShapeLayer;
pub use shapes::{Circle, DrawTarget, Drawable, FilledPath, PlusIcon, SerializableColor, Shadow};
pub use widget::{Cell, CellContent, DataSource, Delegate, LiquidFloatingActionButton};
