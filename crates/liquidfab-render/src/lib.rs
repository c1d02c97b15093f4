//! liquidfab Render Library
//!
//! Renderer abstraction and an SVG implementation that turns a button frame
//! into a standalone document.

mod renderer;
mod svg;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
pub use svg::SvgRenderer;
