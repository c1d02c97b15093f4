//! SVG renderer: writes each frame as a standalone SVG document.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use kurbo::{Affine, BezPath, Size};
use liquidfab_core::{DrawTarget, Shadow};
use log::debug;
use peniko::Color;
use std::fmt::Write as _;
use std::path::Path;

/// Renders a button frame into SVG markup.
#[derive(Debug)]
pub struct SvgRenderer {
    body: String,
    size: Size,
    transform: Affine,
    paths: usize,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self {
            body: String::new(),
            size: Size::ZERO,
            transform: Affine::IDENTITY,
            paths: 0,
        }
    }

    /// Number of `<path>` elements emitted for the current frame.
    pub fn path_count(&self) -> usize {
        self.paths
    }

    /// The complete SVG document for the last built scene.
    pub fn finish(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.size.width,
            h = self.size.height,
            body = self.body
        )
    }

    /// Write the last built scene to a file.
    pub fn write_to(&self, path: &Path) -> RenderResult<()> {
        std::fs::write(path, self.finish()).map_err(|e| RendererError::Io(e.to_string()))?;
        debug!("wrote {} path(s) to {}", self.paths, path.display());
        Ok(())
    }

    fn transformed(&self, path: &BezPath) -> BezPath {
        let mut path = path.clone();
        path.apply_affine(self.transform);
        path
    }

    fn push_element(&mut self, element: String) {
        self.body.push_str("  ");
        self.body.push_str(&element);
        self.body.push('\n');
        self.paths += 1;
    }
}

/// `rgb(...)` plus opacity in `[0, 1]`.
fn svg_color(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    (
        format!("rgb({},{},{})", rgba.r, rgba.g, rgba.b),
        f64::from(rgba.a) / 255.0,
    )
}

impl DrawTarget for SvgRenderer {
    fn fill_path(&mut self, path: &BezPath, color: Color) {
        let (fill, opacity) = svg_color(color);
        let d = self.transformed(path).to_svg();
        self.push_element(format!(
            "<path d=\"{d}\" fill=\"{fill}\" fill-opacity=\"{opacity:.3}\"/>"
        ));
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        let (stroke, opacity) = svg_color(color);
        let d = self.transformed(path).to_svg();
        let width = width * self.transform.as_coeffs()[0].abs();
        self.push_element(format!(
            "<path d=\"{d}\" fill=\"none\" stroke=\"{stroke}\" stroke-opacity=\"{opacity:.3}\" stroke-width=\"{width:.2}\" stroke-linecap=\"round\"/>"
        ));
    }

    fn fill_path_with_shadow(&mut self, path: &BezPath, color: Color, shadow: &Shadow) {
        let mut offset = path.clone();
        offset.apply_affine(Affine::translate(shadow.offset));
        let (fill, _) = svg_color(shadow.color);
        let d = self.transformed(&offset).to_svg();
        self.push_element(format!(
            "<path d=\"{d}\" fill=\"{fill}\" fill-opacity=\"{:.3}\"/>",
            shadow.opacity
        ));
        self.fill_path(path, color);
    }
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        let scale = ctx.scale_factor;
        self.body.clear();
        self.paths = 0;
        self.size = Size::new(ctx.viewport_size.width * scale, ctx.viewport_size.height * scale);
        self.transform = Affine::scale(scale) * Affine::translate(ctx.origin.to_vec2());

        let (background, opacity) = svg_color(self.background_color(ctx));
        let _ = writeln!(
            self.body,
            "  <rect width=\"100%\" height=\"100%\" fill=\"{background}\" fill-opacity=\"{opacity:.3}\"/>"
        );
        ctx.button.draw(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Rect};
    use liquidfab_core::{Direction, LiquidFloatingActionButton};

    fn button() -> LiquidFloatingActionButton {
        let mut button = LiquidFloatingActionButton::new(Rect::new(100.0, 100.0, 156.0, 156.0), Direction::Up);
        button.add_cell_image("ic_cloud", |_| {});
        button.add_cell_image("ic_system", |_| {});
        button
    }

    #[test]
    fn test_closed_button_scene() {
        let button = button();
        let mut renderer = SvgRenderer::new();
        renderer.build_scene(&RenderContext::new(&button, Size::new(400.0, 400.0)));
        // Base circle, shadow + main circle, plus icon.
        assert_eq!(renderer.path_count(), 4);
        let svg = renderer.finish();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<path").count(), renderer.path_count());
        assert!(svg.contains("stroke-linecap=\"round\""));
    }

    #[test]
    fn test_animating_scene_contains_connectors() {
        let mut button = button();
        button.open();
        button.tick(0.05);
        let mut renderer = SvgRenderer::new();
        renderer.build_scene(&RenderContext::new(&button, Size::new(400.0, 400.0)));
        let connectors = button.base().engine().layer().len() + button.base().big_engine().layer().len();
        assert!(connectors >= 1);
        assert_eq!(renderer.path_count(), 4 + connectors + button.cells().len());
    }

    #[test]
    fn test_scale_and_origin() {
        let button = button();
        let mut renderer = SvgRenderer::new();
        let ctx = RenderContext::new(&button, Size::new(100.0, 50.0))
            .with_scale_factor(2.0)
            .with_origin(Point::ZERO);
        renderer.build_scene(&ctx);
        let svg = renderer.finish();
        assert!(svg.contains("width=\"200\""));
        assert!(svg.contains("height=\"100\""));
    }

    #[test]
    fn test_write_to_file() {
        let button = button();
        let mut renderer = SvgRenderer::new();
        renderer.build_scene(&RenderContext::new(&button, Size::new(200.0, 200.0)));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.svg");
        renderer.write_to(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, renderer.finish());
    }
}
