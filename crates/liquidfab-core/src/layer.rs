//! Shape layer: the per-frame buffer of liquid connector shapes.

use crate::shapes::{DrawTarget, FilledPath};

/// Ordered list of filled paths, rebuilt every animation tick.
///
/// `version` increases on every mutation so a host can skip re-uploading an
/// unchanged layer.
#[derive(Debug, Clone, Default)]
pub struct ShapeLayer {
    shapes: Vec<FilledPath>,
    version: u64,
}

impl ShapeLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: FilledPath) {
        self.shapes.push(shape);
        self.version += 1;
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.version += 1;
    }

    pub fn shapes(&self) -> &[FilledPath] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Fill every shape in insertion order.
    pub fn draw(&self, target: &mut dyn DrawTarget) {
        for shape in &self.shapes {
            target.fill_path(&shape.path, shape.color);
        }
    }
}
