//! The renderer boundary.
//!
//! Painting is somebody else's job. Generators hand each shape to a
//! [`Renderer`] once per frame, generator first and then its particles in
//! spawn order.

use crate::shape::DrawableSpec;

/// Anything that can paint a [`DrawableSpec`].
pub trait Renderer {
    fn draw(&mut self, shape: &DrawableSpec);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw(&mut self, shape: &DrawableSpec) {
        (**self).draw(shape);
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn draw(&mut self, shape: &DrawableSpec) {
        (**self).draw(shape);
    }
}

/// A renderer that records every draw call.
///
/// Useful for headless runs and for handing a frame's shapes to a backend in
/// one batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    shapes: Vec<DrawableSpec>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[DrawableSpec] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Forget recorded shapes, keeping the allocation for the next frame.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Take the recorded shapes, leaving the list empty.
    pub fn take(&mut self) -> Vec<DrawableSpec> {
        std::mem::take(&mut self.shapes)
    }
}

impl Renderer for DrawList {
    fn draw(&mut self, shape: &DrawableSpec) {
        self.shapes.push(shape.clone());
    }
}
