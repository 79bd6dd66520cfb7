//! Drawable shape descriptions handed to the renderer.
//!
//! A [`DrawableSpec`] is a plain value: the renderer decides how to paint it,
//! the simulation only ever moves its anchor point.
//!
//! | Variant | Anchor | Payload |
//! |---------|--------|---------|
//! | [`DrawableSpec::Circle`] | `center` | radius, color |
//! | [`DrawableSpec::Rect`] | `start_point` | size, color |
//! | [`DrawableSpec::Image`] | `center` | image key, size |
//! | [`DrawableSpec::Text`] | `start_point` | text, font size, color |
//!
//! Screen space is y-down, so "up" is negative y.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// Shape variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rect,
    Image,
    Text,
}

/// A renderer-facing shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum DrawableSpec {
    /// Filled circle.
    Circle {
        center: Vec2,
        radius: f32,
        #[serde(default = "default_color")]
        color: Vec4,
    },
    /// Axis-aligned rectangle anchored at its top-left corner.
    Rect {
        start_point: Vec2,
        size: Vec2,
        #[serde(default = "default_color")]
        color: Vec4,
    },
    /// Image centered on a point. `image` is a key the renderer resolves.
    Image {
        center: Vec2,
        image: String,
        size: Vec2,
    },
    /// Text anchored at its baseline start.
    Text {
        start_point: Vec2,
        text: String,
        font_size: f32,
        #[serde(default = "default_color")]
        color: Vec4,
    },
}

fn default_color() -> Vec4 {
    Vec4::ONE
}

impl DrawableSpec {
    /// White circle.
    pub fn circle(center: Vec2, radius: f32) -> Self {
        DrawableSpec::Circle {
            center,
            radius,
            color: default_color(),
        }
    }

    /// White rectangle.
    pub fn rect(start_point: Vec2, size: Vec2) -> Self {
        DrawableSpec::Rect {
            start_point,
            size,
            color: default_color(),
        }
    }

    pub fn image(center: Vec2, image: impl Into<String>, size: Vec2) -> Self {
        DrawableSpec::Image {
            center,
            image: image.into(),
            size,
        }
    }

    /// White text.
    pub fn text(start_point: Vec2, text: impl Into<String>, font_size: f32) -> Self {
        DrawableSpec::Text {
            start_point,
            text: text.into(),
            font_size,
            color: default_color(),
        }
    }

    /// Replace the color. Images carry no color and are returned unchanged.
    pub fn with_color(mut self, new_color: Vec4) -> Self {
        match &mut self {
            DrawableSpec::Circle { color, .. }
            | DrawableSpec::Rect { color, .. }
            | DrawableSpec::Text { color, .. } => *color = new_color,
            DrawableSpec::Image { .. } => {}
        }
        self
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            DrawableSpec::Circle { .. } => ShapeKind::Circle,
            DrawableSpec::Rect { .. } => ShapeKind::Rect,
            DrawableSpec::Image { .. } => ShapeKind::Image,
            DrawableSpec::Text { .. } => ShapeKind::Text,
        }
    }

    /// The anchor point: `center` for circles and images, `start_point` for
    /// rectangles and text.
    pub fn position(&self) -> Vec2 {
        match self {
            DrawableSpec::Circle { center, .. } | DrawableSpec::Image { center, .. } => *center,
            DrawableSpec::Rect { start_point, .. } | DrawableSpec::Text { start_point, .. } => {
                *start_point
            }
        }
    }

    /// Mutable access to the anchor point.
    pub fn position_mut(&mut self) -> &mut Vec2 {
        match self {
            DrawableSpec::Circle { center, .. } | DrawableSpec::Image { center, .. } => center,
            DrawableSpec::Rect { start_point, .. } | DrawableSpec::Text { start_point, .. } => {
                start_point
            }
        }
    }

    pub fn set_position(&mut self, position: Vec2) {
        *self.position_mut() = position;
    }

    /// Move the anchor point by `delta`. Nothing else about the shape changes.
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        *self.position_mut() += delta;
    }
}
