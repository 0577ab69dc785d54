//! Command-recording draw batch.
//!
//! Widgets draw by pushing commands into a [`Batch`]; the host renderer
//! executes the recorded commands against its GPU pipeline at the end of the
//! frame. Keeping the batch as plain data also makes widget drawing fully
//! testable without a GPU.

use serde::{Deserialize, Serialize};

use crate::{Point, Rectangle};

/// A draw command to be executed by the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A solid quad, already tinted by the batch color at record time.
    Quad { rect: Rectangle, color: Color },
    /// Pipeline flush boundary. Everything recorded before this command must
    /// reach the framebuffer before any render-state change that follows
    /// (the scroll pane flushes before enabling scissors).
    Flush,
    /// Enable the given screen-space scissor rectangle. Recorded by
    /// [`ScissorStack`](crate::scissor::ScissorStack), not by widgets.
    PushScissor { rect: Rectangle },
    /// Restore the previous scissor state.
    PopScissor,
}

/// The drawing batch widgets record into.
#[derive(Debug, Default)]
pub struct Batch {
    commands: Vec<DrawCommand>,
    color: Color,
    transform: Point,
}

impl Batch {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            color: Color::WHITE,
            transform: Point::zero(),
        }
    }

    /// Set the translation applied to subsequently recorded quads.
    ///
    /// Containers add their own origin before drawing children and restore
    /// the previous value afterwards.
    pub fn set_transform(&mut self, transform: Point) {
        self.transform = transform;
    }

    /// Current translation.
    pub fn transform(&self) -> Point {
        self.transform
    }

    /// Set the tint color applied to subsequently recorded quads.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Current tint color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Record a quad tinted by the current batch color and offset by the
    /// current transform.
    pub fn draw_quad(&mut self, rect: Rectangle, color: Color) {
        self.commands.push(DrawCommand::Quad {
            rect: Rectangle::new(
                rect.x + self.transform.x,
                rect.y + self.transform.y,
                rect.width,
                rect.height,
            ),
            color: color.mul(self.color),
        });
    }

    /// Record a flush boundary.
    pub fn flush(&mut self) {
        self.commands.push(DrawCommand::Flush);
    }

    /// Record a scissor activation. `rect` is in screen space and already
    /// intersected against any enclosing scissor.
    pub(crate) fn push_scissor(&mut self, rect: Rectangle) {
        self.commands.push(DrawCommand::PushScissor { rect });
    }

    /// Record the end of the innermost scissor region.
    pub(crate) fn pop_scissor(&mut self) {
        self.commands.push(DrawCommand::PopScissor);
    }

    /// Commands recorded so far, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all recorded commands; called by the host at frame start.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.color = Color::WHITE;
        self.transform = Point::zero();
    }
}

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Component-wise multiply, used for tinting.
    pub fn mul(self, other: Color) -> Color {
        Color {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
            a: self.a * other.a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_is_tinted_at_record_time() {
        let mut batch = Batch::new();
        batch.set_color(Color::new(1.0, 1.0, 1.0, 0.5));
        batch.draw_quad(Rectangle::new(0.0, 0.0, 10.0, 10.0), Color::rgb(1.0, 0.0, 0.0));

        match &batch.commands()[0] {
            DrawCommand::Quad { color, .. } => {
                assert_eq!(*color, Color::new(1.0, 0.0, 0.0, 0.5));
            }
            other => panic!("expected quad, got {:?}", other),
        }
    }

    #[test]
    fn test_flush_preserves_order() {
        let mut batch = Batch::new();
        batch.draw_quad(Rectangle::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        batch.flush();
        batch.draw_quad(Rectangle::new(1.0, 1.0, 1.0, 1.0), Color::WHITE);

        assert_eq!(batch.commands().len(), 3);
        assert_eq!(batch.commands()[1], DrawCommand::Flush);
    }

    #[test]
    fn test_transform_offsets_quads() {
        let mut batch = Batch::new();
        batch.set_transform(Point::new(10.0, 20.0));
        batch.draw_quad(Rectangle::new(1.0, 2.0, 3.0, 4.0), Color::WHITE);

        match &batch.commands()[0] {
            DrawCommand::Quad { rect, .. } => {
                assert_eq!(*rect, Rectangle::new(11.0, 22.0, 3.0, 4.0));
            }
            other => panic!("expected quad, got {:?}", other),
        }
    }

    #[test]
    fn test_clear_resets_color() {
        let mut batch = Batch::new();
        batch.set_color(Color::BLACK);
        batch.flush();
        batch.clear();
        assert!(batch.commands().is_empty());
        assert_eq!(batch.color(), Color::WHITE);
    }
}
