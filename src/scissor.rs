//! Scissor (clip) stack.
//!
//! The host renderer owns one [`ScissorStack`] per frame. Widgets that clip
//! their children push a screen-space rectangle around the child draw and
//! must pop it again on every path out, otherwise clip state leaks into the
//! rest of the frame. [`ScissorStack::scoped`] packages that pairing; pushes
//! and pops are mirrored into the draw batch so the host replays clip state
//! in command order.

use crate::batch::Batch;
use crate::{Point, Rectangle};

/// A camera describing how local/world coordinates map to screen pixels.
///
/// Screen space is y-up with the origin at the bottom-left of the viewport,
/// matching GL scissor rectangles.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Bottom-left world coordinate currently visible.
    pub position: Point,
    pub zoom: f32,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport_width,
            viewport_height,
            position: Point::zero(),
            zoom: 1.0,
        }
    }

    /// Project a world point to screen pixels.
    pub fn project(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.position.x) * self.zoom,
            (point.y - self.position.y) * self.zoom,
        )
    }
}

/// Project a local-space rectangle to a screen-space scissor rectangle.
///
/// `transform` is the drawing batch's current translation, i.e. the widget's
/// origin in world space.
pub fn calculate_scissors(camera: &Camera, transform: Point, area: Rectangle) -> Rectangle {
    let corner = camera.project(Point::new(transform.x + area.x, transform.y + area.y));
    Rectangle::new(
        corner.x,
        corner.y,
        area.width * camera.zoom,
        area.height * camera.zoom,
    )
}

/// Stack of active scissor rectangles in screen space.
#[derive(Debug, Default)]
pub struct ScissorStack {
    scissors: Vec<Rectangle>,
}

impl ScissorStack {
    pub fn new() -> Self {
        Self {
            scissors: Vec::new(),
        }
    }

    /// Push a scissor rectangle, intersected with the current top, and record
    /// the activation into the batch.
    ///
    /// Returns false (and pushes nothing) when the visible intersection is
    /// empty; callers skip drawing in that case.
    pub fn push(&mut self, batch: &mut Batch, scissor: Rectangle) -> bool {
        let scissor = match self.scissors.last() {
            Some(top) => scissor.intersect(top),
            None => scissor,
        };
        if scissor.is_empty() {
            return false;
        }
        self.scissors.push(scissor);
        batch.push_scissor(scissor);
        true
    }

    /// Pop the most recently pushed scissor, recording the restore.
    pub fn pop(&mut self, batch: &mut Batch) -> Option<Rectangle> {
        let scissor = self.scissors.pop();
        if scissor.is_some() {
            batch.pop_scissor();
        }
        scissor
    }

    /// The currently active scissor rectangle, if any.
    pub fn top(&self) -> Option<Rectangle> {
        self.scissors.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.scissors.len()
    }

    /// Run `f` with `scissor` active, popping it again on the way out.
    ///
    /// Returns whether the scissor was activated (and `f` run). The pop also
    /// happens if `f` unwinds, so a panicking widget cannot leak clip state
    /// into the rest of the frame.
    pub fn scoped<F>(&mut self, batch: &mut Batch, scissor: Rectangle, f: F) -> bool
    where
        F: FnOnce(&mut Self, &mut Batch),
    {
        if !self.push(batch, scissor) {
            return false;
        }

        struct PopOnDrop<'a>(&'a mut ScissorStack, &'a mut Batch);
        impl Drop for PopOnDrop<'_> {
            fn drop(&mut self) {
                self.0.scissors.pop();
                self.1.pop_scissor();
            }
        }

        let guard = PopOnDrop(self, batch);
        f(&mut *guard.0, &mut *guard.1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::DrawCommand;

    #[test]
    fn test_push_pop_pairing() {
        let mut stack = ScissorStack::new();
        let mut batch = Batch::new();
        assert!(stack.push(&mut batch, Rectangle::new(0.0, 0.0, 100.0, 100.0)));
        assert!(stack.push(&mut batch, Rectangle::new(50.0, 50.0, 100.0, 100.0)));
        // Nested scissor is clipped against the outer one.
        assert_eq!(stack.top(), Some(Rectangle::new(50.0, 50.0, 50.0, 50.0)));
        stack.pop(&mut batch);
        stack.pop(&mut batch);
        assert_eq!(stack.depth(), 0);
        assert_eq!(batch.commands().len(), 4);
    }

    #[test]
    fn test_empty_intersection_is_rejected() {
        let mut stack = ScissorStack::new();
        let mut batch = Batch::new();
        assert!(stack.push(&mut batch, Rectangle::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!stack.push(&mut batch, Rectangle::new(20.0, 20.0, 10.0, 10.0)));
        assert_eq!(stack.depth(), 1);
        // The rejected push records nothing.
        assert_eq!(batch.commands().len(), 1);
    }

    #[test]
    fn test_scoped_pops_after_closure() {
        let mut stack = ScissorStack::new();
        let mut batch = Batch::new();
        let mut ran = false;
        let drawn = stack.scoped(&mut batch, Rectangle::new(0.0, 0.0, 10.0, 10.0), |inner, _| {
            ran = true;
            assert_eq!(inner.depth(), 1);
        });
        assert!(drawn);
        assert!(ran);
        assert_eq!(stack.depth(), 0);
        assert_eq!(
            batch.commands(),
            &[
                DrawCommand::PushScissor {
                    rect: Rectangle::new(0.0, 0.0, 10.0, 10.0)
                },
                DrawCommand::PopScissor,
            ]
        );
    }

    #[test]
    fn test_scoped_skips_closure_when_clipped_out() {
        let mut stack = ScissorStack::new();
        let mut batch = Batch::new();
        stack.push(&mut batch, Rectangle::new(0.0, 0.0, 10.0, 10.0));
        let mut ran = false;
        let drawn = stack.scoped(&mut batch, Rectangle::new(50.0, 50.0, 10.0, 10.0), |_, _| {
            ran = true;
        });
        assert!(!drawn);
        assert!(!ran);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_calculate_scissors_applies_camera_and_transform() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.position = Point::new(10.0, 20.0);
        let area = Rectangle::new(5.0, 5.0, 100.0, 50.0);
        let scissor = calculate_scissors(&camera, Point::new(30.0, 40.0), area);
        assert_eq!(scissor, Rectangle::new(25.0, 25.0, 100.0, 50.0));
    }
}
