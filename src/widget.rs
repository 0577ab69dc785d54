//! Widget trait and optional capabilities.

use crate::batch::Batch;
use crate::event::Event;
use crate::scissor::{Camera, ScissorStack};
use crate::{Point, Rectangle, Size};

/// The retained-mode widget surface.
///
/// Widgets own their position and size in their parent's coordinate space
/// (y-up); containers move and resize children during layout.
pub trait Widget {
    fn position(&self) -> Point;

    fn set_position(&mut self, position: Point);

    fn size(&self) -> Size;

    fn set_size(&mut self, size: Size);

    /// Record this widget's drawing into the batch.
    ///
    /// The batch carries the parent's translation; positions recorded by the
    /// widget are relative to its parent. `scissors` and `camera` are passed
    /// through for containers that clip.
    fn draw(&mut self, batch: &mut Batch, scissors: &mut ScissorStack, camera: &Camera);

    /// Handle an event in this widget's local coordinates.
    /// Returns true when the event was consumed.
    fn handle_event(&mut self, event: &Event) -> bool {
        let _ = event;
        false
    }

    /// Optional capability: the size this widget wants, if it can say.
    /// Containers fall back to the current size when this returns None.
    fn preferred_size(&self) -> Option<Size> {
        None
    }

    /// Optional capability: cull off-screen descendants.
    fn as_cullable(&mut self) -> Option<&mut dyn Cullable> {
        None
    }

    fn bounds(&self) -> Rectangle {
        let position = self.position();
        let size = self.size();
        Rectangle::new(position.x, position.y, size.width, size.height)
    }
}

/// Widgets that can skip rendering descendants outside a given area.
///
/// The culling area is a performance hint in the widget's local space; it
/// never affects what is visible (clipping does that).
pub trait Cullable {
    fn set_culling_area(&mut self, area: Rectangle);
}
