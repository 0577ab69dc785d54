//! Panel widget - a plain rectangle of content.
//!
//! Panels are the simplest concrete widget: a background drawable stretched
//! over their bounds, an optional declared preferred size, and culling
//! support. Demos and tests use them as scroll pane content.

use std::rc::Rc;

use crate::batch::Batch;
use crate::drawable::Drawable;
use crate::scissor::{Camera, ScissorStack};
use crate::widget::{Cullable, Widget};
use crate::{Point, Rectangle, Size};

pub struct Panel {
    position: Point,
    size: Size,
    preferred_size: Option<Size>,
    background: Option<Rc<dyn Drawable>>,
    culling_area: Option<Rectangle>,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            position: Point::zero(),
            size: Size::zero(),
            preferred_size: None,
            background: None,
            culling_area: None,
        }
    }

    /// Set the background drawable.
    pub fn background(mut self, background: Rc<dyn Drawable>) -> Self {
        self.background = Some(background);
        self
    }

    /// Declare a preferred size; containers that size children will use it.
    pub fn preferred_size(mut self, width: f32, height: f32) -> Self {
        self.preferred_size = Some(Size::new(width, height));
        self
    }

    /// Culling area last supplied by an enclosing container, if any.
    pub fn culling_area(&self) -> Option<Rectangle> {
        self.culling_area
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Panel {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn draw(&mut self, batch: &mut Batch, _scissors: &mut ScissorStack, _camera: &Camera) {
        if let Some(background) = &self.background {
            background.draw(
                batch,
                self.position.x,
                self.position.y,
                self.size.width,
                self.size.height,
            );
        }
    }

    fn preferred_size(&self) -> Option<Size> {
        self.preferred_size
    }

    fn as_cullable(&mut self) -> Option<&mut dyn Cullable> {
        Some(self)
    }
}

impl Cullable for Panel {
    fn set_culling_area(&mut self, area: Rectangle) {
        self.culling_area = Some(area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{Color, DrawCommand};
    use crate::drawable::FillDrawable;

    #[test]
    fn test_panel_draws_background_at_bounds() {
        let mut panel = Panel::new().background(FillDrawable::new(Color::BLACK, 0.0, 0.0).shared());
        panel.set_position(Point::new(3.0, 4.0));
        panel.set_size(Size::new(20.0, 10.0));

        let mut batch = Batch::new();
        let mut scissors = ScissorStack::new();
        let camera = Camera::new(100.0, 100.0);
        panel.draw(&mut batch, &mut scissors, &camera);

        assert_eq!(
            batch.commands(),
            &[DrawCommand::Quad {
                rect: Rectangle::new(3.0, 4.0, 20.0, 10.0),
                color: Color::BLACK,
            }]
        );
    }

    #[test]
    fn test_panel_preferred_size_capability() {
        let panel = Panel::new().preferred_size(300.0, 100.0);
        assert_eq!(
            Widget::preferred_size(&panel),
            Some(Size::new(300.0, 100.0))
        );
        assert_eq!(Widget::preferred_size(&Panel::new()), None);
    }
}
