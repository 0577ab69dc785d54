//! Drawables: skin-provided chrome the widgets paint with.

use std::rc::Rc;

use crate::batch::{Batch, Color};
use crate::{Padding, Rectangle};

/// Something a skin can hand to a widget to paint a region with.
///
/// Drawables are shared: widgets hold [`Rc`] handles, the skin/style provider
/// owns the underlying resources.
pub trait Drawable {
    /// Minimum sensible width, in pixels. For scrollbar knobs this doubles as
    /// the bar thickness.
    fn min_width(&self) -> f32;

    /// Minimum sensible height, in pixels.
    fn min_height(&self) -> f32;

    /// Content padding declared by this drawable (ninepatch borders).
    fn padding(&self) -> Padding {
        Padding::ZERO
    }

    /// Paint the drawable stretched over the given region.
    fn draw(&self, batch: &mut Batch, x: f32, y: f32, width: f32, height: f32);
}

/// A solid-color drawable with a declared minimum size.
///
/// Stands in for textured ninepatches in demos and tests.
#[derive(Debug, Clone)]
pub struct FillDrawable {
    color: Color,
    min_width: f32,
    min_height: f32,
    padding: Padding,
}

impl FillDrawable {
    pub fn new(color: Color, min_width: f32, min_height: f32) -> Self {
        Self {
            color,
            min_width,
            min_height,
            padding: Padding::ZERO,
        }
    }

    /// Declare content padding, as a ninepatch border would.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Convenience: wrap in the shared handle widgets expect.
    pub fn shared(self) -> Rc<dyn Drawable> {
        Rc::new(self)
    }
}

impl Drawable for FillDrawable {
    fn min_width(&self) -> f32 {
        self.min_width
    }

    fn min_height(&self) -> f32 {
        self.min_height
    }

    fn padding(&self) -> Padding {
        self.padding
    }

    fn draw(&self, batch: &mut Batch, x: f32, y: f32, width: f32, height: f32) {
        batch.draw_quad(Rectangle::new(x, y, width, height), self.color);
    }
}
