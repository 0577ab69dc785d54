//! stage_ui - A retained-mode widget toolkit with scrollable containers
//!
//! This crate provides a small widget system built around command-recording
//! drawing: widgets record draw and clip commands into a [`Batch`], and the
//! host replays them against its renderer. Coordinates are y-up with the
//! origin at the bottom-left, matching GL viewport conventions.

mod batch;
mod drawable;
mod error;
mod event;
mod layout;
mod scissor;
mod widget;
mod widgets;

pub use batch::{Batch, Color, DrawCommand};
pub use drawable::{Drawable, FillDrawable};
pub use error::{Result, UiError};
pub use event::{Event, PointerButton};
pub use layout::{Padding, Point, Rectangle, Size};
pub use scissor::{calculate_scissors, Camera, ScissorStack};
pub use widget::{Cullable, Widget};

// Re-export widgets
pub use widgets::{Panel, ScrollPane, ScrollPaneStyle};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::batch::{Batch, Color, DrawCommand};
    pub use crate::drawable::{Drawable, FillDrawable};
    pub use crate::event::{Event, PointerButton};
    pub use crate::layout::{Padding, Point, Rectangle, Size};
    pub use crate::scissor::{Camera, ScissorStack};
    pub use crate::widget::{Cullable, Widget};
    pub use crate::widgets::{Panel, ScrollPane, ScrollPaneStyle};
}
