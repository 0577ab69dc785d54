//! Built-in widgets.

mod panel;
mod scroll_pane;

pub use panel::Panel;
pub use scroll_pane::{ScrollPane, ScrollPaneStyle};
