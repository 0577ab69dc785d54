use crate::Point;

/// Pointer events that widgets can respond to.
///
/// Positions are in the receiving widget's local coordinate space (y-up).
/// Translating from window/screen coordinates is the host dispatcher's job.
#[derive(Debug, Clone)]
pub enum Event {
    /// Pointer button pressed.
    PointerPressed {
        position: Point,
        /// Pointer index for multi-touch; 0 is the primary pointer.
        pointer: u32,
        button: PointerButton,
    },
    /// Pointer button released.
    PointerReleased {
        position: Point,
        pointer: u32,
        button: PointerButton,
    },
    /// Pointer moved while pressed.
    PointerDragged { position: Point, pointer: u32 },
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other(u16),
}
