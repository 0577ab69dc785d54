//! Scroll pane: a container that scrolls a single child widget.
//!
//! The child is sized to its preferred size, never smaller than the pane's
//! viewport. Scrollbars appear per axis when the child is larger than the
//! viewport; the knob can be dragged, and clicking the track outside the knob
//! pages the scroll position by a tenth.
//!
//! Coordinates are y-up throughout. Vertical scroll percent 0 means the top
//! of the child is visible, so the vertical knob position and the vertical
//! half of [`ScrollPane::scroll_to`] run through a `1 - percent` /
//! flipped-axis conversion. Callers depend on those conventions; keep them.

use std::rc::Rc;

use crate::batch::{Batch, Color};
use crate::drawable::Drawable;
use crate::error::UiError;
use crate::event::Event;
use crate::scissor::{calculate_scissors, Camera, ScissorStack};
use crate::widget::Widget;
use crate::{Padding, Point, Rectangle, Size};

/// Default pane size used until the host sizes the pane.
const DEFAULT_PANE_SIZE: f32 = 150.0;

/// Fraction of the scroll range stepped when clicking a track outside the
/// knob.
const TRACK_CLICK_STEP: f32 = 0.1;

/// Drawables for a scroll pane, shared with the skin that owns them.
pub struct ScrollPaneStyle {
    /// Optional. Its padding insets the viewport.
    pub background: Option<Rc<dyn Drawable>>,
    pub h_track: Rc<dyn Drawable>,
    pub h_knob: Rc<dyn Drawable>,
    pub v_track: Rc<dyn Drawable>,
    pub v_knob: Rc<dyn Drawable>,
}

impl ScrollPaneStyle {
    /// Build a style, validating the knob drawables.
    ///
    /// The horizontal knob's min height and the vertical knob's min width
    /// double as the bar thicknesses and divide the layout math, so they must
    /// be positive and finite.
    pub fn new(
        background: Option<Rc<dyn Drawable>>,
        h_track: Rc<dyn Drawable>,
        h_knob: Rc<dyn Drawable>,
        v_track: Rc<dyn Drawable>,
        v_knob: Rc<dyn Drawable>,
    ) -> Result<Self, UiError> {
        if !(h_knob.min_height() > 0.0) || !h_knob.min_height().is_finite() {
            return Err(UiError::InvalidStyle(
                "horizontal knob min height must be positive and finite",
            ));
        }
        if !(v_knob.min_width() > 0.0) || !v_knob.min_width().is_finite() {
            return Err(UiError::InvalidStyle(
                "vertical knob min width must be positive and finite",
            ));
        }
        Ok(Self {
            background,
            h_track,
            h_knob,
            v_track,
            v_knob,
        })
    }
}

/// A container that scrolls a single child widget using scrollbars.
///
/// The pane's preferred size is that of the child; at that size the child
/// would not need to scroll, so hosts typically size the pane smaller in one
/// or both directions.
pub struct ScrollPane {
    position: Point,
    size: Size,
    color: Color,
    style: Rc<ScrollPaneStyle>,
    widget: Option<Box<dyn Widget>>,

    // Geometry recomputed each layout pass.
    h_track_bounds: Rectangle,
    v_track_bounds: Rectangle,
    h_knob_bounds: Rectangle,
    v_knob_bounds: Rectangle,
    widget_area: Rectangle,
    widget_culling_area: Rectangle,
    area_width: f32,
    area_height: f32,
    max_x: f32,
    max_y: f32,

    scroll_x: bool,
    scroll_y: bool,
    disable_x: bool,
    disable_y: bool,
    amount_x: f32,
    amount_y: f32,

    // Live only during an active drag gesture.
    touch_scroll_h: bool,
    touch_scroll_v: bool,
    last_point: Point,
    handle_position: f32,

    needs_layout: bool,
}

impl ScrollPane {
    /// Create a pane with an optional initial child.
    pub fn new(widget: Option<Box<dyn Widget>>, style: Rc<ScrollPaneStyle>) -> Self {
        Self {
            position: Point::zero(),
            size: Size::new(DEFAULT_PANE_SIZE, DEFAULT_PANE_SIZE),
            color: Color::WHITE,
            style,
            widget,
            h_track_bounds: Rectangle::default(),
            v_track_bounds: Rectangle::default(),
            h_knob_bounds: Rectangle::default(),
            v_knob_bounds: Rectangle::default(),
            widget_area: Rectangle::default(),
            widget_culling_area: Rectangle::default(),
            area_width: 0.0,
            area_height: 0.0,
            max_x: 0.0,
            max_y: 0.0,
            scroll_x: false,
            scroll_y: false,
            disable_x: false,
            disable_y: false,
            amount_x: 0.0,
            amount_y: 0.0,
            touch_scroll_h: false,
            touch_scroll_v: false,
            last_point: Point::zero(),
            handle_position: 0.0,
            needs_layout: true,
        }
    }

    /// Set the child, detaching and returning the previous one.
    ///
    /// This is the only way to put content into the pane; there is no generic
    /// add-child surface.
    pub fn set_widget(&mut self, widget: Box<dyn Widget>) -> Option<Box<dyn Widget>> {
        let previous = self.widget.replace(widget);
        self.invalidate();
        previous
    }

    /// Remove and return the child, leaving the pane empty.
    pub fn take_widget(&mut self) -> Option<Box<dyn Widget>> {
        let previous = self.widget.take();
        self.invalidate();
        previous
    }

    pub fn widget(&self) -> Option<&dyn Widget> {
        self.widget.as_deref()
    }

    pub fn widget_mut(&mut self) -> Option<&mut (dyn Widget + 'static)> {
        self.widget.as_deref_mut()
    }

    /// The pane's style handle. Mutating a shared style takes effect at the
    /// next layout pass after [`ScrollPane::set_style`].
    pub fn style(&self) -> Rc<ScrollPaneStyle> {
        Rc::clone(&self.style)
    }

    pub fn set_style(&mut self, style: Rc<ScrollPaneStyle>) {
        self.style = style;
        self.invalidate();
    }

    /// Tint applied to background and scrollbar chrome.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Disable scrolling per axis. On a disabled axis the child is sized to
    /// the full pane extent regardless of its preferred size.
    pub fn set_scrolling_disabled(&mut self, x: bool, y: bool) {
        self.disable_x = x;
        self.disable_y = y;
        self.invalidate();
    }

    /// Mark cached geometry stale; recomputed on the next [`validate`].
    ///
    /// [`validate`]: ScrollPane::validate
    pub fn invalidate(&mut self) {
        self.needs_layout = true;
    }

    /// Run the layout pass if cached geometry is stale.
    pub fn validate(&mut self) {
        if self.needs_layout {
            self.layout();
        }
    }

    /// Whether the horizontal scrollbar is visible.
    pub fn is_scroll_x(&self) -> bool {
        self.scroll_x
    }

    /// Whether the vertical scrollbar is visible.
    pub fn is_scroll_y(&self) -> bool {
        self.scroll_y
    }

    /// The x scroll position in pixels. Not clamped until the next layout.
    pub fn scroll_x(&self) -> f32 {
        self.amount_x
    }

    pub fn set_scroll_x(&mut self, pixels: f32) {
        self.amount_x = pixels;
    }

    /// The y scroll position in pixels. Not clamped until the next layout.
    pub fn scroll_y(&self) -> f32 {
        self.amount_y
    }

    pub fn set_scroll_y(&mut self, pixels: f32) {
        self.amount_y = pixels;
    }

    /// The maximum scroll value in the x direction, per the last layout.
    pub fn max_scroll_x(&self) -> f32 {
        self.max_x
    }

    /// The maximum scroll value in the y direction, per the last layout.
    pub fn max_scroll_y(&self) -> f32 {
        self.max_y
    }

    /// Scroll position as a fraction of the scroll range. Returns 0 when the
    /// child does not overflow (the range is empty).
    pub fn scroll_percent_x(&self) -> f32 {
        if self.max_x <= 0.0 {
            0.0
        } else {
            self.amount_x / self.max_x
        }
    }

    pub fn set_scroll_percent_x(&mut self, percent: f32) {
        self.amount_x = self.max_x * percent;
    }

    /// Vertical scroll fraction; 0 shows the top of the child. Returns 0 when
    /// the range is empty.
    pub fn scroll_percent_y(&self) -> f32 {
        if self.max_y <= 0.0 {
            0.0
        } else {
            self.amount_y / self.max_y
        }
    }

    pub fn set_scroll_percent_y(&mut self, percent: f32) {
        self.amount_y = self.max_y * percent;
    }

    /// Horizontal knob bounds from the last layout/draw, in pane-local space.
    pub fn h_knob_bounds(&self) -> Rectangle {
        self.h_knob_bounds
    }

    /// Vertical knob bounds from the last layout/draw, in pane-local space.
    pub fn v_knob_bounds(&self) -> Rectangle {
        self.v_knob_bounds
    }

    /// Horizontal track bounds from the last layout.
    pub fn h_track_bounds(&self) -> Rectangle {
        self.h_track_bounds
    }

    /// Vertical track bounds from the last layout.
    pub fn v_track_bounds(&self) -> Rectangle {
        self.v_track_bounds
    }

    /// The viewport rectangle the child is clipped to, in pane-local space.
    pub fn widget_area(&self) -> Rectangle {
        self.widget_area
    }

    /// Whether a pane-local point lands on this pane at all.
    pub fn hit(&self, x: f32, y: f32) -> bool {
        x > 0.0 && x < self.size.width && y > 0.0 && y < self.size.height
    }

    /// Adjust the scroll amounts just enough that the given child-local
    /// rectangle is fully in view.
    ///
    /// The vertical input is top-down and is converted into the pane's
    /// bottom-up scroll space via `max_y + pane_height - y`.
    pub fn scroll_to(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let pane_width = self.size.width;
        let pane_height = self.size.height;

        if x < self.amount_x {
            self.amount_x = x;
        } else if x + width > self.amount_x + pane_width {
            self.amount_x = x + width - pane_width;
        }

        let y = self.max_y + pane_height - y;
        if y > self.amount_y + pane_height {
            self.amount_y = y - pane_height;
        } else if y - height < self.amount_y {
            self.amount_y = y - height;
        }
    }

    /// Recompute viewport, scrollbar and knob geometry, clamp the scroll
    /// amounts, and size the child.
    pub fn layout(&mut self) {
        self.needs_layout = false;

        let background_padding = self
            .style
            .background
            .as_ref()
            .map(|bg| bg.padding())
            .unwrap_or(Padding::ZERO);

        let width = self.size.width;
        let height = self.size.height;

        // Space remaining after the background's padded border.
        let mut area_width = width - background_padding.left - background_padding.right;
        let mut area_height = height - background_padding.top - background_padding.bottom;

        self.scroll_x = false;
        self.scroll_y = false;

        let Some(widget) = self.widget.as_mut() else {
            self.widget_area.set(
                background_padding.left,
                background_padding.bottom,
                area_width,
                area_height,
            );
            self.area_width = area_width;
            self.area_height = area_height;
            self.max_x = 0.0;
            self.max_y = 0.0;
            return;
        };

        let preferred = widget.preferred_size().unwrap_or_else(|| widget.size());
        let mut widget_width = preferred.width;
        let mut widget_height = preferred.height;

        let v_bar_width = self.style.v_knob.min_width();
        let h_bar_height = self.style.h_knob.min_height();

        let mut scroll_x = !self.disable_x && widget_width > area_width;
        let mut scroll_y = !self.disable_y && widget_height > area_height;

        // A visible scrollbar consumes viewport, which can force the other
        // axis to overflow as well.
        if scroll_y {
            area_width -= v_bar_width;
            if !scroll_x && !self.disable_x && widget_width > area_width {
                scroll_x = true;
            }
        }
        if scroll_x {
            area_height -= h_bar_height;
            if !scroll_y && !self.disable_y && widget_height > area_height {
                scroll_y = true;
                area_width -= v_bar_width;
            }
        }
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;

        self.widget_area.set(
            background_padding.left,
            background_padding.bottom + if scroll_x { h_bar_height } else { 0.0 },
            area_width,
            area_height,
        );

        // The child never shrinks below the viewport; a disabled axis pins it
        // to the full pane extent.
        widget_width = if self.disable_x {
            width
        } else {
            area_width.max(widget_width)
        };
        widget_height = if self.disable_y {
            height
        } else {
            area_height.max(widget_height)
        };
        if widget.size() != Size::new(widget_width, widget_height) {
            widget.set_size(Size::new(widget_width, widget_height));
        }

        self.max_x = (widget_width - area_width).max(0.0);
        self.max_y = (widget_height - area_height).max(0.0);

        // Stale offsets from before a resize must not survive the pass.
        self.amount_x = self.amount_x.clamp(0.0, self.max_x);
        self.amount_y = self.amount_y.clamp(0.0, self.max_y);

        self.area_width = area_width;
        self.area_height = area_height;

        let percent_x = if self.max_x <= 0.0 {
            0.0
        } else {
            self.amount_x / self.max_x
        };
        let percent_y = if self.max_y <= 0.0 {
            0.0
        } else {
            self.amount_y / self.max_y
        };

        if scroll_x {
            self.h_track_bounds.set(
                background_padding.left,
                background_padding.bottom,
                area_width,
                h_bar_height,
            );
            self.h_knob_bounds.width = self
                .style
                .h_knob
                .min_width()
                .max((self.h_track_bounds.width * area_width / widget_width).trunc());
            self.h_knob_bounds.height = h_bar_height;
            self.h_knob_bounds.x = self.h_track_bounds.x
                + ((self.h_track_bounds.width - self.h_knob_bounds.width) * percent_x).trunc();
            self.h_knob_bounds.y = self.h_track_bounds.y;
        }
        if scroll_y {
            self.v_track_bounds.set(
                width - background_padding.right - v_bar_width,
                height - background_padding.top - area_height,
                v_bar_width,
                area_height,
            );
            self.v_knob_bounds.width = v_bar_width;
            self.v_knob_bounds.height = self
                .style
                .v_knob
                .min_height()
                .max((self.v_track_bounds.height * area_height / widget_height).trunc());
            self.v_knob_bounds.x = self.v_track_bounds.x;
            // Percent 0 puts the knob at the top of the track.
            self.v_knob_bounds.y = self.v_track_bounds.y
                + ((self.v_track_bounds.height - self.v_knob_bounds.height) * (1.0 - percent_y))
                    .trunc();
        }

        log::trace!(
            "scroll pane layout: area {:.1}x{:.1}, scroll_x={}, scroll_y={}, max=({:.1}, {:.1})",
            area_width,
            area_height,
            scroll_x,
            scroll_y,
            self.max_x,
            self.max_y,
        );
    }

    fn handle_pointer_pressed(&mut self, position: Point, pointer: u32) -> bool {
        if pointer != 0 {
            return false;
        }
        self.validate();

        if self.scroll_x && self.h_track_bounds.contains(position) {
            if self.h_knob_bounds.contains(position) {
                log::debug!("horizontal knob drag start at x={:.1}", position.x);
                self.last_point = position;
                self.handle_position = self.h_knob_bounds.x;
                self.touch_scroll_h = true;
                return true;
            }
            // Click on the track outside the knob: page toward the click.
            if position.x < self.h_knob_bounds.x {
                self.set_scroll_percent_x((self.scroll_percent_x() - TRACK_CLICK_STEP).max(0.0));
            } else {
                self.set_scroll_percent_x((self.scroll_percent_x() + TRACK_CLICK_STEP).min(1.0));
            }
            return false;
        } else if self.scroll_y && self.v_track_bounds.contains(position) {
            if self.v_knob_bounds.contains(position) {
                log::debug!("vertical knob drag start at y={:.1}", position.y);
                self.last_point = position;
                self.handle_position = self.v_knob_bounds.y;
                self.touch_scroll_v = true;
                return true;
            }
            // Below the knob means further down the content, i.e. a larger
            // scroll percent.
            if position.y < self.v_knob_bounds.y {
                self.set_scroll_percent_y((self.scroll_percent_y() + TRACK_CLICK_STEP).min(1.0));
            } else {
                self.set_scroll_percent_y((self.scroll_percent_y() - TRACK_CLICK_STEP).max(0.0));
            }
            return false;
        }
        false
    }

    fn handle_pointer_dragged(&mut self, position: Point, pointer: u32) -> bool {
        if pointer != 0 {
            return false;
        }

        if self.touch_scroll_h {
            let delta = position.x - self.last_point.x;
            let mut knob_x = self.handle_position + delta;
            self.handle_position = knob_x;
            knob_x = knob_x.max(self.h_track_bounds.x);
            knob_x =
                knob_x.min(self.h_track_bounds.x + self.h_track_bounds.width - self.h_knob_bounds.width);
            let travel = self.h_track_bounds.width - self.h_knob_bounds.width;
            let percent = if travel > 0.0 {
                (knob_x - self.h_track_bounds.x) / travel
            } else {
                0.0
            };
            self.set_scroll_percent_x(percent);
            self.last_point = position;
            log::trace!("horizontal drag: delta={:.1}, percent={:.3}", delta, percent);
            return true;
        } else if self.touch_scroll_v {
            let delta = position.y - self.last_point.y;
            let mut knob_y = self.handle_position + delta;
            self.handle_position = knob_y;
            knob_y = knob_y.max(self.v_track_bounds.y);
            knob_y = knob_y
                .min(self.v_track_bounds.y + self.v_track_bounds.height - self.v_knob_bounds.height);
            let travel = self.v_track_bounds.height - self.v_knob_bounds.height;
            // Knob at the top of the track is percent 0.
            let percent = if travel > 0.0 {
                1.0 - ((knob_y - self.v_track_bounds.y) / travel)
            } else {
                0.0
            };
            self.set_scroll_percent_y(percent);
            self.last_point = position;
            log::trace!("vertical drag: delta={:.1}, percent={:.3}", delta, percent);
            return true;
        }
        false
    }

    fn handle_pointer_released(&mut self) -> bool {
        let was_dragging = self.touch_scroll_h || self.touch_scroll_v;
        self.touch_scroll_h = false;
        self.touch_scroll_v = false;
        was_dragging
    }
}

impl Widget for ScrollPane {
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
        if self.size != size {
            self.size = size;
            self.invalidate();
        }
    }

    fn draw(&mut self, batch: &mut Batch, scissors: &mut ScissorStack, camera: &Camera) {
        self.validate();

        // Re-derive knob positions from the current scroll percentages so the
        // knobs track scroll changes made since the last layout pass.
        let percent_x = self.scroll_percent_x();
        let percent_y = self.scroll_percent_y();
        if self.scroll_x {
            self.h_knob_bounds.x = self.h_track_bounds.x
                + ((self.h_track_bounds.width - self.h_knob_bounds.width) * percent_x).trunc();
        }
        if self.scroll_y {
            self.v_knob_bounds.y = self.v_track_bounds.y
                + ((self.v_track_bounds.height - self.v_knob_bounds.height) * (1.0 - percent_y))
                    .trunc();
        }

        let widget_area = self.widget_area;
        let area_width = self.area_width;
        let area_height = self.area_height;
        let (scroll_x, scroll_y) = (self.scroll_x, self.scroll_y);
        let position = self.position;
        let pane_size = self.size;

        let Some(widget) = self.widget.as_mut() else {
            return;
        };
        let widget_size = widget.size();

        let previous_transform = batch.transform();
        batch.set_transform(Point::new(
            previous_transform.x + position.x,
            previous_transform.y + position.y,
        ));

        // Offset the child by the scrolled-off overflow; a non-scrolling
        // vertical axis is pinned so the top of the child stays visible.
        let offset_y = widget_area.y
            - if scroll_y {
                ((widget_size.height - area_height) * (1.0 - percent_y)).trunc()
            } else {
                (widget_size.height - area_height).trunc()
            };
        let offset_x = widget_area.x
            - if scroll_x {
                ((widget_size.width - area_width) * percent_x).trunc()
            } else {
                0.0
            };
        widget.set_position(Point::new(offset_x, offset_y));

        if let Some(cullable) = widget.as_cullable() {
            self.widget_culling_area.set(
                -offset_x + widget_area.x,
                -offset_y + widget_area.y,
                area_width,
                area_height,
            );
            cullable.set_culling_area(self.widget_culling_area);
        }

        let scissor = calculate_scissors(camera, batch.transform(), widget_area);

        batch.set_color(self.color);
        if let Some(background) = &self.style.background {
            background.draw(batch, 0.0, 0.0, pane_size.width, pane_size.height);
        }
        batch.flush();

        scissors.scoped(batch, scissor, |scissors, batch| {
            widget.draw(batch, scissors, camera);
        });

        // Scrollbar chrome goes on top, unclipped.
        batch.set_color(self.color);
        if scroll_x {
            let track = self.h_track_bounds;
            let knob = self.h_knob_bounds;
            self.style
                .h_track
                .draw(batch, track.x, track.y, track.width, track.height);
            self.style
                .h_knob
                .draw(batch, knob.x, knob.y, knob.width, knob.height);
        }
        if scroll_y {
            let track = self.v_track_bounds;
            let knob = self.v_knob_bounds;
            self.style
                .v_track
                .draw(batch, track.x, track.y, track.width, track.height);
            self.style
                .v_knob
                .draw(batch, knob.x, knob.y, knob.width, knob.height);
        }

        batch.set_transform(previous_transform);
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            // Any button counts; only the pointer index is filtered.
            Event::PointerPressed {
                position, pointer, ..
            } => self.handle_pointer_pressed(*position, *pointer),
            Event::PointerDragged { position, pointer } => {
                self.handle_pointer_dragged(*position, *pointer)
            }
            Event::PointerReleased { .. } => self.handle_pointer_released(),
        }
    }

    fn preferred_size(&self) -> Option<Size> {
        match self.widget.as_ref().and_then(|w| w.preferred_size()) {
            Some(size) => Some(size),
            None => Some(Size::new(DEFAULT_PANE_SIZE, DEFAULT_PANE_SIZE)),
        }
    }
}
