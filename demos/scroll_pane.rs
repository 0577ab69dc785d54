//! Headless scroll pane demo.
//!
//! Builds a scroll pane around an oversized panel, simulates a knob drag, and
//! prints the recorded draw commands. Run with `RUST_LOG=debug` to see the
//! pane's event handling.

use std::rc::Rc;

use stage_ui::prelude::*;

fn main() {
    env_logger::init();

    let background = FillDrawable::new(Color::rgb(0.12, 0.12, 0.14), 0.0, 0.0)
        .with_padding(Padding::uniform(4.0))
        .shared();
    let track = FillDrawable::new(Color::rgb(0.2, 0.2, 0.22), 12.0, 12.0);
    let knob = FillDrawable::new(Color::rgb(0.45, 0.45, 0.5), 12.0, 12.0);
    let style = Rc::new(
        ScrollPaneStyle::new(
            Some(background),
            track.clone().shared(),
            knob.clone().shared(),
            track.shared(),
            knob.shared(),
        )
        .expect("knob drawables have positive min sizes"),
    );

    let content = Panel::new()
        .background(FillDrawable::new(Color::rgb(0.3, 0.5, 0.3), 0.0, 0.0).shared())
        .preferred_size(600.0, 400.0);

    let mut pane = ScrollPane::new(Some(Box::new(content)), style);
    pane.set_size(Size::new(240.0, 180.0));
    pane.layout();

    println!("viewport: {:?}", pane.widget_area());
    println!(
        "scrollbars: x={}, y={}, max=({}, {})",
        pane.is_scroll_x(),
        pane.is_scroll_y(),
        pane.max_scroll_x(),
        pane.max_scroll_y()
    );

    // Drag the horizontal knob 40 pixels to the right.
    let knob = pane.h_knob_bounds();
    let grab = Point::new(knob.x + knob.width / 2.0, knob.y + knob.height / 2.0);
    pane.handle_event(&Event::PointerPressed {
        position: grab,
        pointer: 0,
        button: PointerButton::Left,
    });
    pane.handle_event(&Event::PointerDragged {
        position: Point::new(grab.x + 40.0, grab.y),
        pointer: 0,
    });
    pane.handle_event(&Event::PointerReleased {
        position: Point::new(grab.x + 40.0, grab.y),
        pointer: 0,
        button: PointerButton::Left,
    });
    println!(
        "after drag: scroll=({:.1}, {:.1}), percent=({:.3}, {:.3})",
        pane.scroll_x(),
        pane.scroll_y(),
        pane.scroll_percent_x(),
        pane.scroll_percent_y()
    );

    // Bring a far-away content rectangle into view.
    pane.scroll_to(500.0, 300.0, 50.0, 50.0);
    pane.layout();
    println!(
        "after scroll_to: scroll=({:.1}, {:.1})",
        pane.scroll_x(),
        pane.scroll_y()
    );

    let mut batch = Batch::new();
    let mut scissors = ScissorStack::new();
    let camera = Camera::new(800.0, 600.0);
    pane.draw(&mut batch, &mut scissors, &camera);

    println!("draw commands:");
    for command in batch.commands() {
        println!("  {command:?}");
    }
}
