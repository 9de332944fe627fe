/// Widget tree for the demo window, built from the toolkit-free layout.

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use libdemo::window::{exit_code_after_close, WindowLayout, WindowState};
use std::cell::Cell;
use std::rc::Rc;

/// Apply a button click to the window state; true when the window must close.
fn handle_click(state: &Cell<WindowState>) -> bool {
    let mut current = state.get();
    let changed = current.click_button();
    state.set(current);
    changed
}

pub fn build_window(app: &gtk::Application, layout: &WindowLayout) -> gtk::ApplicationWindow {
    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title(layout.title.as_str())
        .default_width(layout.default_width)
        .default_height(layout.default_height)
        .build();

    let container = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(layout.spacing)
        .margin_top(layout.margins.top)
        .margin_bottom(layout.margins.bottom)
        .margin_start(layout.margins.start)
        .margin_end(layout.margins.end)
        .build();
    window.set_child(Some(&container));

    let state = Rc::new(Cell::new(WindowState::Open));
    let button = gtk::Button::with_label(&layout.button_label);
    let weak = window.downgrade();
    button.connect_clicked(move |_| {
        if !handle_click(&state) {
            return;
        }
        if let Some(window) = weak.upgrade() {
            window.close();
        }
    });
    container.append(&button);

    window.connect_close_request(|w| {
        log::debug!("Closing window {:?}", w.title());
        glib::Propagation::Proceed
    });

    log::debug!("Built window {:?} ({}x{})", layout.title, layout.default_width, layout.default_height);
    window
}

/// Log when the last window goes away and the run loop is about to end.
pub fn track_windows(app: &gtk::Application) {
    app.connect_window_removed(|app, _| {
        let remaining = app.windows().len();
        match exit_code_after_close(remaining) {
            Some(code) => log::info!("Last window closed, run loop ends with {}", code),
            None => log::debug!("{} window(s) still open", remaining),
        }
    });
}
