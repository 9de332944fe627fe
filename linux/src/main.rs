/// GTK4 window demo: one window, one button, the button closes the window.
///
/// Requires: gtk4 development libraries
///   Fedora: sudo dnf install gtk4-devel
///   Ubuntu: sudo apt install libgtk-4-dev
///   Arch:   sudo pacman -S gtk4

mod ui;

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use libdemo::config::Config;
use libdemo::window::WindowLayout;

fn main() -> glib::ExitCode {
    env_logger::init();

    let config = Config::load().validated();
    let layout = WindowLayout::from_config(&config);

    let app = gtk::Application::builder()
        .application_id(config.app.id.as_str())
        .build();
    ui::track_windows(&app);
    app.connect_activate(move |app| {
        ui::build_window(app, &layout).present();
    });

    let status = app.run();
    log::info!("Run loop exited with {:?}", status);
    status
}
