/// Window model: what the demo window contains and how it reacts to a click,
/// independent of the toolkit that draws it.

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub top: i32,
    pub bottom: i32,
    pub start: i32,
    pub end: i32,
}

impl Margins {
    pub fn uniform(m: i32) -> Self {
        Self { top: m, bottom: m, start: m, end: m }
    }
}

/// Window with one padded vertical box holding one button.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowLayout {
    pub title: String,
    pub default_width: i32,
    pub default_height: i32,
    pub spacing: i32,
    pub margins: Margins,
    pub button_label: String,
}

impl WindowLayout {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            title: cfg.window.title.clone(),
            default_width: cfg.window.width,
            default_height: cfg.window.height,
            spacing: cfg.window.spacing,
            margins: Margins::uniform(cfg.window.margin),
            button_label: cfg.button.label.clone(),
        }
    }
}

impl Default for WindowLayout {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Open,
    Closed,
}

impl WindowState {
    /// The button closes the window. Returns true if the state changed.
    pub fn click_button(&mut self) -> bool {
        match self {
            WindowState::Open => {
                *self = WindowState::Closed;
                true
            }
            WindowState::Closed => false,
        }
    }

    pub fn is_open(self) -> bool {
        self == WindowState::Open
    }
}

/// Exit status once a window has closed: the run loop ends with 0 when no
/// windows remain, otherwise it keeps running.
pub fn exit_code_after_close(open_windows: usize) -> Option<i32> {
    (open_windows == 0).then_some(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = WindowLayout::default();
        assert_eq!(layout.title, "Simple GTK4 App");
        assert_eq!((layout.default_width, layout.default_height), (300, 200));
        assert_eq!(layout.spacing, 12);
        assert_eq!(layout.margins, Margins::uniform(12));
        assert_eq!(layout.button_label, "Hello GTK4!");
    }

    #[test]
    fn test_layout_follows_config() {
        let cfg = Config::from_str(r#"
            [window]
            title = "T"
            margin = 3
            spacing = 5

            [button]
            label = "Bye"
        "#);
        let layout = WindowLayout::from_config(&cfg);
        assert_eq!(layout.title, "T");
        assert_eq!(layout.margins, Margins { top: 3, bottom: 3, start: 3, end: 3 });
        assert_eq!(layout.spacing, 5);
        assert_eq!(layout.button_label, "Bye");
    }

    #[test]
    fn test_click_closes_window() {
        let mut state = WindowState::default();
        assert!(state.is_open());
        assert!(state.click_button());
        assert_eq!(state, WindowState::Closed);
    }

    #[test]
    fn test_click_on_closed_window_is_noop() {
        let mut state = WindowState::Closed;
        assert!(!state.click_button());
        assert!(!state.is_open());
    }

    #[test]
    fn test_last_window_ends_run_loop() {
        assert_eq!(exit_code_after_close(0), Some(0));
        assert_eq!(exit_code_after_close(1), None);
    }

    #[test]
    fn test_relaunch_is_identical() {
        let first = WindowLayout::from_config(&Config::default().validated());
        let mut state = WindowState::default();
        state.click_button();
        let second = WindowLayout::from_config(&Config::default().validated());
        assert_eq!(first, second);
        assert!(WindowState::default().is_open());
    }
}
