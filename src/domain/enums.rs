/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    ConfirmReset, // Waiting for y/n before clearing the day
}

/// Colour scheme, persisted as the dark-mode flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Glyph for the theme toggle: the mode a press switches to
    pub fn toggle_symbol(&self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }
}
