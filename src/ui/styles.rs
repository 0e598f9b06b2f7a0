use crate::domain::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Confetti colours, emerald shades
pub const CONFETTI_COLORS: [Color; 3] = [
    Color::Rgb(16, 185, 129),
    Color::Rgb(52, 211, 153),
    Color::Rgb(110, 231, 183),
];

const EMERALD: Color = Color::Rgb(5, 150, 105);
const EMERALD_LIGHT: Color = Color::Rgb(52, 211, 153);

/// Screen background and default text
pub fn base_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().fg(Color::Rgb(31, 41, 55)).bg(Color::Rgb(236, 253, 245)),
        Theme::Dark => Style::default().fg(Color::Rgb(229, 231, 235)).bg(Color::Rgb(17, 24, 39)),
    }
}

/// Title and streak number
pub fn accent_style(theme: Theme) -> Style {
    let fg = match theme {
        Theme::Light => EMERALD,
        Theme::Dark => EMERALD_LIGHT,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

/// Secondary text ("day streak", placeholders)
pub fn muted_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().fg(Color::Gray),
        Theme::Dark => Style::default().fg(Color::DarkGray),
    }
}

/// Border of a filled slot
pub fn card_border_style(theme: Theme, selected: bool) -> Style {
    if selected {
        return accent_style(theme);
    }
    match theme {
        Theme::Light => Style::default().fg(Color::Gray),
        Theme::Dark => Style::default().fg(Color::DarkGray),
    }
}

/// Text of an open task
pub fn task_style(theme: Theme) -> Style {
    Style::default().fg(base_style(theme).fg.unwrap_or(Color::Reset))
}

/// Text of a completed task
pub fn done_task_style(theme: Theme) -> Style {
    muted_style(theme).add_modifier(Modifier::CROSSED_OUT)
}

/// Check mark of a completed task
pub fn check_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Rgb(16, 185, 129))
        .add_modifier(Modifier::BOLD)
}

/// Modal background style
pub fn modal_bg_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().bg(Color::White).fg(Color::Black),
        Theme::Dark => Style::default().bg(Color::Rgb(31, 41, 55)).fg(Color::White),
    }
}

/// Keybinding hint style
pub fn hint_style(theme: Theme) -> Style {
    muted_style(theme)
}

/// Status line style
pub fn status_style(theme: Theme) -> Style {
    accent_style(theme).remove_modifier(Modifier::BOLD)
}
