use crate::domain::{Theme, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hints for the current mode
pub fn hints(mode: UiMode) -> &'static str {
    match mode {
        UiMode::Normal => " ↑/↓ select  Enter toggle  1-3 slot  a add  r reset  t theme  q quit",
        UiMode::AddingTask => " Enter add  Esc cancel",
        UiMode::ConfirmReset => " y start fresh  n keep going",
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, theme: Theme, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints(mode))).style(hint_style(theme));
    f.render_widget(paragraph, area);
}
