use crate::app::AppState;
use crate::ui::styles::{accent_style, muted_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the title row with the theme glyph on the right
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(12)])
        .split(area);

    let title = Paragraph::new(Line::styled("Done in 3", accent_style(theme)));
    f.render_widget(title, chunks[0]);

    let controls = Paragraph::new(Line::from(vec![
        Span::styled(theme.toggle_symbol(), accent_style(theme)),
        Span::styled("  ↺", muted_style(theme)),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(controls, chunks[1]);
}

/// Render the streak count with its caption
pub fn render_streak(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme();
    let lines = vec![
        Line::styled(app.tracker.streak().to_string(), accent_style(theme)),
        Line::styled("day streak", muted_style(theme)),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
