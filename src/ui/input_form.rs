use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{accent_style, muted_style, task_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "What will you do today?";

/// Render the input line; hidden once all slots are filled
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if app.tracker.tasks().is_full() {
        return;
    }

    let theme = app.theme();
    let editing = app.ui_mode == UiMode::AddingTask;

    let line = if editing {
        Line::from(vec![
            Span::styled("+ ", accent_style(theme)),
            Span::styled(app.input.as_str(), task_style(theme)),
            Span::styled("█", accent_style(theme)), // Cursor
        ])
    } else {
        Line::from(vec![
            Span::styled("+ ", muted_style(theme)),
            Span::styled(PLACEHOLDER, muted_style(theme)),
        ])
    };

    let border_style = if editing {
        accent_style(theme)
    } else {
        muted_style(theme)
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    );
    f.render_widget(paragraph, area);
}
