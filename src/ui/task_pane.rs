use crate::app::AppState;
use crate::domain::{Task, Theme, UiMode};
use crate::ui::styles::{
    card_border_style, check_style, done_task_style, muted_style, task_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Render one slot: the task in it, or a dashed placeholder
pub fn render_slot(f: &mut Frame, app: &AppState, slot: usize, area: Rect) {
    let theme = app.theme();

    let paragraph = match app.tracker.tasks().get(slot) {
        Some(task) => {
            let selected = app.ui_mode == UiMode::Normal && app.selected_index == slot;
            Paragraph::new(task_line(task, slot, theme)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(card_border_style(theme, selected)),
            )
        }
        None => Paragraph::new(Line::styled(placeholder_label(slot), muted_style(theme)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(muted_style(theme)),
            ),
    };

    f.render_widget(paragraph, area);
}

/// Text shown in an empty slot
pub fn placeholder_label(slot: usize) -> String {
    format!("Task {}", slot + 1)
}

fn task_line(task: &Task, slot: usize, theme: Theme) -> Line<'_> {
    let (mark, mark_style) = if task.done {
        (" ✓ ", check_style())
    } else {
        ("( )", muted_style(theme))
    };
    let text_style = if task.done {
        done_task_style(theme)
    } else {
        task_style(theme)
    };

    Line::from(vec![
        Span::styled(format!("{} ", slot + 1), muted_style(theme)),
        Span::styled(mark, mark_style),
        Span::raw(" "),
        Span::styled(task.text.as_str(), text_style),
    ])
}
