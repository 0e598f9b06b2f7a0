pub mod header_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod styles;
pub mod task_pane;

use crate::app::AppState;
use header_pane::{render_header, render_streak};
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::{render_celebration, render_confirm_reset};
use ratatui::{
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};
use styles::{base_style, status_style};
use task_pane::render_slot;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let theme = app.theme();

    // Paint the background for the active theme
    f.render_widget(Block::default().style(base_style(theme)), size);

    let layout = create_layout(size);

    render_header(f, app, layout.header_area);
    render_streak(f, app, layout.streak_area);
    for (slot, area) in layout.slot_areas.iter().enumerate() {
        render_slot(f, app, slot, *area);
    }
    render_input_form(f, app, layout.input_area);

    if let Some(status) = &app.status {
        f.render_widget(
            Paragraph::new(Line::styled(status.as_str(), status_style(theme))),
            layout.status_area,
        );
    }
    render_keybindings(f, app.ui_mode, theme, layout.keybindings_area);

    render_confirm_reset(f, app, size);
    render_celebration(f, app, size);
}
