use crate::app::AppState;
use crate::domain::UiMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events, returning true when the app should quit
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_adding_mode(app, key),
        UiMode::ConfirmReset => handle_confirm_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Toggle done
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char(c @ '1'..='3') => {
            let slot = c as usize - '1' as usize;
            app.toggle_slot(slot);
        }

        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.request_reset(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_theme(),

        KeyCode::Char('q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}

/// Handle keys while typing a new task
fn handle_adding_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_add_char(c),
        _ => {}
    }
    false
}

/// Handle the y/n answer to the reset question
fn handle_confirm_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_reset(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.answer_reset(false),
        _ => {}
    }
    false
}
