use crate::domain::MAX_TASKS;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one task slot, borders included
pub const SLOT_HEIGHT: u16 = 3;

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub streak_area: Rect,
    pub slot_areas: Vec<Rect>,
    pub input_area: Rect,
    pub status_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Header: title and theme glyph
/// - Streak: count and caption
/// - Three task slots
/// - Input line, status line, keybindings bar
///
/// The column is capped at 60 cells and centered.
pub fn create_layout(area: Rect) -> MainLayout {
    let column = centered_column(area, 60);

    let mut constraints = vec![
        Constraint::Length(2), // Header
        Constraint::Length(3), // Streak
    ];
    constraints.extend((0..MAX_TASKS).map(|_| Constraint::Length(SLOT_HEIGHT)));
    constraints.extend([
        Constraint::Min(0),    // Spacer
        Constraint::Length(3), // Input
        Constraint::Length(1), // Status
        Constraint::Length(1), // Keybindings
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(column);

    let slots_end = 2 + MAX_TASKS;
    MainLayout {
        header_area: chunks[0],
        streak_area: chunks[1],
        slot_areas: chunks[2..slots_end].to_vec(),
        input_area: chunks[slots_end + 1],
        status_area: chunks[slots_end + 2],
        keybindings_area: chunks[slots_end + 3],
    }
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Create centered modal area
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(7),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = create_layout(area);

        assert_eq!(layout.slot_areas.len(), MAX_TASKS);
        assert!(layout.slot_areas.iter().all(|r| r.height == SLOT_HEIGHT));
        assert_eq!(layout.header_area.width, 60);
        assert_eq!(layout.header_area.x, 20);
        assert_eq!(layout.input_area.height, 3);
        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.keybindings_area.y, 29);
    }

    #[test]
    fn test_narrow_terminal_uses_full_width() {
        let layout = create_layout(Rect::new(0, 0, 40, 30));
        assert_eq!(layout.header_area.width, 40);
        assert_eq!(layout.header_area.x, 0);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 7);
    }
}
