use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{accent_style, modal_bg_style, CONFETTI_COLORS},
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Question asked before the day is cleared
pub const RESET_PROMPT: &str = "Start fresh tomorrow?";

const CONFETTI_GLYPHS: [char; 6] = ['*', '•', '+', '✦', '◆', '·'];
const PARTICLE_COUNT: usize = 100;

/// Render the reset confirmation modal
pub fn render_confirm_reset(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode != UiMode::ConfirmReset {
        return;
    }
    let theme = app.theme();
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw(RESET_PROMPT),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[y]", accent_style(theme)),
            Span::raw(" Yes  "),
            Span::styled("[n]", accent_style(theme)),
            Span::raw(" No"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(" Reset ", accent_style(theme)))
                .style(modal_bg_style(theme)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// A single confetti particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Particle {
    pub x: u16,
    pub y: u16,
    pub glyph: char,
    pub color: Color,
}

/// Place confetti for an animation frame.
///
/// Particles start from the middle of the area and drift outwards and down
/// as frames advance; the layout is deterministic per frame.
pub fn confetti(area: Rect, frame: u32) -> Vec<Particle> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let cx = i32::from(area.width) / 2;
    let cy = i32::from(area.height) / 3;
    let spread = (frame % 12) as i32 + 1;

    (0..PARTICLE_COUNT)
        .filter_map(|i| {
            let seed = scramble(i as u32);
            let dx = (seed % 17) as i32 - 8;
            let dy = ((seed >> 8) % 9) as i32 - 4;
            let fall = ((seed >> 16) % 3) as i32;

            let x = cx + dx * spread / 2;
            let y = cy + dy * spread / 4 + fall * spread / 3;
            if x < 0 || y < 0 || x >= i32::from(area.width) || y >= i32::from(area.height) {
                return None;
            }

            Some(Particle {
                x: area.x + x as u16,
                y: area.y + y as u16,
                glyph: CONFETTI_GLYPHS[(seed as usize >> 4) % CONFETTI_GLYPHS.len()],
                color: CONFETTI_COLORS[(seed as usize >> 12) % CONFETTI_COLORS.len()],
            })
        })
        .collect()
}

fn scramble(n: u32) -> u32 {
    let mut x = n.wrapping_mul(0x9E37_79B9).wrapping_add(0x7F4A_7C15);
    x ^= x >> 15;
    x = x.wrapping_mul(0x2C1B_3C6D);
    x ^ (x >> 12)
}

/// Draw confetti over the whole screen while celebrating
pub fn render_celebration(f: &mut Frame, app: &AppState, area: Rect) {
    if !app.tracker.is_celebrating() {
        return;
    }
    draw_particles(f.buffer_mut(), &confetti(area, app.animation_frame));

    let banner = Paragraph::new(Line::styled("All three done!", accent_style(app.theme())))
        .alignment(Alignment::Center);
    let banner_area = Rect::new(area.x, area.y + area.height.saturating_sub(3), area.width, area.height.min(1));
    f.render_widget(banner, banner_area);
}

fn draw_particles(buf: &mut Buffer, particles: &[Particle]) {
    for p in particles {
        buf.get_mut(p.x, p.y)
            .set_char(p.glyph)
            .set_style(Style::default().fg(p.color));
    }
}
