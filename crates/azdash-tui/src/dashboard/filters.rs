use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::DashboardState;
use crate::theme::Palette;

pub fn render(state: &DashboardState, frame: &mut Frame, area: Rect, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(24),
            Constraint::Length(18),
            Constraint::Length(22),
            Constraint::Length(30),
        ])
        .split(area);

    let buf = frame.buffer_mut();
    state.search.render(chunks[0], buf, palette);
    state.type_choice.render(chunks[1], buf, palette, 't');
    state.location_choice.render(chunks[2], buf, palette, 'l');

    let (visible, total) = state.view.visible_count();
    let info = Paragraph::new(format!("Showing {visible} of {total} resources"))
        .style(palette.dim())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        );
    frame.render_widget(info, chunks[3]);
}
