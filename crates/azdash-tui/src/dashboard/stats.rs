use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::DashboardState;
use crate::theme::Palette;

pub fn render(state: &DashboardState, frame: &mut Frame, area: Rect, palette: &Palette) {
    let stats = state.view.stats();
    let tiles = [
        ("Virtual Machines", stats.virtual_machines.to_string()),
        ("Storage Accounts", stats.storage_accounts.to_string()),
        ("Web Apps", stats.web_apps.to_string()),
        ("Resource Groups", stats.resource_groups.to_string()),
        ("Est. Cost", stats.cost_display()),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, tiles.len() as u32); 5])
        .split(area);

    for ((label, value), chunk) in tiles.into_iter().zip(chunks.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(false))
            .title(Span::styled(format!(" {label} "), palette.dim()));
        let tile = Paragraph::new(Span::styled(value, palette.title()))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(tile, *chunk);
    }
}
