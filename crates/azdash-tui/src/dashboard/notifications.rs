use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use azdash_core::notification::NotificationLevel;

use super::DashboardState;
use crate::theme::Palette;

const MAX_SHOWN: usize = 3;

/// Toasts stacked in the bottom-right corner of `area`, newest at the bottom.
pub fn render(state: &DashboardState, frame: &mut Frame, area: Rect, palette: &Palette) {
    let all: Vec<_> = state.notifications.iter().collect();
    let shown = &all[all.len().saturating_sub(MAX_SHOWN)..];
    if shown.is_empty() {
        return;
    }

    let width = area.width.min(60);
    let height = (shown.len() as u16 + 2).min(area.height);
    let toast_area = Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    };

    let lines: Vec<Line> = shown
        .iter()
        .map(|n| {
            let icon = match n.level {
                NotificationLevel::Success => "OK ",
                NotificationLevel::Error => "ERR",
                NotificationLevel::Info => " i ",
            };
            Line::from(vec![
                Span::styled(format!("[{icon}] "), palette.notification(n.level)),
                Span::styled(n.message.as_str(), palette.base()),
            ])
        })
        .collect();

    frame.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(true))
        .style(palette.base());
    frame.render_widget(Paragraph::new(lines).block(block), toast_area);
}
