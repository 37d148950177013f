use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::DashboardState;
use crate::theme::Palette;

pub fn render(state: &DashboardState, frame: &mut Frame, area: Rect, palette: &Palette) {
    let Some(details) = &state.details else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    for section in &details.sections {
        lines.push(Line::from(Span::styled(section.heading, palette.title())));
        for (label, value) in &section.fields {
            if value.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {label}"), palette.dim())));
                continue;
            }
            let style = if matches!(label.as_str(), "Status" | "State" | "Provisioning State") {
                palette.status(value)
            } else {
                palette.base()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {label:<20}"), palette.dim()),
                Span::styled(value.as_str(), style),
            ]));
        }
        lines.push(Line::default());
    }

    if details.kind == azdash_core::model::ResourceKind::VirtualMachine {
        let enabled = |on: bool| if on { palette.base() } else { palette.dim() };
        lines.push(Line::from(Span::styled("Actions", palette.title())));
        lines.push(Line::from(vec![
            Span::styled("  [s] Start VM  ", enabled(details.can_start)),
            Span::styled("[x] Stop VM  ", enabled(details.can_stop)),
            Span::styled("[R] Restart VM", palette.base()),
        ]));
    }

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ({}) ", details.title, details.kind.tag()),
            palette.title(),
        ))
        .borders(Borders::ALL)
        .border_style(palette.border(true));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
