use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use azdash_core::card::ResourceCard;

use super::{DashboardState, Focus};
use crate::theme::Palette;

pub fn render(state: &DashboardState, frame: &mut Frame, area: Rect, palette: &Palette) {
    let (visible, total) = state.view.visible_count();
    let block = Block::default()
        .title(Span::styled(format!(" Resources ({visible}/{total}) "), palette.title()))
        .borders(Borders::ALL)
        .border_style(palette.border(state.focus == Focus::Resources));

    if visible == 0 {
        let message = if total == 0 {
            "  No resources found"
        } else {
            "  No resources match the current filters"
        };
        let empty = Paragraph::new(message).style(palette.dim()).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .view
        .visible_cards()
        .map(|card| card_item(card, palette))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(palette.selected())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn card_item<'a>(card: &'a ResourceCard, palette: &Palette) -> ListItem<'a> {
    let title = Line::from(vec![
        Span::styled(format!("[{:>13}] ", card.kind.tag()), Style::default().fg(palette.accent)),
        Span::styled(card.name.as_str(), palette.base().add_modifier(Modifier::BOLD)),
        Span::styled(
            if card.location.is_empty() {
                String::new()
            } else {
                format!("  {}", card.location)
            },
            palette.dim(),
        ),
    ]);

    let mut details = vec![Span::raw("                ")];
    for (i, (label, value)) in card.lines.iter().enumerate() {
        if i > 0 {
            details.push(Span::styled("  ", palette.dim()));
        }
        details.push(Span::styled(format!("{label}: "), palette.dim()));
        let style = if matches!(*label, "Status" | "State") {
            palette.status(value)
        } else {
            palette.base()
        };
        details.push(Span::styled(value.as_str(), style));
    }

    ListItem::new(vec![title, Line::from(details)])
}
