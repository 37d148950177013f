use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{AuthIndicator, DashboardState};
use crate::theme::Palette;

const FRAMES: &[&str] = &[
    "\u{280b}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283c}", "\u{2834}", "\u{2826}",
    "\u{2827}", "\u{2807}", "\u{280f}",
];

pub fn render(state: &DashboardState, frame: &mut Frame, area: Rect, palette: &Palette) {
    let (auth_label, auth_style) = match state.auth {
        AuthIndicator::Checking => ("Checking...", palette.dim()),
        AuthIndicator::Connected => ("Connected to Azure", palette.success()),
        AuthIndicator::NotAuthenticated => ("Not Authenticated", palette.error()),
        AuthIndicator::Error => ("Error", palette.error()),
    };

    let activity = if state.in_flight > 0 {
        format!("{} ", FRAMES[state.tick % FRAMES.len()])
    } else {
        "  ".to_string()
    };

    let subscription = state
        .view
        .snapshot()
        .and_then(|s| s.subscription.as_ref())
        .and_then(|s| s.name.clone().or_else(|| s.id.clone()))
        .map(|s| format!("Subscription: {s}"))
        .unwrap_or_default();

    let refreshed = state
        .last_refresh
        .map(|t| format!("Updated {}", t.format("%H:%M:%S")))
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(format!(" {activity}"), Style::default().fg(palette.accent)),
        Span::styled(auth_label, auth_style),
        Span::raw("  "),
        Span::styled(state.endpoint.as_str(), palette.dim()),
        Span::raw("  "),
        Span::styled(subscription, palette.dim()),
        Span::raw("  "),
        Span::styled(refreshed, palette.dim()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(false))
        .title(Span::styled(" Azure Resource Dashboard ", palette.title()));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
