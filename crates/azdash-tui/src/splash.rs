use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::dashboard::DashboardState;

pub fn is_quit_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn render_loading(state: &DashboardState, frame: &mut Frame, area: Rect) {
    let palette = state.palette();
    frame.render_widget(Block::default().style(palette.base()), area);

    let dots = ".".repeat(state.tick / 5 % 4);
    let lines = vec![
        Line::from(Span::styled("Azure Resource Dashboard", palette.title())),
        Line::default(),
        Line::from(Span::styled(format!("Loading Azure resources{dots}"), palette.base())),
        Line::from(Span::styled(state.endpoint.as_str(), palette.dim())),
    ];
    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(true)),
    );
    frame.render_widget(panel, centered(area, 60, 6));
}

pub fn render_error(state: &DashboardState, message: &str, frame: &mut Frame, area: Rect) {
    let palette = state.palette();
    frame.render_widget(Block::default().style(palette.base()), area);

    let lines = vec![
        Line::from(Span::styled("Unable to load the dashboard", palette.error())),
        Line::default(),
        Line::from(Span::styled(message, palette.base())),
        Line::default(),
        Line::from(Span::styled(state.endpoint.as_str(), palette.dim())),
        Line::from(Span::styled("[q] Quit", palette.dim())),
    ];
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(" Error ", palette.error()))
                .borders(Borders::ALL)
                .border_style(palette.error()),
        );
    frame.render_widget(panel, centered(area, 70, 10));
}
