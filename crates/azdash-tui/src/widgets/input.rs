use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::theme::Palette;

/// Single-line text field. `cursor` counts chars, not bytes.
pub struct TextInput {
    pub content: String,
    pub cursor: usize,
    pub label: String,
    pub placeholder: String,
    pub focused: bool,
}

pub enum InputAction {
    None,
    Changed,
    Submit,
    Cancel,
}

impl TextInput {
    pub fn new(label: &str) -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            label: label.to_string(),
            placeholder: String::new(),
            focused: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    fn byte_offset(&self, cursor: usize) -> usize {
        self.content
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        match key.code {
            KeyCode::Enter => InputAction::Submit,
            KeyCode::Esc => InputAction::Cancel,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                InputAction::Changed
            }
            KeyCode::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.content.insert(at, c);
                self.cursor += 1;
                InputAction::Changed
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return InputAction::None;
                }
                self.cursor -= 1;
                let at = self.byte_offset(self.cursor);
                self.content.remove(at);
                InputAction::Changed
            }
            KeyCode::Delete => {
                if self.cursor >= self.char_len() {
                    return InputAction::None;
                }
                let at = self.byte_offset(self.cursor);
                self.content.remove(at);
                InputAction::Changed
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                InputAction::None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                InputAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                InputAction::None
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                InputAction::None
            }
            _ => InputAction::None,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        let block = Block::default()
            .title(self.label.as_str())
            .borders(Borders::ALL)
            .border_style(palette.border(self.focused));

        let paragraph = if self.content.is_empty() && !self.focused {
            Paragraph::new(self.placeholder.as_str()).style(palette.dim())
        } else {
            Paragraph::new(self.content.as_str()).style(palette.base())
        };
        paragraph.block(block).render(area, buf);

        if self.focused && area.width > 2 && area.height > 2 {
            let before = &self.content[..self.byte_offset(self.cursor)];
            let cursor_x = area.x + 1 + (before.width() as u16).min(area.width.saturating_sub(3));
            let cursor_y = area.y + 1;
            if let Some(cell) = buf.cell_mut(Position::new(cursor_x, cursor_y)) {
                cell.set_style(Style::default().bg(palette.foreground).fg(palette.background));
            }
        }
    }
}
