use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme::Palette;

/// Drop-down stand-in: a fixed label cycling through options. The empty option means "All".
pub struct ChoiceCycle {
    pub label: String,
    options: Vec<String>,
    index: usize,
}

impl ChoiceCycle {
    /// `options` should not include the empty "All" entry; it is prepended.
    pub fn new(label: &str, options: Vec<String>) -> Self {
        let mut all = vec![String::new()];
        all.extend(options);
        Self {
            label: label.to_string(),
            options: all,
            index: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.options[self.index]
    }

    pub fn next(&mut self) -> &str {
        self.index = (self.index + 1) % self.options.len();
        self.current()
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Replace the options. The current value is never changed here: when it is no
    /// longer offered it stays selected as a trailing extra entry.
    pub fn set_options(&mut self, options: Vec<String>) {
        let current = self.current().to_string();
        let mut all = vec![String::new()];
        all.extend(options);
        self.index = match all.iter().position(|o| *o == current) {
            Some(i) => i,
            None => {
                all.push(current);
                all.len() - 1
            }
        };
        self.options = all;
    }

    pub fn display(&self) -> &str {
        if self.current().is_empty() {
            "All"
        } else {
            self.current()
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette, hotkey: char) {
        let block = Block::default()
            .title(format!("{} [{hotkey}]", self.label))
            .borders(Borders::ALL)
            .border_style(palette.border(!self.current().is_empty()));
        let style = if self.current().is_empty() {
            palette.dim()
        } else {
            palette.base()
        };
        Paragraph::new(self.display())
            .style(style)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_all_and_options() {
        let mut choice = ChoiceCycle::new(" Type ", vec!["vm".into(), "storage".into()]);
        assert_eq!(choice.display(), "All");
        assert_eq!(choice.next(), "vm");
        assert_eq!(choice.next(), "storage");
        assert_eq!(choice.next(), "");
    }

    #[test]
    fn set_options_keeps_current_value() {
        let mut choice = ChoiceCycle::new(" Location ", vec!["eastus".into(), "westus".into()]);
        choice.next();
        choice.next();
        choice.set_options(vec!["westus".into()]);
        assert_eq!(choice.current(), "westus");

        choice.set_options(vec!["northeurope".into()]);
        assert_eq!(choice.current(), "westus");
        assert_eq!(choice.next(), "");
        assert_eq!(choice.next(), "northeurope");
    }

    #[test]
    fn set_options_with_all_selected_stays_on_all() {
        let mut choice = ChoiceCycle::new(" Location ", vec!["eastus".into()]);
        choice.set_options(vec!["westus".into()]);
        assert_eq!(choice.current(), "");
        assert_eq!(choice.next(), "westus");
        assert_eq!(choice.next(), "");
    }
}
