use ratatui::style::{Color, Modifier, Style};

use azdash_core::notification::NotificationLevel;
use azdash_core::theme::ThemePreference;

pub const AZURE_BLUE: Color = Color::Rgb(0, 120, 212);
pub const SUCCESS_GREEN: Color = Color::Rgb(16, 124, 16);
pub const ERROR_RED: Color = Color::Rgb(209, 52, 56);
pub const WARNING_AMBER: Color = Color::Rgb(202, 80, 16);

/// Colours for one theme preference.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub highlight: Color,
}

impl Palette {
    pub fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Light => Self {
                background: Color::Rgb(243, 242, 241),
                foreground: Color::Rgb(32, 31, 30),
                muted: Color::Rgb(121, 119, 116),
                border: Color::Rgb(200, 198, 196),
                accent: AZURE_BLUE,
                highlight: Color::Rgb(222, 236, 249),
            },
            ThemePreference::Dark => Self {
                background: Color::Rgb(27, 26, 25),
                foreground: Color::Rgb(243, 242, 241),
                muted: Color::Rgb(161, 159, 157),
                border: Color::Rgb(72, 70, 68),
                accent: Color::Rgb(80, 160, 235),
                highlight: Color::Rgb(37, 60, 84),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn success(&self) -> Style {
        Style::default().fg(SUCCESS_GREEN)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(ERROR_RED)
    }

    pub fn notification(&self, level: NotificationLevel) -> Style {
        match level {
            NotificationLevel::Success => self.success().add_modifier(Modifier::BOLD),
            NotificationLevel::Error => self.error().add_modifier(Modifier::BOLD),
            NotificationLevel::Info => Style::default().fg(self.accent),
        }
    }

    /// Colour for a power/provisioning/app state value.
    pub fn status(&self, status: &str) -> Style {
        match status.to_ascii_lowercase().as_str() {
            "running" | "succeeded" | "available" => self.success(),
            "stopped" | "deallocated" | "failed" | "unavailable" => self.error(),
            "starting" | "stopping" | "deallocating" | "updating" | "deleting" => {
                Style::default().fg(WARNING_AMBER)
            }
            _ => self.dim(),
        }
    }
}
