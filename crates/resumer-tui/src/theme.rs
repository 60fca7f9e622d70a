use ratatui::style::{Color, Modifier, Style};

use resumer_core::{NotificationKind, Tier};

/// Color theme for the TUI.
pub struct Theme {
    pub top: Color,
    pub mid: Color,
    pub low: Color,

    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub active: Color,
    pub document: Color,
    pub spinner: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,

    pub info: Color,
    pub success: Color,
    pub error: Color,
}

impl Theme {
    /// Professional blue theme.
    pub fn professional() -> Self {
        Self {
            top: Color::Green,
            mid: Color::Yellow,
            low: Color::Red,

            header_fg: Color::White,
            header_bg: Color::Blue,
            border: Color::DarkGray,
            text: Color::White,
            dim: Color::DarkGray,
            highlight_bg: Color::Rgb(25, 40, 70),
            active: Color::LightBlue,
            document: Color::Cyan,
            spinner: Color::LightBlue,
            footer_fg: Color::DarkGray,
            footer_bg: Color::Reset,

            info: Color::LightBlue,
            success: Color::Green,
            error: Color::Red,
        }
    }

    pub fn tier_color(&self, tier: Tier) -> Color {
        match tier {
            Tier::Top => self.top,
            Tier::Mid => self.mid,
            Tier::Low => self.low,
        }
    }

    pub fn notification_color(&self, kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Info => self.info,
            NotificationKind::Success => self.success,
            NotificationKind::Error => self.error,
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default().fg(self.header_fg).bg(self.header_bg).add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default().bg(self.highlight_bg).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }

    /// Call-to-action button label.
    pub fn button_style(&self) -> Style {
        Style::default().fg(self.header_fg).bg(self.header_bg).add_modifier(Modifier::BOLD)
    }

    pub fn section_style(&self) -> Style {
        Style::default().fg(self.active).add_modifier(Modifier::BOLD)
    }
}
