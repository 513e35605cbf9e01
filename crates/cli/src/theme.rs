//! Semantic styling for console output.
//!
//! The domain core never sees colors; everything visual is decided
//! here, and a single flag (from the configuration) turns styling off
//! for dumb terminals and tests.

use crossterm::style::{Color, Stylize};

/// Semantic role of a piece of console text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Titles and menu headers.
    Accent,
    /// Navigation hints and neutral emphasis.
    Info,
    /// Positive outcomes and available seats.
    Success,
    /// Diagnostics and booked seats.
    Danger,
    /// De-emphasized detail.
    Muted,
}

/// Maps semantic roles to terminal colors.
#[derive(Debug, Clone)]
pub struct Theme {
    enabled: bool,
    accent: Color,
    info: Color,
    success: Color,
    danger: Color,
    muted: Color,
}

impl Theme {
    /// Build the default palette; `enabled = false` renders plain text.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            accent: Color::Cyan,
            info: Color::Blue,
            success: Color::Green,
            danger: Color::Red,
            muted: Color::DarkGrey,
        }
    }

    /// Style `text` for the given role.
    pub fn paint(&self, role: Role, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let color = match role {
            Role::Accent => self.accent,
            Role::Info => self.info,
            Role::Success => self.success,
            Role::Danger => self.danger,
            Role::Muted => self.muted,
        };
        text.with(color).to_string()
    }

    /// Positive outcome line.
    pub fn success(&self, text: &str) -> String {
        self.paint(Role::Success, text)
    }

    /// Diagnostic line.
    pub fn danger(&self, text: &str) -> String {
        self.paint(Role::Danger, text)
    }

    /// Navigation hint line.
    pub fn info(&self, text: &str) -> String {
        self.paint(Role::Info, text)
    }

    /// Title line.
    pub fn accent(&self, text: &str) -> String {
        self.paint(Role::Accent, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_theme_passes_text_through() {
        let theme = Theme::new(false);
        assert_eq!(theme.success("done"), "done");
        assert_eq!(theme.paint(Role::Danger, "bad"), "bad");
    }

    #[test]
    fn enabled_theme_wraps_text_in_escape_codes() {
        let theme = Theme::new(true);
        let painted = theme.danger("bad");
        assert!(painted.contains("bad"));
        assert!(painted.starts_with('\u{1b}'));
        assert_ne!(painted, "bad");
    }
}
