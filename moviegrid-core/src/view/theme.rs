//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Mocha Theme Color Palette
//!
//! Color constants for the Catppuccin Mocha theme, from the official
//! Catppuccin theme specification:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Style};

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const CURRENT_LINE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const CYAN: Color = Color::Rgb(137, 220, 235); // Sky
pub const GREEN: Color = Color::Rgb(166, 227, 161); // Green
pub const ORANGE: Color = Color::Rgb(250, 179, 135); // Peach
pub const PINK: Color = Color::Rgb(245, 194, 231); // Pink
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const RED: Color = Color::Rgb(243, 139, 168); // Red
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow

pub fn card_border_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn card_selected_border_style() -> Style {
    Style::default().fg(PURPLE)
}

pub fn error_style() -> Style {
    Style::default().fg(RED)
}

pub fn status_message_style() -> Style {
    Style::default().fg(FOREGROUND)
}

pub fn overlay_border_style() -> Style {
    Style::default().fg(PURPLE)
}

pub fn particle_style() -> Style {
    Style::default().fg(COMMENT)
}
