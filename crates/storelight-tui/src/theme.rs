//! Palette and semantic styling for the status display.

use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const SUCCESS_GREEN: Color = Color::Rgb(80, 250, 123); // #50fa7b
pub const WARNING_YELLOW: Color = Color::Rgb(241, 250, 140); // #f1fa8c
pub const DEMO_BLUE: Color = Color::Rgb(139, 233, 253); // #8be9fd
pub const NEON_CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

/// Default panel border.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint text in the status bar.
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Secondary informational text.
pub fn dim_text() -> Style {
    Style::default().fg(DIM_WHITE)
}
