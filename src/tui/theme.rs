//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::analytics::Severity;
use crate::scoring::Grade;

pub const TITLE_COLOR: Color = Color::Cyan;
pub const MUTED: Color = Color::Gray;
pub const ROW_ALT_BG: Color = Color::Indexed(235);
pub const STATUS_BAR_BG: Color = Color::Indexed(236);
pub const STATUS_KEY_COLOR: Color = Color::Cyan;
pub const FLASH_COLOR: Color = Color::Green;
pub const ACCENT: Color = Color::Green;

pub const HEADER_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
pub const ROW_SELECTED: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Badge color per letter grade (traffic-light ordering).
pub fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::APlus => Color::Green,
        Grade::A => Color::Blue,
        Grade::B => Color::Yellow,
        Grade::C => Color::LightRed,
        Grade::D => Color::Red,
    }
}

/// Color for a factor meter at a normalized level.
pub fn meter_color(level: f64) -> Color {
    if level >= 0.7 {
        Color::Green
    } else if level >= 0.4 {
        Color::Yellow
    } else {
        Color::Red
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Good => Color::Green,
        Severity::Warn => Color::Yellow,
        Severity::Bad => Color::Red,
        Severity::Info => Color::Blue,
    }
}

pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Good => "✓",
        Severity::Warn => "→",
        Severity::Bad => "⚠",
        Severity::Info => "★",
    }
}

/// Heatmap cell color for a score normalized into [0, 1].
pub fn heat_color(normalized: f64) -> Color {
    if normalized < 0.2 {
        Color::Red
    } else if normalized < 0.45 {
        Color::LightRed
    } else if normalized < 0.7 {
        Color::Yellow
    } else if normalized < 0.9 {
        Color::Green
    } else {
        Color::LightGreen
    }
}
