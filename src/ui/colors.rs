//! Color definitions for residues and UI elements

use ratatui::style::Color;

use crate::app::StatusKind;

/// Get the display color for a residue, grouped by side chain chemistry
pub fn get_residue_color(residue: char) -> Color {
    match residue {
        'A' | 'V' | 'L' | 'I' | 'M' => Color::Green,
        'F' | 'W' | 'Y' => Color::LightGreen,
        'K' | 'R' | 'H' => Color::Blue,
        'D' | 'E' => Color::Red,
        'S' | 'T' | 'N' | 'Q' => Color::Cyan,
        'C' => Color::Yellow,
        'G' | 'P' => Color::Magenta,
        _ => Color::White,
    }
}

pub fn get_status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Info => Color::Cyan,
        StatusKind::Success => Color::Green,
        StatusKind::Warning => Color::Yellow,
        StatusKind::Error => Color::Red,
    }
}

/// Gains show green, losses red
pub fn get_delta_color(delta: f64) -> Color {
    if delta < 0.0 {
        Color::Red
    } else {
        Color::Green
    }
}
