//! Piece kinds handed out by the supply

use ratatui::style::Color;
use std::fmt;

/// The closed set of shapes the factory can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I, // Cyan - long bar
    O, // Yellow - square
    T, // Purple - T-shape
    L, // Orange - L-shape
}

impl PieceKind {
    /// Get the color for this piece kind
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::O => Color::Yellow,
            PieceKind::T => Color::Magenta,
            PieceKind::L => Color::Rgb(255, 165, 0), // Orange
        }
    }

    /// Single-letter label used in queue and stack listings
    pub fn label(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }

    /// All kinds, in the order the factory indexes them
    pub fn all() -> [PieceKind; 4] {
        [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L]
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_kinds_distinct() {
        let labels: HashSet<_> = PieceKind::all().iter().map(|k| k.label()).collect();
        assert_eq!(labels.len(), 4);
    }

    #[test]
    fn test_display_is_label() {
        assert_eq!(PieceKind::L.to_string(), "L");
    }
}
