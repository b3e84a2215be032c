//! A single supplied piece

use crate::tetromino::PieceKind;
use std::fmt;

/// Identifier assigned by the factory, unique for the whole run
pub type PieceId = u64;

/// An immutable piece: its kind plus the id it was issued with.
///
/// Pieces are only created by [`crate::factory::PieceFactory`]; fields are
/// private so nothing else can forge or renumber one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    id: PieceId,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, id: PieceId) -> Self {
        Self { kind, id }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn id(&self) -> PieceId {
        self.id
    }
}

impl fmt::Display for Piece {
    /// Formats as `[T 4]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let piece = Piece::new(PieceKind::T, 4);
        assert_eq!(piece.to_string(), "[T 4]");
    }

    #[test]
    fn test_accessors() {
        let piece = Piece::new(PieceKind::O, 12);
        assert_eq!(piece.kind(), PieceKind::O);
        assert_eq!(piece.id(), 12);
    }
}
