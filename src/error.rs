//! Error types for the Enigma engine.

use thiserror::Error;

/// Reasons a wiring specification is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WiringDefect {
    /// The specification does not contain exactly 26 symbols.
    WrongLength { expected: usize, found: usize },
    /// A character outside `A..=Z` appears in the specification.
    UnknownSymbol(char),
    /// A symbol appears more than once (and so another one is missing).
    DuplicateSymbol(char),
    /// A reflector wiring does not map back onto itself for this symbol.
    NotInvolution(char),
    /// A reflector wiring maps this symbol onto itself.
    FixedPoint(char),
    /// A rotor's cached inverse does not undo its wiring.
    InverseMismatch,
}

impl std::fmt::Display for WiringDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WiringDefect::WrongLength { expected, found } => {
                write!(f, "expected {} symbols, found {}", expected, found)
            }
            WiringDefect::UnknownSymbol(c) => write!(f, "unknown symbol {:?}", c),
            WiringDefect::DuplicateSymbol(c) => write!(f, "duplicate symbol {:?}", c),
            WiringDefect::NotInvolution(c) => {
                write!(f, "reflector is not an involution at {:?}", c)
            }
            WiringDefect::FixedPoint(c) => write!(f, "reflector maps {:?} onto itself", c),
            WiringDefect::InverseMismatch => write!(f, "inverse wiring does not match"),
        }
    }
}

/// Errors produced by the Enigma engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// A wiring specification is not a valid permutation of the alphabet.
    #[error("Invalid wiring: {0}")]
    InvalidWiring(WiringDefect),
    /// Starting dial positions are not exactly three alphabet letters.
    #[error("Invalid rotor positions {0:?}: expected three letters A-Z")]
    InvalidPositions(String),
    /// A symbol index outside `[0, 26)` was supplied.
    #[error("Symbol index {0} is outside the range 0..26")]
    IndexOutOfRange(usize),
    /// A character that is not a letter of the alphabet was supplied.
    #[error("Character {0:?} is not a letter A-Z")]
    InvalidLetter(char),
}

impl From<WiringDefect> for EnigmaError {
    fn from(defect: WiringDefect) -> Self {
        EnigmaError::InvalidWiring(defect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_wrong_length() {
        let err = EnigmaError::InvalidWiring(WiringDefect::WrongLength {
            expected: 26,
            found: 25,
        });
        assert_eq!(
            format!("{}", err),
            "Invalid wiring: expected 26 symbols, found 25"
        );
    }

    #[test]
    fn test_display_duplicate_symbol() {
        let err = EnigmaError::from(WiringDefect::DuplicateSymbol('Q'));
        assert_eq!(format!("{}", err), "Invalid wiring: duplicate symbol 'Q'");
    }

    #[test]
    fn test_display_index_out_of_range() {
        let err = EnigmaError::IndexOutOfRange(26);
        assert_eq!(
            format!("{}", err),
            "Symbol index 26 is outside the range 0..26"
        );
    }

    #[test]
    fn test_display_invalid_letter() {
        let err = EnigmaError::InvalidLetter('7');
        assert_eq!(format!("{}", err), "Character '7' is not a letter A-Z");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            EnigmaError::IndexOutOfRange(30),
            EnigmaError::IndexOutOfRange(30)
        );
        assert_ne!(
            EnigmaError::IndexOutOfRange(30),
            EnigmaError::InvalidLetter('!')
        );
    }

    #[test]
    fn test_error_clone() {
        let err = EnigmaError::InvalidPositions("AB".to_string());
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
