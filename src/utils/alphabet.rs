//! The 26-letter alphabet shared by keys, lamps, rotors and the reflector.
//!
//! Every contact on a rotor, every key and every lamp is identified by a
//! [`Symbol`]: an index in `[0, 26)` that maps to one of the letters `A..=Z`.
//! Indices are validated once at the boundary so the cipher kernel itself is
//! total.

use std::fmt;

use crate::error::EnigmaError;

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// The alphabet in contact order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A validated symbol index in `[0, 26)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Creates a symbol from a contact index.
    ///
    /// # Errors
    /// Returns [`EnigmaError::IndexOutOfRange`] if `index >= 26`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_engine::Symbol;
    ///
    /// assert_eq!(Symbol::new(4).unwrap().letter(), 'E');
    /// assert!(Symbol::new(26).is_err());
    /// ```
    pub fn new(index: usize) -> Result<Self, EnigmaError> {
        if index < ALPHABET_LEN {
            Ok(Symbol(index as u8))
        } else {
            Err(EnigmaError::IndexOutOfRange(index))
        }
    }

    /// Creates a symbol from a letter. Lower-case letters are folded to
    /// upper case.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] for anything outside `A..=Z`
    /// and `a..=z`.
    pub fn from_letter(letter: char) -> Result<Self, EnigmaError> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Symbol(upper as u8 - b'A'))
        } else {
            Err(EnigmaError::InvalidLetter(letter))
        }
    }

    /// Builds a symbol from any integer, reducing it modulo 26 into
    /// `[0, 26)`. Negative values wrap from the top of the alphabet.
    pub(crate) fn wrapping(value: i32) -> Self {
        Symbol(value.rem_euclid(ALPHABET_LEN as i32) as u8)
    }

    /// Returns the contact index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the upper-case letter for this symbol.
    pub fn letter(self) -> char {
        (b'A' + self.0) as char
    }

    /// Iterates over all 26 symbols in contact order.
    pub fn all() -> impl Iterator<Item = Symbol> {
        (0..ALPHABET_LEN as u8).map(Symbol)
    }
}

impl TryFrom<usize> for Symbol {
    type Error = EnigmaError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Symbol::new(index)
    }
}

impl TryFrom<char> for Symbol {
    type Error = EnigmaError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Symbol::from_letter(letter)
    }
}

impl From<Symbol> for usize {
    fn from(symbol: Symbol) -> Self {
        symbol.index()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
