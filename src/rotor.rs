//! Rotor: a wiring permutation turning against a stationary contact ring.
//!
//! The wiring is fixed relative to the rotor body, but the body has turned
//! by `offset` positions. A signal entering stationary contact `i` strikes
//! wired contact `i + offset`, and the wire's output must be shifted back by
//! the same offset before it reaches the next stage.

use std::fmt;

use crate::error::{EnigmaError, WiringDefect};
use crate::permutation::PermutationTable;
use crate::utils::alphabet::{Symbol, ALPHABET_LEN};

/// Position of a rotor within the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorSlot {
    /// Leftmost rotor, advanced only when the medium rotor wraps.
    Slow,
    /// Middle rotor, advanced when the fast rotor wraps.
    Medium,
    /// Rightmost rotor, advanced on every key press.
    Fast,
}

impl RotorSlot {
    /// All slots in bank order (slow, medium, fast).
    pub const ALL: [RotorSlot; 3] = [RotorSlot::Slow, RotorSlot::Medium, RotorSlot::Fast];

    pub(crate) fn bank_index(self) -> usize {
        match self {
            RotorSlot::Slow => 0,
            RotorSlot::Medium => 1,
            RotorSlot::Fast => 2,
        }
    }
}

impl fmt::Display for RotorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotorSlot::Slow => "slow",
            RotorSlot::Medium => "medium",
            RotorSlot::Fast => "fast",
        };
        f.write_str(name)
    }
}

/// Passes `input` through `wiring` turned by `offset` positions.
///
/// Computes `(σ((input + offset) mod 26) − offset) mod 26`, with the final
/// reduction always landing in `[0, 26)`. At offset 0 this is `σ(input)`.
#[inline]
pub fn apply_with_offset(wiring: &PermutationTable, input: Symbol, offset: usize) -> Symbol {
    let offset = (offset % ALPHABET_LEN) as i32;
    let shifted = Symbol::wrapping(input.index() as i32 + offset);
    let wired = wiring.apply(shifted);
    Symbol::wrapping(wired.index() as i32 - offset)
}

/// A stepping rotor: wiring, its cached inverse and the current offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: PermutationTable,
    inverse: PermutationTable,
    offset: u8,
}

impl Rotor {
    /// Creates a rotor at offset 0 (dial showing "A").
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the derived inverse does not
    /// undo the wiring.
    pub fn new(wiring: PermutationTable) -> Result<Self, EnigmaError> {
        Self::with_offset(wiring, 0)
    }

    /// Creates a rotor turned to `offset`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::IndexOutOfRange`] if `offset >= 26` and
    /// [`EnigmaError::InvalidWiring`] if the inverse check fails.
    pub fn with_offset(wiring: PermutationTable, offset: usize) -> Result<Self, EnigmaError> {
        let offset = Symbol::new(offset)?.index() as u8;
        let inverse = wiring.invert();
        if !wiring.is_inverse_of(&inverse) {
            return Err(WiringDefect::InverseMismatch.into());
        }
        Ok(Rotor {
            wiring,
            inverse,
            offset,
        })
    }

    /// Parses a wiring string and creates a rotor at offset 0.
    ///
    /// # Errors
    /// Propagates [`PermutationTable::build`] failures.
    pub fn from_wiring(specification: &str) -> Result<Self, EnigmaError> {
        Self::new(PermutationTable::build(specification)?)
    }

    /// Current offset in `[0, 26)`.
    pub fn offset(&self) -> usize {
        self.offset as usize
    }

    /// Letter shown in the rotor's window.
    pub fn dial_letter(&self) -> char {
        (b'A' + self.offset) as char
    }

    pub fn wiring(&self) -> &PermutationTable {
        &self.wiring
    }

    pub fn inverse_wiring(&self) -> &PermutationTable {
        &self.inverse
    }

    /// Turns the rotor by one position.
    ///
    /// # Returns
    /// `true` if the offset wrapped from 25 back to 0 (carry).
    pub fn advance(&mut self) -> bool {
        let carry = self.offset as usize == ALPHABET_LEN - 1;
        self.offset = ((self.offset as usize + 1) % ALPHABET_LEN) as u8;
        carry
    }

    /// Signal travelling toward the reflector.
    #[inline]
    pub fn forward(&self, input: Symbol) -> Symbol {
        apply_with_offset(&self.wiring, input, self.offset())
    }

    /// Signal returning from the reflector.
    #[inline]
    pub fn backward(&self, input: Symbol) -> Symbol {
        apply_with_offset(&self.inverse, input, self.offset())
    }
}
