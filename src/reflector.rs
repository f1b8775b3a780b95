//! Reflector: the fixed stage that turns the signal back through the rotors.

use crate::error::{EnigmaError, WiringDefect};
use crate::permutation::PermutationTable;
use crate::utils::alphabet::Symbol;

/// A fixed, offset-less, involutive and fixed-point-free wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflector {
    wiring: PermutationTable,
}

impl Reflector {
    /// Wraps a table after checking that `σ(σ(x)) = x` and `σ(x) ≠ x`
    /// for every symbol.
    ///
    /// # Errors
    /// Returns [`WiringDefect::FixedPoint`] or [`WiringDefect::NotInvolution`]
    /// for the first offending symbol.
    pub fn new(wiring: PermutationTable) -> Result<Self, EnigmaError> {
        for x in Symbol::all() {
            let y = wiring.apply(x);
            if y == x {
                return Err(WiringDefect::FixedPoint(x.letter()).into());
            }
            if wiring.apply(y) != x {
                return Err(WiringDefect::NotInvolution(x.letter()).into());
            }
        }
        Ok(Reflector { wiring })
    }

    /// Parses a wiring string and validates it as a reflector.
    pub fn from_wiring(specification: &str) -> Result<Self, EnigmaError> {
        Self::new(PermutationTable::build(specification)?)
    }

    #[inline]
    pub fn reflect(&self, input: Symbol) -> Symbol {
        self.wiring.apply(input)
    }

    pub fn wiring(&self) -> &PermutationTable {
        &self.wiring
    }
}
