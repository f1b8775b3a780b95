//! PermutationTable: immutable bijection over the 26-symbol alphabet.
//!
//! Wirings are stored as a fixed array of contact indices so every lookup
//! is a single array access. The inverse is computed on demand by
//! [`PermutationTable::invert`]; rotors cache it once at construction.

use std::fmt;

use crate::error::{EnigmaError, WiringDefect};
use crate::utils::alphabet::{Symbol, ALPHABET_LEN};

/// A total bijection `σ: Z26 → Z26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermutationTable {
    forward: [Symbol; ALPHABET_LEN],
}

impl PermutationTable {
    /// The identity permutation.
    pub fn identity() -> Self {
        let mut forward = [Symbol::wrapping(0); ALPHABET_LEN];
        for (slot, symbol) in forward.iter_mut().zip(Symbol::all()) {
            *slot = symbol;
        }
        PermutationTable { forward }
    }

    /// Builds a table from a wiring string such as `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`.
    ///
    /// The character at position `i` is the symbol that contact `i` is wired
    /// to. Lower-case letters are accepted and folded to upper case.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the string is not exactly
    /// 26 letters long, contains a non-letter, or repeats a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_engine::PermutationTable;
    ///
    /// let table = PermutationTable::build("BADCFEHGJILKNMPORQTSVUXWZY").unwrap();
    /// assert_eq!(table.apply_index(0).unwrap(), 1);
    ///
    /// assert!(PermutationTable::build("ABC").is_err());
    /// ```
    pub fn build(specification: &str) -> Result<Self, EnigmaError> {
        let found = specification.chars().count();
        if found != ALPHABET_LEN {
            return Err(WiringDefect::WrongLength {
                expected: ALPHABET_LEN,
                found,
            }
            .into());
        }
        let mut symbols = Vec::with_capacity(ALPHABET_LEN);
        for c in specification.chars() {
            let symbol =
                Symbol::from_letter(c).map_err(|_| WiringDefect::UnknownSymbol(c))?;
            symbols.push(symbol);
        }
        Self::from_symbols(&symbols)
    }

    /// Builds a table from a slice of contact indices.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the slice is not 26 long or
    /// is not a permutation of `0..26`, and [`EnigmaError::IndexOutOfRange`]
    /// if an entry is `>= 26`.
    pub fn from_indices(indices: &[usize]) -> Result<Self, EnigmaError> {
        if indices.len() != ALPHABET_LEN {
            return Err(WiringDefect::WrongLength {
                expected: ALPHABET_LEN,
                found: indices.len(),
            }
            .into());
        }
        let symbols = indices
            .iter()
            .map(|&i| Symbol::new(i))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_symbols(&symbols)
    }

    fn from_symbols(symbols: &[Symbol]) -> Result<Self, EnigmaError> {
        let mut seen = [false; ALPHABET_LEN];
        let mut forward = [Symbol::wrapping(0); ALPHABET_LEN];
        for (slot, &symbol) in forward.iter_mut().zip(symbols) {
            if seen[symbol.index()] {
                return Err(WiringDefect::DuplicateSymbol(symbol.letter()).into());
            }
            seen[symbol.index()] = true;
            *slot = symbol;
        }
        Ok(PermutationTable { forward })
    }

    /// Direct lookup: the symbol wired to contact `x`.
    #[inline]
    pub fn apply(&self, x: Symbol) -> Symbol {
        self.forward[x.index()]
    }

    /// Index-based lookup for callers that hold raw contact numbers.
    ///
    /// # Errors
    /// Returns [`EnigmaError::IndexOutOfRange`] if `x >= 26`.
    pub fn apply_index(&self, x: usize) -> Result<usize, EnigmaError> {
        Ok(self.apply(Symbol::new(x)?).index())
    }

    /// Returns the functional inverse: for every contact `i`,
    /// `inverse(σ(i)) = i`.
    pub fn invert(&self) -> PermutationTable {
        let mut inverse = self.forward;
        for (i, &target) in Symbol::all().zip(self.forward.iter()) {
            inverse[target.index()] = i;
        }
        PermutationTable { forward: inverse }
    }

    /// Returns `true` if `other` undoes this table in both directions.
    pub fn is_inverse_of(&self, other: &PermutationTable) -> bool {
        Symbol::all().all(|x| self.apply(other.apply(x)) == x && other.apply(self.apply(x)) == x)
    }

    /// Returns `true` if applying the table twice is the identity.
    pub fn is_involution(&self) -> bool {
        Symbol::all().all(|x| self.apply(self.apply(x)) == x)
    }

    /// Returns every symbol the table maps onto itself.
    pub fn fixed_points(&self) -> Vec<Symbol> {
        Symbol::all().filter(|&x| self.apply(x) == x).collect()
    }

    /// Renders the wiring as 26 upper-case letters.
    pub fn to_letters(&self) -> String {
        self.forward.iter().map(|s| s.letter()).collect()
    }
}

impl fmt::Display for PermutationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_letters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";

    #[test]
    fn test_build_valid_wiring() {
        let table = PermutationTable::build(ROTOR_I).unwrap();
        assert_eq!(table.apply_index(0).unwrap(), 4);
        assert_eq!(table.apply_index(25).unwrap(), 9);
        assert_eq!(table.to_letters(), ROTOR_I);
    }

    #[test]
    fn test_build_folds_lower_case() {
        let lower = PermutationTable::build(&ROTOR_I.to_lowercase()).unwrap();
        assert_eq!(lower, PermutationTable::build(ROTOR_I).unwrap());
    }

    #[test]
    fn test_build_rejects_short_wiring() {
        assert_eq!(
            PermutationTable::build("EKMFLGDQVZNTOWYHXUSPAIBRC"),
            Err(EnigmaError::InvalidWiring(WiringDefect::WrongLength {
                expected: 26,
                found: 25
            }))
        );
    }

    #[test]
    fn test_build_rejects_long_wiring() {
        let long = format!("{}A", ROTOR_I);
        assert!(matches!(
            PermutationTable::build(&long),
            Err(EnigmaError::InvalidWiring(WiringDefect::WrongLength { found: 27, .. }))
        ));
    }

    #[test]
    fn test_build_rejects_duplicate() {
        // 'E' twice, 'J' missing
        assert_eq!(
            PermutationTable::build("EKMFLGDQVZNTOWYHXUSPAIBRCE"),
            Err(EnigmaError::InvalidWiring(WiringDefect::DuplicateSymbol('E')))
        );
    }

    #[test]
    fn test_build_rejects_non_letter() {
        assert_eq!(
            PermutationTable::build("EKMFLGDQVZNTOWYHXUSPAIBRC1"),
            Err(EnigmaError::InvalidWiring(WiringDefect::UnknownSymbol('1')))
        );
    }

    #[test]
    fn test_from_indices() {
        let indices: Vec<usize> = (0..26).rev().collect();
        let table = PermutationTable::from_indices(&indices).unwrap();
        assert_eq!(table.to_letters(), "ZYXWVUTSRQPONMLKJIHGFEDCBA");
        assert!(table.is_involution());
    }

    #[test]
    fn test_from_indices_rejects_out_of_range() {
        let mut indices: Vec<usize> = (0..26).collect();
        indices[3] = 26;
        assert_eq!(
            PermutationTable::from_indices(&indices),
            Err(EnigmaError::IndexOutOfRange(26))
        );
    }

    #[test]
    fn test_apply_index_out_of_range() {
        let table = PermutationTable::identity();
        assert_eq!(table.apply_index(26), Err(EnigmaError::IndexOutOfRange(26)));
    }

    #[test]
    fn test_apply_is_bijective() {
        let table = PermutationTable::build(ROTOR_I).unwrap();
        let mut hit = [false; ALPHABET_LEN];
        for x in Symbol::all() {
            hit[table.apply(x).index()] = true;
        }
        assert!(hit.iter().all(|&h| h));
    }

    #[test]
    fn test_invert() {
        let table = PermutationTable::build(ROTOR_I).unwrap();
        let inverse = table.invert();
        assert_eq!(inverse.to_letters(), "UWYGADFPVZBECKMTHXSLRINQOJ");
        assert!(table.is_inverse_of(&inverse));
        assert_eq!(inverse.invert(), table);
    }

    #[test]
    fn test_identity_is_its_own_inverse() {
        let id = PermutationTable::identity();
        assert_eq!(id.invert(), id);
        assert_eq!(id.fixed_points().len(), ALPHABET_LEN);
    }

    #[test]
    fn test_involution_and_fixed_points() {
        let reflector = PermutationTable::build("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
        assert!(reflector.is_involution());
        assert!(reflector.fixed_points().is_empty());

        let rotor = PermutationTable::build(ROTOR_I).unwrap();
        assert!(!rotor.is_involution());
    }
}
