//! Machine: the rotor bank and reflector behind a key-press interface.
//!
//! The machine is the single owner of all mutable state. Rotor offsets
//! change only through [`Machine::press_key`] (step, then evaluate) and
//! [`Machine::click_rotor`] (one rotor, no cascade).

use crate::config::MachineConfig;
use crate::error::EnigmaError;
use crate::permutation::PermutationTable;
use crate::reflector::Reflector;
use crate::rotor::{Rotor, RotorSlot};
use crate::rotor_bank::{RotorBank, NUM_ROTORS};
use crate::signal_path::{self, SignalTrace};
use crate::utils::alphabet::Symbol;

/// A three-rotor cipher machine.
///
/// # Architecture
///
/// A key press first steps the rotor bank (fast, carrying into medium,
/// carrying into slow), then sends the signal through fast, medium and slow
/// rotors to the reflector and back out through the inverse wirings. The
/// returned symbol is the lamp that lights.
///
/// Because the reflector is an involution, the circuit for any fixed rotor
/// state is its own inverse: typing the ciphertext on a machine set to the
/// same start positions recovers the plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    bank: RotorBank,
    reflector: Reflector,
}

impl Default for Machine {
    /// Rotors I, II, III with reflector B, dials at "AAA".
    fn default() -> Self {
        match Machine::new(&MachineConfig::default()) {
            Ok(machine) => machine,
            Err(e) => unreachable!("historical configuration rejected: {}", e),
        }
    }
}

impl Machine {
    /// Builds a machine from a configuration.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if any wiring is malformed or
    /// the reflector is not a fixed-point-free involution, and
    /// [`EnigmaError::InvalidPositions`] for bad start positions. A machine
    /// that fails validation is never built.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_engine::{Machine, MachineConfig};
    ///
    /// let config = MachineConfig::default().with_positions("AAZ");
    /// let machine = Machine::new(&config).unwrap();
    /// assert_eq!(machine.offsets(), [0, 0, 25]);
    ///
    /// let broken = MachineConfig::new("ABC", "ABC", "ABC", "ABC");
    /// assert!(Machine::new(&broken).is_err());
    /// ```
    pub fn new(config: &MachineConfig) -> Result<Self, EnigmaError> {
        let offsets = config.start_offsets()?;
        let rotor = |i: usize| -> Result<Rotor, EnigmaError> {
            Rotor::with_offset(PermutationTable::build(&config.rotors[i])?, offsets[i])
        };
        let bank = RotorBank::new(rotor(0)?, rotor(1)?, rotor(2)?);
        let reflector = Reflector::from_wiring(&config.reflector)?;
        log::debug!(
            "machine built: rotors {:?}, reflector {}, positions {}",
            config.rotors,
            config.reflector,
            config.positions
        );
        Ok(Machine { bank, reflector })
    }

    /// Builds a machine from three rotor wirings and a reflector wiring, all
    /// dials at "A".
    ///
    /// # Errors
    /// Same as [`Machine::new`].
    pub fn from_wirings(
        slow: &str,
        medium: &str,
        fast: &str,
        reflector: &str,
    ) -> Result<Self, EnigmaError> {
        Self::new(&MachineConfig::new(slow, medium, fast, reflector))
    }

    /// Presses a key: steps the rotors, then returns the lamp that lights.
    pub fn press(&mut self, key: Symbol) -> Symbol {
        let outcome = self.bank.step();
        let lamp = signal_path::execute(&self.bank, &self.reflector, key);
        log::debug!(
            "press {} -> lamp {} (offsets {:?}, carry medium={} slow={})",
            key,
            lamp,
            self.bank.offsets(),
            outcome.medium_advanced,
            outcome.slow_advanced
        );
        lamp
    }

    /// Index form of [`Machine::press`].
    ///
    /// # Errors
    /// Returns [`EnigmaError::IndexOutOfRange`] if `key >= 26`; the rotors do
    /// not move in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_engine::Machine;
    ///
    /// let mut machine = Machine::default();
    /// let lamp = machine.press_key(0).unwrap();
    /// assert_eq!(lamp, 1); // 'A' lights 'B'
    /// assert_eq!(machine.offsets(), [0, 0, 1]);
    ///
    /// assert!(machine.press_key(26).is_err());
    /// assert_eq!(machine.offsets(), [0, 0, 1]);
    /// ```
    pub fn press_key(&mut self, key: usize) -> Result<usize, EnigmaError> {
        let key = Symbol::new(key)?;
        Ok(self.press(key).index())
    }

    /// Releases a key: returns the lamp to switch off without stepping.
    pub fn release(&self, key: Symbol) -> Symbol {
        signal_path::execute(&self.bank, &self.reflector, key)
    }

    /// Index form of [`Machine::release`].
    ///
    /// # Errors
    /// Returns [`EnigmaError::IndexOutOfRange`] if `key >= 26`.
    pub fn release_key(&self, key: usize) -> Result<usize, EnigmaError> {
        Ok(self.release(Symbol::new(key)?).index())
    }

    /// Per-stage trace of `key` through the current rotor state.
    pub fn trace(&self, key: Symbol) -> SignalTrace {
        signal_path::trace(&self.bank, &self.reflector, key)
    }

    /// Turns one rotor by hand. Never carries into its neighbour.
    ///
    /// # Returns
    /// The rotor's new offset.
    pub fn click_rotor(&mut self, slot: RotorSlot) -> usize {
        let offset = self.bank.advance(slot);
        log::debug!("{} rotor clicked to offset {}", slot, offset);
        offset
    }

    /// Current offsets `[slow, medium, fast]`.
    pub fn offsets(&self) -> [usize; NUM_ROTORS] {
        self.bank.offsets()
    }

    /// Letters shown in the dial windows, slow to fast.
    pub fn dial_letters(&self) -> String {
        RotorSlot::ALL
            .iter()
            .map(|&slot| self.bank.rotor(slot).dial_letter())
            .collect()
    }

    pub fn rotor(&self, slot: RotorSlot) -> &Rotor {
        self.bank.rotor(slot)
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Types `text` one letter at a time and returns the lamps that lit.
    ///
    /// Letters are case-folded and whitespace is skipped.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] for any other character. The
    /// whole input is checked before the first key press, so the rotors do
    /// not move on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_engine::Machine;
    ///
    /// let mut sender = Machine::default();
    /// let ciphertext = sender.encipher("Hello World").unwrap();
    ///
    /// let mut receiver = Machine::default();
    /// assert_eq!(receiver.encipher(&ciphertext).unwrap(), "HELLOWORLD");
    /// ```
    pub fn encipher(&mut self, text: &str) -> Result<String, EnigmaError> {
        let keys = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Symbol::from_letter)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys.into_iter().map(|key| self.press(key).letter()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{REFLECTOR_B, ROTOR_I, ROTOR_II, ROTOR_III};

    #[test]
    fn test_default_matches_historical_config() {
        let machine = Machine::default();
        assert_eq!(machine.rotor(RotorSlot::Slow).wiring().to_letters(), ROTOR_I);
        assert_eq!(machine.rotor(RotorSlot::Fast).wiring().to_letters(), ROTOR_III);
        assert_eq!(machine.reflector().wiring().to_letters(), REFLECTOR_B);
        assert_eq!(machine.dial_letters(), "AAA");
    }

    #[test]
    fn test_from_wirings() {
        let machine = Machine::from_wirings(ROTOR_I, ROTOR_II, ROTOR_III, REFLECTOR_B).unwrap();
        assert_eq!(machine, Machine::default());
    }

    #[test]
    fn test_new_rejects_bad_rotor() {
        let config = MachineConfig::new(ROTOR_I, "AJDKSIRUXBLHWTMCQGZNPYFVOA", ROTOR_III, REFLECTOR_B);
        assert!(matches!(
            Machine::new(&config),
            Err(EnigmaError::InvalidWiring(_))
        ));
    }

    #[test]
    fn test_new_rejects_rotor_as_reflector() {
        let config = MachineConfig::new(ROTOR_I, ROTOR_II, ROTOR_III, ROTOR_I);
        assert!(matches!(
            Machine::new(&config),
            Err(EnigmaError::InvalidWiring(_))
        ));
    }

    #[test]
    fn test_first_press_steps_then_evaluates() {
        let mut machine = Machine::default();
        let first = machine.press_key(0).unwrap();
        assert_eq!(machine.offsets(), [0, 0, 1]);
        assert_eq!(first, 1);
        let second = machine.press_key(0).unwrap();
        assert_eq!(machine.offsets(), [0, 0, 2]);
        assert_eq!(second, 3);
        assert_ne!(first, second);
    }

    #[test]
    fn test_release_matches_press_without_stepping() {
        let mut machine = Machine::default();
        let lit = machine.press_key(7).unwrap();
        let offsets = machine.offsets();
        assert_eq!(machine.release_key(7).unwrap(), lit);
        assert_eq!(machine.offsets(), offsets);
    }

    #[test]
    fn test_out_of_range_key_leaves_state_untouched() {
        let mut machine = Machine::default();
        assert_eq!(machine.press_key(26), Err(EnigmaError::IndexOutOfRange(26)));
        assert_eq!(machine.release_key(99), Err(EnigmaError::IndexOutOfRange(99)));
        assert_eq!(machine.offsets(), [0, 0, 0]);
    }

    #[test]
    fn test_click_rotor() {
        let mut machine = Machine::default();
        for _ in 0..25 {
            machine.click_rotor(RotorSlot::Fast);
        }
        assert_eq!(machine.dial_letters(), "AAZ");
        assert_eq!(machine.click_rotor(RotorSlot::Fast), 0);
        assert_eq!(machine.offsets(), [0, 0, 0]);
        assert_eq!(machine.click_rotor(RotorSlot::Slow), 1);
        assert_eq!(machine.dial_letters(), "BAA");
    }

    #[test]
    fn test_encipher_known_vector() {
        let mut machine = Machine::default();
        assert_eq!(machine.encipher("AAAAA").unwrap(), "BDZGO");
        assert_eq!(machine.offsets(), [0, 0, 5]);
    }

    #[test]
    fn test_encipher_rejects_without_moving() {
        let mut machine = Machine::default();
        assert_eq!(
            machine.encipher("ABC1"),
            Err(EnigmaError::InvalidLetter('1'))
        );
        assert_eq!(machine.offsets(), [0, 0, 0]);
    }

    #[test]
    fn test_trace_output_matches_release() {
        let machine = Machine::default();
        let key = Symbol::from_letter('Q').unwrap();
        assert_eq!(machine.trace(key).output(), machine.release(key));
    }
}
