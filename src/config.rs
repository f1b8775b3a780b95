//! Machine configuration: rotor and reflector wirings plus start positions.
//!
//! A configuration is plain data. It is validated only when a
//! [`Machine`](crate::Machine) is built from it, so a host can load it from
//! any serde format first.

use serde::{Deserialize, Serialize};

use crate::error::EnigmaError;
use crate::rotor_bank::NUM_ROTORS;
use crate::utils::alphabet::Symbol;

/// Historical Enigma I rotor I wiring.
pub const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";
/// Historical Enigma I rotor II wiring.
pub const ROTOR_II: &str = "AJDKSIRUXBLHWTMCQGZNPYFVOE";
/// Historical Enigma I rotor III wiring.
pub const ROTOR_III: &str = "BDFHJLCPRTXVZNYEIWGAKMOUSQ";
/// Historical wide reflector B wiring.
pub const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// Dial letters shown at power-on when none are configured.
pub const DEFAULT_POSITIONS: &str = "AAA";

/// Wirings and start positions for a three-rotor machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Rotor wirings ordered slow, medium, fast.
    pub rotors: [String; NUM_ROTORS],
    pub reflector: String,
    /// Three dial letters ordered slow, medium, fast.
    #[serde(default = "default_positions")]
    pub positions: String,
}

fn default_positions() -> String {
    DEFAULT_POSITIONS.to_string()
}

impl Default for MachineConfig {
    /// Rotors I, II, III with reflector B, dials at "AAA".
    fn default() -> Self {
        MachineConfig {
            rotors: [
                ROTOR_I.to_string(),
                ROTOR_II.to_string(),
                ROTOR_III.to_string(),
            ],
            reflector: REFLECTOR_B.to_string(),
            positions: default_positions(),
        }
    }
}

impl MachineConfig {
    /// Creates a configuration with dials at "AAA".
    pub fn new(slow: &str, medium: &str, fast: &str, reflector: &str) -> Self {
        MachineConfig {
            rotors: [slow.to_string(), medium.to_string(), fast.to_string()],
            reflector: reflector.to_string(),
            positions: default_positions(),
        }
    }

    /// Replaces the start positions.
    pub fn with_positions(mut self, positions: &str) -> Self {
        self.positions = positions.to_string();
        self
    }

    /// Decodes the start positions into offsets `[slow, medium, fast]`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPositions`] unless `positions` is
    /// exactly three letters.
    pub fn start_offsets(&self) -> Result<[usize; NUM_ROTORS], EnigmaError> {
        let invalid = || EnigmaError::InvalidPositions(self.positions.clone());
        let letters: Vec<char> = self.positions.chars().collect();
        if letters.len() != NUM_ROTORS {
            return Err(invalid());
        }
        let mut offsets = [0usize; NUM_ROTORS];
        for (offset, &c) in offsets.iter_mut().zip(letters.iter()) {
            *offset = Symbol::from_letter(c).map_err(|_| invalid())?.index();
        }
        Ok(offsets)
    }
}
