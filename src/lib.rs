//! Three-rotor Enigma cipher engine.
//!
//! Models an electromechanical substitution cipher: three stepping rotors
//! and a reflector. Each key press turns the rotors, then sends the signal
//! through the rotors, off the reflector and back out, and reports the lamp
//! that lights. Rendering and input handling belong to the host; this crate
//! is the in-process engine behind them.
//!
//! # Architecture
//!
//! ```text
//! PermutationTable  (immutable bijection over A..Z, with inverse)
//!     ↓ wired into
//! Rotor             (wiring + offset, shift/lookup/unshift kernel)
//! Reflector         (fixed involution, no fixed points)
//!     ↓ three rotors
//! RotorBank         (slow / medium / fast, single-pass carry)
//!     ↓ evaluated by
//! signal_path       (fast → medium → slow → reflector → slow⁻¹ → medium⁻¹ → fast⁻¹)
//!     ↓ owned by
//! Machine           (press / release / click / encipher)
//! ```
//!
//! # Examples
//!
//! Encipher and decipher a message with the historical rotors I, II, III and
//! reflector B:
//!
//! ```
//! use enigma_engine::Machine;
//!
//! let mut sender = Machine::default();
//! let ciphertext = sender.encipher("AAAAA").unwrap();
//! assert_eq!(ciphertext, "BDZGO");
//!
//! let mut receiver = Machine::default();
//! assert_eq!(receiver.encipher(&ciphertext).unwrap(), "AAAAA");
//! ```
//!
//! Drive the machine the way a keyboard front end does:
//!
//! ```
//! use enigma_engine::{Machine, MachineConfig, RotorSlot};
//!
//! let config = MachineConfig::default().with_positions("BAZ");
//! let mut machine = Machine::new(&config).unwrap();
//!
//! let lit = machine.press_key(4).unwrap();
//! assert_eq!(machine.dial_letters(), "BBA");
//! assert_eq!(machine.release_key(4).unwrap(), lit);
//!
//! assert_eq!(machine.click_rotor(RotorSlot::Slow), 2);
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod permutation;
pub mod reflector;
pub mod rotor;
pub mod rotor_bank;
pub mod signal_path;
pub mod utils;

mod machine;

pub use config::MachineConfig;
pub use error::{EnigmaError, WiringDefect};
pub use machine::Machine;
pub use permutation::PermutationTable;
pub use reflector::Reflector;
pub use rotor::{Rotor, RotorSlot};
pub use rotor_bank::{RotorBank, StepOutcome};
pub use signal_path::SignalTrace;
pub use utils::alphabet::{Symbol, ALPHABET, ALPHABET_LEN};
