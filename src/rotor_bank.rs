//! RotorBank: the three stepping rotors and their carry rule.
//!
//! On every key press the fast rotor turns. Only when it wraps does the
//! medium rotor turn, and only when the medium rotor then wraps does the
//! slow rotor turn. The cascade is a single pass; the slow rotor's carry
//! goes nowhere.

use crate::rotor::{Rotor, RotorSlot};

/// Number of rotors in the bank.
pub const NUM_ROTORS: usize = 3;

/// Which rotors moved during one key-press step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    pub medium_advanced: bool,
    pub slow_advanced: bool,
}

/// Three rotors ordered slow, medium, fast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorBank {
    rotors: [Rotor; NUM_ROTORS],
}

impl RotorBank {
    pub fn new(slow: Rotor, medium: Rotor, fast: Rotor) -> Self {
        RotorBank {
            rotors: [slow, medium, fast],
        }
    }

    pub fn rotor(&self, slot: RotorSlot) -> &Rotor {
        &self.rotors[slot.bank_index()]
    }

    /// Current offsets as `[slow, medium, fast]`.
    pub fn offsets(&self) -> [usize; NUM_ROTORS] {
        [
            self.rotors[0].offset(),
            self.rotors[1].offset(),
            self.rotors[2].offset(),
        ]
    }

    /// Key-press stepping with carry propagation.
    pub fn step(&mut self) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        if self.rotors[RotorSlot::Fast.bank_index()].advance() {
            log::trace!("fast rotor carried into medium");
            outcome.medium_advanced = true;
            if self.rotors[RotorSlot::Medium.bank_index()].advance() {
                log::trace!("medium rotor carried into slow");
                outcome.slow_advanced = true;
                self.rotors[RotorSlot::Slow.bank_index()].advance();
            }
        }
        outcome
    }

    /// Manual advance of a single rotor; never cascades.
    ///
    /// # Returns
    /// The rotor's new offset.
    pub fn advance(&mut self, slot: RotorSlot) -> usize {
        let rotor = &mut self.rotors[slot.bank_index()];
        rotor.advance();
        rotor.offset()
    }
}
