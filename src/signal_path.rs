//! Signal path evaluation: fast → medium → slow → reflector → back out.
//!
//! The evaluator is a pure function of the rotor offsets and the input. It
//! never steps the rotors; the machine does that before calling in.

use crate::reflector::Reflector;
use crate::rotor::RotorSlot;
use crate::rotor_bank::RotorBank;
use crate::utils::alphabet::Symbol;

/// Number of stages a signal crosses.
pub const NUM_STAGES: usize = 7;

/// Output of every stage for one signal, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalTrace {
    pub input: Symbol,
    /// fast, medium, slow, reflector, slow⁻¹, medium⁻¹, fast⁻¹
    pub stages: [Symbol; NUM_STAGES],
}

impl SignalTrace {
    /// The lamp that lights: the output of the last stage.
    pub fn output(&self) -> Symbol {
        self.stages[NUM_STAGES - 1]
    }
}

/// Walks the seven-stage circuit and records each stage's output.
pub fn trace(bank: &RotorBank, reflector: &Reflector, input: Symbol) -> SignalTrace {
    let fast = bank.rotor(RotorSlot::Fast);
    let medium = bank.rotor(RotorSlot::Medium);
    let slow = bank.rotor(RotorSlot::Slow);

    let mut stages = [input; NUM_STAGES];
    stages[0] = fast.forward(input);
    stages[1] = medium.forward(stages[0]);
    stages[2] = slow.forward(stages[1]);
    stages[3] = reflector.reflect(stages[2]);
    stages[4] = slow.backward(stages[3]);
    stages[5] = medium.backward(stages[4]);
    stages[6] = fast.backward(stages[5]);

    SignalTrace { input, stages }
}

/// Returns the lamp lit by `input` for the current rotor offsets.
pub fn execute(bank: &RotorBank, reflector: &Reflector, input: Symbol) -> Symbol {
    trace(bank, reflector, input).output()
}
