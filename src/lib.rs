//! A cycle-accurate MOS 6502 instruction interpreter.
//!
//! Unlike a traditional cycle-by-cycle emulator, [`MOS6502`] is driven by a
//! single [`MOS6502::execute`] call: hand it a cycle budget and a
//! [`Memory`] implementation, and it runs instructions to completion until
//! the budget is spent.

pub mod mos6502;

pub use mos6502::{
    instruction, Address, CyclesUsed, DebugFlags, Error, FlatMemory, Memory, Opcode, Result,
    Status, StatusFlag, DEFAULT_RESET_VECTOR, MOS6502,
};
