use thiserror::Error;

use super::addressable::AddressableTarget;

/// Internal consistency errors raised when an addressable target is asked
/// to do something it structurally cannot.
///
/// Unknown opcode bytes and cycle-budget overruns are *not* represented
/// here -- both are ordinary data the interpreter flags via
/// [`crate::mos6502::DebugFlags`] and recovers from, not faults. The
/// variants below can only be triggered by a bug in the opcode table in
/// [`crate::mos6502::instruction`]: every table entry pairs an opcode with
/// an addressing mode that supports the operation requested of it, so no
/// input program can provoke an `Err` here.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    #[error("attempted to read the address of a non-addressable target: {0:?}")]
    InvalidAddressRead(AddressableTarget),

    #[error("attempted to write {1:#04x} through a non-writable target: {0:?}")]
    InvalidAddressableWrite(AddressableTarget, u8),
}
