use super::addressing_mode::Operand;
use super::error::Error;
use super::memory::Memory;
use super::{Address, Result};

/// An `Addressable` is a fully realized [`Operand`] -- the effective address
/// (or immediate value) an instruction should read from or write to, plus
/// whether resolving it crossed a page boundary.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Addressable {
    operand: Operand,

    /// The value or memory location targeted by this addressable.
    pub target: AddressableTarget,

    /// True if resolving this addressable crossed a page boundary. Tracked
    /// here so [`Addressable::read`] can charge the conditional extra cycle
    /// without re-deriving the page-cross condition.
    pub page_boundary_crossed: bool,
}

/// The concrete thing an [`Addressable`] points at.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum AddressableTarget {
    Immediate(u8),
    Memory(u16),
}

impl Addressable {
    pub fn address(&self) -> Result<Address> {
        match self.target {
            AddressableTarget::Immediate(_) => Err(Error::InvalidAddressRead(self.target)),
            AddressableTarget::Memory(address) => Ok(address),
        }
    }

    /// Read the value behind this addressable, charging the cycle(s)
    /// associated with actually touching memory. Immediate targets already
    /// hold their value and charge nothing further.
    pub fn read(&self, memory: &impl Memory, remaining: &mut i64) -> u8 {
        match self.target {
            AddressableTarget::Immediate(value) => value,
            AddressableTarget::Memory(address) => {
                let value = memory.read_byte(address);
                *remaining -= 1;

                // If the page boundary was crossed the 6502 re-reads the memory location after
                // swapping the page. This costs a cycle.
                if self.page_boundary_crossed {
                    *remaining -= 1;
                }

                value
            }
        }
    }

    /// Write `value` behind this addressable, charging the cycle(s)
    /// associated with actually touching memory.
    pub fn try_write(&self, memory: &mut impl Memory, remaining: &mut i64, value: u8) -> Result<()> {
        match self.target {
            AddressableTarget::Immediate(_) => Err(Error::InvalidAddressableWrite(self.target, value)),
            AddressableTarget::Memory(address) => {
                memory.write_byte(address, value);
                *remaining -= 1;

                // `AbsoluteX`/`AbsoluteY`/`IndirectIndexed` always pay the
                // indirection cycle on a write, whether or not the
                // addressing happened to cross a page boundary.
                let indirection_cycles = match self.operand {
                    Operand::AbsoluteX(_) => 1,
                    Operand::AbsoluteY(_) => 1,
                    Operand::IndirectIndexed(_) => 1,
                    _ => 0,
                };
                *remaining -= indirection_cycles;

                Ok(())
            }
        }
    }
}

impl Operand {
    /// Resolve this operand into an [`Addressable`] using the register
    /// file's current `x`/`y` contents, charging the addressing-table
    /// cycles that are fixed regardless of whether the caller ends up
    /// reading or writing (index adds, pointer word reads).
    pub fn resolve(self, x: u8, y: u8, memory: &impl Memory, remaining: &mut i64) -> Addressable {
        match self {
            Operand::Implied => Addressable {
                operand: self,
                // Never actually read or written; Immediate(0) is an inert placeholder.
                target: AddressableTarget::Immediate(0),
                page_boundary_crossed: false,
            },
            Operand::Immediate(value) => Addressable {
                operand: self,
                target: AddressableTarget::Immediate(value),
                page_boundary_crossed: false,
            },
            Operand::ZeroPage(offset) => Addressable {
                operand: self,
                target: AddressableTarget::Memory(offset as u16),
                page_boundary_crossed: false,
            },
            Operand::ZeroPageX(offset) => {
                *remaining -= 1;
                Addressable {
                    operand: self,
                    target: AddressableTarget::Memory(offset.wrapping_add(x) as u16),
                    page_boundary_crossed: false,
                }
            }
            Operand::ZeroPageY(offset) => {
                *remaining -= 1;
                Addressable {
                    operand: self,
                    target: AddressableTarget::Memory(offset.wrapping_add(y) as u16),
                    page_boundary_crossed: false,
                }
            }
            Operand::Absolute(address) => Addressable {
                operand: self,
                target: AddressableTarget::Memory(address),
                page_boundary_crossed: false,
            },
            Operand::AbsoluteX(base) => resolve_indexed(self, base, x),
            Operand::AbsoluteY(base) => resolve_indexed(self, base, y),
            Operand::Indirect(pointer) => {
                let address = memory.read_word(pointer);
                *remaining -= 2;
                Addressable {
                    operand: self,
                    target: AddressableTarget::Memory(address),
                    page_boundary_crossed: false,
                }
            }
            Operand::IndexedIndirect(offset) => {
                *remaining -= 1;
                let pointer = offset.wrapping_add(x);
                let address = read_zero_page_word(memory, pointer, remaining);
                Addressable {
                    operand: self,
                    target: AddressableTarget::Memory(address),
                    page_boundary_crossed: false,
                }
            }
            Operand::IndirectIndexed(pointer) => {
                let base = read_zero_page_word(memory, pointer, remaining);
                resolve_indexed(self, base, y)
            }
        }
    }
}

fn resolve_indexed(operand: Operand, base: u16, index: u8) -> Addressable {
    let crossed = (base as u8 as u16 + index as u16) > 0xFF;
    Addressable {
        operand,
        target: AddressableTarget::Memory(base.wrapping_add(index as u16)),
        page_boundary_crossed: crossed,
    }
}

/// Reads a little-endian pointer stored at `zero_page_address`, wrapping
/// both the low and high byte fetches within page zero.
fn read_zero_page_word(memory: &impl Memory, zero_page_address: u8, remaining: &mut i64) -> u16 {
    let lo = memory.read_byte(zero_page_address as u16);
    let hi = memory.read_byte(zero_page_address.wrapping_add(1) as u16);
    *remaining -= 2;
    u16::from_le_bytes([lo, hi])
}

#[cfg(test)]
mod tests {
    use super::super::memory::FlatMemory;
    use super::*;

    #[test]
    fn zero_page_x_wraps_around_page_zero() {
        let memory = FlatMemory::new();
        let mut remaining = 0i64;
        let addressable = Operand::ZeroPageX(0xFF).resolve(0x02, 0, &memory, &mut remaining);
        assert_eq!(addressable.target, AddressableTarget::Memory(0x0001));
        assert_eq!(remaining, -1);
    }

    #[test]
    fn absolute_x_flags_a_page_cross() {
        let memory = FlatMemory::new();
        let mut remaining = 0i64;
        let addressable = Operand::AbsoluteX(0x02FF).resolve(0x01, 0, &memory, &mut remaining);
        assert_eq!(addressable.target, AddressableTarget::Memory(0x0300));
        assert!(addressable.page_boundary_crossed);
    }

    #[test]
    fn absolute_x_does_not_flag_a_page_cross_within_the_page() {
        let memory = FlatMemory::new();
        let mut remaining = 0i64;
        let addressable = Operand::AbsoluteX(0x0200).resolve(0x01, 0, &memory, &mut remaining);
        assert_eq!(addressable.target, AddressableTarget::Memory(0x0201));
        assert!(!addressable.page_boundary_crossed);
    }

    #[test]
    fn indexed_indirect_reads_the_pointer_wrapped_within_page_zero() {
        let mut memory = FlatMemory::new();
        memory.write_byte(0x00, 0x34);
        memory.write_byte(0xFF, 0x12);
        let mut remaining = 0i64;
        // base pointer 0xFE + x(1) = 0xFF, so the pointer word wraps: lo at 0xFF, hi at 0x00
        let addressable = Operand::IndexedIndirect(0xFE).resolve(1, 0, &memory, &mut remaining);
        assert_eq!(addressable.target, AddressableTarget::Memory(0x3412));
    }

    #[test]
    fn immediate_target_rejects_address_and_write() {
        let addressable = Operand::Immediate(0x42).resolve(0, 0, &FlatMemory::new(), &mut 0);
        assert!(addressable.address().is_err());
        let mut memory = FlatMemory::new();
        assert!(addressable.try_write(&mut memory, &mut 0, 1).is_err());
    }
}
