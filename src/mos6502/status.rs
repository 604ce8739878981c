/// Status represents the processor status flag, `p` on the `MOS6502`
///
/// Each bit in `p` has a different meaning:
///
/// ```text
/// +---+---+---+---+---+---+---+---+
/// | N | V |   | B | D | I | Z | C |
/// +---+---+---+---+---+---+---+---+
///   |   |   |   |   |   |   |   |
///   |   |   |   |   |   |   |   \-------- CARRY
///   |   |   |   |   |   |   |
///   |   |   |   |   |   |   \------------ ZERO RESULT
///   |   |   |   |   |   |
///   |   |   |   |   |   \---------------- INTERRUPT DISABLE
///   |   |   |   |   |
///   |   |   |   |   \-------------------- DECIMAL MODE
///   |   |   |   |
///   |   |   |   \------------------------ BREAK COMMAND
///   |   |   |
///   |   |   \---------------------------- UNUSED
///   |   |
///   |   \-------------------------------- OVERFLOW
///   |
///   \------------------------------------ NEGATIVE RESULT
/// ```
///
/// `Decimal` and `Break` are addressable bits but nothing in this core ever
/// examines or sets them automatically: there's no decimal arithmetic mode
/// and no BRK/IRQ/NMI entry point that would push `Break` onto the stack.
/// `Unused` is likewise never examined.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct Status(pub u8);

impl Status {
    pub fn get(&self, flag: StatusFlag) -> bool {
        let bit = flag as u8;

        (self.0 & (1 << bit)) != 0
    }

    pub fn set(&mut self, flag: StatusFlag, value: bool) {
        let bit = flag as u8;
        if value {
            self.0 |= 1 << bit;
        } else {
            self.0 &= !(1 << bit);
        }
    }

    pub fn with(mut self, flag: StatusFlag, value: bool) -> Self {
        self.set(flag, value);
        self
    }

    /// The flag update shared by every load (`LDA`/`LDX`/`LDY`/`PLA`/`TSX`/`TSA`):
    /// `Zero` set if `value` is `0`, `Negative` copied from `value`'s high bit.
    pub fn set_load_flags(&mut self, value: u8) {
        self.set(StatusFlag::Zero, value == 0);
        self.set(StatusFlag::Negative, value & 0b1000_0000 > 0);
    }

    /// The flag update performed by `BIT`: `Zero` comes from `value & mask`,
    /// but `Overflow`/`Negative` are copied from `value` itself rather than
    /// the masked result.
    pub fn set_bit_test_flags(&mut self, value: u8, mask: u8) {
        self.set(StatusFlag::Zero, (value & mask) == 0);
        self.set(StatusFlag::Overflow, value & 0b0100_0000 > 0);
        self.set(StatusFlag::Negative, value & 0b1000_0000 > 0);
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum StatusFlag {
    Carry = 0,
    Zero = 1,
    InterruptDisable = 2,
    Decimal = 3,
    Break = 4,
    Unused = 5,
    Overflow = 6,
    Negative = 7,
}
