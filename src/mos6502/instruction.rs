use super::addressing_mode::AddressingMode;
use super::opcode::Opcode;

/// The signature of an instruction is its `Opcode` + `AddressingMode` pair,
/// keyed by opcode byte in `INSTRUCTION_SIGNATURES`. It tells the
/// interpreter what operation to perform and how many operand bytes to
/// decode before performing it.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct InstructionSignature {
    pub opcode: Opcode,
    pub addressing_mode: AddressingMode,
}

impl InstructionSignature {
    const fn new(opcode: Opcode, addressing_mode: AddressingMode) -> InstructionSignature {
        InstructionSignature { opcode, addressing_mode }
    }

    /// Look up the signature for an opcode byte. `None` means the byte is
    /// unknown to this core -- not every 6502 opcode is implemented, and
    /// none of the unofficial opcodes are.
    pub fn lookup(byte: u8) -> Option<InstructionSignature> {
        INSTRUCTION_SIGNATURES[byte as usize]
    }
}

// Named opcode byte constants, grouped by mnemonic. These mirror the values
// baked into `INSTRUCTION_SIGNATURES` below and are exposed so hosts can
// assemble programs without hand-copying hex literals.
pub const INS_LDA_IMMEDIATE: u8 = 0xA9;
pub const INS_LDA_ZERO_PAGE: u8 = 0xA5;
pub const INS_LDA_ZERO_PAGE_X: u8 = 0xB5;
pub const INS_LDA_ABSOLUTE: u8 = 0xAD;
pub const INS_LDA_ABSOLUTE_X: u8 = 0xBD;
pub const INS_LDA_ABSOLUTE_Y: u8 = 0xB9;
pub const INS_LDA_INDEXED_INDIRECT: u8 = 0xA1;
pub const INS_LDA_INDIRECT_INDEXED: u8 = 0xB1;

pub const INS_LDX_IMMEDIATE: u8 = 0xA2;
pub const INS_LDX_ZERO_PAGE: u8 = 0xA6;
pub const INS_LDX_ZERO_PAGE_Y: u8 = 0xB6;
pub const INS_LDX_ABSOLUTE: u8 = 0xAE;
pub const INS_LDX_ABSOLUTE_Y: u8 = 0xBE;

pub const INS_LDY_IMMEDIATE: u8 = 0xA0;
pub const INS_LDY_ZERO_PAGE: u8 = 0xA4;
pub const INS_LDY_ZERO_PAGE_X: u8 = 0xB4;
pub const INS_LDY_ABSOLUTE: u8 = 0xAC;
pub const INS_LDY_ABSOLUTE_X: u8 = 0xBC;

pub const INS_STA_ZERO_PAGE: u8 = 0x85;
pub const INS_STA_ZERO_PAGE_X: u8 = 0x95;
pub const INS_STA_ABSOLUTE: u8 = 0x8D;
pub const INS_STA_ABSOLUTE_X: u8 = 0x9D;
pub const INS_STA_ABSOLUTE_Y: u8 = 0x99;
pub const INS_STA_INDEXED_INDIRECT: u8 = 0x81;
pub const INS_STA_INDIRECT_INDEXED: u8 = 0x91;

pub const INS_STX_ZERO_PAGE: u8 = 0x86;
pub const INS_STX_ZERO_PAGE_Y: u8 = 0x96;
pub const INS_STX_ABSOLUTE: u8 = 0x8E;

pub const INS_STY_ZERO_PAGE: u8 = 0x84;
pub const INS_STY_ZERO_PAGE_X: u8 = 0x94;
pub const INS_STY_ABSOLUTE: u8 = 0x8C;

pub const INS_AND_IMMEDIATE: u8 = 0x29;
pub const INS_AND_ZERO_PAGE: u8 = 0x25;
pub const INS_AND_ZERO_PAGE_X: u8 = 0x35;
pub const INS_AND_ABSOLUTE: u8 = 0x2D;
pub const INS_AND_ABSOLUTE_X: u8 = 0x3D;
pub const INS_AND_ABSOLUTE_Y: u8 = 0x39;
pub const INS_AND_INDEXED_INDIRECT: u8 = 0x21;
pub const INS_AND_INDIRECT_INDEXED: u8 = 0x31;

pub const INS_ORA_IMMEDIATE: u8 = 0x09;
pub const INS_ORA_ZERO_PAGE: u8 = 0x05;
pub const INS_ORA_ZERO_PAGE_X: u8 = 0x15;
pub const INS_ORA_ABSOLUTE: u8 = 0x0D;
pub const INS_ORA_ABSOLUTE_X: u8 = 0x1D;
pub const INS_ORA_ABSOLUTE_Y: u8 = 0x19;
pub const INS_ORA_INDEXED_INDIRECT: u8 = 0x01;
pub const INS_ORA_INDIRECT_INDEXED: u8 = 0x11;

pub const INS_EOR_IMMEDIATE: u8 = 0x49;
pub const INS_EOR_ZERO_PAGE: u8 = 0x45;
pub const INS_EOR_ZERO_PAGE_X: u8 = 0x55;
pub const INS_EOR_ABSOLUTE: u8 = 0x4D;
pub const INS_EOR_ABSOLUTE_X: u8 = 0x5D;
pub const INS_EOR_ABSOLUTE_Y: u8 = 0x59;
pub const INS_EOR_INDEXED_INDIRECT: u8 = 0x41;
pub const INS_EOR_INDIRECT_INDEXED: u8 = 0x51;

pub const INS_BIT_ZERO_PAGE: u8 = 0x24;
pub const INS_BIT_ABSOLUTE: u8 = 0x2C;

pub const INS_JMP_ABSOLUTE: u8 = 0x4C;
pub const INS_JMP_INDIRECT: u8 = 0x6C;
pub const INS_JSR_ABSOLUTE: u8 = 0x20;
pub const INS_RTS_IMPLIED: u8 = 0x60;

pub const INS_PHA_IMPLIED: u8 = 0x48;
pub const INS_PHP_IMPLIED: u8 = 0x08;
pub const INS_PLA_IMPLIED: u8 = 0x68;
pub const INS_PLP_IMPLIED: u8 = 0x28;

pub const INS_TSX_IMPLIED: u8 = 0xBA;
pub const INS_TSA_IMPLIED: u8 = 0x8A;
pub const INS_TXS_IMPLIED: u8 = 0x9A;

/// Instruction signatures for every opcode this core understands. Any entry
/// not listed here is `None`, i.e. unknown.
static INSTRUCTION_SIGNATURES: [Option<InstructionSignature>; 256] = [
    /*0x00*/ None,
    /*0x01*/ Some(InstructionSignature::new(Opcode::ORA, AddressingMode::IndexedIndirect)),
    /*0x02*/ None,
    /*0x03*/ None,
    /*0x04*/ None,
    /*0x05*/ Some(InstructionSignature::new(Opcode::ORA, AddressingMode::ZeroPage)),
    /*0x06*/ None,
    /*0x07*/ None,
    /*0x08*/ Some(InstructionSignature::new(Opcode::PHP, AddressingMode::Implied)),
    /*0x09*/ Some(InstructionSignature::new(Opcode::ORA, AddressingMode::Immediate)),
    /*0x0A*/ None,
    /*0x0B*/ None,
    /*0x0C*/ None,
    /*0x0D*/ Some(InstructionSignature::new(Opcode::ORA, AddressingMode::Absolute)),
    /*0x0E*/ None,
    /*0x0F*/ None,
    /*0x10*/ None,
    /*0x11*/ Some(InstructionSignature::new(Opcode::ORA, AddressingMode::IndirectIndexed)),
    /*0x12*/ None,
    /*0x13*/ None,
    /*0x14*/ None,
    /*0x15*/ Some(InstructionSignature::new(Opcode::ORA, AddressingMode::ZeroPageX)),
    /*0x16*/ None,
    /*0x17*/ None,
    /*0x18*/ None,
    /*0x19*/ Some(InstructionSignature::new(Opcode::ORA, AddressingMode::AbsoluteY)),
    /*0x1A*/ None,
    /*0x1B*/ None,
    /*0x1C*/ None,
    /*0x1D*/ Some(InstructionSignature::new(Opcode::ORA, AddressingMode::AbsoluteX)),
    /*0x1E*/ None,
    /*0x1F*/ None,
    /*0x20*/ Some(InstructionSignature::new(Opcode::JSR, AddressingMode::Absolute)),
    /*0x21*/ Some(InstructionSignature::new(Opcode::AND, AddressingMode::IndexedIndirect)),
    /*0x22*/ None,
    /*0x23*/ None,
    /*0x24*/ Some(InstructionSignature::new(Opcode::BIT, AddressingMode::ZeroPage)),
    /*0x25*/ Some(InstructionSignature::new(Opcode::AND, AddressingMode::ZeroPage)),
    /*0x26*/ None,
    /*0x27*/ None,
    /*0x28*/ Some(InstructionSignature::new(Opcode::PLP, AddressingMode::Implied)),
    /*0x29*/ Some(InstructionSignature::new(Opcode::AND, AddressingMode::Immediate)),
    /*0x2A*/ None,
    /*0x2B*/ None,
    /*0x2C*/ Some(InstructionSignature::new(Opcode::BIT, AddressingMode::Absolute)),
    /*0x2D*/ Some(InstructionSignature::new(Opcode::AND, AddressingMode::Absolute)),
    /*0x2E*/ None,
    /*0x2F*/ None,
    /*0x30*/ None,
    /*0x31*/ Some(InstructionSignature::new(Opcode::AND, AddressingMode::IndirectIndexed)),
    /*0x32*/ None,
    /*0x33*/ None,
    /*0x34*/ None,
    /*0x35*/ Some(InstructionSignature::new(Opcode::AND, AddressingMode::ZeroPageX)),
    /*0x36*/ None,
    /*0x37*/ None,
    /*0x38*/ None,
    /*0x39*/ Some(InstructionSignature::new(Opcode::AND, AddressingMode::AbsoluteY)),
    /*0x3A*/ None,
    /*0x3B*/ None,
    /*0x3C*/ None,
    /*0x3D*/ Some(InstructionSignature::new(Opcode::AND, AddressingMode::AbsoluteX)),
    /*0x3E*/ None,
    /*0x3F*/ None,
    /*0x40*/ None,
    /*0x41*/ Some(InstructionSignature::new(Opcode::EOR, AddressingMode::IndexedIndirect)),
    /*0x42*/ None,
    /*0x43*/ None,
    /*0x44*/ None,
    /*0x45*/ Some(InstructionSignature::new(Opcode::EOR, AddressingMode::ZeroPage)),
    /*0x46*/ None,
    /*0x47*/ None,
    /*0x48*/ Some(InstructionSignature::new(Opcode::PHA, AddressingMode::Implied)),
    /*0x49*/ Some(InstructionSignature::new(Opcode::EOR, AddressingMode::Immediate)),
    /*0x4A*/ None,
    /*0x4B*/ None,
    /*0x4C*/ Some(InstructionSignature::new(Opcode::JMP, AddressingMode::Absolute)),
    /*0x4D*/ Some(InstructionSignature::new(Opcode::EOR, AddressingMode::Absolute)),
    /*0x4E*/ None,
    /*0x4F*/ None,
    /*0x50*/ None,
    /*0x51*/ Some(InstructionSignature::new(Opcode::EOR, AddressingMode::IndirectIndexed)),
    /*0x52*/ None,
    /*0x53*/ None,
    /*0x54*/ None,
    /*0x55*/ Some(InstructionSignature::new(Opcode::EOR, AddressingMode::ZeroPageX)),
    /*0x56*/ None,
    /*0x57*/ None,
    /*0x58*/ None,
    /*0x59*/ Some(InstructionSignature::new(Opcode::EOR, AddressingMode::AbsoluteY)),
    /*0x5A*/ None,
    /*0x5B*/ None,
    /*0x5C*/ None,
    /*0x5D*/ Some(InstructionSignature::new(Opcode::EOR, AddressingMode::AbsoluteX)),
    /*0x5E*/ None,
    /*0x5F*/ None,
    /*0x60*/ Some(InstructionSignature::new(Opcode::RTS, AddressingMode::Implied)),
    /*0x61*/ None,
    /*0x62*/ None,
    /*0x63*/ None,
    /*0x64*/ None,
    /*0x65*/ None,
    /*0x66*/ None,
    /*0x67*/ None,
    /*0x68*/ Some(InstructionSignature::new(Opcode::PLA, AddressingMode::Implied)),
    /*0x69*/ None,
    /*0x6A*/ None,
    /*0x6B*/ None,
    /*0x6C*/ Some(InstructionSignature::new(Opcode::JMP, AddressingMode::Indirect)),
    /*0x6D*/ None,
    /*0x6E*/ None,
    /*0x6F*/ None,
    /*0x70*/ None,
    /*0x71*/ None,
    /*0x72*/ None,
    /*0x73*/ None,
    /*0x74*/ None,
    /*0x75*/ None,
    /*0x76*/ None,
    /*0x77*/ None,
    /*0x78*/ None,
    /*0x79*/ None,
    /*0x7A*/ None,
    /*0x7B*/ None,
    /*0x7C*/ None,
    /*0x7D*/ None,
    /*0x7E*/ None,
    /*0x7F*/ None,
    /*0x80*/ None,
    /*0x81*/ Some(InstructionSignature::new(Opcode::STA, AddressingMode::IndexedIndirect)),
    /*0x82*/ None,
    /*0x83*/ None,
    /*0x84*/ Some(InstructionSignature::new(Opcode::STY, AddressingMode::ZeroPage)),
    /*0x85*/ Some(InstructionSignature::new(Opcode::STA, AddressingMode::ZeroPage)),
    /*0x86*/ Some(InstructionSignature::new(Opcode::STX, AddressingMode::ZeroPage)),
    /*0x87*/ None,
    /*0x88*/ None,
    /*0x89*/ None,
    /*0x8A*/ Some(InstructionSignature::new(Opcode::TSA, AddressingMode::Implied)),
    /*0x8B*/ None,
    /*0x8C*/ Some(InstructionSignature::new(Opcode::STY, AddressingMode::Absolute)),
    /*0x8D*/ Some(InstructionSignature::new(Opcode::STA, AddressingMode::Absolute)),
    /*0x8E*/ Some(InstructionSignature::new(Opcode::STX, AddressingMode::Absolute)),
    /*0x8F*/ None,
    /*0x90*/ None,
    /*0x91*/ Some(InstructionSignature::new(Opcode::STA, AddressingMode::IndirectIndexed)),
    /*0x92*/ None,
    /*0x93*/ None,
    /*0x94*/ Some(InstructionSignature::new(Opcode::STY, AddressingMode::ZeroPageX)),
    /*0x95*/ Some(InstructionSignature::new(Opcode::STA, AddressingMode::ZeroPageX)),
    /*0x96*/ Some(InstructionSignature::new(Opcode::STX, AddressingMode::ZeroPageY)),
    /*0x97*/ None,
    /*0x98*/ None,
    /*0x99*/ Some(InstructionSignature::new(Opcode::STA, AddressingMode::AbsoluteY)),
    /*0x9A*/ Some(InstructionSignature::new(Opcode::TXS, AddressingMode::Implied)),
    /*0x9B*/ None,
    /*0x9C*/ None,
    /*0x9D*/ Some(InstructionSignature::new(Opcode::STA, AddressingMode::AbsoluteX)),
    /*0x9E*/ None,
    /*0x9F*/ None,
    /*0xA0*/ Some(InstructionSignature::new(Opcode::LDY, AddressingMode::Immediate)),
    /*0xA1*/ Some(InstructionSignature::new(Opcode::LDA, AddressingMode::IndexedIndirect)),
    /*0xA2*/ Some(InstructionSignature::new(Opcode::LDX, AddressingMode::Immediate)),
    /*0xA3*/ None,
    /*0xA4*/ Some(InstructionSignature::new(Opcode::LDY, AddressingMode::ZeroPage)),
    /*0xA5*/ Some(InstructionSignature::new(Opcode::LDA, AddressingMode::ZeroPage)),
    /*0xA6*/ Some(InstructionSignature::new(Opcode::LDX, AddressingMode::ZeroPage)),
    /*0xA7*/ None,
    /*0xA8*/ None,
    /*0xA9*/ Some(InstructionSignature::new(Opcode::LDA, AddressingMode::Immediate)),
    /*0xAA*/ None,
    /*0xAB*/ None,
    /*0xAC*/ Some(InstructionSignature::new(Opcode::LDY, AddressingMode::Absolute)),
    /*0xAD*/ Some(InstructionSignature::new(Opcode::LDA, AddressingMode::Absolute)),
    /*0xAE*/ Some(InstructionSignature::new(Opcode::LDX, AddressingMode::Absolute)),
    /*0xAF*/ None,
    /*0xB0*/ None,
    /*0xB1*/ Some(InstructionSignature::new(Opcode::LDA, AddressingMode::IndirectIndexed)),
    /*0xB2*/ None,
    /*0xB3*/ None,
    /*0xB4*/ Some(InstructionSignature::new(Opcode::LDY, AddressingMode::ZeroPageX)),
    /*0xB5*/ Some(InstructionSignature::new(Opcode::LDA, AddressingMode::ZeroPageX)),
    /*0xB6*/ Some(InstructionSignature::new(Opcode::LDX, AddressingMode::ZeroPageY)),
    /*0xB7*/ None,
    /*0xB8*/ None,
    /*0xB9*/ Some(InstructionSignature::new(Opcode::LDA, AddressingMode::AbsoluteY)),
    /*0xBA*/ Some(InstructionSignature::new(Opcode::TSX, AddressingMode::Implied)),
    /*0xBB*/ None,
    /*0xBC*/ Some(InstructionSignature::new(Opcode::LDY, AddressingMode::AbsoluteX)),
    /*0xBD*/ Some(InstructionSignature::new(Opcode::LDA, AddressingMode::AbsoluteX)),
    /*0xBE*/ Some(InstructionSignature::new(Opcode::LDX, AddressingMode::AbsoluteY)),
    /*0xBF*/ None,
    /*0xC0*/ None,
    /*0xC1*/ None,
    /*0xC2*/ None,
    /*0xC3*/ None,
    /*0xC4*/ None,
    /*0xC5*/ None,
    /*0xC6*/ None,
    /*0xC7*/ None,
    /*0xC8*/ None,
    /*0xC9*/ None,
    /*0xCA*/ None,
    /*0xCB*/ None,
    /*0xCC*/ None,
    /*0xCD*/ None,
    /*0xCE*/ None,
    /*0xCF*/ None,
    /*0xD0*/ None,
    /*0xD1*/ None,
    /*0xD2*/ None,
    /*0xD3*/ None,
    /*0xD4*/ None,
    /*0xD5*/ None,
    /*0xD6*/ None,
    /*0xD7*/ None,
    /*0xD8*/ None,
    /*0xD9*/ None,
    /*0xDA*/ None,
    /*0xDB*/ None,
    /*0xDC*/ None,
    /*0xDD*/ None,
    /*0xDE*/ None,
    /*0xDF*/ None,
    /*0xE0*/ None,
    /*0xE1*/ None,
    /*0xE2*/ None,
    /*0xE3*/ None,
    /*0xE4*/ None,
    /*0xE5*/ None,
    /*0xE6*/ None,
    /*0xE7*/ None,
    /*0xE8*/ None,
    /*0xE9*/ None,
    /*0xEA*/ None,
    /*0xEB*/ None,
    /*0xEC*/ None,
    /*0xED*/ None,
    /*0xEE*/ None,
    /*0xEF*/ None,
    /*0xF0*/ None,
    /*0xF1*/ None,
    /*0xF2*/ None,
    /*0xF3*/ None,
    /*0xF4*/ None,
    /*0xF5*/ None,
    /*0xF6*/ None,
    /*0xF7*/ None,
    /*0xF8*/ None,
    /*0xF9*/ None,
    /*0xFA*/ None,
    /*0xFB*/ None,
    /*0xFC*/ None,
    /*0xFD*/ None,
    /*0xFE*/ None,
    /*0xFF*/ None,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_every_documented_opcode() {
        assert_eq!(
            InstructionSignature::lookup(INS_LDA_IMMEDIATE),
            Some(InstructionSignature::new(Opcode::LDA, AddressingMode::Immediate))
        );
        assert_eq!(
            InstructionSignature::lookup(INS_JMP_INDIRECT),
            Some(InstructionSignature::new(Opcode::JMP, AddressingMode::Indirect))
        );
        assert_eq!(
            InstructionSignature::lookup(INS_TSA_IMPLIED),
            Some(InstructionSignature::new(Opcode::TSA, AddressingMode::Implied))
        );
    }

    #[test]
    fn lookup_returns_none_for_unknown_opcodes() {
        assert_eq!(InstructionSignature::lookup(0x02), None);
        assert_eq!(InstructionSignature::lookup(0xFF), None);
    }
}
