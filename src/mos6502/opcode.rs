/// The closed set of operations this core understands.
///
/// Every variant here has a corresponding entry (or entries, across
/// addressing modes) in `super::instruction`'s opcode table. Any opcode
/// byte with no entry in that table is unknown, not unimplemented -- see
/// [`super::DebugFlags::unhandled_instruction`].
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Opcode {
    // =====================================================================================
    // ================================ Register Operations ================================
    // =====================================================================================

    /// Load a byte of memory into `A`
    LDA,

    /// Load a byte of memory into `X`
    LDX,

    /// Load a byte of memory into `Y`
    LDY,

    /// Store the contents of `A` into memory
    STA,

    /// Store the contents of `X` into memory
    STX,

    /// Store the contents of `Y` into memory
    STY,

    // =====================================================================================
    // =================================== Stack Operations ================================
    // =====================================================================================

    /// Copy `SP` into `X`, setting `Zero`/`Negative` from the copied value
    TSX,

    /// Copy `SP` into `A`, setting `Zero`/`Negative` from the copied value
    TSA,

    /// Copy `X` into `SP`. Does not affect any status flag.
    TXS,

    /// Push `A` onto the stack
    PHA,

    /// Push `P` onto the stack
    PHP,

    /// Pull the current stack value into `A`, setting `Zero`/`Negative`
    PLA,

    /// Pull the current stack value into `P` directly, with no flag
    /// recalculation
    PLP,

    // =====================================================================================
    // ================================= Logical Operations ================================
    // =====================================================================================

    /// Logical AND. Set `A` to `A & M` where `M` is the memory targeted by this instruction
    AND,

    /// Exclusive OR. Set `A` to `A XOR M` where `M` is the memory targeted by this instruction
    EOR,

    /// Logical OR. Set `A` to `A | M` where `M` is the memory targeted by this instruction
    ORA,

    /// Bit Test. `A` is used as a mask which is AND'ed with the target memory
    /// location to produce `Zero`. `Overflow` and `Negative` are copied from
    /// the target memory location itself, not the masked result.
    BIT,

    // =====================================================================================
    // =================================== Jumps & Calls ===================================
    // =====================================================================================

    /// Set `PC` to the targeted address
    JMP,

    /// Push the return address onto the stack, then set `PC` to the targeted address
    JSR,

    /// Pull the return address from the stack and resume at the instruction after it
    RTS,
}
