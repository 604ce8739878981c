/// The set of registers that can be read, written or copied between by the
/// register-oriented opcodes (`LDA`/`LDX`/`LDY`, `PHA`/`PHP`/`PLA`/`PLP`,
/// `TSX`/`TSA`/`TXS`).
///
/// `P` and `SP` are included alongside `A`/`X`/`Y` so push/pull/transfer
/// handlers can be written once against a generic register instead of once
/// per concrete field.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Register {
    A,
    X,
    Y,
    P,
    SP,
}
