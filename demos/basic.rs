//! A small driver that assembles a handful of instructions by hand, runs
//! them through `MOS6502::execute`, and prints the resulting register
//! file. Not part of the crate's public surface -- just a way to poke at
//! the interpreter from the command line.

use mos6502::instruction::*;
use mos6502::{FlatMemory, Memory, MOS6502};

fn main() {
    env_logger::init();

    let mut memory = FlatMemory::new();
    let mut cpu = MOS6502::new();
    cpu.reset(&mut memory, 0x0200);

    // LDX #$05
    // LDA #$00,X       ; zero page, indexed by X
    // STA $0300
    // JSR $0300        ; falls through into whatever is there, for demonstration
    let program = [
        INS_LDX_IMMEDIATE, 0x05,
        INS_LDA_ZERO_PAGE_X, 0x10,
        INS_STA_ABSOLUTE, 0x00, 0x03,
    ];
    memory = memory.with_bytes_at(0x0200, &program);
    memory.write_byte(0x15, 0x7F);

    let cycles = cpu.execute(20, &mut memory);

    println!("executed {} cycles", cycles);
    println!(
        "a={:#04x} x={:#04x} y={:#04x} p={:#04x} pc={:#06x} sp={:#04x}",
        cpu.a, cpu.x, cpu.y, cpu.p.0, cpu.pc, cpu.sp
    );
    println!("debug: {:?}", cpu.debug);
    println!("memory[0x0300]={:#04x}", memory.read_byte(0x0300));
}
