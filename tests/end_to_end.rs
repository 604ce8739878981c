use mos6502::instruction::*;
use mos6502::{FlatMemory, Memory, StatusFlag, DEFAULT_RESET_VECTOR, MOS6502};

fn cpu_reset_at_default_vector() -> (MOS6502, FlatMemory) {
    let mut memory = FlatMemory::new();
    let mut cpu = MOS6502::new();
    cpu.reset(&mut memory, DEFAULT_RESET_VECTOR);
    (cpu, memory)
}

#[test]
fn immediate_load_sets_the_negative_flag() {
    let (mut cpu, mut memory) = cpu_reset_at_default_vector();
    memory = memory.with_bytes_at(DEFAULT_RESET_VECTOR, &[INS_LDA_IMMEDIATE, 0x84]);

    let cycles = cpu.execute(2, &mut memory);

    assert_eq!(cpu.a, 0x84);
    assert!(cpu.p.get(StatusFlag::Negative));
    assert!(!cpu.p.get(StatusFlag::Zero));
    assert_eq!(cycles, 2);
}

#[test]
fn zero_page_x_wraps_around_page_zero_end_to_end() {
    let (mut cpu, mut memory) = cpu_reset_at_default_vector();
    cpu.x = 0xFF;
    memory = memory.with_bytes_at(DEFAULT_RESET_VECTOR, &[INS_LDA_ZERO_PAGE_X, 0x80]);
    memory.write_byte(0x7F, 0x24);

    let cycles = cpu.execute(4, &mut memory);

    assert_eq!(cpu.a, 0x24);
    assert_eq!(cycles, 4);
}

#[test]
fn absolute_y_pays_the_page_cross_penalty_end_to_end() {
    let (mut cpu, mut memory) = cpu_reset_at_default_vector();
    cpu.y = 0xFF;
    memory = memory.with_bytes_at(DEFAULT_RESET_VECTOR, &[INS_LDA_ABSOLUTE_Y, 0x02, 0x44]);
    memory.write_byte(0x4501, 0x07);

    let cycles = cpu.execute(5, &mut memory);

    assert_eq!(cpu.a, 0x07);
    assert_eq!(cycles, 5);
}

#[test]
fn jsr_then_rts_round_trips_pc_and_sp() {
    let (mut cpu, mut memory) = cpu_reset_at_default_vector();
    let pre_run_sp = cpu.sp;
    let pre_run_status = cpu.p;
    memory = memory.with_bytes_at(DEFAULT_RESET_VECTOR, &[INS_JSR_ABSOLUTE, 0x00, 0x02]);
    memory.write_byte(0x0200, INS_RTS_IMPLIED);

    let cycles = cpu.execute(12, &mut memory);

    assert_eq!(cpu.pc, 0xFFFF);
    assert_eq!(cpu.sp, pre_run_sp);
    assert_eq!(cpu.p, pre_run_status);
    assert_eq!(cycles, 12);
}

#[test]
fn bit_zero_page_reads_flags_from_memory_not_the_masked_result() {
    let (mut cpu, mut memory) = cpu_reset_at_default_vector();
    cpu.a = 0xB0;
    memory = memory.with_bytes_at(DEFAULT_RESET_VECTOR, &[INS_BIT_ZERO_PAGE, 0x42]);
    memory.write_byte(0x0042, 0x03);

    let cycles = cpu.execute(3, &mut memory);

    assert_eq!(cpu.a, 0xB0);
    assert!(cpu.p.get(StatusFlag::Zero), "0xB0 & 0x03 == 0");
    assert!(!cpu.p.get(StatusFlag::Overflow), "bit 6 of 0x03 is clear");
    assert!(!cpu.p.get(StatusFlag::Negative), "bit 7 of 0x03 is clear");
    assert_eq!(cycles, 3);
}

#[test]
fn unknown_opcode_is_flagged_and_charges_only_the_fetch() {
    let (mut cpu, mut memory) = cpu_reset_at_default_vector();
    memory = memory.with_bytes_at(DEFAULT_RESET_VECTOR, &[0x00]);
    let a_before = cpu.a;
    let x_before = cpu.x;
    let y_before = cpu.y;

    let cycles = cpu.execute(1, &mut memory);

    assert!(cpu.debug.unhandled_instruction);
    assert_eq!(cycles, 1);
    assert_eq!(cpu.a, a_before);
    assert_eq!(cpu.x, x_before);
    assert_eq!(cpu.y, y_before);
}

#[test]
fn every_load_opcode_sets_zero_and_negative_from_the_loaded_value() {
    let loads: &[(u8, fn(&MOS6502) -> u8)] = &[
        (INS_LDA_IMMEDIATE, |cpu| cpu.a),
        (INS_LDX_IMMEDIATE, |cpu| cpu.x),
        (INS_LDY_IMMEDIATE, |cpu| cpu.y),
    ];

    for &(opcode, register) in loads {
        let (mut cpu, mut memory) = cpu_reset_at_default_vector();
        memory = memory.with_bytes_at(DEFAULT_RESET_VECTOR, &[opcode, 0x00]);
        cpu.execute(2, &mut memory);
        assert_eq!(register(&cpu), 0x00);
        assert!(cpu.p.get(StatusFlag::Zero));
    }
}

#[test]
fn every_store_opcode_leaves_flags_untouched() {
    let stores: &[(u8, fn(&mut MOS6502, u8))] = &[
        (INS_STA_ABSOLUTE, |cpu, v| cpu.a = v),
        (INS_STX_ABSOLUTE, |cpu, v| cpu.x = v),
        (INS_STY_ABSOLUTE, |cpu, v| cpu.y = v),
    ];

    for &(opcode, set_register) in stores {
        let (mut cpu, mut memory) = cpu_reset_at_default_vector();
        set_register(&mut cpu, 0x00);
        cpu.p.set(StatusFlag::Zero, false);
        memory = memory.with_bytes_at(DEFAULT_RESET_VECTOR, &[opcode, 0x00, 0x03]);

        cpu.execute(4, &mut memory);

        assert_eq!(memory.read_byte(0x0300), 0x00);
        assert!(!cpu.p.get(StatusFlag::Zero), "STA/STX/STY must not touch flags");
    }
}
