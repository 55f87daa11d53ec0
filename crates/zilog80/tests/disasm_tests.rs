//! Disassembler and supportability-query tests.

use emu_bus::SimpleBus;
use zilog80::{Context, Error, Z80, is_opcode_supported};

fn cpu_with(program: &[u8]) -> Z80<SimpleBus> {
    let mut bus = SimpleBus::new();
    bus.load(0x0000, program);
    let mut cpu = Z80::new();
    cpu.connect_bus(bus);
    cpu
}

#[test]
fn listing_is_literal() {
    let mut cpu = cpu_with(&[
        0x3E, 0x05, // LD A,&05
        0x80, // ADD A,B
        0xDD, 0x21, 0x34, 0x12, // LD IX,&1234
        0xDD, 0x36, 0x02, 0x7B, // LD (IX+2),&7B
        0xFD, 0xCB, 0xFE, 0x46, // BIT 0,(IY-2)
        0xED, 0xB0, // LDIR
        0x20, 0x05, // JR NZ,$+7
        0xC3, 0x00, 0x10, // JP &1000
        0xD3, 0xFE, // OUT (&FE),A
        0x00, // NOP
    ]);
    let listing = cpu.disassemble(0x0000, 0x0018).expect("listing");
    let expected: Vec<(u16, String)> = [
        (0x0000, "LD A,&05"),
        (0x0002, "ADD A,B"),
        (0x0003, "LD IX,&1234"),
        (0x0007, "LD (IX+2),&7B"),
        (0x000B, "BIT 0,(IY-2)"),
        (0x000F, "LDIR"),
        (0x0011, "JR NZ,$+7"),
        (0x0013, "JP &1000"),
        (0x0016, "OUT (&FE),A"),
        (0x0018, "NOP"),
    ]
    .into_iter()
    .map(|(a, s)| (a, s.to_string()))
    .collect();
    assert_eq!(listing, expected);
}

#[test]
fn final_instruction_may_overshoot_range() {
    let mut cpu = cpu_with(&[0x21, 0x34, 0x12]); // LD HL,&1234
    let listing = cpu.disassemble(0x0000, 0x0000).expect("listing");
    assert_eq!(listing, vec![(0x0000, "LD HL,&1234".to_string())]);
}

#[test]
fn backwards_range_is_malformed() {
    let mut cpu = cpu_with(&[]);
    assert_eq!(
        cpu.disassemble(0x0005, 0x0004),
        Err(Error::MalformedRange { start: 0x0005, end: 0x0004 })
    );
}

#[test]
fn disassemble_without_bus_fails() {
    let mut cpu: Z80<SimpleBus> = Z80::new();
    assert_eq!(cpu.disassemble(0, 0), Err(Error::BusNotConnected));
}

#[test]
fn undefined_opcode_in_range_errors() {
    let mut cpu = cpu_with(&[0x00, 0xDD, 0x00]);
    assert_eq!(
        cpu.disassemble(0x0000, 0x0002),
        Err(Error::UnsupportedOpcode { context: Context::Dd, opcode: 0x00 })
    );
}

#[test]
fn negative_relative_target() {
    let mut cpu = cpu_with(&[0x10, 0xFE]); // DJNZ back onto itself
    let listing = cpu.disassemble(0x0000, 0x0000).expect("listing");
    assert_eq!(listing[0].1, "DJNZ $+0");
}

#[test]
fn supportability_fixtures() {
    assert!(is_opcode_supported("00"));
    assert!(is_opcode_supported("C3"));
    assert!(is_opcode_supported("CB47"));
    assert!(is_opcode_supported("ED4A"));
    assert!(is_opcode_supported("DD70"));
    assert!(is_opcode_supported("DDCB0206"));
    assert!(is_opcode_supported("FDCB0206"));

    // Prefix changes nothing at DD 00, so the slot is empty.
    assert!(!is_opcode_supported("DD00"));
    // Same for LD combinations that touch neither H, L nor (IX+d).
    assert!(!is_opcode_supported("DD41"));
    assert!(!is_opcode_supported("FD7F"));
    // A prefix alone is not a resolvable opcode.
    assert!(!is_opcode_supported("ED"));
    assert!(!is_opcode_supported("DD"));
    assert!(!is_opcode_supported("DDCB"));
    // ED holes stay holes.
    assert!(!is_opcode_supported("EDFF"));
    assert!(!is_opcode_supported("ED3F"));
    // Malformed queries are unsupported, not errors.
    assert!(!is_opcode_supported(""));
    assert!(!is_opcode_supported("0"));
    assert!(!is_opcode_supported("GG"));
    assert!(!is_opcode_supported("DDCB02"));
    assert!(!is_opcode_supported("DDCB020646"));
}

#[test]
fn hex_queries_are_case_insensitive() {
    assert!(is_opcode_supported("dd70"));
    assert!(is_opcode_supported("fdcb0206"));
}
