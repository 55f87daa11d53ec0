//! Whole-program instruction tests: load a routine into RAM, run it to
//! HALT, assert on the architectural state it leaves behind.

use emu_bus::SimpleBus;
use zilog80::Z80;
use zilog80::flags::{CF, HF, NF, PF, SF, UF, XF, ZF};

fn cpu_with(program: &[u8]) -> Z80<SimpleBus> {
    let mut bus = SimpleBus::new();
    bus.load(0x0000, program);
    let mut cpu = Z80::new();
    cpu.connect_bus(bus);
    cpu.reset(true);
    cpu
}

fn run_to_halt(cpu: &mut Z80<SimpleBus>) {
    for _ in 0..100_000 {
        if cpu.regs.halted {
            return;
        }
        cpu.step().expect("program executes");
    }
    panic!("program did not halt");
}

fn run(program: &[u8]) -> Z80<SimpleBus> {
    let mut cpu = cpu_with(program);
    run_to_halt(&mut cpu);
    cpu
}

#[test]
fn add_sets_overflow_and_half_carry() {
    // LD A,&7F / ADD A,&02
    let cpu = run(&[0x3E, 0x7F, 0xC6, 0x02, 0x76]);
    assert_eq!(cpu.regs.a, 0x81);
    assert_eq!(cpu.regs.f, SF | HF | PF);
}

#[test]
fn sub_sets_borrow_chain() {
    // LD A,&06 / SUB &0C
    let cpu = run(&[0x3E, 0x06, 0xD6, 0x0C, 0x76]);
    assert_eq!(cpu.regs.a, 0xFA);
    assert_eq!(cpu.regs.f, SF | UF | HF | XF | NF | CF);
}

#[test]
fn daa_adjusts_bcd_sum() {
    // LD A,&15 / LD B,&27 / ADD A,B / DAA
    let cpu = run(&[0x3E, 0x15, 0x06, 0x27, 0x80, 0x27, 0x76]);
    assert_eq!(cpu.regs.a, 0x42);
    assert_eq!(cpu.regs.f, HF | PF);
}

#[test]
fn call_pushes_return_address() {
    let mut cpu = cpu_with(&[]);
    let bus = cpu.bus_mut().expect("bus connected");
    bus.load(0x0080, &[0xCD, 0x90, 0x01]); // CALL &0190
    bus.load(0x0190, &[0x76]);
    cpu.regs.pc = 0x0080;
    cpu.regs.sp = 0x2000;
    let spent = cpu.step().expect("call executes");
    assert_eq!(spent, 17);
    assert_eq!(cpu.regs.pc, 0x0190);
    assert_eq!(cpu.regs.sp, 0x1FFE);
    let bus = cpu.bus().expect("bus connected");
    assert_eq!(bus.peek(0x1FFE), 0x83);
    assert_eq!(bus.peek(0x1FFF), 0x00);
}

#[test]
fn shift_add_multiply_routine() {
    // 21 * 42 by shift-and-add: SRL C / JR NC / ADD HL,DE / SLA E / RL D
    // / DEC B / JP NZ.
    let cpu = run(&[
        0x06, 0x08, // LD B,&08
        0x0E, 0x15, // LD C,&15
        0x11, 0x2A, 0x00, // LD DE,&002A
        0x21, 0x00, 0x00, // LD HL,&0000
        0xCB, 0x39, // loop: SRL C
        0x30, 0x01, // JR NC,skip
        0x19, // ADD HL,DE
        0xCB, 0x23, // skip: SLA E
        0xCB, 0x12, // RL D
        0x05, // DEC B
        0xC2, 0x0A, 0x00, // JP NZ,loop
        0x76, // HALT
    ]);
    assert_eq!(cpu.regs.hl(), 0x0372);
    assert_eq!(cpu.regs.b, 0);
}

#[test]
fn ldir_copies_block() {
    let mut cpu = cpu_with(&[
        0x21, 0x00, 0x20, // LD HL,&2000
        0x11, 0x00, 0x30, // LD DE,&3000
        0x01, 0x03, 0x00, // LD BC,&0003
        0xED, 0xB0, // LDIR
        0x76,
    ]);
    cpu.bus_mut()
        .expect("bus connected")
        .load(0x2000, &[0x11, 0x22, 0x33]);
    run_to_halt(&mut cpu);
    let bus = cpu.bus().expect("bus connected");
    assert_eq!(bus.peek(0x3000), 0x11);
    assert_eq!(bus.peek(0x3001), 0x22);
    assert_eq!(bus.peek(0x3002), 0x33);
    assert_eq!(cpu.regs.bc(), 0);
    assert_eq!(cpu.regs.hl(), 0x2003);
    assert_eq!(cpu.regs.de(), 0x3003);
    assert_eq!(cpu.regs.f & PF, 0);
}

#[test]
fn cpir_stops_on_match() {
    let mut cpu = cpu_with(&[
        0x21, 0x00, 0x20, // LD HL,&2000
        0x01, 0x10, 0x00, // LD BC,&0010
        0x3E, 0x7E, // LD A,&7E
        0xED, 0xB1, // CPIR
        0x76,
    ]);
    cpu.bus_mut().expect("bus connected").load(0x2002, &[0x7E]);
    run_to_halt(&mut cpu);
    assert_ne!(cpu.regs.f & ZF, 0);
    assert_eq!(cpu.regs.hl(), 0x2003);
    assert_eq!(cpu.regs.bc(), 0x000D);
}

#[test]
fn indexed_write_and_increment() {
    // LD IX,&2000 / LD (IX+5),&AA / INC (IX+5)
    let cpu = run(&[
        0xDD, 0x21, 0x00, 0x20, 0xDD, 0x36, 0x05, 0xAA, 0xDD, 0x34, 0x05, 0x76,
    ]);
    let bus = cpu.bus().expect("bus connected");
    assert_eq!(bus.peek(0x2005), 0xAB);
}

#[test]
fn index_register_halves() {
    // LD IX,&1234 / LD A,IXH / ADD A,IXL
    let cpu = run(&[0xDD, 0x21, 0x34, 0x12, 0xDD, 0x7C, 0xDD, 0x85, 0x76]);
    assert_eq!(cpu.regs.a, 0x12 + 0x34);
}

#[test]
fn exchanges_swap_banks() {
    // LD HL,&1111 / EX DE,HL / EXX / LD HL,&2222 / EXX
    let cpu = run(&[0x21, 0x11, 0x11, 0xEB, 0xD9, 0x21, 0x22, 0x22, 0xD9, 0x76]);
    assert_eq!(cpu.regs.de(), 0x1111);
    assert_eq!(cpu.regs.hl(), 0x0000);
    assert_eq!(cpu.regs.hl_alt(), 0x2222);
}

#[test]
fn rst_reaches_vector_and_ret_returns() {
    let mut cpu = cpu_with(&[0xEF, 0x76]); // RST &28 / HALT
    cpu.bus_mut().expect("bus connected").load(0x0028, &[0xC9]);
    run_to_halt(&mut cpu);
    assert_eq!(cpu.regs.pc, 0x0002);
    assert_eq!(cpu.regs.sp, 0xFFFF);
}

#[test]
fn djnz_counts_down() {
    // LD B,&05 / loop: DJNZ loop
    let cpu = run(&[0x06, 0x05, 0x10, 0xFE, 0x76]);
    assert_eq!(cpu.regs.b, 0);
}

#[test]
fn rlca_wraps_bit_seven() {
    let cpu = run(&[0x3E, 0x81, 0x07, 0x76]);
    assert_eq!(cpu.regs.a, 0x03);
    assert_ne!(cpu.regs.f & CF, 0);
}

#[test]
fn neg_negates_accumulator() {
    let cpu = run(&[0x3E, 0x01, 0xED, 0x44, 0x76]);
    assert_eq!(cpu.regs.a, 0xFF);
    assert_eq!(cpu.regs.f, SF | UF | HF | XF | NF | CF);
}

#[test]
fn rld_rotates_nibbles_through_memory() {
    let mut cpu = cpu_with(&[0x21, 0x00, 0x20, 0x3E, 0x12, 0xED, 0x6F, 0x76]);
    cpu.bus_mut().expect("bus connected").load(0x2000, &[0x34]);
    run_to_halt(&mut cpu);
    assert_eq!(cpu.regs.a, 0x13);
    assert_eq!(cpu.bus().expect("bus connected").peek(0x2000), 0x42);
}

#[test]
fn out_writes_port_from_accumulator() {
    let cpu = run(&[0x3E, 0x5A, 0xD3, 0x42, 0x76]); // LD A,&5A / OUT (&42),A
    let writes = cpu.bus().expect("bus connected").port_writes();
    assert_eq!(writes, &[(0x5A42, 0x5A)]);
}

#[test]
fn in_from_port_through_bc() {
    let mut cpu = cpu_with(&[0x01, 0x34, 0x12, 0xED, 0x78, 0x76]); // LD BC / IN A,(C)
    cpu.bus_mut().expect("bus connected").set_port_read(0x1234, 0x99);
    run_to_halt(&mut cpu);
    assert_eq!(cpu.regs.a, 0x99);
    // IN r,(C) computes flags, IN A,(n) would not.
    assert_ne!(cpu.regs.f & SF, 0);
    assert_ne!(cpu.regs.f & PF, 0);
}
