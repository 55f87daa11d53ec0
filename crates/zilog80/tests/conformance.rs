//! Conformance tests driven by Tom Harte's `SingleStepTests` for the Z80.
//!
//! Each JSON file holds 1,000 cases for one opcode: an initial machine
//! state, a final machine state, and the cycle count. Files whose opcode
//! this core does not implement (prefix no-change slots, ED holes) are
//! skipped up front via the supportability query.
//!
//! Test data lives in `test-data/z80/v1/`.

use std::fs;
use std::panic;
use std::path::Path;

use emu_bus::SimpleBus;
use serde::Deserialize;
use zilog80::{InterruptMode, Z80, is_opcode_supported};

/// JSON test case format.
#[derive(Deserialize)]
struct TestCase {
    name: String,
    initial: CpuState,
    #[serde(rename = "final")]
    final_state: CpuState,
    cycles: Vec<serde_json::Value>,
    #[serde(default)]
    ports: Vec<(u16, u8, String)>,
}

/// JSON CPU state format.
#[derive(Deserialize)]
struct CpuState {
    pc: u16,
    sp: u16,
    a: u8,
    b: u8,
    c: u8,
    d: u8,
    e: u8,
    f: u8,
    h: u8,
    l: u8,
    i: u8,
    r: u8,
    ix: u16,
    iy: u16,
    wz: u16,
    #[serde(rename = "af_")]
    af_alt: u16,
    #[serde(rename = "bc_")]
    bc_alt: u16,
    #[serde(rename = "de_")]
    de_alt: u16,
    #[serde(rename = "hl_")]
    hl_alt: u16,
    iff1: u8,
    iff2: u8,
    im: u8,
    ei: u8,
    q: u8,
    ram: Vec<(u16, u8)>,
}

/// Build a CPU and bus from the initial test state.
fn setup(test: &TestCase) -> Z80<SimpleBus> {
    let state = &test.initial;
    let mut bus = SimpleBus::new();
    for &(addr, value) in &state.ram {
        bus.load(addr, &[value]);
    }
    for &(port, value, ref dir) in &test.ports {
        if dir == "r" {
            bus.set_port_read(port, value);
        }
    }

    let mut cpu = Z80::new();
    cpu.regs.a = state.a;
    cpu.regs.f = state.f;
    cpu.regs.b = state.b;
    cpu.regs.c = state.c;
    cpu.regs.d = state.d;
    cpu.regs.e = state.e;
    cpu.regs.h = state.h;
    cpu.regs.l = state.l;

    cpu.regs.set_af_alt(state.af_alt);
    cpu.regs.set_bc_alt(state.bc_alt);
    cpu.regs.set_de_alt(state.de_alt);
    cpu.regs.set_hl_alt(state.hl_alt);

    cpu.regs.ix = state.ix;
    cpu.regs.iy = state.iy;
    cpu.regs.sp = state.sp;
    cpu.regs.pc = state.pc;
    cpu.regs.i = state.i;
    cpu.regs.r = state.r;
    cpu.regs.wz = state.wz;

    cpu.regs.iff1 = state.iff1 != 0;
    cpu.regs.iff2 = state.iff2 != 0;
    cpu.regs.im = InterruptMode::from_bits(state.im);
    cpu.regs.ei_pending = state.ei != 0;
    cpu.regs.q = state.q;

    cpu.connect_bus(bus);
    cpu
}

/// Compare the CPU/bus state against expected, returning a list of
/// mismatches. The R register is not compared: this core does not advance
/// it on fetch.
fn compare(cpu: &Z80<SimpleBus>, spent: u32, test: &TestCase) -> Vec<String> {
    let expected = &test.final_state;
    let mut errors = Vec::new();

    check_u8(&mut errors, "A", cpu.regs.a, expected.a);
    check_u8(&mut errors, "F", cpu.regs.f, expected.f);
    check_u8(&mut errors, "B", cpu.regs.b, expected.b);
    check_u8(&mut errors, "C", cpu.regs.c, expected.c);
    check_u8(&mut errors, "D", cpu.regs.d, expected.d);
    check_u8(&mut errors, "E", cpu.regs.e, expected.e);
    check_u8(&mut errors, "H", cpu.regs.h, expected.h);
    check_u8(&mut errors, "L", cpu.regs.l, expected.l);

    check_u16(&mut errors, "AF'", cpu.regs.af_alt(), expected.af_alt);
    check_u16(&mut errors, "BC'", cpu.regs.bc_alt(), expected.bc_alt);
    check_u16(&mut errors, "DE'", cpu.regs.de_alt(), expected.de_alt);
    check_u16(&mut errors, "HL'", cpu.regs.hl_alt(), expected.hl_alt);

    check_u16(&mut errors, "IX", cpu.regs.ix, expected.ix);
    check_u16(&mut errors, "IY", cpu.regs.iy, expected.iy);
    check_u16(&mut errors, "SP", cpu.regs.sp, expected.sp);
    check_u16(&mut errors, "PC", cpu.regs.pc, expected.pc);
    check_u8(&mut errors, "I", cpu.regs.i, expected.i);
    check_u16(&mut errors, "WZ", cpu.regs.wz, expected.wz);

    let actual_iff1 = u8::from(cpu.regs.iff1);
    if actual_iff1 != expected.iff1 {
        errors.push(format!("IFF1: got {actual_iff1}, want {}", expected.iff1));
    }
    let actual_iff2 = u8::from(cpu.regs.iff2);
    if actual_iff2 != expected.iff2 {
        errors.push(format!("IFF2: got {actual_iff2}, want {}", expected.iff2));
    }
    check_u8(&mut errors, "IM", cpu.regs.im.bits(), expected.im);

    let actual_ei = u8::from(cpu.regs.ei_pending);
    if actual_ei != expected.ei {
        errors.push(format!("EI: got {actual_ei}, want {}", expected.ei));
    }
    if cpu.regs.q != expected.q {
        errors.push(format!("Q: got {}, want {}", cpu.regs.q, expected.q));
    }

    let expected_ticks = test.cycles.len() as u32;
    if spent != expected_ticks {
        errors.push(format!("T-states: got {spent}, want {expected_ticks}"));
    }

    let bus = cpu.bus().expect("bus connected");
    for &(addr, expected_val) in &expected.ram {
        let actual_val = bus.peek(addr);
        if actual_val != expected_val {
            errors.push(format!(
                "RAM[${addr:04X}]: got ${actual_val:02X}, want ${expected_val:02X}"
            ));
        }
    }

    let expected_writes: Vec<(u16, u8)> = test
        .ports
        .iter()
        .filter(|(_, _, dir)| dir == "w")
        .map(|&(port, value, _)| (port, value))
        .collect();
    if bus.port_writes() != expected_writes.as_slice() {
        errors.push(format!(
            "ports: got {:?}, want {expected_writes:?}",
            bus.port_writes()
        ));
    }

    errors
}

fn check_u8(errors: &mut Vec<String>, name: &str, actual: u8, expected: u8) {
    if actual != expected {
        errors.push(format!("{name}: got ${actual:02X}, want ${expected:02X}"));
    }
}

fn check_u16(errors: &mut Vec<String>, name: &str, actual: u16, expected: u16) {
    if actual != expected {
        errors.push(format!("{name}: got ${actual:04X}, want ${expected:04X}"));
    }
}

/// Turn a fixture file stem like `dd cb __ 06` into a supportability
/// query, with a dummy displacement standing in for the `__` wildcard.
fn stem_to_hex(stem: &str) -> String {
    stem.replace("__", "00").replace(' ', "").to_uppercase()
}

/// Run all Z80 SingleStepTests.
///
/// Iterates through every fixture file this core claims to support,
/// covering unprefixed, CB, DD, ED, FD, DD CB and FD CB opcodes.
#[test]
#[ignore = "requires test-data/z80 — run with --ignored"]
fn run_all() {
    let test_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("parent of crate dir")
        .parent()
        .expect("workspace root")
        .join("test-data/z80/v1");

    if !test_dir.exists() {
        eprintln!("Test data not found at {}", test_dir.display());
        eprintln!("Skipping SingleStepTests.");
        return;
    }

    let mut total_pass = 0u64;
    let mut total_fail = 0u64;
    let mut total_files = 0u32;

    let mut stems: Vec<String> = Vec::new();
    for opcode in 0..=0xFFu8 {
        if matches!(opcode, 0xCB | 0xDD | 0xED | 0xFD) {
            continue;
        }
        stems.push(format!("{opcode:02x}"));
    }
    for prefix in ["cb", "dd", "ed", "fd", "dd cb __", "fd cb __"] {
        for opcode in 0..=0xFFu8 {
            stems.push(format!("{prefix} {opcode:02x}"));
        }
    }

    for stem in &stems {
        if !is_opcode_supported(&stem_to_hex(stem)) {
            continue;
        }
        let path = test_dir.join(format!("{stem}.json"));
        if !path.exists() {
            continue;
        }

        let data = fs::read_to_string(&path).unwrap_or_else(|e| {
            panic!("Failed to read {}: {e}", path.display());
        });
        let tests: Vec<TestCase> = serde_json::from_str(&data).unwrap_or_else(|e| {
            panic!("Failed to parse {}: {e}", path.display());
        });

        let mut file_pass = 0u32;
        let mut file_fail = 0u32;
        let mut first_failures: Vec<String> = Vec::new();

        for test in &tests {
            let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
                let mut cpu = setup(test);
                let spent = cpu.step().expect("instruction executes");
                compare(&cpu, spent, test)
            }));

            match result {
                Ok(errors) if errors.is_empty() => {
                    file_pass += 1;
                }
                Ok(errors) => {
                    file_fail += 1;
                    if first_failures.len() < 5 {
                        first_failures.push(format!(
                            "  FAIL [{}]: {}",
                            test.name,
                            errors.join(", ")
                        ));
                    }
                }
                Err(_) => {
                    file_fail += 1;
                    if first_failures.len() < 5 {
                        first_failures
                            .push(format!("  PANIC [{}]: unimplemented or crash", test.name));
                    }
                }
            }
        }

        let status = if file_fail == 0 { "PASS" } else { "FAIL" };
        println!(
            "{stem}.json: {status} — {file_pass}/{} passed",
            file_pass + file_fail
        );
        for msg in &first_failures {
            println!("{msg}");
        }

        total_pass += u64::from(file_pass);
        total_fail += u64::from(file_fail);
        total_files += 1;
    }

    println!();
    println!("=== Z80 SingleStepTests Summary ===");
    println!(
        "Files: {total_files}, Pass: {total_pass}, Fail: {total_fail}",
    );

    assert_eq!(total_fail, 0, "{total_fail} tests failed");
}
