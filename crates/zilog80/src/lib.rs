//! Instruction-level Zilog Z80 emulator.
//!
//! Executes the full documented instruction set plus the undocumented
//! behavior real software depends on: X/U flag bits, the WZ address
//! latch, the Q flags latch, IXH/IXL register halves, the four-byte
//! `DD CB` result-copy forms, ED mirrors and the block instruction flag
//! quirks. Timing is instruction-atomic with exact T-state accounting.
//!
//! The CPU owns no memory: everything goes through the [`emu_bus::Bus`]
//! trait.
//!
//! ```
//! use emu_bus::SimpleBus;
//! use zilog80::Z80;
//!
//! let mut bus = SimpleBus::new();
//! bus.load(0x0000, &[0x3E, 0x2A, 0x76]); // LD A,&2A / HALT
//! let mut cpu = Z80::new();
//! cpu.connect_bus(bus);
//! cpu.reset(true);
//! cpu.step().unwrap();
//! assert_eq!(cpu.regs.a, 0x2A);
//! ```

mod alu;
mod cpu;
mod decode;
mod disasm;
mod error;
mod exec;
pub mod flags;
mod insn;
mod registers;
mod tables;

pub use cpu::Z80;
pub use decode::Context;
pub use disasm::is_opcode_supported;
pub use error::Error;
pub use insn::{AddressingMode, Instruction};
pub use registers::{InterruptMode, Registers};
