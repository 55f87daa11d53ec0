//! Instruction descriptors: what the decode tables hold.

use crate::exec::Ctx;

/// How an operand slot of an instruction is obtained.
///
/// Each table entry carries a destination and a source mode. Modes that
/// consume instruction-stream bytes (`Immediate8`, `Immediate16`,
/// `ImmediateSigned`, `Indexed` outside the four-byte bit forms) advance
/// PC when resolved, destination slot first — that order matches the byte
/// order the assembler emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, or one implied entirely by the opcode.
    Implied,
    /// Register or register pair selected by opcode bits.
    RegisterDirect,
    /// Memory at the address in HL (or BC/DE where the opcode implies it).
    RegisterIndirectHl,
    /// One literal byte following the opcode.
    Immediate8,
    /// Two literal bytes following the opcode, little-endian.
    Immediate16,
    /// One literal byte interpreted as a signed jump offset.
    ImmediateSigned,
    /// Memory at index register plus a signed displacement byte.
    Indexed,
}

pub(crate) type Handler = fn(&mut Ctx<'_>) -> u8;

/// One decoded-opcode table entry.
///
/// `cycles` lists the machine-cycle T-state costs of the instruction when
/// no branch is taken; the handler returns any extra T-states a taken
/// branch or repeating block iteration adds.
#[derive(Clone, Copy)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub dst: AddressingMode,
    pub src: AddressingMode,
    pub cycles: &'static [u8],
    pub(crate) handler: Handler,
}

impl Instruction {
    /// Total not-taken cost in T-states.
    #[must_use]
    pub fn base_tstates(&self) -> u32 {
        self.cycles.iter().map(|&c| u32::from(c)).sum()
    }
}

impl std::fmt::Debug for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.mnemonic)
            .field("dst", &self.dst)
            .field("src", &self.src)
            .field("cycles", &self.cycles)
            .finish_non_exhaustive()
    }
}
