//! Error types for the CPU core.

use crate::decode::Context;

/// Errors surfaced by the CPU engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The CPU was asked to run without a bus connected.
    BusNotConnected,
    /// The fetched opcode has no entry in its decode table.
    UnsupportedOpcode { context: Context, opcode: u8 },
    /// A disassembly range ends before it starts.
    MalformedRange { start: u16, end: u16 },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BusNotConnected => write!(f, "no bus connected"),
            Self::UnsupportedOpcode { context, opcode } => {
                write!(f, "unsupported opcode {opcode:#04X} in {context} context")
            }
            Self::MalformedRange { start, end } => {
                write!(f, "malformed address range {start:#06X}..{end:#06X}")
            }
        }
    }
}

impl std::error::Error for Error {}
