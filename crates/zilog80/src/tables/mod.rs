//! Decode tables: one 256-slot array per prefix context.
//!
//! A missing slot is a first-class "unsupported opcode", not a NOP. The
//! DD/FD tables list only the opcodes the prefix changes; everything the
//! prefix leaves alone decodes as unsupported there, so stray prefixes
//! surface instead of being silently skipped.

mod cb;
mod ed;
mod index;
mod index_cb;
mod root;

use std::sync::LazyLock;

use crate::decode::Context;
use crate::insn::{AddressingMode, Handler, Instruction};

pub(crate) type Table = [Option<Instruction>; 256];

pub(crate) struct OpcodeTables {
    pub root: Table,
    pub cb: Table,
    pub dd: Table,
    pub ed: Table,
    pub fd: Table,
    pub ddcb: Table,
    pub fdcb: Table,
}

impl OpcodeTables {
    pub fn lookup(&self, context: Context, opcode: u8) -> Option<&Instruction> {
        let table = match context {
            Context::Root => &self.root,
            Context::Cb => &self.cb,
            Context::Dd => &self.dd,
            Context::Ed => &self.ed,
            Context::Fd => &self.fd,
            Context::DdCb => &self.ddcb,
            Context::FdCb => &self.fdcb,
        };
        table[usize::from(opcode)].as_ref()
    }
}

/// The tables are immutable and shared by every CPU instance.
pub(crate) fn tables() -> &'static OpcodeTables {
    static TABLES: LazyLock<OpcodeTables> = LazyLock::new(|| OpcodeTables {
        root: root::build(),
        cb: cb::build(),
        dd: index::build_dd(),
        ed: ed::build(),
        fd: index::build_fd(),
        ddcb: index_cb::build_ddcb(),
        fdcb: index_cb::build_fdcb(),
    });
    &TABLES
}

/// Entry constructor shared by the builder modules.
const fn op(
    mnemonic: &'static str,
    dst: AddressingMode,
    src: AddressingMode,
    cycles: &'static [u8],
    handler: Handler,
) -> Option<Instruction> {
    Some(Instruction { mnemonic, dst, src, cycles, handler })
}
