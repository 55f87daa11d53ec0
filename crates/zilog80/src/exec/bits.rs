//! CB-prefixed handlers: rotates, shifts and bit manipulation.

use super::{Ctx, Operand};
use crate::alu;
use crate::decode::Context;
use crate::flags::{CF, HF, PF, SF, UF, XF, ZF};

/// Store a rotate/shift/RES/SET result. The four-byte indexed forms also
/// copy the memory result into the register named by the low opcode bits
/// (the undocumented result-copy variants); code 6 is the copy-less form.
fn writeback(cx: &mut Ctx<'_>, code: u8, value: u8) {
    match cx.dst {
        Operand::Mem(addr) => {
            cx.write(addr, value);
            if matches!(cx.context, Context::DdCb | Context::FdCb) && code != 6 {
                cx.set_reg8(code, value);
            }
        }
        _ => cx.set_reg8(code, value),
    }
}

pub(crate) fn rlc(cx: &mut Ctx<'_>) -> u8 {
    let code = cx.opcode & 0x07;
    let value = cx.load(cx.dst, code);
    let r = alu::rlc8(value);
    cx.set_f(r.flags);
    writeback(cx, code, r.value);
    0
}

pub(crate) fn rrc(cx: &mut Ctx<'_>) -> u8 {
    let code = cx.opcode & 0x07;
    let value = cx.load(cx.dst, code);
    let r = alu::rrc8(value);
    cx.set_f(r.flags);
    writeback(cx, code, r.value);
    0
}

pub(crate) fn rl(cx: &mut Ctx<'_>) -> u8 {
    let code = cx.opcode & 0x07;
    let value = cx.load(cx.dst, code);
    let r = alu::rl8(value, cx.regs.f & CF != 0);
    cx.set_f(r.flags);
    writeback(cx, code, r.value);
    0
}

pub(crate) fn rr(cx: &mut Ctx<'_>) -> u8 {
    let code = cx.opcode & 0x07;
    let value = cx.load(cx.dst, code);
    let r = alu::rr8(value, cx.regs.f & CF != 0);
    cx.set_f(r.flags);
    writeback(cx, code, r.value);
    0
}

pub(crate) fn sla(cx: &mut Ctx<'_>) -> u8 {
    let code = cx.opcode & 0x07;
    let value = cx.load(cx.dst, code);
    let r = alu::sla8(value);
    cx.set_f(r.flags);
    writeback(cx, code, r.value);
    0
}

pub(crate) fn sra(cx: &mut Ctx<'_>) -> u8 {
    let code = cx.opcode & 0x07;
    let value = cx.load(cx.dst, code);
    let r = alu::sra8(value);
    cx.set_f(r.flags);
    writeback(cx, code, r.value);
    0
}

pub(crate) fn sll(cx: &mut Ctx<'_>) -> u8 {
    let code = cx.opcode & 0x07;
    let value = cx.load(cx.dst, code);
    let r = alu::sll8(value);
    cx.set_f(r.flags);
    writeback(cx, code, r.value);
    0
}

pub(crate) fn srl(cx: &mut Ctx<'_>) -> u8 {
    let code = cx.opcode & 0x07;
    let value = cx.load(cx.dst, code);
    let r = alu::srl8(value);
    cx.set_f(r.flags);
    writeback(cx, code, r.value);
    0
}

/// `BIT b,src`. X/U come from the tested register, except for memory
/// operands where they leak from the internal address latch high byte.
pub(crate) fn bit(cx: &mut Ctx<'_>) -> u8 {
    let value = cx.load(cx.src, cx.opcode & 0x07);
    let masked = value & (1 << ((cx.opcode >> 3) & 0x07));
    let mut f = (cx.regs.f & CF) | HF | (masked & SF);
    if masked == 0 {
        f |= ZF | PF;
    }
    let xu_source = match cx.src {
        Operand::Mem(_) => (cx.regs.wz >> 8) as u8,
        _ => value,
    };
    cx.set_f(f | (xu_source & (UF | XF)));
    0
}

pub(crate) fn res(cx: &mut Ctx<'_>) -> u8 {
    let code = cx.opcode & 0x07;
    let value = cx.load(cx.dst, code);
    writeback(cx, code, value & !(1 << ((cx.opcode >> 3) & 0x07)));
    0
}

pub(crate) fn set(cx: &mut Ctx<'_>) -> u8 {
    let code = cx.opcode & 0x07;
    let value = cx.load(cx.dst, code);
    writeback(cx, code, value | 1 << ((cx.opcode >> 3) & 0x07));
    0
}
