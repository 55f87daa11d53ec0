//! ED-prefixed handlers: extended loads, 16-bit carry arithmetic, port
//! I/O through BC, and the block transfer/search/IO group with its full
//! undocumented flag behavior.

use super::Ctx;
use crate::alu;
use crate::flags::{self, CF, HF, NF, PF, SF, UF, XF, ZF};
use crate::registers::InterruptMode;

pub(crate) fn in_r_c(cx: &mut Ctx<'_>) -> u8 {
    let port = cx.regs.bc();
    let value = cx.bus.read_port(port);
    let code = (cx.opcode >> 3) & 0x07;
    // ED 70 is the undocumented flags-only form: no register is written.
    if code != 6 {
        cx.set_reg8(code, value);
    }
    let f = (cx.regs.f & CF) | flags::sz53p(value);
    cx.set_f(f);
    cx.regs.wz = port.wrapping_add(1);
    0
}

pub(crate) fn out_c_r(cx: &mut Ctx<'_>) -> u8 {
    let port = cx.regs.bc();
    let code = (cx.opcode >> 3) & 0x07;
    // ED 71 outputs 0 on NMOS parts.
    let value = if code == 6 { 0 } else { cx.reg8(code) };
    cx.bus.write_port(port, value);
    cx.regs.wz = port.wrapping_add(1);
    0
}

pub(crate) fn sbc_hl_rr(cx: &mut Ctx<'_>) -> u8 {
    let rhs = cx.reg16((cx.opcode >> 4) & 0x03);
    let hl = cx.regs.hl();
    cx.regs.wz = hl.wrapping_add(1);
    let r = alu::sbc16(hl, rhs, cx.regs.f & CF != 0);
    cx.regs.set_hl(r.value);
    cx.set_f(r.flags);
    0
}

pub(crate) fn adc_hl_rr(cx: &mut Ctx<'_>) -> u8 {
    let rhs = cx.reg16((cx.opcode >> 4) & 0x03);
    let hl = cx.regs.hl();
    cx.regs.wz = hl.wrapping_add(1);
    let r = alu::adc16(hl, rhs, cx.regs.f & CF != 0);
    cx.regs.set_hl(r.value);
    cx.set_f(r.flags);
    0
}

pub(crate) fn neg(cx: &mut Ctx<'_>) -> u8 {
    let r = alu::sub8(0, cx.regs.a, false);
    cx.regs.a = r.value;
    cx.set_f(r.flags);
    0
}

/// `RETN` (and its mirrors): return and restore IFF1 from IFF2.
pub(crate) fn retn(cx: &mut Ctx<'_>) -> u8 {
    cx.regs.pc = cx.pop16();
    cx.regs.wz = cx.regs.pc;
    cx.regs.iff1 = cx.regs.iff2;
    0
}

/// `RETI` behaves identically to `RETN` at the CPU level; peripherals
/// recognize it by its opcode on the bus.
pub(crate) fn reti(cx: &mut Ctx<'_>) -> u8 {
    retn(cx)
}

pub(crate) fn im(cx: &mut Ctx<'_>) -> u8 {
    cx.regs.im = match (cx.opcode >> 3) & 0x03 {
        2 => InterruptMode::Mode1,
        3 => InterruptMode::Mode2,
        _ => InterruptMode::Mode0,
    };
    0
}

pub(crate) fn ld_i_a(cx: &mut Ctx<'_>) -> u8 {
    cx.regs.i = cx.regs.a;
    0
}

pub(crate) fn ld_r_a(cx: &mut Ctx<'_>) -> u8 {
    cx.regs.r = cx.regs.a;
    0
}

fn load_a_special(cx: &mut Ctx<'_>, value: u8) {
    cx.regs.a = value;
    let mut f = (cx.regs.f & CF) | flags::sz53(value);
    if cx.regs.iff2 {
        f |= PF;
    }
    cx.set_f(f);
}

pub(crate) fn ld_a_i(cx: &mut Ctx<'_>) -> u8 {
    let value = cx.regs.i;
    load_a_special(cx, value);
    0
}

pub(crate) fn ld_a_r(cx: &mut Ctx<'_>) -> u8 {
    let value = cx.regs.r;
    load_a_special(cx, value);
    0
}

/// `RRD`: rotate the three BCD nibbles of A and (HL) right.
pub(crate) fn rrd(cx: &mut Ctx<'_>) -> u8 {
    let addr = cx.regs.hl();
    let m = cx.read(addr);
    let a = cx.regs.a;
    cx.write(addr, a << 4 | m >> 4);
    cx.regs.a = (a & 0xF0) | (m & 0x0F);
    let f = (cx.regs.f & CF) | flags::sz53p(cx.regs.a);
    cx.set_f(f);
    cx.regs.wz = addr.wrapping_add(1);
    0
}

/// `RLD`: rotate the three BCD nibbles of A and (HL) left.
pub(crate) fn rld(cx: &mut Ctx<'_>) -> u8 {
    let addr = cx.regs.hl();
    let m = cx.read(addr);
    let a = cx.regs.a;
    cx.write(addr, m << 4 | (a & 0x0F));
    cx.regs.a = (a & 0xF0) | m >> 4;
    let f = (cx.regs.f & CF) | flags::sz53p(cx.regs.a);
    cx.set_f(f);
    cx.regs.wz = addr.wrapping_add(1);
    0
}

// ---------------------------------------------------------------------------
// Block transfer / search / IO
//
// The undocumented flags follow the NMOS behavior: the transfer group
// takes X/U from bits 3 and 1 of `value + A`, the IO group computes H, C
// and P from the carry byte `k`, and every repeating iteration replaces
// X/U with bits of PC high after the rewind.
// ---------------------------------------------------------------------------

/// Move one byte, advance. Returns `value + A` for the flag bits.
fn transfer(cx: &mut Ctx<'_>, dir: i16) -> u8 {
    let value = cx.read(cx.regs.hl());
    cx.write(cx.regs.de(), value);
    cx.regs.set_hl(cx.regs.hl().wrapping_add_signed(dir));
    cx.regs.set_de(cx.regs.de().wrapping_add_signed(dir));
    cx.regs.set_bc(cx.regs.bc().wrapping_sub(1));
    value.wrapping_add(cx.regs.a)
}

fn transfer_flags(cx: &mut Ctx<'_>, n: u8) {
    let mut f = (cx.regs.f & (SF | ZF | CF)) | (n & XF);
    if n & 0x02 != 0 {
        f |= UF;
    }
    if cx.regs.bc() != 0 {
        f |= PF;
    }
    cx.set_f(f);
}

pub(crate) fn ldi(cx: &mut Ctx<'_>) -> u8 {
    let n = transfer(cx, 1);
    transfer_flags(cx, n);
    0
}

pub(crate) fn ldd(cx: &mut Ctx<'_>) -> u8 {
    let n = transfer(cx, -1);
    transfer_flags(cx, n);
    0
}

fn transfer_repeat(cx: &mut Ctx<'_>, n: u8) -> u8 {
    if cx.regs.bc() != 0 {
        // Rewind and rerun; X/U come from PC high after the rewind.
        cx.regs.pc = cx.regs.pc.wrapping_sub(2);
        cx.regs.wz = cx.regs.pc.wrapping_add(1);
        let pch = (cx.regs.pc >> 8) as u8;
        let f = (cx.regs.f & (SF | ZF | CF)) | PF | (pch & (UF | XF));
        cx.set_f(f);
        5
    } else {
        transfer_flags(cx, n);
        0
    }
}

pub(crate) fn ldir(cx: &mut Ctx<'_>) -> u8 {
    let n = transfer(cx, 1);
    transfer_repeat(cx, n)
}

pub(crate) fn lddr(cx: &mut Ctx<'_>) -> u8 {
    let n = transfer(cx, -1);
    transfer_repeat(cx, n)
}

/// Compare one byte, advance. Returns the base flags (everything except
/// X/U) and the `result - half_borrow` byte that feeds them.
fn search(cx: &mut Ctx<'_>, dir: i16) -> (u8, u8) {
    let value = cx.read(cx.regs.hl());
    cx.regs.wz = cx.regs.wz.wrapping_add_signed(dir);
    let result = cx.regs.a.wrapping_sub(value);
    let half = (cx.regs.a & 0x0F) < (value & 0x0F);
    let n = result.wrapping_sub(u8::from(half));
    cx.regs.set_hl(cx.regs.hl().wrapping_add_signed(dir));
    cx.regs.set_bc(cx.regs.bc().wrapping_sub(1));
    let mut f = (cx.regs.f & CF) | NF | flags::sz53(result) & (SF | ZF);
    if half {
        f |= HF;
    }
    if cx.regs.bc() != 0 {
        f |= PF;
    }
    (f, n)
}

fn search_xu(n: u8) -> u8 {
    let mut xu = n & XF;
    if n & 0x02 != 0 {
        xu |= UF;
    }
    xu
}

pub(crate) fn cpi(cx: &mut Ctx<'_>) -> u8 {
    let (f, n) = search(cx, 1);
    cx.set_f(f | search_xu(n));
    0
}

pub(crate) fn cpd(cx: &mut Ctx<'_>) -> u8 {
    let (f, n) = search(cx, -1);
    cx.set_f(f | search_xu(n));
    0
}

fn search_repeat(cx: &mut Ctx<'_>, f: u8, n: u8) -> u8 {
    if f & PF != 0 && f & ZF == 0 {
        cx.regs.pc = cx.regs.pc.wrapping_sub(2);
        cx.regs.wz = cx.regs.pc.wrapping_add(1);
        let pch = (cx.regs.pc >> 8) as u8;
        cx.set_f(f | (pch & (UF | XF)));
        5
    } else {
        cx.set_f(f | search_xu(n));
        0
    }
}

pub(crate) fn cpir(cx: &mut Ctx<'_>) -> u8 {
    let (f, n) = search(cx, 1);
    search_repeat(cx, f, n)
}

pub(crate) fn cpdr(cx: &mut Ctx<'_>) -> u8 {
    let (f, n) = search(cx, -1);
    search_repeat(cx, f, n)
}

/// Port-to-memory transfer step. Returns `(value, k)` where `k` is the
/// 9-bit carry byte the H/C/P flags derive from.
fn in_block(cx: &mut Ctx<'_>, dir: i16) -> (u8, u16) {
    let port = cx.regs.bc();
    cx.regs.wz = port.wrapping_add_signed(dir);
    let value = cx.bus.read_port(port);
    cx.write(cx.regs.hl(), value);
    cx.regs.b = cx.regs.b.wrapping_sub(1);
    cx.regs.set_hl(cx.regs.hl().wrapping_add_signed(dir));
    let adjusted_c = (cx.regs.c as i16 + dir) as u8;
    let k = u16::from(value) + u16::from(adjusted_c);
    (value, k)
}

/// Memory-to-port transfer step; B decrements before the port address
/// forms, and `k` uses L after the pointer move.
fn out_block(cx: &mut Ctx<'_>, dir: i16) -> (u8, u16) {
    let value = cx.read(cx.regs.hl());
    cx.regs.b = cx.regs.b.wrapping_sub(1);
    let port = cx.regs.bc();
    cx.regs.wz = port.wrapping_add_signed(dir);
    cx.bus.write_port(port, value);
    cx.regs.set_hl(cx.regs.hl().wrapping_add_signed(dir));
    let k = u16::from(value) + u16::from(cx.regs.l);
    (value, k)
}

fn io_block_flags(cx: &mut Ctx<'_>, value: u8, k: u16) {
    let b = cx.regs.b;
    let mut f = flags::sz53(b) | (flags::sz53p((k as u8 & 0x07) ^ b) & PF);
    if value & 0x80 != 0 {
        f |= NF;
    }
    if k > 0xFF {
        f |= HF | CF;
    }
    cx.set_f(f);
}

pub(crate) fn ini(cx: &mut Ctx<'_>) -> u8 {
    let (value, k) = in_block(cx, 1);
    io_block_flags(cx, value, k);
    0
}

pub(crate) fn ind(cx: &mut Ctx<'_>) -> u8 {
    let (value, k) = in_block(cx, -1);
    io_block_flags(cx, value, k);
    0
}

pub(crate) fn outi(cx: &mut Ctx<'_>) -> u8 {
    let (value, k) = out_block(cx, 1);
    io_block_flags(cx, value, k);
    0
}

pub(crate) fn outd(cx: &mut Ctx<'_>) -> u8 {
    let (value, k) = out_block(cx, -1);
    io_block_flags(cx, value, k);
    0
}

/// Repeating IO iteration: H and P are recomputed from the in-flight
/// carry and the post-rewind B, and X/U come from PC high.
fn io_block_repeat(cx: &mut Ctx<'_>, value: u8, k: u16) -> u8 {
    let b = cx.regs.b;
    let carried = k > 0xFF;
    let negative = value & 0x80 != 0;
    let p = (k as u8 & 0x07) ^ b;
    if b != 0 {
        cx.regs.pc = cx.regs.pc.wrapping_sub(2);
        cx.regs.wz = cx.regs.pc.wrapping_add(1);
        let pch = (cx.regs.pc >> 8) as u8;
        let (hf, pf) = if carried {
            if negative {
                (
                    if b & 0x0F == 0 { HF } else { 0 },
                    flags::sz53p(p ^ (b.wrapping_sub(1) & 0x07)) & PF,
                )
            } else {
                (
                    if b & 0x0F == 0x0F { HF } else { 0 },
                    flags::sz53p(p ^ (b.wrapping_add(1) & 0x07)) & PF,
                )
            }
        } else {
            (0, flags::sz53p(p ^ (b & 0x07)) & PF)
        };
        let mut f = (b & SF) | (pch & (UF | XF)) | hf | pf;
        if negative {
            f |= NF;
        }
        if carried {
            f |= CF;
        }
        cx.set_f(f);
        5
    } else {
        let mut f = ZF | (flags::sz53p(p) & PF);
        if negative {
            f |= NF;
        }
        if carried {
            f |= HF | CF;
        }
        cx.set_f(f);
        0
    }
}

pub(crate) fn inir(cx: &mut Ctx<'_>) -> u8 {
    let (value, k) = in_block(cx, 1);
    io_block_repeat(cx, value, k)
}

pub(crate) fn indr(cx: &mut Ctx<'_>) -> u8 {
    let (value, k) = in_block(cx, -1);
    io_block_repeat(cx, value, k)
}

pub(crate) fn otir(cx: &mut Ctx<'_>) -> u8 {
    let (value, k) = out_block(cx, 1);
    io_block_repeat(cx, value, k)
}

pub(crate) fn otdr(cx: &mut Ctx<'_>) -> u8 {
    let (value, k) = out_block(cx, -1);
    io_block_repeat(cx, value, k)
}
