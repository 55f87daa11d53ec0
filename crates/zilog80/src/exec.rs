//! Instruction handlers and the execution context they run in.
//!
//! Handlers are plain functions stored in the decode tables. Each receives
//! a [`Ctx`] with both operand slots already resolved and returns the
//! number of extra T-states a taken branch (or repeating block iteration)
//! costs beyond the table's base cost.

mod bits;
mod ed;

pub(crate) use bits::{bit, res, rl, rlc, rr, rrc, set, sla, sll, sra, srl};
pub(crate) use ed::{
    adc_hl_rr, cpd, cpdr, cpi, cpir, im, in_r_c, ind, indr, ini, inir, ld_a_i, ld_a_r, ld_i_a,
    ld_r_a, ldd, lddr, ldi, ldir, neg, otdr, otir, out_c_r, outd, outi, reti, retn, rld, rrd,
    sbc_hl_rr,
};

use emu_bus::Bus;

use crate::alu;
use crate::decode::Context;
use crate::flags::{CF, HF, NF, PF, SF, UF, XF, ZF};
use crate::insn::AddressingMode;
use crate::registers::Registers;

/// A resolved operand slot.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Operand {
    None,
    /// Handler picks the register from opcode bits.
    Reg,
    Imm8(u8),
    Imm16(u16),
    Mem(u16),
}

/// Everything a handler may touch while executing one instruction.
pub(crate) struct Ctx<'a> {
    pub regs: &'a mut Registers,
    pub bus: &'a mut dyn Bus,
    pub context: Context,
    pub opcode: u8,
    pub dst: Operand,
    pub src: Operand,
    /// Q latch value before the engine cleared it for this instruction.
    pub q_prev: u8,
    /// When set, register codes 4 and 5 address the index register halves
    /// (IXH/IXL or IYH/IYL) instead of H and L.
    index_halves: bool,
}

impl<'a> Ctx<'a> {
    pub fn new(
        regs: &'a mut Registers,
        bus: &'a mut dyn Bus,
        context: Context,
        opcode: u8,
        q_prev: u8,
    ) -> Self {
        Self {
            regs,
            bus,
            context,
            opcode,
            dst: Operand::None,
            src: Operand::None,
            q_prev,
            index_halves: false,
        }
    }

    /// Resolve both operand slots, destination first. `displacement` is
    /// the pre-decoded byte of the four-byte indexed bit forms.
    pub fn resolve_operands(
        &mut self,
        dst: AddressingMode,
        src: AddressingMode,
        displacement: Option<i8>,
    ) {
        // The undocumented IXH/IXL register substitution applies only when
        // the instruction has no (IX+d) operand.
        self.index_halves = matches!(self.context, Context::Dd | Context::Fd)
            && dst != AddressingMode::Indexed
            && src != AddressingMode::Indexed;
        self.dst = self.resolve(dst, displacement);
        self.src = self.resolve(src, displacement);
    }

    fn resolve(&mut self, mode: AddressingMode, displacement: Option<i8>) -> Operand {
        match mode {
            AddressingMode::Implied => Operand::None,
            AddressingMode::RegisterDirect => Operand::Reg,
            AddressingMode::RegisterIndirectHl => Operand::Mem(self.regs.hl()),
            AddressingMode::Immediate8 | AddressingMode::ImmediateSigned => {
                let n = self.fetch8();
                Operand::Imm8(n)
            }
            AddressingMode::Immediate16 => {
                let nn = self.fetch16();
                Operand::Imm16(nn)
            }
            AddressingMode::Indexed => {
                let d = match displacement {
                    Some(d) => d,
                    None => self.fetch8() as i8,
                };
                let addr = self.index16().wrapping_add_signed(i16::from(d));
                self.regs.wz = addr;
                Operand::Mem(addr)
            }
        }
    }

    fn fetch8(&mut self) -> u8 {
        let byte = self.bus.read(self.regs.pc, false);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        byte
    }

    fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8();
        let hi = self.fetch8();
        u16::from(hi) << 8 | u16::from(lo)
    }

    pub fn read(&mut self, addr: u16) -> u8 {
        self.bus.read(addr, false)
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Write flags through the Q latch: any instruction that computes
    /// flags goes through here.
    pub fn set_f(&mut self, flags: u8) {
        self.regs.f = flags;
        self.regs.q = flags;
    }

    /// HL, or the index register selected by the prefix context.
    pub fn index16(&self) -> u16 {
        match self.context {
            Context::Dd | Context::DdCb => self.regs.ix,
            Context::Fd | Context::FdCb => self.regs.iy,
            _ => self.regs.hl(),
        }
    }

    pub fn set_index16(&mut self, value: u16) {
        match self.context {
            Context::Dd | Context::DdCb => self.regs.ix = value,
            Context::Fd | Context::FdCb => self.regs.iy = value,
            _ => self.regs.set_hl(value),
        }
    }

    /// 8-bit register by opcode code (B C D E H L - A). Code 6 is the
    /// memory slot and is never routed here.
    pub fn reg8(&self, code: u8) -> u8 {
        match code {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 if self.index_halves => (self.index16() >> 8) as u8,
            4 => self.regs.h,
            5 if self.index_halves => self.index16() as u8,
            5 => self.regs.l,
            _ => self.regs.a,
        }
    }

    pub fn set_reg8(&mut self, code: u8, value: u8) {
        match code {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 if self.index_halves => {
                self.set_index16(self.index16() & 0x00FF | u16::from(value) << 8);
            }
            4 => self.regs.h = value,
            5 if self.index_halves => {
                self.set_index16(self.index16() & 0xFF00 | u16::from(value));
            }
            5 => self.regs.l = value,
            _ => self.regs.a = value,
        }
    }

    /// Register pair by opcode code, SP variant (BC DE HL/IX/IY SP).
    pub fn reg16(&self, code: u8) -> u16 {
        match code {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.index16(),
            _ => self.regs.sp,
        }
    }

    pub fn set_reg16(&mut self, code: u8, value: u16) {
        match code {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.set_index16(value),
            _ => self.regs.sp = value,
        }
    }

    /// Branch condition by opcode code (NZ Z NC C PO PE P M).
    pub fn condition(&self, code: u8) -> bool {
        let f = self.regs.f;
        match code {
            0 => f & ZF == 0,
            1 => f & ZF != 0,
            2 => f & CF == 0,
            3 => f & CF != 0,
            4 => f & PF == 0,
            5 => f & PF != 0,
            6 => f & SF == 0,
            _ => f & SF != 0,
        }
    }

    /// Read an 8-bit operand slot. `code` selects the register when the
    /// slot resolved to [`Operand::Reg`]; non-value slots read as 0.
    pub fn load(&mut self, operand: Operand, code: u8) -> u8 {
        match operand {
            Operand::Reg => self.reg8(code),
            Operand::Imm8(n) => n,
            Operand::Mem(addr) => self.read(addr),
            Operand::None | Operand::Imm16(_) => 0,
        }
    }

    /// Write an 8-bit operand slot; non-writable slots are no-ops.
    pub fn store(&mut self, operand: Operand, code: u8, value: u8) {
        match operand {
            Operand::Reg => self.set_reg8(code, value),
            Operand::Mem(addr) => self.write(addr, value),
            _ => {}
        }
    }

    /// The 16-bit immediate of a slot, 0 if the slot holds none.
    pub fn imm16(&self, operand: Operand) -> u16 {
        if let Operand::Imm16(nn) = operand { nn } else { 0 }
    }

    pub fn push16(&mut self, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write(self.regs.sp, (value >> 8) as u8);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write(self.regs.sp, value as u8);
    }

    pub fn pop16(&mut self) -> u16 {
        let lo = self.read(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = self.read(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from(hi) << 8 | u16::from(lo)
    }
}

// ---------------------------------------------------------------------------
// Unprefixed handlers
// ---------------------------------------------------------------------------

pub(crate) fn nop(_cx: &mut Ctx<'_>) -> u8 {
    0
}

/// All the `LD` forms whose operands fit the two-slot scheme:
/// register-register, immediate, (HL) and (IX+d) moves.
pub(crate) fn ld_r_r(cx: &mut Ctx<'_>) -> u8 {
    let value = cx.load(cx.src, cx.opcode & 0x07);
    cx.store(cx.dst, (cx.opcode >> 3) & 0x07, value);
    0
}

pub(crate) fn ld_rr_nn(cx: &mut Ctx<'_>) -> u8 {
    let nn = cx.imm16(cx.src);
    cx.set_reg16((cx.opcode >> 4) & 0x03, nn);
    0
}

pub(crate) fn ld_bc_a(cx: &mut Ctx<'_>) -> u8 {
    let addr = cx.regs.bc();
    let a = cx.regs.a;
    cx.write(addr, a);
    cx.regs.wz = u16::from(a) << 8 | addr.wrapping_add(1) & 0x00FF;
    0
}

pub(crate) fn ld_de_a(cx: &mut Ctx<'_>) -> u8 {
    let addr = cx.regs.de();
    let a = cx.regs.a;
    cx.write(addr, a);
    cx.regs.wz = u16::from(a) << 8 | addr.wrapping_add(1) & 0x00FF;
    0
}

pub(crate) fn ld_a_bc(cx: &mut Ctx<'_>) -> u8 {
    let addr = cx.regs.bc();
    cx.regs.a = cx.read(addr);
    cx.regs.wz = addr.wrapping_add(1);
    0
}

pub(crate) fn ld_a_de(cx: &mut Ctx<'_>) -> u8 {
    let addr = cx.regs.de();
    cx.regs.a = cx.read(addr);
    cx.regs.wz = addr.wrapping_add(1);
    0
}

/// `LD (nn),rr` — root `LD (nn),HL` plus the ED pair stores.
pub(crate) fn ld_ext_rr(cx: &mut Ctx<'_>) -> u8 {
    let nn = cx.imm16(cx.dst);
    let value = cx.reg16((cx.opcode >> 4) & 0x03);
    cx.write(nn, value as u8);
    cx.write(nn.wrapping_add(1), (value >> 8) as u8);
    cx.regs.wz = nn.wrapping_add(1);
    0
}

/// `LD rr,(nn)` — root `LD HL,(nn)` plus the ED pair loads.
pub(crate) fn ld_rr_ext(cx: &mut Ctx<'_>) -> u8 {
    let nn = cx.imm16(cx.src);
    let lo = cx.read(nn);
    let hi = cx.read(nn.wrapping_add(1));
    cx.set_reg16((cx.opcode >> 4) & 0x03, u16::from(hi) << 8 | u16::from(lo));
    cx.regs.wz = nn.wrapping_add(1);
    0
}

pub(crate) fn ld_ext_a(cx: &mut Ctx<'_>) -> u8 {
    let nn = cx.imm16(cx.dst);
    let a = cx.regs.a;
    cx.write(nn, a);
    cx.regs.wz = u16::from(a) << 8 | nn.wrapping_add(1) & 0x00FF;
    0
}

pub(crate) fn ld_a_ext(cx: &mut Ctx<'_>) -> u8 {
    let nn = cx.imm16(cx.src);
    cx.regs.a = cx.read(nn);
    cx.regs.wz = nn.wrapping_add(1);
    0
}

pub(crate) fn ld_sp_hl(cx: &mut Ctx<'_>) -> u8 {
    cx.regs.sp = cx.index16();
    0
}

pub(crate) fn inc_rr(cx: &mut Ctx<'_>) -> u8 {
    let code = (cx.opcode >> 4) & 0x03;
    let value = cx.reg16(code).wrapping_add(1);
    cx.set_reg16(code, value);
    0
}

pub(crate) fn dec_rr(cx: &mut Ctx<'_>) -> u8 {
    let code = (cx.opcode >> 4) & 0x03;
    let value = cx.reg16(code).wrapping_sub(1);
    cx.set_reg16(code, value);
    0
}

pub(crate) fn inc_r(cx: &mut Ctx<'_>) -> u8 {
    let code = (cx.opcode >> 3) & 0x07;
    let value = cx.load(cx.dst, code);
    let r = alu::inc8(value);
    cx.store(cx.dst, code, r.value);
    let carry = cx.regs.f & CF;
    cx.set_f(carry | r.flags);
    0
}

pub(crate) fn dec_r(cx: &mut Ctx<'_>) -> u8 {
    let code = (cx.opcode >> 3) & 0x07;
    let value = cx.load(cx.dst, code);
    let r = alu::dec8(value);
    cx.store(cx.dst, code, r.value);
    let carry = cx.regs.f & CF;
    cx.set_f(carry | r.flags);
    0
}

/// Accumulator rotates preserve S, Z and P/V, unlike their CB cousins.
pub(crate) fn rlca(cx: &mut Ctx<'_>) -> u8 {
    let carry = cx.regs.a >> 7;
    cx.regs.a = cx.regs.a.rotate_left(1);
    let f = (cx.regs.f & (SF | ZF | PF)) | (cx.regs.a & (UF | XF)) | carry;
    cx.set_f(f);
    0
}

pub(crate) fn rrca(cx: &mut Ctx<'_>) -> u8 {
    let carry = cx.regs.a & CF;
    cx.regs.a = cx.regs.a.rotate_right(1);
    let f = (cx.regs.f & (SF | ZF | PF)) | (cx.regs.a & (UF | XF)) | carry;
    cx.set_f(f);
    0
}

pub(crate) fn rla(cx: &mut Ctx<'_>) -> u8 {
    let carry = cx.regs.a >> 7;
    cx.regs.a = cx.regs.a << 1 | (cx.regs.f & CF);
    let f = (cx.regs.f & (SF | ZF | PF)) | (cx.regs.a & (UF | XF)) | carry;
    cx.set_f(f);
    0
}

pub(crate) fn rra(cx: &mut Ctx<'_>) -> u8 {
    let carry = cx.regs.a & CF;
    cx.regs.a = cx.regs.a >> 1 | (cx.regs.f & CF) << 7;
    let f = (cx.regs.f & (SF | ZF | PF)) | (cx.regs.a & (UF | XF)) | carry;
    cx.set_f(f);
    0
}

/// `EX AF,AF'` moves F without computing it, so Q stays cleared.
pub(crate) fn ex_af(cx: &mut Ctx<'_>) -> u8 {
    std::mem::swap(&mut cx.regs.a, &mut cx.regs.a_alt);
    std::mem::swap(&mut cx.regs.f, &mut cx.regs.f_alt);
    0
}

pub(crate) fn add_hl_rr(cx: &mut Ctx<'_>) -> u8 {
    let lhs = cx.index16();
    let rhs = cx.reg16((cx.opcode >> 4) & 0x03);
    cx.regs.wz = lhs.wrapping_add(1);
    let r = alu::add16(lhs, rhs);
    cx.set_index16(r.value);
    let f = (cx.regs.f & (SF | ZF | PF)) | r.flags;
    cx.set_f(f);
    0
}

pub(crate) fn djnz(cx: &mut Ctx<'_>) -> u8 {
    let offset = cx.load(cx.src, 0) as i8;
    cx.regs.b = cx.regs.b.wrapping_sub(1);
    if cx.regs.b != 0 {
        cx.regs.pc = cx.regs.pc.wrapping_add_signed(i16::from(offset));
        cx.regs.wz = cx.regs.pc;
        5
    } else {
        0
    }
}

pub(crate) fn jr(cx: &mut Ctx<'_>) -> u8 {
    let offset = cx.load(cx.src, 0) as i8;
    cx.regs.pc = cx.regs.pc.wrapping_add_signed(i16::from(offset));
    cx.regs.wz = cx.regs.pc;
    0
}

pub(crate) fn jr_cc(cx: &mut Ctx<'_>) -> u8 {
    let offset = cx.load(cx.src, 0) as i8;
    if cx.condition((cx.opcode >> 3) & 0x03) {
        cx.regs.pc = cx.regs.pc.wrapping_add_signed(i16::from(offset));
        cx.regs.wz = cx.regs.pc;
        5
    } else {
        0
    }
}

pub(crate) fn daa(cx: &mut Ctx<'_>) -> u8 {
    let r = alu::daa(cx.regs.a, cx.regs.f);
    cx.regs.a = r.value;
    cx.set_f(r.flags);
    0
}

pub(crate) fn cpl(cx: &mut Ctx<'_>) -> u8 {
    cx.regs.a = !cx.regs.a;
    let f = (cx.regs.f & (SF | ZF | PF | CF)) | HF | NF | (cx.regs.a & (UF | XF));
    cx.set_f(f);
    0
}

/// The undocumented X/U bits of `SCF`/`CCF` depend on whether the previous
/// instruction wrote F: `((Q_prev ^ F) | A) & 0x28` (NMOS behavior).
pub(crate) fn scf(cx: &mut Ctx<'_>) -> u8 {
    let xu = ((cx.q_prev ^ cx.regs.f) | cx.regs.a) & (UF | XF);
    let f = (cx.regs.f & (SF | ZF | PF)) | CF | xu;
    cx.set_f(f);
    0
}

pub(crate) fn ccf(cx: &mut Ctx<'_>) -> u8 {
    let old_carry = cx.regs.f & CF;
    let xu = ((cx.q_prev ^ cx.regs.f) | cx.regs.a) & (UF | XF);
    let mut f = (cx.regs.f & (SF | ZF | PF)) | xu;
    if old_carry != 0 {
        f |= HF;
    } else {
        f |= CF;
    }
    cx.set_f(f);
    0
}

pub(crate) fn halt(cx: &mut Ctx<'_>) -> u8 {
    cx.regs.halted = true;
    0
}

pub(crate) fn add_a(cx: &mut Ctx<'_>) -> u8 {
    let value = cx.load(cx.src, cx.opcode & 0x07);
    let r = alu::add8(cx.regs.a, value, false);
    cx.regs.a = r.value;
    cx.set_f(r.flags);
    0
}

pub(crate) fn adc_a(cx: &mut Ctx<'_>) -> u8 {
    let value = cx.load(cx.src, cx.opcode & 0x07);
    let r = alu::add8(cx.regs.a, value, cx.regs.f & CF != 0);
    cx.regs.a = r.value;
    cx.set_f(r.flags);
    0
}

pub(crate) fn sub_a(cx: &mut Ctx<'_>) -> u8 {
    let value = cx.load(cx.src, cx.opcode & 0x07);
    let r = alu::sub8(cx.regs.a, value, false);
    cx.regs.a = r.value;
    cx.set_f(r.flags);
    0
}

pub(crate) fn sbc_a(cx: &mut Ctx<'_>) -> u8 {
    let value = cx.load(cx.src, cx.opcode & 0x07);
    let r = alu::sub8(cx.regs.a, value, cx.regs.f & CF != 0);
    cx.regs.a = r.value;
    cx.set_f(r.flags);
    0
}

pub(crate) fn and_a(cx: &mut Ctx<'_>) -> u8 {
    let value = cx.load(cx.src, cx.opcode & 0x07);
    let r = alu::and8(cx.regs.a, value);
    cx.regs.a = r.value;
    cx.set_f(r.flags);
    0
}

pub(crate) fn xor_a(cx: &mut Ctx<'_>) -> u8 {
    let value = cx.load(cx.src, cx.opcode & 0x07);
    let r = alu::xor8(cx.regs.a, value);
    cx.regs.a = r.value;
    cx.set_f(r.flags);
    0
}

pub(crate) fn or_a(cx: &mut Ctx<'_>) -> u8 {
    let value = cx.load(cx.src, cx.opcode & 0x07);
    let r = alu::or8(cx.regs.a, value);
    cx.regs.a = r.value;
    cx.set_f(r.flags);
    0
}

/// `CP` discards the difference and takes X/U from the operand.
pub(crate) fn cp_a(cx: &mut Ctx<'_>) -> u8 {
    let value = cx.load(cx.src, cx.opcode & 0x07);
    let r = alu::sub8(cx.regs.a, value, false);
    cx.set_f((r.flags & !(UF | XF)) | (value & (UF | XF)));
    0
}

pub(crate) fn ret_cc(cx: &mut Ctx<'_>) -> u8 {
    if cx.condition((cx.opcode >> 3) & 0x07) {
        cx.regs.pc = cx.pop16();
        cx.regs.wz = cx.regs.pc;
        6
    } else {
        0
    }
}

/// `POP AF` loads F without computing it, so Q stays cleared.
pub(crate) fn pop_rr(cx: &mut Ctx<'_>) -> u8 {
    let value = cx.pop16();
    match (cx.opcode >> 4) & 0x03 {
        0 => cx.regs.set_bc(value),
        1 => cx.regs.set_de(value),
        2 => cx.set_index16(value),
        _ => cx.regs.set_af(value),
    }
    0
}

pub(crate) fn push_rr(cx: &mut Ctx<'_>) -> u8 {
    let value = match (cx.opcode >> 4) & 0x03 {
        0 => cx.regs.bc(),
        1 => cx.regs.de(),
        2 => cx.index16(),
        _ => cx.regs.af(),
    };
    cx.push16(value);
    0
}

pub(crate) fn jp_nn(cx: &mut Ctx<'_>) -> u8 {
    let nn = cx.imm16(cx.src);
    cx.regs.pc = nn;
    cx.regs.wz = nn;
    0
}

/// `JP cc` costs the same taken or not; WZ latches the target either way.
pub(crate) fn jp_cc(cx: &mut Ctx<'_>) -> u8 {
    let nn = cx.imm16(cx.src);
    cx.regs.wz = nn;
    if cx.condition((cx.opcode >> 3) & 0x07) {
        cx.regs.pc = nn;
    }
    0
}

pub(crate) fn call_nn(cx: &mut Ctx<'_>) -> u8 {
    let nn = cx.imm16(cx.src);
    let ret = cx.regs.pc;
    cx.push16(ret);
    cx.regs.pc = nn;
    cx.regs.wz = nn;
    0
}

pub(crate) fn call_cc(cx: &mut Ctx<'_>) -> u8 {
    let nn = cx.imm16(cx.src);
    cx.regs.wz = nn;
    if cx.condition((cx.opcode >> 3) & 0x07) {
        let ret = cx.regs.pc;
        cx.push16(ret);
        cx.regs.pc = nn;
        7
    } else {
        0
    }
}

pub(crate) fn rst(cx: &mut Ctx<'_>) -> u8 {
    let target = u16::from(cx.opcode & 0x38);
    let ret = cx.regs.pc;
    cx.push16(ret);
    cx.regs.pc = target;
    cx.regs.wz = target;
    0
}

pub(crate) fn ret(cx: &mut Ctx<'_>) -> u8 {
    cx.regs.pc = cx.pop16();
    cx.regs.wz = cx.regs.pc;
    0
}

pub(crate) fn exx(cx: &mut Ctx<'_>) -> u8 {
    std::mem::swap(&mut cx.regs.b, &mut cx.regs.b_alt);
    std::mem::swap(&mut cx.regs.c, &mut cx.regs.c_alt);
    std::mem::swap(&mut cx.regs.d, &mut cx.regs.d_alt);
    std::mem::swap(&mut cx.regs.e, &mut cx.regs.e_alt);
    std::mem::swap(&mut cx.regs.h, &mut cx.regs.h_alt);
    std::mem::swap(&mut cx.regs.l, &mut cx.regs.l_alt);
    0
}

pub(crate) fn ex_de_hl(cx: &mut Ctx<'_>) -> u8 {
    std::mem::swap(&mut cx.regs.d, &mut cx.regs.h);
    std::mem::swap(&mut cx.regs.e, &mut cx.regs.l);
    0
}

pub(crate) fn ex_sp_hl(cx: &mut Ctx<'_>) -> u8 {
    let sp = cx.regs.sp;
    let lo = cx.read(sp);
    let hi = cx.read(sp.wrapping_add(1));
    let old = cx.index16();
    cx.write(sp, old as u8);
    cx.write(sp.wrapping_add(1), (old >> 8) as u8);
    let new = u16::from(hi) << 8 | u16::from(lo);
    cx.set_index16(new);
    cx.regs.wz = new;
    0
}

pub(crate) fn jp_hl(cx: &mut Ctx<'_>) -> u8 {
    cx.regs.pc = cx.index16();
    0
}

pub(crate) fn di(cx: &mut Ctx<'_>) -> u8 {
    cx.regs.iff1 = false;
    cx.regs.iff2 = false;
    0
}

/// `EI` enables interrupts but acceptance is deferred one instruction.
pub(crate) fn ei(cx: &mut Ctx<'_>) -> u8 {
    cx.regs.iff1 = true;
    cx.regs.iff2 = true;
    cx.regs.ei_pending = true;
    0
}

pub(crate) fn out_n_a(cx: &mut Ctx<'_>) -> u8 {
    let n = cx.load(cx.dst, 0);
    let a = cx.regs.a;
    let port = u16::from(a) << 8 | u16::from(n);
    cx.bus.write_port(port, a);
    cx.regs.wz = u16::from(a) << 8 | u16::from(n.wrapping_add(1));
    0
}

/// `IN A,(n)` does not affect flags, unlike the ED `IN r,(C)` group.
pub(crate) fn in_a_n(cx: &mut Ctx<'_>) -> u8 {
    let n = cx.load(cx.src, 0);
    let port = u16::from(cx.regs.a) << 8 | u16::from(n);
    cx.regs.a = cx.bus.read_port(port);
    cx.regs.wz = port.wrapping_add(1);
    0
}
