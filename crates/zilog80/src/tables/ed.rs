//! ED-prefixed opcodes, mirrors and block group included.

use super::{Table, op};
use crate::exec as x;
use crate::insn::AddressingMode::{Immediate16, Implied, RegisterDirect};

pub(super) fn build() -> Table {
    let mut t: Table = [None; 256];
    t[0x40] = op("IN B,(C)", Implied, Implied, &[4, 4, 4], x::in_r_c);
    t[0x41] = op("OUT (C),B", Implied, Implied, &[4, 4, 4], x::out_c_r);
    t[0x42] = op("SBC HL,BC", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::sbc_hl_rr);
    t[0x43] = op("LD (nn),BC", Immediate16, RegisterDirect, &[4, 4, 3, 3, 3, 3], x::ld_ext_rr);
    t[0x44] = op("NEG", Implied, Implied, &[4, 4], x::neg);
    t[0x45] = op("RETN", Implied, Implied, &[4, 4, 3, 3], x::retn);
    t[0x46] = op("IM 0", Implied, Implied, &[4, 4], x::im);
    t[0x47] = op("LD I,A", Implied, Implied, &[4, 5], x::ld_i_a);
    t[0x48] = op("IN C,(C)", Implied, Implied, &[4, 4, 4], x::in_r_c);
    t[0x49] = op("OUT (C),C", Implied, Implied, &[4, 4, 4], x::out_c_r);
    t[0x4A] = op("ADC HL,BC", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::adc_hl_rr);
    t[0x4B] = op("LD BC,(nn)", RegisterDirect, Immediate16, &[4, 4, 3, 3, 3, 3], x::ld_rr_ext);
    t[0x4C] = op("NEG", Implied, Implied, &[4, 4], x::neg);
    t[0x4D] = op("RETI", Implied, Implied, &[4, 4, 3, 3], x::reti);
    t[0x4E] = op("IM 0", Implied, Implied, &[4, 4], x::im);
    t[0x4F] = op("LD R,A", Implied, Implied, &[4, 5], x::ld_r_a);
    t[0x50] = op("IN D,(C)", Implied, Implied, &[4, 4, 4], x::in_r_c);
    t[0x51] = op("OUT (C),D", Implied, Implied, &[4, 4, 4], x::out_c_r);
    t[0x52] = op("SBC HL,DE", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::sbc_hl_rr);
    t[0x53] = op("LD (nn),DE", Immediate16, RegisterDirect, &[4, 4, 3, 3, 3, 3], x::ld_ext_rr);
    t[0x54] = op("NEG", Implied, Implied, &[4, 4], x::neg);
    t[0x55] = op("RETN", Implied, Implied, &[4, 4, 3, 3], x::retn);
    t[0x56] = op("IM 1", Implied, Implied, &[4, 4], x::im);
    t[0x57] = op("LD A,I", Implied, Implied, &[4, 5], x::ld_a_i);
    t[0x58] = op("IN E,(C)", Implied, Implied, &[4, 4, 4], x::in_r_c);
    t[0x59] = op("OUT (C),E", Implied, Implied, &[4, 4, 4], x::out_c_r);
    t[0x5A] = op("ADC HL,DE", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::adc_hl_rr);
    t[0x5B] = op("LD DE,(nn)", RegisterDirect, Immediate16, &[4, 4, 3, 3, 3, 3], x::ld_rr_ext);
    t[0x5C] = op("NEG", Implied, Implied, &[4, 4], x::neg);
    t[0x5D] = op("RETN", Implied, Implied, &[4, 4, 3, 3], x::retn);
    t[0x5E] = op("IM 2", Implied, Implied, &[4, 4], x::im);
    t[0x5F] = op("LD A,R", Implied, Implied, &[4, 5], x::ld_a_r);
    t[0x60] = op("IN H,(C)", Implied, Implied, &[4, 4, 4], x::in_r_c);
    t[0x61] = op("OUT (C),H", Implied, Implied, &[4, 4, 4], x::out_c_r);
    t[0x62] = op("SBC HL,HL", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::sbc_hl_rr);
    t[0x63] = op("LD (nn),HL", Immediate16, RegisterDirect, &[4, 4, 3, 3, 3, 3], x::ld_ext_rr);
    t[0x64] = op("NEG", Implied, Implied, &[4, 4], x::neg);
    t[0x65] = op("RETN", Implied, Implied, &[4, 4, 3, 3], x::retn);
    t[0x66] = op("IM 0", Implied, Implied, &[4, 4], x::im);
    t[0x67] = op("RRD", Implied, Implied, &[4, 4, 3, 4, 3], x::rrd);
    t[0x68] = op("IN L,(C)", Implied, Implied, &[4, 4, 4], x::in_r_c);
    t[0x69] = op("OUT (C),L", Implied, Implied, &[4, 4, 4], x::out_c_r);
    t[0x6A] = op("ADC HL,HL", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::adc_hl_rr);
    t[0x6B] = op("LD HL,(nn)", RegisterDirect, Immediate16, &[4, 4, 3, 3, 3, 3], x::ld_rr_ext);
    t[0x6C] = op("NEG", Implied, Implied, &[4, 4], x::neg);
    t[0x6D] = op("RETN", Implied, Implied, &[4, 4, 3, 3], x::retn);
    t[0x6E] = op("IM 0", Implied, Implied, &[4, 4], x::im);
    t[0x6F] = op("RLD", Implied, Implied, &[4, 4, 3, 4, 3], x::rld);
    t[0x70] = op("IN (C)", Implied, Implied, &[4, 4, 4], x::in_r_c);
    t[0x71] = op("OUT (C),0", Implied, Implied, &[4, 4, 4], x::out_c_r);
    t[0x72] = op("SBC HL,SP", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::sbc_hl_rr);
    t[0x73] = op("LD (nn),SP", Immediate16, RegisterDirect, &[4, 4, 3, 3, 3, 3], x::ld_ext_rr);
    t[0x74] = op("NEG", Implied, Implied, &[4, 4], x::neg);
    t[0x75] = op("RETN", Implied, Implied, &[4, 4, 3, 3], x::retn);
    t[0x76] = op("IM 1", Implied, Implied, &[4, 4], x::im);
    t[0x77] = op("NOP", Implied, Implied, &[4, 4], x::nop);
    t[0x78] = op("IN A,(C)", Implied, Implied, &[4, 4, 4], x::in_r_c);
    t[0x79] = op("OUT (C),A", Implied, Implied, &[4, 4, 4], x::out_c_r);
    t[0x7A] = op("ADC HL,SP", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::adc_hl_rr);
    t[0x7B] = op("LD SP,(nn)", RegisterDirect, Immediate16, &[4, 4, 3, 3, 3, 3], x::ld_rr_ext);
    t[0x7C] = op("NEG", Implied, Implied, &[4, 4], x::neg);
    t[0x7D] = op("RETN", Implied, Implied, &[4, 4, 3, 3], x::retn);
    t[0x7E] = op("IM 2", Implied, Implied, &[4, 4], x::im);
    t[0x7F] = op("NOP", Implied, Implied, &[4, 4], x::nop);
    t[0xA0] = op("LDI", Implied, Implied, &[4, 4, 3, 5], x::ldi);
    t[0xA1] = op("CPI", Implied, Implied, &[4, 4, 3, 5], x::cpi);
    t[0xA2] = op("INI", Implied, Implied, &[4, 5, 4, 3], x::ini);
    t[0xA3] = op("OUTI", Implied, Implied, &[4, 5, 3, 4], x::outi);
    t[0xA8] = op("LDD", Implied, Implied, &[4, 4, 3, 5], x::ldd);
    t[0xA9] = op("CPD", Implied, Implied, &[4, 4, 3, 5], x::cpd);
    t[0xAA] = op("IND", Implied, Implied, &[4, 5, 4, 3], x::ind);
    t[0xAB] = op("OUTD", Implied, Implied, &[4, 5, 3, 4], x::outd);
    t[0xB0] = op("LDIR", Implied, Implied, &[4, 4, 3, 5], x::ldir);
    t[0xB1] = op("CPIR", Implied, Implied, &[4, 4, 3, 5], x::cpir);
    t[0xB2] = op("INIR", Implied, Implied, &[4, 5, 4, 3], x::inir);
    t[0xB3] = op("OTIR", Implied, Implied, &[4, 5, 3, 4], x::otir);
    t[0xB8] = op("LDDR", Implied, Implied, &[4, 4, 3, 5], x::lddr);
    t[0xB9] = op("CPDR", Implied, Implied, &[4, 4, 3, 5], x::cpdr);
    t[0xBA] = op("INDR", Implied, Implied, &[4, 5, 4, 3], x::indr);
    t[0xBB] = op("OTDR", Implied, Implied, &[4, 5, 3, 4], x::otdr);
    t
}
