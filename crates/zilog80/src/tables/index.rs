//! DD/FD-prefixed opcodes: only the slots the prefix changes.

use super::{Table, op};
use crate::exec as x;
use crate::insn::AddressingMode::{Immediate16, Immediate8, Implied, Indexed, RegisterDirect};

pub(super) fn build_dd() -> Table {
    let mut t: Table = [None; 256];
    t[0x09] = op("ADD IX,BC", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::add_hl_rr);
    t[0x19] = op("ADD IX,DE", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::add_hl_rr);
    t[0x21] = op("LD IX,nn", RegisterDirect, Immediate16, &[4, 4, 3, 3], x::ld_rr_nn);
    t[0x22] = op("LD (nn),IX", Immediate16, RegisterDirect, &[4, 4, 3, 3, 3, 3], x::ld_ext_rr);
    t[0x23] = op("INC IX", RegisterDirect, Implied, &[4, 6], x::inc_rr);
    t[0x24] = op("INC IXH", RegisterDirect, Implied, &[4, 4], x::inc_r);
    t[0x25] = op("DEC IXH", RegisterDirect, Implied, &[4, 4], x::dec_r);
    t[0x26] = op("LD IXH,n", RegisterDirect, Immediate8, &[4, 4, 3], x::ld_r_r);
    t[0x29] = op("ADD IX,IX", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::add_hl_rr);
    t[0x2A] = op("LD IX,(nn)", RegisterDirect, Immediate16, &[4, 4, 3, 3, 3, 3], x::ld_rr_ext);
    t[0x2B] = op("DEC IX", RegisterDirect, Implied, &[4, 6], x::dec_rr);
    t[0x2C] = op("INC IXL", RegisterDirect, Implied, &[4, 4], x::inc_r);
    t[0x2D] = op("DEC IXL", RegisterDirect, Implied, &[4, 4], x::dec_r);
    t[0x2E] = op("LD IXL,n", RegisterDirect, Immediate8, &[4, 4, 3], x::ld_r_r);
    t[0x34] = op("INC (IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::inc_r);
    t[0x35] = op("DEC (IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::dec_r);
    t[0x36] = op("LD (IX+d),n", Indexed, Immediate8, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x39] = op("ADD IX,SP", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::add_hl_rr);
    t[0x44] = op("LD B,IXH", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x45] = op("LD B,IXL", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x46] = op("LD B,(IX+d)", RegisterDirect, Indexed, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x4C] = op("LD C,IXH", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x4D] = op("LD C,IXL", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x4E] = op("LD C,(IX+d)", RegisterDirect, Indexed, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x54] = op("LD D,IXH", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x55] = op("LD D,IXL", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x56] = op("LD D,(IX+d)", RegisterDirect, Indexed, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x5C] = op("LD E,IXH", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x5D] = op("LD E,IXL", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x5E] = op("LD E,(IX+d)", RegisterDirect, Indexed, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x60] = op("LD IXH,B", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x61] = op("LD IXH,C", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x62] = op("LD IXH,D", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x63] = op("LD IXH,E", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x64] = op("LD IXH,IXH", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x65] = op("LD IXH,IXL", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x66] = op("LD H,(IX+d)", RegisterDirect, Indexed, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x67] = op("LD IXH,A", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x68] = op("LD IXL,B", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x69] = op("LD IXL,C", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x6A] = op("LD IXL,D", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x6B] = op("LD IXL,E", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x6C] = op("LD IXL,IXH", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x6D] = op("LD IXL,IXL", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x6E] = op("LD L,(IX+d)", RegisterDirect, Indexed, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x6F] = op("LD IXL,A", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x70] = op("LD (IX+d),B", Indexed, RegisterDirect, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x71] = op("LD (IX+d),C", Indexed, RegisterDirect, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x72] = op("LD (IX+d),D", Indexed, RegisterDirect, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x73] = op("LD (IX+d),E", Indexed, RegisterDirect, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x74] = op("LD (IX+d),H", Indexed, RegisterDirect, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x75] = op("LD (IX+d),L", Indexed, RegisterDirect, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x77] = op("LD (IX+d),A", Indexed, RegisterDirect, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x7C] = op("LD A,IXH", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x7D] = op("LD A,IXL", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x7E] = op("LD A,(IX+d)", RegisterDirect, Indexed, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x84] = op("ADD A,IXH", Implied, RegisterDirect, &[4, 4], x::add_a);
    t[0x85] = op("ADD A,IXL", Implied, RegisterDirect, &[4, 4], x::add_a);
    t[0x86] = op("ADD A,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::add_a);
    t[0x8C] = op("ADC A,IXH", Implied, RegisterDirect, &[4, 4], x::adc_a);
    t[0x8D] = op("ADC A,IXL", Implied, RegisterDirect, &[4, 4], x::adc_a);
    t[0x8E] = op("ADC A,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::adc_a);
    t[0x94] = op("SUB IXH", Implied, RegisterDirect, &[4, 4], x::sub_a);
    t[0x95] = op("SUB IXL", Implied, RegisterDirect, &[4, 4], x::sub_a);
    t[0x96] = op("SUB (IX+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::sub_a);
    t[0x9C] = op("SBC A,IXH", Implied, RegisterDirect, &[4, 4], x::sbc_a);
    t[0x9D] = op("SBC A,IXL", Implied, RegisterDirect, &[4, 4], x::sbc_a);
    t[0x9E] = op("SBC A,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::sbc_a);
    t[0xA4] = op("AND IXH", Implied, RegisterDirect, &[4, 4], x::and_a);
    t[0xA5] = op("AND IXL", Implied, RegisterDirect, &[4, 4], x::and_a);
    t[0xA6] = op("AND (IX+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::and_a);
    t[0xAC] = op("XOR IXH", Implied, RegisterDirect, &[4, 4], x::xor_a);
    t[0xAD] = op("XOR IXL", Implied, RegisterDirect, &[4, 4], x::xor_a);
    t[0xAE] = op("XOR (IX+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::xor_a);
    t[0xB4] = op("OR IXH", Implied, RegisterDirect, &[4, 4], x::or_a);
    t[0xB5] = op("OR IXL", Implied, RegisterDirect, &[4, 4], x::or_a);
    t[0xB6] = op("OR (IX+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::or_a);
    t[0xBC] = op("CP IXH", Implied, RegisterDirect, &[4, 4], x::cp_a);
    t[0xBD] = op("CP IXL", Implied, RegisterDirect, &[4, 4], x::cp_a);
    t[0xBE] = op("CP (IX+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::cp_a);
    t[0xE1] = op("POP IX", RegisterDirect, Implied, &[4, 4, 3, 3], x::pop_rr);
    t[0xE3] = op("EX (SP),IX", Implied, Implied, &[4, 4, 3, 4, 3, 5], x::ex_sp_hl);
    t[0xE5] = op("PUSH IX", RegisterDirect, Implied, &[4, 5, 3, 3], x::push_rr);
    t[0xE9] = op("JP (IX)", Implied, Implied, &[4, 4], x::jp_hl);
    t[0xF9] = op("LD SP,IX", Implied, Implied, &[4, 6], x::ld_sp_hl);
    t
}

pub(super) fn build_fd() -> Table {
    let mut t: Table = [None; 256];
    t[0x09] = op("ADD IY,BC", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::add_hl_rr);
    t[0x19] = op("ADD IY,DE", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::add_hl_rr);
    t[0x21] = op("LD IY,nn", RegisterDirect, Immediate16, &[4, 4, 3, 3], x::ld_rr_nn);
    t[0x22] = op("LD (nn),IY", Immediate16, RegisterDirect, &[4, 4, 3, 3, 3, 3], x::ld_ext_rr);
    t[0x23] = op("INC IY", RegisterDirect, Implied, &[4, 6], x::inc_rr);
    t[0x24] = op("INC IYH", RegisterDirect, Implied, &[4, 4], x::inc_r);
    t[0x25] = op("DEC IYH", RegisterDirect, Implied, &[4, 4], x::dec_r);
    t[0x26] = op("LD IYH,n", RegisterDirect, Immediate8, &[4, 4, 3], x::ld_r_r);
    t[0x29] = op("ADD IY,IY", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::add_hl_rr);
    t[0x2A] = op("LD IY,(nn)", RegisterDirect, Immediate16, &[4, 4, 3, 3, 3, 3], x::ld_rr_ext);
    t[0x2B] = op("DEC IY", RegisterDirect, Implied, &[4, 6], x::dec_rr);
    t[0x2C] = op("INC IYL", RegisterDirect, Implied, &[4, 4], x::inc_r);
    t[0x2D] = op("DEC IYL", RegisterDirect, Implied, &[4, 4], x::dec_r);
    t[0x2E] = op("LD IYL,n", RegisterDirect, Immediate8, &[4, 4, 3], x::ld_r_r);
    t[0x34] = op("INC (IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::inc_r);
    t[0x35] = op("DEC (IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::dec_r);
    t[0x36] = op("LD (IY+d),n", Indexed, Immediate8, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x39] = op("ADD IY,SP", RegisterDirect, RegisterDirect, &[4, 4, 4, 3], x::add_hl_rr);
    t[0x44] = op("LD B,IYH", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x45] = op("LD B,IYL", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x46] = op("LD B,(IY+d)", RegisterDirect, Indexed, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x4C] = op("LD C,IYH", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x4D] = op("LD C,IYL", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x4E] = op("LD C,(IY+d)", RegisterDirect, Indexed, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x54] = op("LD D,IYH", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x55] = op("LD D,IYL", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x56] = op("LD D,(IY+d)", RegisterDirect, Indexed, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x5C] = op("LD E,IYH", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x5D] = op("LD E,IYL", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x5E] = op("LD E,(IY+d)", RegisterDirect, Indexed, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x60] = op("LD IYH,B", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x61] = op("LD IYH,C", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x62] = op("LD IYH,D", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x63] = op("LD IYH,E", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x64] = op("LD IYH,IYH", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x65] = op("LD IYH,IYL", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x66] = op("LD H,(IY+d)", RegisterDirect, Indexed, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x67] = op("LD IYH,A", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x68] = op("LD IYL,B", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x69] = op("LD IYL,C", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x6A] = op("LD IYL,D", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x6B] = op("LD IYL,E", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x6C] = op("LD IYL,IYH", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x6D] = op("LD IYL,IYL", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x6E] = op("LD L,(IY+d)", RegisterDirect, Indexed, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x6F] = op("LD IYL,A", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x70] = op("LD (IY+d),B", Indexed, RegisterDirect, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x71] = op("LD (IY+d),C", Indexed, RegisterDirect, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x72] = op("LD (IY+d),D", Indexed, RegisterDirect, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x73] = op("LD (IY+d),E", Indexed, RegisterDirect, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x74] = op("LD (IY+d),H", Indexed, RegisterDirect, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x75] = op("LD (IY+d),L", Indexed, RegisterDirect, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x77] = op("LD (IY+d),A", Indexed, RegisterDirect, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x7C] = op("LD A,IYH", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x7D] = op("LD A,IYL", RegisterDirect, RegisterDirect, &[4, 4], x::ld_r_r);
    t[0x7E] = op("LD A,(IY+d)", RegisterDirect, Indexed, &[4, 4, 3, 5, 3], x::ld_r_r);
    t[0x84] = op("ADD A,IYH", Implied, RegisterDirect, &[4, 4], x::add_a);
    t[0x85] = op("ADD A,IYL", Implied, RegisterDirect, &[4, 4], x::add_a);
    t[0x86] = op("ADD A,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::add_a);
    t[0x8C] = op("ADC A,IYH", Implied, RegisterDirect, &[4, 4], x::adc_a);
    t[0x8D] = op("ADC A,IYL", Implied, RegisterDirect, &[4, 4], x::adc_a);
    t[0x8E] = op("ADC A,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::adc_a);
    t[0x94] = op("SUB IYH", Implied, RegisterDirect, &[4, 4], x::sub_a);
    t[0x95] = op("SUB IYL", Implied, RegisterDirect, &[4, 4], x::sub_a);
    t[0x96] = op("SUB (IY+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::sub_a);
    t[0x9C] = op("SBC A,IYH", Implied, RegisterDirect, &[4, 4], x::sbc_a);
    t[0x9D] = op("SBC A,IYL", Implied, RegisterDirect, &[4, 4], x::sbc_a);
    t[0x9E] = op("SBC A,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::sbc_a);
    t[0xA4] = op("AND IYH", Implied, RegisterDirect, &[4, 4], x::and_a);
    t[0xA5] = op("AND IYL", Implied, RegisterDirect, &[4, 4], x::and_a);
    t[0xA6] = op("AND (IY+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::and_a);
    t[0xAC] = op("XOR IYH", Implied, RegisterDirect, &[4, 4], x::xor_a);
    t[0xAD] = op("XOR IYL", Implied, RegisterDirect, &[4, 4], x::xor_a);
    t[0xAE] = op("XOR (IY+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::xor_a);
    t[0xB4] = op("OR IYH", Implied, RegisterDirect, &[4, 4], x::or_a);
    t[0xB5] = op("OR IYL", Implied, RegisterDirect, &[4, 4], x::or_a);
    t[0xB6] = op("OR (IY+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::or_a);
    t[0xBC] = op("CP IYH", Implied, RegisterDirect, &[4, 4], x::cp_a);
    t[0xBD] = op("CP IYL", Implied, RegisterDirect, &[4, 4], x::cp_a);
    t[0xBE] = op("CP (IY+d)", Implied, Indexed, &[4, 4, 3, 5, 3], x::cp_a);
    t[0xE1] = op("POP IY", RegisterDirect, Implied, &[4, 4, 3, 3], x::pop_rr);
    t[0xE3] = op("EX (SP),IY", Implied, Implied, &[4, 4, 3, 4, 3, 5], x::ex_sp_hl);
    t[0xE5] = op("PUSH IY", RegisterDirect, Implied, &[4, 5, 3, 3], x::push_rr);
    t[0xE9] = op("JP (IY)", Implied, Implied, &[4, 4], x::jp_hl);
    t[0xF9] = op("LD SP,IY", Implied, Implied, &[4, 6], x::ld_sp_hl);
    t
}
