//! Unprefixed opcodes.

use super::{Table, op};
use crate::exec as x;
use crate::insn::AddressingMode::{Immediate16, Immediate8, ImmediateSigned, Implied, RegisterDirect, RegisterIndirectHl};

pub(super) fn build() -> Table {
    let mut t: Table = [None; 256];
    t[0x00] = op("NOP", Implied, Implied, &[4], x::nop);
    t[0x01] = op("LD BC,nn", RegisterDirect, Immediate16, &[4, 3, 3], x::ld_rr_nn);
    t[0x02] = op("LD (BC),A", Implied, Implied, &[4, 3], x::ld_bc_a);
    t[0x03] = op("INC BC", RegisterDirect, Implied, &[6], x::inc_rr);
    t[0x04] = op("INC B", RegisterDirect, Implied, &[4], x::inc_r);
    t[0x05] = op("DEC B", RegisterDirect, Implied, &[4], x::dec_r);
    t[0x06] = op("LD B,n", RegisterDirect, Immediate8, &[4, 3], x::ld_r_r);
    t[0x07] = op("RLCA", Implied, Implied, &[4], x::rlca);
    t[0x08] = op("EX AF,AF'", Implied, Implied, &[4], x::ex_af);
    t[0x09] = op("ADD HL,BC", RegisterDirect, RegisterDirect, &[4, 4, 3], x::add_hl_rr);
    t[0x0A] = op("LD A,(BC)", Implied, Implied, &[4, 3], x::ld_a_bc);
    t[0x0B] = op("DEC BC", RegisterDirect, Implied, &[6], x::dec_rr);
    t[0x0C] = op("INC C", RegisterDirect, Implied, &[4], x::inc_r);
    t[0x0D] = op("DEC C", RegisterDirect, Implied, &[4], x::dec_r);
    t[0x0E] = op("LD C,n", RegisterDirect, Immediate8, &[4, 3], x::ld_r_r);
    t[0x0F] = op("RRCA", Implied, Implied, &[4], x::rrca);
    t[0x10] = op("DJNZ e", Implied, ImmediateSigned, &[5, 3], x::djnz);
    t[0x11] = op("LD DE,nn", RegisterDirect, Immediate16, &[4, 3, 3], x::ld_rr_nn);
    t[0x12] = op("LD (DE),A", Implied, Implied, &[4, 3], x::ld_de_a);
    t[0x13] = op("INC DE", RegisterDirect, Implied, &[6], x::inc_rr);
    t[0x14] = op("INC D", RegisterDirect, Implied, &[4], x::inc_r);
    t[0x15] = op("DEC D", RegisterDirect, Implied, &[4], x::dec_r);
    t[0x16] = op("LD D,n", RegisterDirect, Immediate8, &[4, 3], x::ld_r_r);
    t[0x17] = op("RLA", Implied, Implied, &[4], x::rla);
    t[0x18] = op("JR e", Implied, ImmediateSigned, &[4, 3, 5], x::jr);
    t[0x19] = op("ADD HL,DE", RegisterDirect, RegisterDirect, &[4, 4, 3], x::add_hl_rr);
    t[0x1A] = op("LD A,(DE)", Implied, Implied, &[4, 3], x::ld_a_de);
    t[0x1B] = op("DEC DE", RegisterDirect, Implied, &[6], x::dec_rr);
    t[0x1C] = op("INC E", RegisterDirect, Implied, &[4], x::inc_r);
    t[0x1D] = op("DEC E", RegisterDirect, Implied, &[4], x::dec_r);
    t[0x1E] = op("LD E,n", RegisterDirect, Immediate8, &[4, 3], x::ld_r_r);
    t[0x1F] = op("RRA", Implied, Implied, &[4], x::rra);
    t[0x20] = op("JR NZ,e", Implied, ImmediateSigned, &[4, 3], x::jr_cc);
    t[0x21] = op("LD HL,nn", RegisterDirect, Immediate16, &[4, 3, 3], x::ld_rr_nn);
    t[0x22] = op("LD (nn),HL", Immediate16, RegisterDirect, &[4, 3, 3, 3, 3], x::ld_ext_rr);
    t[0x23] = op("INC HL", RegisterDirect, Implied, &[6], x::inc_rr);
    t[0x24] = op("INC H", RegisterDirect, Implied, &[4], x::inc_r);
    t[0x25] = op("DEC H", RegisterDirect, Implied, &[4], x::dec_r);
    t[0x26] = op("LD H,n", RegisterDirect, Immediate8, &[4, 3], x::ld_r_r);
    t[0x27] = op("DAA", Implied, Implied, &[4], x::daa);
    t[0x28] = op("JR Z,e", Implied, ImmediateSigned, &[4, 3], x::jr_cc);
    t[0x29] = op("ADD HL,HL", RegisterDirect, RegisterDirect, &[4, 4, 3], x::add_hl_rr);
    t[0x2A] = op("LD HL,(nn)", RegisterDirect, Immediate16, &[4, 3, 3, 3, 3], x::ld_rr_ext);
    t[0x2B] = op("DEC HL", RegisterDirect, Implied, &[6], x::dec_rr);
    t[0x2C] = op("INC L", RegisterDirect, Implied, &[4], x::inc_r);
    t[0x2D] = op("DEC L", RegisterDirect, Implied, &[4], x::dec_r);
    t[0x2E] = op("LD L,n", RegisterDirect, Immediate8, &[4, 3], x::ld_r_r);
    t[0x2F] = op("CPL", Implied, Implied, &[4], x::cpl);
    t[0x30] = op("JR NC,e", Implied, ImmediateSigned, &[4, 3], x::jr_cc);
    t[0x31] = op("LD SP,nn", RegisterDirect, Immediate16, &[4, 3, 3], x::ld_rr_nn);
    t[0x32] = op("LD (nn),A", Immediate16, Implied, &[4, 3, 3, 3], x::ld_ext_a);
    t[0x33] = op("INC SP", RegisterDirect, Implied, &[6], x::inc_rr);
    t[0x34] = op("INC (HL)", RegisterIndirectHl, Implied, &[4, 4, 3], x::inc_r);
    t[0x35] = op("DEC (HL)", RegisterIndirectHl, Implied, &[4, 4, 3], x::dec_r);
    t[0x36] = op("LD (HL),n", RegisterIndirectHl, Immediate8, &[4, 3, 3], x::ld_r_r);
    t[0x37] = op("SCF", Implied, Implied, &[4], x::scf);
    t[0x38] = op("JR C,e", Implied, ImmediateSigned, &[4, 3], x::jr_cc);
    t[0x39] = op("ADD HL,SP", RegisterDirect, RegisterDirect, &[4, 4, 3], x::add_hl_rr);
    t[0x3A] = op("LD A,(nn)", Implied, Immediate16, &[4, 3, 3, 3], x::ld_a_ext);
    t[0x3B] = op("DEC SP", RegisterDirect, Implied, &[6], x::dec_rr);
    t[0x3C] = op("INC A", RegisterDirect, Implied, &[4], x::inc_r);
    t[0x3D] = op("DEC A", RegisterDirect, Implied, &[4], x::dec_r);
    t[0x3E] = op("LD A,n", RegisterDirect, Immediate8, &[4, 3], x::ld_r_r);
    t[0x3F] = op("CCF", Implied, Implied, &[4], x::ccf);
    t[0x40] = op("LD B,B", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x41] = op("LD B,C", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x42] = op("LD B,D", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x43] = op("LD B,E", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x44] = op("LD B,H", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x45] = op("LD B,L", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x46] = op("LD B,(HL)", RegisterDirect, RegisterIndirectHl, &[4, 3], x::ld_r_r);
    t[0x47] = op("LD B,A", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x48] = op("LD C,B", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x49] = op("LD C,C", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x4A] = op("LD C,D", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x4B] = op("LD C,E", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x4C] = op("LD C,H", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x4D] = op("LD C,L", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x4E] = op("LD C,(HL)", RegisterDirect, RegisterIndirectHl, &[4, 3], x::ld_r_r);
    t[0x4F] = op("LD C,A", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x50] = op("LD D,B", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x51] = op("LD D,C", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x52] = op("LD D,D", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x53] = op("LD D,E", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x54] = op("LD D,H", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x55] = op("LD D,L", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x56] = op("LD D,(HL)", RegisterDirect, RegisterIndirectHl, &[4, 3], x::ld_r_r);
    t[0x57] = op("LD D,A", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x58] = op("LD E,B", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x59] = op("LD E,C", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x5A] = op("LD E,D", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x5B] = op("LD E,E", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x5C] = op("LD E,H", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x5D] = op("LD E,L", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x5E] = op("LD E,(HL)", RegisterDirect, RegisterIndirectHl, &[4, 3], x::ld_r_r);
    t[0x5F] = op("LD E,A", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x60] = op("LD H,B", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x61] = op("LD H,C", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x62] = op("LD H,D", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x63] = op("LD H,E", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x64] = op("LD H,H", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x65] = op("LD H,L", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x66] = op("LD H,(HL)", RegisterDirect, RegisterIndirectHl, &[4, 3], x::ld_r_r);
    t[0x67] = op("LD H,A", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x68] = op("LD L,B", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x69] = op("LD L,C", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x6A] = op("LD L,D", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x6B] = op("LD L,E", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x6C] = op("LD L,H", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x6D] = op("LD L,L", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x6E] = op("LD L,(HL)", RegisterDirect, RegisterIndirectHl, &[4, 3], x::ld_r_r);
    t[0x6F] = op("LD L,A", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x70] = op("LD (HL),B", RegisterIndirectHl, RegisterDirect, &[4, 3], x::ld_r_r);
    t[0x71] = op("LD (HL),C", RegisterIndirectHl, RegisterDirect, &[4, 3], x::ld_r_r);
    t[0x72] = op("LD (HL),D", RegisterIndirectHl, RegisterDirect, &[4, 3], x::ld_r_r);
    t[0x73] = op("LD (HL),E", RegisterIndirectHl, RegisterDirect, &[4, 3], x::ld_r_r);
    t[0x74] = op("LD (HL),H", RegisterIndirectHl, RegisterDirect, &[4, 3], x::ld_r_r);
    t[0x75] = op("LD (HL),L", RegisterIndirectHl, RegisterDirect, &[4, 3], x::ld_r_r);
    t[0x76] = op("HALT", Implied, Implied, &[4], x::halt);
    t[0x77] = op("LD (HL),A", RegisterIndirectHl, RegisterDirect, &[4, 3], x::ld_r_r);
    t[0x78] = op("LD A,B", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x79] = op("LD A,C", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x7A] = op("LD A,D", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x7B] = op("LD A,E", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x7C] = op("LD A,H", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x7D] = op("LD A,L", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x7E] = op("LD A,(HL)", RegisterDirect, RegisterIndirectHl, &[4, 3], x::ld_r_r);
    t[0x7F] = op("LD A,A", RegisterDirect, RegisterDirect, &[4], x::ld_r_r);
    t[0x80] = op("ADD A,B", Implied, RegisterDirect, &[4], x::add_a);
    t[0x81] = op("ADD A,C", Implied, RegisterDirect, &[4], x::add_a);
    t[0x82] = op("ADD A,D", Implied, RegisterDirect, &[4], x::add_a);
    t[0x83] = op("ADD A,E", Implied, RegisterDirect, &[4], x::add_a);
    t[0x84] = op("ADD A,H", Implied, RegisterDirect, &[4], x::add_a);
    t[0x85] = op("ADD A,L", Implied, RegisterDirect, &[4], x::add_a);
    t[0x86] = op("ADD A,(HL)", Implied, RegisterIndirectHl, &[4, 3], x::add_a);
    t[0x87] = op("ADD A,A", Implied, RegisterDirect, &[4], x::add_a);
    t[0x88] = op("ADC A,B", Implied, RegisterDirect, &[4], x::adc_a);
    t[0x89] = op("ADC A,C", Implied, RegisterDirect, &[4], x::adc_a);
    t[0x8A] = op("ADC A,D", Implied, RegisterDirect, &[4], x::adc_a);
    t[0x8B] = op("ADC A,E", Implied, RegisterDirect, &[4], x::adc_a);
    t[0x8C] = op("ADC A,H", Implied, RegisterDirect, &[4], x::adc_a);
    t[0x8D] = op("ADC A,L", Implied, RegisterDirect, &[4], x::adc_a);
    t[0x8E] = op("ADC A,(HL)", Implied, RegisterIndirectHl, &[4, 3], x::adc_a);
    t[0x8F] = op("ADC A,A", Implied, RegisterDirect, &[4], x::adc_a);
    t[0x90] = op("SUB B", Implied, RegisterDirect, &[4], x::sub_a);
    t[0x91] = op("SUB C", Implied, RegisterDirect, &[4], x::sub_a);
    t[0x92] = op("SUB D", Implied, RegisterDirect, &[4], x::sub_a);
    t[0x93] = op("SUB E", Implied, RegisterDirect, &[4], x::sub_a);
    t[0x94] = op("SUB H", Implied, RegisterDirect, &[4], x::sub_a);
    t[0x95] = op("SUB L", Implied, RegisterDirect, &[4], x::sub_a);
    t[0x96] = op("SUB (HL)", Implied, RegisterIndirectHl, &[4, 3], x::sub_a);
    t[0x97] = op("SUB A", Implied, RegisterDirect, &[4], x::sub_a);
    t[0x98] = op("SBC A,B", Implied, RegisterDirect, &[4], x::sbc_a);
    t[0x99] = op("SBC A,C", Implied, RegisterDirect, &[4], x::sbc_a);
    t[0x9A] = op("SBC A,D", Implied, RegisterDirect, &[4], x::sbc_a);
    t[0x9B] = op("SBC A,E", Implied, RegisterDirect, &[4], x::sbc_a);
    t[0x9C] = op("SBC A,H", Implied, RegisterDirect, &[4], x::sbc_a);
    t[0x9D] = op("SBC A,L", Implied, RegisterDirect, &[4], x::sbc_a);
    t[0x9E] = op("SBC A,(HL)", Implied, RegisterIndirectHl, &[4, 3], x::sbc_a);
    t[0x9F] = op("SBC A,A", Implied, RegisterDirect, &[4], x::sbc_a);
    t[0xA0] = op("AND B", Implied, RegisterDirect, &[4], x::and_a);
    t[0xA1] = op("AND C", Implied, RegisterDirect, &[4], x::and_a);
    t[0xA2] = op("AND D", Implied, RegisterDirect, &[4], x::and_a);
    t[0xA3] = op("AND E", Implied, RegisterDirect, &[4], x::and_a);
    t[0xA4] = op("AND H", Implied, RegisterDirect, &[4], x::and_a);
    t[0xA5] = op("AND L", Implied, RegisterDirect, &[4], x::and_a);
    t[0xA6] = op("AND (HL)", Implied, RegisterIndirectHl, &[4, 3], x::and_a);
    t[0xA7] = op("AND A", Implied, RegisterDirect, &[4], x::and_a);
    t[0xA8] = op("XOR B", Implied, RegisterDirect, &[4], x::xor_a);
    t[0xA9] = op("XOR C", Implied, RegisterDirect, &[4], x::xor_a);
    t[0xAA] = op("XOR D", Implied, RegisterDirect, &[4], x::xor_a);
    t[0xAB] = op("XOR E", Implied, RegisterDirect, &[4], x::xor_a);
    t[0xAC] = op("XOR H", Implied, RegisterDirect, &[4], x::xor_a);
    t[0xAD] = op("XOR L", Implied, RegisterDirect, &[4], x::xor_a);
    t[0xAE] = op("XOR (HL)", Implied, RegisterIndirectHl, &[4, 3], x::xor_a);
    t[0xAF] = op("XOR A", Implied, RegisterDirect, &[4], x::xor_a);
    t[0xB0] = op("OR B", Implied, RegisterDirect, &[4], x::or_a);
    t[0xB1] = op("OR C", Implied, RegisterDirect, &[4], x::or_a);
    t[0xB2] = op("OR D", Implied, RegisterDirect, &[4], x::or_a);
    t[0xB3] = op("OR E", Implied, RegisterDirect, &[4], x::or_a);
    t[0xB4] = op("OR H", Implied, RegisterDirect, &[4], x::or_a);
    t[0xB5] = op("OR L", Implied, RegisterDirect, &[4], x::or_a);
    t[0xB6] = op("OR (HL)", Implied, RegisterIndirectHl, &[4, 3], x::or_a);
    t[0xB7] = op("OR A", Implied, RegisterDirect, &[4], x::or_a);
    t[0xB8] = op("CP B", Implied, RegisterDirect, &[4], x::cp_a);
    t[0xB9] = op("CP C", Implied, RegisterDirect, &[4], x::cp_a);
    t[0xBA] = op("CP D", Implied, RegisterDirect, &[4], x::cp_a);
    t[0xBB] = op("CP E", Implied, RegisterDirect, &[4], x::cp_a);
    t[0xBC] = op("CP H", Implied, RegisterDirect, &[4], x::cp_a);
    t[0xBD] = op("CP L", Implied, RegisterDirect, &[4], x::cp_a);
    t[0xBE] = op("CP (HL)", Implied, RegisterIndirectHl, &[4, 3], x::cp_a);
    t[0xBF] = op("CP A", Implied, RegisterDirect, &[4], x::cp_a);
    t[0xC0] = op("RET NZ", Implied, Implied, &[5], x::ret_cc);
    t[0xC1] = op("POP BC", RegisterDirect, Implied, &[4, 3, 3], x::pop_rr);
    t[0xC2] = op("JP NZ,nn", Implied, Immediate16, &[4, 3, 3], x::jp_cc);
    t[0xC3] = op("JP nn", Implied, Immediate16, &[4, 3, 3], x::jp_nn);
    t[0xC4] = op("CALL NZ,nn", Implied, Immediate16, &[4, 3, 3], x::call_cc);
    t[0xC5] = op("PUSH BC", RegisterDirect, Implied, &[5, 3, 3], x::push_rr);
    t[0xC6] = op("ADD A,n", Implied, Immediate8, &[4, 3], x::add_a);
    t[0xC7] = op("RST &00", Implied, Implied, &[5, 3, 3], x::rst);
    t[0xC8] = op("RET Z", Implied, Implied, &[5], x::ret_cc);
    t[0xC9] = op("RET", Implied, Implied, &[4, 3, 3], x::ret);
    t[0xCA] = op("JP Z,nn", Implied, Immediate16, &[4, 3, 3], x::jp_cc);
    t[0xCC] = op("CALL Z,nn", Implied, Immediate16, &[4, 3, 3], x::call_cc);
    t[0xCD] = op("CALL nn", Implied, Immediate16, &[4, 3, 4, 3, 3], x::call_nn);
    t[0xCE] = op("ADC A,n", Implied, Immediate8, &[4, 3], x::adc_a);
    t[0xCF] = op("RST &08", Implied, Implied, &[5, 3, 3], x::rst);
    t[0xD0] = op("RET NC", Implied, Implied, &[5], x::ret_cc);
    t[0xD1] = op("POP DE", RegisterDirect, Implied, &[4, 3, 3], x::pop_rr);
    t[0xD2] = op("JP NC,nn", Implied, Immediate16, &[4, 3, 3], x::jp_cc);
    t[0xD3] = op("OUT (n),A", Immediate8, Implied, &[4, 3, 4], x::out_n_a);
    t[0xD4] = op("CALL NC,nn", Implied, Immediate16, &[4, 3, 3], x::call_cc);
    t[0xD5] = op("PUSH DE", RegisterDirect, Implied, &[5, 3, 3], x::push_rr);
    t[0xD6] = op("SUB n", Implied, Immediate8, &[4, 3], x::sub_a);
    t[0xD7] = op("RST &10", Implied, Implied, &[5, 3, 3], x::rst);
    t[0xD8] = op("RET C", Implied, Implied, &[5], x::ret_cc);
    t[0xD9] = op("EXX", Implied, Implied, &[4], x::exx);
    t[0xDA] = op("JP C,nn", Implied, Immediate16, &[4, 3, 3], x::jp_cc);
    t[0xDB] = op("IN A,(n)", Implied, Immediate8, &[4, 3, 4], x::in_a_n);
    t[0xDC] = op("CALL C,nn", Implied, Immediate16, &[4, 3, 3], x::call_cc);
    t[0xDE] = op("SBC A,n", Implied, Immediate8, &[4, 3], x::sbc_a);
    t[0xDF] = op("RST &18", Implied, Implied, &[5, 3, 3], x::rst);
    t[0xE0] = op("RET PO", Implied, Implied, &[5], x::ret_cc);
    t[0xE1] = op("POP HL", RegisterDirect, Implied, &[4, 3, 3], x::pop_rr);
    t[0xE2] = op("JP PO,nn", Implied, Immediate16, &[4, 3, 3], x::jp_cc);
    t[0xE3] = op("EX (SP),HL", Implied, Implied, &[4, 3, 4, 3, 5], x::ex_sp_hl);
    t[0xE4] = op("CALL PO,nn", Implied, Immediate16, &[4, 3, 3], x::call_cc);
    t[0xE5] = op("PUSH HL", RegisterDirect, Implied, &[5, 3, 3], x::push_rr);
    t[0xE6] = op("AND n", Implied, Immediate8, &[4, 3], x::and_a);
    t[0xE7] = op("RST &20", Implied, Implied, &[5, 3, 3], x::rst);
    t[0xE8] = op("RET PE", Implied, Implied, &[5], x::ret_cc);
    t[0xE9] = op("JP (HL)", Implied, Implied, &[4], x::jp_hl);
    t[0xEA] = op("JP PE,nn", Implied, Immediate16, &[4, 3, 3], x::jp_cc);
    t[0xEB] = op("EX DE,HL", Implied, Implied, &[4], x::ex_de_hl);
    t[0xEC] = op("CALL PE,nn", Implied, Immediate16, &[4, 3, 3], x::call_cc);
    t[0xEE] = op("XOR n", Implied, Immediate8, &[4, 3], x::xor_a);
    t[0xEF] = op("RST &28", Implied, Implied, &[5, 3, 3], x::rst);
    t[0xF0] = op("RET P", Implied, Implied, &[5], x::ret_cc);
    t[0xF1] = op("POP AF", RegisterDirect, Implied, &[4, 3, 3], x::pop_rr);
    t[0xF2] = op("JP P,nn", Implied, Immediate16, &[4, 3, 3], x::jp_cc);
    t[0xF3] = op("DI", Implied, Implied, &[4], x::di);
    t[0xF4] = op("CALL P,nn", Implied, Immediate16, &[4, 3, 3], x::call_cc);
    t[0xF5] = op("PUSH AF", RegisterDirect, Implied, &[5, 3, 3], x::push_rr);
    t[0xF6] = op("OR n", Implied, Immediate8, &[4, 3], x::or_a);
    t[0xF7] = op("RST &30", Implied, Implied, &[5, 3, 3], x::rst);
    t[0xF8] = op("RET M", Implied, Implied, &[5], x::ret_cc);
    t[0xF9] = op("LD SP,HL", Implied, Implied, &[6], x::ld_sp_hl);
    t[0xFA] = op("JP M,nn", Implied, Immediate16, &[4, 3, 3], x::jp_cc);
    t[0xFB] = op("EI", Implied, Implied, &[4], x::ei);
    t[0xFC] = op("CALL M,nn", Implied, Immediate16, &[4, 3, 3], x::call_cc);
    t[0xFE] = op("CP n", Implied, Immediate8, &[4, 3], x::cp_a);
    t[0xFF] = op("RST &38", Implied, Implied, &[5, 3, 3], x::rst);
    t
}
