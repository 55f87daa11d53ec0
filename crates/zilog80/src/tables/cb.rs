//! CB-prefixed opcodes: rotates, shifts, bit manipulation.

use super::{Table, op};
use crate::exec as x;
use crate::insn::AddressingMode::{Implied, RegisterDirect, RegisterIndirectHl};

pub(super) fn build() -> Table {
    let mut t: Table = [None; 256];
    t[0x00] = op("RLC B", RegisterDirect, Implied, &[4, 4], x::rlc);
    t[0x01] = op("RLC C", RegisterDirect, Implied, &[4, 4], x::rlc);
    t[0x02] = op("RLC D", RegisterDirect, Implied, &[4, 4], x::rlc);
    t[0x03] = op("RLC E", RegisterDirect, Implied, &[4, 4], x::rlc);
    t[0x04] = op("RLC H", RegisterDirect, Implied, &[4, 4], x::rlc);
    t[0x05] = op("RLC L", RegisterDirect, Implied, &[4, 4], x::rlc);
    t[0x06] = op("RLC (HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::rlc);
    t[0x07] = op("RLC A", RegisterDirect, Implied, &[4, 4], x::rlc);
    t[0x08] = op("RRC B", RegisterDirect, Implied, &[4, 4], x::rrc);
    t[0x09] = op("RRC C", RegisterDirect, Implied, &[4, 4], x::rrc);
    t[0x0A] = op("RRC D", RegisterDirect, Implied, &[4, 4], x::rrc);
    t[0x0B] = op("RRC E", RegisterDirect, Implied, &[4, 4], x::rrc);
    t[0x0C] = op("RRC H", RegisterDirect, Implied, &[4, 4], x::rrc);
    t[0x0D] = op("RRC L", RegisterDirect, Implied, &[4, 4], x::rrc);
    t[0x0E] = op("RRC (HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::rrc);
    t[0x0F] = op("RRC A", RegisterDirect, Implied, &[4, 4], x::rrc);
    t[0x10] = op("RL B", RegisterDirect, Implied, &[4, 4], x::rl);
    t[0x11] = op("RL C", RegisterDirect, Implied, &[4, 4], x::rl);
    t[0x12] = op("RL D", RegisterDirect, Implied, &[4, 4], x::rl);
    t[0x13] = op("RL E", RegisterDirect, Implied, &[4, 4], x::rl);
    t[0x14] = op("RL H", RegisterDirect, Implied, &[4, 4], x::rl);
    t[0x15] = op("RL L", RegisterDirect, Implied, &[4, 4], x::rl);
    t[0x16] = op("RL (HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::rl);
    t[0x17] = op("RL A", RegisterDirect, Implied, &[4, 4], x::rl);
    t[0x18] = op("RR B", RegisterDirect, Implied, &[4, 4], x::rr);
    t[0x19] = op("RR C", RegisterDirect, Implied, &[4, 4], x::rr);
    t[0x1A] = op("RR D", RegisterDirect, Implied, &[4, 4], x::rr);
    t[0x1B] = op("RR E", RegisterDirect, Implied, &[4, 4], x::rr);
    t[0x1C] = op("RR H", RegisterDirect, Implied, &[4, 4], x::rr);
    t[0x1D] = op("RR L", RegisterDirect, Implied, &[4, 4], x::rr);
    t[0x1E] = op("RR (HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::rr);
    t[0x1F] = op("RR A", RegisterDirect, Implied, &[4, 4], x::rr);
    t[0x20] = op("SLA B", RegisterDirect, Implied, &[4, 4], x::sla);
    t[0x21] = op("SLA C", RegisterDirect, Implied, &[4, 4], x::sla);
    t[0x22] = op("SLA D", RegisterDirect, Implied, &[4, 4], x::sla);
    t[0x23] = op("SLA E", RegisterDirect, Implied, &[4, 4], x::sla);
    t[0x24] = op("SLA H", RegisterDirect, Implied, &[4, 4], x::sla);
    t[0x25] = op("SLA L", RegisterDirect, Implied, &[4, 4], x::sla);
    t[0x26] = op("SLA (HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::sla);
    t[0x27] = op("SLA A", RegisterDirect, Implied, &[4, 4], x::sla);
    t[0x28] = op("SRA B", RegisterDirect, Implied, &[4, 4], x::sra);
    t[0x29] = op("SRA C", RegisterDirect, Implied, &[4, 4], x::sra);
    t[0x2A] = op("SRA D", RegisterDirect, Implied, &[4, 4], x::sra);
    t[0x2B] = op("SRA E", RegisterDirect, Implied, &[4, 4], x::sra);
    t[0x2C] = op("SRA H", RegisterDirect, Implied, &[4, 4], x::sra);
    t[0x2D] = op("SRA L", RegisterDirect, Implied, &[4, 4], x::sra);
    t[0x2E] = op("SRA (HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::sra);
    t[0x2F] = op("SRA A", RegisterDirect, Implied, &[4, 4], x::sra);
    t[0x30] = op("SLL B", RegisterDirect, Implied, &[4, 4], x::sll);
    t[0x31] = op("SLL C", RegisterDirect, Implied, &[4, 4], x::sll);
    t[0x32] = op("SLL D", RegisterDirect, Implied, &[4, 4], x::sll);
    t[0x33] = op("SLL E", RegisterDirect, Implied, &[4, 4], x::sll);
    t[0x34] = op("SLL H", RegisterDirect, Implied, &[4, 4], x::sll);
    t[0x35] = op("SLL L", RegisterDirect, Implied, &[4, 4], x::sll);
    t[0x36] = op("SLL (HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::sll);
    t[0x37] = op("SLL A", RegisterDirect, Implied, &[4, 4], x::sll);
    t[0x38] = op("SRL B", RegisterDirect, Implied, &[4, 4], x::srl);
    t[0x39] = op("SRL C", RegisterDirect, Implied, &[4, 4], x::srl);
    t[0x3A] = op("SRL D", RegisterDirect, Implied, &[4, 4], x::srl);
    t[0x3B] = op("SRL E", RegisterDirect, Implied, &[4, 4], x::srl);
    t[0x3C] = op("SRL H", RegisterDirect, Implied, &[4, 4], x::srl);
    t[0x3D] = op("SRL L", RegisterDirect, Implied, &[4, 4], x::srl);
    t[0x3E] = op("SRL (HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::srl);
    t[0x3F] = op("SRL A", RegisterDirect, Implied, &[4, 4], x::srl);
    t[0x40] = op("BIT 0,B", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x41] = op("BIT 0,C", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x42] = op("BIT 0,D", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x43] = op("BIT 0,E", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x44] = op("BIT 0,H", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x45] = op("BIT 0,L", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x46] = op("BIT 0,(HL)", Implied, RegisterIndirectHl, &[4, 4, 4], x::bit);
    t[0x47] = op("BIT 0,A", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x48] = op("BIT 1,B", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x49] = op("BIT 1,C", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x4A] = op("BIT 1,D", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x4B] = op("BIT 1,E", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x4C] = op("BIT 1,H", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x4D] = op("BIT 1,L", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x4E] = op("BIT 1,(HL)", Implied, RegisterIndirectHl, &[4, 4, 4], x::bit);
    t[0x4F] = op("BIT 1,A", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x50] = op("BIT 2,B", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x51] = op("BIT 2,C", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x52] = op("BIT 2,D", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x53] = op("BIT 2,E", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x54] = op("BIT 2,H", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x55] = op("BIT 2,L", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x56] = op("BIT 2,(HL)", Implied, RegisterIndirectHl, &[4, 4, 4], x::bit);
    t[0x57] = op("BIT 2,A", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x58] = op("BIT 3,B", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x59] = op("BIT 3,C", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x5A] = op("BIT 3,D", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x5B] = op("BIT 3,E", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x5C] = op("BIT 3,H", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x5D] = op("BIT 3,L", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x5E] = op("BIT 3,(HL)", Implied, RegisterIndirectHl, &[4, 4, 4], x::bit);
    t[0x5F] = op("BIT 3,A", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x60] = op("BIT 4,B", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x61] = op("BIT 4,C", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x62] = op("BIT 4,D", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x63] = op("BIT 4,E", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x64] = op("BIT 4,H", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x65] = op("BIT 4,L", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x66] = op("BIT 4,(HL)", Implied, RegisterIndirectHl, &[4, 4, 4], x::bit);
    t[0x67] = op("BIT 4,A", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x68] = op("BIT 5,B", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x69] = op("BIT 5,C", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x6A] = op("BIT 5,D", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x6B] = op("BIT 5,E", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x6C] = op("BIT 5,H", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x6D] = op("BIT 5,L", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x6E] = op("BIT 5,(HL)", Implied, RegisterIndirectHl, &[4, 4, 4], x::bit);
    t[0x6F] = op("BIT 5,A", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x70] = op("BIT 6,B", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x71] = op("BIT 6,C", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x72] = op("BIT 6,D", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x73] = op("BIT 6,E", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x74] = op("BIT 6,H", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x75] = op("BIT 6,L", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x76] = op("BIT 6,(HL)", Implied, RegisterIndirectHl, &[4, 4, 4], x::bit);
    t[0x77] = op("BIT 6,A", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x78] = op("BIT 7,B", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x79] = op("BIT 7,C", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x7A] = op("BIT 7,D", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x7B] = op("BIT 7,E", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x7C] = op("BIT 7,H", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x7D] = op("BIT 7,L", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x7E] = op("BIT 7,(HL)", Implied, RegisterIndirectHl, &[4, 4, 4], x::bit);
    t[0x7F] = op("BIT 7,A", Implied, RegisterDirect, &[4, 4], x::bit);
    t[0x80] = op("RES 0,B", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x81] = op("RES 0,C", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x82] = op("RES 0,D", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x83] = op("RES 0,E", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x84] = op("RES 0,H", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x85] = op("RES 0,L", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x86] = op("RES 0,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::res);
    t[0x87] = op("RES 0,A", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x88] = op("RES 1,B", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x89] = op("RES 1,C", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x8A] = op("RES 1,D", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x8B] = op("RES 1,E", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x8C] = op("RES 1,H", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x8D] = op("RES 1,L", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x8E] = op("RES 1,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::res);
    t[0x8F] = op("RES 1,A", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x90] = op("RES 2,B", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x91] = op("RES 2,C", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x92] = op("RES 2,D", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x93] = op("RES 2,E", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x94] = op("RES 2,H", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x95] = op("RES 2,L", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x96] = op("RES 2,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::res);
    t[0x97] = op("RES 2,A", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x98] = op("RES 3,B", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x99] = op("RES 3,C", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x9A] = op("RES 3,D", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x9B] = op("RES 3,E", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x9C] = op("RES 3,H", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x9D] = op("RES 3,L", RegisterDirect, Implied, &[4, 4], x::res);
    t[0x9E] = op("RES 3,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::res);
    t[0x9F] = op("RES 3,A", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xA0] = op("RES 4,B", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xA1] = op("RES 4,C", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xA2] = op("RES 4,D", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xA3] = op("RES 4,E", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xA4] = op("RES 4,H", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xA5] = op("RES 4,L", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xA6] = op("RES 4,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::res);
    t[0xA7] = op("RES 4,A", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xA8] = op("RES 5,B", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xA9] = op("RES 5,C", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xAA] = op("RES 5,D", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xAB] = op("RES 5,E", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xAC] = op("RES 5,H", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xAD] = op("RES 5,L", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xAE] = op("RES 5,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::res);
    t[0xAF] = op("RES 5,A", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xB0] = op("RES 6,B", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xB1] = op("RES 6,C", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xB2] = op("RES 6,D", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xB3] = op("RES 6,E", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xB4] = op("RES 6,H", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xB5] = op("RES 6,L", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xB6] = op("RES 6,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::res);
    t[0xB7] = op("RES 6,A", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xB8] = op("RES 7,B", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xB9] = op("RES 7,C", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xBA] = op("RES 7,D", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xBB] = op("RES 7,E", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xBC] = op("RES 7,H", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xBD] = op("RES 7,L", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xBE] = op("RES 7,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::res);
    t[0xBF] = op("RES 7,A", RegisterDirect, Implied, &[4, 4], x::res);
    t[0xC0] = op("SET 0,B", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xC1] = op("SET 0,C", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xC2] = op("SET 0,D", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xC3] = op("SET 0,E", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xC4] = op("SET 0,H", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xC5] = op("SET 0,L", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xC6] = op("SET 0,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::set);
    t[0xC7] = op("SET 0,A", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xC8] = op("SET 1,B", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xC9] = op("SET 1,C", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xCA] = op("SET 1,D", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xCB] = op("SET 1,E", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xCC] = op("SET 1,H", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xCD] = op("SET 1,L", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xCE] = op("SET 1,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::set);
    t[0xCF] = op("SET 1,A", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xD0] = op("SET 2,B", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xD1] = op("SET 2,C", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xD2] = op("SET 2,D", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xD3] = op("SET 2,E", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xD4] = op("SET 2,H", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xD5] = op("SET 2,L", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xD6] = op("SET 2,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::set);
    t[0xD7] = op("SET 2,A", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xD8] = op("SET 3,B", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xD9] = op("SET 3,C", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xDA] = op("SET 3,D", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xDB] = op("SET 3,E", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xDC] = op("SET 3,H", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xDD] = op("SET 3,L", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xDE] = op("SET 3,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::set);
    t[0xDF] = op("SET 3,A", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xE0] = op("SET 4,B", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xE1] = op("SET 4,C", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xE2] = op("SET 4,D", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xE3] = op("SET 4,E", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xE4] = op("SET 4,H", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xE5] = op("SET 4,L", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xE6] = op("SET 4,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::set);
    t[0xE7] = op("SET 4,A", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xE8] = op("SET 5,B", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xE9] = op("SET 5,C", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xEA] = op("SET 5,D", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xEB] = op("SET 5,E", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xEC] = op("SET 5,H", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xED] = op("SET 5,L", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xEE] = op("SET 5,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::set);
    t[0xEF] = op("SET 5,A", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xF0] = op("SET 6,B", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xF1] = op("SET 6,C", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xF2] = op("SET 6,D", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xF3] = op("SET 6,E", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xF4] = op("SET 6,H", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xF5] = op("SET 6,L", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xF6] = op("SET 6,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::set);
    t[0xF7] = op("SET 6,A", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xF8] = op("SET 7,B", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xF9] = op("SET 7,C", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xFA] = op("SET 7,D", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xFB] = op("SET 7,E", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xFC] = op("SET 7,H", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xFD] = op("SET 7,L", RegisterDirect, Implied, &[4, 4], x::set);
    t[0xFE] = op("SET 7,(HL)", RegisterIndirectHl, Implied, &[4, 4, 4, 3], x::set);
    t[0xFF] = op("SET 7,A", RegisterDirect, Implied, &[4, 4], x::set);
    t
}
