//! Four-byte DD CB / FD CB opcodes, result-copy variants included.

use super::{Table, op};
use crate::exec as x;
use crate::insn::AddressingMode::{Implied, Indexed};

pub(super) fn build_ddcb() -> Table {
    let mut t: Table = [None; 256];
    t[0x00] = op("RLC (IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x01] = op("RLC (IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x02] = op("RLC (IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x03] = op("RLC (IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x04] = op("RLC (IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x05] = op("RLC (IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x06] = op("RLC (IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x07] = op("RLC (IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x08] = op("RRC (IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x09] = op("RRC (IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x0A] = op("RRC (IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x0B] = op("RRC (IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x0C] = op("RRC (IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x0D] = op("RRC (IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x0E] = op("RRC (IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x0F] = op("RRC (IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x10] = op("RL (IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x11] = op("RL (IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x12] = op("RL (IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x13] = op("RL (IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x14] = op("RL (IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x15] = op("RL (IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x16] = op("RL (IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x17] = op("RL (IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x18] = op("RR (IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x19] = op("RR (IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x1A] = op("RR (IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x1B] = op("RR (IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x1C] = op("RR (IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x1D] = op("RR (IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x1E] = op("RR (IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x1F] = op("RR (IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x20] = op("SLA (IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x21] = op("SLA (IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x22] = op("SLA (IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x23] = op("SLA (IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x24] = op("SLA (IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x25] = op("SLA (IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x26] = op("SLA (IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x27] = op("SLA (IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x28] = op("SRA (IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x29] = op("SRA (IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x2A] = op("SRA (IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x2B] = op("SRA (IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x2C] = op("SRA (IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x2D] = op("SRA (IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x2E] = op("SRA (IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x2F] = op("SRA (IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x30] = op("SLL (IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x31] = op("SLL (IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x32] = op("SLL (IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x33] = op("SLL (IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x34] = op("SLL (IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x35] = op("SLL (IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x36] = op("SLL (IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x37] = op("SLL (IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x38] = op("SRL (IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x39] = op("SRL (IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x3A] = op("SRL (IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x3B] = op("SRL (IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x3C] = op("SRL (IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x3D] = op("SRL (IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x3E] = op("SRL (IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x3F] = op("SRL (IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x40] = op("BIT 0,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x41] = op("BIT 0,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x42] = op("BIT 0,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x43] = op("BIT 0,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x44] = op("BIT 0,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x45] = op("BIT 0,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x46] = op("BIT 0,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x47] = op("BIT 0,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x48] = op("BIT 1,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x49] = op("BIT 1,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x4A] = op("BIT 1,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x4B] = op("BIT 1,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x4C] = op("BIT 1,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x4D] = op("BIT 1,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x4E] = op("BIT 1,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x4F] = op("BIT 1,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x50] = op("BIT 2,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x51] = op("BIT 2,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x52] = op("BIT 2,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x53] = op("BIT 2,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x54] = op("BIT 2,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x55] = op("BIT 2,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x56] = op("BIT 2,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x57] = op("BIT 2,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x58] = op("BIT 3,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x59] = op("BIT 3,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x5A] = op("BIT 3,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x5B] = op("BIT 3,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x5C] = op("BIT 3,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x5D] = op("BIT 3,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x5E] = op("BIT 3,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x5F] = op("BIT 3,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x60] = op("BIT 4,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x61] = op("BIT 4,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x62] = op("BIT 4,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x63] = op("BIT 4,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x64] = op("BIT 4,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x65] = op("BIT 4,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x66] = op("BIT 4,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x67] = op("BIT 4,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x68] = op("BIT 5,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x69] = op("BIT 5,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x6A] = op("BIT 5,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x6B] = op("BIT 5,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x6C] = op("BIT 5,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x6D] = op("BIT 5,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x6E] = op("BIT 5,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x6F] = op("BIT 5,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x70] = op("BIT 6,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x71] = op("BIT 6,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x72] = op("BIT 6,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x73] = op("BIT 6,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x74] = op("BIT 6,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x75] = op("BIT 6,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x76] = op("BIT 6,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x77] = op("BIT 6,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x78] = op("BIT 7,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x79] = op("BIT 7,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x7A] = op("BIT 7,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x7B] = op("BIT 7,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x7C] = op("BIT 7,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x7D] = op("BIT 7,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x7E] = op("BIT 7,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x7F] = op("BIT 7,(IX+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x80] = op("RES 0,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x81] = op("RES 0,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x82] = op("RES 0,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x83] = op("RES 0,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x84] = op("RES 0,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x85] = op("RES 0,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x86] = op("RES 0,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x87] = op("RES 0,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x88] = op("RES 1,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x89] = op("RES 1,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x8A] = op("RES 1,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x8B] = op("RES 1,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x8C] = op("RES 1,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x8D] = op("RES 1,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x8E] = op("RES 1,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x8F] = op("RES 1,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x90] = op("RES 2,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x91] = op("RES 2,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x92] = op("RES 2,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x93] = op("RES 2,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x94] = op("RES 2,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x95] = op("RES 2,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x96] = op("RES 2,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x97] = op("RES 2,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x98] = op("RES 3,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x99] = op("RES 3,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x9A] = op("RES 3,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x9B] = op("RES 3,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x9C] = op("RES 3,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x9D] = op("RES 3,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x9E] = op("RES 3,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x9F] = op("RES 3,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA0] = op("RES 4,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA1] = op("RES 4,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA2] = op("RES 4,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA3] = op("RES 4,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA4] = op("RES 4,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA5] = op("RES 4,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA6] = op("RES 4,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA7] = op("RES 4,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA8] = op("RES 5,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA9] = op("RES 5,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xAA] = op("RES 5,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xAB] = op("RES 5,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xAC] = op("RES 5,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xAD] = op("RES 5,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xAE] = op("RES 5,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xAF] = op("RES 5,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB0] = op("RES 6,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB1] = op("RES 6,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB2] = op("RES 6,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB3] = op("RES 6,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB4] = op("RES 6,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB5] = op("RES 6,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB6] = op("RES 6,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB7] = op("RES 6,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB8] = op("RES 7,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB9] = op("RES 7,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xBA] = op("RES 7,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xBB] = op("RES 7,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xBC] = op("RES 7,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xBD] = op("RES 7,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xBE] = op("RES 7,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xBF] = op("RES 7,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xC0] = op("SET 0,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC1] = op("SET 0,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC2] = op("SET 0,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC3] = op("SET 0,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC4] = op("SET 0,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC5] = op("SET 0,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC6] = op("SET 0,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC7] = op("SET 0,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC8] = op("SET 1,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC9] = op("SET 1,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xCA] = op("SET 1,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xCB] = op("SET 1,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xCC] = op("SET 1,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xCD] = op("SET 1,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xCE] = op("SET 1,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xCF] = op("SET 1,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD0] = op("SET 2,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD1] = op("SET 2,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD2] = op("SET 2,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD3] = op("SET 2,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD4] = op("SET 2,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD5] = op("SET 2,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD6] = op("SET 2,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD7] = op("SET 2,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD8] = op("SET 3,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD9] = op("SET 3,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xDA] = op("SET 3,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xDB] = op("SET 3,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xDC] = op("SET 3,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xDD] = op("SET 3,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xDE] = op("SET 3,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xDF] = op("SET 3,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE0] = op("SET 4,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE1] = op("SET 4,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE2] = op("SET 4,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE3] = op("SET 4,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE4] = op("SET 4,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE5] = op("SET 4,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE6] = op("SET 4,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE7] = op("SET 4,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE8] = op("SET 5,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE9] = op("SET 5,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xEA] = op("SET 5,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xEB] = op("SET 5,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xEC] = op("SET 5,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xED] = op("SET 5,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xEE] = op("SET 5,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xEF] = op("SET 5,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF0] = op("SET 6,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF1] = op("SET 6,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF2] = op("SET 6,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF3] = op("SET 6,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF4] = op("SET 6,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF5] = op("SET 6,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF6] = op("SET 6,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF7] = op("SET 6,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF8] = op("SET 7,(IX+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF9] = op("SET 7,(IX+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xFA] = op("SET 7,(IX+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xFB] = op("SET 7,(IX+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xFC] = op("SET 7,(IX+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xFD] = op("SET 7,(IX+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xFE] = op("SET 7,(IX+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xFF] = op("SET 7,(IX+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t
}

pub(super) fn build_fdcb() -> Table {
    let mut t: Table = [None; 256];
    t[0x00] = op("RLC (IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x01] = op("RLC (IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x02] = op("RLC (IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x03] = op("RLC (IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x04] = op("RLC (IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x05] = op("RLC (IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x06] = op("RLC (IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x07] = op("RLC (IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rlc);
    t[0x08] = op("RRC (IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x09] = op("RRC (IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x0A] = op("RRC (IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x0B] = op("RRC (IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x0C] = op("RRC (IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x0D] = op("RRC (IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x0E] = op("RRC (IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x0F] = op("RRC (IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rrc);
    t[0x10] = op("RL (IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x11] = op("RL (IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x12] = op("RL (IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x13] = op("RL (IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x14] = op("RL (IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x15] = op("RL (IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x16] = op("RL (IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x17] = op("RL (IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rl);
    t[0x18] = op("RR (IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x19] = op("RR (IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x1A] = op("RR (IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x1B] = op("RR (IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x1C] = op("RR (IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x1D] = op("RR (IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x1E] = op("RR (IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x1F] = op("RR (IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::rr);
    t[0x20] = op("SLA (IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x21] = op("SLA (IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x22] = op("SLA (IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x23] = op("SLA (IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x24] = op("SLA (IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x25] = op("SLA (IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x26] = op("SLA (IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x27] = op("SLA (IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sla);
    t[0x28] = op("SRA (IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x29] = op("SRA (IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x2A] = op("SRA (IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x2B] = op("SRA (IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x2C] = op("SRA (IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x2D] = op("SRA (IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x2E] = op("SRA (IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x2F] = op("SRA (IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sra);
    t[0x30] = op("SLL (IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x31] = op("SLL (IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x32] = op("SLL (IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x33] = op("SLL (IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x34] = op("SLL (IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x35] = op("SLL (IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x36] = op("SLL (IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x37] = op("SLL (IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::sll);
    t[0x38] = op("SRL (IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x39] = op("SRL (IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x3A] = op("SRL (IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x3B] = op("SRL (IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x3C] = op("SRL (IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x3D] = op("SRL (IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x3E] = op("SRL (IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x3F] = op("SRL (IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::srl);
    t[0x40] = op("BIT 0,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x41] = op("BIT 0,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x42] = op("BIT 0,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x43] = op("BIT 0,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x44] = op("BIT 0,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x45] = op("BIT 0,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x46] = op("BIT 0,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x47] = op("BIT 0,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x48] = op("BIT 1,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x49] = op("BIT 1,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x4A] = op("BIT 1,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x4B] = op("BIT 1,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x4C] = op("BIT 1,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x4D] = op("BIT 1,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x4E] = op("BIT 1,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x4F] = op("BIT 1,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x50] = op("BIT 2,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x51] = op("BIT 2,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x52] = op("BIT 2,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x53] = op("BIT 2,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x54] = op("BIT 2,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x55] = op("BIT 2,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x56] = op("BIT 2,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x57] = op("BIT 2,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x58] = op("BIT 3,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x59] = op("BIT 3,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x5A] = op("BIT 3,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x5B] = op("BIT 3,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x5C] = op("BIT 3,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x5D] = op("BIT 3,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x5E] = op("BIT 3,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x5F] = op("BIT 3,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x60] = op("BIT 4,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x61] = op("BIT 4,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x62] = op("BIT 4,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x63] = op("BIT 4,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x64] = op("BIT 4,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x65] = op("BIT 4,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x66] = op("BIT 4,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x67] = op("BIT 4,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x68] = op("BIT 5,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x69] = op("BIT 5,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x6A] = op("BIT 5,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x6B] = op("BIT 5,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x6C] = op("BIT 5,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x6D] = op("BIT 5,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x6E] = op("BIT 5,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x6F] = op("BIT 5,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x70] = op("BIT 6,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x71] = op("BIT 6,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x72] = op("BIT 6,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x73] = op("BIT 6,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x74] = op("BIT 6,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x75] = op("BIT 6,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x76] = op("BIT 6,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x77] = op("BIT 6,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x78] = op("BIT 7,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x79] = op("BIT 7,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x7A] = op("BIT 7,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x7B] = op("BIT 7,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x7C] = op("BIT 7,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x7D] = op("BIT 7,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x7E] = op("BIT 7,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x7F] = op("BIT 7,(IY+d)", Implied, Indexed, &[4, 4, 3, 5, 4], x::bit);
    t[0x80] = op("RES 0,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x81] = op("RES 0,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x82] = op("RES 0,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x83] = op("RES 0,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x84] = op("RES 0,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x85] = op("RES 0,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x86] = op("RES 0,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x87] = op("RES 0,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x88] = op("RES 1,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x89] = op("RES 1,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x8A] = op("RES 1,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x8B] = op("RES 1,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x8C] = op("RES 1,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x8D] = op("RES 1,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x8E] = op("RES 1,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x8F] = op("RES 1,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x90] = op("RES 2,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x91] = op("RES 2,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x92] = op("RES 2,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x93] = op("RES 2,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x94] = op("RES 2,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x95] = op("RES 2,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x96] = op("RES 2,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x97] = op("RES 2,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x98] = op("RES 3,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x99] = op("RES 3,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x9A] = op("RES 3,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x9B] = op("RES 3,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x9C] = op("RES 3,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x9D] = op("RES 3,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x9E] = op("RES 3,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0x9F] = op("RES 3,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA0] = op("RES 4,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA1] = op("RES 4,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA2] = op("RES 4,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA3] = op("RES 4,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA4] = op("RES 4,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA5] = op("RES 4,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA6] = op("RES 4,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA7] = op("RES 4,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA8] = op("RES 5,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xA9] = op("RES 5,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xAA] = op("RES 5,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xAB] = op("RES 5,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xAC] = op("RES 5,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xAD] = op("RES 5,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xAE] = op("RES 5,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xAF] = op("RES 5,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB0] = op("RES 6,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB1] = op("RES 6,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB2] = op("RES 6,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB3] = op("RES 6,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB4] = op("RES 6,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB5] = op("RES 6,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB6] = op("RES 6,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB7] = op("RES 6,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB8] = op("RES 7,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xB9] = op("RES 7,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xBA] = op("RES 7,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xBB] = op("RES 7,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xBC] = op("RES 7,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xBD] = op("RES 7,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xBE] = op("RES 7,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xBF] = op("RES 7,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::res);
    t[0xC0] = op("SET 0,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC1] = op("SET 0,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC2] = op("SET 0,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC3] = op("SET 0,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC4] = op("SET 0,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC5] = op("SET 0,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC6] = op("SET 0,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC7] = op("SET 0,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC8] = op("SET 1,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xC9] = op("SET 1,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xCA] = op("SET 1,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xCB] = op("SET 1,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xCC] = op("SET 1,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xCD] = op("SET 1,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xCE] = op("SET 1,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xCF] = op("SET 1,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD0] = op("SET 2,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD1] = op("SET 2,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD2] = op("SET 2,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD3] = op("SET 2,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD4] = op("SET 2,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD5] = op("SET 2,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD6] = op("SET 2,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD7] = op("SET 2,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD8] = op("SET 3,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xD9] = op("SET 3,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xDA] = op("SET 3,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xDB] = op("SET 3,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xDC] = op("SET 3,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xDD] = op("SET 3,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xDE] = op("SET 3,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xDF] = op("SET 3,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE0] = op("SET 4,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE1] = op("SET 4,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE2] = op("SET 4,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE3] = op("SET 4,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE4] = op("SET 4,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE5] = op("SET 4,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE6] = op("SET 4,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE7] = op("SET 4,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE8] = op("SET 5,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xE9] = op("SET 5,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xEA] = op("SET 5,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xEB] = op("SET 5,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xEC] = op("SET 5,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xED] = op("SET 5,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xEE] = op("SET 5,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xEF] = op("SET 5,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF0] = op("SET 6,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF1] = op("SET 6,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF2] = op("SET 6,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF3] = op("SET 6,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF4] = op("SET 6,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF5] = op("SET 6,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF6] = op("SET 6,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF7] = op("SET 6,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF8] = op("SET 7,(IY+d),B", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xF9] = op("SET 7,(IY+d),C", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xFA] = op("SET 7,(IY+d),D", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xFB] = op("SET 7,(IY+d),E", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xFC] = op("SET 7,(IY+d),H", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xFD] = op("SET 7,(IY+d),L", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xFE] = op("SET 7,(IY+d)", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t[0xFF] = op("SET 7,(IY+d),A", Indexed, Implied, &[4, 4, 3, 5, 4, 3], x::set);
    t
}
