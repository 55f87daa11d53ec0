//! Arithmetic and logic primitives shared by the instruction handlers.
//!
//! Every function is pure: it takes operand bytes (plus carry where the
//! operation consumes it) and returns the result together with a complete
//! flag byte. Handlers that merge flags differently (`CP`, `ADD HL,ss`)
//! post-process the returned flags.

use crate::flags::{self, CF, HF, NF, PF, SF, UF, XF, ZF};

/// An 8-bit result and the flag byte it produces.
#[derive(Debug, Clone, Copy)]
pub struct AluResult {
    pub value: u8,
    pub flags: u8,
}

/// A 16-bit result and the flag byte it produces.
#[derive(Debug, Clone, Copy)]
pub struct AluResult16 {
    pub value: u16,
    pub flags: u8,
}

#[must_use]
pub fn add8(a: u8, b: u8, carry: bool) -> AluResult {
    let c = u8::from(carry);
    let wide = u16::from(a) + u16::from(b) + u16::from(c);
    let value = wide as u8;
    let mut f = flags::sz53(value);
    if (a & 0x0F) + (b & 0x0F) + c > 0x0F {
        f |= HF;
    }
    if (a ^ b) & 0x80 == 0 && (a ^ value) & 0x80 != 0 {
        f |= PF;
    }
    if wide > 0xFF {
        f |= CF;
    }
    AluResult { value, flags: f }
}

#[must_use]
pub fn sub8(a: u8, b: u8, carry: bool) -> AluResult {
    let c = u8::from(carry);
    let wide = u16::from(a).wrapping_sub(u16::from(b)).wrapping_sub(u16::from(c));
    let value = wide as u8;
    let mut f = flags::sz53(value) | NF;
    if (a & 0x0F) < (b & 0x0F) + c {
        f |= HF;
    }
    if (a ^ b) & 0x80 != 0 && (a ^ value) & 0x80 != 0 {
        f |= PF;
    }
    if wide > 0xFF {
        f |= CF;
    }
    AluResult { value, flags: f }
}

/// `AND` sets half-carry; the other logical operations clear it.
#[must_use]
pub fn and8(a: u8, b: u8) -> AluResult {
    let value = a & b;
    AluResult { value, flags: flags::sz53p(value) | HF }
}

#[must_use]
pub fn xor8(a: u8, b: u8) -> AluResult {
    let value = a ^ b;
    AluResult { value, flags: flags::sz53p(value) }
}

#[must_use]
pub fn or8(a: u8, b: u8) -> AluResult {
    let value = a | b;
    AluResult { value, flags: flags::sz53p(value) }
}

/// `INC r`: carry is not affected, the caller keeps the old `CF`.
#[must_use]
pub fn inc8(value: u8) -> AluResult {
    let result = value.wrapping_add(1);
    let mut f = flags::sz53(result);
    if value & 0x0F == 0x0F {
        f |= HF;
    }
    if value == 0x7F {
        f |= PF;
    }
    AluResult { value: result, flags: f }
}

/// `DEC r`: carry is not affected, the caller keeps the old `CF`.
#[must_use]
pub fn dec8(value: u8) -> AluResult {
    let result = value.wrapping_sub(1);
    let mut f = flags::sz53(result) | NF;
    if value & 0x0F == 0 {
        f |= HF;
    }
    if value == 0x80 {
        f |= PF;
    }
    AluResult { value: result, flags: f }
}

/// `ADD HL,ss` family: only H, C, N and the undocumented flags change.
/// The returned flag byte contains just those; the caller merges in the
/// preserved S, Z and P/V bits.
#[must_use]
pub fn add16(a: u16, b: u16) -> AluResult16 {
    let wide = u32::from(a) + u32::from(b);
    let value = wide as u16;
    let mut f = (value >> 8) as u8 & (UF | XF);
    if (a & 0x0FFF) + (b & 0x0FFF) > 0x0FFF {
        f |= HF;
    }
    if wide > 0xFFFF {
        f |= CF;
    }
    AluResult16 { value, flags: f }
}

/// `ADC HL,ss`: full 16-bit add with complete flags. Sign, zero and
/// overflow come from the 16-bit result; X and U from its high byte.
#[must_use]
pub fn adc16(a: u16, b: u16, carry: bool) -> AluResult16 {
    let c = u32::from(carry);
    let wide = u32::from(a) + u32::from(b) + c;
    let value = wide as u16;
    let mut f = (value >> 8) as u8 & (SF | UF | XF);
    if value == 0 {
        f |= ZF;
    }
    if u32::from(a & 0x0FFF) + u32::from(b & 0x0FFF) + c > 0x0FFF {
        f |= HF;
    }
    if (a ^ b) & 0x8000 == 0 && (a ^ value) & 0x8000 != 0 {
        f |= PF;
    }
    if wide > 0xFFFF {
        f |= CF;
    }
    AluResult16 { value, flags: f }
}

/// `SBC HL,ss`: full 16-bit subtract with complete flags.
#[must_use]
pub fn sbc16(a: u16, b: u16, carry: bool) -> AluResult16 {
    let c = u32::from(carry);
    let wide = u32::from(a).wrapping_sub(u32::from(b)).wrapping_sub(c);
    let value = wide as u16;
    let mut f = ((value >> 8) as u8 & (SF | UF | XF)) | NF;
    if value == 0 {
        f |= ZF;
    }
    if u32::from(a & 0x0FFF) < u32::from(b & 0x0FFF) + c {
        f |= HF;
    }
    if (a ^ b) & 0x8000 != 0 && (a ^ value) & 0x8000 != 0 {
        f |= PF;
    }
    if wide > 0xFFFF {
        f |= CF;
    }
    AluResult16 { value, flags: f }
}

/// Decimal adjust after a BCD add or subtract.
///
/// The correction is derived from H, C and the nibble values; half-carry
/// of the adjusted result is bit 4 of `a XOR result`.
#[must_use]
pub fn daa(a: u8, f: u8) -> AluResult {
    let mut correction = 0u8;
    let mut carry = f & CF != 0;
    if f & HF != 0 || a & 0x0F > 0x09 {
        correction |= 0x06;
    }
    if carry || a > 0x99 {
        correction |= 0x60;
        carry = true;
    }
    let value = if f & NF != 0 {
        a.wrapping_sub(correction)
    } else {
        a.wrapping_add(correction)
    };
    let mut result_flags = flags::sz53p(value) | (f & NF) | ((a ^ value) & HF);
    if carry {
        result_flags |= CF;
    }
    AluResult { value, flags: result_flags }
}

#[must_use]
pub fn rlc8(value: u8) -> AluResult {
    let result = value.rotate_left(1);
    AluResult {
        value: result,
        flags: flags::sz53p(result) | ((value >> 7) & CF),
    }
}

#[must_use]
pub fn rrc8(value: u8) -> AluResult {
    let result = value.rotate_right(1);
    AluResult {
        value: result,
        flags: flags::sz53p(result) | (value & CF),
    }
}

#[must_use]
pub fn rl8(value: u8, carry: bool) -> AluResult {
    let result = value << 1 | u8::from(carry);
    AluResult {
        value: result,
        flags: flags::sz53p(result) | ((value >> 7) & CF),
    }
}

#[must_use]
pub fn rr8(value: u8, carry: bool) -> AluResult {
    let result = value >> 1 | (u8::from(carry) << 7);
    AluResult {
        value: result,
        flags: flags::sz53p(result) | (value & CF),
    }
}

#[must_use]
pub fn sla8(value: u8) -> AluResult {
    let result = value << 1;
    AluResult {
        value: result,
        flags: flags::sz53p(result) | ((value >> 7) & CF),
    }
}

/// Arithmetic right shift: bit 7 is preserved.
#[must_use]
pub fn sra8(value: u8) -> AluResult {
    let result = value >> 1 | (value & 0x80);
    AluResult {
        value: result,
        flags: flags::sz53p(result) | (value & CF),
    }
}

/// Undocumented shift-left-logical: like `SLA` but shifts a 1 into bit 0.
#[must_use]
pub fn sll8(value: u8) -> AluResult {
    let result = value << 1 | 1;
    AluResult {
        value: result,
        flags: flags::sz53p(result) | ((value >> 7) & CF),
    }
}

#[must_use]
pub fn srl8(value: u8) -> AluResult {
    let result = value >> 1;
    AluResult {
        value: result,
        flags: flags::sz53p(result) | (value & CF),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_overflow_sets_pv() {
        let r = add8(0x7F, 0x01, false);
        assert_eq!(r.value, 0x80);
        assert_ne!(r.flags & PF, 0);
        assert_ne!(r.flags & SF, 0);
        assert_ne!(r.flags & HF, 0);
        assert_eq!(r.flags & CF, 0);
    }

    #[test]
    fn sub_borrow_sets_carry() {
        let r = sub8(0x06, 0x0C, false);
        assert_eq!(r.value, 0xFA);
        assert_ne!(r.flags & CF, 0);
        assert_ne!(r.flags & HF, 0);
        assert_ne!(r.flags & NF, 0);
        assert_ne!(r.flags & SF, 0);
    }

    #[test]
    fn daa_adjusts_bcd_add() {
        // 0x15 + 0x27 = 0x3C, adjusted to 0x42
        let sum = add8(0x15, 0x27, false);
        let r = daa(sum.value, sum.flags);
        assert_eq!(r.value, 0x42);
        assert_eq!(r.flags & CF, 0);
    }

    #[test]
    fn sixteen_bit_add_keeps_low_flags_only() {
        let r = add16(0x0FFF, 0x0001);
        assert_eq!(r.value, 0x1000);
        assert_ne!(r.flags & HF, 0);
        assert_eq!(r.flags & (SF | ZF | PF), 0);
    }

    #[test]
    fn sll_inserts_one() {
        let r = sll8(0x80);
        assert_eq!(r.value, 0x01);
        assert_ne!(r.flags & CF, 0);
    }
}
