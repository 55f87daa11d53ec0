//! Flag register bits and shared flag-computation helpers.
//!
//! Bit 3 (`XF`) and bit 5 (`UF`) are the undocumented flags: almost every
//! instruction copies bits 3 and 5 of some byte into them, usually the
//! result, but `CP` uses the operand and `BIT`/block instructions have
//! their own rules.

/// Carry.
pub const CF: u8 = 0x01;
/// Add/subtract (set by subtraction-type operations, used by `DAA`).
pub const NF: u8 = 0x02;
/// Parity/overflow.
pub const PF: u8 = 0x04;
/// Undocumented copy of bit 3.
pub const XF: u8 = 0x08;
/// Half-carry (bit 3 → bit 4 carry, used by `DAA`).
pub const HF: u8 = 0x10;
/// Undocumented copy of bit 5.
pub const UF: u8 = 0x20;
/// Zero.
pub const ZF: u8 = 0x40;
/// Sign (bit 7 of the result).
pub const SF: u8 = 0x80;

/// `PF` if `value` has an even number of set bits.
#[must_use]
pub fn parity(value: u8) -> u8 {
    if value.count_ones() % 2 == 0 { PF } else { 0 }
}

/// Sign, zero and the two undocumented flags of `value`.
#[must_use]
pub fn sz53(value: u8) -> u8 {
    let mut flags = value & (SF | UF | XF);
    if value == 0 {
        flags |= ZF;
    }
    flags
}

/// [`sz53`] plus parity — the standard flag set of the logical operations.
#[must_use]
pub fn sz53p(value: u8) -> u8 {
    sz53(value) | parity(value)
}
