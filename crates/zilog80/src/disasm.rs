//! Disassembler and opcode supportability queries.
//!
//! Both walk the same decode tables the engine executes from, so they can
//! never drift from what the CPU actually does.

use emu_bus::Bus;

use crate::decode::{self, Context};
use crate::error::Error;
use crate::insn::AddressingMode;
use crate::tables::tables;

/// Whether a hex opcode sequence decodes to a supported instruction.
///
/// Accepts 2, 4 or 8 hex digits (8 for the `DD CB d op` forms, where the
/// displacement digits are don't-care). Anything else — wrong length, odd
/// digits, not hex — is simply unsupported.
#[must_use]
pub fn is_opcode_supported(code: &str) -> bool {
    let Some(bytes) = parse_hex(code) else {
        return false;
    };
    let t = tables();
    match bytes.as_slice() {
        [opcode] => t.lookup(Context::Root, *opcode).is_some(),
        [0xCB, opcode] => t.lookup(Context::Cb, *opcode).is_some(),
        [0xED, opcode] => t.lookup(Context::Ed, *opcode).is_some(),
        [0xDD, 0xCB, _, opcode] => t.lookup(Context::DdCb, *opcode).is_some(),
        [0xFD, 0xCB, _, opcode] => t.lookup(Context::FdCb, *opcode).is_some(),
        [0xDD, opcode] => t.lookup(Context::Dd, *opcode).is_some(),
        [0xFD, opcode] => t.lookup(Context::Fd, *opcode).is_some(),
        _ => false,
    }
}

fn parse_hex(code: &str) -> Option<Vec<u8>> {
    if code.is_empty() || code.len() % 2 != 0 || code.len() > 8 {
        return None;
    }
    (0..code.len())
        .step_by(2)
        .map(|i| code.get(i..i + 2).and_then(|pair| u8::from_str_radix(pair, 16).ok()))
        .collect()
}

pub(crate) fn disassemble(
    bus: &mut dyn Bus,
    start: u16,
    end: u16,
) -> Result<Vec<(u16, String)>, Error> {
    if end < start {
        return Err(Error::MalformedRange { start, end });
    }
    let mut listing = Vec::new();
    // A u32 cursor so an instruction overshooting 0xFFFF terminates the
    // walk instead of wrapping back into the range.
    let mut addr = u32::from(start);
    while addr <= u32::from(end) {
        let (text, len) = disassemble_one(bus, addr as u16)?;
        listing.push((addr as u16, text));
        addr += u32::from(len);
    }
    Ok(listing)
}

fn disassemble_one(bus: &mut dyn Bus, addr: u16) -> Result<(String, u16), Error> {
    let decoded = decode::decode(|a| bus.read(a, true), addr);
    let Some(insn) = tables().lookup(decoded.context, decoded.opcode) else {
        return Err(Error::UnsupportedOpcode {
            context: decoded.context,
            opcode: decoded.opcode,
        });
    };

    let mut len = decoded.len;
    let mut displacement = decoded.displacement;
    let mut imm8 = None;
    let mut imm16 = None;
    let mut signed = false;
    for mode in [insn.dst, insn.src] {
        match mode {
            AddressingMode::Immediate8 | AddressingMode::ImmediateSigned => {
                imm8 = Some(bus.read(addr.wrapping_add(len), true));
                signed = mode == AddressingMode::ImmediateSigned;
                len += 1;
            }
            AddressingMode::Immediate16 => {
                let lo = bus.read(addr.wrapping_add(len), true);
                let hi = bus.read(addr.wrapping_add(len + 1), true);
                imm16 = Some(u16::from(hi) << 8 | u16::from(lo));
                len += 2;
            }
            AddressingMode::Indexed => {
                if displacement.is_none() {
                    displacement = Some(bus.read(addr.wrapping_add(len), true) as i8);
                    len += 1;
                }
            }
            _ => {}
        }
    }

    Ok((render(insn.mnemonic, imm8, imm16, displacement, signed, len), len))
}

/// Substitute the operand placeholders. Placeholders are the only
/// lowercase characters in a template, so plain text replacement is
/// unambiguous; `nn` goes first so a lone `n` never matches inside it.
fn render(
    template: &str,
    imm8: Option<u8>,
    imm16: Option<u16>,
    displacement: Option<i8>,
    signed: bool,
    len: u16,
) -> String {
    let mut text = template.to_string();
    if let Some(nn) = imm16 {
        text = text.replace("nn", &format!("&{nn:04X}"));
    }
    if let Some(d) = displacement {
        text = text.replace("+d", &format!("{d:+}"));
    }
    if let Some(n) = imm8 {
        if signed {
            // Relative target, expressed from the instruction start.
            let target = i32::from(n as i8) + i32::from(len);
            text = text.replace('e', &format!("${target:+}"));
        } else {
            text = text.replace('n', &format!("&{n:02X}"));
        }
    }
    text
}
