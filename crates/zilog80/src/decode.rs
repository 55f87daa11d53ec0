//! Prefix recognition, shared by execution, disassembly and cost peeking.

/// Decode table an opcode belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Unprefixed.
    Root,
    /// `CB` bit/rotate instructions.
    Cb,
    /// `DD` IX-relative instructions.
    Dd,
    /// `ED` extended instructions.
    Ed,
    /// `FD` IY-relative instructions.
    Fd,
    /// `DD CB d op` indexed bit instructions.
    DdCb,
    /// `FD CB d op` indexed bit instructions.
    FdCb,
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Root => "root",
            Self::Cb => "CB",
            Self::Dd => "DD",
            Self::Ed => "ED",
            Self::Fd => "FD",
            Self::DdCb => "DDCB",
            Self::FdCb => "FDCB",
        };
        f.write_str(name)
    }
}

/// Result of scanning the prefix bytes at one address.
///
/// `len` covers the prefix bytes, the final opcode and (for the four-byte
/// indexed bit forms) the displacement wedged between `CB` and the opcode.
/// Operand bytes of other modes are not included; their resolvers consume
/// them.
#[derive(Debug, Clone, Copy)]
pub struct Decoded {
    pub context: Context,
    pub opcode: u8,
    pub displacement: Option<i8>,
    pub len: u16,
}

/// Scan prefixes starting at `addr`. `read` is called once per byte
/// examined, in address order.
pub fn decode(mut read: impl FnMut(u16) -> u8, addr: u16) -> Decoded {
    let first = read(addr);
    match first {
        0xCB => Decoded {
            context: Context::Cb,
            opcode: read(addr.wrapping_add(1)),
            displacement: None,
            len: 2,
        },
        0xED => Decoded {
            context: Context::Ed,
            opcode: read(addr.wrapping_add(1)),
            displacement: None,
            len: 2,
        },
        0xDD | 0xFD => {
            let second = read(addr.wrapping_add(1));
            if second == 0xCB {
                // Four-byte form: prefix, CB, displacement, opcode.
                let displacement = read(addr.wrapping_add(2)) as i8;
                let opcode = read(addr.wrapping_add(3));
                Decoded {
                    context: if first == 0xDD { Context::DdCb } else { Context::FdCb },
                    opcode,
                    displacement: Some(displacement),
                    len: 4,
                }
            } else {
                Decoded {
                    context: if first == 0xDD { Context::Dd } else { Context::Fd },
                    opcode: second,
                    displacement: None,
                    len: 2,
                }
            }
        }
        _ => Decoded {
            context: Context::Root,
            opcode: first,
            displacement: None,
            len: 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_bytes(bytes: &[u8]) -> Decoded {
        decode(|a| bytes[a as usize], 0)
    }

    #[test]
    fn unprefixed_is_root() {
        let d = decode_bytes(&[0x3E, 0x12]);
        assert_eq!(d.context, Context::Root);
        assert_eq!(d.opcode, 0x3E);
        assert_eq!(d.len, 1);
    }

    #[test]
    fn four_byte_indexed_bit_form() {
        let d = decode_bytes(&[0xDD, 0xCB, 0xFE, 0x46]);
        assert_eq!(d.context, Context::DdCb);
        assert_eq!(d.opcode, 0x46);
        assert_eq!(d.displacement, Some(-2));
        assert_eq!(d.len, 4);
    }

    #[test]
    fn fd_without_cb_is_two_bytes() {
        let d = decode_bytes(&[0xFD, 0x21, 0x00, 0x80]);
        assert_eq!(d.context, Context::Fd);
        assert_eq!(d.opcode, 0x21);
        assert_eq!(d.len, 2);
    }
}
