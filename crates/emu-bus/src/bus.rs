//! Memory and I/O bus interface.

use std::collections::HashMap;

/// Memory and I/O bus interface.
///
/// The CPU is the only component that drives this bus; the implementation
/// handles address decoding and routing to the appropriate device. Access is
/// single-threaded by design — a multi-threaded embedding must serialize all
/// CPU/bus calls externally.
pub trait Bus {
    /// Read a byte from the given address.
    ///
    /// `is_refresh_probe` is true for side-effect-free reads (disassembly,
    /// cost peeking, refresh probes). Implementations backing read-sensitive
    /// hardware should suppress side effects when it is set; plain RAM can
    /// ignore it.
    fn read(&mut self, address: u16, is_refresh_probe: bool) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);

    /// Read a byte from the given I/O port.
    fn read_port(&mut self, port: u16) -> u8;

    /// Write a byte to the given I/O port.
    fn write_port(&mut self, port: u16, value: u8);

    /// Level of the maskable interrupt line, sampled between instructions.
    fn interrupt_line(&self) -> bool {
        false
    }

    /// Level of the non-maskable interrupt line, sampled between
    /// instructions. The CPU reacts to the rising edge only.
    fn nmi_line(&self) -> bool {
        false
    }
}

/// Flat 64KB RAM bus with an I/O-port override table.
///
/// The standard test double: all memory is RAM, port reads come from a
/// preloaded map (defaulting to 0xFF, matching a floating data bus), and
/// port writes are recorded for inspection.
pub struct SimpleBus {
    ram: Box<[u8; 65536]>,
    port_reads: HashMap<u16, u8>,
    port_writes: Vec<(u16, u8)>,
    int_line: bool,
    nmi_line: bool,
}

impl SimpleBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; 65536]),
            port_reads: HashMap::new(),
            port_writes: Vec::new(),
            int_line: false,
            nmi_line: false,
        }
    }

    /// Copy `data` into RAM starting at `address`, wrapping at 64KB.
    pub fn load(&mut self, address: u16, data: &[u8]) {
        for (i, &byte) in data.iter().enumerate() {
            let addr = address.wrapping_add(i as u16);
            self.ram[addr as usize] = byte;
        }
    }

    /// Read RAM without going through the bus interface.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.ram[address as usize]
    }

    /// Preload the value an `IN` from `port` will see.
    pub fn set_port_read(&mut self, port: u16, value: u8) {
        self.port_reads.insert(port, value);
    }

    /// Values written by `OUT` instructions, in order.
    #[must_use]
    pub fn port_writes(&self) -> &[(u16, u8)] {
        &self.port_writes
    }

    pub fn set_interrupt_line(&mut self, level: bool) {
        self.int_line = level;
    }

    pub fn set_nmi_line(&mut self, level: bool) {
        self.nmi_line = level;
    }
}

impl Default for SimpleBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for SimpleBus {
    fn read(&mut self, address: u16, _is_refresh_probe: bool) -> u8 {
        self.ram[address as usize]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.ram[address as usize] = value;
    }

    fn read_port(&mut self, port: u16) -> u8 {
        self.port_reads.get(&port).copied().unwrap_or(0xFF)
    }

    fn write_port(&mut self, port: u16, value: u8) {
        self.port_writes.push((port, value));
    }

    fn interrupt_line(&self) -> bool {
        self.int_line
    }

    fn nmi_line(&self) -> bool {
        self.nmi_line
    }
}
