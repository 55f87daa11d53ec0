//! The CPU proper: fetch-decode-execute engine and tick/step scheduler.

use emu_bus::{Bus, Ticks};

use crate::decode;
use crate::error::Error;
use crate::exec::Ctx;
use crate::registers::{InterruptMode, Registers};
use crate::tables::tables;

/// A Z80 core driving a host-supplied bus.
///
/// Execution is instruction-atomic: the whole instruction runs at the
/// first tick of its boundary, and the remaining T-states of its cost are
/// burned one per tick. Observable state is therefore exact at
/// instruction boundaries and the clock is exact at every tick.
pub struct Z80<B: Bus> {
    pub regs: Registers,
    bus: Option<B>,
    /// T-states left until the next instruction boundary.
    pending: u32,
    total: Ticks,
    /// Previous NMI line level, for edge detection.
    nmi_seen: bool,
}

impl<B: Bus> Z80<B> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: Registers::new(),
            bus: None,
            pending: 0,
            total: Ticks::ZERO,
            nmi_seen: false,
        }
    }

    pub fn connect_bus(&mut self, bus: B) {
        self.bus = Some(bus);
    }

    pub fn bus(&self) -> Option<&B> {
        self.bus.as_ref()
    }

    pub fn bus_mut(&mut self) -> Option<&mut B> {
        self.bus.as_mut()
    }

    /// Total T-states elapsed since construction.
    #[must_use]
    pub fn total_ticks(&self) -> Ticks {
        self.total
    }

    /// Reset the CPU. Any in-flight instruction cost is abandoned; the
    /// elapsed-tick counter keeps counting.
    pub fn reset(&mut self, hard: bool) {
        self.regs.reset(hard);
        self.pending = 0;
        self.nmi_seen = false;
    }

    /// Advance the clock by one T-state.
    ///
    /// At an instruction boundary this samples the interrupt lines and
    /// then executes a whole instruction (or accepts an interrupt, or
    /// idles if halted), loading the remaining cost into the counter.
    pub fn tick(&mut self) -> Result<(), Error> {
        if self.pending > 0 {
            self.pending -= 1;
        } else {
            let cost = self.boundary()?;
            self.pending = cost - 1;
        }
        self.total += Ticks::new(1);
        Ok(())
    }

    /// Run exactly one instruction: drain any in-flight cost, execute,
    /// drain the new cost. Returns the number of T-states consumed.
    pub fn step(&mut self) -> Result<u32, Error> {
        let mut spent = 0;
        while self.pending > 0 {
            self.tick()?;
            spent += 1;
        }
        self.tick()?;
        spent += 1;
        while self.pending > 0 {
            self.tick()?;
            spent += 1;
        }
        Ok(spent)
    }

    /// Disassemble `[start, end]`. The final instruction may extend past
    /// `end`. Reads are side-effect-free probes.
    pub fn disassemble(&mut self, start: u16, end: u16) -> Result<Vec<(u16, String)>, Error> {
        let Some(bus) = self.bus.as_mut() else {
            return Err(Error::BusNotConnected);
        };
        crate::disasm::disassemble(bus, start, end)
    }

    fn boundary(&mut self) -> Result<u32, Error> {
        let Self { regs, bus, nmi_seen, .. } = self;
        let Some(bus) = bus.as_mut() else {
            return Err(Error::BusNotConnected);
        };
        let bus: &mut dyn Bus = bus;

        let nmi_level = bus.nmi_line();
        let nmi_edge = nmi_level && !*nmi_seen;
        *nmi_seen = nmi_level;
        if nmi_edge {
            regs.halted = false;
            regs.iff2 = regs.iff1;
            regs.iff1 = false;
            push_pc(regs, bus);
            regs.pc = 0x0066;
            regs.wz = 0x0066;
            return Ok(11);
        }

        // EI defers acceptance until after the following instruction.
        let ei_delay = regs.ei_pending;
        regs.ei_pending = false;
        if bus.interrupt_line() && regs.iff1 && !ei_delay {
            regs.halted = false;
            return Ok(accept_interrupt(regs, bus));
        }

        if regs.halted {
            // Idle M1 cycle until an interrupt wakes us.
            return Ok(4);
        }

        execute(regs, bus)
    }
}

impl<B: Bus> Default for Z80<B> {
    fn default() -> Self {
        Self::new()
    }
}

fn execute(regs: &mut Registers, bus: &mut dyn Bus) -> Result<u32, Error> {
    let start = regs.pc;
    let decoded = decode::decode(|a| bus.read(a, false), start);
    let Some(insn) = tables().lookup(decoded.context, decoded.opcode) else {
        // PC is left at the offending instruction.
        return Err(Error::UnsupportedOpcode {
            context: decoded.context,
            opcode: decoded.opcode,
        });
    };
    regs.pc = start.wrapping_add(decoded.len);

    let q_prev = regs.q;
    regs.q = 0;
    let mut cx = Ctx::new(regs, bus, decoded.context, decoded.opcode, q_prev);
    cx.resolve_operands(insn.dst, insn.src, decoded.displacement);
    let extra = (insn.handler)(&mut cx);
    Ok(insn.base_tstates() + u32::from(extra))
}

fn accept_interrupt(regs: &mut Registers, bus: &mut dyn Bus) -> u32 {
    regs.iff1 = false;
    regs.iff2 = false;
    match regs.im {
        // Mode 0 assumes the device supplies RST 38, like mode 1.
        InterruptMode::Mode0 | InterruptMode::Mode1 => {
            push_pc(regs, bus);
            regs.pc = 0x0038;
            regs.wz = 0x0038;
            13
        }
        InterruptMode::Mode2 => {
            push_pc(regs, bus);
            let pointer = u16::from(regs.i) << 8 | 0x00FF;
            let lo = bus.read(pointer, false);
            let hi = bus.read(pointer.wrapping_add(1), false);
            regs.pc = u16::from(hi) << 8 | u16::from(lo);
            regs.wz = regs.pc;
            19
        }
    }
}

fn push_pc(regs: &mut Registers, bus: &mut dyn Bus) {
    regs.sp = regs.sp.wrapping_sub(1);
    bus.write(regs.sp, (regs.pc >> 8) as u8);
    regs.sp = regs.sp.wrapping_sub(1);
    bus.write(regs.sp, regs.pc as u8);
}
