//! CPU register file.

/// Interrupt response mode selected by the `IM` instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterruptMode {
    /// Mode 0: execute an instruction supplied on the data bus. Handled
    /// identically to mode 1 here, on the assumption that the device
    /// places `RST 38` on the bus.
    #[default]
    Mode0,
    /// Mode 1: jump to the fixed vector 0x0038.
    Mode1,
    /// Mode 2: vectored, table pointer formed from the `I` register.
    Mode2,
}

impl InterruptMode {
    #[must_use]
    pub fn from_bits(value: u8) -> Self {
        match value {
            1 => Self::Mode1,
            2 => Self::Mode2,
            _ => Self::Mode0,
        }
    }

    #[must_use]
    pub fn bits(self) -> u8 {
        match self {
            Self::Mode0 => 0,
            Self::Mode1 => 1,
            Self::Mode2 => 2,
        }
    }
}

/// The full Z80 register file, including the shadow set and the internal
/// latches that the undocumented flag behaviour depends on.
///
/// Register pairs are derived views over the byte registers; there is no
/// separate pair storage to fall out of sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,

    pub a_alt: u8,
    pub f_alt: u8,
    pub b_alt: u8,
    pub c_alt: u8,
    pub d_alt: u8,
    pub e_alt: u8,
    pub h_alt: u8,
    pub l_alt: u8,

    pub ix: u16,
    pub iy: u16,
    pub sp: u16,
    pub pc: u16,

    /// Interrupt vector base.
    pub i: u8,
    /// Memory refresh register. Not advanced by instruction fetch; it only
    /// changes via `LD R,A` and reset.
    pub r: u8,

    /// Internal address latch (often called WZ). High byte feeds the
    /// undocumented flags of `BIT b,(HL)`.
    pub wz: u16,
    /// Copy of the flags written by the previous instruction, or 0 if that
    /// instruction left F alone. Feeds `SCF`/`CCF` undocumented flags.
    pub q: u8,

    pub iff1: bool,
    pub iff2: bool,
    pub im: InterruptMode,
    pub halted: bool,
    /// Set by `EI`: interrupt acceptance is deferred until after the next
    /// instruction.
    pub ei_pending: bool,
}

macro_rules! pair {
    ($get:ident, $set:ident, $hi:ident, $lo:ident) => {
        #[must_use]
        pub fn $get(&self) -> u16 {
            u16::from(self.$hi) << 8 | u16::from(self.$lo)
        }

        pub fn $set(&mut self, value: u16) {
            self.$hi = (value >> 8) as u8;
            self.$lo = value as u8;
        }
    };
}

impl Registers {
    #[must_use]
    pub fn new() -> Self {
        let mut regs = Self {
            a: 0,
            f: 0,
            b: 0,
            c: 0,
            d: 0,
            e: 0,
            h: 0,
            l: 0,
            a_alt: 0,
            f_alt: 0,
            b_alt: 0,
            c_alt: 0,
            d_alt: 0,
            e_alt: 0,
            h_alt: 0,
            l_alt: 0,
            ix: 0,
            iy: 0,
            sp: 0,
            pc: 0,
            i: 0,
            r: 0,
            wz: 0,
            q: 0,
            iff1: false,
            iff2: false,
            im: InterruptMode::Mode0,
            halted: false,
            ei_pending: false,
        };
        regs.reset(true);
        regs
    }

    pair!(af, set_af, a, f);
    pair!(bc, set_bc, b, c);
    pair!(de, set_de, d, e);
    pair!(hl, set_hl, h, l);
    pair!(af_alt, set_af_alt, a_alt, f_alt);
    pair!(bc_alt, set_bc_alt, b_alt, c_alt);
    pair!(de_alt, set_de_alt, d_alt, e_alt);
    pair!(hl_alt, set_hl_alt, h_alt, l_alt);

    /// Put the register file into its post-reset state.
    ///
    /// A soft reset matches what the hardware guarantees: AF and AF' come
    /// up as 0xFFFF, SP as 0xFFFF, PC/I/R zero, interrupts disabled, mode
    /// 0. A hard reset additionally clears every other register, which
    /// real silicon leaves undefined.
    pub fn reset(&mut self, hard: bool) {
        self.a = 0xFF;
        self.f = 0xFF;
        self.a_alt = 0xFF;
        self.f_alt = 0xFF;
        self.sp = 0xFFFF;
        self.pc = 0;
        self.i = 0;
        self.r = 0;
        self.q = 0;
        self.iff1 = false;
        self.iff2 = false;
        self.im = InterruptMode::Mode0;
        self.halted = false;
        self.ei_pending = false;
        if hard {
            self.b = 0;
            self.c = 0;
            self.d = 0;
            self.e = 0;
            self.h = 0;
            self.l = 0;
            self.b_alt = 0;
            self.c_alt = 0;
            self.d_alt = 0;
            self.e_alt = 0;
            self.h_alt = 0;
            self.l_alt = 0;
            self.ix = 0;
            self.iy = 0;
            self.wz = 0;
        }
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
