use crate::arith::{high_of, low_of, pair};

use super::Cpu;

/// Registers for the Game Boy CPU (SM83).
///
/// Only the eight 8-bit registers and the two 16-bit pointers are stored.
/// The pairs (AF, BC, DE, HL) are views composed from their halves on every
/// access, so they can never drift apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        pair(self.a, self.f & 0xF0)
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        self.a = high_of(value);
        // Lower 4 bits of F are always zero.
        self.f = low_of(value) & 0xF0;
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        pair(self.b, self.c)
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        self.b = high_of(value);
        self.c = low_of(value);
    }

    #[inline]
    pub fn de(&self) -> u16 {
        pair(self.d, self.e)
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        self.d = high_of(value);
        self.e = low_of(value);
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        pair(self.h, self.l)
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        self.h = high_of(value);
        self.l = low_of(value);
    }
}

/// Flag bits in the F register.
///
/// Layout (bit index in the byte, from MSB to LSB):
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
/// - bits 0–3 are always zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

impl Flag {
    pub const ALL: [Flag; 4] = [Flag::Z, Flag::N, Flag::H, Flag::C];

    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        (self.regs.f & flag.mask()) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.regs.f |= flag.mask();
        } else {
            self.regs.f &= !flag.mask();
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }
}
