use crate::arith::{high_of, low_of, pair};

use super::table::Flow;
use super::{Cpu, Flag};

impl Cpu {
    /// Helper to read an 8-bit register or (HL) by index.
    ///
    /// The encoding matches the standard Game Boy register order used by
    /// opcode tables:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub(super) fn read_reg8(&self, index: u8) -> u8 {
        match index & 0x07 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => self.memory.read(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    /// Helper to write an 8-bit register or (HL) by index.
    ///
    /// The encoding matches `read_reg8`.
    #[inline]
    pub(super) fn write_reg8(&mut self, index: u8, value: u8) {
        match index & 0x07 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => self.memory.write(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }

    /// 16-bit register pair by the `rp` encoding (bits 4–5 of the opcode):
    /// 0=BC, 1=DE, 2=HL, 3=SP.
    #[inline]
    pub(super) fn read_rp(&self, rp: u8) -> u16 {
        match rp & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_rp(&mut self, rp: u8, value: u16) {
        match rp & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.sp = value,
        }
    }

    /// Immediate byte following the opcode. PC still points at the opcode
    /// while a handler runs.
    #[inline]
    pub(super) fn imm8(&self) -> u8 {
        self.memory.read(self.regs.pc.wrapping_add(1))
    }

    /// Little-endian immediate word following the opcode.
    #[inline]
    pub(super) fn imm16(&self) -> u16 {
        let lo = self.memory.read(self.regs.pc.wrapping_add(1));
        let hi = self.memory.read(self.regs.pc.wrapping_add(2));
        pair(hi, lo)
    }

    /// Push a word the way the SM83 does: SP is decremented before each
    /// write, high byte first, so memory[SP] = low and memory[SP+1] = high.
    #[inline]
    pub(super) fn push_u16(&mut self, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write(self.regs.sp, high_of(value));
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write(self.regs.sp, low_of(value));
    }

    #[inline]
    pub(super) fn pop_u16(&mut self) -> u16 {
        let lo = self.memory.read(self.regs.sp);
        let hi = self.memory.read(self.regs.sp.wrapping_add(1));
        self.regs.sp = self.regs.sp.wrapping_add(2);
        pair(hi, lo)
    }

    /// Step HL by one as a single 16-bit value, for `(HL+)`/`(HL-)`.
    #[inline]
    pub(super) fn hl_post_step(&mut self, increment: bool) {
        let hl = self.regs.hl();
        let next = if increment {
            hl.wrapping_add(1)
        } else {
            hl.wrapping_sub(1)
        };
        self.regs.set_hl(next);
    }

    /// Condition code from bits 3–4 of the opcode: NZ, Z, NC, C.
    #[inline]
    pub(super) fn cc_condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x03 {
            0 => !self.get_flag(Flag::Z),
            1 => self.get_flag(Flag::Z),
            2 => !self.get_flag(Flag::C),
            _ => self.get_flag(Flag::C),
        }
    }

    #[inline]
    pub(super) fn jump_to(&mut self, addr: u16) -> Flow {
        self.regs.pc = addr;
        Flow::Jumped
    }

    /// Push the return address and jump.
    #[inline]
    pub(super) fn call_to(&mut self, ret: u16, addr: u16) -> Flow {
        self.push_u16(ret);
        self.jump_to(addr)
    }

    #[inline]
    pub(super) fn return_from_call(&mut self) -> Flow {
        let addr = self.pop_u16();
        self.jump_to(addr)
    }

    /// Address of the instruction after the current one.
    #[inline]
    pub(super) fn next_pc(&self, length: u16) -> u16 {
        self.regs.pc.wrapping_add(length)
    }
}
