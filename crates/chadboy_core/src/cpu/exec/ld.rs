use crate::arith::{high_of, low_of};
use crate::cpu::table::Flow;
use crate::cpu::Cpu;

impl Cpu {
    pub(in crate::cpu) fn exec_ld_rr_d16(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));

        let value = self.imm16();
        self.write_rp(opcode >> 4, value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_r_d8(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(
            opcode,
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E
        ));

        let value = self.imm8();
        self.write_reg8(opcode >> 3, value);
        Flow::Next
    }

    /// LD r,r' over 0x40..=0x7F, minus 0x76 which is HALT.
    pub(in crate::cpu) fn exec_ld_r_r(&mut self, opcode: u8) -> Flow {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);

        let value = self.read_reg8(opcode);
        self.write_reg8(opcode >> 3, value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_a16_sp(&mut self, _opcode: u8) -> Flow {
        let addr = self.imm16();
        let sp = self.regs.sp;
        self.memory.write(addr, low_of(sp));
        self.memory.write(addr.wrapping_add(1), high_of(sp));
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ldh_a8(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0xE0 | 0xF0));

        let addr = 0xFF00u16 | self.imm8() as u16;
        match opcode {
            0xE0 => self.memory.write(addr, self.regs.a),
            _ => self.regs.a = self.memory.read(addr),
        }
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ldh_c(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0xE2 | 0xF2));

        let addr = 0xFF00u16 | self.regs.c as u16;
        match opcode {
            0xE2 => self.memory.write(addr, self.regs.a),
            _ => self.regs.a = self.memory.read(addr),
        }
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_a16_a(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0xEA | 0xFA));

        let addr = self.imm16();
        match opcode {
            0xEA => self.memory.write(addr, self.regs.a),
            _ => self.regs.a = self.memory.read(addr),
        }
        Flow::Next
    }

    /// Address for `(BC)`, `(DE)`, `(HL+)`, `(HL-)` by bits 4–5, stepping HL
    /// afterwards for the last two.
    fn indirect_addr(&self, opcode: u8) -> (u16, Option<bool>) {
        match (opcode >> 4) & 0x03 {
            0 => (self.regs.bc(), None),
            1 => (self.regs.de(), None),
            2 => (self.regs.hl(), Some(true)),
            _ => (self.regs.hl(), Some(false)),
        }
    }

    pub(in crate::cpu) fn exec_ld_indirect_a(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));

        let (addr, hl_step) = self.indirect_addr(opcode);
        self.memory.write(addr, self.regs.a);
        if let Some(increment) = hl_step {
            self.hl_post_step(increment);
        }
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_a_indirect(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));

        let (addr, hl_step) = self.indirect_addr(opcode);
        self.regs.a = self.memory.read(addr);
        if let Some(increment) = hl_step {
            self.hl_post_step(increment);
        }
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_sp_hl(&mut self, _opcode: u8) -> Flow {
        self.regs.sp = self.regs.hl();
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_hl_sp_r8(&mut self, _opcode: u8) -> Flow {
        let imm = self.imm8();
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        Flow::Next
    }
}
