use crate::cpu::table::Flow;
use crate::cpu::{Cpu, Flag};

impl Cpu {
    /// Shared body of the register and immediate ALU groups. Bits 3–5 pick
    /// the operation: ADD, ADC, SUB, SBC, AND, XOR, OR, CP.
    fn alu_dispatch(&mut self, opcode: u8, value: u8) {
        match (opcode >> 3) & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    pub(in crate::cpu) fn exec_alu_reg(&mut self, opcode: u8) -> Flow {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let value = self.read_reg8(opcode);
        self.alu_dispatch(opcode, value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_alu_imm(&mut self, opcode: u8) -> Flow {
        debug_assert!(opcode & 0xC7 == 0xC6);

        let value = self.imm8();
        self.alu_dispatch(opcode, value);
        Flow::Next
    }

    /// RLCA, RRCA, RLA, RRA. Unlike their CB forms these always clear Z.
    pub(in crate::cpu) fn exec_rotate_a(&mut self, opcode: u8) -> Flow {
        let a = self.regs.a;
        let carry_in = self.get_flag(Flag::C) as u8;

        let (result, carry) = match opcode {
            0x07 => (a.rotate_left(1), a & 0x80 != 0),
            0x0F => (a.rotate_right(1), a & 0x01 != 0),
            0x17 => ((a << 1) | carry_in, a & 0x80 != 0),
            _ => ((a >> 1) | (carry_in << 7), a & 0x01 != 0),
        };

        self.regs.a = result;
        self.set_flag(Flag::C, carry);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_add_hl_rr(&mut self, opcode: u8) -> Flow {
        let value = self.read_rp(opcode >> 4);
        self.alu_add16_hl(value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_add_sp_r8(&mut self, _opcode: u8) -> Flow {
        let imm = self.imm8();
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_daa(&mut self, _opcode: u8) -> Flow {
        self.alu_daa();
        Flow::Next
    }

    pub(in crate::cpu) fn exec_cpl(&mut self, _opcode: u8) -> Flow {
        self.regs.a = !self.regs.a;
        Flow::Next
    }

    pub(in crate::cpu) fn exec_scf(&mut self, _opcode: u8) -> Flow {
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ccf(&mut self, _opcode: u8) -> Flow {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        Flow::Next
    }
}
