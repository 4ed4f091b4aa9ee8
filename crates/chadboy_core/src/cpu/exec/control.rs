use crate::cpu::table::Flow;
use crate::cpu::Cpu;

impl Cpu {
    /// Target of a relative jump: the displacement counts from the byte
    /// after the two-byte JR.
    fn jr_target(&self) -> u16 {
        let offset = self.imm8() as i8;
        self.next_pc(2).wrapping_add_signed(offset as i16)
    }

    pub(in crate::cpu) fn exec_jr(&mut self, _opcode: u8) -> Flow {
        let target = self.jr_target();
        self.jump_to(target)
    }

    pub(in crate::cpu) fn exec_jr_cc(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));

        if self.cc_condition(opcode) {
            let target = self.jr_target();
            self.jump_to(target)
        } else {
            Flow::Next
        }
    }

    pub(in crate::cpu) fn exec_jp(&mut self, _opcode: u8) -> Flow {
        let target = self.imm16();
        self.jump_to(target)
    }

    pub(in crate::cpu) fn exec_jp_cc(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));

        if self.cc_condition(opcode) {
            let target = self.imm16();
            self.jump_to(target)
        } else {
            Flow::Next
        }
    }

    pub(in crate::cpu) fn exec_jp_hl(&mut self, _opcode: u8) -> Flow {
        let target = self.regs.hl();
        self.jump_to(target)
    }

    pub(in crate::cpu) fn exec_call(&mut self, _opcode: u8) -> Flow {
        let target = self.imm16();
        let ret = self.next_pc(3);
        self.call_to(ret, target)
    }

    pub(in crate::cpu) fn exec_call_cc(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));

        if self.cc_condition(opcode) {
            let target = self.imm16();
            let ret = self.next_pc(3);
            self.call_to(ret, target)
        } else {
            Flow::Next
        }
    }

    pub(in crate::cpu) fn exec_ret(&mut self, _opcode: u8) -> Flow {
        self.return_from_call()
    }

    pub(in crate::cpu) fn exec_ret_cc(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));

        if self.cc_condition(opcode) {
            self.return_from_call()
        } else {
            Flow::Next
        }
    }

    pub(in crate::cpu) fn exec_reti(&mut self, _opcode: u8) -> Flow {
        self.ime = true;
        self.return_from_call()
    }

    /// RST n: call to the fixed vector encoded in bits 3–5.
    pub(in crate::cpu) fn exec_rst(&mut self, opcode: u8) -> Flow {
        debug_assert!(opcode & 0xC7 == 0xC7);

        let ret = self.next_pc(1);
        self.call_to(ret, (opcode & 0x38) as u16)
    }
}
