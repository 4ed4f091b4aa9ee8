use crate::cpu::table::Flow;
use crate::cpu::Cpu;

impl Cpu {
    pub(in crate::cpu) fn exec_inc8(&mut self, opcode: u8) -> Flow {
        let index = opcode >> 3;
        let value = self.read_reg8(index);
        let result = self.alu_inc8(value);
        self.write_reg8(index, result);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_dec8(&mut self, opcode: u8) -> Flow {
        let index = opcode >> 3;
        let value = self.read_reg8(index);
        let result = self.alu_dec8(value);
        self.write_reg8(index, result);
        Flow::Next
    }

    // 16-bit INC/DEC leave the flags alone.
    pub(in crate::cpu) fn exec_inc16(&mut self, opcode: u8) -> Flow {
        let rp = opcode >> 4;
        let value = self.read_rp(rp).wrapping_add(1);
        self.write_rp(rp, value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_dec16(&mut self, opcode: u8) -> Flow {
        let rp = opcode >> 4;
        let value = self.read_rp(rp).wrapping_sub(1);
        self.write_rp(rp, value);
        Flow::Next
    }
}
