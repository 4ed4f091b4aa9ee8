use crate::cpu::table::Flow;
use crate::cpu::Cpu;

impl Cpu {
    /// PUSH/POP use the `rp2` encoding, where slot 3 is AF rather than SP.
    fn read_rp2(&self, rp: u8) -> u16 {
        match rp & 0x03 {
            3 => self.regs.af(),
            rp => self.read_rp(rp),
        }
    }

    fn write_rp2(&mut self, rp: u8, value: u16) {
        match rp & 0x03 {
            3 => self.regs.set_af(value),
            rp => self.write_rp(rp, value),
        }
    }

    pub(in crate::cpu) fn exec_push(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));

        let value = self.read_rp2(opcode >> 4);
        self.push_u16(value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_pop(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));

        let value = self.pop_u16();
        self.write_rp2(opcode >> 4, value);
        Flow::Next
    }
}
