use crate::cpu::table::Flow;
use crate::cpu::Cpu;

impl Cpu {
    pub(in crate::cpu) fn exec_nop(&mut self, _opcode: u8) -> Flow {
        Flow::Next
    }

    /// Park the core until something wakes it. PC already points past the
    /// HALT once the dispatcher advances it.
    pub(in crate::cpu) fn exec_halt(&mut self, _opcode: u8) -> Flow {
        self.halted = true;
        Flow::Next
    }

    pub(in crate::cpu) fn exec_stop(&mut self, _opcode: u8) -> Flow {
        self.stopped = true;
        log::debug!("STOP at {:#06X}", self.regs.pc);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_di(&mut self, _opcode: u8) -> Flow {
        self.ime = false;
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ei(&mut self, _opcode: u8) -> Flow {
        self.ime = true;
        Flow::Next
    }
}
