mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use crate::error::CoreError;

use super::cb::CB_OPCODES;
use super::table::{Flow, Instruction, Op, BASE_OPCODES};
use super::{Cpu, IDLE_CYCLES};

/// Which table row an executed step came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    Base(u8),
    /// Second byte of a `0xCB`-prefixed instruction.
    Prefixed(u8),
}

impl Opcode {
    pub fn instruction(self) -> &'static Instruction {
        match self {
            Opcode::Base(op) => &BASE_OPCODES[op as usize],
            Opcode::Prefixed(op) => &CB_OPCODES[op as usize],
        }
    }

    pub fn mnemonic(self) -> &'static str {
        self.instruction().mnemonic
    }
}

/// Outcome of a single [`Cpu::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// PC at the start of the step.
    pub pc: u16,
    /// `None` for an idle step of a halted or stopped core.
    pub opcode: Option<Opcode>,
    /// T-cycles consumed.
    pub cycles: u32,
}

impl Cpu {
    /// Execute one instruction, or idle for one step if the core is parked.
    ///
    /// An opcode hole locks the core: that step has no effect on registers
    /// or memory, and it and every later step return
    /// [`CoreError::IllegalOpcode`] until [`Cpu::reset`].
    pub fn step(&mut self) -> Result<Step, CoreError> {
        if let Some((opcode, pc)) = self.locked {
            return Err(CoreError::IllegalOpcode { opcode, pc });
        }

        let step = if self.halted || self.stopped {
            Step {
                pc: self.regs.pc,
                opcode: None,
                cycles: IDLE_CYCLES,
            }
        } else {
            self.exec_instruction()?
        };

        self.emit_trace(&step);
        Ok(step)
    }

    /// Decode the instruction at PC through the base table (and the
    /// extended one behind `0xCB`), run its handler and settle flags, PC and
    /// timing from the table row.
    fn exec_instruction(&mut self) -> Result<Step, CoreError> {
        let pc = self.regs.pc;
        let opcode = self.memory.read(pc);

        let (code, id) = match BASE_OPCODES[opcode as usize].op {
            Op::Prefix => {
                let cb = self.memory.read(pc.wrapping_add(1));
                (cb, Opcode::Prefixed(cb))
            }
            _ => (opcode, Opcode::Base(opcode)),
        };
        let instr = id.instruction();

        let handler = match instr.op {
            Op::Exec(handler) => handler,
            // The extended table has no prefix rows, so only holes land here.
            Op::Illegal | Op::Prefix => {
                log::error!("illegal opcode {opcode:#04X} at {pc:#06X}; CPU locked");
                self.locked = Some((opcode, pc));
                return Err(CoreError::IllegalOpcode { opcode, pc });
            }
        };

        let flags_before = self.regs.f;
        let flow = handler(self, code);
        self.regs.f = instr.flags.apply(flags_before, self.regs.f);

        let cycles = match flow {
            Flow::Next => {
                self.regs.pc = self.next_pc(instr.length as u16);
                instr.cycles
            }
            Flow::Jumped => instr.cycles_taken,
        };

        Ok(Step {
            pc,
            opcode: Some(id),
            cycles: cycles as u32,
        })
    }
}
