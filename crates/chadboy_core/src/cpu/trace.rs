use super::{Registers, Step};

/// Per-step observer. Installed with [`Cpu::set_tracer`](super::Cpu::set_tracer)
/// and called after every successful step, idle ones included.
pub trait Tracer {
    fn trace(&mut self, step: &Step, regs: &Registers);
}

/// Writes one `trace`-level log line per step.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace(&mut self, step: &Step, regs: &Registers) {
        let mnemonic = step.opcode.map_or("(idle)", |op| op.mnemonic());
        log::trace!(
            "{:04X}: {:<14} {:>2}c  A={:02X} F={:02X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X}",
            step.pc,
            mnemonic,
            step.cycles,
            regs.a,
            regs.f,
            regs.bc(),
            regs.de(),
            regs.hl(),
            regs.sp,
            regs.pc,
        );
    }
}
