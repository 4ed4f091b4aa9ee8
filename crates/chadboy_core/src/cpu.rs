mod alu;
mod cb;
mod exec;
mod helpers;
mod regs;
mod table;
mod trace;


use std::fmt;

use crate::memory::Memory;

pub use cb::CB_OPCODES;
pub use exec::{Opcode, Step};
pub use regs::{Flag, Registers};
pub use table::{FlagEffects, FlagRule, Flow, Handler, Instruction, Op, BASE_OPCODES};
pub use trace::{LogTracer, Tracer};

/// Cost of one idle step while the core is parked by HALT or STOP.
pub const IDLE_CYCLES: u32 = 4;

/// Game Boy CPU core.
///
/// The core owns its 64 KiB address space outright: there is no memory
/// controller in between, so the frontend only ever sees it through
/// [`Cpu::memory`]. Interrupts are not serviced; `ime` is tracked so that
/// EI/DI/RETI have observable effects.
pub struct Cpu {
    pub regs: Registers,
    memory: Memory,
    pub ime: bool,
    halted: bool,
    /// STOP low-power state. Left by [`Cpu::wake`] (a joypad press) or a
    /// reset.
    stopped: bool,
    /// Set once an opcode hole has been executed. Holds the opcode and its
    /// address so every later step can report the same failure.
    locked: Option<(u8, u16)>,
    tracer: Option<Box<dyn Tracer>>,
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("ime", &self.ime)
            .field("halted", &self.halted)
            .field("stopped", &self.stopped)
            .field("locked", &self.locked)
            .field("tracing", &self.tracer.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            memory: Memory::power_on(),
            ime: false,
            halted: false,
            stopped: false,
            locked: None,
            tracer: None,
        };
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Return to the post-boot state without losing the loaded ROM.
    ///
    /// Registers and control flags go back to their boot values and the
    /// power-on I/O table is written again; every other memory cell keeps
    /// its contents.
    pub fn reset(&mut self) {
        self.halted = false;
        self.stopped = false;
        self.locked = None;
        self.memory.initialize();
        self.apply_dmg_boot_state();
    }

    /// Registers as the DMG boot ROM leaves them when it hands control to
    /// the cartridge at 0x0100.
    fn apply_dmg_boot_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.f = 0xB0; // Z, N, H, C = 1,0,1,1
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;

        self.ime = false;
    }

    /// Read-only view of the address space.
    #[inline]
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    #[inline]
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }

    /// Leave STOP mode. A halted core stays halted: without interrupt
    /// servicing nothing but a reset ends HALT.
    pub fn wake(&mut self) {
        if self.stopped {
            log::debug!("leaving STOP at {:#06X}", self.regs.pc);
            self.stopped = false;
        }
    }

    /// Install (or remove, with `None`) the per-step trace sink.
    pub fn set_tracer(&mut self, tracer: Option<Box<dyn Tracer>>) {
        self.tracer = tracer;
    }

    fn emit_trace(&mut self, step: &Step) {
        if let Some(tracer) = self.tracer.as_mut() {
            tracer.trace(step, &self.regs);
        }
    }
}
