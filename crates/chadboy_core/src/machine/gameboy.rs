use chadboy_common::key::Key;

use crate::cpu::Cpu;
use crate::error::CoreError;

use super::{video, Cartridge};

/// T-cycles in one DMG frame (154 lines of 456 cycles).
pub const CYCLES_PER_FRAME: u32 = 70_224;

/// High-level Game Boy machine.
///
/// Holds the CPU core, which in turn owns the whole address space. This is
/// the main entry point used by the `GameBoyApp` wrapper and the headless
/// frame dumper.
#[derive(Debug, Default)]
pub struct GameBoy {
    pub cpu: Cpu,
}

impl GameBoy {
    pub fn new() -> Self {
        Self { cpu: Cpu::new() }
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Copy a cartridge into the ROM window and restart from the boot
    /// state.
    pub fn load_cartridge(&mut self, cartridge: &Cartridge) {
        cartridge.load_into(self.cpu.memory_mut());
        self.cpu.reset();
    }

    /// Validate and load a raw ROM image.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), CoreError> {
        let cartridge = Cartridge::new(rom)?;
        self.load_cartridge(&cartridge);
        Ok(())
    }

    /// Step the CPU until one frame worth of T-cycles has elapsed.
    ///
    /// Returns the cycles actually consumed, which may overshoot
    /// `CYCLES_PER_FRAME` by part of the last instruction. The first failing
    /// step ends the frame early and its error is returned.
    pub fn step_frame(&mut self) -> Result<u32, CoreError> {
        let mut cycles = 0u32;
        while cycles < CYCLES_PER_FRAME {
            let step = self.cpu.step()?;
            cycles = cycles.saturating_add(step.cycles);
        }
        Ok(cycles)
    }

    /// Forward a frontend key event. Any press releases the CPU from STOP;
    /// there is no joypad register model beyond that.
    pub fn handle_key(&mut self, key: Key, pressed: bool) {
        if pressed && key != Key::None {
            self.cpu.wake();
        }
    }

    /// Render the background layer into an RGB24 buffer.
    pub fn video_frame(&self, buffer: &mut [u8]) {
        video::render_video_frame(self.cpu.memory(), buffer);
    }
}
