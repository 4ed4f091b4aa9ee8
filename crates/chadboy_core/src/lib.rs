//! Game Boy (DMG) CPU core: the SM83 instruction set over a flat 64 KiB
//! address space, with a cartridge loader and a background-only renderer.

pub mod app;
pub mod arith;
pub mod cpu;
pub mod error;
pub mod machine;
pub mod memory;

pub use app::GameBoyApp;
pub use cpu::Cpu;
pub use error::CoreError;
pub use machine::{Cartridge, GameBoy};
pub use memory::Memory;

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
/// Default integer scaling factor for the SDL frontend.
pub const SCREEN_SCALE: u32 = 4;
