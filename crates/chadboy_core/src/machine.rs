mod cartridge;
mod gameboy;
mod video;

#[cfg(test)]
mod tests;

pub use cartridge::{Cartridge, CART_SIZE};
pub use gameboy::{GameBoy, CYCLES_PER_FRAME};
pub use video::{render_video_frame, SHADES};
