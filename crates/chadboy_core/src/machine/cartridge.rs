use std::path::Path;

use crate::error::CoreError;
use crate::memory::Memory;

/// Size of the fixed cartridge ROM window at 0x0000..0x7FFF.
pub const CART_SIZE: usize = 0x8000;

/// A cartridge image without a mapper.
///
/// Only the first 32 KiB window is modelled; bank switching is not.
#[derive(Clone, Debug)]
pub struct Cartridge {
    rom: Vec<u8>,
}

impl Cartridge {
    /// Wrap a ROM image, rejecting anything that would not fit the window.
    pub fn new(rom: &[u8]) -> Result<Self, CoreError> {
        if rom.len() > CART_SIZE {
            return Err(CoreError::RomTooLarge {
                size: rom.len(),
                limit: CART_SIZE,
            });
        }

        let mut padded = vec![0u8; CART_SIZE];
        padded[..rom.len()].copy_from_slice(rom);
        Ok(Self { rom: padded })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let data = std::fs::read(path.as_ref())?;
        log::info!(
            "Read ROM '{}' ({} bytes)",
            path.as_ref().display(),
            data.len()
        );
        Self::new(&data)
    }

    /// Copy the image (zero-padded to the full window) into memory at 0x0000.
    pub fn load_into(&self, memory: &mut Memory) {
        for (offset, &byte) in self.rom.iter().enumerate() {
            memory.write(offset as u16, byte);
        }
    }

    pub fn rom(&self) -> &[u8] {
        &self.rom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_image_is_rejected() {
        let rom = vec![0u8; CART_SIZE + 1];
        let err = Cartridge::new(&rom).unwrap_err();
        assert!(matches!(
            err,
            CoreError::RomTooLarge { size, limit } if size == CART_SIZE + 1 && limit == CART_SIZE
        ));
    }

    #[test]
    fn full_window_image_is_accepted() {
        let rom = vec![0xAAu8; CART_SIZE];
        let cart = Cartridge::new(&rom).unwrap();
        assert_eq!(cart.rom().len(), CART_SIZE);
    }

    #[test]
    fn load_copies_from_zero_and_pads() {
        let mut memory = Memory::new();
        memory.write(0x0010, 0xFF);
        memory.write(0x8000, 0x77);

        let cart = Cartridge::new(&[0x01, 0x02, 0x03]).unwrap();
        cart.load_into(&mut memory);

        assert_eq!(memory.read(0x0000), 0x01);
        assert_eq!(memory.read(0x0001), 0x02);
        assert_eq!(memory.read(0x0002), 0x03);
        assert_eq!(memory.read(0x0010), 0x00);
        // Outside the cartridge window.
        assert_eq!(memory.read(0x8000), 0x77);
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = Cartridge::from_file("definitely/not/here.gb").unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
