use thiserror::Error;

/// Errors surfaced by the core to whoever drives it.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The cartridge image does not fit the fixed (unbanked) ROM window.
    #[error("ROM image is {size} bytes, larger than the {limit}-byte cartridge window")]
    RomTooLarge { size: usize, limit: usize },
    /// The CPU fetched one of the opcode holes. The CPU stays locked on it
    /// until reset.
    #[error("illegal opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    IllegalOpcode { opcode: u8, pc: u16 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
