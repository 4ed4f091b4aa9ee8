use std::fmt;
use std::ops::RangeInclusive;

/// Total addressable memory for the Game Boy (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;

/// I/O registers and their values once the boot ROM hands over to the
/// cartridge at 0x0100.
///
/// Addresses not listed here (OBP palettes excepted) read as zero at power-on
/// in this model.
pub const POWER_ON_IO: [(u16, u8); 32] = [
    // Joypad.
    (0xFF00, 0xCF),
    // Timer: TIMA, TMA, TAC.
    (0xFF05, 0x00),
    (0xFF06, 0x00),
    (0xFF07, 0x00),
    // Sound.
    (0xFF10, 0x80),
    (0xFF11, 0xBF),
    (0xFF12, 0xF3),
    (0xFF14, 0xBF),
    (0xFF16, 0x3F),
    (0xFF17, 0x00),
    (0xFF19, 0xBF),
    (0xFF1A, 0x7F),
    (0xFF1B, 0xFF),
    (0xFF1C, 0x9F),
    (0xFF1E, 0xBF),
    (0xFF20, 0xFF),
    (0xFF21, 0x00),
    (0xFF22, 0x00),
    (0xFF23, 0xBF),
    (0xFF24, 0x77),
    (0xFF25, 0xF3),
    (0xFF26, 0xF1), // 0xF0 on SGB
    // LCD: LCDC, SCY, SCX, LYC, BGP, OBP0, OBP1, WY, WX.
    (0xFF40, 0x91),
    (0xFF42, 0x00),
    (0xFF43, 0x00),
    (0xFF45, 0x00),
    (0xFF47, 0xFC),
    (0xFF48, 0xFF),
    (0xFF49, 0xFF),
    (0xFF4A, 0x00),
    (0xFF4B, 0x00),
    // Interrupt enable.
    (0xFFFF, 0x00),
];

/// Flat byte store backing the whole 16-bit address space.
///
/// Every access goes through `read`/`write` so memory-mapped behaviour can be
/// hooked in one place later. A `u16` index can never fall outside the
/// store.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nonzero = self.bytes.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &self.bytes.len())
            .field("nonzero", &nonzero)
            .finish()
    }
}

impl Memory {
    /// Zero-filled memory without the power-on I/O values.
    pub fn new() -> Self {
        Self {
            bytes: vec![0u8; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// Zero-filled memory with `initialize` already applied.
    pub fn power_on() -> Self {
        let mut memory = Self::new();
        memory.initialize();
        memory
    }

    #[inline]
    pub fn read(&self, address: u16) -> u8 {
        self.bytes[address as usize]
    }

    #[inline]
    pub fn write(&mut self, address: u16, value: u8) {
        self.bytes[address as usize] = value;
    }

    /// Apply the `POWER_ON_IO` table. Re-applying it yields the same bytes.
    pub fn initialize(&mut self) {
        for &(address, value) in POWER_ON_IO.iter() {
            self.write(address, value);
        }
    }

    /// Read-only view of a contiguous address range.
    pub fn slice(&self, range: RangeInclusive<u16>) -> &[u8] {
        let (start, end) = range.into_inner();
        &self.bytes[start as usize..=end as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_memory_is_zeroed() {
        let memory = Memory::new();
        assert!(memory.slice(0x0000..=0xFFFF).iter().all(|&b| b == 0));
    }

    #[test]
    fn write_then_read_at_the_edges() {
        let mut memory = Memory::new();
        memory.write(0x0000, 0x12);
        memory.write(0xFFFF, 0x34);
        assert_eq!(memory.read(0x0000), 0x12);
        assert_eq!(memory.read(0xFFFF), 0x34);
    }

    #[test]
    fn initialize_sets_documented_registers() {
        let memory = Memory::power_on();
        assert_eq!(memory.read(0xFF00), 0xCF);
        assert_eq!(memory.read(0xFF10), 0x80);
        assert_eq!(memory.read(0xFF26), 0xF1);
        assert_eq!(memory.read(0xFF40), 0x91);
        assert_eq!(memory.read(0xFF47), 0xFC);
        assert_eq!(memory.read(0xFF48), 0xFF);
        assert_eq!(memory.read(0xFFFF), 0x00);
        // Untouched outside the I/O page.
        assert_eq!(memory.read(0xC000), 0x00);
    }

    #[test]
    fn initialize_twice_matches_once() {
        let once = Memory::power_on();
        let mut twice = Memory::power_on();
        twice.initialize();
        assert_eq!(once, twice);
    }

    #[test]
    fn initialize_overwrites_dirty_registers_only() {
        let mut memory = Memory::new();
        memory.write(0xFF40, 0x00);
        memory.write(0x8000, 0xAA);
        memory.initialize();
        assert_eq!(memory.read(0xFF40), 0x91);
        assert_eq!(memory.read(0x8000), 0xAA);
    }

    #[test]
    fn power_on_table_has_no_duplicate_addresses() {
        let mut addresses: Vec<u16> = POWER_ON_IO.iter().map(|&(a, _)| a).collect();
        addresses.sort_unstable();
        addresses.dedup();
        assert_eq!(addresses.len(), POWER_ON_IO.len());
    }
}
