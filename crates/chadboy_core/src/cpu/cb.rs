use super::table::{Flow, Instruction, Op};
use super::{Cpu, Flag};

macro_rules! cb_group {
    ($($base:literal $name:literal, $flags:literal, $cycles:literal / $hl_cycles:literal => $exec:ident;)*) => {
        [$(
            Instruction::new($base,     concat!($name, "B"),    2, $cycles,    $cycles,    $flags, Op::Exec(Cpu::$exec)),
            Instruction::new($base + 1, concat!($name, "C"),    2, $cycles,    $cycles,    $flags, Op::Exec(Cpu::$exec)),
            Instruction::new($base + 2, concat!($name, "D"),    2, $cycles,    $cycles,    $flags, Op::Exec(Cpu::$exec)),
            Instruction::new($base + 3, concat!($name, "E"),    2, $cycles,    $cycles,    $flags, Op::Exec(Cpu::$exec)),
            Instruction::new($base + 4, concat!($name, "H"),    2, $cycles,    $cycles,    $flags, Op::Exec(Cpu::$exec)),
            Instruction::new($base + 5, concat!($name, "L"),    2, $cycles,    $cycles,    $flags, Op::Exec(Cpu::$exec)),
            Instruction::new($base + 6, concat!($name, "(HL)"), 2, $hl_cycles, $hl_cycles, $flags, Op::Exec(Cpu::$exec)),
            Instruction::new($base + 7, concat!($name, "A"),    2, $cycles,    $cycles,    $flags, Op::Exec(Cpu::$exec)),
        )*]
    };
}

/// Extended (`0xCB`-prefixed) opcode table, indexed by the second byte.
///
/// Each row expands to the eight operand encodings B, C, D, E, H, L, (HL), A.
/// Lengths and cycles include the prefix byte.
#[rustfmt::skip]
pub static CB_OPCODES: [Instruction; 256] = cb_group! {
    0x00 "RLC ",    "Z 0 0 C", 8 / 16 => exec_cb_shift;
    0x08 "RRC ",    "Z 0 0 C", 8 / 16 => exec_cb_shift;
    0x10 "RL ",     "Z 0 0 C", 8 / 16 => exec_cb_shift;
    0x18 "RR ",     "Z 0 0 C", 8 / 16 => exec_cb_shift;
    0x20 "SLA ",    "Z 0 0 C", 8 / 16 => exec_cb_shift;
    0x28 "SRA ",    "Z 0 0 C", 8 / 16 => exec_cb_shift;
    0x30 "SWAP ",   "Z 0 0 0", 8 / 16 => exec_cb_shift;
    0x38 "SRL ",    "Z 0 0 C", 8 / 16 => exec_cb_shift;
    0x40 "BIT 0,",  "Z 0 1 -", 8 / 12 => exec_cb_bit;
    0x48 "BIT 1,",  "Z 0 1 -", 8 / 12 => exec_cb_bit;
    0x50 "BIT 2,",  "Z 0 1 -", 8 / 12 => exec_cb_bit;
    0x58 "BIT 3,",  "Z 0 1 -", 8 / 12 => exec_cb_bit;
    0x60 "BIT 4,",  "Z 0 1 -", 8 / 12 => exec_cb_bit;
    0x68 "BIT 5,",  "Z 0 1 -", 8 / 12 => exec_cb_bit;
    0x70 "BIT 6,",  "Z 0 1 -", 8 / 12 => exec_cb_bit;
    0x78 "BIT 7,",  "Z 0 1 -", 8 / 12 => exec_cb_bit;
    0x80 "RES 0,",  "- - - -", 8 / 16 => exec_cb_res;
    0x88 "RES 1,",  "- - - -", 8 / 16 => exec_cb_res;
    0x90 "RES 2,",  "- - - -", 8 / 16 => exec_cb_res;
    0x98 "RES 3,",  "- - - -", 8 / 16 => exec_cb_res;
    0xA0 "RES 4,",  "- - - -", 8 / 16 => exec_cb_res;
    0xA8 "RES 5,",  "- - - -", 8 / 16 => exec_cb_res;
    0xB0 "RES 6,",  "- - - -", 8 / 16 => exec_cb_res;
    0xB8 "RES 7,",  "- - - -", 8 / 16 => exec_cb_res;
    0xC0 "SET 0,",  "- - - -", 8 / 16 => exec_cb_set;
    0xC8 "SET 1,",  "- - - -", 8 / 16 => exec_cb_set;
    0xD0 "SET 2,",  "- - - -", 8 / 16 => exec_cb_set;
    0xD8 "SET 3,",  "- - - -", 8 / 16 => exec_cb_set;
    0xE0 "SET 4,",  "- - - -", 8 / 16 => exec_cb_set;
    0xE8 "SET 5,",  "- - - -", 8 / 16 => exec_cb_set;
    0xF0 "SET 6,",  "- - - -", 8 / 16 => exec_cb_set;
    0xF8 "SET 7,",  "- - - -", 8 / 16 => exec_cb_set;
};

impl Cpu {
    /// Rotates and shifts (`0x00..=0x3F`).
    ///
    /// The bit leaving the register is captured into C before the shift.
    pub(in crate::cpu) fn exec_cb_shift(&mut self, cb: u8) -> Flow {
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;
        let value = self.read_reg8(z);
        let carry_in = self.get_flag(Flag::C);

        let (result, carry) = match y {
            // RLC
            0 => (value.rotate_left(1), value & 0x80 != 0),
            // RRC
            1 => (value.rotate_right(1), value & 0x01 != 0),
            // RL
            2 => ((value << 1) | carry_in as u8, value & 0x80 != 0),
            // RR
            3 => ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0),
            // SLA
            4 => (value << 1, value & 0x80 != 0),
            // SRA
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            // SWAP
            6 => (value.rotate_left(4), false),
            // SRL
            _ => (value >> 1, value & 0x01 != 0),
        };

        self.write_reg8(z, result);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, carry);
        Flow::Next
    }

    /// BIT b,r: Z is the complement of the tested bit.
    pub(in crate::cpu) fn exec_cb_bit(&mut self, cb: u8) -> Flow {
        let bit = (cb >> 3) & 0x07;
        let value = self.read_reg8(cb & 0x07);
        self.set_flag(Flag::Z, value & (1 << bit) == 0);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_cb_res(&mut self, cb: u8) -> Flow {
        let bit = (cb >> 3) & 0x07;
        let z = cb & 0x07;
        let value = self.read_reg8(z) & !(1 << bit);
        self.write_reg8(z, value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_cb_set(&mut self, cb: u8) -> Flow {
        let bit = (cb >> 3) & 0x07;
        let z = cb & 0x07;
        let value = self.read_reg8(z) | (1 << bit);
        self.write_reg8(z, value);
        Flow::Next
    }
}
