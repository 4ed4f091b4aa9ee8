use super::{Cpu, Flag};

/// What a handler did with the program counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// PC is untouched; the dispatcher advances it by the instruction length.
    Next,
    /// The handler already redirected PC (taken jump, call, return, restart).
    Jumped,
}

/// Opcode handler. The argument is the opcode byte that selected it (the
/// second byte for prefixed instructions), so one handler can serve a whole
/// encoding group.
pub type Handler = fn(&mut Cpu, u8) -> Flow;

#[derive(Clone, Copy)]
pub enum Op {
    Exec(Handler),
    /// `0xCB`: escape into the extended table.
    Prefix,
    /// One of the opcode holes with no defined behaviour.
    Illegal,
}

/// How an instruction treats a single flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagRule {
    /// Left as it was before the instruction.
    Keep,
    Reset,
    Set,
    /// Whatever the handler computed.
    Computed,
}

impl FlagRule {
    const fn from_byte(byte: u8) -> Self {
        match byte {
            b'-' => FlagRule::Keep,
            b'0' => FlagRule::Reset,
            b'1' => FlagRule::Set,
            _ => FlagRule::Computed,
        }
    }
}

/// Per-instruction flag effects, one rule for each of Z, N, H, C.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagEffects {
    pub z: FlagRule,
    pub n: FlagRule,
    pub h: FlagRule,
    pub c: FlagRule,
}

impl FlagEffects {
    pub const NONE: FlagEffects = FlagEffects::parse("- - - -");

    /// Parse the `"Z N H C"` column notation used by opcode tables: `-`
    /// keeps the flag, `0`/`1` force it, any letter means computed.
    pub const fn parse(pattern: &str) -> Self {
        let bytes = pattern.as_bytes();
        assert!(bytes.len() == 7, "flag pattern must look like \"Z 0 H -\"");
        FlagEffects {
            z: FlagRule::from_byte(bytes[0]),
            n: FlagRule::from_byte(bytes[2]),
            h: FlagRule::from_byte(bytes[4]),
            c: FlagRule::from_byte(bytes[6]),
        }
    }

    pub fn rule(&self, flag: Flag) -> FlagRule {
        match flag {
            Flag::Z => self.z,
            Flag::N => self.n,
            Flag::H => self.h,
            Flag::C => self.c,
        }
    }

    /// Merge the flag byte from before an instruction with the one its
    /// handler left behind.
    pub fn apply(&self, before: u8, computed: u8) -> u8 {
        let mut f = 0u8;
        for flag in Flag::ALL {
            let mask = flag.mask();
            let bit = match self.rule(flag) {
                FlagRule::Keep => before & mask,
                FlagRule::Reset => 0,
                FlagRule::Set => mask,
                FlagRule::Computed => computed & mask,
            };
            f |= bit;
        }
        f
    }
}

/// One row of an opcode table.
#[derive(Clone, Copy)]
pub struct Instruction {
    pub opcode: u8,
    pub mnemonic: &'static str,
    /// Bytes occupied, opcode (and prefix) included.
    pub length: u8,
    /// T-cycles when a conditional branch is not taken, or always for
    /// everything else.
    pub cycles: u8,
    /// T-cycles when the handler reports `Flow::Jumped`.
    pub cycles_taken: u8,
    pub flags: FlagEffects,
    pub op: Op,
}

impl Instruction {
    pub const fn new(
        opcode: u8,
        mnemonic: &'static str,
        length: u8,
        cycles: u8,
        cycles_taken: u8,
        flags: &str,
        op: Op,
    ) -> Self {
        Self {
            opcode,
            mnemonic,
            length,
            cycles,
            cycles_taken,
            flags: FlagEffects::parse(flags),
            op,
        }
    }

    pub const fn illegal(opcode: u8) -> Self {
        Self::new(opcode, "ILLEGAL", 1, 0, 0, "- - - -", Op::Illegal)
    }

    pub fn is_illegal(&self) -> bool {
        matches!(self.op, Op::Illegal)
    }
}

macro_rules! op {
    (@taken $cycles:literal) => {
        $cycles
    };
    (@taken $cycles:literal $taken:literal) => {
        $taken
    };
    ($code:literal, $name:literal, $len:literal, $cycles:literal, $flags:literal, prefix) => {
        Instruction::new($code, $name, $len, $cycles, $cycles, $flags, Op::Prefix)
    };
    ($code:literal, $name:literal, $len:literal, $cycles:literal $(/ $taken:literal)?, $flags:literal, $exec:ident) => {
        Instruction::new(
            $code,
            $name,
            $len,
            $cycles,
            op!(@taken $cycles $($taken)?),
            $flags,
            Op::Exec(Cpu::$exec),
        )
    };
}

/// Base opcode table, indexed by opcode.
///
/// Columns: opcode, mnemonic, length, cycles (`not-taken/taken` for
/// conditional branches), flags `Z N H C`, handler.
#[rustfmt::skip]
pub static BASE_OPCODES: [Instruction; 256] = [
    // 0x00
    op!(0x00, "NOP",          1, 4,  "- - - -", exec_nop),
    op!(0x01, "LD BC,d16",    3, 12, "- - - -", exec_ld_rr_d16),
    op!(0x02, "LD (BC),A",    1, 8,  "- - - -", exec_ld_indirect_a),
    op!(0x03, "INC BC",       1, 8,  "- - - -", exec_inc16),
    op!(0x04, "INC B",        1, 4,  "Z 0 H -", exec_inc8),
    op!(0x05, "DEC B",        1, 4,  "Z 1 H -", exec_dec8),
    op!(0x06, "LD B,d8",      2, 8,  "- - - -", exec_ld_r_d8),
    op!(0x07, "RLCA",         1, 4,  "0 0 0 C", exec_rotate_a),
    op!(0x08, "LD (a16),SP",  3, 20, "- - - -", exec_ld_a16_sp),
    op!(0x09, "ADD HL,BC",    1, 8,  "- 0 H C", exec_add_hl_rr),
    op!(0x0A, "LD A,(BC)",    1, 8,  "- - - -", exec_ld_a_indirect),
    op!(0x0B, "DEC BC",       1, 8,  "- - - -", exec_dec16),
    op!(0x0C, "INC C",        1, 4,  "Z 0 H -", exec_inc8),
    op!(0x0D, "DEC C",        1, 4,  "Z 1 H -", exec_dec8),
    op!(0x0E, "LD C,d8",      2, 8,  "- - - -", exec_ld_r_d8),
    op!(0x0F, "RRCA",         1, 4,  "0 0 0 C", exec_rotate_a),
    // 0x10
    op!(0x10, "STOP 0",       2, 4,  "- - - -", exec_stop),
    op!(0x11, "LD DE,d16",    3, 12, "- - - -", exec_ld_rr_d16),
    op!(0x12, "LD (DE),A",    1, 8,  "- - - -", exec_ld_indirect_a),
    op!(0x13, "INC DE",       1, 8,  "- - - -", exec_inc16),
    op!(0x14, "INC D",        1, 4,  "Z 0 H -", exec_inc8),
    op!(0x15, "DEC D",        1, 4,  "Z 1 H -", exec_dec8),
    op!(0x16, "LD D,d8",      2, 8,  "- - - -", exec_ld_r_d8),
    op!(0x17, "RLA",          1, 4,  "0 0 0 C", exec_rotate_a),
    op!(0x18, "JR r8",        2, 12, "- - - -", exec_jr),
    op!(0x19, "ADD HL,DE",    1, 8,  "- 0 H C", exec_add_hl_rr),
    op!(0x1A, "LD A,(DE)",    1, 8,  "- - - -", exec_ld_a_indirect),
    op!(0x1B, "DEC DE",       1, 8,  "- - - -", exec_dec16),
    op!(0x1C, "INC E",        1, 4,  "Z 0 H -", exec_inc8),
    op!(0x1D, "DEC E",        1, 4,  "Z 1 H -", exec_dec8),
    op!(0x1E, "LD E,d8",      2, 8,  "- - - -", exec_ld_r_d8),
    op!(0x1F, "RRA",          1, 4,  "0 0 0 C", exec_rotate_a),
    // 0x20
    op!(0x20, "JR NZ,r8",     2, 8/12, "- - - -", exec_jr_cc),
    op!(0x21, "LD HL,d16",    3, 12, "- - - -", exec_ld_rr_d16),
    op!(0x22, "LD (HL+),A",   1, 8,  "- - - -", exec_ld_indirect_a),
    op!(0x23, "INC HL",       1, 8,  "- - - -", exec_inc16),
    op!(0x24, "INC H",        1, 4,  "Z 0 H -", exec_inc8),
    op!(0x25, "DEC H",        1, 4,  "Z 1 H -", exec_dec8),
    op!(0x26, "LD H,d8",      2, 8,  "- - - -", exec_ld_r_d8),
    op!(0x27, "DAA",          1, 4,  "Z - 0 C", exec_daa),
    op!(0x28, "JR Z,r8",      2, 8/12, "- - - -", exec_jr_cc),
    op!(0x29, "ADD HL,HL",    1, 8,  "- 0 H C", exec_add_hl_rr),
    op!(0x2A, "LD A,(HL+)",   1, 8,  "- - - -", exec_ld_a_indirect),
    op!(0x2B, "DEC HL",       1, 8,  "- - - -", exec_dec16),
    op!(0x2C, "INC L",        1, 4,  "Z 0 H -", exec_inc8),
    op!(0x2D, "DEC L",        1, 4,  "Z 1 H -", exec_dec8),
    op!(0x2E, "LD L,d8",      2, 8,  "- - - -", exec_ld_r_d8),
    op!(0x2F, "CPL",          1, 4,  "- 1 1 -", exec_cpl),
    // 0x30
    op!(0x30, "JR NC,r8",     2, 8/12, "- - - -", exec_jr_cc),
    op!(0x31, "LD SP,d16",    3, 12, "- - - -", exec_ld_rr_d16),
    op!(0x32, "LD (HL-),A",   1, 8,  "- - - -", exec_ld_indirect_a),
    op!(0x33, "INC SP",       1, 8,  "- - - -", exec_inc16),
    op!(0x34, "INC (HL)",     1, 12, "Z 0 H -", exec_inc8),
    op!(0x35, "DEC (HL)",     1, 12, "Z 1 H -", exec_dec8),
    op!(0x36, "LD (HL),d8",   2, 12, "- - - -", exec_ld_r_d8),
    op!(0x37, "SCF",          1, 4,  "- 0 0 1", exec_scf),
    op!(0x38, "JR C,r8",      2, 8/12, "- - - -", exec_jr_cc),
    op!(0x39, "ADD HL,SP",    1, 8,  "- 0 H C", exec_add_hl_rr),
    op!(0x3A, "LD A,(HL-)",   1, 8,  "- - - -", exec_ld_a_indirect),
    op!(0x3B, "DEC SP",       1, 8,  "- - - -", exec_dec16),
    op!(0x3C, "INC A",        1, 4,  "Z 0 H -", exec_inc8),
    op!(0x3D, "DEC A",        1, 4,  "Z 1 H -", exec_dec8),
    op!(0x3E, "LD A,d8",      2, 8,  "- - - -", exec_ld_r_d8),
    op!(0x3F, "CCF",          1, 4,  "- 0 0 C", exec_ccf),
    // 0x40
    op!(0x40, "LD B,B",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x41, "LD B,C",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x42, "LD B,D",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x43, "LD B,E",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x44, "LD B,H",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x45, "LD B,L",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x46, "LD B,(HL)",    1, 8,  "- - - -", exec_ld_r_r),
    op!(0x47, "LD B,A",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x48, "LD C,B",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x49, "LD C,C",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x4A, "LD C,D",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x4B, "LD C,E",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x4C, "LD C,H",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x4D, "LD C,L",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x4E, "LD C,(HL)",    1, 8,  "- - - -", exec_ld_r_r),
    op!(0x4F, "LD C,A",       1, 4,  "- - - -", exec_ld_r_r),
    // 0x50
    op!(0x50, "LD D,B",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x51, "LD D,C",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x52, "LD D,D",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x53, "LD D,E",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x54, "LD D,H",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x55, "LD D,L",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x56, "LD D,(HL)",    1, 8,  "- - - -", exec_ld_r_r),
    op!(0x57, "LD D,A",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x58, "LD E,B",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x59, "LD E,C",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x5A, "LD E,D",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x5B, "LD E,E",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x5C, "LD E,H",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x5D, "LD E,L",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x5E, "LD E,(HL)",    1, 8,  "- - - -", exec_ld_r_r),
    op!(0x5F, "LD E,A",       1, 4,  "- - - -", exec_ld_r_r),
    // 0x60
    op!(0x60, "LD H,B",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x61, "LD H,C",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x62, "LD H,D",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x63, "LD H,E",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x64, "LD H,H",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x65, "LD H,L",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x66, "LD H,(HL)",    1, 8,  "- - - -", exec_ld_r_r),
    op!(0x67, "LD H,A",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x68, "LD L,B",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x69, "LD L,C",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x6A, "LD L,D",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x6B, "LD L,E",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x6C, "LD L,H",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x6D, "LD L,L",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x6E, "LD L,(HL)",    1, 8,  "- - - -", exec_ld_r_r),
    op!(0x6F, "LD L,A",       1, 4,  "- - - -", exec_ld_r_r),
    // 0x70
    op!(0x70, "LD (HL),B",    1, 8,  "- - - -", exec_ld_r_r),
    op!(0x71, "LD (HL),C",    1, 8,  "- - - -", exec_ld_r_r),
    op!(0x72, "LD (HL),D",    1, 8,  "- - - -", exec_ld_r_r),
    op!(0x73, "LD (HL),E",    1, 8,  "- - - -", exec_ld_r_r),
    op!(0x74, "LD (HL),H",    1, 8,  "- - - -", exec_ld_r_r),
    op!(0x75, "LD (HL),L",    1, 8,  "- - - -", exec_ld_r_r),
    op!(0x76, "HALT",         1, 4,  "- - - -", exec_halt),
    op!(0x77, "LD (HL),A",    1, 8,  "- - - -", exec_ld_r_r),
    op!(0x78, "LD A,B",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x79, "LD A,C",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x7A, "LD A,D",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x7B, "LD A,E",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x7C, "LD A,H",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x7D, "LD A,L",       1, 4,  "- - - -", exec_ld_r_r),
    op!(0x7E, "LD A,(HL)",    1, 8,  "- - - -", exec_ld_r_r),
    op!(0x7F, "LD A,A",       1, 4,  "- - - -", exec_ld_r_r),
    // 0x80
    op!(0x80, "ADD A,B",      1, 4,  "Z 0 H C", exec_alu_reg),
    op!(0x81, "ADD A,C",      1, 4,  "Z 0 H C", exec_alu_reg),
    op!(0x82, "ADD A,D",      1, 4,  "Z 0 H C", exec_alu_reg),
    op!(0x83, "ADD A,E",      1, 4,  "Z 0 H C", exec_alu_reg),
    op!(0x84, "ADD A,H",      1, 4,  "Z 0 H C", exec_alu_reg),
    op!(0x85, "ADD A,L",      1, 4,  "Z 0 H C", exec_alu_reg),
    op!(0x86, "ADD A,(HL)",   1, 8,  "Z 0 H C", exec_alu_reg),
    op!(0x87, "ADD A,A",      1, 4,  "Z 0 H C", exec_alu_reg),
    op!(0x88, "ADC A,B",      1, 4,  "Z 0 H C", exec_alu_reg),
    op!(0x89, "ADC A,C",      1, 4,  "Z 0 H C", exec_alu_reg),
    op!(0x8A, "ADC A,D",      1, 4,  "Z 0 H C", exec_alu_reg),
    op!(0x8B, "ADC A,E",      1, 4,  "Z 0 H C", exec_alu_reg),
    op!(0x8C, "ADC A,H",      1, 4,  "Z 0 H C", exec_alu_reg),
    op!(0x8D, "ADC A,L",      1, 4,  "Z 0 H C", exec_alu_reg),
    op!(0x8E, "ADC A,(HL)",   1, 8,  "Z 0 H C", exec_alu_reg),
    op!(0x8F, "ADC A,A",      1, 4,  "Z 0 H C", exec_alu_reg),
    // 0x90
    op!(0x90, "SUB B",        1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0x91, "SUB C",        1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0x92, "SUB D",        1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0x93, "SUB E",        1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0x94, "SUB H",        1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0x95, "SUB L",        1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0x96, "SUB (HL)",     1, 8,  "Z 1 H C", exec_alu_reg),
    op!(0x97, "SUB A",        1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0x98, "SBC A,B",      1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0x99, "SBC A,C",      1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0x9A, "SBC A,D",      1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0x9B, "SBC A,E",      1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0x9C, "SBC A,H",      1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0x9D, "SBC A,L",      1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0x9E, "SBC A,(HL)",   1, 8,  "Z 1 H C", exec_alu_reg),
    op!(0x9F, "SBC A,A",      1, 4,  "Z 1 H C", exec_alu_reg),
    // 0xA0
    op!(0xA0, "AND B",        1, 4,  "Z 0 1 0", exec_alu_reg),
    op!(0xA1, "AND C",        1, 4,  "Z 0 1 0", exec_alu_reg),
    op!(0xA2, "AND D",        1, 4,  "Z 0 1 0", exec_alu_reg),
    op!(0xA3, "AND E",        1, 4,  "Z 0 1 0", exec_alu_reg),
    op!(0xA4, "AND H",        1, 4,  "Z 0 1 0", exec_alu_reg),
    op!(0xA5, "AND L",        1, 4,  "Z 0 1 0", exec_alu_reg),
    op!(0xA6, "AND (HL)",     1, 8,  "Z 0 1 0", exec_alu_reg),
    op!(0xA7, "AND A",        1, 4,  "Z 0 1 0", exec_alu_reg),
    op!(0xA8, "XOR B",        1, 4,  "Z 0 0 0", exec_alu_reg),
    op!(0xA9, "XOR C",        1, 4,  "Z 0 0 0", exec_alu_reg),
    op!(0xAA, "XOR D",        1, 4,  "Z 0 0 0", exec_alu_reg),
    op!(0xAB, "XOR E",        1, 4,  "Z 0 0 0", exec_alu_reg),
    op!(0xAC, "XOR H",        1, 4,  "Z 0 0 0", exec_alu_reg),
    op!(0xAD, "XOR L",        1, 4,  "Z 0 0 0", exec_alu_reg),
    op!(0xAE, "XOR (HL)",     1, 8,  "Z 0 0 0", exec_alu_reg),
    op!(0xAF, "XOR A",        1, 4,  "Z 0 0 0", exec_alu_reg),
    // 0xB0
    op!(0xB0, "OR B",         1, 4,  "Z 0 0 0", exec_alu_reg),
    op!(0xB1, "OR C",         1, 4,  "Z 0 0 0", exec_alu_reg),
    op!(0xB2, "OR D",         1, 4,  "Z 0 0 0", exec_alu_reg),
    op!(0xB3, "OR E",         1, 4,  "Z 0 0 0", exec_alu_reg),
    op!(0xB4, "OR H",         1, 4,  "Z 0 0 0", exec_alu_reg),
    op!(0xB5, "OR L",         1, 4,  "Z 0 0 0", exec_alu_reg),
    op!(0xB6, "OR (HL)",      1, 8,  "Z 0 0 0", exec_alu_reg),
    op!(0xB7, "OR A",         1, 4,  "Z 0 0 0", exec_alu_reg),
    op!(0xB8, "CP B",         1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0xB9, "CP C",         1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0xBA, "CP D",         1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0xBB, "CP E",         1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0xBC, "CP H",         1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0xBD, "CP L",         1, 4,  "Z 1 H C", exec_alu_reg),
    op!(0xBE, "CP (HL)",      1, 8,  "Z 1 H C", exec_alu_reg),
    op!(0xBF, "CP A",         1, 4,  "Z 1 H C", exec_alu_reg),
    // 0xC0
    op!(0xC0, "RET NZ",       1, 8/20,  "- - - -", exec_ret_cc),
    op!(0xC1, "POP BC",       1, 12, "- - - -", exec_pop),
    op!(0xC2, "JP NZ,a16",    3, 12/16, "- - - -", exec_jp_cc),
    op!(0xC3, "JP a16",       3, 16, "- - - -", exec_jp),
    op!(0xC4, "CALL NZ,a16",  3, 12/24, "- - - -", exec_call_cc),
    op!(0xC5, "PUSH BC",      1, 16, "- - - -", exec_push),
    op!(0xC6, "ADD A,d8",     2, 8,  "Z 0 H C", exec_alu_imm),
    op!(0xC7, "RST 00H",      1, 16, "- - - -", exec_rst),
    op!(0xC8, "RET Z",        1, 8/20,  "- - - -", exec_ret_cc),
    op!(0xC9, "RET",          1, 16, "- - - -", exec_ret),
    op!(0xCA, "JP Z,a16",     3, 12/16, "- - - -", exec_jp_cc),
    op!(0xCB, "PREFIX CB",    1, 4,  "- - - -", prefix),
    op!(0xCC, "CALL Z,a16",   3, 12/24, "- - - -", exec_call_cc),
    op!(0xCD, "CALL a16",     3, 24, "- - - -", exec_call),
    op!(0xCE, "ADC A,d8",     2, 8,  "Z 0 H C", exec_alu_imm),
    op!(0xCF, "RST 08H",      1, 16, "- - - -", exec_rst),
    // 0xD0
    op!(0xD0, "RET NC",       1, 8/20,  "- - - -", exec_ret_cc),
    op!(0xD1, "POP DE",       1, 12, "- - - -", exec_pop),
    op!(0xD2, "JP NC,a16",    3, 12/16, "- - - -", exec_jp_cc),
    Instruction::illegal(0xD3),
    op!(0xD4, "CALL NC,a16",  3, 12/24, "- - - -", exec_call_cc),
    op!(0xD5, "PUSH DE",      1, 16, "- - - -", exec_push),
    op!(0xD6, "SUB d8",       2, 8,  "Z 1 H C", exec_alu_imm),
    op!(0xD7, "RST 10H",      1, 16, "- - - -", exec_rst),
    op!(0xD8, "RET C",        1, 8/20,  "- - - -", exec_ret_cc),
    op!(0xD9, "RETI",         1, 16, "- - - -", exec_reti),
    op!(0xDA, "JP C,a16",     3, 12/16, "- - - -", exec_jp_cc),
    Instruction::illegal(0xDB),
    op!(0xDC, "CALL C,a16",   3, 12/24, "- - - -", exec_call_cc),
    Instruction::illegal(0xDD),
    op!(0xDE, "SBC A,d8",     2, 8,  "Z 1 H C", exec_alu_imm),
    op!(0xDF, "RST 18H",      1, 16, "- - - -", exec_rst),
    // 0xE0
    op!(0xE0, "LDH (a8),A",   2, 12, "- - - -", exec_ldh_a8),
    op!(0xE1, "POP HL",       1, 12, "- - - -", exec_pop),
    op!(0xE2, "LD (C),A",     1, 8,  "- - - -", exec_ldh_c),
    Instruction::illegal(0xE3),
    Instruction::illegal(0xE4),
    op!(0xE5, "PUSH HL",      1, 16, "- - - -", exec_push),
    op!(0xE6, "AND d8",       2, 8,  "Z 0 1 0", exec_alu_imm),
    op!(0xE7, "RST 20H",      1, 16, "- - - -", exec_rst),
    op!(0xE8, "ADD SP,r8",    2, 16, "0 0 H C", exec_add_sp_r8),
    op!(0xE9, "JP (HL)",      1, 4,  "- - - -", exec_jp_hl),
    op!(0xEA, "LD (a16),A",   3, 16, "- - - -", exec_ld_a16_a),
    Instruction::illegal(0xEB),
    Instruction::illegal(0xEC),
    Instruction::illegal(0xED),
    op!(0xEE, "XOR d8",       2, 8,  "Z 0 0 0", exec_alu_imm),
    op!(0xEF, "RST 28H",      1, 16, "- - - -", exec_rst),
    // 0xF0
    op!(0xF0, "LDH A,(a8)",   2, 12, "- - - -", exec_ldh_a8),
    op!(0xF1, "POP AF",       1, 12, "Z N H C", exec_pop),
    op!(0xF2, "LD A,(C)",     1, 8,  "- - - -", exec_ldh_c),
    op!(0xF3, "DI",           1, 4,  "- - - -", exec_di),
    Instruction::illegal(0xF4),
    op!(0xF5, "PUSH AF",      1, 16, "- - - -", exec_push),
    op!(0xF6, "OR d8",        2, 8,  "Z 0 0 0", exec_alu_imm),
    op!(0xF7, "RST 30H",      1, 16, "- - - -", exec_rst),
    op!(0xF8, "LD HL,SP+r8",  2, 12, "0 0 H C", exec_ld_hl_sp_r8),
    op!(0xF9, "LD SP,HL",     1, 8,  "- - - -", exec_ld_sp_hl),
    op!(0xFA, "LD A,(a16)",   3, 16, "- - - -", exec_ld_a16_a),
    op!(0xFB, "EI",           1, 4,  "- - - -", exec_ei),
    Instruction::illegal(0xFC),
    Instruction::illegal(0xFD),
    op!(0xFE, "CP d8",        2, 8,  "Z 1 H C", exec_alu_imm),
    op!(0xFF, "RST 38H",      1, 16, "- - - -", exec_rst),
];
