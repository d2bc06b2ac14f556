//! AruXI Primary Opcodes.
//!
//! Defines the closed opcode enumeration and the 256-entry table that maps the
//! top byte of an instruction word to an opcode. Bytes with no assigned
//! instruction map to [`Opcode::Error`].
//!
//! Several opcodes are assembler aliases (`NOP`, `CMP`, `MV`, `MVN`) that the
//! table never produces, and the float and extend opcodes have no encodings;
//! they are kept so every stage matches over the full set.

use std::fmt;

/// Every opcode known to the core, including the resolved `SYS` sub-opcodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Opcode {
    Nop,
    Mul,
    Smul,
    Div,
    Sdiv,
    Add,
    Adds,
    Sub,
    Subs,
    Or,
    And,
    Xor,
    Not,
    Lsl,
    Lsr,
    Asr,
    Cmp,
    Mv,
    Mvn,
    Sxb,
    Sxh,
    Uxb,
    Uxh,
    Ld,
    Ldb,
    Ldbs,
    Ldbz,
    Ldh,
    Ldhs,
    Ldhz,
    Str,
    Strb,
    Strh,
    Ub,
    Ubr,
    B,
    Call,
    Ret,
    Addf,
    Subf,
    Mulf,
    Divf,
    Ldf,
    Strf,
    Mvf,
    Sys,
    Syscall,
    Hlt,
    Si,
    Di,
    Eret,
    Ldir,
    Mvcstr,
    Ldcstr,
    Resr,
    /// Sentinel for bytes and sub-opcodes with no assigned instruction.
    #[default]
    Error,
}

/// Top-byte to opcode mapping.
pub static OPCODE_TABLE: [Opcode; 256] = build_table();

const fn build_table() -> [Opcode; 256] {
    let mut t = [Opcode::Error; 256];

    t[0x80] = Opcode::Add;
    t[0x81] = Opcode::Add;
    t[0x88] = Opcode::Adds;
    t[0x89] = Opcode::Adds;
    t[0x90] = Opcode::Sub;
    t[0x91] = Opcode::Sub;
    t[0x98] = Opcode::Subs;
    t[0x99] = Opcode::Subs;
    t[0xA0] = Opcode::Mul;
    t[0xA2] = Opcode::Smul;
    t[0xA8] = Opcode::Div;
    t[0xAA] = Opcode::Sdiv;

    t[0x40] = Opcode::Or;
    t[0x41] = Opcode::Or;
    t[0x42] = Opcode::And;
    t[0x43] = Opcode::And;
    t[0x44] = Opcode::Xor;
    t[0x45] = Opcode::Xor;
    t[0x46] = Opcode::Not;
    t[0x47] = Opcode::Not;
    t[0x48] = Opcode::Lsl;
    t[0x49] = Opcode::Lsl;
    t[0x4A] = Opcode::Lsr;
    t[0x4B] = Opcode::Lsr;
    t[0x4C] = Opcode::Asr;
    t[0x4D] = Opcode::Asr;

    t[0x14] = Opcode::Ld;
    t[0x34] = Opcode::Ldb;
    t[0x54] = Opcode::Ldbs;
    t[0x74] = Opcode::Ldbz;
    t[0x94] = Opcode::Ldh;
    t[0xB4] = Opcode::Ldhs;
    t[0xD4] = Opcode::Ldhz;
    t[0x1C] = Opcode::Str;
    t[0x3C] = Opcode::Strb;
    t[0x5C] = Opcode::Strh;

    t[0xC0] = Opcode::Ub;
    t[0xC2] = Opcode::Ubr;
    t[0xC4] = Opcode::B;
    t[0xC6] = Opcode::Call;
    t[0xC8] = Opcode::Ret;

    t[0xBE] = Opcode::Sys;

    t
}

impl Opcode {
    /// Looks up the opcode for the top byte of an instruction word.
    ///
    /// # Arguments
    ///
    /// * `byte` - Bits 31-24 of the instruction.
    ///
    /// # Returns
    ///
    /// The mapped opcode, or `Opcode::Error` for unassigned bytes.
    #[inline]
    pub fn from_byte(byte: u8) -> Self {
        OPCODE_TABLE[byte as usize]
    }

    /// Returns true for the load group (`LD` through `LDHZ`).
    pub const fn is_load(self) -> bool {
        matches!(
            self,
            Self::Ld | Self::Ldb | Self::Ldbs | Self::Ldbz | Self::Ldh | Self::Ldhs | Self::Ldhz
        )
    }

    /// Returns true for the store group (`STR`, `STRB`, `STRH`).
    pub const fn is_store(self) -> bool {
        matches!(self, Self::Str | Self::Strb | Self::Strh)
    }

    /// Returns true for the resolved `SYS` sub-opcodes.
    pub const fn is_system(self) -> bool {
        matches!(
            self,
            Self::Syscall
                | Self::Hlt
                | Self::Si
                | Self::Di
                | Self::Eret
                | Self::Ldir
                | Self::Mvcstr
                | Self::Ldcstr
                | Self::Resr
        )
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "nop",
            Self::Mul => "mul",
            Self::Smul => "smul",
            Self::Div => "div",
            Self::Sdiv => "sdiv",
            Self::Add => "add",
            Self::Adds => "adds",
            Self::Sub => "sub",
            Self::Subs => "subs",
            Self::Or => "or",
            Self::And => "and",
            Self::Xor => "xor",
            Self::Not => "not",
            Self::Lsl => "lsl",
            Self::Lsr => "lsr",
            Self::Asr => "asr",
            Self::Cmp => "cmp",
            Self::Mv => "mv",
            Self::Mvn => "mvn",
            Self::Sxb => "sxb",
            Self::Sxh => "sxh",
            Self::Uxb => "uxb",
            Self::Uxh => "uxh",
            Self::Ld => "ld",
            Self::Ldb => "ldb",
            Self::Ldbs => "ldbs",
            Self::Ldbz => "ldbz",
            Self::Ldh => "ldh",
            Self::Ldhs => "ldhs",
            Self::Ldhz => "ldhz",
            Self::Str => "str",
            Self::Strb => "strb",
            Self::Strh => "strh",
            Self::Ub => "ub",
            Self::Ubr => "ubr",
            Self::B => "b",
            Self::Call => "call",
            Self::Ret => "ret",
            Self::Addf => "addf",
            Self::Subf => "subf",
            Self::Mulf => "mulf",
            Self::Divf => "divf",
            Self::Ldf => "ldf",
            Self::Strf => "strf",
            Self::Mvf => "mvf",
            Self::Sys => "sys",
            Self::Syscall => "syscall",
            Self::Hlt => "hlt",
            Self::Si => "si",
            Self::Di => "di",
            Self::Eret => "eret",
            Self::Ldir => "ldir",
            Self::Mvcstr => "mvcstr",
            Self::Ldcstr => "ldcstr",
            Self::Resr => "resr",
            Self::Error => "<error>",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
