//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and structures for decoding
//! AruXI instruction fields from 32-bit instruction words.
//!
//! Field layout (bit ranges inclusive):
//! - opcode 31-24, with bit 24 selecting register form for arithmetic groups
//! - rd 4-0, rr 9-5, rs 14-10
//! - I-type imm14 23-10, M-type simm9 23-15
//! - Bi-type simm24 23-0, Bc-type simm19 23-5 with condition 3-0
//! - S-type sub-opcode 23-19

use crate::isa::opcodes::Opcode;

/// Bit mask for a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;

/// Shift of the primary opcode byte.
pub const OPCODE_SHIFT: u32 = 24;

/// Bit selecting the register form of an arithmetic or logic opcode.
pub const MODE_BIT: u32 = 24;

/// Shift of the `rr` (secondary source) field.
pub const RR_SHIFT: u32 = 5;

/// Shift of the `rs` (primary source) field.
pub const RS_SHIFT: u32 = 10;

/// Shift of the I-type immediate.
pub const IMM14_SHIFT: u32 = 10;

/// Shift of the M-type immediate.
pub const SIMM9_SHIFT: u32 = 15;

/// Shift of the Bc-type immediate.
pub const SIMM19_SHIFT: u32 = 5;

/// Shift of the S-type sub-opcode.
pub const SUB_OPCODE_SHIFT: u32 = 19;

/// Bit mask for the condition field.
pub const COND_MASK: u32 = 0xF;

/// Instruction format classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InstrType {
    /// No format (invalid or unencodable opcodes).
    #[default]
    None,
    /// Register-immediate arithmetic or logic.
    I,
    /// Register-register arithmetic or logic.
    R,
    /// Memory access with base register and offset or index.
    M,
    /// Unconditional branch by immediate offset.
    Bi,
    /// Unconditional branch to a register.
    Bu,
    /// Conditional branch by immediate offset.
    Bc,
    /// System instruction.
    S,
}

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the primary opcode byte (bits 31-24).
    fn opcode_byte(&self) -> u8;

    /// Returns true when the register-form bit (24) is set.
    fn mode_bit(&self) -> bool;

    /// Extracts the destination register field (bits 4-0).
    fn rd(&self) -> usize;

    /// Extracts the secondary source register field (bits 9-5).
    fn rr(&self) -> usize;

    /// Extracts the primary source register field (bits 14-10).
    fn rs(&self) -> usize;

    /// Extracts the system sub-opcode field (bits 23-19).
    fn sub_opcode(&self) -> u32;

    /// Extracts the branch condition field (bits 3-0).
    fn cond(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode_byte(&self) -> u8 {
        (self >> OPCODE_SHIFT) as u8
    }

    #[inline(always)]
    fn mode_bit(&self) -> bool {
        (self >> MODE_BIT) & 1 == 1
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        (self & REG_MASK) as usize
    }

    #[inline(always)]
    fn rr(&self) -> usize {
        ((self >> RR_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn sub_opcode(&self) -> u32 {
        (self >> SUB_OPCODE_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn cond(&self) -> u32 {
        self & COND_MASK
    }
}

/// A fully decoded instruction.
///
/// `opcode` is the resolved opcode: for the `SYS` group it is the sub-opcode
/// (`SYSCALL`, `HLT`, ...), or `Opcode::Error` when either table rejects the word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// The raw 32-bit word.
    pub raw: u32,
    /// Resolved opcode.
    pub opcode: Opcode,
    /// Instruction format.
    pub itype: InstrType,
    /// Decoded immediate (sign-extended where the format is signed).
    pub imm: i32,
    /// Destination register index.
    pub rd: usize,
    /// Primary source register index.
    pub rs: usize,
    /// Secondary source register index.
    pub rr: usize,
    /// Raw condition field for `B`.
    pub cond: u32,
}
