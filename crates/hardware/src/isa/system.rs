//! AruXI System Sub-Opcodes.
//!
//! Instructions in the `SYS` group (primary byte `0xBE`) carry a 5-bit
//! sub-opcode in bits 23-19. Every sub-opcode except `SYSCALL` requires
//! kernel privilege.

use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::Opcode;

/// Raise a synchronous exception numbered by `x0`.
pub const SUB_SYSCALL: u32 = 0b00010;
/// Halt the core (plain or IO-blocking, selected by the CSTR IO-halt bit).
pub const SUB_HLT: u32 = 0b00110;
/// Set the interrupt-enable bit.
pub const SUB_SI: u32 = 0b01010;
/// Clear the interrupt-enable bit.
pub const SUB_DI: u32 = 0b01110;
/// Return from exception.
pub const SUB_ERET: u32 = 0b10010;
/// Load the instruction pointer into a register.
pub const SUB_LDIR: u32 = 0b10110;
/// Move a register into CSTR (deferred commit).
pub const SUB_MVCSTR: u32 = 0b11010;
/// Load CSTR into a register.
pub const SUB_LDCSTR: u32 = 0b11110;
/// Load ESR into a register.
pub const SUB_RESR: u32 = 0b11111;

/// Resolves the sub-opcode of a `SYS` instruction word.
///
/// # Arguments
///
/// * `word` - The raw instruction word.
///
/// # Returns
///
/// The system opcode, or `Opcode::Error` for an unassigned sub-opcode.
pub fn decode_sub_opcode(word: u32) -> Opcode {
    match word.sub_opcode() {
        SUB_SYSCALL => Opcode::Syscall,
        SUB_HLT => Opcode::Hlt,
        SUB_SI => Opcode::Si,
        SUB_DI => Opcode::Di,
        SUB_ERET => Opcode::Eret,
        SUB_LDIR => Opcode::Ldir,
        SUB_MVCSTR => Opcode::Mvcstr,
        SUB_LDCSTR => Opcode::Ldcstr,
        SUB_RESR => Opcode::Resr,
        _ => Opcode::Error,
    }
}

/// Returns true when the opcode may only execute with kernel privilege.
pub const fn is_privileged(op: Opcode) -> bool {
    op.is_system() && !matches!(op, Opcode::Syscall)
}
