//! Pipeline control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **Operation Selection:** Maps every opcode to its fixed ALU operation.
//! 2. **Memory Control:** Specifies access widths and load extension.
//! 3. **Write-Back Control:** Selects register writes, memory-to-register and condition-code updates.

use crate::isa::opcodes::Opcode;

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Produces zero. Used by every opcode without an arithmetic role.
    #[default]
    Pass,

    /// Addition (also address generation and `CALL` return address).
    Plus,

    /// Subtraction (also `CMP`).
    Minus,

    /// Multiplication (low 32 bits).
    Mul,

    /// Unsigned division.
    Div,

    /// Bitwise OR.
    Or,

    /// Bitwise AND.
    And,

    /// Bitwise XOR.
    Xor,

    /// Bitwise NOT of operand A.
    Inv,

    /// Shift left logical.
    Lsl,

    /// Shift right logical.
    Lsr,

    /// Shift right arithmetic.
    Asr,
}

impl AluOp {
    /// Returns the fixed ALU operation for an opcode.
    ///
    /// `SMUL` and `SDIV` share the unsigned `MUL`/`DIV` operations.
    pub const fn for_opcode(op: Opcode) -> Self {
        match op {
            Opcode::Add
            | Opcode::Adds
            | Opcode::Ld
            | Opcode::Ldb
            | Opcode::Ldbs
            | Opcode::Ldbz
            | Opcode::Ldh
            | Opcode::Ldhs
            | Opcode::Ldhz
            | Opcode::Str
            | Opcode::Strb
            | Opcode::Strh
            | Opcode::Mv
            | Opcode::Call => Self::Plus,

            Opcode::Sub | Opcode::Subs | Opcode::Mvn | Opcode::Cmp => Self::Minus,

            Opcode::Or => Self::Or,
            Opcode::And => Self::And,
            Opcode::Xor => Self::Xor,
            Opcode::Not => Self::Inv,
            Opcode::Lsl => Self::Lsl,
            Opcode::Lsr => Self::Lsr,
            Opcode::Asr => Self::Asr,
            Opcode::Mul | Opcode::Smul => Self::Mul,
            Opcode::Div | Opcode::Sdiv => Self::Div,

            Opcode::Nop
            | Opcode::Sxb
            | Opcode::Sxh
            | Opcode::Uxb
            | Opcode::Uxh
            | Opcode::Ub
            | Opcode::Ubr
            | Opcode::B
            | Opcode::Ret
            | Opcode::Addf
            | Opcode::Subf
            | Opcode::Mulf
            | Opcode::Divf
            | Opcode::Ldf
            | Opcode::Strf
            | Opcode::Mvf
            | Opcode::Sys
            | Opcode::Syscall
            | Opcode::Hlt
            | Opcode::Si
            | Opcode::Di
            | Opcode::Eret
            | Opcode::Ldir
            | Opcode::Mvcstr
            | Opcode::Ldcstr
            | Opcode::Resr
            | Opcode::Error => Self::Pass,
        }
    }

    /// Returns true for the subtraction-like operation (selects the subtract flag formulas).
    pub const fn is_subtract(self) -> bool {
        matches!(self, Self::Minus)
    }
}

/// Memory access widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemWidth {
    /// 1 byte.
    Byte = 1,
    /// 2 bytes.
    Half = 2,
    /// 4 bytes.
    Word = 4,
}

impl MemWidth {
    /// Returns the access width for a load or store opcode.
    pub const fn for_opcode(op: Opcode) -> Option<Self> {
        match op {
            Opcode::Ldb | Opcode::Ldbs | Opcode::Ldbz | Opcode::Strb => Some(Self::Byte),
            Opcode::Ldh | Opcode::Ldhs | Opcode::Ldhz | Opcode::Strh => Some(Self::Half),
            Opcode::Ld | Opcode::Str => Some(Self::Word),
            _ => None,
        }
    }

    /// Returns the width in bytes.
    pub const fn bytes(self) -> u32 {
        self as u32
    }
}

/// Control signals produced by decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Write the memory-stage result to `rd`.
    pub reg_write: bool,
    /// The memory-stage result is the loaded value rather than the ALU result.
    pub mem_to_reg: bool,
    /// The instruction stores to memory.
    pub mem_write: bool,
    /// Update the condition flags from the ALU.
    pub set_cc: bool,
    /// Load zero-extends instead of sign-extending.
    pub zero_extend: bool,
    /// Width of the memory transfer, if any.
    pub mem_width: Option<MemWidth>,
    /// ALU operation.
    pub alu_op: AluOp,
}

impl ControlSignals {
    /// Derives the control signals for a resolved opcode.
    ///
    /// # Arguments
    ///
    /// * `op`         - The resolved opcode.
    /// * `arithmetic` - True for I-type and R-type instructions, which always write `rd`.
    pub const fn for_opcode(op: Opcode, arithmetic: bool) -> Self {
        let special_write = matches!(
            op,
            Opcode::Ldir | Opcode::Mvcstr | Opcode::Ldcstr | Opcode::Resr
        );
        Self {
            reg_write: arithmetic || op.is_load() || matches!(op, Opcode::Call) || special_write,
            mem_to_reg: op.is_load(),
            mem_write: op.is_store(),
            set_cc: matches!(op, Opcode::Adds | Opcode::Subs | Opcode::Cmp),
            zero_extend: matches!(op, Opcode::Ldbz | Opcode::Ldhz),
            mem_width: MemWidth::for_opcode(op),
            alu_op: AluOp::for_opcode(op),
        }
    }
}
