//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. It is a
//! pure function of the operation and two 32-bit operands; condition flags are
//! derived separately and only for instructions that set condition codes.
//!
//! Operations are organized into submodules by category; [`Alu::execute`]
//! routes every [`AluOp`] to one of their functions:
//! - [`arithmetic`]: add, sub, mul, div
//! - [`logic`]:      or, and, xor, inv
//! - [`shifts`]:     lsl, lsr, asr
//! - [`flags`]:      C/O/N/Z derivation

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Condition-flag derivation.
pub mod flags;

/// Bitwise logical operations (or, and, xor, not).
pub mod logic;

/// Shift operations (lsl, lsr, asr).
pub mod shifts;

pub use flags::ConditionFlags;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - First operand.
    /// * `b`  - Second operand (also the shift amount).
    ///
    /// # Returns
    ///
    /// The 32-bit result. `AluOp::Pass` yields 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use aruxi_core::core::units::alu::Alu;
    /// use aruxi_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Plus, 0xFFFF_FFFF, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Asr, 0x8000_0000, 4), 0xF800_0000);
    /// assert_eq!(Alu::execute(AluOp::Pass, 7, 9), 0);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Pass => 0,
            AluOp::Plus => arithmetic::add(a, b),
            AluOp::Minus => arithmetic::sub(a, b),
            AluOp::Mul => arithmetic::mul(a, b),
            AluOp::Div => arithmetic::div(a, b),
            AluOp::Or => logic::or(a, b),
            AluOp::And => logic::and(a, b),
            AluOp::Xor => logic::xor(a, b),
            AluOp::Inv => logic::inv(a),
            AluOp::Lsl => shifts::lsl(a, b),
            AluOp::Lsr => shifts::lsr(a, b),
            AluOp::Asr => shifts::asr(a, b),
        }
    }

    /// Executes an operation and derives the condition flags of its result.
    ///
    /// # Returns
    ///
    /// The result and the flags computed with the add or subtract formulas.
    pub fn execute_with_flags(op: AluOp, a: u32, b: u32) -> (u32, ConditionFlags) {
        let res = Self::execute(op, a, b);
        (res, ConditionFlags::derive(op, a, b, res))
    }
}
