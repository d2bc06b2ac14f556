//! Condition-flag derivation.
//!
//! The formulas below are an external contract with guest software and the
//! branch-condition table. They are not a textbook two's-complement overflow
//! test and must be kept as written:
//!
//! - Z: `res == 0`; N: bit 31 of `res`.
//! - C (add): `res < a`. C (subtract): `a >= b`, unsigned.
//! - O (add): both operands non-negative with `r <= 0`, or both negative with `r >= 0`.
//! - O (subtract): `a > 0, b < 0, r > 0`, or (`a < b` unsigned) `a < 0, b > 0, r < 0`.
//!
//! where `a`, `b` and `r` are the signed views of the operands and the wrapping result.

use crate::core::pipeline::signals::AluOp;

/// The four condition flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConditionFlags {
    /// Carry.
    pub c: bool,
    /// Overflow.
    pub o: bool,
    /// Negative.
    pub n: bool,
    /// Zero.
    pub z: bool,
}

impl ConditionFlags {
    /// Derives the flags for an operation's result.
    ///
    /// # Arguments
    ///
    /// * `op`  - The ALU operation; `Minus` selects the subtract formulas, all others the add formulas.
    /// * `a`   - First operand.
    /// * `b`   - Second operand.
    /// * `res` - The ALU result.
    pub const fn derive(op: AluOp, a: u32, b: u32, res: u32) -> Self {
        let sa = a as i32;
        let sb = b as i32;
        let (c, o) = if op.is_subtract() {
            let sr = sa.wrapping_sub(sb);
            let c = a >= b;
            let o = (sa > 0 && sb < 0 && sr > 0) || (!c && sa < 0 && sb > 0 && sr < 0);
            (c, o)
        } else {
            let sr = sa.wrapping_add(sb);
            let o = (sa >= 0 && sb >= 0 && sr <= 0) || (sa < 0 && sb < 0 && sr >= 0);
            (res < a, o)
        };
        Self {
            c,
            o,
            n: res & 0x8000_0000 != 0,
            z: res == 0,
        }
    }
}
