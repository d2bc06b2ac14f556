//! Branch Conditions.
//!
//! The `B` instruction carries a 4-bit condition evaluated against the
//! {C, O, N, Z} flags in CSTR. The table is fixed; encodings 12-15 never hold.

use crate::core::arch::cstr::ControlStatus;

/// Symbolic branch conditions, in encoding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    /// Equal (Z set).
    Eq = 0,
    /// Not equal (Z clear).
    Ne = 1,
    /// Overflow (O set).
    Ov = 2,
    /// No overflow (O clear).
    Nv = 3,
    /// Minus (N set).
    Mi = 4,
    /// Plus or zero (N clear).
    Pz = 5,
    /// Carry clear.
    Cc = 6,
    /// Carry set.
    Cs = 7,
    /// Greater than (N == O and Z clear).
    Gt = 8,
    /// Greater or equal (N == O).
    Ge = 9,
    /// Less than (N != O).
    Lt = 10,
    /// Less or equal (N != O or Z set).
    Le = 11,
}

impl Condition {
    /// Decodes a 4-bit condition field.
    ///
    /// # Returns
    ///
    /// `None` for the unassigned encodings 12-15.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        Some(match bits {
            0 => Self::Eq,
            1 => Self::Ne,
            2 => Self::Ov,
            3 => Self::Nv,
            4 => Self::Mi,
            5 => Self::Pz,
            6 => Self::Cc,
            7 => Self::Cs,
            8 => Self::Gt,
            9 => Self::Ge,
            10 => Self::Lt,
            11 => Self::Le,
            _ => return None,
        })
    }

    /// Evaluates the condition against the flags held in `cstr`.
    pub const fn holds(self, cstr: ControlStatus) -> bool {
        let (c, o, n, z) = (cstr.carry(), cstr.overflow(), cstr.negative(), cstr.zero());
        match self {
            Self::Eq => z,
            Self::Ne => !z,
            Self::Ov => o,
            Self::Nv => !o,
            Self::Mi => n,
            Self::Pz => !n,
            Self::Cc => !c,
            Self::Cs => c,
            Self::Gt => n == o && !z,
            Self::Ge => n == o,
            Self::Lt => n != o,
            Self::Le => n != o || z,
        }
    }
}

/// Evaluates a raw condition field; unassigned encodings are false.
pub const fn evaluate(bits: u32, cstr: ControlStatus) -> bool {
    match Condition::from_bits(bits) {
        Some(cond) => cond.holds(cstr),
        None => false,
    }
}
