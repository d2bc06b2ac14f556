//! ALU shift operations.
//!
//! Implements shift-left logical, shift-right logical and shift-right
//! arithmetic. Shift amounts use the low five bits of operand B.

/// Bit mask for the shift amount (0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Shift left logical.
#[inline]
pub const fn lsl(a: u32, b: u32) -> u32 {
    a << (b & SHAMT_MASK)
}

/// Shift right logical.
#[inline]
pub const fn lsr(a: u32, b: u32) -> u32 {
    a >> (b & SHAMT_MASK)
}

/// Shift right arithmetic, replicating the sign bit.
#[inline]
pub const fn asr(a: u32, b: u32) -> u32 {
    ((a as i32) >> (b & SHAMT_MASK)) as u32
}
