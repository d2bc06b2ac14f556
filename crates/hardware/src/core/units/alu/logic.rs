//! ALU logical operations.
//!
//! Implements bitwise OR, AND, XOR and NOT.

/// Bitwise OR.
#[inline]
pub const fn or(a: u32, b: u32) -> u32 {
    a | b
}

/// Bitwise AND.
#[inline]
pub const fn and(a: u32, b: u32) -> u32 {
    a & b
}

/// Bitwise XOR.
#[inline]
pub const fn xor(a: u32, b: u32) -> u32 {
    a ^ b
}

/// Bitwise NOT. Takes no second operand.
#[inline]
pub const fn inv(a: u32) -> u32 {
    !a
}
