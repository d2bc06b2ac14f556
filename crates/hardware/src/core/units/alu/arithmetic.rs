//! ALU arithmetic operations.
//!
//! Implements wrapping addition, subtraction and multiplication, and unsigned
//! division. Division by zero yields all ones and logs a warning.

/// Wrapping addition.
#[inline]
pub const fn add(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}

/// Wrapping subtraction.
#[inline]
pub const fn sub(a: u32, b: u32) -> u32 {
    a.wrapping_sub(b)
}

/// Low 32 bits of the product.
#[inline]
pub const fn mul(a: u32, b: u32) -> u32 {
    a.wrapping_mul(b)
}

/// Unsigned division.
///
/// # Arguments
///
/// * `a` - Dividend.
/// * `b` - Divisor.
///
/// # Returns
///
/// The quotient, or `u32::MAX` when `b` is zero.
pub fn div(a: u32, b: u32) -> u32 {
    a.checked_div(b).unwrap_or_else(|| {
        tracing::warn!(dividend = a, "division by zero");
        u32::MAX
    })
}
