//! Control/Status Register (CSTR).
//!
//! CSTR is a 16-bit register packing the condition flags and the core's mode
//! bits. Bit positions:
//!
//! | Bit | Meaning |
//! |-----|---------|
//! | 0   | Z (zero) |
//! | 1   | N (negative) |
//! | 2   | O (overflow) |
//! | 3   | C (carry) |
//! | 6   | I (interrupt enable) |
//! | 9   | PRIV (1 = kernel) |
//! | 13  | IO-halt (HLT blocks for I/O instead of halting) |
//! | 14  | AVE (vector extension enabled) |
//! | 15  | commit-pending marker, only in a latched `MVCSTR` value |

use std::fmt;

use crate::core::arch::mode::PrivilegeLevel;

/// Zero flag.
pub const CSTR_Z: u16 = 1 << 0;
/// Negative flag.
pub const CSTR_N: u16 = 1 << 1;
/// Overflow flag.
pub const CSTR_O: u16 = 1 << 2;
/// Carry flag.
pub const CSTR_C: u16 = 1 << 3;
/// Mask of the four condition flags.
pub const CSTR_FLAGS: u16 = 0xF;
/// Interrupt-enable bit.
pub const CSTR_I: u16 = 1 << 6;
/// Privilege bit (set = kernel).
pub const CSTR_PRIV: u16 = 1 << 9;
/// IO-halt bit.
pub const CSTR_IO_HALT: u16 = 1 << 13;
/// Vector-extension-enabled bit.
pub const CSTR_AVE: u16 = 1 << 14;
/// Commit-pending marker for the deferred `MVCSTR` write.
pub const CSTR_COMMIT_PENDING: u16 = 1 << 15;

/// Typed view over a CSTR value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ControlStatus(pub u16);

impl ControlStatus {
    /// A CSTR with only the kernel privilege bit set.
    pub const KERNEL: Self = Self(CSTR_PRIV);

    /// Returns the raw register value.
    #[inline(always)]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[inline(always)]
    const fn bit(self, mask: u16) -> bool {
        self.0 & mask != 0
    }

    #[inline(always)]
    const fn with(self, mask: u16, on: bool) -> Self {
        if on { Self(self.0 | mask) } else { Self(self.0 & !mask) }
    }

    /// Zero flag.
    pub const fn zero(self) -> bool {
        self.bit(CSTR_Z)
    }

    /// Negative flag.
    pub const fn negative(self) -> bool {
        self.bit(CSTR_N)
    }

    /// Overflow flag.
    pub const fn overflow(self) -> bool {
        self.bit(CSTR_O)
    }

    /// Carry flag.
    pub const fn carry(self) -> bool {
        self.bit(CSTR_C)
    }

    /// Interrupt-enable bit.
    pub const fn interrupts_enabled(self) -> bool {
        self.bit(CSTR_I)
    }

    /// IO-halt bit.
    pub const fn io_halt(self) -> bool {
        self.bit(CSTR_IO_HALT)
    }

    /// Vector-extension-enabled bit.
    pub const fn vector_enabled(self) -> bool {
        self.bit(CSTR_AVE)
    }

    /// Current privilege level.
    pub const fn privilege(self) -> PrivilegeLevel {
        if self.bit(CSTR_PRIV) {
            PrivilegeLevel::Kernel
        } else {
            PrivilegeLevel::User
        }
    }

    /// Returns a copy with the privilege bit set for `level`.
    pub const fn with_privilege(self, level: PrivilegeLevel) -> Self {
        self.with(CSTR_PRIV, matches!(level, PrivilegeLevel::Kernel))
    }

    /// Returns a copy with the interrupt-enable bit set or cleared.
    pub const fn with_interrupts(self, on: bool) -> Self {
        self.with(CSTR_I, on)
    }

    /// Returns a copy with the IO-halt bit set or cleared.
    pub const fn with_io_halt(self, on: bool) -> Self {
        self.with(CSTR_IO_HALT, on)
    }

    /// Returns a copy whose low four bits are replaced by the packed flags.
    ///
    /// # Arguments
    ///
    /// * `c`, `o`, `n`, `z` - Carry, overflow, negative and zero.
    pub const fn with_flags(self, c: bool, o: bool, n: bool, z: bool) -> Self {
        Self((self.0 & !CSTR_FLAGS) | pack_flags(c, o, n, z))
    }
}

/// Packs the four condition flags into their CSTR bit positions.
pub const fn pack_flags(c: bool, o: bool, n: bool, z: bool) -> u16 {
    ((c as u16) << 3) | ((o as u16) << 2) | ((n as u16) << 1) | (z as u16)
}

impl fmt::Display for ControlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |on: bool, c: char| if on { c } else { '-' };
        write!(
            f,
            "{:#06x} [{}{}{}{} {}{}]",
            self.0,
            flag(self.carry(), 'C'),
            flag(self.overflow(), 'O'),
            flag(self.negative(), 'N'),
            flag(self.zero(), 'Z'),
            flag(self.interrupts_enabled(), 'I'),
            if self.bit(CSTR_PRIV) { 'K' } else { 'U' },
        )
    }
}
