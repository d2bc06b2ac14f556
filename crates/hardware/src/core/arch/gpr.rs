//! AruXI General-Purpose Register File.
//!
//! This module implements the general-purpose registers. It performs the following:
//! 1. **Storage:** Maintains 31 integer registers (`x0`-`x30`) and a dedicated stack pointer.
//! 2. **Aliasing:** Routes index 31 to the stack pointer.
//! 3. **Invariant Enforcement:** Discards writes to the read-only register `x30`.
//! 4. **Debugging:** Provides utilities for dumping the complete register state.

use crate::common::constants::{GPR_COUNT, READ_ONLY_INDEX, SP_INDEX};
use crate::isa::abi;

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; GPR_COUNT],
    sp: u32,
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Index 31 reads the stack pointer.
    ///
    /// # Returns
    ///
    /// The 32-bit register value.
    #[inline(always)]
    pub fn read(&self, idx: usize) -> u32 {
        if idx == SP_INDEX { self.sp } else { self.regs[idx & 0x1F] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `x30` are silently dropped.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Index 31 writes the stack pointer.
    /// * `val` - The 32-bit value to write.
    #[inline(always)]
    pub fn write(&mut self, idx: usize, val: u32) {
        match idx {
            READ_ONLY_INDEX => {}
            SP_INDEX => self.sp = val,
            _ => self.regs[idx & 0x1F] = val,
        }
    }

    /// Returns the stack pointer.
    pub const fn sp(&self) -> u32 {
        self.sp
    }

    /// Sets the stack pointer.
    pub const fn set_sp(&mut self, val: u32) {
        self.sp = val;
    }

    /// Returns a copy of `x0`-`x30`.
    pub const fn snapshot(&self) -> [u32; GPR_COUNT] {
        self.regs
    }

    /// Dumps all registers to the trace log.
    pub fn dump(&self) {
        for i in (0..GPR_COUNT).step_by(2) {
            let next = if i + 1 < GPR_COUNT { self.regs[i + 1] } else { self.sp };
            tracing::trace!(
                "{:<8}={:#010x} {:<8}={:#010x}",
                abi::name(i),
                self.regs[i],
                abi::name(i + 1),
                next
            );
        }
    }
}
