//! AruXI architectural state.
//!
//! This module contains the architectural elements visible to guest software.
//! It includes the following modules:
//! 1. **CSTR:** The control/status register bitfield.
//! 2. **GPRs:** General-purpose register file with the stack-pointer alias.
//! 3. **Modes:** Kernel and user privilege levels.
//! 4. **Process State:** The fixed-layout record shared with the guest kernel.
//! 5. **Traps:** Exception numbers, exception types and core status.

/// Control/status register bitfield.
pub mod cstr;

/// General-Purpose Register file implementation.
pub mod gpr;

/// Privilege level definitions.
pub mod mode;

/// Process-state record layout.
pub mod process;

/// Exceptions and core status.
pub mod trap;
