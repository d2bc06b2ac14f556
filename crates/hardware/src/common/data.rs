//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Permission Validation:** Selecting the fetch, read or write validator in the access engine.
//! 2. **Fault Reporting:** Recording which access path produced a kernel-fatal violation.

use std::fmt;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// Validated against the executable windows before the word is read.
    Fetch,

    /// Data read access (loads).
    Read,

    /// Data write access (stores).
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::Read => "read",
            Self::Write => "write",
        };
        f.write_str(name)
    }
}
