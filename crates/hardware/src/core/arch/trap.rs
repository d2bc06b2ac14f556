//! Exceptions and Core Status.
//!
//! This module defines the synchronous exception model of the core. It provides:
//! 1. **Exceptions:** The exceptions the pipeline can raise and the syndrome written to ESR.
//! 2. **Exception Types:** The tag the guest kernel records in a process-state record.
//! 3. **Core Status:** The run state of the pipeline.

use std::fmt;

use serde::Serialize;

/// Syndrome of a user memory violation.
pub const EXCPN_ABORT_ACCESS: u16 = 0b1100;
/// Syndrome of an invalid opcode or sub-opcode in user mode.
pub const EXCPN_ABORT_INSTR: u16 = 0b1101;
/// Syndrome of a privileged instruction in user mode.
pub const EXCPN_ABORT_PRIV: u16 = 0b1110;

/// A synchronous exception raised by the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exception {
    /// `SYSCALL`, numbered by the low 16 bits of `x0`.
    Syscall(u16),
    /// User memory violation (load, store or instruction fetch).
    AccessAbort,
    /// User-mode invalid opcode or sub-opcode.
    InstructionAbort,
    /// User-mode privileged instruction.
    PrivilegeAbort,
}

impl Exception {
    /// Returns the value written to ESR on delivery.
    pub const fn syndrome(self) -> u16 {
        match self {
            Self::Syscall(n) => n,
            Self::AccessAbort => EXCPN_ABORT_ACCESS,
            Self::InstructionAbort => EXCPN_ABORT_INSTR,
            Self::PrivilegeAbort => EXCPN_ABORT_PRIV,
        }
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syscall(n) => write!(f, "syscall {n}"),
            Self::AccessAbort => f.write_str("access abort"),
            Self::InstructionAbort => f.write_str("instruction abort"),
            Self::PrivilegeAbort => f.write_str("privilege abort"),
        }
    }
}

/// Exception-type tag stored by the guest kernel in a process-state record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ExceptionType {
    /// The process entered the kernel through `SYSCALL`.
    Syscall,
    /// The process took a data abort.
    DataAbort,
    /// The process took a fetch abort.
    FetchAbort,
    /// Any other tag value.
    Other(u8),
}

impl ExceptionType {
    /// Decodes the tag byte.
    pub const fn from_u8(val: u8) -> Self {
        match val {
            0 => Self::Syscall,
            1 => Self::DataAbort,
            2 => Self::FetchAbort,
            other => Self::Other(other),
        }
    }

    /// Encodes the tag byte.
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Syscall => 0,
            Self::DataAbort => 1,
            Self::FetchAbort => 2,
            Self::Other(v) => v,
        }
    }

    /// Returns the label used in process dumps.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Syscall => "SYSCALL",
            Self::DataAbort => "DATA ABORT",
            Self::FetchAbort | Self::Other(_) => "FETCH ABORT",
        }
    }
}

/// Run state of the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum CoreStatus {
    /// Executing instructions.
    #[default]
    Running,
    /// An exception was delivered this cycle; the next fetch resumes running.
    Exception,
    /// Stopped until resumed with a new entry point.
    Halted,
    /// Blocked on an I/O request until acknowledged.
    IoWait,
}
