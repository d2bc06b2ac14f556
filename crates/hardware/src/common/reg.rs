//! Register File.
//!
//! This module provides the `RegisterFile` struct, the pipeline's single entry
//! point for register state. It provides:
//! 1. **General Registers:** `x0`-`x30` plus the stack pointer alias, through [`Gpr`].
//! 2. **Privileged Registers:** CSTR and ESR, plus the special-destination routing of
//!    `LDIR`, `LDCSTR`, `RESR` and `MVCSTR`.
//! 3. **Deferred Commit:** `MVCSTR` latches its value with a commit-pending marker;
//!    the next register-file access commits it to CSTR before doing anything else.
//!
//! The deferral lets the instruction after an `MVCSTR` that drops privilege still
//! pass the decode-stage privilege check, which runs before the register read.

use crate::core::arch::cstr::{CSTR_COMMIT_PENDING, ControlStatus};
use crate::core::arch::gpr::Gpr;
use crate::isa::opcodes::Opcode;

/// Operand values read during decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadPorts {
    /// Value of `rs`.
    pub vala: u32,
    /// Value of `rr`.
    pub valb: u32,
    /// Value of `rd` (store data).
    pub valex: u32,
}

/// General and privileged register state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
    /// Live control/status register.
    pub cstr: ControlStatus,
    /// Exception-syndrome register.
    pub esr: u16,
    latched_cstr: u16,
}

impl RegisterFile {
    /// Creates a zeroed register file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a latched `MVCSTR` value, if one is pending.
    fn commit_pending(&mut self) {
        if self.latched_cstr & CSTR_COMMIT_PENDING != 0 {
            self.cstr = ControlStatus(self.latched_cstr & !CSTR_COMMIT_PENDING);
            self.latched_cstr = 0;
        }
    }

    /// Returns true while an `MVCSTR` value waits to be committed.
    pub const fn commit_pending_set(&self) -> bool {
        self.latched_cstr & CSTR_COMMIT_PENDING != 0
    }

    /// Decode-stage register access: commits any pending CSTR, then reads three ports.
    ///
    /// # Arguments
    ///
    /// * `rs` - Primary source index.
    /// * `rr` - Secondary source index.
    /// * `rd` - Destination index (read for store data).
    pub fn read_ports(&mut self, rs: usize, rr: usize, rd: usize) -> ReadPorts {
        self.commit_pending();
        ReadPorts {
            vala: self.gpr.read(rs),
            valb: self.gpr.read(rr),
            valex: self.gpr.read(rd),
        }
    }

    /// Register access for an instruction that writes nothing; commits any pending CSTR.
    pub fn sync(&mut self) {
        self.commit_pending();
    }

    /// Write-back register access.
    ///
    /// Commits any pending CSTR, then routes the value:
    /// - `rd == 30` is dropped,
    /// - `LDIR`/`LDCSTR`/`RESR` replace the value with IR/CSTR/ESR,
    /// - `MVCSTR` latches the value for the next access and writes no register,
    /// - `rd == 31` writes the stack pointer.
    ///
    /// # Arguments
    ///
    /// * `op`    - The executing opcode.
    /// * `rd`    - Destination index.
    /// * `value` - Result of the memory stage.
    /// * `ir`    - Current instruction pointer, for `LDIR`.
    pub fn write_back(&mut self, op: Opcode, rd: usize, value: u32, ir: u32) {
        self.commit_pending();
        if rd == crate::common::constants::READ_ONLY_INDEX {
            return;
        }
        let value = match op {
            Opcode::Ldir => ir,
            Opcode::Ldcstr => u32::from(self.cstr.bits()),
            Opcode::Resr => u32::from(self.esr),
            Opcode::Mvcstr => {
                self.latched_cstr = (value as u16) | CSTR_COMMIT_PENDING;
                return;
            }
            _ => value,
        };
        self.gpr.write(rd, value);
    }

    /// Reads a general register (index 31 is the stack pointer).
    #[inline(always)]
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes a general register directly, bypassing write-back routing.
    #[inline(always)]
    pub fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    /// Returns the stack pointer.
    pub const fn sp(&self) -> u32 {
        self.gpr.sp()
    }

    /// Sets the stack pointer.
    pub const fn set_sp(&mut self, val: u32) {
        self.gpr.set_sp(val);
    }

    /// Returns the general registers.
    pub const fn gpr(&self) -> &Gpr {
        &self.gpr
    }

    /// Dumps the register state to the trace log.
    pub fn dump(&self) {
        self.gpr.dump();
        tracing::trace!("CSTR={} ESR={:#06x}", self.cstr, self.esr);
    }
}
