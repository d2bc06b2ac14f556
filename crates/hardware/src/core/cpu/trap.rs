//! Exception Handling Logic.
//!
//! This module implements synchronous exception delivery and return. It performs
//! the following:
//! 1. **Context Saving:** Writes the instruction pointer (already past the trapping
//!    instruction) into the active process-state record.
//! 2. **Redirection:** Jumps to the exception vector, records the syndrome in ESR and
//!    forces kernel privilege.
//! 3. **Return Handling:** Supplies the `ERET` target and restores the saved CSTR.

use super::Cpu;
use crate::common::Fault;
use crate::common::constants::{EXCEPTION_VECTOR, PROCESS_STATE_POINTER};
use crate::core::arch::cstr::ControlStatus;
use crate::core::arch::mode::PrivilegeLevel;
use crate::core::arch::process::ProcessState;
use crate::core::arch::trap::{CoreStatus, Exception};

impl Cpu {
    /// Delivers a synchronous exception.
    ///
    /// The record whose address is stored at the process-state pointer slot
    /// becomes the active process; its saved IR receives the current IR.
    ///
    /// # Arguments
    ///
    /// * `exc` - The exception being raised.
    pub fn raise(&mut self, exc: Exception) {
        let record = self.memory.read_u32(PROCESS_STATE_POINTER);
        ProcessState::save_ir(&mut self.memory, record, self.ir);
        tracing::debug!(
            ir = format_args!("{:#010x}", self.ir),
            record = format_args!("{record:#010x}"),
            "exception: {exc}"
        );

        self.active_process = Some(record);
        self.ir = EXCEPTION_VECTOR;
        self.regs.esr = exc.syndrome();
        self.regs.cstr = self.regs.cstr.with_privilege(PrivilegeLevel::Kernel);
        self.status = CoreStatus::Exception;
        self.stats.record_exception(exc);
    }

    /// Returns the instruction pointer `ERET` resumes at.
    ///
    /// # Returns
    ///
    /// The saved IR of the active process, or `Fault::NoActiveProcess` if no
    /// exception has recorded one.
    pub fn exception_return_target(&self) -> Result<u32, Fault> {
        self.active_process
            .map(|record| ProcessState::saved_ir(&self.memory, record))
            .ok_or(Fault::NoActiveProcess { ir: self.ir })
    }

    /// Replaces CSTR with the active process's saved CSTR, privilege cleared.
    pub fn restore_process_cstr(&mut self) {
        if let Some(record) = self.active_process {
            let saved = ControlStatus(ProcessState::saved_cstr(&self.memory, record));
            self.regs.cstr = saved.with_privilege(PrivilegeLevel::User);
        }
    }

    /// Reads the full record of the active process, if any.
    pub fn active_process_state(&self) -> Option<ProcessState> {
        self.active_process
            .map(|record| ProcessState::read(&self.memory, record))
    }
}
