//! Process dump rendering.
//!
//! Renders the textual dump written when a guest process aborts: the
//! identifying fields of the process-state record, its saved special registers,
//! the 25 saved general registers by ABI name and the exception type.

use std::fmt;

use crate::core::arch::process::ProcessState;
use crate::isa::abi;

/// Display adapter that formats a process-state record as a dump.
#[derive(Debug)]
pub struct ProcessDump<'a>(pub &'a ProcessState);

impl fmt::Display for ProcessDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ps = self.0;
        writeln!(f, "PID: {}", ps.pid)?;
        writeln!(f, "Threadc: {}", ps.threadc)?;
        writeln!(f, "SP: {:#010x}", ps.sp)?;
        writeln!(f, "IR: {:#010x}", ps.ir)?;
        writeln!(f, "CSTR: {:#06x}", ps.cstr)?;
        writeln!(f, "ESR: {:#06x}", ps.esr)?;
        for (reg, value) in abi::SAVED_REGISTERS.iter().zip(ps.gpr.iter()) {
            writeln!(f, "{}: {value:#010x}", abi::name(*reg))?;
        }
        writeln!(f, "excpType: {}", ps.exception_type().label())
    }
}

/// Renders a process-state record as a dump.
///
/// # Arguments
///
/// * `ps` - The record of the aborted process.
///
/// # Returns
///
/// The dump text, one field per line.
pub fn render(ps: &ProcessState) -> String {
    ProcessDump(ps).to_string()
}
