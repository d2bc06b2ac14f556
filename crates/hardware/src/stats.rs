//! Simulation statistics collection and reporting.
//!
//! This module tracks execution counters for the AruXI simulator. It provides:
//! 1. **Cycles and Instructions:** Total cycles and instructions that completed write-back.
//! 2. **Privilege Split:** Cycles spent in kernel and user mode.
//! 3. **Control Events:** Exceptions by kind, halts, safety-cap halts and I/O requests.

use std::fmt;
use std::time::Instant;

use serde::Serialize;

use crate::core::arch::trap::Exception;

/// Simulation statistics.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    /// Host instant at which the counters were created.
    #[serde(skip)]
    pub start_time: Instant,
    /// Total cycles executed.
    pub cycles: u64,
    /// Instructions that completed without raising an exception.
    pub instructions_retired: u64,
    /// Cycles that began in kernel mode.
    pub cycles_kernel: u64,
    /// Cycles that began in user mode.
    pub cycles_user: u64,
    /// Syscall exceptions delivered.
    pub syscalls: u64,
    /// Access, instruction and privilege aborts delivered.
    pub aborts: u64,
    /// Transitions to HALTED.
    pub halts: u64,
    /// Halts forced by the per-run cycle cap.
    pub forced_halts: u64,
    /// Transitions to IO_WAIT.
    pub io_requests: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            cycles_kernel: 0,
            cycles_user: 0,
            syscalls: 0,
            aborts: 0,
            halts: 0,
            forced_halts: 0,
            io_requests: 0,
        }
    }
}

impl SimStats {
    /// Records a delivered exception.
    pub fn record_exception(&mut self, excp: Exception) {
        match excp {
            Exception::Syscall(_) => self.syscalls += 1,
            Exception::AccessAbort | Exception::InstructionAbort | Exception::PrivilegeAbort => {
                self.aborts += 1;
            }
        }
    }

    /// Returns the host time elapsed since the counters were created.
    pub fn host_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Prints the summary to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cyc = self.cycles.max(1) as f64;
        writeln!(f, "==========================================================")?;
        writeln!(f, "ARUXI SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {:.4} s", self.host_seconds())?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(
            f,
            "  cycles.kernel          {} ({:.2}%)",
            self.cycles_kernel,
            self.cycles_kernel as f64 / cyc * 100.0
        )?;
        writeln!(
            f,
            "  cycles.user            {} ({:.2}%)",
            self.cycles_user,
            self.cycles_user as f64 / cyc * 100.0
        )?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "exceptions.syscall       {}", self.syscalls)?;
        writeln!(f, "exceptions.abort         {}", self.aborts)?;
        writeln!(f, "halts                    {}", self.halts)?;
        writeln!(f, "halts.forced             {}", self.forced_halts)?;
        write!(f, "io_requests              {}", self.io_requests)
    }
}
