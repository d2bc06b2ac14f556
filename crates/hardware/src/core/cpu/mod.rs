//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains registers, the instruction pointer and the run status.
//! 2. **Memory:** Owns the emulated address space every access funnels through.
//! 3. **Process Tracking:** Remembers which process-state record the last exception saved into.
//! 4. **Observability:** Instruction tracing and simulation statistics.

/// Cycle orchestration and the per-cycle safety cap.
pub mod execution;

/// Privilege-checked loads, stores and fetches.
pub mod memory;

/// Exception delivery and exception return.
pub mod trap;

use serde::Serialize;

use crate::common::RegisterFile;
use crate::common::constants::GPR_COUNT;
use crate::config::Config;
use crate::core::arch::cstr::ControlStatus;
use crate::core::arch::mode::PrivilegeLevel;
use crate::core::arch::trap::CoreStatus;
use crate::soc::memory::AddressSpace;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
///
/// The CPU is owned by exactly one thread at a time; the pipeline is the only
/// writer of registers and status.
#[derive(Debug)]
pub struct Cpu {
    /// General registers, CSTR and ESR.
    pub regs: RegisterFile,
    /// Instruction pointer.
    pub ir: u32,
    /// Run status.
    pub status: CoreStatus,
    /// Emulated address space.
    pub memory: AddressSpace,
    /// Process-state record the most recent exception saved into.
    pub active_process: Option<u32>,
    /// Cycles executed since the core last halted.
    pub cycles_since_halt: u32,
    /// Safety cap on `cycles_since_halt`.
    pub max_run_cycles: u32,
    /// Boot stack pointer.
    pub boot_sp: u32,
    /// Enable instruction tracing.
    pub trace: bool,
    /// Performance statistics.
    pub stats: SimStats,
}

/// Serializable copy of the architectural state, taken for fault reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CoreSnapshot {
    /// `x0`-`x30`.
    pub gpr: [u32; GPR_COUNT],
    /// Stack pointer.
    pub sp: u32,
    /// Instruction pointer.
    pub ir: u32,
    /// Raw CSTR bits.
    pub cstr: u16,
    /// ESR.
    pub esr: u16,
    /// Run status.
    pub status: CoreStatus,
}

impl Cpu {
    /// Creates a new CPU with a zeroed address space.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration (safety cap, tracing, boot stack pointer).
    ///
    /// # Returns
    ///
    /// A halted core; call [`Cpu::boot`] to start it.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            ir: 0,
            status: CoreStatus::Halted,
            memory: AddressSpace::new(),
            active_process: None,
            cycles_since_halt: 0,
            max_run_cycles: config.general.max_run_cycles,
            boot_sp: config.boot.stack_pointer,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
        }
    }

    /// Resets the architectural state for a kernel boot.
    ///
    /// IR is set to `entry`, SP to the configured boot stack pointer, CSTR to
    /// kernel privilege only and ESR to zero. Memory is left untouched.
    pub fn boot(&mut self, entry: u32) {
        self.regs = RegisterFile::new();
        self.regs.set_sp(self.boot_sp);
        self.regs.cstr = ControlStatus::KERNEL;
        self.regs.esr = 0;
        self.ir = entry;
        self.status = CoreStatus::Running;
        self.active_process = None;
        self.cycles_since_halt = 0;
        tracing::info!(entry = format_args!("{entry:#010x}"), "core booted");
    }

    /// Returns the current privilege level.
    pub const fn privilege(&self) -> PrivilegeLevel {
        self.regs.cstr.privilege()
    }

    /// Copies the architectural state.
    pub fn snapshot(&self) -> CoreSnapshot {
        CoreSnapshot {
            gpr: self.regs.gpr().snapshot(),
            sp: self.regs.sp(),
            ir: self.ir,
            cstr: self.regs.cstr.bits(),
            esr: self.regs.esr,
            status: self.status,
        }
    }

    /// Dumps the register state to the trace log.
    pub fn dump_state(&self) {
        tracing::trace!("IR={:#010x} status={:?}", self.ir, self.status);
        self.regs.dump();
    }
}
