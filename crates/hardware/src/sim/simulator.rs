//! Simulator: owns the CPU and its signal adapter side-by-side.
//!
//! This module drives the core between idle points. It performs:
//! 1. **Stepping:** Runs cycles until the core halts, blocks on I/O or faults.
//! 2. **Halt Classification:** Distinguishes a bare kernel halt, a process exit
//!    after a syscall and a guest abort, and notifies the adapter accordingly.
//! 3. **External Control:** `resume` and `acknowledge`, the two ways an idle core
//!    is set running again.

use crate::common::constants::IO_DESCRIPTOR_REGISTER;
use crate::common::{Fault, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::trap::{CoreStatus, ExceptionType};
use crate::sim::control::AckKind;
use crate::sim::loader::{self, LoadError};
use crate::sim::signals::{FaultKind, FaultReport, IoRequest, SignalAdapter};
use crate::soc::memory::AddressSpace;

/// Why the core stopped running.
#[derive(Clone, Debug, PartialEq)]
pub enum IdleReason {
    /// Plain halt with no active process.
    Halted,
    /// The active process halted after a syscall.
    Exited,
    /// The active process halted after an abort; a fault report was delivered.
    Aborted(ExceptionType),
    /// Blocked on an I/O request until `acknowledge(Io)`.
    IoWait(IoRequest),
    /// Paused by the controller.
    Paused,
    /// Stopped on an unrecoverable fault.
    Fatal(Fault),
}

/// Top-level simulator: CPU state plus the adapter to its collaborators.
pub struct Simulator {
    /// CPU architectural state and memory.
    pub cpu: Cpu,
    adapter: Box<dyn SignalAdapter>,
    boot_entry: u32,
    pending_io: Option<IoRequest>,
    awaiting_fault_ack: bool,
}

impl std::fmt::Debug for Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator")
            .field("cpu", &self.cpu)
            .field("boot_entry", &self.boot_entry)
            .field("pending_io", &self.pending_io)
            .field("awaiting_fault_ack", &self.awaiting_fault_ack)
            .finish_non_exhaustive()
    }
}

impl Simulator {
    /// Creates a new simulator.
    ///
    /// # Arguments
    ///
    /// * `config`  - Simulator configuration.
    /// * `adapter` - Collaborator interface for faults, exits and I/O.
    pub fn new(config: &Config, adapter: Box<dyn SignalAdapter>) -> Self {
        Self {
            cpu: Cpu::new(config),
            adapter,
            boot_entry: config.boot.entry,
            pending_io: None,
            awaiting_fault_ack: false,
        }
    }

    /// Boots the core at the configured entry point.
    pub fn boot(&mut self) {
        self.cpu.boot(self.boot_entry);
        self.pending_io = None;
        self.awaiting_fault_ack = false;
    }

    /// Copies a raw image into the address space.
    pub fn load_image(&mut self, addr: u32, image: &[u8]) -> Result<(), LoadError> {
        loader::load_image(&mut self.cpu.memory, addr, image)
    }

    /// Returns the address space.
    pub const fn memory(&self) -> &AddressSpace {
        &self.cpu.memory
    }

    /// Returns the address space mutably.
    pub const fn memory_mut(&mut self) -> &mut AddressSpace {
        &mut self.cpu.memory
    }

    /// Returns the I/O request awaiting acknowledgement, if any.
    pub const fn pending_io(&self) -> Option<&IoRequest> {
        self.pending_io.as_ref()
    }

    /// Executes one cycle.
    ///
    /// # Returns
    ///
    /// `Ok(None)` while the core keeps running, `Ok(Some(reason))` on the cycle it
    /// goes idle. A fatal fault is reported to the adapter and returned as an error.
    pub fn step(&mut self) -> Result<Option<IdleReason>, SimError> {
        if !self.cpu.is_runnable() {
            return Err(SimError::NotRunning {
                status: self.cpu.status,
            });
        }

        if let Err(fault) = self.cpu.tick() {
            self.report_fatal(&fault);
            return Err(SimError::Fatal(fault));
        }

        match self.cpu.status {
            CoreStatus::Halted => Ok(Some(self.on_halt())),
            CoreStatus::IoWait => self.on_io_wait().map(Some),
            CoreStatus::Running | CoreStatus::Exception => Ok(None),
        }
    }

    /// Runs cycles until the core goes idle.
    ///
    /// # Returns
    ///
    /// Why the core stopped, or the fatal fault.
    pub fn run_until_idle(&mut self) -> Result<IdleReason, SimError> {
        loop {
            if let Some(reason) = self.step()? {
                return Ok(reason);
            }
        }
    }

    /// Sets a halted core running at `entry`. Privilege and registers are unchanged.
    pub fn resume(&mut self, entry: u32) -> Result<(), SimError> {
        if self.cpu.status != CoreStatus::Halted {
            return Err(SimError::NotHalted {
                status: self.cpu.status,
            });
        }
        tracing::info!("resuming at {entry:#010x}");
        self.cpu.ir = entry;
        self.cpu.status = CoreStatus::Running;
        Ok(())
    }

    /// Acknowledges a pending request.
    ///
    /// `Io` completes an I/O wait and sets the core running with every register
    /// unchanged. `Fault` completes a guest-abort report and discards the
    /// active process so a later halt is not reported again.
    pub fn acknowledge(&mut self, kind: AckKind) -> Result<(), SimError> {
        match kind {
            AckKind::Io if self.cpu.status == CoreStatus::IoWait => {
                self.pending_io = None;
                self.cpu.status = CoreStatus::Running;
                Ok(())
            }
            AckKind::Fault if self.awaiting_fault_ack => {
                self.awaiting_fault_ack = false;
                self.cpu.active_process = None;
                Ok(())
            }
            _ => Err(SimError::UnexpectedAck {
                kind,
                status: self.cpu.status,
            }),
        }
    }

    /// Sends a fatal fault report to the adapter.
    pub fn report_fatal(&mut self, fault: &Fault) {
        tracing::error!("fatal fault: {fault}");
        let report = FaultReport {
            kind: FaultKind::Fatal(fault.clone()),
            core: self.cpu.snapshot(),
            process: self.cpu.active_process_state(),
        };
        self.adapter.deliver_fault(&report);
    }

    fn on_halt(&mut self) -> IdleReason {
        let Some(process) = self.cpu.active_process_state() else {
            tracing::info!("core idle");
            return IdleReason::Halted;
        };

        let excp = process.exception_type();
        if excp == ExceptionType::Syscall {
            tracing::info!(pid = process.pid, "process exited");
            self.adapter.process_exited(&process);
            return IdleReason::Exited;
        }

        tracing::warn!(pid = process.pid, "process aborted: {}", excp.label());
        let report = FaultReport {
            kind: FaultKind::GuestAbort(excp),
            core: self.cpu.snapshot(),
            process: Some(process),
        };
        self.adapter.deliver_fault(&report);
        self.awaiting_fault_ack = true;
        IdleReason::Aborted(excp)
    }

    fn on_io_wait(&mut self) -> Result<IdleReason, SimError> {
        let descriptor = self.cpu.regs.read(IO_DESCRIPTOR_REGISTER);
        let request = IoRequest::read(&self.cpu.memory, descriptor);
        tracing::debug!(?request, "staging I/O request");

        if let Err(err) = self.adapter.request_io(&request, &mut self.cpu.memory) {
            let fault = Fault::from(err);
            self.report_fatal(&fault);
            return Err(SimError::Fatal(fault));
        }
        self.pending_io = Some(request);
        Ok(IdleReason::IoWait(request))
    }
}
