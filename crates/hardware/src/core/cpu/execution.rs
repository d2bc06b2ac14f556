//! Main Execution Cycle.
//!
//! This module implements one instruction cycle of the CPU. It performs the following:
//! 1. **Stage Sequencing:** Runs fetch, decode, execute, memory and write-back strictly in order
//!    over a fresh [`CycleContext`].
//! 2. **Exception Return:** Restores the saved CSTR after an `ERET` that completed cleanly.
//! 3. **Safety Cap:** Forces HALTED when a run exceeds the configured cycle count.
//! 4. **Observability:** Privilege-split cycle counters and mode-switch tracing.

use super::Cpu;
use crate::common::Fault;
use crate::core::arch::mode::PrivilegeLevel;
use crate::core::arch::trap::CoreStatus;
use crate::core::pipeline::latches::CycleContext;
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};
use crate::isa::opcodes::Opcode;

impl Cpu {
    /// Returns true while the pipeline may execute cycles.
    pub const fn is_runnable(&self) -> bool {
        matches!(self.status, CoreStatus::Running | CoreStatus::Exception)
    }

    /// Executes one instruction cycle.
    ///
    /// Does nothing while the core is HALTED or in IO_WAIT.
    ///
    /// # Returns
    ///
    /// `Ok(())` after the cycle, or the fatal fault that stopped it. Guest
    /// exceptions are delivered in-cycle and are not errors.
    pub fn tick(&mut self) -> Result<(), Fault> {
        if !self.is_runnable() {
            return Ok(());
        }

        let prev_priv = self.privilege();
        self.stats.cycles += 1;
        match prev_priv {
            PrivilegeLevel::Kernel => self.stats.cycles_kernel += 1,
            PrivilegeLevel::User => self.stats.cycles_user += 1,
        }

        let mut ctx = CycleContext::new();
        fetch_stage(self, &mut ctx)?;
        decode_stage(self, &mut ctx)?;
        execute_stage(self, &mut ctx)?;
        if self.status != CoreStatus::Exception {
            mem_stage(self, &mut ctx)?;
        }
        if self.status != CoreStatus::Exception {
            wb_stage(self, &ctx);
            if ctx.decode.inst.opcode == Opcode::Eret {
                self.restore_process_cstr();
            }
            self.stats.instructions_retired += 1;
        }

        self.post_tick(prev_priv);
        Ok(())
    }

    /// End-of-cycle bookkeeping: safety cap and mode-switch tracing.
    fn post_tick(&mut self, prev_priv: PrivilegeLevel) {
        self.cycles_since_halt += 1;
        if self.cycles_since_halt > self.max_run_cycles && self.status != CoreStatus::Halted {
            tracing::warn!(
                cycles = self.cycles_since_halt,
                ir = format_args!("{:#010x}", self.ir),
                "run exceeded cycle cap, forcing halt"
            );
            self.status = CoreStatus::Halted;
            self.stats.halts += 1;
            self.stats.forced_halts += 1;
        }
        if self.status == CoreStatus::Halted {
            self.cycles_since_halt = 0;
        }

        if self.trace {
            let now = self.privilege();
            if now != prev_priv {
                tracing::trace!(
                    "mode switch: {} -> {} (IR={:#010x})",
                    prev_priv.name(),
                    now.name(),
                    self.ir
                );
            }
        }
    }
}
