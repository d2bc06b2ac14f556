//! Process-State Record.
//!
//! The guest kernel keeps one fixed-layout record per process and stores the
//! address of the active one at `KERN_DATA + 4`. The core writes the saved
//! instruction pointer on exception entry and reads it back on `ERET`; the
//! fault-reporting path reads the whole record. Offsets are a binary contract
//! with the guest and must not move.

use serde::Serialize;

use crate::core::arch::trap::ExceptionType;
use crate::soc::memory::AddressSpace;

/// Process id (u8).
pub const PS_PID: u32 = 0;
/// Thread count (u8).
pub const PS_THREADC: u32 = 1;
/// Thread-state pointer (u32, unused by the core).
pub const PS_THREAD_STATES: u32 = 2;
/// Saved stack pointer (u32).
pub const PS_SP: u32 = 6;
/// Saved instruction pointer (u32).
pub const PS_IR: u32 = 10;
/// Saved CSTR (u16).
pub const PS_CSTR: u32 = 14;
/// Saved ESR (u16).
pub const PS_ESR: u32 = 16;
/// Saved general registers (25 x u32).
pub const PS_GPR: u32 = 18;
/// Saved float registers (16 x f32).
pub const PS_FPR: u32 = 118;
/// Exception-type tag (u8).
pub const PS_EXCP_TYPE: u32 = 566;

/// Number of general registers saved in a record.
pub const PS_GPR_COUNT: usize = 25;
/// Number of float registers saved in a record.
pub const PS_FPR_COUNT: usize = 16;

/// A decoded process-state record.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProcessState {
    /// Process id.
    pub pid: u8,
    /// Thread count.
    pub threadc: u8,
    /// Thread-state pointer.
    pub thread_states: u32,
    /// Saved stack pointer.
    pub sp: u32,
    /// Saved instruction pointer.
    pub ir: u32,
    /// Saved CSTR.
    pub cstr: u16,
    /// Saved ESR.
    pub esr: u16,
    /// Saved general registers, in `abi::SAVED_REGISTERS` order.
    pub gpr: [u32; PS_GPR_COUNT],
    /// Saved float registers.
    pub fpr: [f32; PS_FPR_COUNT],
    /// Raw exception-type tag.
    pub excp_type: u8,
}

impl ProcessState {
    /// Reads the record at `base`.
    ///
    /// # Arguments
    ///
    /// * `mem`  - The address space holding the record.
    /// * `base` - Address of the record.
    pub fn read(mem: &AddressSpace, base: u32) -> Self {
        let at = |off: u32| base.wrapping_add(off);
        let mut gpr = [0u32; PS_GPR_COUNT];
        for (i, reg) in gpr.iter_mut().enumerate() {
            *reg = mem.read_u32(at(PS_GPR + 4 * i as u32));
        }
        let mut fpr = [0f32; PS_FPR_COUNT];
        for (i, reg) in fpr.iter_mut().enumerate() {
            *reg = f32::from_bits(mem.read_u32(at(PS_FPR + 4 * i as u32)));
        }
        Self {
            pid: mem.read_u8(at(PS_PID)),
            threadc: mem.read_u8(at(PS_THREADC)),
            thread_states: mem.read_u32(at(PS_THREAD_STATES)),
            sp: mem.read_u32(at(PS_SP)),
            ir: mem.read_u32(at(PS_IR)),
            cstr: mem.read_u16(at(PS_CSTR)),
            esr: mem.read_u16(at(PS_ESR)),
            gpr,
            fpr,
            excp_type: mem.read_u8(at(PS_EXCP_TYPE)),
        }
    }

    /// Writes the record to `base`.
    pub fn write(&self, mem: &mut AddressSpace, base: u32) {
        let at = |off: u32| base.wrapping_add(off);
        mem.write_u8(at(PS_PID), self.pid);
        mem.write_u8(at(PS_THREADC), self.threadc);
        mem.write_u32(at(PS_THREAD_STATES), self.thread_states);
        mem.write_u32(at(PS_SP), self.sp);
        mem.write_u32(at(PS_IR), self.ir);
        mem.write_u16(at(PS_CSTR), self.cstr);
        mem.write_u16(at(PS_ESR), self.esr);
        for (i, reg) in self.gpr.iter().enumerate() {
            mem.write_u32(at(PS_GPR + 4 * i as u32), *reg);
        }
        for (i, reg) in self.fpr.iter().enumerate() {
            mem.write_u32(at(PS_FPR + 4 * i as u32), reg.to_bits());
        }
        mem.write_u8(at(PS_EXCP_TYPE), self.excp_type);
    }

    /// Returns the decoded exception-type tag.
    pub const fn exception_type(&self) -> ExceptionType {
        ExceptionType::from_u8(self.excp_type)
    }

    /// Reads only the saved instruction pointer of the record at `base`.
    pub fn saved_ir(mem: &AddressSpace, base: u32) -> u32 {
        mem.read_u32(base.wrapping_add(PS_IR))
    }

    /// Overwrites only the saved instruction pointer of the record at `base`.
    pub fn save_ir(mem: &mut AddressSpace, base: u32, ir: u32) {
        mem.write_u32(base.wrapping_add(PS_IR), ir);
    }

    /// Reads only the saved CSTR of the record at `base`.
    pub fn saved_cstr(mem: &AddressSpace, base: u32) -> u16 {
        mem.read_u16(base.wrapping_add(PS_CSTR))
    }

    /// Reads only the exception-type tag of the record at `base`.
    pub fn saved_exception_type(mem: &AddressSpace, base: u32) -> ExceptionType {
        ExceptionType::from_u8(mem.read_u8(base.wrapping_add(PS_EXCP_TYPE)))
    }
}
