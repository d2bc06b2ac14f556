//! Memory Violations, Faults and Simulator Errors.
//!
//! This module defines the error handling tiers of the simulator. It provides:
//! 1. **Memory Violations:** The closed `MemoryError` taxonomy produced by the access engine.
//! 2. **Fatal Faults:** The `Fault` tier for unrecoverable kernel-mode and host-level failures.
//! 3. **Simulator Errors:** The crate-level `SimError` returned by the driver, controller and loaders.

use thiserror::Error;

use crate::common::data::AccessType;
use crate::config::ConfigError;
use crate::core::arch::trap::CoreStatus;
use crate::sim::control::AckKind;
use crate::sim::loader::LoadError;
use crate::sim::signals::SignalError;

/// A memory-protection violation detected by the access engine.
///
/// Variants are scoped to the privilege level that issued the access. User-level
/// violations are recoverable (they become an access-abort exception); kernel-level
/// violations terminate the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum MemoryError {
    /// A kernel write crossed out of the region it started in.
    #[error("kernel overflow")]
    KernelOverflow,
    /// A kernel read crossed out of the region it started in.
    #[error("kernel overread")]
    KernelOverread,
    /// A kernel write ran from the heap limit into the stack.
    #[error("kernel stack overflow")]
    KernelStackOverflow,
    /// A kernel write ran from the heap into the stack region.
    #[error("kernel heap overflow")]
    KernelHeapOverflow,
    /// A kernel write targeted kernel text.
    #[error("kernel text write")]
    KernelTextWrite,
    /// A kernel write targeted memory below the kernel partition.
    #[error("kernel section write")]
    KernelSectionWrite,
    /// A kernel read or fetch targeted a section it may not read.
    #[error("kernel section read")]
    KernelSectionRead,

    /// A user write crossed out of the region it started in.
    #[error("user overflow")]
    UserOverflow,
    /// A user read crossed out of the region it started in.
    #[error("user overread")]
    UserOverread,
    /// A user write ran into the byte below the user stack.
    #[error("user stack overflow")]
    UserStackOverflow,
    /// A user write ran past the user heap limit.
    #[error("user heap overflow")]
    UserHeapOverflow,
    /// A user write targeted user text.
    #[error("user text write")]
    UserTextWrite,
    /// A user write targeted the read-only constant region.
    #[error("user constant write")]
    UserConstWrite,
    /// A user write targeted memory outside the writable user regions.
    #[error("user section write")]
    UserSectionWrite,
    /// A user read or fetch targeted memory outside the readable user regions.
    #[error("user section read")]
    UserSectionRead,
}

impl MemoryError {
    /// Returns true for variants raised by kernel-privileged accesses.
    pub const fn is_kernel(self) -> bool {
        matches!(
            self,
            Self::KernelOverflow
                | Self::KernelOverread
                | Self::KernelStackOverflow
                | Self::KernelHeapOverflow
                | Self::KernelTextWrite
                | Self::KernelSectionWrite
                | Self::KernelSectionRead
        )
    }
}

/// An unrecoverable failure that ends the simulation.
///
/// Faults are broadcast to the signal adapter before the core thread stops.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// Kernel-mode code violated memory protection.
    #[error("kernel {access} at {addr:#010x}: {error}")]
    KernelMemory {
        /// The violation reported by the access engine.
        error: MemoryError,
        /// Starting address of the access.
        addr: u32,
        /// Which path issued the access.
        access: AccessType,
    },

    /// Kernel-mode code executed an invalid opcode or sub-opcode.
    #[error("kernel invalid instruction {word:#010x} at {ir:#010x}")]
    KernelInvalidInstruction {
        /// The raw instruction word.
        word: u32,
        /// Address the word was fetched from.
        ir: u32,
    },

    /// A memory instruction reached the memory stage without a transfer width.
    #[error("internal {access} error at {addr:#010x}")]
    Internal {
        /// Starting address of the access.
        addr: u32,
        /// Which path issued the access.
        access: AccessType,
    },

    /// `ERET` was executed while no process state had been recorded.
    #[error("exception return at {ir:#010x} with no active process")]
    NoActiveProcess {
        /// Address of the instruction following the `ERET`.
        ir: u32,
    },

    /// The signal adapter could not stage a message for its peer.
    #[error("signal adapter failure: {0}")]
    Signal(#[from] SignalError),
}

/// Crate-level error type for the simulator driver and its collaborators.
#[derive(Debug, Error)]
pub enum SimError {
    /// The core stopped on an unrecoverable fault.
    #[error("fatal fault: {0}")]
    Fatal(#[from] Fault),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An image could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// An acknowledgement arrived that does not match the core's state.
    #[error("unexpected {kind:?} acknowledgement while core is {status:?}")]
    UnexpectedAck {
        /// The acknowledgement received.
        kind: AckKind,
        /// Status of the core when it arrived.
        status: CoreStatus,
    },

    /// A cycle was requested while the core is idle.
    #[error("core is not running ({status:?})")]
    NotRunning {
        /// Status of the core.
        status: CoreStatus,
    },

    /// A resume arrived while the core was not halted.
    #[error("cannot resume a core that is {status:?}")]
    NotHalted {
        /// Status of the core.
        status: CoreStatus,
    },

    /// The core thread has already stopped.
    #[error("core thread has stopped")]
    CoreStopped,

    /// The core thread panicked.
    #[error("core thread panicked")]
    ThreadPanicked,
}
