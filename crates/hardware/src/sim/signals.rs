//! External signal adapter.
//!
//! This module defines the narrow surface between the core and its host-side
//! collaborators (the emulator process and the shell). It provides:
//! 1. **Adapter Trait:** `SignalAdapter`, called by the simulator when a guest aborts,
//!    exits, or blocks on I/O.
//! 2. **I/O Requests:** The request descriptor a guest kernel stages before an I/O halt.
//! 3. **Fault Reports:** A serializable snapshot of the core and the faulting process.
//!
//! The wire protocol behind an adapter is the adapter's concern; the core only
//! calls the trait and waits for `resume`/`acknowledge` through the simulator.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::common::Fault;
use crate::core::CoreSnapshot;
use crate::core::arch::process::ProcessState;
use crate::core::arch::trap::ExceptionType;
use crate::soc::memory::AddressSpace;

/// Stream number of a write request (guest stdout).
pub const STREAM_WRITE: u32 = 0;
/// Stream number of a read request (guest stdin).
pub const STREAM_READ: u32 = 1;

/// Errors an adapter reports while servicing the core.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SignalError {
    /// The shared signal region had no room for the staged payload.
    #[error("shared region exhausted staging {requested} bytes")]
    HeapExhausted {
        /// Size of the payload that did not fit.
        requested: usize,
    },

    /// The peer is gone.
    #[error("signal peer disconnected")]
    Disconnected,

    /// Host I/O failed.
    #[error("host i/o failed: {0}")]
    Io(String),
}

/// Direction of an I/O request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum IoOperation {
    /// Copy guest memory to the host stream.
    Write,
    /// Copy host input into guest memory.
    Read,
    /// Unrecognized stream number.
    Unknown(u32),
}

impl IoOperation {
    /// Maps a descriptor stream number to an operation.
    pub const fn from_stream(stream: u32) -> Self {
        match stream {
            STREAM_WRITE => Self::Write,
            STREAM_READ => Self::Read,
            other => Self::Unknown(other),
        }
    }
}

/// An I/O request staged by an I/O-flavoured `HLT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IoRequest {
    /// Requested direction.
    pub operation: IoOperation,
    /// Guest address of the descriptor (`x10` at the halt).
    pub descriptor: u32,
    /// Guest buffer address.
    pub buffer: u32,
    /// Byte count.
    pub length: u32,
}

impl IoRequest {
    /// Reads the 12-byte descriptor at `descriptor`: stream @0, length @4, buffer @8.
    ///
    /// # Arguments
    ///
    /// * `mem`        - The address space.
    /// * `descriptor` - Guest address of the descriptor.
    pub fn read(mem: &AddressSpace, descriptor: u32) -> Self {
        Self {
            operation: IoOperation::from_stream(mem.read_u32(descriptor)),
            descriptor,
            length: mem.read_u32(descriptor.wrapping_add(4)),
            buffer: mem.read_u32(descriptor.wrapping_add(8)),
        }
    }
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum FaultKind {
    /// A guest process aborted; the core stays usable.
    GuestAbort(ExceptionType),
    /// The core stopped on an unrecoverable fault.
    Fatal(#[serde(serialize_with = "serialize_display")] Fault),
}

/// A fault notification for the collaborators.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FaultReport {
    /// Kind of fault.
    pub kind: FaultKind,
    /// Core state when the fault was detected.
    pub core: CoreSnapshot,
    /// The active process record, if one was recorded.
    pub process: Option<ProcessState>,
}

fn serialize_display<S: Serializer>(fault: &Fault, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(fault)
}

/// Interface to the host-side collaborators.
///
/// Calls are synchronous: returning from `deliver_fault` is the collaborator's
/// acknowledgement of the report.
pub trait SignalAdapter: Send {
    /// Broadcasts a fault report.
    fn deliver_fault(&mut self, report: &FaultReport);

    /// Hands a staged I/O request to the collaborator.
    ///
    /// The core is idle for the duration of the call, so the adapter may read
    /// and write the guest buffer through `memory`. The request completes when
    /// the simulator receives `acknowledge(Io)`.
    fn request_io(
        &mut self,
        request: &IoRequest,
        memory: &mut AddressSpace,
    ) -> Result<(), SignalError>;

    /// Notifies the collaborator that the active process halted after a syscall.
    fn process_exited(&mut self, _process: &ProcessState) {}
}

/// An adapter with no peer: faults are logged and I/O requests are dropped.
#[derive(Debug, Default)]
pub struct NullAdapter;

impl SignalAdapter for NullAdapter {
    fn deliver_fault(&mut self, report: &FaultReport) {
        tracing::error!(kind = ?report.kind, ir = report.core.ir, "fault with no collaborator attached");
    }

    fn request_io(
        &mut self,
        request: &IoRequest,
        _memory: &mut AddressSpace,
    ) -> Result<(), SignalError> {
        tracing::debug!(?request, "dropping I/O request");
        Ok(())
    }
}
