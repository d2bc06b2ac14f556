//! Instruction cycle implementation.
//!
//! This module contains the sequential fetch-decode-execute-memory cycle.
//! It includes the following components:
//! 1. **Latches:** The per-cycle context threaded through the stages.
//! 2. **Signals:** Control signals generated during instruction decoding.
//! 3. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.

/// Per-cycle stage latches.
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;
