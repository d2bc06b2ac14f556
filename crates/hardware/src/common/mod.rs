//! Common utilities and types used throughout the AruXI simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** The address-space partition table and architectural constants.
//! 2. **Memory Access:** Definitions for categorizing memory operations (Fetch/Read/Write).
//! 3. **Error Handling:** Memory violations, fatal faults and simulator errors.
//! 4. **Register Management:** The register file with its deferred CSTR commit.

/// Address-space partition and architectural constants.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types (memory violations, faults, simulator errors).
pub mod error;

/// Register file implementation.
pub mod reg;

pub use data::AccessType;
pub use error::{Fault, MemoryError, SimError};
pub use reg::{ReadPorts, RegisterFile};
