//! AruXI system simulator library.
//!
//! This crate implements a functional simulator for the 32-bit AruXI architecture:
//! 1. **Core:** The fetch, decode, execute, memory and write-back cycle, the register file
//!    with its deferred CSTR commit, and the exception model.
//! 2. **Memory:** A flat 4 GiB address space fronted by a privilege-aware protection unit.
//! 3. **ISA:** Opcode and sub-opcode tables, instruction formats and branch conditions.
//! 4. **Simulation:** The simulator driver, threaded controller, signal adapter, loader,
//!    configuration and statistics.

/// Common types and constants (partition table, registers, errors, access types).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (cycle stages, architectural state, execution units).
pub mod core;
/// Instruction set (opcodes, decode, conditions, ABI names).
pub mod isa;
/// Simulator driver, controller, signal adapter, loader and process dumps.
pub mod sim;
/// Emulated address space.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory and stats.
pub use crate::core::Cpu;
/// Simulator driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
