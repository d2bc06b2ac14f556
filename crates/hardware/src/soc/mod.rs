//! System-on-Chip (SoC) Components.
//!
//! The simulated system consists of one core and the flat emulated address
//! space it shares with its host-side collaborators.

/// Emulated address space and its backing storage.
pub mod memory;

pub use memory::AddressSpace;
