//! AruXI Privilege Levels.
//!
//! This module defines the two privilege levels of the architecture.
//! It implements the following:
//! 1. **Level Classification:** Kernel and user levels, selected by CSTR bit 9.
//! 2. **Observability:** Human-readable naming and display formatting.

/// AruXI privilege levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrivilegeLevel {
    /// User level: guest processes, restricted to the user partition and system library.
    User = 0,

    /// Kernel level: the guest operating system.
    Kernel = 1,
}

impl PrivilegeLevel {
    /// Returns the human-readable name of the level.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Kernel => "Kernel",
        }
    }
}

impl std::fmt::Display for PrivilegeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
