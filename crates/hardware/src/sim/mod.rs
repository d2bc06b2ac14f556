//! Simulation driver and host-side collaborators.
//!
//! Provides the simulator that steps the core between idle points, the
//! threaded controller, the signal-adapter interface, the raw image loader and
//! the process dump renderer.

/// Process dump rendering.
pub mod coredump;

/// Threaded core controller.
pub mod control;

/// Raw image loading.
pub mod loader;

/// External signal adapter interface.
pub mod signals;

/// Simulator driver.
pub mod simulator;

pub use control::{AckKind, CoreHandle};
pub use signals::{FaultReport, IoRequest, NullAdapter, SignalAdapter};
pub use simulator::{IdleReason, Simulator};
