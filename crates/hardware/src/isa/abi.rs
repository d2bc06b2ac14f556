//! AruXI Application Binary Interface (ABI) register names.
//!
//! Defines the display names of the general-purpose registers and the
//! mapping between architectural registers and the 25 slots saved in a
//! process-state record.

/// Display names for all 32 register indices.
pub const REGISTER_NAMES: [&str; 32] = [
    "X0/A0/XR", "X1/A1", "X2/A2", "X3/A3", "X4/A4", "X5/A5", "X6/A6", "X7/A7", "X8/A8", "X9/A9",
    "X10", "X11", "X12/C0", "X13/C1", "X14/C2", "X15/C3", "X16/C4", "X17/S0", "X18/S1", "X19/S2",
    "X20/S3", "X21/S4", "X22/S5", "X23/S6", "X24/S7", "X25/S8", "X26/S9", "X27/S10", "X28/LR",
    "X29/XB", "X30/XZ", "X31/SP",
];

/// Architectural register held in each saved slot of a process-state record.
///
/// The kernel does not save the C0-C4 scratch registers (x12-x16).
pub const SAVED_REGISTERS: [usize; 25] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29,
];

/// Returns the display name of a register index.
///
/// # Arguments
///
/// * `idx` - Register index (0-31).
///
/// # Returns
///
/// The ABI name, or `"?"` for an out-of-range index.
pub fn name(idx: usize) -> &'static str {
    REGISTER_NAMES.get(idx).copied().unwrap_or("?")
}
