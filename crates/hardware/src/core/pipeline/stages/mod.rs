//! Pipeline stage implementations.
//!
//! This module contains the individual implementations of the stages of one
//! instruction cycle. It includes:
//! 1. **Fetch:** Reads the instruction word at IR and advances IR.
//! 2. **Decode:** Resolves the opcode, checks privilege, evaluates the branch condition and reads operands.
//! 3. **Execute:** Raises syscalls, resolves the next IR and runs the ALU.
//! 4. **Memory:** Performs loads and stores through the access engine.
//! 5. **Writeback:** Commits results to the register file.
//!
//! Every stage takes the CPU and the cycle's [`CycleContext`](super::latches::CycleContext)
//! by reference; nothing is carried between cycles through the context.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
