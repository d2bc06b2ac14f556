//! Global System Constants.
//!
//! This module defines the fixed address-space partition and the other
//! architectural constants shared across the simulator. It includes:
//! 1. **Kernel Partition:** Data, text, heap and stack region bases.
//! 2. **User Partition:** BSS, constant, data, text, heap and stack region bases and limits.
//! 3. **Shared Windows:** The system-library window and the exception vector table.
//! 4. **Core Constants:** Vector address, process-state pointer slot and register aliases.

/// Total size of the emulated address space (4 GiB).
pub const MEMORY_SPACE: u64 = 1 << 32;

/// First byte of the kernel partition.
pub const KERN_START: u32 = 0xA008_0000;
/// Kernel data region (shares its base with the kernel partition).
pub const KERN_DATA: u32 = KERN_START;
/// Kernel text region.
pub const KERN_TEXT: u32 = 0xB808_0000;
/// Kernel heap region.
pub const KERN_HEAP: u32 = 0xD008_0000;
/// Kernel stack region.
pub const KERN_STACK: u32 = 0xF008_0000;
/// Last byte of the kernel stack and of the address space.
pub const KERN_STACK_LIMIT: u32 = 0xFFFF_FFFF;

/// First byte of the user partition.
pub const USER_START: u32 = 0x2004_0000;
/// User BSS region (shares its base with the user partition).
pub const USER_BSS: u32 = USER_START;
/// User read-only constant region.
pub const USER_CONST: u32 = 0x2008_0000;
/// User data region.
pub const USER_DATA: u32 = 0x2009_0000;
/// User text region.
pub const USER_TEXT: u32 = 0x2019_0000;
/// User heap region.
pub const USER_HEAP: u32 = 0x2099_0000;
/// Last byte of the user heap.
pub const USER_HEAP_LIMIT: u32 = 0x6098_FFFF;
/// User stack region.
pub const USER_STACK: u32 = 0x6099_0800;
/// Last byte of the user stack.
pub const USER_STACK_LIMIT: u32 = 0x7099_07FF;

/// First byte of the system-library window.
pub const SYS_LIB: u32 = 0x0008_0000;
/// Last byte of the system-library window.
pub const SYS_LIB_LIMIT: u32 = 0x1007_FFFF;

/// First byte of the exception vector table.
pub const EVT_START: u32 = 0x0004_0000;
/// Last byte of the exception vector table.
pub const EVT_LIMIT: u32 = 0x0007_FFFF;

/// Instruction pointer loaded on every exception entry.
pub const EXCEPTION_VECTOR: u32 = EVT_START;

/// Kernel-data slot holding the address of the active process-state record.
pub const PROCESS_STATE_POINTER: u32 = KERN_DATA + 4;

/// Size of an instruction word in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of architectural general-purpose registers (excluding the SP alias).
pub const GPR_COUNT: usize = 31;

/// Register index aliased to the dedicated stack pointer.
pub const SP_INDEX: usize = 31;

/// Register index whose writes are discarded by hardware.
pub const READ_ONLY_INDEX: usize = 30;

/// Link register written by `CALL`.
pub const LINK_REGISTER: usize = 28;

/// General register holding the syscall number at a `SYSCALL`.
pub const SYSCALL_REGISTER: usize = 0;

/// General register holding the I/O descriptor address on an IO-flavoured halt.
pub const IO_DESCRIPTOR_REGISTER: usize = 10;

/// Default number of cycles a run may take before the core is forced to halt.
pub const DEFAULT_MAX_RUN_CYCLES: u32 = 500;
