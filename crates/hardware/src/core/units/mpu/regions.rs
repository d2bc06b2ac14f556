//! Start-Address Validators.
//!
//! Each access is first checked at its starting address against the region
//! rules of the issuing privilege level. Ranges follow the partition table in
//! `common::constants`.

use crate::common::constants::{
    EVT_LIMIT, EVT_START, KERN_DATA, KERN_HEAP, KERN_START, KERN_TEXT,
    SYS_LIB, SYS_LIB_LIMIT, USER_BSS, USER_CONST, USER_DATA, USER_HEAP, USER_HEAP_LIMIT,
    USER_START, USER_STACK, USER_STACK_LIMIT, USER_TEXT,
};
use crate::common::error::MemoryError;
use crate::core::arch::mode::PrivilegeLevel;

#[inline(always)]
const fn in_sys_lib(addr: u32) -> bool {
    addr >= SYS_LIB && addr <= SYS_LIB_LIMIT
}

#[inline(always)]
const fn in_evt(addr: u32) -> bool {
    addr >= EVT_START && addr <= EVT_LIMIT
}

/// Validates the starting address of an instruction fetch.
///
/// Kernel code may execute from kernel data/text, the system library and the
/// vector table; user code from user text and the system library.
pub const fn validate_fetch(addr: u32, level: PrivilegeLevel) -> Result<(), MemoryError> {
    match level {
        PrivilegeLevel::Kernel => {
            if (addr >= KERN_DATA && addr < KERN_HEAP) || in_sys_lib(addr) || in_evt(addr) {
                Ok(())
            } else {
                Err(MemoryError::KernelSectionRead)
            }
        }
        PrivilegeLevel::User => {
            if (addr >= USER_TEXT && addr < USER_HEAP) || in_sys_lib(addr) {
                Ok(())
            } else {
                Err(MemoryError::UserSectionRead)
            }
        }
    }
}

/// Validates the starting address of a data read.
///
/// Kernel reads may target the whole kernel partition, the system library and
/// the vector table. User reads may target the user partition (excluding the
/// gap between heap and stack) and the system library.
pub const fn validate_read(addr: u32, level: PrivilegeLevel) -> Result<(), MemoryError> {
    match level {
        PrivilegeLevel::Kernel => {
            // The kernel partition runs to the top of the address space.
            if in_sys_lib(addr) || addr >= KERN_START || in_evt(addr) {
                Ok(())
            } else {
                Err(MemoryError::KernelSectionRead)
            }
        }
        PrivilegeLevel::User => {
            let invalid_proc =
                (addr > USER_HEAP_LIMIT && addr < USER_STACK) || addr > USER_STACK_LIMIT;
            let invalid_sect = addr < SYS_LIB || (addr > SYS_LIB_LIMIT && addr < USER_START);
            if invalid_proc || invalid_sect {
                Err(MemoryError::UserSectionRead)
            } else {
                Ok(())
            }
        }
    }
}

/// Validates the starting address of a data write.
///
/// Kernel writes may not target anything below the kernel partition or kernel
/// text. User writes may not leave the user partition, cross into the gap
/// between heap and stack, or target user text or constants.
pub const fn validate_write(addr: u32, level: PrivilegeLevel) -> Result<(), MemoryError> {
    match level {
        PrivilegeLevel::Kernel => {
            if addr < KERN_DATA {
                Err(MemoryError::KernelSectionWrite)
            } else if addr >= KERN_TEXT && addr < KERN_HEAP {
                Err(MemoryError::KernelTextWrite)
            } else {
                Ok(())
            }
        }
        PrivilegeLevel::User => {
            if addr < USER_BSS
                || (addr > USER_HEAP_LIMIT && addr < USER_STACK)
                || addr > USER_STACK_LIMIT
            {
                Err(MemoryError::UserSectionWrite)
            } else if addr >= USER_TEXT && addr < USER_HEAP {
                Err(MemoryError::UserTextWrite)
            } else if addr >= USER_CONST && addr < USER_DATA {
                Err(MemoryError::UserConstWrite)
            } else {
                Ok(())
            }
        }
    }
}
