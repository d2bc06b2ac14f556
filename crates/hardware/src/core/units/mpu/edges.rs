//! Boundary-Crossing Edge Tables.
//!
//! After the starting address passes its validator, every following byte of a
//! multi-byte access is compared against a table of edge addresses. Landing on
//! an edge means the access ran out of the region it started in.

use crate::common::constants::{
    KERN_HEAP, KERN_START, KERN_STACK, KERN_TEXT, SYS_LIB, SYS_LIB_LIMIT, USER_BSS, USER_CONST,
    USER_DATA, USER_HEAP, USER_HEAP_LIMIT, USER_START, USER_STACK, USER_STACK_LIMIT, USER_TEXT,
};
use crate::common::error::MemoryError;
use crate::core::arch::mode::PrivilegeLevel;

type EdgeTable = [(u32, MemoryError)];

/// Kernel read edges.
pub const KERNEL_READ_EDGES: [(u32, MemoryError); 4] = [
    (SYS_LIB_LIMIT + 1, MemoryError::KernelOverread),
    (SYS_LIB - 1, MemoryError::KernelOverread),
    (0x0000_0000, MemoryError::KernelOverread),
    (KERN_START - 1, MemoryError::KernelOverread),
];

/// User read edges.
pub const USER_READ_EDGES: [(u32, MemoryError); 6] = [
    (USER_HEAP_LIMIT + 1, MemoryError::UserOverread),
    (USER_STACK - 1, MemoryError::UserOverread),
    (USER_STACK_LIMIT + 1, MemoryError::UserOverread),
    (USER_START - 1, MemoryError::UserOverread),
    (SYS_LIB_LIMIT + 1, MemoryError::UserOverread),
    (SYS_LIB - 1, MemoryError::UserOverread),
];

/// Kernel write edges.
pub const KERNEL_WRITE_EDGES: [(u32, MemoryError); 6] = [
    (KERN_TEXT, MemoryError::KernelOverflow),
    (KERN_HEAP - 1, MemoryError::KernelOverflow),
    (KERN_START - 1, MemoryError::KernelOverflow),
    (0x0000_0000, MemoryError::KernelOverflow),
    (KERN_STACK, MemoryError::KernelHeapOverflow),
    (KERN_STACK - 1, MemoryError::KernelStackOverflow),
];

/// User write edges.
pub const USER_WRITE_EDGES: [(u32, MemoryError); 8] = [
    (USER_CONST, MemoryError::UserOverflow),
    (USER_BSS - 1, MemoryError::UserOverflow),
    (USER_TEXT, MemoryError::UserOverflow),
    (USER_DATA - 1, MemoryError::UserOverflow),
    (USER_HEAP - 1, MemoryError::UserOverflow),
    (USER_STACK_LIMIT + 1, MemoryError::UserOverflow),
    (USER_HEAP_LIMIT + 1, MemoryError::UserHeapOverflow),
    (USER_STACK - 1, MemoryError::UserStackOverflow),
];

fn lookup(table: &EdgeTable, addr: u32) -> Result<(), MemoryError> {
    table
        .iter()
        .find(|(edge, _)| *edge == addr)
        .map_or(Ok(()), |(_, err)| Err(*err))
}

/// Checks one trailing byte of a read against the read edges.
pub fn check_read_edge(addr: u32, level: PrivilegeLevel) -> Result<(), MemoryError> {
    match level {
        PrivilegeLevel::Kernel => lookup(&KERNEL_READ_EDGES, addr),
        PrivilegeLevel::User => lookup(&USER_READ_EDGES, addr),
    }
}

/// Checks one trailing byte of a write against the write edges.
pub fn check_write_edge(addr: u32, level: PrivilegeLevel) -> Result<(), MemoryError> {
    match level {
        PrivilegeLevel::Kernel => lookup(&KERNEL_WRITE_EDGES, addr),
        PrivilegeLevel::User => lookup(&USER_WRITE_EDGES, addr),
    }
}
