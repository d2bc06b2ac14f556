//! Memory Protection Unit and Access Engine.
//!
//! Every guest memory access goes through this module. It performs:
//! 1. **Start Validation:** Checks the first byte against the privilege level's region rules.
//! 2. **Edge Checks:** Compares each following byte against the boundary tables.
//! 3. **Transfer:** Moves little-endian data only after the whole access has been validated,
//!    so a rejected write leaves memory untouched.
//!
//! Instruction fetch has its own start validator (executable windows) and then
//! reads the word through the general read path.

/// Boundary-crossing edge tables.
pub mod edges;

/// Start-address validators.
pub mod regions;

use crate::common::error::MemoryError;
use crate::core::arch::mode::PrivilegeLevel;
use crate::core::pipeline::signals::MemWidth;
use crate::soc::memory::AddressSpace;

pub use edges::{check_read_edge, check_write_edge};
pub use regions::{validate_fetch, validate_read, validate_write};

/// Memory protection unit.
#[derive(Debug)]
pub struct Mpu;

impl Mpu {
    /// Validates a complete read of `width` bytes starting at `addr`.
    pub fn check_read(addr: u32, width: MemWidth, level: PrivilegeLevel) -> Result<(), MemoryError> {
        validate_read(addr, level)?;
        for i in 1..width.bytes() {
            check_read_edge(addr.wrapping_add(i), level)?;
        }
        Ok(())
    }

    /// Validates a complete write of `width` bytes starting at `addr`.
    pub fn check_write(
        addr: u32,
        width: MemWidth,
        level: PrivilegeLevel,
    ) -> Result<(), MemoryError> {
        validate_write(addr, level)?;
        for i in 1..width.bytes() {
            check_write_edge(addr.wrapping_add(i), level)?;
        }
        Ok(())
    }

    /// Fetches an instruction word.
    ///
    /// # Arguments
    ///
    /// * `mem`   - The address space.
    /// * `addr`  - Instruction pointer.
    /// * `level` - Privilege level of the fetching code.
    ///
    /// # Returns
    ///
    /// The little-endian word, or the violation that prevented the fetch.
    pub fn fetch(mem: &AddressSpace, addr: u32, level: PrivilegeLevel) -> Result<u32, MemoryError> {
        validate_fetch(addr, level)?;
        Self::read(mem, addr, MemWidth::Word, level)
    }

    /// Reads `width` bytes, zero-extended.
    ///
    /// # Arguments
    ///
    /// * `mem`   - The address space.
    /// * `addr`  - Starting address.
    /// * `width` - Transfer width.
    /// * `level` - Privilege level of the access.
    ///
    /// # Returns
    ///
    /// The little-endian value, or the violation. No data is returned on error.
    pub fn read(
        mem: &AddressSpace,
        addr: u32,
        width: MemWidth,
        level: PrivilegeLevel,
    ) -> Result<u32, MemoryError> {
        Self::check_read(addr, width, level)?;
        Ok(match width {
            MemWidth::Byte => u32::from(mem.read_u8(addr)),
            MemWidth::Half => u32::from(mem.read_u16(addr)),
            MemWidth::Word => mem.read_u32(addr),
        })
    }

    /// Writes the low `width` bytes of `value`.
    ///
    /// # Arguments
    ///
    /// * `mem`   - The address space.
    /// * `addr`  - Starting address.
    /// * `width` - Transfer width.
    /// * `value` - Value whose low bytes are stored little-endian.
    /// * `level` - Privilege level of the access.
    pub fn write(
        mem: &mut AddressSpace,
        addr: u32,
        width: MemWidth,
        value: u32,
        level: PrivilegeLevel,
    ) -> Result<(), MemoryError> {
        Self::check_write(addr, width, level)?;
        match width {
            MemWidth::Byte => mem.write_u8(addr, value as u8),
            MemWidth::Half => mem.write_u16(addr, value as u16),
            MemWidth::Word => mem.write_u32(addr, value),
        }
        Ok(())
    }
}
