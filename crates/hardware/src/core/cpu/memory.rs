//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and the access engine.
//! It performs the following:
//! 1. **Privilege Selection:** Every access is checked at the core's current privilege level.
//! 2. **Extension:** Narrow loads are sign- or zero-extended to 32 bits.
//! 3. **Fault Dispatch:** User violations become an access abort; kernel and internal
//!    violations become a fatal [`Fault`].

use super::Cpu;
use crate::common::{AccessType, Fault, MemoryError};
use crate::core::arch::trap::Exception;
use crate::core::pipeline::signals::MemWidth;
use crate::core::units::mpu::Mpu;

impl Cpu {
    /// Fetches the instruction word at `addr`.
    ///
    /// # Returns
    ///
    /// `Ok(Some(word))` on success, `Ok(None)` if a user access abort was raised,
    /// or the fatal fault for a kernel violation.
    pub fn fetch_word(&mut self, addr: u32) -> Result<Option<u32>, Fault> {
        match Mpu::fetch(&self.memory, addr, self.privilege()) {
            Ok(word) => Ok(Some(word)),
            Err(err) => self.access_fault(err, addr, AccessType::Fetch).map(|()| None),
        }
    }

    /// Loads `width` bytes from `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr`        - Effective address.
    /// * `width`       - Transfer width.
    /// * `zero_extend` - Zero-extend narrow values instead of sign-extending them.
    ///
    /// # Returns
    ///
    /// `Ok(Some(value))` on success, `Ok(None)` if a user access abort was raised.
    pub fn load(
        &mut self,
        addr: u32,
        width: MemWidth,
        zero_extend: bool,
    ) -> Result<Option<u32>, Fault> {
        match Mpu::read(&self.memory, addr, width, self.privilege()) {
            Ok(raw) => Ok(Some(extend(raw, width, zero_extend))),
            Err(err) => self.access_fault(err, addr, AccessType::Read).map(|()| None),
        }
    }

    /// Stores the low `width` bytes of `value` at `addr`.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the store happened, `Ok(false)` if a user access abort was raised.
    pub fn store(&mut self, addr: u32, width: MemWidth, value: u32) -> Result<bool, Fault> {
        let level = self.privilege();
        match Mpu::write(&mut self.memory, addr, width, value, level) {
            Ok(()) => Ok(true),
            Err(err) => self.access_fault(err, addr, AccessType::Write).map(|()| false),
        }
    }

    fn access_fault(
        &mut self,
        error: MemoryError,
        addr: u32,
        access: AccessType,
    ) -> Result<(), Fault> {
        if error.is_kernel() {
            return Err(Fault::KernelMemory {
                error,
                addr,
                access,
            });
        }
        tracing::warn!(
            addr = format_args!("{addr:#010x}"),
            %access,
            "{error}"
        );
        self.raise(Exception::AccessAbort);
        Ok(())
    }
}

/// Extends a raw narrow value to 32 bits.
const fn extend(raw: u32, width: MemWidth, zero_extend: bool) -> u32 {
    if zero_extend {
        return raw;
    }
    match width {
        MemWidth::Byte => raw as u8 as i8 as i32 as u32,
        MemWidth::Half => raw as u16 as i16 as i32 as u32,
        MemWidth::Word => raw,
    }
}
