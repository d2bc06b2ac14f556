//! Emulated Address Space.
//!
//! This module implements the single flat 4 GiB buffer shared by the core and
//! its collaborators. It provides:
//! 1. **Buffer:** Lazily paged backing storage (`PagedBuffer`).
//! 2. **Raw Access:** Unchecked little-endian byte, half-word and word accessors.
//!
//! The raw accessors perform no protection checks. Guest loads, stores and
//! fetches go through the access engine in `core::units::mpu`; the raw path is
//! for host-side collaborators (loader, process-state reader, I/O servicing).

/// Paged backing storage.
pub mod buffer;

use self::buffer::PagedBuffer;

/// The emulated address space.
#[derive(Debug, Default)]
pub struct AddressSpace {
    buffer: PagedBuffer,
}

impl AddressSpace {
    /// Creates a zeroed address space.
    pub fn new() -> Self {
        Self {
            buffer: PagedBuffer::new(),
        }
    }

    /// Reads one byte.
    #[inline(always)]
    pub fn read_u8(&self, addr: u32) -> u8 {
        self.buffer.load(addr)
    }

    /// Writes one byte.
    #[inline(always)]
    pub fn write_u8(&mut self, addr: u32, val: u8) {
        self.buffer.store(addr, val);
    }

    /// Reads a little-endian half-word. Addresses wrap at the top of the space.
    pub fn read_u16(&self, addr: u32) -> u16 {
        u16::from_le_bytes([self.read_u8(addr), self.read_u8(addr.wrapping_add(1))])
    }

    /// Writes a little-endian half-word.
    pub fn write_u16(&mut self, addr: u32, val: u16) {
        self.write_bytes(addr, &val.to_le_bytes());
    }

    /// Reads a little-endian word.
    pub fn read_u32(&self, addr: u32) -> u32 {
        let mut bytes = [0u8; 4];
        self.read_bytes(addr, &mut bytes);
        u32::from_le_bytes(bytes)
    }

    /// Writes a little-endian word.
    pub fn write_u32(&mut self, addr: u32, val: u32) {
        self.write_bytes(addr, &val.to_le_bytes());
    }

    /// Copies bytes out of the address space starting at `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - First address to read.
    /// * `out`  - Destination; its length selects the number of bytes.
    pub fn read_bytes(&self, addr: u32, out: &mut [u8]) {
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = self.read_u8(addr.wrapping_add(i as u32));
        }
    }

    /// Copies bytes into the address space starting at `addr`.
    pub fn write_bytes(&mut self, addr: u32, data: &[u8]) {
        for (i, byte) in data.iter().enumerate() {
            self.write_u8(addr.wrapping_add(i as u32), *byte);
        }
    }

    /// Returns the number of backing pages in use.
    pub const fn resident_pages(&self) -> usize {
        self.buffer.resident_pages()
    }
}
