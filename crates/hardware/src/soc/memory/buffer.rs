//! Paged Memory Buffer.
//!
//! This module provides the backing storage for the 4 GiB emulated address space.
//! Pages are allocated lazily on first write, so a guest that touches a few
//! regions costs only those pages. Reads from pages that were never written
//! return zero, matching a freshly zeroed mapping.

/// Size of one backing page in bytes.
pub const PAGE_SIZE: usize = 4096;

/// Number of bits to shift to convert between addresses and page numbers.
pub const PAGE_SHIFT: u32 = 12;

/// Mask for extracting the offset within a page.
pub const PAGE_OFFSET_MASK: u32 = (PAGE_SIZE as u32) - 1;

/// Number of pages covering the full 32-bit address space.
pub const PAGE_COUNT: usize = 1 << (32 - PAGE_SHIFT);

type Page = Box<[u8; PAGE_SIZE]>;

/// Lazily allocated page table covering every 32-bit address.
pub struct PagedBuffer {
    pages: Vec<Option<Page>>,
    resident: usize,
}

impl PagedBuffer {
    /// Creates an empty buffer with no resident pages.
    pub fn new() -> Self {
        let mut pages = Vec::with_capacity(PAGE_COUNT);
        pages.resize_with(PAGE_COUNT, || None);
        Self { pages, resident: 0 }
    }

    #[inline(always)]
    const fn split(addr: u32) -> (usize, usize) {
        ((addr >> PAGE_SHIFT) as usize, (addr & PAGE_OFFSET_MASK) as usize)
    }

    /// Reads one byte.
    ///
    /// # Arguments
    ///
    /// * `addr` - Any 32-bit address.
    ///
    /// # Returns
    ///
    /// The stored byte, or 0 if the page was never written.
    #[inline]
    pub fn load(&self, addr: u32) -> u8 {
        let (page, offset) = Self::split(addr);
        self.pages[page].as_ref().map_or(0, |p| p[offset])
    }

    /// Writes one byte, allocating its page if needed.
    ///
    /// # Arguments
    ///
    /// * `addr` - Any 32-bit address.
    /// * `val`  - The byte to store.
    #[inline]
    pub fn store(&mut self, addr: u32, val: u8) {
        let (page, offset) = Self::split(addr);
        let slot = &mut self.pages[page];
        if slot.is_none() {
            self.resident += 1;
        }
        slot.get_or_insert_with(|| Box::new([0; PAGE_SIZE]))[offset] = val;
    }

    /// Returns the number of pages that have been allocated.
    pub const fn resident_pages(&self) -> usize {
        self.resident
    }
}

impl Default for PagedBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PagedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagedBuffer")
            .field("resident_pages", &self.resident)
            .finish_non_exhaustive()
    }
}
