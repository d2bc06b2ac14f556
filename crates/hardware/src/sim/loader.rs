//! Raw Image Loader.
//!
//! This module places flat binary images into the emulated address space. It performs:
//! 1. **File loading:** Reads an image from disk into a byte buffer.
//! 2. **Placement:** Copies the bytes to a load address, rejecting images that would
//!    run past the top of the 32-bit space.
//!
//! The loader writes through the raw accessors: it runs before boot, outside any
//! privilege level.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::common::constants::MEMORY_SPACE;
use crate::soc::memory::AddressSpace;

/// Errors produced while loading an image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image does not fit between the load address and the top of memory.
    #[error("image of {len} bytes at {addr:#010x} runs past the end of the address space")]
    OutOfRange {
        /// Load address.
        addr: u32,
        /// Image size in bytes.
        len: usize,
    },

    /// The image file could not be read.
    #[error("could not read image {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Reads an image file from disk.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Returns
///
/// The raw bytes of the file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Copies `image` into `mem` starting at `addr`.
///
/// # Arguments
///
/// * `mem`   - The address space.
/// * `addr`  - Load address of the first byte.
/// * `image` - Image bytes.
pub fn load_image(mem: &mut AddressSpace, addr: u32, image: &[u8]) -> Result<(), LoadError> {
    if u64::from(addr) + image.len() as u64 > MEMORY_SPACE {
        return Err(LoadError::OutOfRange {
            addr,
            len: image.len(),
        });
    }
    mem.write_bytes(addr, image);
    tracing::debug!(
        addr = format_args!("{addr:#010x}"),
        len = image.len(),
        "image loaded"
    );
    Ok(())
}
