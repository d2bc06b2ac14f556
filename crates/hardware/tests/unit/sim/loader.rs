//! Image Loader Tests.

use std::io::Write;

use aruxi_core::common::constants::{KERN_TEXT, USER_TEXT};
use aruxi_core::sim::loader::{LoadError, load_file, load_image};
use aruxi_core::soc::AddressSpace;
use tempfile::NamedTempFile;

#[test]
fn image_bytes_land_at_load_address() {
    let mut mem = AddressSpace::new();
    load_image(&mut mem, USER_TEXT, &[0x78, 0x56, 0x34, 0x12, 0xFF]).unwrap();
    assert_eq!(mem.read_u32(USER_TEXT), 0x1234_5678);
    assert_eq!(mem.read_u8(USER_TEXT + 4), 0xFF);
    assert_eq!(mem.read_u8(USER_TEXT + 5), 0);
}

#[test]
fn image_may_end_at_top_of_memory() {
    let mut mem = AddressSpace::new();
    load_image(&mut mem, 0xFFFF_FFFE, &[1, 2]).unwrap();
    assert_eq!(mem.read_u8(0xFFFF_FFFF), 2);
}

#[test]
fn image_past_top_of_memory_is_rejected() {
    let mut mem = AddressSpace::new();
    let err = load_image(&mut mem, 0xFFFF_FFFF, &[1, 2]).unwrap_err();
    assert!(matches!(
        err,
        LoadError::OutOfRange {
            addr: 0xFFFF_FFFF,
            len: 2
        }
    ));
    assert_eq!(mem.read_u8(0xFFFF_FFFF), 0);
    assert_eq!(mem.read_u8(0), 0);
}

#[test]
fn empty_image_is_accepted() {
    let mut mem = AddressSpace::new();
    load_image(&mut mem, KERN_TEXT, &[]).unwrap();
}

#[test]
fn file_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
    file.flush().unwrap();

    let bytes = load_file(file.path()).unwrap();
    assert_eq!(bytes, vec![0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kernel.bin");
    let err = load_file(&path).unwrap_err();
    match err {
        LoadError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
