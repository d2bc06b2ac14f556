//! Address Space Unit Tests.

use aruxi_core::soc::AddressSpace;
use proptest::prelude::*;

#[test]
fn fresh_space_reads_zero_everywhere() {
    let mem = AddressSpace::new();
    assert_eq!(mem.read_u32(0), 0);
    assert_eq!(mem.read_u32(0xB808_0000), 0);
    assert_eq!(mem.read_u8(0xFFFF_FFFF), 0);
    assert_eq!(mem.resident_pages(), 0);
}

#[test]
fn multi_byte_access_is_little_endian() {
    let mut mem = AddressSpace::new();
    mem.write_u32(0x2009_0000, 0xAABB_CCDD);
    assert_eq!(mem.read_u8(0x2009_0000), 0xDD);
    assert_eq!(mem.read_u16(0x2009_0002), 0xAABB);

    mem.write_u16(0x2009_0010, 0x1234);
    assert_eq!(mem.read_bytes_vec(0x2009_0010, 2), vec![0x34, 0x12]);
}

#[test]
fn word_straddling_a_page_boundary() {
    let mut mem = AddressSpace::new();
    mem.write_u32(0x0000_0FFE, 0x0102_0304);
    assert_eq!(mem.read_u32(0x0000_0FFE), 0x0102_0304);
    assert_eq!(mem.resident_pages(), 2);
}

#[test]
fn word_at_top_of_space_wraps_to_zero() {
    let mut mem = AddressSpace::new();
    mem.write_u32(0xFFFF_FFFE, 0x1122_3344);
    assert_eq!(mem.read_u8(0x0000_0000), 0x22);
    assert_eq!(mem.read_u8(0x0000_0001), 0x11);
}

#[test]
fn pages_are_allocated_on_first_write_only() {
    let mut mem = AddressSpace::new();
    let _ = mem.read_u32(0x4000_0000);
    assert_eq!(mem.resident_pages(), 0);
    mem.write_u8(0x4000_0000, 1);
    mem.write_u8(0x4000_0FFF, 1);
    assert_eq!(mem.resident_pages(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn bytes_written_are_read_back(addr in any::<u32>(), data in proptest::collection::vec(any::<u8>(), 1..64)) {
        let mut mem = AddressSpace::new();
        mem.write_bytes(addr, &data);
        let mut out = vec![0u8; data.len()];
        mem.read_bytes(addr, &mut out);
        prop_assert_eq!(out, data);
    }
}

trait ReadVec {
    fn read_bytes_vec(&self, addr: u32, len: usize) -> Vec<u8>;
}

impl ReadVec for AddressSpace {
    fn read_bytes_vec(&self, addr: u32, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.read_bytes(addr, &mut out);
        out
    }
}
