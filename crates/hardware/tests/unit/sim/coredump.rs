//! Process Dump Tests.

use aruxi_core::core::arch::process::ProcessState;
use aruxi_core::sim::coredump::{ProcessDump, render};
use pretty_assertions::assert_eq;

fn sample() -> ProcessState {
    let mut gpr = [0; 25];
    gpr[0] = 0x0000_0002;
    gpr[12] = 0x0000_1700;
    gpr[23] = 0x2019_0040;
    ProcessState {
        pid: 3,
        threadc: 1,
        sp: 0x7099_0000,
        ir: 0x2019_0008,
        cstr: 0x0040,
        esr: 0x000C,
        gpr,
        excp_type: 1,
        ..ProcessState::default()
    }
}

#[test]
fn header_fields() {
    let dump = render(&sample());
    let lines: Vec<&str> = dump.lines().take(6).collect();
    assert_eq!(
        lines,
        vec![
            "PID: 3",
            "Threadc: 1",
            "SP: 0x70990000",
            "IR: 0x20190008",
            "CSTR: 0x0040",
            "ESR: 0x000c",
        ]
    );
}

#[test]
fn saved_registers_use_abi_names() {
    let dump = render(&sample());
    assert!(dump.contains("X0/A0/XR: 0x00000002\n"));
    assert!(dump.contains("X17/S0: 0x00001700\n"));
    assert!(dump.contains("X28/LR: 0x20190040\n"));
    assert!(!dump.contains("X12/C0"));
    assert!(!dump.contains("X31/SP"));
}

#[test]
fn one_line_per_field() {
    let dump = render(&sample());
    assert_eq!(dump.lines().count(), 6 + 25 + 1);
    assert_eq!(dump.lines().last(), Some("excpType: DATA ABORT"));
}

#[test]
fn exception_labels() {
    for (tag, label) in [(0, "SYSCALL"), (1, "DATA ABORT"), (2, "FETCH ABORT"), (9, "FETCH ABORT")] {
        let ps = ProcessState {
            excp_type: tag,
            ..ProcessState::default()
        };
        let dump = ProcessDump(&ps).to_string();
        assert!(dump.ends_with(&format!("excpType: {label}\n")), "{tag}");
    }
}
