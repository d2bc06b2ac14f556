//! Configuration Tests.

use std::io::Write;

use aruxi_core::common::constants::{DEFAULT_MAX_RUN_CYCLES, KERN_STACK_LIMIT, KERN_TEXT};
use aruxi_core::config::{Config, ConfigError};
use tempfile::NamedTempFile;

#[test]
fn empty_document_gives_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.general.max_run_cycles, DEFAULT_MAX_RUN_CYCLES);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.boot.entry, KERN_TEXT);
    assert_eq!(config.boot.stack_pointer, KERN_STACK_LIMIT);
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let config = Config::from_json(r#"{ "general": { "max_run_cycles": 10000 } }"#).unwrap();
    assert_eq!(config.general.max_run_cycles, 10000);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.boot.entry, KERN_TEXT);

    let config = Config::from_json(r#"{ "boot": { "entry": 524288 } }"#).unwrap();
    assert_eq!(config.boot.entry, 0x0008_0000);
    assert_eq!(config.boot.stack_pointer, KERN_STACK_LIMIT);
}

#[test]
fn invalid_json_is_a_parse_error() {
    assert!(matches!(
        Config::from_json("{ general: }"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        Config::from_json(r#"{ "general": { "max_run_cycles": -1 } }"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "general": {{ "trace_instructions": true }}, "boot": {{ "stack_pointer": 4026531840 }} }}"#
    )
    .unwrap();
    file.flush().unwrap();

    let config = Config::load(file.path()).unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.boot.stack_pointer, 0xF000_0000);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}
