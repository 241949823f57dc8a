#![cfg(test)]
use std::path::{Path, PathBuf};

use ouisql_common::config::{Config, Source};
use ouisql_core::converter::{ConversionService, Summary};
use ouisql_core::error::{ConvertError, FetchError};
use ouisql_core::registry::{self, FileRegistry};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_registry(dir: &TempDir, contents: &[u8]) -> PathBuf {
    let path = dir.path().join("manuf");
    std::fs::write(&path, contents).unwrap();
    path
}

fn convert(registry: &Path, output: &Path) -> anyhow::Result<Summary> {
    let service = ConversionService::new(Box::new(FileRegistry::new(registry)));
    Ok(service.convert(output)?)
}

/// A registry trimmed down from the real Wireshark `manuf` layout.
const MANUF: &str = "\
# This file was generated by TShark
#
# Wireshark - Network traffic analyzer

00:00:00\tXerox\tXerox Corporation
00:00:0C\tCisco\tCisco Systems, Inc
00:1B:C5\tIeeeRegi\tIEEE Registration Authority
00:1B:C5:00:00/36\tConverin\tConverging Systems Inc.
00:1B:C5:00:10/36\tOBrien\tO'Brien's Networking
00:55:DA\tIeeeRegi\tIEEE Registration Authority
00:55:DA:00/28\tShinkoTe\tShinko Technos co.,ltd.
00:55:DA:10/28\tKoolpos\tKoolPOS Inc.
not-a-rule
00:50:C2:00:00:00/40\tOdd
08:00:87\tXyplex
";

#[test]
fn full_registry_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let registry = write_registry(&dir, MANUF.as_bytes());
    let output = dir.path().join("vendor.sql");

    let summary = convert(&registry, &output).unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "start transaction;\n\
         insert into vendor(prefix, name) values\n\
         \t('00:00:00', 'Xerox Corporation'),\n\
         \t('00:00:0c', 'Cisco Systems, Inc'),\n\
         \t('00:1b:c5:00:0', 'Converging Systems Inc.'),\n\
         \t('00:1b:c5:00:1', 'O''Brien''s Networking'),\n\
         \t('00:55:da:0', 'Shinko Technos co.,ltd.'),\n\
         \t('00:55:da:1', 'KoolPOS Inc.'),\n\
         \t('08:00:87', 'Xyplex');\n\
         end transaction;\n"
    );

    assert_eq!(summary.rules, 11);
    assert_eq!(summary.entries, 7);
    assert_eq!(summary.overridden, 2);
    assert_eq!(summary.skipped, 2);
}

#[test]
fn block_overrides_oui_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let registry = write_registry(&dir, b"00:00:0C\tCisco\n00:00:0C/28\tCisco Special\n");
    let output = dir.path().join("vendor.sql");

    convert(&registry, &output).unwrap();
    let sql = std::fs::read_to_string(&output).unwrap();

    let rows: Vec<&str> = sql.lines().filter(|l| l.starts_with('\t')).collect();
    assert_eq!(rows, vec!["\t('00:00:0c/2', 'Cisco Special');"]);
}

#[test]
fn windows_line_endings_and_bad_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let registry = write_registry(&dir, b"# header\r\n00:00:0C\tCisco\tCisco \xff Systems\r\n");
    let output = dir.path().join("vendor.sql");

    convert(&registry, &output).unwrap();

    assert!(std::fs::read_to_string(&output)
        .unwrap()
        .contains("\t('00:00:0c', 'Cisco \u{FFFD} Systems');\n"));
}

#[test]
fn comments_only_registry_writes_empty_transaction() {
    let dir = tempfile::tempdir().unwrap();
    let registry = write_registry(&dir, b"# nothing here\n\n");
    let output = dir.path().join("vendor.sql");

    let summary = convert(&registry, &output).unwrap();

    assert_eq!(summary.entries, 0);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "start transaction;\nend transaction;\n"
    );
}

#[test]
fn rerun_produces_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let registry = write_registry(&dir, MANUF.as_bytes());
    let first = dir.path().join("first.sql");
    let second = dir.path().join("second.sql");

    convert(&registry, &first).unwrap();
    convert(&registry, &second).unwrap();

    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn missing_registry_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config {
        source: Source::File { path: dir.path().join("absent") },
        output: dir.path().join("vendor.sql"),
        ..Config::default()
    };

    let service = ConversionService::new(registry::from_config(&cfg).unwrap());
    let err = service.convert(&cfg.output).unwrap_err();

    assert!(matches!(err, ConvertError::Fetch(FetchError::File { .. })));
    assert!(!cfg.output.exists());
}

#[test]
fn unwritable_output_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let registry = write_registry(&dir, MANUF.as_bytes());
    let output = dir.path().join("missing-dir").join("vendor.sql");

    let err = convert(&registry, &output).unwrap_err();

    match err.downcast_ref::<ConvertError>() {
        Some(ConvertError::Write(write)) => assert_eq!(write.path, output),
        other => panic!("expected a write error, got {other:?}"),
    }
}
