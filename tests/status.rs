use hw::core::error::HwError;
use hw::core::status::{read_latest, record_latest, status_path};
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_reads_as_empty_record() {
    let tmp = tempdir().unwrap();
    assert_eq!(read_latest(tmp.path()).unwrap(), None);
}

#[test]
fn empty_record_reads_as_none() {
    let tmp = tempdir().unwrap();
    fs::write(status_path(tmp.path()), "{}").unwrap();
    assert_eq!(read_latest(tmp.path()).unwrap(), None);
}

#[test]
fn record_then_read_round_trips() {
    let tmp = tempdir().unwrap();
    record_latest(tmp.path(), "Essay_One.markdown").unwrap();
    assert_eq!(
        read_latest(tmp.path()).unwrap(),
        Some("Essay_One.markdown".to_string())
    );
}

#[test]
fn record_latest_is_idempotent() {
    let tmp = tempdir().unwrap();
    record_latest(tmp.path(), "Essay_One.markdown").unwrap();
    let first = fs::read(status_path(tmp.path())).unwrap();
    record_latest(tmp.path(), "Essay_One.markdown").unwrap();
    let second = fs::read(status_path(tmp.path())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn last_writer_wins() {
    let tmp = tempdir().unwrap();
    record_latest(tmp.path(), "a.markdown").unwrap();
    record_latest(tmp.path(), "b.tex").unwrap();
    assert_eq!(read_latest(tmp.path()).unwrap(), Some("b.tex".to_string()));
}

#[test]
fn corrupt_record_is_reported_as_corrupt() {
    let tmp = tempdir().unwrap();
    fs::write(status_path(tmp.path()), "not json at all").unwrap();
    assert!(matches!(
        read_latest(tmp.path()),
        Err(HwError::CorruptStatus(_))
    ));
}

#[test]
fn unknown_keys_survive_a_rewrite() {
    let tmp = tempdir().unwrap();
    fs::write(status_path(tmp.path()), r#"{"theme":"dark"}"#).unwrap();
    record_latest(tmp.path(), "Essay_One.markdown").unwrap();

    let raw = fs::read_to_string(status_path(tmp.path())).unwrap();
    let parsed: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["latestHW"], "Essay_One.markdown");
    assert_eq!(parsed["theme"], "dark");
}

#[test]
fn writes_leave_no_temp_file_behind() {
    let tmp = tempdir().unwrap();
    record_latest(tmp.path(), "Essay_One.markdown").unwrap();
    let entries: Vec<_> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("status.json")]);
}
