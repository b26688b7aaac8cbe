//! Integration tests for loading settings files from disk.

use std::io::Write;

use sentiscope as crate_root;

use crate_root::config::{OutputFormat, Settings};

#[test]
/// What: Load an explicit settings file written to a temp directory.
///
/// Inputs:
/// - File with comments, aliases and an unknown key.
///
/// Output:
/// - Values from the file applied over defaults.
///
/// Details:
/// - Environment overrides are applied by `load` too; the assertions only
///   cover keys those variables do not touch unless they are set.
fn load_explicit_settings_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.conf");
    let mut f = std::fs::File::create(&path).expect("create settings");
    writeln!(f, "# sentiscope settings").expect("write");
    writeln!(f, "output_format = text   # report by default").expect("write");
    writeln!(f, "pretty_json = false").expect("write");
    writeln!(f, "theme = dark").expect("write");
    drop(f);

    let s = Settings::load(Some(&path)).expect("settings load");
    assert_eq!(s.output_format, OutputFormat::Text);
    assert!(!s.pretty_json);
}

#[test]
fn empty_settings_file_keeps_defaults() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    let s = Settings::load(Some(file.path())).expect("settings load");
    let d = Settings::default();
    assert_eq!(s.output_format, d.output_format);
    assert_eq!(s.pretty_json, d.pretty_json);
}
