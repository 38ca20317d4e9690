#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub const EMPTY_EXPORT: &str = r#"{"metadata":{"num_entries":0,"line_range":[1,1],"total_images":0,"total_words":0,"total_image_bytes":0,"first_entry":null,"last_entry":null},"entries":[]}"#;

pub fn validate_cmd() -> Command {
    let mut cmd = Command::cargo_bin("omata-validate").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn write_export(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
