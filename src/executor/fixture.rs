//! Stand-in parser executable for tests

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Serializes tests that write an executable and then spawn it
pub static SPAWN_LOCK: Mutex<()> = Mutex::const_new(());

/// Write `<root>/build/SLRParser` that logs its arguments to
/// `<root>/calls.log`, writes the `-o` file, then runs `tail`
pub fn fake_parser(root: &Path, tail: &str) -> PathBuf {
    let build = root.join("build");
    fs::create_dir_all(&build).unwrap();

    let script = format!(
        r#"#!/bin/sh
echo "$@" >> "{log}"
out=""
while [ $# -gt 0 ]; do
  if [ "$1" = "-o" ]; then out="$2"; fi
  shift
done
if [ -n "$out" ] && [ -d "$(dirname "$out")" ]; then echo report > "$out"; fi
{tail}
"#,
        log = calls_log(root).display(),
    );

    let path = build.join("SLRParser");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

pub fn calls_log(root: &Path) -> PathBuf {
    root.join("calls.log")
}

/// Argument lines recorded by the fake parser
pub fn recorded_calls(root: &Path) -> Vec<String> {
    fs::read_to_string(calls_log(root))
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
