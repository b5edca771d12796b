// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Installs a test log writer once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Writes a configuration fixture into `dir` and returns its path.
#[allow(dead_code)]
pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write fixture");
    path
}

/// The configuration used by most end-to-end tests.
#[allow(dead_code)]
pub const SETTINGS_INI: &str = r#"
# deployment settings
debug = true

[db]
host = "127.0.0.1"
port = 5432
admin_email = "a@b.com"
ratio = 0.75

[paths]
log = "/var/log/app.log"
socket = "::1"

[web]
homepage = "https://github.com/giantas/pyconfigreader"
bare = "https://example.com"
name = "demo"
"#;
