// SPDX-License-Identifier: Apache-2.0

/// Test-only helpers.
///
/// Installs a test-mode logger once; `RUST_LOG=trace` shows the dispatch decisions.
pub fn config_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
