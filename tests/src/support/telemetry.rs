//! Test diagnostics.
//!
//! Authentication failures are deliberately opaque to callers; the internal
//! rejection reasons only show up in tracing output. Run the suite with
//! `RUST_LOG=tz_01_wallet_auth=warn` to see them.

use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber once per test process.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
