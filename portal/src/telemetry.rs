//! Tracing subscriber setup.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! Filtering follows `RUST_LOG`.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LogFormat;

/// Install the global subscriber writing lines in `format`.
///
/// A second call, or a subscriber installed by someone else, is reported as
/// a warning and otherwise ignored.
pub fn init(format: LogFormat) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
