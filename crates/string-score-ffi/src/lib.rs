//! String Score C interface
//!
//! Exposes `string-score` through a C ABI so host languages (Go via CGO,
//! Python via ctypes, Swift, ...) can rank candidates with the same scorer.
//!
//! ## Usage from C
//!
//! ```c
//! StringScoreResultC r = string_score_compute("Hello World", "hw", 0.0, false);
//! if (r.success) printf("%f\n", r.score);
//! string_score_result_free(r);
//!
//! StringScorerResultC s = string_scorer_new("{\"fuzziness\": 0.5}");
//! StringScoreResultC r2 = string_scorer_score(s.scorer, "Hello World", "hxllo");
//! string_score_result_free(r2);
//! string_scorer_free(s.scorer);
//! ```

pub mod ffi;
pub mod util;

use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logger for the library.
/// Safe to call more than once; only the first call installs a subscriber.
///
/// The log level is controlled via the RUST_LOG environment variable:
/// - RUST_LOG=string_score=debug
/// - RUST_LOG=string_score=trace
pub fn init_logger() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        // Host may already have installed a global subscriber
        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .try_init()
            .is_ok();
        if installed {
            info!("string-score library initialized");
            debug!("Logging is enabled at debug level");
        }
    });
}

// Re-export FFI types for C consumers
pub use ffi::{StringScoreResultC, StringScorerResultC};
