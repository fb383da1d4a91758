//! C-compatible FFI interface for the scorer
//!
//! # Memory Ownership Rules
//!
//! - `string_scorer_new()` allocates on Rust heap, caller owns the scorer pointer
//! - `string_scorer_free()` must be called to deallocate it
//! - `error_msg` strings are owned by the caller: use `string_score_result_free()`
//!   for score results and `string_score_string_free()` for scorer results
//! - Input strings are borrowed for the duration of the call only
//!
//! # Thread Safety
//!
//! Scoring is stateless. A scorer may be used from several threads at once.

use std::os::raw::c_char;
use std::ptr;

use string_score::{Fuzziness, Scorer, ScorerConfig};
use tracing::{debug, warn};

use crate::util::{cstr_to_str, free_cstring, FfiResult};

// Safety limits
const MAX_INPUT_LENGTH: usize = 100_000;
const MAX_CONFIG_LENGTH: usize = 10_000;

/// C-compatible score result
#[repr(C)]
pub struct StringScoreResultC {
    pub success: bool,
    pub error_msg: *mut c_char,
    pub score: f64,
}

/// C-compatible result of creating a scorer
#[repr(C)]
pub struct StringScorerResultC {
    pub success: bool,
    pub error_msg: *mut c_char,
    /// Owned by the caller on success, NULL otherwise
    pub scorer: *mut Scorer,
}

impl StringScoreResultC {
    fn ok(score: f64) -> Self {
        Self {
            success: true,
            error_msg: ptr::null_mut(),
            score,
        }
    }
}

impl FfiResult for StringScoreResultC {
    const ERROR_FALLBACK: &'static str = "score failed";

    fn error_fields(error_msg: *mut c_char) -> Self {
        Self {
            success: false,
            error_msg,
            score: 0.0,
        }
    }
}

impl FfiResult for StringScorerResultC {
    const ERROR_FALLBACK: &'static str = "invalid scorer config";

    fn error_fields(error_msg: *mut c_char) -> Self {
        Self {
            success: false,
            error_msg,
            scorer: ptr::null_mut(),
        }
    }
}

/// Borrow both inputs, enforcing the length limit
unsafe fn read_inputs<'a>(
    source: *const c_char,
    query: *const c_char,
) -> Result<(&'a str, &'a str), String> {
    let source = unsafe { cstr_to_str(source) }.map_err(|e| format!("source: {}", e))?;
    let query = unsafe { cstr_to_str(query) }.map_err(|e| format!("query: {}", e))?;
    if source.len() > MAX_INPUT_LENGTH || query.len() > MAX_INPUT_LENGTH {
        return Err(format!("input exceeds {} bytes", MAX_INPUT_LENGTH));
    }
    Ok((source, query))
}

// ============================================================================
// Library
// ============================================================================

#[no_mangle]
pub extern "C" fn string_score_init_logger() {
    crate::init_logger();
}

/// Library version as a static C string; do not free
#[no_mangle]
pub extern "C" fn string_score_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

// ============================================================================
// One-shot scoring
// ============================================================================

/// Score `query` against `source`.
///
/// `fuzziness` is only read when `has_fuzziness` is true and must then lie
/// in [0, 1).
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn string_score_compute(
    source: *const c_char,
    query: *const c_char,
    fuzziness: f64,
    has_fuzziness: bool,
) -> StringScoreResultC {
    let (source, query) = match unsafe { read_inputs(source, query) } {
        Ok(inputs) => inputs,
        Err(e) => return StringScoreResultC::error(&e),
    };

    let fuzziness = if has_fuzziness {
        match Fuzziness::new(fuzziness) {
            Ok(f) => Some(f.get()),
            Err(e) => {
                warn!(fuzziness, "rejected fuzziness");
                return StringScoreResultC::error(&e.to_string());
            }
        }
    } else {
        None
    };

    StringScoreResultC::ok(string_score::score(source, query, fuzziness))
}

#[no_mangle]
pub extern "C" fn string_score_result_free(result: StringScoreResultC) {
    unsafe { free_cstring(result.error_msg) };
}

#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn string_score_string_free(s: *mut c_char) {
    unsafe { free_cstring(s) };
}

// ============================================================================
// Scorer Lifecycle
// ============================================================================

/// Create a scorer from a JSON config such as
/// `{"fuzziness": 0.5, "unit": "scalar"}`. NULL means the default config.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn string_scorer_new(config_json: *const c_char) -> StringScorerResultC {
    let config = if config_json.is_null() {
        ScorerConfig::default()
    } else {
        let json = match unsafe { cstr_to_str(config_json) } {
            Ok(json) => json,
            Err(e) => return StringScorerResultC::error(&format!("config: {}", e)),
        };
        if json.len() > MAX_CONFIG_LENGTH {
            return StringScorerResultC::error("config exceeds maximum length");
        }
        match ScorerConfig::from_json(json) {
            Ok(config) => config,
            Err(e) => return StringScorerResultC::error(&e.to_string()),
        }
    };

    let scorer = Box::into_raw(Box::new(Scorer::with_config(config)));
    debug!("created scorer handle");
    StringScorerResultC {
        success: true,
        error_msg: ptr::null_mut(),
        scorer,
    }
}

#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn string_scorer_free(scorer: *mut Scorer) {
    if !scorer.is_null() {
        unsafe {
            let _ = Box::from_raw(scorer);
        }
    }
}

/// Score `query` against `source` with the scorer's configuration
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn string_scorer_score(
    scorer: *const Scorer,
    source: *const c_char,
    query: *const c_char,
) -> StringScoreResultC {
    if scorer.is_null() {
        return StringScoreResultC::error("null scorer pointer");
    }
    let scorer = unsafe { &*scorer };

    match unsafe { read_inputs(source, query) } {
        Ok((source, query)) => StringScoreResultC::ok(scorer.score(source, query)),
        Err(e) => StringScoreResultC::error(&e),
    }
}
