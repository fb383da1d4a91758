//! C string plumbing for the exported functions
//!
//! Every `*mut c_char` this crate hands out was produced by
//! `CString::into_raw` and goes back through [`free_cstring`], either via
//! `string_score_result_free` or `string_score_string_free`.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Owned C copy of `s`, or of `fallback` when `s` holds an interior NUL.
#[inline]
pub fn cstring_new_or_fallback(s: &str, fallback: &'static str) -> *mut c_char {
    CString::new(s)
        .or_else(|_| CString::new(fallback))
        .unwrap_or_default()
        .into_raw()
}

/// Reclaim a string returned by this crate. NULL is ignored.
///
/// # Safety
/// `ptr` must be NULL or a pointer from `CString::into_raw` not yet reclaimed.
#[inline]
pub unsafe fn free_cstring(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            drop(CString::from_raw(ptr));
        }
    }
}

/// View a caller's source, query or config string as UTF-8.
///
/// # Safety
/// `ptr` must be NULL or point to a NUL-terminated buffer that outlives `'a`.
pub unsafe fn cstr_to_str<'a>(ptr: *const c_char) -> Result<&'a str, &'static str> {
    if ptr.is_null() {
        return Err("null pointer");
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| "invalid UTF-8")
}

/// Score and scorer results share the `success` / `error_msg` header;
/// this builds the failed variant of either from a message.
pub trait FfiResult: Sized {
    /// Message used when the real one cannot be represented as a C string
    const ERROR_FALLBACK: &'static str;

    /// Failed result owning `error_msg`, every other field zeroed or NULL
    fn error_fields(error_msg: *mut c_char) -> Self;

    #[inline]
    fn error(msg: &str) -> Self {
        Self::error_fields(cstring_new_or_fallback(msg, Self::ERROR_FALLBACK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::ptr;

    #[test]
    fn test_cstring_new_or_fallback() {
        let ptr = cstring_new_or_fallback("hello", "fallback");
        assert!(!ptr.is_null());
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap();
        assert_eq!(s, "hello");
        unsafe { free_cstring(ptr) };
    }

    #[test]
    fn test_cstring_with_null_bytes_uses_fallback() {
        let ptr = cstring_new_or_fallback("hel\0lo", "fallback");
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap();
        assert_eq!(s, "fallback");
        unsafe { free_cstring(ptr) };
    }

    #[test]
    fn test_free_cstring_null_is_safe() {
        unsafe { free_cstring(ptr::null_mut()) };
    }

    #[test]
    fn test_cstr_to_str() {
        assert_eq!(unsafe { cstr_to_str(ptr::null()) }, Err("null pointer"));

        let s = CString::new("Ærø").unwrap();
        assert_eq!(unsafe { cstr_to_str(s.as_ptr()) }, Ok("Ærø"));

        let bad = CString::new(vec![0xff, 0xfe]).unwrap();
        assert_eq!(unsafe { cstr_to_str(bad.as_ptr()) }, Err("invalid UTF-8"));
    }
}
