// C ABI surface for host front-ends (quiz UIs, editor plugins).
// Uses raw pointers and catch_unwind for stability; no global state is
// needed because the engine is pure.
use crate::core::converter::convert;
use crate::core::types::NumeralTriple;
use crate::fuzzy::matcher::is_match;
use crate::sampler;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

fn triple_to_json(triple: &NumeralTriple) -> String {
    serde_json::to_string(triple)
        .unwrap_or_else(|_| "{\"value\":-1,\"kanji\":\"?\",\"hiragana\":\"?\",\"romaji\":\"?\"}".to_string())
}

/// Converts `value` and returns the triple as a JSON string.
/// The caller owns the returned pointer and must release it with
/// `kazu_free_string`.
#[no_mangle]
pub extern "C" fn kazu_convert(value: i64) -> *mut c_char {
    let json = catch_unwind(|| triple_to_json(&convert(value)))
        .unwrap_or_else(|_| triple_to_json(&NumeralTriple::unknown(value)));
    CString::new(json)
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut())
}

/// Judges `input` against the canonical triple of `value`.
/// Null or non-UTF8 input, or an out-of-domain value, is never a match.
#[no_mangle]
pub extern "C" fn kazu_is_match(input: *const c_char, value: i64) -> bool {
    if input.is_null() {
        return false;
    }
    let c_str = unsafe { CStr::from_ptr(input) };
    let answer = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return false,
    };
    catch_unwind(AssertUnwindSafe(|| is_match(answer, &convert(value)))).unwrap_or(false)
}

/// Draws a realistic practice number from `[min, max]`.
#[no_mangle]
pub extern "C" fn kazu_sample(min: i64, max: i64) -> i64 {
    catch_unwind(|| sampler::sample(min, max)).unwrap_or(0)
}

/// Rounds an already-chosen value to its magnitude band's granularity.
#[no_mangle]
pub extern "C" fn kazu_round_realistic(value: i64) -> i64 {
    catch_unwind(|| sampler::round_to_realistic(value)).unwrap_or(0)
}

/// Releases a string previously returned by this API.
#[no_mangle]
pub extern "C" fn kazu_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
