//! Searching within C strings.
//!
//! A match is returned as the suffix of the haystack starting at the match, so the pointer of the
//! result is the pointer the C function would return.

use core::ffi::CStr;

/// The suffix of `s` starting at byte `at`.
///
/// `at` may be the index of the terminator, giving the empty string.
fn suffix(s: &CStr, at: usize) -> &CStr {
    let bytes = &s.to_bytes_with_nul()[at..];
    // SAFETY: `bytes` is a non-empty tail of a C string, so it ends in its only null byte
    unsafe { CStr::from_bytes_with_nul_unchecked(bytes) }
}

/// Locates the last occurrence of `c` in `s`.
///
/// The terminator takes part in the search, so `strrchr(s, 0)` is the empty suffix at the end of
/// `s`.
pub fn strrchr(s: &CStr, c: u8) -> Option<&CStr> {
    s.to_bytes_with_nul()
        .iter()
        .rposition(|&b| b == c)
        .map(|at| suffix(s, at))
}

/// Locates the first occurrence of `needle` in `haystack`.
///
/// Each position that matches the first byte of `needle` is compared in full, so the worst case
/// is quadratic.  An empty `needle` matches at the start of `haystack`.
pub fn strstr<'a>(haystack: &'a CStr, needle: &CStr) -> Option<&'a CStr> {
    let hay = haystack.to_bytes();
    let pattern = needle.to_bytes();
    let Some(&first) = pattern.first() else {
        return Some(haystack);
    };

    (0..hay.len())
        .filter(|&at| hay[at] == first)
        .find(|&at| hay[at..].starts_with(pattern))
        .map(|at| suffix(haystack, at))
}
