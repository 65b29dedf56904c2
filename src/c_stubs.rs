//! C string functions not provided by compiler-builtins
//!
//! Use this instead of linking to libc if you only need a handful of string functions.
//! With the `c-stubs` feature, every function here is exported under its C name.
//!
//! As in libc, these functions trust their arguments: pointers must be valid and destinations
//! large enough.  The only reported failure is a null return from [`strdup`].

use core::{ffi::CStr, ptr, slice};

use cty::{c_char, c_int, c_void, size_t};
use log::{debug, trace};

extern "C" {
    // provided by `compiler-builtins`
    fn memcpy(dst: *mut c_void, src: *const c_void, n: size_t) -> *mut c_void;
    // provided by the platform allocator
    fn malloc(size: size_t) -> *mut c_void;
}

/// Length of `s`, reading no more than `n` bytes.
///
/// # Safety
/// `s` must be readable up to its terminator or for `n` bytes, whichever comes first.
unsafe fn strnlen(s: *const c_char, n: size_t) -> size_t {
    let mut len = 0;
    while len < n && *s.add(len) != 0 {
        len += 1;
    }
    len
}

/// # Safety
/// `s` must point to valid memory; `s` will be treated as a null terminated string
// `CStr::from_ptr` calls `strlen`, so this must not go through it.
#[cfg_attr(feature = "c-stubs", no_mangle)]
pub unsafe extern "C" fn strlen(mut s: *const c_char) -> size_t {
    let mut n = 0;
    while *s != 0 {
        s = s.add(1);
        n += 1;
    }
    n
}

/// # Safety
/// - `src` must be a valid C string (null terminated)
/// - `dst` must be large enough to hold `src` and its terminator
#[cfg_attr(feature = "c-stubs", no_mangle)]
pub unsafe extern "C" fn strcpy(dst: *mut c_char, src: *const c_char) -> *mut c_char {
    trace!("strcpy({:p}, {:p})", dst, src);
    memcpy(dst as *mut c_void, src as *const c_void, strlen(src) + 1) as *mut c_char
}

/// Duplicates `s` into memory obtained from `malloc`.
///
/// Returns null if the allocation fails.  Otherwise the caller owns the copy and releases it
/// with `free`.
///
/// # Safety
/// `s` must be a valid C string
#[cfg_attr(feature = "c-stubs", no_mangle)]
pub unsafe extern "C" fn strdup(s: *const c_char) -> *mut c_char {
    trace!("strdup({:p})", s);
    let size = strlen(s) + 1;
    let p = malloc(size);
    if p.is_null() {
        debug!("strdup: allocating {} bytes failed", size);
        return ptr::null_mut();
    }
    memcpy(p, s as *const c_void, size) as *mut c_char
}

/// Copies `s2` to `s1`, truncating or null-padding to always write `n` bytes.
///
/// # Safety
/// - `s1` must be writable for `n` bytes
/// - `s2` must be readable up to its terminator or for `n` bytes
/// - the two must not overlap
#[cfg_attr(feature = "c-stubs", no_mangle)]
pub unsafe extern "C" fn strncpy(s1: *mut c_char, s2: *const c_char, n: size_t) -> *mut c_char {
    trace!("strncpy({:p}, {:p}, {})", s1, s2, n);
    if n == 0 {
        return s1;
    }
    let len = strnlen(s2, n);
    let dest = slice::from_raw_parts_mut(s1 as *mut u8, n);
    let src = slice::from_raw_parts(s2 as *const u8, len);
    if let Err(error) = string_stubs_core::strncpy(dest, src, n) {
        debug!("strncpy: {:?}", error);
    }
    s1
}

/// Appends at most `n` bytes of `src` to `dest`, then terminates it.
///
/// # Safety
/// - `dest` must be a valid C string with room for the appended bytes and a terminator
/// - `src` must be readable up to its terminator or for `n` bytes
/// - the two must not overlap
#[cfg_attr(feature = "c-stubs", no_mangle)]
pub unsafe extern "C" fn strncat(dest: *mut c_char, src: *const c_char, n: size_t) -> *mut c_char {
    trace!("strncat({:p}, {:p}, {})", dest, src, n);
    let start = strlen(dest);
    let len = strnlen(src, n);
    let buf = slice::from_raw_parts_mut(dest as *mut u8, start + len + 1);
    let src = slice::from_raw_parts(src as *const u8, len);
    if let Err(error) = string_stubs_core::strncat(buf, src, len) {
        debug!("strncat: {:?}", error);
    }
    dest
}

/// Locates the last occurrence of `c`, converted to `char`, in `s`.
///
/// The terminator is part of the search.  Returns null if `c` does not occur.
///
/// # Safety
/// `s` must be a valid C string
#[cfg_attr(feature = "c-stubs", no_mangle)]
pub unsafe extern "C" fn strrchr(s: *const c_char, c: c_int) -> *mut c_char {
    trace!("strrchr({:p}, {})", s, c);
    let s = CStr::from_ptr(s);
    match string_stubs_core::strrchr(s, c as c_char as u8) {
        Some(found) => found.as_ptr() as *mut c_char,
        None => ptr::null_mut(),
    }
}

/// Locates the first occurrence of `substring` in `string`.
///
/// An empty `substring` matches at `string`.  Returns null if there is no match.
///
/// # Safety
/// `string` and `substring` must be valid C strings
#[cfg_attr(feature = "c-stubs", no_mangle)]
pub unsafe extern "C" fn strstr(string: *const c_char, substring: *const c_char) -> *mut c_char {
    trace!("strstr({:p}, {:p})", string, substring);
    let string = CStr::from_ptr(string);
    let substring = CStr::from_ptr(substring);
    match string_stubs_core::strstr(string, substring) {
        Some(found) => found.as_ptr() as *mut c_char,
        None => ptr::null_mut(),
    }
}

/// Returns the message for `errnum`, which is the same placeholder for every number.
///
/// The returned string must not be modified.
#[cfg_attr(feature = "c-stubs", no_mangle)]
pub extern "C" fn strerror(errnum: c_int) -> *mut c_char {
    trace!("strerror({})", errnum);
    string_stubs_core::strerror(errnum).as_ptr() as *mut c_char
}

/// Compares `s1` and `s2`, ignoring ASCII case.
///
/// # Safety
/// `s1` and `s2` must be valid C strings
#[cfg_attr(feature = "c-stubs", no_mangle)]
pub unsafe extern "C" fn strcasecmp(s1: *const c_char, s2: *const c_char) -> c_int {
    trace!("strcasecmp({:p}, {:p})", s1, s2);
    string_stubs_core::strcasecmp(CStr::from_ptr(s1), CStr::from_ptr(s2))
}
