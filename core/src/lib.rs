#![no_std]

//! Core algorithms for the [`string-stubs`][] crate.
//!
//! The functions here mirror a handful of `<string.h>` routines, but take
//! [`CStr`][core::ffi::CStr] and byte slices instead of raw pointers.
//! A byte slice standing in for a `char *` buffer ends at its first null byte
//! or at the end of the slice, whichever comes first.
//!
//! [`string-stubs`]: https://docs.rs/string-stubs

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cmp;
mod consts;
mod copy;
#[cfg(any(feature = "alloc", feature = "heapless"))]
mod dup;
mod error;
mod len;
mod search;

pub use cmp::strcasecmp;
pub use consts::{NUL, STRERROR_PLACEHOLDER};
pub use copy::{strcpy, strncat, strncpy};
#[cfg(feature = "alloc")]
pub use dup::strdup;
#[cfg(feature = "heapless")]
pub use dup::strdup_in;
pub use error::{strerror, Error, Result};
pub use len::{strlen, strnlen};
pub use search::{strrchr, strstr};

/// Creates a `&'static CStr` from a string literal without a trailing null.
///
/// Panics and causes a compiler error if the string contains null bytes.
///
/// # Examples
///
/// ```
/// use string_stubs_core::cstr;
/// use core::ffi::CStr;
///
/// const GREETING: &CStr = cstr!("hello");
/// assert_eq!(GREETING.to_bytes(), b"hello");
/// assert_eq!(cstr!("").to_bytes_with_nul(), b"\0");
/// ```
///
/// Illegal values:
///
/// ```compile_fail
/// # use string_stubs_core::cstr;
/// # use core::ffi::CStr;
/// const WITH_NULL: &CStr = cstr!("he\0llo");  // does not compile
/// ```
///
/// The macro enforces const evaluation so that compilation fails for illegal values even if the
/// macro is not used in a const context:
///
/// ```compile_fail
/// # use string_stubs_core::cstr;
/// let s = cstr!("te\0st");  // does not compile
/// ```
#[macro_export]
macro_rules! cstr {
    ($s:literal) => {{
        const _CSTR: &::core::ffi::CStr =
            match ::core::ffi::CStr::from_bytes_with_nul(::core::concat!($s, "\0").as_bytes()) {
                Ok(s) => s,
                Err(_) => panic!("invalid C string literal"),
            };
        _CSTR
    }};
}
