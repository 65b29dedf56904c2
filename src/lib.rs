#![no_std]

/*!
Minimal C string functions for environments where the platform's `<string.h>`
is unavailable or unwanted, such as bare-metal targets and interpreters that
model a C program without linking a real libc.

Two layers are provided:

- the safe functions re-exported at the crate root (from `string-stubs-core`),
  which take [`CStr`](core::ffi::CStr) and byte slices and report
  buffer problems as [`Error`]s;
- [`c_stubs`], the `unsafe extern "C"` functions with the usual libc
  signatures.  Enable the `c-stubs` feature to export them under their C
  names.

```
use string_stubs::{cstr, strcasecmp, strrchr};

assert_eq!(strcasecmp(cstr!("ABC"), cstr!("abc")), 0);
assert_eq!(strrchr(cstr!("/usr/lib"), b'/'), Some(cstr!("/lib")));
```
*/

#[cfg(test)]
extern crate std;

pub mod c_stubs;

pub use string_stubs_core::{
    cstr, strcasecmp, strcpy, strerror, strlen, strncat, strncpy, strnlen, strrchr, strstr,
    Error, Result, NUL, STRERROR_PLACEHOLDER,
};

#[cfg(feature = "alloc")]
pub use string_stubs_core::strdup;

#[cfg(feature = "heapless")]
pub use string_stubs_core::strdup_in;
