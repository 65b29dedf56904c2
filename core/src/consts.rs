use core::ffi::CStr;

/// The string terminator.
pub const NUL: u8 = 0;

/// Message returned by [`strerror`](crate::strerror) for every error number.
pub const STRERROR_PLACEHOLDER: &CStr = crate::cstr!("strerror message by tis-interpreter");
