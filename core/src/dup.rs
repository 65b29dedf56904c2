//! Duplicating C strings into owned storage.

use core::ffi::CStr;

#[cfg(feature = "alloc")]
use alloc::{ffi::CString, vec::Vec};

use crate::error::{Error, Result};

/// Duplicates `s` into a new heap allocation.
///
/// Allocation failure is reported as [`Error::NO_MEMORY`] instead of aborting.
#[cfg(feature = "alloc")]
pub fn strdup(s: &CStr) -> Result<CString> {
    let bytes = s.to_bytes_with_nul();
    let mut buf = Vec::new();
    buf.try_reserve_exact(bytes.len())
        .map_err(|_| Error::NO_MEMORY)?;
    buf.extend_from_slice(bytes);
    CString::from_vec_with_nul(buf).map_err(|_| Error::INVALID)
}

/// Duplicates `s`, including its terminator, into a buffer of capacity `N`.
///
/// Fails with [`Error::NO_MEMORY`] if `N` is smaller than the string plus terminator.
#[cfg(feature = "heapless")]
pub fn strdup_in<const N: usize>(s: &CStr) -> Result<heapless::Vec<u8, N>> {
    heapless::Vec::from_slice(s.to_bytes_with_nul()).map_err(|_| Error::NO_MEMORY)
}
