//! Error type for the checked string functions.

use core::{
    ffi::{c_int, CStr},
    fmt::{self, Debug, Formatter},
};

use ufmt::derive::uDebug;

use crate::consts::STRERROR_PLACEHOLDER;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The error type for the checked string functions.
///
/// Errors carry the negated `errno` value that a libc would report for the same condition.
/// Specific error codes are available as associated constants of this type.
///
/// ```
/// # use string_stubs_core::Error;
/// assert_eq!(Error::NO_MEMORY.code(), -12);
/// assert_eq!(Error::new(-34), Some(Error::RANGE));
/// assert_eq!(Error::new(0), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, uDebug)]
pub struct Error {
    code: c_int,
}

impl Error {
    /// Allocation of the result failed, or it does not fit the fixed-capacity buffer.
    pub const NO_MEMORY: Self = Self::new_const(-12);

    /// A buffer that must hold a C string has no terminator.
    pub const INVALID: Self = Self::new_const(-22);

    /// The destination buffer is too small for the result.
    pub const RANGE: Self = Self::new_const(-34);

    /// Construct an `Error` from an error code.
    ///
    /// Return values that are greater or equals to zero represent success.  In this case, `None`
    /// is returned.
    pub const fn new(code: c_int) -> Option<Self> {
        if code >= 0 {
            None
        } else {
            Some(Self { code })
        }
    }

    const fn new_const(code: c_int) -> Self {
        if code >= 0 {
            panic!("error code must be negative");
        }
        Self { code }
    }

    /// Return the error code of this error.
    pub const fn code(&self) -> c_int {
        self.code
    }

    /// The message [`strerror`] reports for this error.
    pub fn message(&self) -> &'static CStr {
        strerror(self.code.wrapping_neg())
    }
}

/// Prints a static string as the debug representation.
///
/// Unless the `debug-error` feature is enabled, this keeps the formatting machinery for error
/// codes out of the binary.
impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        #[cfg(not(feature = "debug-error"))]
        {
            f.debug_struct("Error").finish()
        }
        #[cfg(feature = "debug-error")]
        {
            match self {
                &Self::NO_MEMORY => f.write_str("NO_MEMORY"),
                &Self::INVALID => f.write_str("INVALID"),
                &Self::RANGE => f.write_str("RANGE"),
                other => f.debug_tuple("Error").field(&other.code).finish(),
            }
        }
    }
}

impl From<Error> for c_int {
    fn from(error: Error) -> Self {
        error.code
    }
}

/// Look up the message for an error number.
///
/// There is no message table: every `errnum` maps to [`STRERROR_PLACEHOLDER`].
pub fn strerror(_errnum: c_int) -> &'static CStr {
    STRERROR_PLACEHOLDER
}
