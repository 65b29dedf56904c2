//! Copying and concatenation into caller-provided buffers.
//!
//! Where libc would write past the end of a buffer, these functions return
//! [`Error::RANGE`] and leave the destination untouched.

use core::ffi::CStr;

use crate::{
    consts::NUL,
    error::{Error, Result},
    len::{strlen, strnlen},
};

/// Copies `src`, including its terminator, to the start of `dest`.
///
/// Returns the length of the copied string.
pub fn strcpy(dest: &mut [u8], src: &CStr) -> Result<usize> {
    let bytes = src.to_bytes_with_nul();
    dest.get_mut(..bytes.len())
        .ok_or(Error::RANGE)?
        .copy_from_slice(bytes);
    Ok(bytes.len() - 1)
}

/// Copies at most `n` bytes of `src` to `dest`, padding with null bytes.
///
/// Exactly the first `n` bytes of `dest` are written.  If the string in `src` is shorter than `n`,
/// the rest of them are zeroed; otherwise the copy is truncated and `dest` is not terminated.
///
/// Returns the number of bytes taken from `src`.
pub fn strncpy(dest: &mut [u8], src: &[u8], n: usize) -> Result<usize> {
    let dest = dest.get_mut(..n).ok_or(Error::RANGE)?;
    let len = strnlen(src, n);
    dest[len..].fill(NUL);
    dest[..len].copy_from_slice(&src[..len]);
    Ok(len)
}

/// Appends at most `n` bytes of `src` to the string held in `dest`, then terminates it.
///
/// Returns the length of the resulting string.
pub fn strncat(dest: &mut [u8], src: &[u8], n: usize) -> Result<usize> {
    let start = strlen(dest);
    if start == dest.len() {
        return Err(Error::INVALID);
    }
    let len = strnlen(src, n);
    let end = start + len;
    let tail = dest.get_mut(start..=end).ok_or(Error::RANGE)?;
    tail[..len].copy_from_slice(&src[..len]);
    tail[len] = NUL;
    Ok(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cstr;
    use proptest::prelude::*;
    use std::vec::Vec;

    #[test]
    fn strcpy_copies_terminator() {
        let mut buf = [0xffu8; 8];
        assert_eq!(strcpy(&mut buf, cstr!("abc")), Ok(3));
        assert_eq!(&buf, b"abc\0\xff\xff\xff\xff");
    }

    #[test]
    fn strcpy_needs_room_for_terminator() {
        let mut buf = [0xffu8; 3];
        assert_eq!(strcpy(&mut buf, cstr!("abc")), Err(Error::RANGE));
        assert_eq!(buf, [0xff; 3]);
    }

    #[test]
    fn strncpy_pads_short_source() {
        let mut buf = [0xffu8; 8];
        assert_eq!(strncpy(&mut buf, b"ab\0", 6), Ok(2));
        assert_eq!(&buf, b"ab\0\0\0\0\xff\xff");
    }

    #[test]
    fn strncpy_truncates_long_source() {
        let mut buf = [0xffu8; 6];
        assert_eq!(strncpy(&mut buf, b"abcdef\0", 4), Ok(4));
        // not terminated
        assert_eq!(&buf, b"abcd\xff\xff");
    }

    #[test]
    fn strncpy_exact_length_is_not_terminated() {
        let mut buf = [0xffu8; 4];
        assert_eq!(strncpy(&mut buf, b"abc\0", 3), Ok(3));
        assert_eq!(&buf, b"abc\xff");
    }

    #[test]
    fn strncpy_zero_writes_nothing() {
        let mut buf = [0xffu8; 2];
        assert_eq!(strncpy(&mut buf, b"abc\0", 0), Ok(0));
        assert_eq!(buf, [0xff; 2]);
    }

    #[test]
    fn strncpy_rejects_short_destination() {
        let mut buf = [0xffu8; 2];
        assert_eq!(strncpy(&mut buf, b"a\0", 3), Err(Error::RANGE));
        assert_eq!(buf, [0xff; 2]);
    }

    #[test]
    fn strncat_appends_and_terminates() {
        let mut buf = [0xffu8; 10];
        buf[..4].copy_from_slice(b"foo\0");
        assert_eq!(strncat(&mut buf, b"barbaz\0", 3), Ok(6));
        assert_eq!(&buf[..7], b"foobar\0");
    }

    #[test]
    fn strncat_stops_at_source_terminator() {
        let mut buf = [0u8; 10];
        buf[..2].copy_from_slice(b"ab");
        assert_eq!(strncat(&mut buf, b"c\0def", 8), Ok(3));
        assert_eq!(&buf[..4], b"abc\0");
    }

    #[test]
    fn strncat_onto_empty() {
        let mut buf = [0u8; 4];
        assert_eq!(strncat(&mut buf, b"xyz", 3), Ok(3));
        assert_eq!(&buf, b"xyz\0");
    }

    #[test]
    fn strncat_requires_terminated_destination() {
        let mut buf = *b"abc";
        assert_eq!(strncat(&mut buf, b"d\0", 1), Err(Error::INVALID));
    }

    #[test]
    fn strncat_rejects_overflow() {
        let mut buf = *b"ab\0\0";
        assert_eq!(strncat(&mut buf, b"cd\0", 2), Err(Error::RANGE));
        assert_eq!(&buf, b"ab\0\0");
    }

    proptest! {
        #[test]
        fn prop_strncpy_pads_when_source_fits(
            src in proptest::collection::vec(1u8.., 0..32),
            extra in 0usize..16,
        ) {
            let n = src.len() + extra;
            let mut dest: Vec<u8> = std::vec![0xaa; n + 4];
            prop_assert_eq!(strncpy(&mut dest, &src, n), Ok(src.len()));
            prop_assert_eq!(&dest[..src.len()], &src[..]);
            prop_assert!(dest[src.len()..n].iter().all(|&b| b == 0));
            prop_assert!(dest[n..].iter().all(|&b| b == 0xaa));
        }
    }
}
