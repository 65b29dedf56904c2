use core::ffi::{c_int, CStr};

/// Folds an ASCII uppercase letter to lowercase, leaving every other byte alone.
#[inline]
fn fold(c: u8) -> u8 {
    // both range checks are always evaluated
    #[allow(clippy::manual_range_contains)]
    let upper = (c >= b'A') & (c <= b'Z');
    c + ((upper as u8) << 5)
}

/// Compares two C strings, ignoring ASCII case.
///
/// On the first pair of bytes that differ after folding, returns the difference of the folded
/// bytes.  If one string is a prefix of the other, the shorter one compares as less, with `-1`
/// or `1` as result.  Bytes outside `A..=Z` are compared as they are.
pub fn strcasecmp(s1: &CStr, s2: &CStr) -> c_int {
    let mut left = s1.to_bytes().iter();
    let mut right = s2.to_bytes().iter();
    loop {
        match (left.next(), right.next()) {
            (Some(&c1), Some(&c2)) => {
                let res = c_int::from(fold(c1)) - c_int::from(fold(c2));
                if res != 0 {
                    return res;
                }
            }
            (None, None) => return 0,
            (None, Some(_)) => return -1,
            (Some(_), None) => return 1,
        }
    }
}
