use crate::consts::NUL;

/// Returns the length of the C string held in `s`.
///
/// This is the index of the first null byte, or `s.len()` if there is none.
pub fn strlen(s: &[u8]) -> usize {
    s.iter().position(|&b| b == NUL).unwrap_or(s.len())
}

/// Returns the length of the C string held in `s`, looking at no more than `maxlen` bytes.
pub fn strnlen(s: &[u8], maxlen: usize) -> usize {
    let limit = maxlen.min(s.len());
    strlen(&s[..limit])
}
