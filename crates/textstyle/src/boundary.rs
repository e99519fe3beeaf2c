//! Incomplete-sequence detection.
//!
//! Splits a byte buffer into the part that can be decoded now and a trailing
//! fragment that might still grow into a valid multi-byte sequence once more
//! input arrives. This is the only place that reasons about UTF-8 boundaries;
//! the transformer and the destination flushing both go through it.

/// Longest UTF-8 encoding of a single scalar value, and therefore the widest
/// glyph a transform can emit. A destination at least this large always
/// makes progress.
pub const MAX_GLYPH_LEN: usize = 4;

#[inline]
const fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Length of the prefix of `buf` that does not end part-way through a
/// multi-byte sequence.
///
/// With `at_eof` set, nothing more is coming and the whole buffer is
/// considered complete. Otherwise a trailing fragment is held back only if it
/// is a valid, unfinished prefix of some UTF-8 sequence; bytes that can never
/// become valid are left in the complete part so they are passed through
/// rather than waited on.
///
/// ```rust
/// use textstyle::complete_prefix_len;
///
/// let a = "あ".as_bytes();
/// assert_eq!(complete_prefix_len(&[b'x', a[0], a[1]], false), 1);
/// assert_eq!(complete_prefix_len(&[b'x', a[0], a[1]], true), 3);
/// assert_eq!(complete_prefix_len(&[b'x', 0xFF], false), 2);
/// ```
#[must_use]
pub fn complete_prefix_len(buf: &[u8], at_eof: bool) -> usize {
    if at_eof {
        return buf.len();
    }

    // The last lead byte, if any, within reach of one maximal sequence.
    let window = buf.len().saturating_sub(MAX_GLYPH_LEN);
    let Some(lead) = (window..buf.len()).rev().find(|&i| !is_continuation(buf[i])) else {
        return buf.len();
    };

    match core::str::from_utf8(&buf[lead..]) {
        Err(e) if e.valid_up_to() == 0 && e.error_len().is_none() => lead,
        _ => buf.len(),
    }
}
