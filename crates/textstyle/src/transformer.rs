//! Resumable, chunked transform.
//!
//! A [`Transformer`] accepts input and hands back output in caller-sized
//! pieces. Between calls it keeps two stocks of owned bytes:
//!
//! - `stock_to_write`: output already produced that did not fit into the
//!   previous destination. It is always flushed before new input is looked
//!   at.
//! - `stock_to_transform`: a trailing fragment of input that may be the
//!   start of a multi-byte sequence. It is prepended to the next source.
//!
//! Neither stock ever borrows from caller buffers, so callers are free to
//! reuse theirs as soon as a call returns.
//!
//! Accounting
//! - `written` is the number of bytes placed at the front of `dst`.
//! - `consumed` is the number of `src` bytes the transformer took
//!   responsibility for, either as output (written or queued) or as held-back
//!   fragment. The caller must offer `src[consumed..]` again next time; that
//!   is only ever non-empty after a [`Status::ShortDestination`] raised while
//!   flushing old output, in which case `consumed` is zero.
//! - Replacement glyphs are never split across destinations. A destination
//!   of at least [`MAX_GLYPH_LEN`] bytes always receives something when output
//!   is pending.

use alloc::{string::String, vec::Vec};

use log::trace;

use crate::{MAX_GLYPH_LEN, Replacer, Style, Substitute, complete_prefix_len};

/// Size of the internal destination used by the whole-buffer helpers.
const DRAIN_CHUNK: usize = 256;

/// Outcome of a [`Transformer::transform`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// All complete input was processed and all resulting output written.
    Success,
    /// Output is pending that did not fit into `dst`; call again with more
    /// room.
    ShortDestination,
    /// Only an unfinished multi-byte sequence is left and more input is
    /// needed before anything can be produced.
    ShortSource,
}

/// Byte counts and status of one [`Transformer::transform`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Progress {
    /// Bytes written to the front of `dst`.
    pub written: usize,
    /// Bytes of `src` accepted by the transformer.
    pub consumed: usize,
    /// Why the call returned.
    pub status: Status,
}

/// Stateful driver around a [`Replacer`].
///
/// ```rust
/// use textstyle::{Status, Style, Transformer};
///
/// let mut t = Transformer::new(Style::DOUBLE_STRUCK);
/// let input = "R→2".as_bytes();
/// let mut out = Vec::new();
/// let mut dst = [0u8; 4];
///
/// // Feed one byte at a time; the arrow is held back until it is complete.
/// for (i, b) in input.iter().enumerate() {
///     let p = t.transform(&mut dst, core::slice::from_ref(b), i + 1 == input.len());
///     assert_eq!(p.consumed, 1);
///     out.extend_from_slice(&dst[..p.written]);
/// }
/// assert_eq!(out, "\u{1D549}→𝟚".as_bytes());
/// ```
#[derive(Debug, Clone)]
pub struct Transformer<S = Style> {
    replacer: Replacer<S>,
    stock_to_transform: Vec<u8>,
    stock_to_write: Vec<u8>,
    scratch: Vec<u8>,
}

impl<S: Substitute> Transformer<S> {
    /// New transformer with empty stocks.
    #[must_use]
    pub fn new(subst: S) -> Self {
        Self::with_replacer(Replacer::new(subst))
    }

    /// New transformer around an existing replacer.
    #[must_use]
    pub fn with_replacer(replacer: Replacer<S>) -> Self {
        Self {
            replacer,
            stock_to_transform: Vec::new(),
            stock_to_write: Vec::new(),
            scratch: Vec::new(),
        }
    }

    /// The wrapped replacer.
    #[must_use]
    pub fn replacer(&self) -> &Replacer<S> {
        &self.replacer
    }

    /// Whether either stock holds bytes.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.stock_to_write.is_empty() || !self.stock_to_transform.is_empty()
    }

    /// Drop all carried-over state, for reuse on an unrelated stream.
    pub fn reset(&mut self) {
        trace!(
            "reset: dropping {} unwritten and {} untransformed bytes",
            self.stock_to_write.len(),
            self.stock_to_transform.len()
        );
        self.stock_to_transform.clear();
        self.stock_to_write.clear();
    }

    /// Transform the next chunk of `src` into `dst`.
    ///
    /// `at_eof` marks `src` as the final chunk of the stream: a trailing
    /// unfinished sequence is then passed through as-is instead of being held
    /// back. Calling with an empty `src` and `at_eof` set flushes everything
    /// still held, given enough room in `dst`.
    pub fn transform(&mut self, dst: &mut [u8], src: &[u8], at_eof: bool) -> Progress {
        let mut written = 0;

        if !self.stock_to_write.is_empty() {
            written = flush(dst, &self.stock_to_write);
            self.stock_to_write.drain(..written);
            if !self.stock_to_write.is_empty() {
                trace!(
                    "short destination: {} of {} stocked bytes still pending",
                    self.stock_to_write.len(),
                    self.stock_to_write.len() + written
                );
                return Progress {
                    written,
                    consumed: 0,
                    status: Status::ShortDestination,
                };
            }
        }

        let joined;
        let input: &[u8] = if self.stock_to_transform.is_empty() {
            src
        } else {
            let mut buf = core::mem::take(&mut self.stock_to_transform);
            buf.extend_from_slice(src);
            joined = buf;
            &joined
        };

        let ready = complete_prefix_len(input, at_eof);
        self.scratch.clear();
        self.replacer.replace_into(&input[..ready], &mut self.scratch);

        let n = flush(&mut dst[written..], &self.scratch);
        written += n;
        self.stock_to_write.extend_from_slice(&self.scratch[n..]);

        self.stock_to_transform.clear();
        self.stock_to_transform.extend_from_slice(&input[ready..]);

        let status = if !self.stock_to_write.is_empty() {
            trace!(
                "short destination: queued {} output bytes",
                self.stock_to_write.len()
            );
            Status::ShortDestination
        } else if !at_eof && ready == 0 && !self.stock_to_transform.is_empty() {
            trace!(
                "short source: holding {} bytes of an unfinished sequence",
                self.stock_to_transform.len()
            );
            Status::ShortSource
        } else {
            Status::Success
        };

        #[cfg(any(test, feature = "fuzzing"))]
        self.check_stocks();

        Progress {
            written,
            consumed: src.len(),
            status,
        }
    }

    /// A held fragment is always a strict prefix of one rune.
    #[cfg(any(test, feature = "fuzzing"))]
    fn check_stocks(&self) {
        assert!(
            self.stock_to_transform.len() < MAX_GLYPH_LEN,
            "held fragment too long: {:02x?}",
            self.stock_to_transform
        );
        assert_eq!(
            complete_prefix_len(&self.stock_to_transform, false),
            0,
            "held fragment is not an unfinished sequence: {:02x?}",
            self.stock_to_transform
        );
    }

    /// Transform a complete input in one go.
    ///
    /// The transformer is reset first, so any state from earlier streaming
    /// use is discarded.
    #[must_use]
    pub fn transform_bytes(&mut self, input: &[u8]) -> Vec<u8> {
        self.reset();
        let mut out = Vec::with_capacity(input.len());
        let mut dst = [0u8; DRAIN_CHUNK];
        let mut src = input;
        loop {
            let progress = self.transform(&mut dst, src, true);
            out.extend_from_slice(&dst[..progress.written]);
            src = &src[progress.consumed..];
            if progress.status == Status::Success && src.is_empty() {
                break;
            }
        }
        debug_assert!(!self.has_pending());
        out
    }

    /// Transform a complete string in one go.
    ///
    /// Valid UTF-8 in gives valid UTF-8 out, since only whole ASCII bytes are
    /// replaced, and only by encoded scalar values.
    #[must_use]
    pub fn transform_str(&mut self, input: &str) -> String {
        let out = self.transform_bytes(input.as_bytes());
        String::from_utf8(out)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }
}

/// Copy the longest run of whole runes from the front of `src` that fits in
/// `dst`; returns the number of bytes copied.
fn flush(dst: &mut [u8], src: &[u8]) -> usize {
    let n = if src.len() <= dst.len() {
        src.len()
    } else {
        let cut = complete_prefix_len(&src[..dst.len()], false);
        debug_assert!(dst.len() < MAX_GLYPH_LEN || cut > 0);
        cut
    };
    dst[..n].copy_from_slice(&src[..n]);
    n
}
