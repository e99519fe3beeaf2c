use alloc::{boxed::Box, vec};
use std::io::{self, Write};

use log::debug;

use crate::{Status, Style, Substitute, Transformer};

const BUF_LEN: usize = 4096;

/// An [`io::Write`] adapter that restyles everything written through it.
///
/// Incomplete UTF-8 sequences at the end of a `write` are held back until the
/// rest arrives, so callers may split their output anywhere. Call
/// [`StyleWriter::finish`] once done to push out anything still held;
/// dropping the writer without finishing loses such a tail.
///
/// Styled output the inner writer has not accepted yet stays buffered. A
/// `write` that fails has taken none of its input, so it can be retried.
///
/// ```rust
/// use std::io::Write;
/// use textstyle::{Style, StyleWriter};
///
/// let mut w = StyleWriter::new(Vec::new(), Style::SANS_SERIF_BOLD);
/// write!(w, "Hi {}", 5).unwrap();
/// let out = w.finish().unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "𝗛𝗶 𝟱");
/// ```
#[derive(Debug)]
pub struct StyleWriter<W: Write, S: Substitute = Style> {
    inner: W,
    transformer: Transformer<S>,
    buf: Box<[u8]>,
    /// `buf[start..end]` is output not yet taken by `inner`.
    start: usize,
    end: usize,
}

impl<W: Write, S: Substitute> StyleWriter<W, S> {
    /// Wrap `inner`, styling with `subst`.
    #[must_use]
    pub fn new(inner: W, subst: S) -> Self {
        Self::with_transformer(inner, Transformer::new(subst))
    }

    /// Wrap `inner` around an existing transformer, which is reset first.
    #[must_use]
    pub fn with_transformer(inner: W, mut transformer: Transformer<S>) -> Self {
        transformer.reset();
        Self {
            inner,
            transformer,
            buf: vec![0u8; BUF_LEN].into_boxed_slice(),
            start: 0,
            end: 0,
        }
    }

    /// The wrapped writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Hand the buffered output to `inner`. On error the rest stays buffered.
    fn drain(&mut self) -> io::Result<()> {
        while self.start < self.end {
            match self.inner.write(&self.buf[self.start..self.end]) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write styled output",
                    ));
                }
                Ok(n) => self.start += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Drain the buffer and everything the transformer still has queued.
    /// With `at_eof`, a held unfinished sequence goes out as well.
    fn drain_all(&mut self, at_eof: bool) -> io::Result<()> {
        loop {
            self.drain()?;
            let progress = self.transformer.transform(&mut self.buf, &[], at_eof);
            self.start = 0;
            self.end = progress.written;
            if progress.status != Status::ShortDestination {
                return self.drain();
            }
        }
    }

    /// Flush everything still held, including an unfinished trailing
    /// sequence (passed through as-is), and return the inner writer.
    ///
    /// # Errors
    ///
    /// Propagates any error from the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.drain_all(true)?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write, S: Substitute> Write for StyleWriter<W, S> {
    fn write(&mut self, src: &[u8]) -> io::Result<usize> {
        if src.is_empty() {
            return Ok(0);
        }
        loop {
            self.drain()?;
            let progress = self.transformer.transform(&mut self.buf, src, false);
            self.start = 0;
            self.end = progress.written;
            // Zero only while older queued output is still being copied out.
            if progress.consumed == 0 {
                continue;
            }
            // `src` is taken; a failure here stays buffered and is reported
            // by the next call instead.
            if let Err(e) = self.drain_all(false) {
                debug!("deferring inner write error: {e}");
            }
            return Ok(progress.consumed);
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.drain_all(false)?;
        self.inner.flush()
    }
}
