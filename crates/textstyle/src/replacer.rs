use alloc::{sync::Arc, vec::Vec};

use crate::CharClass;

/// Produces the replacement bytes for a regular letter or digit.
///
/// [`Replacer`] calls this only for bytes classified as
/// [`CharClass::Lower`], [`CharClass::Upper`] or [`CharClass::Digit`];
/// everything else is copied through without consulting the implementation.
pub trait Substitute {
    /// Append the replacement for `byte`, which belongs to `class`, to `out`.
    fn substitute(&self, class: CharClass, byte: u8, out: &mut Vec<u8>);
}

impl<S: Substitute + ?Sized> Substitute for &S {
    #[inline]
    fn substitute(&self, class: CharClass, byte: u8, out: &mut Vec<u8>) {
        (**self).substitute(class, byte, out);
    }
}

impl<S: Substitute + ?Sized> Substitute for Arc<S> {
    #[inline]
    fn substitute(&self, class: CharClass, byte: u8, out: &mut Vec<u8>) {
        (**self).substitute(class, byte, out);
    }
}

/// Rewrites fully available buffers rune by rune.
///
/// The replacer holds no state besides its substitution, so it can be shared
/// freely. It must see whole runes: a multi-byte sequence cut short at the
/// end of the input is treated as malformed and copied through verbatim.
#[derive(Debug, Clone)]
pub struct Replacer<S> {
    subst: S,
}

impl<S: Substitute> Replacer<S> {
    /// Wrap a substitution.
    #[must_use]
    pub fn new(subst: S) -> Self {
        Self { subst }
    }

    /// The wrapped substitution.
    #[must_use]
    pub fn substitution(&self) -> &S {
        &self.subst
    }

    /// Replace every regular letter and digit in `src`.
    #[must_use]
    pub fn replace(&self, src: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(src.len());
        self.replace_into(src, &mut out);
        out
    }

    /// Like [`Replacer::replace`], appending to `out` instead of allocating.
    pub fn replace_into(&self, src: &[u8], out: &mut Vec<u8>) {
        let mut rest = src;
        while !rest.is_empty() {
            // Invalid bytes come back as `None` with the length of the maximal
            // invalid prefix, which is never zero for non-empty input.
            let (_, len) = bstr::decode_utf8(rest);
            let len = len.max(1);
            let (rune, tail) = rest.split_at(len);
            match CharClass::of(rune) {
                CharClass::Other => out.extend_from_slice(rune),
                class => self.subst.substitute(class, rune[0], out),
            }
            rest = tail;
        }
    }
}
