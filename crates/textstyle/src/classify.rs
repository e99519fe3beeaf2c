/// Inclusive range test: `min <= x <= max`.
#[inline]
#[must_use]
pub const fn in_range(x: u8, min: u8, max: u8) -> bool {
    min <= x && x <= max
}

/// The class a single rune falls into for substitution purposes.
///
/// Only one-byte runes can be regular; any multi-byte or malformed rune is
/// [`CharClass::Other`] regardless of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CharClass {
    /// `a..=z`
    Lower,
    /// `A..=Z`
    Upper,
    /// `0..=9`
    Digit,
    /// Anything else, passed through unchanged.
    Other,
}

impl CharClass {
    /// Classify one encoded rune.
    #[must_use]
    pub fn of(rune: &[u8]) -> Self {
        let &[b] = rune else {
            return CharClass::Other;
        };
        match b {
            b'a'..=b'z' => CharClass::Lower,
            b'A'..=b'Z' => CharClass::Upper,
            b'0'..=b'9' => CharClass::Digit,
            _ => CharClass::Other,
        }
    }

    /// First ASCII byte of the class, or `None` for [`CharClass::Other`].
    #[must_use]
    pub const fn start(self) -> Option<u8> {
        match self {
            CharClass::Lower => Some(b'a'),
            CharClass::Upper => Some(b'A'),
            CharClass::Digit => Some(b'0'),
            CharClass::Other => None,
        }
    }

    /// Number of members in the class.
    #[must_use]
    pub const fn len(self) -> u8 {
        match self {
            CharClass::Lower | CharClass::Upper => 26,
            CharClass::Digit => 10,
            CharClass::Other => 0,
        }
    }

    /// `true` only for [`CharClass::Other`].
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, CharClass::Other)
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            CharClass::Lower => "lowercase",
            CharClass::Upper => "uppercase",
            CharClass::Digit => "digit",
            CharClass::Other => "other",
        }
    }
}

impl core::fmt::Display for CharClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `rune` is exactly one byte in `a..=z`.
#[must_use]
pub fn is_regular_lower(rune: &[u8]) -> bool {
    matches!(rune, &[b] if in_range(b, b'a', b'z'))
}

/// Whether `rune` is exactly one byte in `A..=Z`.
#[must_use]
pub fn is_regular_upper(rune: &[u8]) -> bool {
    matches!(rune, &[b] if in_range(b, b'A', b'Z'))
}

/// Whether `rune` is exactly one byte in `0..=9`.
#[must_use]
pub fn is_regular_digit(rune: &[u8]) -> bool {
    matches!(rune, &[b] if in_range(b, b'0', b'9'))
}
