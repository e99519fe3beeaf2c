//! Style definitions: a name plus three codepoint offsets.
//!
//! Each offset is the distance from the plain class start (`a`, `A`, `0`) to
//! the first styled character of that class, so the styled form of a regular
//! byte `b` of class `c` is `b + offset(c)`. A zero offset leaves the class
//! untouched, which is how e.g. italic keeps plain digits.

use alloc::{borrow::Cow, string::String, vec::Vec};

use crate::{CharClass, StyleError, Substitute, Transformer};

const MAX_SCALAR: u32 = 0x10_FFFF;
const SURROGATES: core::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

/// Per-class codepoint offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offsets {
    /// Offset applied to `a..=z`.
    pub lower: u32,
    /// Offset applied to `A..=Z`.
    pub upper: u32,
    /// Offset applied to `0..=9`.
    pub digit: u32,
}

impl Offsets {
    /// Offset for `class`, `None` for [`CharClass::Other`].
    #[must_use]
    pub const fn for_class(&self, class: CharClass) -> Option<u32> {
        match class {
            CharClass::Lower => Some(self.lower),
            CharClass::Upper => Some(self.upper),
            CharClass::Digit => Some(self.digit),
            CharClass::Other => None,
        }
    }

    /// Styled codepoint for a regular `byte` of `class`.
    #[must_use]
    pub fn codepoint(&self, class: CharClass, byte: u8) -> Option<u32> {
        self.for_class(class)?.checked_add(u32::from(byte))
    }
}

/// A named visual variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawStyle"))]
pub struct Style {
    name: Cow<'static, str>,
    offsets: Offsets,
}

/// Unvalidated wire form of a [`Style`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawStyle {
    name: String,
    offsets: Offsets,
}

#[cfg(feature = "serde")]
impl TryFrom<RawStyle> for Style {
    type Error = StyleError;

    fn try_from(raw: RawStyle) -> Result<Self, Self::Error> {
        Style::new(raw.name, raw.offsets)
    }
}

macro_rules! presets {
    ( $( $(#[$meta:meta])* $konst:ident = $name:literal, $sample:literal, $lower:literal, $upper:literal, $digit:literal; )* ) => {
        impl Style {
            $(
                $(#[$meta])*
                #[doc = concat!("\n\nSample: `", $sample, "`")]
                pub const $konst: Style = Style::preset($name, $lower, $upper, $digit);
            )*

            /// Every built-in style, in declaration order.
            pub const BUILTIN: &'static [Style] = &[$(Style::$konst),*];
        }

        /// `(name, aA0 sample)` pairs the built-in offsets were derived from.
        #[cfg(test)]
        pub(crate) const BUILTIN_SAMPLES: &[(&str, &str)] = &[$(($name, $sample)),*];
    };
}

presets! {
    /// Mathematical bold.
    BOLD = "bold", "𝐚𝐀𝟎", 0x1_D3B9, 0x1_D3BF, 0x1_D79E;
    /// Mathematical italic; digits stay plain.
    ITALIC = "italic", "𝑎𝐴0", 0x1_D3ED, 0x1_D3F3, 0;
    /// Mathematical bold italic.
    BOLD_ITALIC = "bold italic", "𝒂𝑨𝟎", 0x1_D421, 0x1_D427, 0x1_D79E;
    /// Mathematical script; digits stay plain.
    SCRIPT = "script", "𝒶𝒜0", 0x1_D455, 0x1_D45B, 0;
    /// Mathematical bold script.
    BOLD_SCRIPT = "bold script", "𝓪𝓐𝟎", 0x1_D489, 0x1_D48F, 0x1_D79E;
    /// Mathematical fraktur; digits stay plain.
    FRAKTUR = "fraktur", "𝔞𝔄0", 0x1_D4BD, 0x1_D4C3, 0;
    /// Mathematical bold fraktur.
    BOLD_FRAKTUR = "bold fraktur", "𝖆𝕬𝟎", 0x1_D525, 0x1_D52B, 0x1_D79E;
    /// Mathematical double-struck.
    DOUBLE_STRUCK = "double struck", "𝕒𝔸𝟘", 0x1_D4F1, 0x1_D4F7, 0x1_D7A8;
    /// Mathematical sans-serif.
    SANS_SERIF = "sans serif", "𝖺𝖠𝟢", 0x1_D559, 0x1_D55F, 0x1_D7B2;
    /// Mathematical sans-serif bold.
    SANS_SERIF_BOLD = "sans serif bold", "𝗮𝗔𝟬", 0x1_D58D, 0x1_D593, 0x1_D7BC;
    /// Mathematical sans-serif italic.
    SANS_SERIF_ITALIC = "sans serif italic", "𝘢𝘈𝟢", 0x1_D5C1, 0x1_D5C7, 0x1_D7B2;
    /// Mathematical sans-serif bold italic.
    SANS_SERIF_BOLD_ITALIC = "sans serif bold italic", "𝙖𝘼𝟬", 0x1_D5F5, 0x1_D5FB, 0x1_D7BC;
    /// Mathematical monospace.
    MONOSPACE = "monospace", "𝚊𝙰𝟶", 0x1_D629, 0x1_D62F, 0x1_D7C6;
}

impl Style {
    const fn preset(name: &'static str, lower: u32, upper: u32, digit: u32) -> Self {
        Style {
            name: Cow::Borrowed(name),
            offsets: Offsets {
                lower,
                upper,
                digit,
            },
        }
    }

    /// Build a style from explicit offsets.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::OutOfRange`] if any member of a class would map
    /// to a surrogate or beyond U+10FFFF.
    pub fn new(name: impl Into<Cow<'static, str>>, offsets: Offsets) -> Result<Self, StyleError> {
        let style = Style {
            name: name.into(),
            offsets,
        };
        style.validate()?;
        Ok(style)
    }

    /// Derive a style from a sample holding its styled `a`, `A` and `0`, in
    /// that order.
    ///
    /// ```rust
    /// use textstyle::Style;
    ///
    /// let bold = Style::from_sample("bold", "𝐚𝐀𝟎").unwrap();
    /// assert_eq!(bold.offsets(), Style::BOLD.offsets());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::SampleLength`] unless the sample has exactly three
    /// characters, [`StyleError::Negative`] if a character precedes its plain
    /// counterpart, and [`StyleError::OutOfRange`] as for [`Style::new`].
    pub fn from_sample(
        name: impl Into<Cow<'static, str>>,
        sample: &str,
    ) -> Result<Self, StyleError> {
        let name = name.into();
        let mut chars = sample.chars();
        let (Some(lower), Some(upper), Some(digit), None) =
            (chars.next(), chars.next(), chars.next(), chars.next())
        else {
            return Err(StyleError::SampleLength {
                name: name.into_owned(),
                found: sample.chars().count(),
            });
        };

        let diff = |styled: char, class: CharClass| {
            let start = class.start().map_or(0, u32::from);
            u32::from(styled)
                .checked_sub(start)
                .ok_or_else(|| StyleError::Negative {
                    name: String::from(name.as_ref()),
                    class,
                })
        };
        let offsets = Offsets {
            lower: diff(lower, CharClass::Lower)?,
            upper: diff(upper, CharClass::Upper)?,
            digit: diff(digit, CharClass::Digit)?,
        };
        Style::new(name, offsets)
    }

    fn validate(&self) -> Result<(), StyleError> {
        for class in [CharClass::Lower, CharClass::Upper, CharClass::Digit] {
            let Some(start) = class.start() else {
                continue;
            };
            let first = self.offsets.codepoint(class, start);
            let last = self.offsets.codepoint(class, start + class.len() - 1);
            let valid = match (first, last) {
                (Some(first), Some(last)) => {
                    last <= MAX_SCALAR
                        && !(first <= *SURROGATES.end() && last >= *SURROGATES.start())
                }
                _ => false,
            };
            if !valid {
                return Err(StyleError::OutOfRange {
                    name: String::from(self.name.as_ref()),
                    class,
                });
            }
        }
        Ok(())
    }

    /// The name as declared, e.g. `"bold italic"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The per-class offsets.
    #[must_use]
    pub const fn offsets(&self) -> Offsets {
        self.offsets
    }

    /// Upper snake case label, e.g. `BOLD_ITALIC`.
    #[must_use]
    pub fn label(&self) -> String {
        self.name
            .split_whitespace()
            .map(str::to_ascii_uppercase)
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Title case label without spaces, e.g. `BoldItalic`.
    #[must_use]
    pub fn title_label(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        for word in self.name.split_whitespace() {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.extend(chars.flat_map(char::to_lowercase));
            }
        }
        out
    }

    /// Restyle a whole string in one go.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        Transformer::new(self).transform_str(text)
    }
}

/// Lowercase ASCII alphanumerics of `name`, used to compare style names
/// regardless of case and word separators.
pub(crate) fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl Substitute for Style {
    fn substitute(&self, class: CharClass, byte: u8, out: &mut Vec<u8>) {
        match self.offsets.codepoint(class, byte).and_then(char::from_u32) {
            Some(ch) => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
            None => out.push(byte),
        }
    }
}
