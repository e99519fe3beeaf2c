use alloc::{borrow::Cow, string::String, vec::Vec};

use log::debug;

use crate::{
    Style, StyleError, Transformer,
    style::normalize_name,
};

/// A style declared by example: its name and its styled `a`, `A`, `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleSample {
    /// Style name, e.g. `"bold italic"`.
    pub name: String,
    /// Three characters: the styled forms of `a`, `A` and `0`.
    pub sample: String,
}

/// Ordered, validated collection of styles.
///
/// Names are unique once case and the separators ` `, `_` and `-` are
/// ignored, and [`StyleTable::get`] looks them up the same way.
///
/// ```rust
/// use textstyle::StyleTable;
///
/// let table = StyleTable::builtin();
/// assert_eq!(table.len(), 13);
/// assert_eq!(table.get("BOLD_ITALIC"), table.get("bold italic"));
/// assert_eq!(table.transformer("Monospace").unwrap().transform_str("ok"), "𝚘𝚔");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    styles: Vec<Style>,
}

impl StyleTable {
    /// The built-in mathematical alphanumeric styles.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            styles: Style::BUILTIN.to_vec(),
        }
    }

    /// Build a table from already constructed styles.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::DuplicateName`] if two styles share a normalized
    /// name.
    pub fn new(styles: impl IntoIterator<Item = Style>) -> Result<Self, StyleError> {
        let mut table = Self { styles: Vec::new() };
        for style in styles {
            table.push(style)?;
        }
        debug!("style table built with {} styles", table.styles.len());
        Ok(table)
    }

    /// Build a table by deriving each style from its sample.
    ///
    /// # Errors
    ///
    /// Returns the first [`StyleError`] met while deriving a style, or
    /// [`StyleError::DuplicateName`].
    pub fn from_samples<I, N, T>(samples: I) -> Result<Self, StyleError>
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<Cow<'static, str>>,
        T: AsRef<str>,
    {
        let styles = samples
            .into_iter()
            .map(|(name, sample)| Style::from_sample(name, sample.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(styles)
    }

    /// Append a style.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::DuplicateName`] if the table already has a style
    /// with the same normalized name.
    pub fn push(&mut self, style: Style) -> Result<(), StyleError> {
        if self.get(style.name()).is_some() {
            return Err(StyleError::DuplicateName(String::from(style.name())));
        }
        self.styles.push(style);
        Ok(())
    }

    /// Look up a style by name, ignoring case and word separators.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Style> {
        let key = normalize_name(name);
        self.styles.iter().find(|s| normalize_name(s.name()) == key)
    }

    /// A transformer for the named style.
    #[must_use]
    pub fn transformer(&self, name: &str) -> Option<Transformer> {
        self.get(name).cloned().map(Transformer::new)
    }

    /// Styles in declaration order.
    #[must_use]
    pub fn iter(&self) -> core::slice::Iter<'_, Style> {
        self.styles.iter()
    }

    /// Number of styles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the table has no styles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a StyleTable {
    type Item = &'a Style;
    type IntoIter = core::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<StyleSample>> for StyleTable {
    type Error = StyleError;

    fn try_from(samples: Vec<StyleSample>) -> Result<Self, Self::Error> {
        Self::from_samples(samples.into_iter().map(|s| (s.name, s.sample)))
    }
}
