use alloc::string::String;

use thiserror::Error;

use crate::CharClass;

/// A style definition that cannot be turned into a valid substitution.
///
/// These are configuration errors: they surface when a [`Style`] or
/// [`StyleTable`] is built and never from a transform.
///
/// [`Style`]: crate::Style
/// [`StyleTable`]: crate::StyleTable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The sample was not an `aA0` triple.
    #[error("style {name:?}: sample must hold exactly three characters (aA0), found {found}")]
    SampleLength {
        /// Style name as given.
        name: String,
        /// Number of characters in the sample.
        found: usize,
    },
    /// A sample character has a smaller codepoint than its plain class start.
    #[error("style {name:?}: {class} sample lies before the plain {class} range")]
    Negative {
        /// Style name as given.
        name: String,
        /// Offending class.
        class: CharClass,
    },
    /// Some member of the class would map to a surrogate or past U+10FFFF.
    #[error("style {name:?}: {class} offset maps outside the Unicode scalar values")]
    OutOfRange {
        /// Style name as given.
        name: String,
        /// Offending class.
        class: CharClass,
    },
    /// Two styles in one table normalize to the same name.
    #[error("duplicate style name {0:?}")]
    DuplicateName(String),
}
