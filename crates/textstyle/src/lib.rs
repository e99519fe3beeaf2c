//! Streaming restyling of ASCII letters and digits into Unicode mathematical
//! alphanumerics (bold, italic, fraktur, double-struck, monospace, ...).
//!
//! Input is consumed in chunks through [`Transformer::transform`], which never
//! emits output for a partially received UTF-8 sequence and never writes past
//! the destination it is handed. Everything that does not fit is carried over
//! to the next call.
//!
//! ```rust
//! use textstyle::{Status, StyleTable, Transformer};
//!
//! let table = StyleTable::builtin();
//! let bold = table.get("bold").unwrap().clone();
//! let mut t = Transformer::new(bold);
//!
//! let mut dst = [0u8; 32];
//! let progress = t.transform(&mut dst, "aA1".as_bytes(), true);
//! assert_eq!(progress.status, Status::Success);
//! assert_eq!(&dst[..progress.written], "𝐚𝐀𝟏".as_bytes());
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod boundary;
mod classify;
mod error;
#[cfg(feature = "std")]
mod io;
mod replacer;
mod style;
mod table;
mod transformer;

#[cfg(test)]
mod tests;

pub use boundary::{MAX_GLYPH_LEN, complete_prefix_len};
pub use classify::{CharClass, in_range, is_regular_digit, is_regular_lower, is_regular_upper};
pub use error::StyleError;
#[cfg(feature = "std")]
pub use io::StyleWriter;
pub use replacer::{Replacer, Substitute};
pub use style::{Offsets, Style};
pub use table::{StyleSample, StyleTable};
pub use transformer::{Progress, Status, Transformer};
