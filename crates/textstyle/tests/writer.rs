#![expect(missing_docs)]

mod common;

use std::io::Write;

use textstyle::{Style, StyleWriter};

use crate::common::{ORIGINAL, STREAM};

#[test]
fn writes_in_stream_chunks() {
    let mut w = StyleWriter::new(Vec::new(), Style::BOLD_FRAKTUR);
    for chunk in STREAM {
        w.write_all(chunk).unwrap();
    }
    let out = w.finish().unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), Style::BOLD_FRAKTUR.apply(ORIGINAL));
}

#[test]
fn formatted_writes() {
    let mut w = StyleWriter::new(Vec::new(), Style::DOUBLE_STRUCK);
    writeln!(w, "{} + {} = {}", 1, 2, 1 + 2).unwrap();
    let out = w.finish().unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "𝟙 + 𝟚 = 𝟛\n");
}

#[test]
fn finish_passes_through_truncated_tail() {
    let mut w = StyleWriter::new(Vec::new(), Style::BOLD);
    w.write_all(&[b'z', 0xF0, 0x9F]).unwrap();
    assert_eq!(w.get_ref().as_slice(), "𝐳".as_bytes());
    let out = w.finish().unwrap();
    assert_eq!(out, b"\xf0\x9d\x90\xb3\xf0\x9f");
}
