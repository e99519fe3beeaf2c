#![allow(missing_docs, dead_code)]

use textstyle::{Status, Substitute, Transformer};

pub const ORIGINAL: &str = "Streaming 4 styles: ｆｕｌｌ-width, ελληνικά, 日本語, and emoji 🎉 stay put; ASCII A-Z a-z 0-9 changes.\n";

// The same text cut at awkward places: inside the 3-byte full-width letters,
// the 2-byte Greek letters, the 4-byte emoji, and between ASCII runs.
#[rustfmt::skip]
pub const STREAM: [&[u8]; 9] = [
    b"Streaming 4 styles: \xef\xbd",                          // (inside `ｆ`)
    b"\x86\xef\xbd\x95\xef\xbd\x8c\xef\xbd\x8c-width, \xce",   // (inside `ε`)
    b"\xb5\xce\xbb\xce\xbb\xce\xb7\xce\xbd\xce\xb9\xce\xba\xce\xac, \xe6\x97\xa5",
    b"\xe6\x9c\xac\xe8\xaa\x9e, and emoji \xf0",              // (1 of 4)
    b"\x9f",                                                 // (2 of 4)
    b"\x8e",                                                 // (3 of 4)
    b"\x89 stay put; ASCII A-Z",                             // (4 of 4)
    b" a-z 0-",
    b"9 changes.\n",
];

/// Feed every chunk in order, offering unconsumed input again and draining
/// pending output with a fixed-size destination.
pub fn run<S: Substitute>(t: &mut Transformer<S>, chunks: &[&[u8]], dst_len: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut dst = vec![0u8; dst_len];
    for (i, chunk) in chunks.iter().enumerate() {
        let at_eof = i + 1 == chunks.len();
        let mut src = *chunk;
        loop {
            let p = t.transform(&mut dst, src, at_eof);
            out.extend_from_slice(&dst[..p.written]);
            src = &src[p.consumed..];
            if src.is_empty() && p.status != Status::ShortDestination {
                break;
            }
        }
    }
    out
}

#[test]
fn stream_matches_original() {
    assert_eq!(STREAM.concat(), ORIGINAL.as_bytes());
}
