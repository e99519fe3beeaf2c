#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textstyle::{MAX_GLYPH_LEN, Replacer, Status, Style, Transformer};

#[derive(Debug, Arbitrary)]
struct Input {
    style: u8,
    /// Chunk lengths, cycled until the payload is used up.
    splits: Vec<u8>,
    /// Destination lengths, cycled per call.
    dst_lens: Vec<u8>,
    payload: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let style = &Style::BUILTIN[usize::from(input.style) % Style::BUILTIN.len()];
    let want = Replacer::new(style).replace(&input.payload);

    let splits: Vec<usize> = input.splits.iter().map(|&n| usize::from(n).max(1)).collect();
    let dst_lens: Vec<usize> = input
        .dst_lens
        .iter()
        .map(|&n| usize::from(n).max(MAX_GLYPH_LEN))
        .collect();
    let mut next_split = splits.iter().copied().cycle();
    let mut next_dst = dst_lens.iter().copied().cycle();

    let mut t = Transformer::new(style);
    let mut got = Vec::with_capacity(want.len());
    let mut rest = &input.payload[..];
    loop {
        let take = next_split.next().unwrap_or(rest.len()).min(rest.len());
        let (chunk, tail) = rest.split_at(take);
        rest = tail;
        let at_eof = rest.is_empty();
        let mut src = chunk;
        loop {
            let mut dst = vec![0u8; next_dst.next().unwrap_or(64)];
            let p = t.transform(&mut dst, src, at_eof);
            assert!(p.consumed <= src.len());
            got.extend_from_slice(&dst[..p.written]);
            src = &src[p.consumed..];
            if src.is_empty() && p.status != Status::ShortDestination {
                break;
            }
        }
        if at_eof {
            break;
        }
    }

    assert!(!t.has_pending());
    assert_eq!(got, want);
});
