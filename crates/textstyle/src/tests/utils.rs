use alloc::{vec, vec::Vec};

use crate::{Status, Substitute, Transformer};

/// Split `payload` into approximately equal-sized chunks, deliberately
/// ignoring UTF-8 boundaries.
///
/// # Panics
///
/// Panics if `parts` is zero.
pub(crate) fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    if payload.is_empty() {
        return vec![payload];
    }
    payload.chunks(payload.len().div_ceil(parts)).collect()
}

/// Split `payload` at positions derived from `splits`, each chunk at least one
/// byte long.
pub(crate) fn split_by<'a>(payload: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::new();
    let mut rest = payload;
    for s in splits {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(1 + s % rest.len());
        chunks.push(head);
        rest = tail;
    }
    if !rest.is_empty() || chunks.is_empty() {
        chunks.push(rest);
    }
    chunks
}

/// Feed `chunks` through `t`, marking the last one as end of input, with
/// destination sizes cycling through `dst_lens`. Unconsumed source is offered
/// again, exactly as a caller following the protocol would.
///
/// # Panics
///
/// Panics if `dst_lens` is empty or if the transformer stops making progress.
pub(crate) fn drive<S: Substitute>(
    t: &mut Transformer<S>,
    chunks: &[&[u8]],
    dst_lens: &[usize],
) -> Vec<u8> {
    assert!(!dst_lens.is_empty());
    let mut sizes = dst_lens.iter().copied().cycle();
    let mut out = Vec::new();
    let last = chunks.len().saturating_sub(1);

    let empty: [&[u8]; 1] = [&[]];
    let chunks = if chunks.is_empty() { &empty[..] } else { chunks };

    for (i, chunk) in chunks.iter().enumerate() {
        let at_eof = i == last;
        let mut src = *chunk;
        let mut stalled = 0;
        loop {
            let mut dst = vec![0u8; sizes.next().unwrap_or_default()];
            let p = t.transform(&mut dst, src, at_eof);
            assert!(p.written <= dst.len());
            assert!(p.consumed <= src.len());
            out.extend_from_slice(&dst[..p.written]);
            src = &src[p.consumed..];

            if p.written == 0 && p.consumed == 0 {
                stalled += 1;
                assert!(stalled <= dst_lens.len(), "no progress");
            } else {
                stalled = 0;
            }

            if src.is_empty() && p.status != Status::ShortDestination {
                break;
            }
        }
    }
    assert!(!t.has_pending());
    out
}
