//! PANS encoder — block- and lane-parallel tabulated rANS.
//!
//! Implements spec.md §4.4. One global symbol table is built over the whole
//! input (spec.md "Histogram & probability table"); each 4096-byte block is
//! then encoded independently so blocks can run in parallel (grounded on the
//! teacher's `io/compress_mt.rs` per-chunk fork-join), and within a block
//! each of the 32 lanes runs its own independent rANS stream over the bytes
//! at `offset % 32 == lane`.

use rayon::prelude::*;

use crate::bits::align_up;
use crate::config::{PANS_BLOCK_ALIGNMENT, PANS_BLOCK_SIZE, PANS_NUM_SYMBOLS, PANS_PRECISION, PANS_TABLE_SIZE, PANS_WARP_SIZE};

use super::rans::{encode_renorm, encode_step, RANS_L};
use super::tables::{cumulative, histogram, normalize};
use super::types::{write_symbol_table, BlockMeta, PansHeader, BLOCK_META_LEN, PANS_HEADER_LEN};

/// Encode `data` into a self-contained PANS container. Returns an empty
/// `Vec` for empty input.
pub fn encode(data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let freq = histogram(data);
    let pdf = normalize(&freq, PANS_TABLE_SIZE);
    let cdf = cumulative(&pdf);

    let blocks: Vec<&[u8]> = data.chunks(PANS_BLOCK_SIZE).collect();

    // Each block's (metadata, aligned payload) pair, independent of the rest.
    let encoded: Vec<(BlockMeta, Vec<u8>)> = blocks
        .into_par_iter()
        .map(|block| encode_block(block, &pdf, &cdf))
        .collect();

    let block_count = encoded.len();
    let meta_span = align_up(block_count * BLOCK_META_LEN, PANS_BLOCK_ALIGNMENT);

    // Serial prefix sum over aligned payload lengths fixes each block's
    // `prefix` offset within the concatenated payload region.
    let mut metas: Vec<BlockMeta> = Vec::with_capacity(block_count);
    let mut payloads: Vec<u8> = Vec::new();
    let mut prefix: u32 = 0;
    for (mut meta, payload) in encoded {
        meta.prefix = prefix;
        prefix += payload.len() as u32;
        payloads.extend_from_slice(&payload);
        metas.push(meta);
    }

    let header = PansHeader {
        precision: PANS_PRECISION,
        n_bytes: data.len() as u64,
        block_count: block_count as u32,
        total_compressed_size: payloads.len() as u32,
    };

    let mut out = Vec::with_capacity(PANS_HEADER_LEN + PANS_NUM_SYMBOLS * 2 + meta_span + payloads.len());
    header.write(&mut out);
    write_symbol_table(&mut out, &pdf);
    let meta_start = out.len();
    for m in &metas {
        m.write(&mut out);
    }
    out.resize(meta_start + meta_span, 0);
    out.extend_from_slice(&payloads);
    out
}

/// Encode one block: 32 independent lane streams, each processing the bytes
/// at `offset % 32 == lane` in reverse (rANS requires encoding last-to-first
/// so decode recovers symbols in forward order).
fn encode_block(block: &[u8], pdf: &[u16; PANS_NUM_SYMBOLS], cdf: &[u16; PANS_NUM_SYMBOLS]) -> (BlockMeta, Vec<u8>) {
    let n = block.len();

    let lane_results: Vec<(u32, Vec<u16>)> = (0..PANS_WARP_SIZE)
        .into_par_iter()
        .map(|lane| {
            let mut state = RANS_L;
            let mut words: Vec<u16> = Vec::new();
            let count = lane_symbol_count(n, lane);
            for i in (0..count).rev() {
                let s = block[lane + i * PANS_WARP_SIZE];
                encode_renorm(&mut state, pdf[s as usize], &mut words);
                state = encode_step(state, pdf[s as usize], cdf[s as usize]);
            }
            // Words were appended in reverse-of-reverse (chronological
            // encode) order; the decoder consumes them front-to-back, so
            // flip them into consumption order once, here.
            words.reverse();
            (state, words)
        })
        .collect();

    let mut warp_states = [0u32; PANS_WARP_SIZE];
    let mut word_counts = [0u16; PANS_WARP_SIZE];
    let mut total_words: u32 = 0;
    for (l, (state, words)) in lane_results.iter().enumerate() {
        warp_states[l] = *state;
        word_counts[l] = words.len() as u16;
        total_words += words.len() as u32;
    }

    let mut payload = Vec::with_capacity(PANS_WARP_SIZE * 2 + total_words as usize * 2);
    for &c in &word_counts {
        payload.extend_from_slice(&c.to_le_bytes());
    }
    for (_, words) in &lane_results {
        for &w in words {
            payload.extend_from_slice(&w.to_le_bytes());
        }
    }
    let aligned_len = align_up(payload.len(), PANS_BLOCK_ALIGNMENT);
    payload.resize(aligned_len, 0);

    let meta = BlockMeta {
        warp_states,
        decoded_bytes: n as u16,
        word_count: total_words as u16,
        prefix: 0, // fixed up by the caller's serial prefix sum
    };
    (meta, payload)
}

/// Number of bytes in a block of length `n` assigned to `lane` (offsets
/// `lane, lane+32, lane+64, ...`).
fn lane_symbol_count(n: usize, lane: usize) -> usize {
    if lane >= n {
        0
    } else {
        (n - lane).div_ceil(PANS_WARP_SIZE)
    }
}
