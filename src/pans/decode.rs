//! PANS decoder — inverts [`super::encode::encode`].
//!
//! Implements spec.md §4.5: the global symbol table and per-block metadata
//! are read once, then every block is decoded independently (and every lane
//! within a block independently), mirroring the encoder's parallel shape.

use rayon::prelude::*;

use crate::bits::{align_up, read_le16};
use crate::config::{PANS_BLOCK_ALIGNMENT, PANS_BLOCK_SIZE, PANS_NUM_SYMBOLS, PANS_WARP_SIZE};
use crate::error::{MansError, Result};

use super::rans::{decode_renorm, decode_step};
use super::tables::{cumulative, symbol_lookup};
use super::types::{
    block_table_span, read_symbol_table, BlockMeta, PansHeader, BLOCK_META_LEN, PANS_HEADER_LEN, SYMBOL_TABLE_LEN,
};

/// Decode a PANS container produced by [`super::encode::encode`].
pub fn decode(container: &[u8]) -> Result<Vec<u8>> {
    if container.is_empty() {
        return Ok(Vec::new());
    }

    let header = PansHeader::read(container)?;
    let n = header.n_bytes as usize;
    let block_count = header.block_count as usize;

    let mut offset = PANS_HEADER_LEN;
    let pdf = read_symbol_table(&container[offset..])?;
    let cdf = cumulative(&pdf);
    let symbol_at_slot = symbol_lookup(&pdf, &cdf, crate::config::PANS_TABLE_SIZE);
    offset += SYMBOL_TABLE_LEN;

    let meta_span = block_table_span(block_count);
    if container.len() < offset + meta_span {
        return Err(MansError::Truncated { expected: offset + meta_span, actual: container.len() });
    }
    let metas: Vec<BlockMeta> = (0..block_count)
        .map(|i| BlockMeta::read(&container[offset + i * BLOCK_META_LEN..]))
        .collect();
    offset += meta_span;

    let payloads = &container[offset..];
    if payloads.len() < header.total_compressed_size as usize {
        return Err(MansError::Truncated {
            expected: offset + header.total_compressed_size as usize,
            actual: container.len(),
        });
    }

    let mut out = vec![0u8; n];
    let results: Vec<Result<()>> = out
        .par_chunks_mut(PANS_BLOCK_SIZE)
        .zip(metas.par_iter())
        .map(|(out_chunk, meta)| decode_block(out_chunk, meta, payloads, &pdf, &cdf, &symbol_at_slot))
        .collect();
    for r in results {
        r?;
    }

    Ok(out)
}

fn decode_block(
    out_chunk: &mut [u8],
    meta: &BlockMeta,
    payloads: &[u8],
    pdf: &[u16; PANS_NUM_SYMBOLS],
    cdf: &[u16; PANS_NUM_SYMBOLS],
    symbol_at_slot: &[u8],
) -> Result<()> {
    let n = meta.decoded_bytes as usize;
    let unaligned = PANS_WARP_SIZE * 2 + meta.word_count as usize * 2;
    let aligned = align_up(unaligned, PANS_BLOCK_ALIGNMENT);
    let start = meta.prefix as usize;
    if payloads.len() < start + aligned {
        return Err(MansError::Truncated { expected: start + aligned, actual: payloads.len() });
    }
    let payload = &payloads[start..start + aligned];

    let mut word_counts = [0u16; PANS_WARP_SIZE];
    for (l, slot) in word_counts.iter_mut().enumerate() {
        *slot = read_le16(payload, l * 2);
    }

    let mut lane_word_start = [0usize; PANS_WARP_SIZE];
    let mut acc = PANS_WARP_SIZE * 2;
    for l in 0..PANS_WARP_SIZE {
        lane_word_start[l] = acc;
        acc += word_counts[l] as usize * 2;
    }

    // Each lane decodes into its own owned buffer (no shared mutable state
    // between lanes); a serial scatter afterwards interleaves them back into
    // `out_chunk` at offsets `lane, lane+32, lane+64, ...`.
    let lane_outputs: Vec<Vec<u8>> = (0..PANS_WARP_SIZE)
        .into_par_iter()
        .map(|lane| {
            let count = lane_symbol_count(n, lane);
            if count == 0 {
                return Vec::new();
            }
            let words_byte_start = lane_word_start[lane];
            let words_byte_len = word_counts[lane] as usize * 2;
            let words_bytes = &payload[words_byte_start..words_byte_start + words_byte_len];
            let words: Vec<u16> = (0..word_counts[lane] as usize).map(|i| read_le16(words_bytes, i * 2)).collect();

            let mut state = meta.warp_states[lane];
            let mut cursor = 0usize;
            let mut lane_out = Vec::with_capacity(count);
            for _ in 0..count {
                let (s, new_state) = decode_step(state, symbol_at_slot, pdf, cdf);
                state = new_state;
                lane_out.push(s);
                decode_renorm(&mut state, &words, &mut cursor);
            }
            lane_out
        })
        .collect();

    for (lane, lane_out) in lane_outputs.into_iter().enumerate() {
        for (i, &s) in lane_out.iter().enumerate() {
            out_chunk[lane + i * PANS_WARP_SIZE] = s;
        }
    }

    Ok(())
}

fn lane_symbol_count(n: usize, lane: usize) -> usize {
    if lane >= n {
        0
    } else {
        (n - lane).div_ceil(PANS_WARP_SIZE)
    }
}
