//! ADM encoder — block mean + signed variable-length residual coder.
//!
//! Implements spec.md §4.2 verbatim. Each parallel step below is
//! grounded on the teacher's `io/compress_mt.rs` fork-join idiom
//! (`into_par_iter()` / `par_chunks_mut()` + `collect()`, preserving
//! order); the only serial step is the `output_lengths` prefix sum.

use rayon::prelude::*;

use crate::bits::BitWriter;
use crate::config::{ADM_GROUP_SIZE, ADM_LANES, ADM_LANE_ELEMENTS, ADM_RESIDUAL_SPAN};

use super::types::{AdmElement, FileHeader, FILE_HEADER_LEN};

/// One lane's raw (unpadded) bitstream plus the bit count it actually used.
struct LaneBits {
    bit_len: usize,
    bytes: Vec<u8>,
}

impl Default for LaneBits {
    fn default() -> Self {
        LaneBits { bit_len: 0, bytes: Vec::new() }
    }
}

/// Encode `elements` into a self-describing ADM container (spec.md §3 "ADM container").
///
/// Returns an empty `Vec` for an empty input, per spec.md §3 ("N = 0 is
/// legal and maps to an empty output").
pub fn encode<T: AdmElement>(elements: &[T]) -> Vec<u8> {
    let n = elements.len();
    if n == 0 {
        return Vec::new();
    }

    let gsize = n.div_ceil(ADM_GROUP_SIZE);
    let total_lanes = gsize * ADM_LANES;

    // Step 1 — per-group centers (spec.md §4.2 Step 1). Independent per group.
    let centers: Vec<T> = (0..gsize)
        .into_par_iter()
        .map(|g| {
            let base = g * ADM_GROUP_SIZE;
            let end = (base + ADM_GROUP_SIZE).min(n);
            let sum: u128 = elements[base..end].iter().map(|&v| v.to_u64() as u128).sum();
            let count = (end - base) as u128;
            T::from_u64((sum / count) as u64)
        })
        .collect();

    // Step 2 — per-element coding, independent per lane (spec.md §4.2 Step 2).
    // `codes` is mutated in place through disjoint `par_chunks_mut` windows;
    // trailing lanes with no elements (only possible in the final, partial
    // group) are handled afterwards since `chunks_mut` never yields empty chunks.
    let mut codes = vec![0u8; n];
    let mut lane_bits: Vec<LaneBits> = codes
        .par_chunks_mut(ADM_LANE_ELEMENTS)
        .zip(elements.par_chunks(ADM_LANE_ELEMENTS))
        .enumerate()
        .map(|(lane_idx, (code_chunk, elem_chunk))| {
            let g = lane_idx / ADM_LANES;
            let center = centers[g].to_u64();
            let mut writer = BitWriter::with_capacity(elem_chunk.len());
            for (code_out, &v) in code_chunk.iter_mut().zip(elem_chunk.iter()) {
                let val = v.to_u64();
                let diff = val.abs_diff(center);
                let output_len = if val == center {
                    1
                } else {
                    (diff + (ADM_RESIDUAL_SPAN - 1)) / ADM_RESIDUAL_SPAN
                };
                let code: u8 = if val == center {
                    1
                } else {
                    let rem = diff + ADM_RESIDUAL_SPAN - output_len * ADM_RESIDUAL_SPAN;
                    // Low bit is the sign of (v - c): 1 means v < c, 0 means v > c.
                    let sign_bit: u64 = if val > center { 0 } else { 1 };
                    (2 * rem + sign_bit) as u8
                };
                *code_out = code;

                // First bit is the "next element" marker; remaining
                // `output_len - 1` zero bits each mean "+126" to the diff.
                writer.push_one();
                for _ in 1..output_len {
                    writer.push_zero();
                }
            }
            let bit_len = writer.bit_len();
            let byte_len = writer.byte_len();
            LaneBits { bit_len, bytes: writer.into_bytes(byte_len) }
        })
        .collect();
    lane_bits.resize_with(total_lanes, LaneBits::default);

    // Step 3 — per-group padding target: max lane byte-length in the group.
    let signal_length: Vec<usize> = (0..gsize)
        .into_par_iter()
        .map(|g| {
            let base = g * ADM_LANES;
            (base..base + ADM_LANES)
                .map(|l| (lane_bits[l].bit_len + 7) / 8)
                .max()
                .unwrap_or(0)
        })
        .collect();

    // Step 4 — layout: prefix sum of signal_length (serial, O(gsize)).
    let mut output_lengths: Vec<i32> = vec![0i32; gsize + 1];
    for g in 0..gsize {
        output_lengths[g + 1] = output_lengths[g] + signal_length[g] as i32;
    }
    let total_signal_bytes = output_lengths[gsize] as usize;

    // Pad every lane up to its group's signal_length, filling trailing bits with 1s.
    let padded_lanes: Vec<Vec<u8>> = lane_bits
        .into_par_iter()
        .enumerate()
        .map(|(lane_idx, lb)| {
            let g = lane_idx / ADM_LANES;
            pad_lane(lb, signal_length[g])
        })
        .collect();

    // Final placement: each group occupies a disjoint `signal_length[g] * 32`
    // byte window; within it, lane `l` occupies its own `signal_length[g]` slice.
    let mut bit_signals = vec![0u8; total_signal_bytes * ADM_LANES];
    {
        let mut remaining = bit_signals.as_mut_slice();
        let mut group_slices: Vec<&mut [u8]> = Vec::with_capacity(gsize);
        for g in 0..gsize {
            let (head, tail) = remaining.split_at_mut(signal_length[g] * ADM_LANES);
            group_slices.push(head);
            remaining = tail;
        }
        group_slices
            .into_par_iter()
            .enumerate()
            .for_each(|(g, group_buf)| {
                let lane_len = signal_length[g];
                if lane_len == 0 {
                    return;
                }
                for (l, dst) in group_buf.chunks_mut(lane_len).enumerate() {
                    dst.copy_from_slice(&padded_lanes[g * ADM_LANES + l]);
                }
            });
    }

    // Pack the FileHeader + four arrays into the final container.
    let len1 = 4 * (gsize + 1);
    let len2 = gsize * T::WIDTH;
    let len3 = n;
    let len4 = bit_signals.len();

    let header = FileHeader {
        num_elements: n as u64,
        gsize: gsize as u64,
        len1: len1 as u64,
        len2: len2 as u64,
        len3: len3 as u64,
        len4: len4 as u64,
    };

    let mut out = Vec::with_capacity(FILE_HEADER_LEN + len1 + len2 + len3 + len4);
    header.write(&mut out);
    for &ol in &output_lengths {
        out.extend_from_slice(&ol.to_le_bytes());
    }
    for &c in &centers {
        c.write_le(&mut out);
    }
    out.extend_from_slice(&codes);
    out.extend_from_slice(&bit_signals);
    out
}

/// Extend a lane's raw bitstream with trailing `1` bits through the end of
/// byte `target_bytes - 1` (spec.md §4.2 Step 3).
fn pad_lane(lb: LaneBits, target_bytes: usize) -> Vec<u8> {
    let mut writer = BitWriter::resume(lb.bytes, lb.bit_len);
    writer.pad_with_ones_to(target_bytes);
    writer.into_bytes(target_bytes)
}
