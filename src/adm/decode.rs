//! ADM decoder — inverts [`super::encode::encode`].
//!
//! Implements spec.md §4.3 verbatim, including the resolution of spec.md
//! §9's Open Question about per-lane addressing: lane `l` of group `g`
//! always occupies `codes[g*B + l*C .. g*B + (l+1)*C)`, the same tiling the
//! encoder used — not the mismatched tiling used by the original C++
//! decoder's step 2 loop (see SPEC_FULL.md §4.2 for the full resolution).

use rayon::prelude::*;

use crate::bits::{read_le_i32, BitReader};
use crate::config::{ADM_GROUP_SIZE, ADM_LANES, ADM_LANE_ELEMENTS};
use crate::error::{MansError, Result};

use super::types::{AdmElement, FileHeader, FILE_HEADER_LEN};

/// Decode an ADM container produced by [`super::encode::encode`] back into
/// `N` elements of type `T`.
pub fn decode<T: AdmElement>(container: &[u8]) -> Result<Vec<T>> {
    if container.is_empty() {
        return Ok(Vec::new());
    }

    let header = FileHeader::read(container)?;
    let n = header.num_elements as usize;
    let gsize = header.gsize as usize;

    if header.len1 != 4 * (gsize as u64 + 1) {
        return Err(MansError::BadHeader("ADM len1 does not match 4*(gsize+1)"));
    }
    if header.len3 != n as u64 {
        return Err(MansError::BadHeader("ADM len3 does not match num_elements"));
    }
    if header.len2 != gsize as u64 * T::WIDTH as u64 {
        return Err(MansError::BadHeader("ADM len2 does not match gsize * element width"));
    }

    let mut offset = FILE_HEADER_LEN;
    let len1 = header.len1 as usize;
    let len2 = header.len2 as usize;
    let len3 = header.len3 as usize;
    let len4 = header.len4 as usize;

    let need = offset + len1 + len2 + len3 + len4;
    if container.len() < need {
        return Err(MansError::Truncated { expected: need, actual: container.len() });
    }

    let output_lengths: Vec<i32> = (0..gsize + 1)
        .map(|i| read_le_i32(container, offset + i * 4))
        .collect();
    offset += len1;

    let centers: Vec<T> = (0..gsize).map(|g| T::read_le(container, offset + g * T::WIDTH)).collect();
    offset += len2;

    let codes = &container[offset..offset + len3];
    offset += len3;

    let bit_signals = &container[offset..offset + len4];

    if bit_signals.len() != (output_lengths[gsize] as usize) * ADM_LANES {
        return Err(MansError::BadHeader("ADM bit_signals length does not match output_lengths[G]*32"));
    }

    // Step 1 — restore each lane's unary overflow counts (spec.md §4.3 Step 1).
    let mut signals = vec![0u8; n];
    signals
        .par_chunks_mut(ADM_LANE_ELEMENTS)
        .enumerate()
        .for_each(|(lane_idx, signal_chunk)| {
            let g = lane_idx / ADM_LANES;
            let l = lane_idx % ADM_LANES;
            let length = (output_lengths[g + 1] - output_lengths[g]) as usize;
            if length == 0 {
                return;
            }
            let src_start = output_lengths[g] as usize * ADM_LANES + l * length;
            let lane_bytes = &bit_signals[src_start..src_start + length];

            let mut local_signal = [0u8; ADM_LANE_ELEMENTS];
            let mut signal_idx: isize = -1;
            BitReader::new(lane_bytes).for_each_bit(|bit| {
                if bit {
                    signal_idx += 1;
                    if signal_idx as usize >= ADM_LANE_ELEMENTS {
                        return false;
                    }
                } else if signal_idx >= 0 {
                    local_signal[signal_idx as usize] += 1;
                }
                true
            });
            signal_chunk.copy_from_slice(&local_signal[..signal_chunk.len()]);
        });

    // Step 2 — decode values (spec.md §4.3 Step 2), independent per element.
    let mut out = vec![T::default(); n];
    out.par_chunks_mut(ADM_GROUP_SIZE)
        .zip(codes.par_chunks(ADM_GROUP_SIZE))
        .zip(signals.par_chunks(ADM_GROUP_SIZE))
        .zip(centers.par_iter())
        .for_each(|(((out_chunk, code_chunk), signal_chunk), &center)| {
            let center = center.to_u64();
            for ((out_v, &code), &sig) in out_chunk.iter_mut().zip(code_chunk.iter()).zip(signal_chunk.iter()) {
                let negative = code & 1 == 1;
                let base_diff = if negative { (code as u64 - 1) / 2 } else { code as u64 / 2 };
                let diff = base_diff + sig as u64 * crate::config::ADM_RESIDUAL_SPAN;
                let val = if negative { center - diff } else { center + diff };
                *out_v = T::from_u64(val);
            }
        });

    Ok(out)
}
