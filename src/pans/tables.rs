//! Histogram counting and probability-table normalization.
//!
//! Implements spec.md §4.4 "Histogram & probability table": every symbol
//! with non-zero frequency keeps at least one slot, and the normalized
//! masses are nudged so the total equals `2^precision` exactly by repeatedly
//! adjusting the currently-largest bucket — the concrete reading of spec.md's
//! "adjusts the largest buckets so the total equals 1024 exactly" (see
//! DESIGN.md for the Open Question this resolves).

use crate::config::PANS_NUM_SYMBOLS;

/// Count byte frequencies over the whole input.
pub fn histogram(data: &[u8]) -> [u64; PANS_NUM_SYMBOLS] {
    let mut freq = [0u64; PANS_NUM_SYMBOLS];
    for &b in data {
        freq[b as usize] += 1;
    }
    freq
}

/// Normalize raw frequencies to a probability mass table summing exactly to
/// `table_size` (`2^precision`). Every symbol with `freq[s] > 0` is
/// guaranteed `pdf[s] >= 1`.
pub fn normalize(freq: &[u64; PANS_NUM_SYMBOLS], table_size: u32) -> [u16; PANS_NUM_SYMBOLS] {
    let total: u64 = freq.iter().sum();
    let mut pdf = [0u16; PANS_NUM_SYMBOLS];
    if total == 0 {
        return pdf;
    }

    for s in 0..PANS_NUM_SYMBOLS {
        if freq[s] > 0 {
            let share = (freq[s] as u128 * table_size as u128 / total as u128) as u64;
            pdf[s] = share.max(1) as u16;
        }
    }

    let mut sum_pdf: i64 = pdf.iter().map(|&p| p as i64).sum();
    let mut diff: i64 = table_size as i64 - sum_pdf;

    while diff != 0 {
        // Largest bucket (lowest index on ties) absorbs the remainder, one
        // unit at a time, matching the "adjust the largest buckets" rule.
        let argmax = (0..PANS_NUM_SYMBOLS)
            .filter(|&s| if diff < 0 { pdf[s] > 1 } else { pdf[s] > 0 })
            .max_by_key(|&s| pdf[s])
            .expect("normalize: no adjustable bucket (table_size too small for symbol count)");
        if diff > 0 {
            pdf[argmax] += 1;
            diff -= 1;
        } else {
            pdf[argmax] -= 1;
            diff += 1;
        }
    }

    sum_pdf = pdf.iter().map(|&p| p as i64).sum();
    debug_assert_eq!(sum_pdf, table_size as i64);
    pdf
}

/// Exclusive prefix sum of `pdf` (`cdf[s] = sum(pdf[0..s])`).
pub fn cumulative(pdf: &[u16; PANS_NUM_SYMBOLS]) -> [u16; PANS_NUM_SYMBOLS] {
    let mut cdf = [0u16; PANS_NUM_SYMBOLS];
    let mut acc: u32 = 0;
    for s in 0..PANS_NUM_SYMBOLS {
        cdf[s] = acc as u16;
        acc += pdf[s] as u32;
    }
    cdf
}

/// Build the slot -> symbol inverse lookup table used by the decoder
/// (`symbol[slot]` for `slot` in `0..table_size`).
pub fn symbol_lookup(pdf: &[u16; PANS_NUM_SYMBOLS], cdf: &[u16; PANS_NUM_SYMBOLS], table_size: u32) -> Vec<u8> {
    let mut table = vec![0u8; table_size as usize];
    for s in 0..PANS_NUM_SYMBOLS {
        let start = cdf[s] as usize;
        let end = start + pdf[s] as usize;
        for slot in table.iter_mut().take(end).skip(start) {
            *slot = s as u8;
        }
    }
    table
}
