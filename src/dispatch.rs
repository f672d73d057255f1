//! ADM-vs-PANS-only dispatch heuristic.
//!
//! Implements spec.md §4.1: scan disjoint 512-element windows and take the
//! largest `max - min` seen in any of them. ADM only pays off when every
//! window stays inside `adm_threshold`. Grounded on `cpu_mans_compress.cpp`'s
//! `threshold`/`block_size` scan and its `use_adm = (max_block_diff <=
//! threshold)` decision, mirrored element-for-element here.
//!
//! [`max_block_delta`] is split out from [`should_run_adm`] so the CLI can
//! report the measured value alongside the codec choice (SPEC_FULL.md §4.1,
//! §4.9) without duplicating the window scan.

use crate::adm::AdmElement;
use crate::config::DISPATCH_WINDOW;

/// Decide whether ADM should run ahead of PANS for `elements`, given
/// `adm_threshold` (the maximum tolerable per-window `max - min`).
pub fn should_run_adm<T: AdmElement>(elements: &[T], adm_threshold: u64) -> bool {
    max_block_delta(elements) <= adm_threshold
}

/// Largest `max - min` seen in any disjoint [`DISPATCH_WINDOW`]-element
/// window of `elements`. `0` for an empty slice.
pub fn max_block_delta<T: AdmElement>(elements: &[T]) -> u64 {
    elements
        .chunks(DISPATCH_WINDOW)
        .map(|window| {
            let mut lo = u64::MAX;
            let mut hi = 0u64;
            for &v in window {
                let v = v.to_u64();
                lo = lo.min(v);
                hi = hi.max(v);
            }
            hi.saturating_sub(lo)
        })
        .max()
        .unwrap_or(0)
}
