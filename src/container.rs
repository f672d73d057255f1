//! Outer MANS framing: `[codec_tag: u8][PANS container bytes]`.
//!
//! Implements spec.md §4.6, wiring the dispatcher's choice (spec.md §4.1)
//! to ADM + PANS, or to PANS alone over the element array's little-endian
//! byte image.

use crate::adm::{self, AdmElement};
use crate::config::{ADM_THRESHOLD_DEFAULT, CODEC_ADM_THEN_PANS, CODEC_PANS_ONLY};
use crate::dispatch::should_run_adm;
use crate::error::{MansError, Result};
use crate::pans;

/// Compress `elements` into a MANS container. Empty input maps to empty
/// output, per spec.md §3.
pub fn compress<T: AdmElement>(elements: &[T], adm_threshold: Option<u64>) -> Vec<u8> {
    if elements.is_empty() {
        return Vec::new();
    }

    let threshold = adm_threshold.unwrap_or(ADM_THRESHOLD_DEFAULT);
    let use_adm = should_run_adm(elements, threshold);

    let (codec_tag, pans_input) = if use_adm {
        (CODEC_ADM_THEN_PANS, adm::encode(elements))
    } else {
        let mut bytes = Vec::with_capacity(elements.len() * T::WIDTH);
        for &v in elements {
            v.write_le(&mut bytes);
        }
        (CODEC_PANS_ONLY, bytes)
    };

    let pans_bytes = pans::encode(&pans_input);

    let mut out = Vec::with_capacity(1 + pans_bytes.len());
    out.push(codec_tag);
    out.extend_from_slice(&pans_bytes);
    out
}

/// Decompress a MANS container back into elements. Empty input maps to
/// empty output, per spec.md §3.
pub fn decompress<T: AdmElement>(container: &[u8]) -> Result<Vec<T>> {
    if container.is_empty() {
        return Ok(Vec::new());
    }

    let codec_tag = container[0];
    let pans_bytes = pans::decode(&container[1..])?;

    match codec_tag {
        CODEC_ADM_THEN_PANS => adm::decode(&pans_bytes),
        CODEC_PANS_ONLY => {
            if pans_bytes.len() % T::WIDTH != 0 {
                return Err(MansError::BadHeader("PANS-only payload length not a multiple of element width"));
            }
            let n = pans_bytes.len() / T::WIDTH;
            Ok((0..n).map(|i| T::read_le(&pans_bytes, i * T::WIDTH)).collect())
        }
        other => Err(MansError::BadCodec(other)),
    }
}
