//! MANS — a lossless codec for dense arrays of `u16`/`u32` integers,
//! combining ADM (Adaptive Delta-from-Mean) range reduction with PANS
//! (tabulated range-ANS) entropy coding behind a one-byte codec tag.
//!
//! The core (`adm`, `pans`, `dispatch`, `container`) performs no I/O and
//! holds no state across calls; every public operation runs to completion
//! or returns a [`MansError`].

pub mod adm;
pub mod bits;
pub mod cli;
pub mod config;
pub mod container;
pub mod dispatch;
pub mod error;
pub mod file;
pub mod pans;

pub use error::MansError;

/// Which fixed-width integer type an opaque byte buffer represents.
/// MANS does not self-describe element width on the wire (spec Non-goal);
/// the caller must track and supply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    U16,
    U32,
}

/// Compress a little-endian byte image of `u16` or `u32` elements into a
/// MANS container. `adm_threshold` defaults to
/// [`config::ADM_THRESHOLD_DEFAULT`] when `None`.
///
/// `elements` must be a whole number of `element_type`-sized elements.
pub fn compress(
    element_type: ElementType,
    elements: &[u8],
    adm_threshold: Option<u64>,
) -> Result<Vec<u8>, MansError> {
    match element_type {
        ElementType::U16 => compress_u16(&bytes_to_elements::<u16>(elements)?, adm_threshold),
        ElementType::U32 => compress_u32(&bytes_to_elements::<u32>(elements)?, adm_threshold),
    }
}

/// Decompress a MANS container back into a little-endian byte image of
/// `element_type`-sized elements.
pub fn decompress(element_type: ElementType, bytes: &[u8]) -> Result<Vec<u8>, MansError> {
    match element_type {
        ElementType::U16 => decompress_u16(bytes).map(|v| elements_to_bytes(&v)),
        ElementType::U32 => decompress_u32(bytes).map(|v| elements_to_bytes(&v)),
    }
}

/// Compress a `u16` element array into a MANS container.
pub fn compress_u16(elements: &[u16], adm_threshold: Option<u64>) -> Result<Vec<u8>, MansError> {
    Ok(container::compress(elements, adm_threshold))
}

/// Compress a `u32` element array into a MANS container.
pub fn compress_u32(elements: &[u32], adm_threshold: Option<u64>) -> Result<Vec<u8>, MansError> {
    Ok(container::compress(elements, adm_threshold))
}

/// Decompress a MANS container into a `u16` element array.
pub fn decompress_u16(bytes: &[u8]) -> Result<Vec<u16>, MansError> {
    container::decompress(bytes)
}

/// Decompress a MANS container into a `u32` element array.
pub fn decompress_u32(bytes: &[u8]) -> Result<Vec<u32>, MansError> {
    container::decompress(bytes)
}

fn bytes_to_elements<T: adm::AdmElement>(bytes: &[u8]) -> Result<Vec<T>, MansError> {
    if bytes.len() % T::WIDTH != 0 {
        return Err(MansError::BadHeader("input byte length not a multiple of element width"));
    }
    Ok((0..bytes.len() / T::WIDTH).map(|i| T::read_le(bytes, i * T::WIDTH)).collect())
}

fn elements_to_bytes<T: adm::AdmElement>(elements: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(elements.len() * T::WIDTH);
    for &v in elements {
        v.write_le(&mut out);
    }
    out
}
