//! PANS container layout: fixed header, symbol table, and per-block metadata.
//!
//! Field names follow spec.md §3 "PANS container" (`warp_states`, `words`,
//! `prefix`); the two points the spec leaves unresolved — how the symbol
//! table is carried on the wire, and how a block's combined word stream is
//! split back out per lane — are this module's Open Question resolutions,
//! recorded in DESIGN.md. Every multi-byte field uses the explicit
//! little-endian helpers in [`crate::bits`], never a struct memcpy.

use crate::bits::{align_up, read_le16, read_le32, read_le64, write_le16, write_le32, write_le64};
use crate::config::{PANS_BLOCK_ALIGNMENT, PANS_MAGIC, PANS_NUM_SYMBOLS, PANS_PRECISION, PANS_WARP_SIZE};
use crate::error::{MansError, Result};

/// Fixed PANS container header, 32 bytes, 16-byte aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PansHeader {
    pub precision: u32,
    pub n_bytes: u64,
    pub block_count: u32,
    pub total_compressed_size: u32,
}

pub const PANS_HEADER_LEN: usize = 32;

impl PansHeader {
    pub fn write(&self, out: &mut Vec<u8>) {
        write_le32(out, PANS_MAGIC);
        write_le32(out, self.precision);
        write_le64(out, self.n_bytes);
        write_le32(out, self.block_count);
        write_le32(out, self.total_compressed_size);
        out.extend_from_slice(&[0u8; 8]); // reserved, keeps header 16-byte aligned
    }

    pub fn read(buf: &[u8]) -> Result<Self> {
        if buf.len() < PANS_HEADER_LEN {
            return Err(MansError::Truncated { expected: PANS_HEADER_LEN, actual: buf.len() });
        }
        let magic = read_le32(buf, 0);
        if magic != PANS_MAGIC {
            return Err(MansError::BadHeader("PANS magic mismatch"));
        }
        let precision = read_le32(buf, 4);
        if precision != PANS_PRECISION {
            return Err(MansError::BadHeader("PANS precision mismatch"));
        }
        Ok(PansHeader {
            precision,
            n_bytes: read_le64(buf, 8),
            block_count: read_le32(buf, 16),
            total_compressed_size: read_le32(buf, 20),
        })
    }
}

/// Wire length of the symbol table: 256 little-endian `u16` `pdf` entries.
/// `cdf` and the slot lookup are rebuilt on load, never stored.
pub const SYMBOL_TABLE_LEN: usize = PANS_NUM_SYMBOLS * 2;

pub fn write_symbol_table(out: &mut Vec<u8>, pdf: &[u16; PANS_NUM_SYMBOLS]) {
    for &p in pdf {
        write_le16(out, p);
    }
}

pub fn read_symbol_table(buf: &[u8]) -> Result<[u16; PANS_NUM_SYMBOLS]> {
    if buf.len() < SYMBOL_TABLE_LEN {
        return Err(MansError::Truncated { expected: SYMBOL_TABLE_LEN, actual: buf.len() });
    }
    let mut pdf = [0u16; PANS_NUM_SYMBOLS];
    for (s, slot) in pdf.iter_mut().enumerate() {
        *slot = read_le16(buf, s * 2);
    }
    Ok(pdf)
}

/// Per-block metadata entry: 32 terminal lane states, the packed
/// `(decoded_bytes, word_count)` pair, and the block's payload prefix offset.
#[derive(Debug, Clone)]
pub struct BlockMeta {
    pub warp_states: [u32; PANS_WARP_SIZE],
    pub decoded_bytes: u16,
    pub word_count: u16,
    pub prefix: u32,
}

/// Wire length of one [`BlockMeta`] entry: `32*4 + 4 + 4`.
pub const BLOCK_META_LEN: usize = PANS_WARP_SIZE * 4 + 4 + 4;

impl BlockMeta {
    pub fn write(&self, out: &mut Vec<u8>) {
        for &s in &self.warp_states {
            write_le32(out, s);
        }
        let words = ((self.decoded_bytes as u32) << 16) | self.word_count as u32;
        write_le32(out, words);
        write_le32(out, self.prefix);
    }

    pub fn read(buf: &[u8]) -> Self {
        let mut warp_states = [0u32; PANS_WARP_SIZE];
        for (l, slot) in warp_states.iter_mut().enumerate() {
            *slot = read_le32(buf, l * 4);
        }
        let words = read_le32(buf, PANS_WARP_SIZE * 4);
        let prefix = read_le32(buf, PANS_WARP_SIZE * 4 + 4);
        BlockMeta {
            warp_states,
            decoded_bytes: (words >> 16) as u16,
            word_count: (words & 0xFFFF) as u16,
            prefix,
        }
    }
}

/// Byte length of the block-metadata table, padded to alignment before the
/// concatenated per-block payloads begin.
pub fn block_table_span(block_count: usize) -> usize {
    align_up(block_count * BLOCK_META_LEN, PANS_BLOCK_ALIGNMENT)
}
