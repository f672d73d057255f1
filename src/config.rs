//! Compile-time configuration constants.
//!
//! Mirrors the teacher's `config.rs` (compile-time constants migrated from
//! `lz4conf.h`), but unlike the teacher's CLI-overridable knobs (`LZ4_CLEVEL`
//! env var, `-#` flag), these are pinned by spec: precision and block
//! geometry are fixed, not runtime-tunable. Only `adm_threshold` is a
//! caller-supplied parameter (see [`crate::dispatch`]).

/// Elements per ADM group (`B` in the spec). Corresponds to
/// `cmp_tblock_size * cmp_chunk` in the original `adm.h`.
pub const ADM_GROUP_SIZE: usize = 512;

/// Lanes per ADM group (`L` in the spec). Corresponds to `cmp_tblock_size`.
pub const ADM_LANES: usize = 32;

/// Elements per lane per ADM group (`C` in the spec). Corresponds to `cmp_chunk`.
pub const ADM_LANE_ELEMENTS: usize = 16;

/// Bias span of the ADM residual code (low bits encode `diff mod 126`,
/// biased by `+126`). Corresponds to the literal `126` in `adm.h`.
pub const ADM_RESIDUAL_SPAN: u64 = 126;

/// Default `adm_threshold` used by the dispatcher heuristic when the caller
/// does not supply one. Corresponds to `const int threshold = 4000` in
/// `cpu_mans_compress.cpp`.
pub const ADM_THRESHOLD_DEFAULT: u64 = 4000;

/// Window size (elements) the dispatcher heuristic scans for `max - min`.
/// Corresponds to `const std::size_t block_size = 512` in `cpu_mans_compress.cpp`.
pub const DISPATCH_WINDOW: usize = 512;

/// ANS probability table precision (`log2(table_size)`). Fixed at 10 bits —
/// a spec Non-goal explicitly rules out adaptive precision.
pub const PANS_PRECISION: u32 = 10;

/// Total probability mass of the PANS symbol table (`2^PANS_PRECISION`).
pub const PANS_TABLE_SIZE: u32 = 1 << PANS_PRECISION;

/// Decoded bytes per PANS block. Corresponds to `kDefaultBlockSize`.
pub const PANS_BLOCK_SIZE: usize = 4096;

/// ANS lanes ("warp") processed in lockstep per PANS block. Corresponds to `kWarpSize`.
pub const PANS_WARP_SIZE: usize = 32;

/// Byte alignment of per-block PANS payloads. Corresponds to `kBlockAlignment`.
pub const PANS_BLOCK_ALIGNMENT: usize = 16;

/// Size of the PANS byte alphabet. Corresponds to `kNumSymbols`.
pub const PANS_NUM_SYMBOLS: usize = 256;

/// Lower bound of the renormalization interval for the ANS state
/// (`2^16`, one encoded word).
pub const PANS_RENORM_LOW: u32 = 1 << 16;

/// MANS outer codec tag: ADM ran before PANS.
pub const CODEC_ADM_THEN_PANS: u8 = 1;

/// MANS outer codec tag: PANS ran directly over the element byte image.
pub const CODEC_PANS_ONLY: u8 = 2;

/// Magic value stamped into the PANS fixed header, used to reject
/// non-PANS/corrupt containers early.
pub const PANS_MAGIC: u32 = 0x5041_4e53; // "PANS" little-endian word
