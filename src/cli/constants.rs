//! CLI display-level globals and the `displaylevel!` macro.
//!
//! Ported from the teacher's `cli::constants`: the core library performs no
//! logging (SPEC_FULL.md §4.9), so verbosity lives entirely in the binary,
//! gated on a crate-level atomic the same way `DISPLAY_LEVEL` gates
//! `lz4cli.c`'s `DISPLAYLEVEL` macro.

use std::sync::atomic::{AtomicU32, Ordering};

pub const COMPRESSOR_NAME: &str = "mans";

/// 0 = silent; 1 = errors only; 2 = normal; 3 = verbose.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stderr when the current display level is at least `$level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
