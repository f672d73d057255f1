//! PANS (tabulated range-ANS) entropy coder over byte streams.
//!
//! See spec.md §4.4–§4.5 and SPEC_FULL.md §4.4 for the resolved Open
//! Questions around symbol-table wire format and per-block lane addressing.

pub mod decode;
pub mod encode;
pub mod rans;
pub mod tables;
pub mod types;

pub use decode::decode;
pub use encode::encode;
