//! ADM (Adaptive Delta-from-Mean) — block mean + signed residual predictor.
//!
//! See spec.md §4.2–§4.3 and SPEC_FULL.md §4.2 for the resolved Open
//! Questions. Exposed as two free functions, generic over [`types::AdmElement`],
//! mirroring the teacher's generic-over-table-type block compressor.

pub mod decode;
pub mod encode;
pub mod types;

pub use decode::decode;
pub use encode::encode;
pub use types::{AdmElement, FileHeader, FILE_HEADER_LEN};
