//! CLI surface: argument grammar and display-level plumbing for the `mans`
//! binary (SPEC_FULL.md §4.9, §4.11). The codec core in [`crate::adm`],
//! [`crate::pans`], [`crate::dispatch`], and [`crate::container`] never
//! touches these modules.

pub mod args;
pub mod constants;
