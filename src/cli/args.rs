//! `clap`-derived argument grammar for the `mans` binary.
//!
//! Unlike the teacher's `cli::args` (a hand-rolled scanner ported from
//! `lz4cli.c`'s legacy flag grammar), MANS has no legacy CLI surface to
//! preserve, so the grammar is declared directly with `clap`'s derive API,
//! matching how `clap` is used elsewhere in the examples corpus.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "mans", about = "ADM+PANS lossless codec for dense integer arrays")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity: repeat for more output (-v, -vv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress a raw element file into a MANS container.
    Compress {
        #[arg(long, value_enum)]
        dtype: Dtype,
        input: PathBuf,
        output: PathBuf,
        /// Also write the intermediate ADM container to `<output>.adm`,
        /// when the dispatcher selects codec 1.
        #[arg(long)]
        save_adm: bool,
        /// Override the dispatcher's `adm_threshold` (default 4000).
        #[arg(long)]
        threshold: Option<u64>,
    },
    /// Decompress a MANS container back into a raw element file.
    Decompress {
        #[arg(long, value_enum)]
        dtype: Dtype,
        input: PathBuf,
        output: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dtype {
    /// 16-bit unsigned elements.
    U2,
    /// 32-bit unsigned elements.
    U4,
}

impl From<Dtype> for crate::ElementType {
    fn from(d: Dtype) -> Self {
        match d {
            Dtype::U2 => crate::ElementType::U16,
            Dtype::U4 => crate::ElementType::U32,
        }
    }
}
