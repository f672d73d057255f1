//! Binary entry point for the `mans` command-line tool.
//!
//! Two subcommands (`compress`, `decompress`), a `--dtype` selector (MANS
//! does not self-describe element width on the wire), and an optional
//! `--save-adm` diagnostic mirroring the original binaries' `save_adm`
//! argument (SPEC_FULL.md §4.11). Exit codes: 0 success, 1 any failure.

use anyhow::{bail, Result};
use clap::Parser;

use mans::cli::args::{Cli, Command};
use mans::cli::constants::set_display_level;
use mans::config::ADM_THRESHOLD_DEFAULT;
use mans::file::{read_whole_file, write_whole_file};
use mans::{adm, container, dispatch, displaylevel, ElementType};

fn main() {
    let cli = Cli::parse();
    set_display_level(2 + cli.verbose as u32);

    let result = match cli.command {
        Command::Compress { dtype, input, output, save_adm, threshold } => {
            run_compress(dtype.into(), &input, &output, save_adm, threshold)
        }
        Command::Decompress { dtype, input, output } => run_decompress(dtype.into(), &input, &output),
    };

    if let Err(err) = result {
        displaylevel!(1, "mans: error: {err}\n");
        std::process::exit(1);
    }
}

fn run_compress(
    dtype: ElementType,
    input: &std::path::Path,
    output: &std::path::Path,
    save_adm: bool,
    threshold: Option<u64>,
) -> Result<()> {
    let raw = read_whole_file(input)?;

    let mans_bytes = match dtype {
        ElementType::U16 => compress_typed::<u16>(&raw, threshold, save_adm, output)?,
        ElementType::U32 => compress_typed::<u32>(&raw, threshold, save_adm, output)?,
    };

    write_whole_file(output, &mans_bytes)?;
    displaylevel!(2, "mans: {} -> {} ({} -> {} bytes)\n", input.display(), output.display(), raw.len(), mans_bytes.len());
    Ok(())
}

fn compress_typed<T: adm::AdmElement>(
    raw: &[u8],
    threshold: Option<u64>,
    save_adm: bool,
    output: &std::path::Path,
) -> Result<Vec<u8>> {
    if raw.len() % T::WIDTH != 0 {
        bail!("input byte length {} is not a multiple of the element width {}", raw.len(), T::WIDTH);
    }
    let elements: Vec<T> = (0..raw.len() / T::WIDTH).map(|i| T::read_le(raw, i * T::WIDTH)).collect();

    let effective_threshold = threshold.unwrap_or(ADM_THRESHOLD_DEFAULT);
    let max_delta = dispatch::max_block_delta(&elements);
    let use_adm = max_delta <= effective_threshold;
    displaylevel!(
        2,
        "[mans] u{} block range: max_diff={} threshold={} -> codec={}\n",
        T::WIDTH,
        max_delta,
        effective_threshold,
        if use_adm { "adm+pans" } else { "pans_only" },
    );

    if save_adm {
        if use_adm {
            let adm_bytes = adm::encode(&elements);
            let adm_path = output.with_extension("adm");
            write_whole_file(&adm_path, &adm_bytes)?;
            displaylevel!(2, "mans: wrote intermediate ADM container to {}\n", adm_path.display());
        } else {
            displaylevel!(2, "mans: dispatcher selected PANS-only; no ADM container to save\n");
        }
    }

    Ok(container::compress(&elements, threshold))
}

fn run_decompress(dtype: ElementType, input: &std::path::Path, output: &std::path::Path) -> Result<()> {
    let container_bytes = read_whole_file(input)?;

    let raw = match dtype {
        ElementType::U16 => {
            let elements = container::decompress::<u16>(&container_bytes)?;
            elements_to_bytes(&elements)
        }
        ElementType::U32 => {
            let elements = container::decompress::<u32>(&container_bytes)?;
            elements_to_bytes(&elements)
        }
    };

    write_whole_file(output, &raw)?;
    displaylevel!(2, "mans: {} -> {} ({} -> {} bytes)\n", input.display(), output.display(), container_bytes.len(), raw.len());
    Ok(())
}

fn elements_to_bytes<T: adm::AdmElement>(elements: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(elements.len() * T::WIDTH);
    for &v in elements {
        v.write_le(&mut out);
    }
    out
}
