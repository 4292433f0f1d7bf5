use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use libalncat::concat::{concatenate_with, partitions, ConcatError};
use libalncat::io::{read_alignment, write_alignment, AlignmentFormat};
use libalncat::structs::Alignment;
use log::info;

use crate::args::Cli;
use crate::util::PathBufExt;

fn read_alignments(cli: &Cli) -> anyhow::Result<Vec<Alignment>> {
    let format: AlignmentFormat = cli.input_args.input_format.into();

    cli.input_args
        .alignment_paths
        .iter()
        .map(|path| {
            let alignment = read_alignment(path, format)?;
            info!(
                "read {} records ({} columns) from {}",
                alignment.len(),
                alignment.width(),
                path.to_string_lossy()
            );
            Ok(alignment)
        })
        .collect()
}

/// Attach the offending input path to a concatenation error.
fn describe(err: ConcatError, paths: &[PathBuf]) -> anyhow::Error {
    let path = match &err {
        ConcatError::ShapeMismatch { index, .. } => paths.get(*index),
        ConcatError::IdentifierMismatch { index, .. } => paths.get(*index),
        ConcatError::EmptyInput => None,
    };

    match path {
        Some(path) => anyhow::Error::new(err)
            .context(format!("failed to concatenate: {}", path.to_string_lossy())),
        None => anyhow::Error::new(err).context("failed to concatenate"),
    }
}

pub fn concat(cli: &Cli) -> anyhow::Result<()> {
    let allow_overwrite = cli.common_args.allow_overwrite;
    let output_path = cli.output_args.output_path.as_ref();
    let partitions_path = cli.output_args.partitions_path.as_ref();

    // a bad output path fails before any work is done,
    // but nothing is created until the composite exists
    for path in output_path.iter().chain(partitions_path.iter()) {
        path.check_writable(allow_overwrite)?;
    }

    let paths = &cli.input_args.alignment_paths;
    let alignments = read_alignments(cli)?;
    let options = cli.concat_args.options()?;

    let composite = concatenate_with(&alignments, &options).map_err(|e| describe(e, paths))?;
    info!(
        "concatenated {} alignments into {} records ({} columns)",
        alignments.len(),
        composite.len(),
        composite.width()
    );

    let mut writer: Box<dyn Write> = match output_path {
        Some(path) => Box::new(path.open(allow_overwrite)?),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };
    write_alignment(&mut writer, &composite, cli.output_args.output_format)?;

    if let Some(path) = partitions_path {
        let sources = paths.iter().map(|p| p.to_string_lossy().to_string());
        let parts = partitions(sources.zip(&alignments), options.linker_motif());
        for part in &parts {
            info!(
                "{}: columns {}-{} ({} columns)",
                part.source,
                part.start,
                part.end,
                part.width()
            );
        }

        let mut partitions_writer = path.open(allow_overwrite)?;
        serde_json::to_writer_pretty(&mut partitions_writer, &parts)
            .context("failed to write partitions")?;
        writeln!(partitions_writer)?;
        partitions_writer.flush()?;
    }

    Ok(())
}
