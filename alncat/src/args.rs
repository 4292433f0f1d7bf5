use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser};
use libalncat::concat::{ConcatOptions, ConcatOptionsBuilder};
use libalncat::io::{AlignmentFormat, InputFormat};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "alncat")]
#[command(
    about = "Concatenate alignments computed per gene or per domain into one composite alignment"
)]
pub struct Cli {
    /// Arguments that control which alignments are read
    #[command(flatten)]
    pub input_args: InputArgs,

    /// Arguments that control how records are joined
    #[command(flatten)]
    pub concat_args: ConcatArgs,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,

    /// Arguments that are common across all of alncat
    #[command(flatten)]
    pub common_args: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Alignment files, one alignment per file, concatenated in the order given
    #[arg(value_name = "ALIGNMENT", required = true, num_args = 1..)]
    pub alignment_paths: Vec<PathBuf>,

    /// The format of every input alignment
    #[arg(
        short = 'i',
        long = "input-format",
        value_enum,
        default_value_t = InputFormat::Fasta,
        value_name = "FORMAT"
    )]
    pub input_format: InputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct ConcatArgs {
    /// A motif inserted between consecutive alignment segments
    #[arg(short = 'l', long = "linker", value_name = "MOTIF")]
    pub linker: Option<String>,

    /// Match records by sorted name instead of by position
    #[arg(short = 's', long = "sort", default_value_t = false)]
    pub sort_by_id: bool,
}

impl ConcatArgs {
    pub fn options(&self) -> anyhow::Result<ConcatOptions> {
        let mut builder = ConcatOptionsBuilder::default();
        builder.sort_by_id(self.sort_by_id);

        if let Some(ref linker) = self.linker {
            builder.linker(linker.clone());
        }

        builder.build().context("failed to build concatenation options")
    }
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Where to place the composite alignment (standard output if omitted)
    #[arg(short = 'o', long = "output", value_name = "path")]
    pub output_path: Option<PathBuf>,

    /// The format of the composite alignment
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = AlignmentFormat::Fasta,
        value_name = "FORMAT"
    )]
    pub output_format: AlignmentFormat,

    /// Where to place a JSON report of the columns each input contributes
    #[arg(short = 'p', long = "partitions", value_name = "path")]
    pub partitions_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// The number of threads that alncat will use
    #[arg(
        short = 't',
        long = "threads",
        default_value_t = 8usize,
        value_name = "n"
    )]
    pub num_threads: usize,

    /// Allow alncat to overwrite files
    #[arg(short = 'q', long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,

    /// The level of log messages written to standard error
    #[arg(short = 'v', long = "log-level", default_value = "warn", value_name = "LEVEL")]
    pub log_level: LevelFilter,
}
