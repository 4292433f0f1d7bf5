mod args;
mod concat;
mod util;

use args::Cli;
use concat::concat;
use util::{init_logging, set_threads};

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.common_args.log_level)?;
    set_threads(cli.common_args.num_threads)?;
    concat(&cli)?;

    Ok(())
}
