use clap::Parser;
use miette::Result;
use pxsvg::cli::{Cli, Commands};
use pxsvg::discovery::load_manifest;
use pxsvg::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_verbose(cli.verbose);

    match cli.command {
        Commands::Completions(args) => pxsvg::cli::completions::run(args)?,
        Commands::Convert(args) => {
            let manifest = load_manifest(cli.config.as_deref())?;
            pxsvg::cli::convert::run(args, &manifest, &printer)?;
        }
        Commands::Regions(args) => {
            let manifest = load_manifest(cli.config.as_deref())?;
            pxsvg::cli::regions::run(args, &manifest, &printer)?;
        }
    }

    Ok(())
}
