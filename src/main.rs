use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = dirsetup::cli::Cli::parse();
    cli.run()
}
