//! veneer - Entry Point

use clap::Parser;
use veneer::cli::{Cli, execute, load_config};
use veneer_infrastructure::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config.logging)?;
    println!("{}", execute(&cli.command, &config));
    Ok(())
}
