use anyhow::Result;
use clap::Parser;
use shortcut_bridge::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging after argument parsing so --log-level applies.
    shortcut_bridge::debug::init_log_bridge(cli.log_level);

    let code = cli::run(cli.command)?;
    if code != 0 {
        // Nothing holds resources that need dropping at this point.
        std::process::exit(code);
    }
    Ok(())
}
