//! axkeys - inspect macOS Accessibility keys from the command line

use axkeys::{cli::run_cli, Result};

fn main() -> Result<()> {
    run_cli()
}
