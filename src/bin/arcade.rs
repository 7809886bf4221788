//! Arcade Binary
//!
//! Subcommands: list, rps [choice], todo [--store <path>]

use arcade::cli::Command;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    arcade::log()?;
    Command::parse().run()
}
