//! CLI entry point for exact cover and pentomino tiling enumeration

use clap::Parser;
use pentacover::io::cli::{Cli, Runner};

fn main() -> pentacover::Result<()> {
    let runner = Runner::new(Cli::parse());
    runner.run(&mut std::io::stdout().lock(), &mut std::io::stdin().lock())
}
