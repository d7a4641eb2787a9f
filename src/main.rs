//! CLI entry point for carving and solving a maze

use clap::Parser;
use mazecarve::io::cli::{Cli, MazeRunner, init_logging};

fn main() -> mazecarve::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let mut runner = MazeRunner::new(cli);
    runner.run().map(|_| ())
}
