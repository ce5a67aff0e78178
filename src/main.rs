use clap::Parser;

use graphbench::cli::{run, Cli};
use graphbench::observability::init_logging;

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
