use clap::Parser;
use sortviz::app::{self, cli::Cli};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // note: logs go to stderr, stdout only carries the rendered output.
    match app::run(cli).map(|out| print!("{}", out)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

// RUST_LOG wins over --verbose when both are given
fn init_tracing(verbose: bool) {
    let default = if verbose { "sortviz=debug" } else { "sortviz=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
