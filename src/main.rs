use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use library_catalog::{Catalog, Shell, cli::Cli, observers::TransitionLogger};
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level()).with_writer(io::stderr).init();

    let mut catalog = Catalog::new();
    catalog.register_observer(Box::new(TransitionLogger));

    let config = cli.shell_config(io::stdout().is_terminal());
    let mut shell = Shell::new(catalog, config, io::stdin().lock(), io::stdout().lock());

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("shell stopped: {e}");
            ExitCode::FAILURE
        }
    }
}
