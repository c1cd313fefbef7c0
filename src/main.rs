use std::path::Path;

use clap::Parser;
use kubesift::{cli, config};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();

    // Logs go to stderr; stdout carries only the JSON report
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::log_level(cli.verbose, cli.quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let result = cli::run::handle_run(Path::new(config::RESULTS_PATH), &mut stdout.lock());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.classify().exit_code);
    }
}
