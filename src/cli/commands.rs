use clap::Parser;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

/// Prints the failing controls of ./results.json as JSON.
#[derive(Parser, Debug)]
#[command(
    name = "kubesift",
    version,
    long_version = LONG_VERSION,
    about = "Reduce a kubescape results report to its failing controls"
)]
pub struct Cli {
    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    pub no_color: bool,
}
