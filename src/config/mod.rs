/// Scanner report read on every run, relative to the working directory.
pub const RESULTS_PATH: &str = "./results.json";

/// The only status string that counts as a successful check.
pub const PASSED_STATUS: &str = "passed";

/// Indentation unit for emitted JSON.
pub const INDENT: &[u8] = b"    ";

/// Default log directive when neither `RUST_LOG` nor a verbosity flag is set.
pub fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
