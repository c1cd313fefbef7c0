pub mod commands;
pub mod run;

pub use commands::Cli;
