//! typepick CLI - content type selector field.
//!
//! Commands:
//! - `typepick render --registry FILE`: render the selector for a stored value
//! - `typepick parse`: turn a submission into the value to store
//! - `typepick normalize VALUE`: print the canonical id list for a value
//! - `typepick describe`: print the field type and default settings
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use clap::Parser;
use tracing_subscriber::EnvFilter;

use typepick_cli::{commands, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("typepick=debug,typepick_cli=debug,typepick_fields=debug,typepick_config=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = result_to_exit(commands::run(cli.command).await);
    std::process::exit(exit_code);
}

/// Print command output, or the error, and map to an exit code.
fn result_to_exit<E: std::fmt::Display>(result: Result<String, E>) -> i32 {
    match result {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
