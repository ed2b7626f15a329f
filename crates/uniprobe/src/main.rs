mod cli;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use uniprobe_core::{SessionProvider, check_device, check_system};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let file = config::load(cli.global.config.as_deref())?;
    let (mut check_config, credentials) = config::resolve(&cli.global, &file);

    // A single provider per process; the scheduler embedding this binary
    // in a loop would hold it across polls to reuse sessions.
    let provider = SessionProvider::new();

    match cli.command {
        Command::Device { mac } => {
            check_config.mac = mac.or(file.mac);
            let outcome = check_device(&provider, &check_config, &credentials).await;
            output::emit("device", outcome)
        }
        Command::System => {
            let outcome = check_system(&provider, &check_config, &credentials).await;
            output::emit("system", outcome)
        }
    }
}
