// Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "uniprobe",
    version,
    about = "Metrics-collection probe for UniFi network controllers"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controller host or full URL.
    #[arg(long, env = "UNIPROBE_CONTROLLER", global = true)]
    pub controller: Option<String>,

    /// Controller port, used with bare-host addresses.
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Skip TLS certificate verification (self-signed controllers).
    #[arg(short = 'k', long, global = true)]
    pub insecure: bool,

    /// Site to scope requests to.
    #[arg(long, global = true)]
    pub site: Option<String>,

    /// Login username.
    #[arg(long, env = "UNIPROBE_USERNAME", global = true)]
    pub username: Option<String>,

    /// Login password.
    #[arg(long, env = "UNIPROBE_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to a TOML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Poll one device's status snapshot.
    Device {
        /// Device MAC address.
        #[arg(long)]
        mac: Option<String>,
    },
    /// Poll controller-level status for the site.
    System,
}
