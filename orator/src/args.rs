use std::path::PathBuf;

use clap::Parser;

/// Orator voice relay
#[derive(Debug, Parser)]
#[command(name = "orator", about = "Audio transcription relay with chat completion")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "orator.toml", env = "ORATOR_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "ORATOR_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
