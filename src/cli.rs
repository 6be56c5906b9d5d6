// src/cli.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Password security analyzer service", long_about = None)]
pub struct Args {
    /// API server port
    #[arg(long, env = "WEB_PORT")]
    pub port: Option<u16>,

    /// Address to bind the API server to
    #[arg(long, env = "WEB_ADDRESS")]
    pub bind: Option<String>,

    /// Dictionary wordlist files (comma-separated, overrides config)
    #[arg(long, value_delimiter = ',')]
    pub dictionaries: Vec<String>,

    /// Skip the remote breach check (offline mode)
    #[arg(long)]
    pub no_breach_check: bool,
}
