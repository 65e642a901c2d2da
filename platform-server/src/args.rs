use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the config file (TOML). Missing file falls back to defaults.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Override the HTTP listen port from the config.
    #[arg(long)]
    pub port: Option<u16>,

    /// Override the number of traders generated at startup.
    #[arg(long)]
    pub trader_count: Option<usize>,
}
