use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "nba-stats-api")]
#[command(version)]
#[command(about = "Read-only HTTP query API over NBA game and player statistics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding default.toml and per-environment config files
    #[arg(short, long, default_value = "config", env = "NBA_API_CONFIG_DIR")]
    pub config_dir: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve {
        /// Interface to bind, overrides server.host
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on, overrides server.port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Check database connectivity and exit
    Check,
}

impl Cli {
    /// Subcommand to run, falling back to `serve`
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve {
            host: None,
            port: None,
        })
    }
}
