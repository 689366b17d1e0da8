use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// nagoyameshi - Nagoya restaurant reservations and reviews
#[derive(Parser)]
#[command(name = "nagoyameshi")]
#[command(about = "Restaurant discovery, reservations and reviews for Nagoya", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage administrator accounts
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// Create an administrator
    Create {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = nagoyameshi::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    nagoyameshi::observability::init_tracing(
        "nagoyameshi",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::serve(config, host, port).await,
        Commands::Migrate => cli::migrate(config).await,
        Commands::Reset => cli::reset(config).await,
        Commands::Admin {
            command: AdminCommands::Create { email, password },
        } => cli::create_admin(config, email, password).await,
    }
}
