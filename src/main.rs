use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// brochure - 4934 marketing site
#[derive(Parser)]
#[command(name = "brochure")]
#[command(about = "Marketing site with a contact form", long_about = None)]
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
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = brochure::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    brochure::observability::init_observability(
        "brochure",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::serve(config, host, port).await,
    }
}
