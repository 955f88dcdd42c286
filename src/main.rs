use anyhow::Result;
use clap::{Parser, Subcommand};
use cropmon_agenda::DayId;

/// cropmon - Crop Monitoring workshop agenda
#[derive(Parser)]
#[command(name = "cropmon")]
#[command(about = "Serve the Crop Monitoring workshop agenda", long_about = None)]
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
    /// Print the agenda fragment of one day
    Show {
        /// Day identifier (day1..day5)
        #[arg(value_parser = |s: &str| DayId::parse(s))]
        day: DayId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cropmon::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    cropmon::observability::init_observability(
        "cropmon",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let result = match cli.command {
        Commands::Serve { host, port } => cropmon::server::serve(config, host, port).await,
        Commands::Show { day } => cropmon::show(config, day).map(|content| println!("{content}")),
    };

    tracing::info!("cropmon stopped");

    result
}
