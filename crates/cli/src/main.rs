use anyhow::Result;
use clap::{Parser, Subcommand};
use frn_console_core::{Catalog, ConsoleConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "frn-console")]
#[command(about = "FRN API console: browse and test the Free REST API Collection", long_about = None)]
struct Cli {
    /// JSON catalog to use instead of the built-in endpoint list
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the web console and JSON API
    Serve {
        #[arg(short, long, default_value = "37780")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// List endpoints grouped by category
    List {
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Show one endpoint
    Show { id: String },
    /// Dashboard numbers: totals and method distribution
    Stats,
    /// Source repositories and contributors
    Credits,
    /// Run a simulated request and print the response
    Simulate {
        id: String,
        /// Parameter as name=value; repeatable
        #[arg(short, long = "param", value_parser = commands::simulate::parse_param)]
        param: Vec<(String, String)>,
        /// Skip the artificial latency
        #[arg(long)]
        no_delay: bool,
    },
}

fn load_catalog(config: &ConsoleConfig) -> Result<Catalog> {
    Ok(Catalog::load(config.catalog_path.as_deref())?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ConsoleConfig::from_env();
    if cli.catalog.is_some() {
        config.catalog_path = cli.catalog;
    }

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host, config).await?,
        Commands::List { query } => commands::catalog::run_list(&config, &query)?,
        Commands::Show { id } => commands::catalog::run_show(&config, &id)?,
        Commands::Stats => commands::catalog::run_stats(&config)?,
        Commands::Credits => commands::catalog::run_credits(&config)?,
        Commands::Simulate { id, param, no_delay } => {
            if no_delay {
                config = config.without_latency();
            }
            commands::simulate::run(&config, &id, param).await?;
        },
    }

    Ok(())
}
