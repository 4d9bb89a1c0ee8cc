use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};
use common::{config::Config, utils::OutputFormat};
use directory::CustomerDirectoryClient;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod fixture;
mod render;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the customer directory and render it
    Show {
        /// Base URL of the customer service, overrides CUSTOMERS_API_URL
        #[clap(long)]
        base_url: Option<String>,

        /// Select the customer at this position in the list (1-based)
        #[clap(long)]
        select: Option<usize>,

        /// Output format: text or json
        #[clap(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Serve a customers payload on /api/customers
    ServeFixture {
        /// JSON file with one customer object or an array of them
        #[clap(long)]
        file: Option<PathBuf>,

        /// Listen address, defaults to FIXTURE_HOST:FIXTURE_PORT
        #[clap(long)]
        addr: Option<SocketAddr>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    match cli.command {
        Commands::Show {
            base_url,
            select,
            format,
        } => {
            if let Some(base_url) = base_url {
                config.api_base_url = base_url;
            }
            show(&config, select, format).await?;
        }
        Commands::ServeFixture { file, addr } => {
            let addr = match addr {
                Some(addr) => addr,
                None => fixture::resolve_addr(&config.fixture_address()).await?,
            };
            let payload = fixture::load_payload(file.as_deref()).await?;
            fixture::serve(addr, payload).await?;
        }
    }

    Ok(())
}

async fn show(config: &Config, select: Option<usize>, format: OutputFormat) -> anyhow::Result<()> {
    let client = CustomerDirectoryClient::from_config(config)?;
    info!(url = %client.endpoint(), "Loading customer directory");
    client.initialize().await;

    if let Some(position) = select {
        let customers = client.customers().await;
        match position.checked_sub(1).and_then(|index| customers.get(index)) {
            Some(customer) => client.select_customer(Some(customer.clone())).await,
            None => warn!(
                position,
                count = customers.len(),
                "No customer at that position, nothing selected"
            ),
        }
    }

    let state = client.snapshot().await;
    match format {
        OutputFormat::TEXT => print!("{}", render::render(&state)),
        OutputFormat::JSON => println!("{}", serde_json::to_string_pretty(&state)?),
    }

    Ok(())
}
