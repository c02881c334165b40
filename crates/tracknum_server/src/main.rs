use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod routes;

const DEFAULT_HTTP_PORT: u16 = 8000;

#[derive(Parser, Debug)]
#[command(name = "tracknum_server")]
#[command(about = "Tracking number issuance server")]
struct TracknumServerArgs {
    /// Server address to bind to
    #[arg(short, long, default_value = "0.0.0.0")]
    address: String,

    /// Server port to bind to
    #[arg(short, long, default_value_t = DEFAULT_HTTP_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("tracknum_server=info,tracknum_core=info"))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).compact())
        .init();

    let args = TracknumServerArgs::parse();

    let address = format!("{}:{}", args.address, args.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("serving tracking number API on {address}");
    axum::serve(listener, routes::app()).await?;

    Ok(())
}
