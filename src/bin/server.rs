//! catalog-server - serves the laptop catalog over gRPC.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use laptop_catalog::{grpc, DiskImageStore, InMemoryLaptopStore, InMemoryRatingStore};

/// Laptop catalog gRPC server
#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', default_value_t = 8080)]
    port: u16,

    /// Folder uploaded laptop images are written to
    #[arg(long, default_value = "img")]
    image_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();
    let addr = SocketAddr::new(cli.host, cli.port);
    let laptops = Arc::new(InMemoryLaptopStore::new());
    let images = Arc::new(DiskImageStore::new(cli.image_dir));
    let ratings = Arc::new(InMemoryRatingStore::new());

    if let Err(e) = grpc::serve_grpc(laptops, images, ratings, addr).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,laptop_catalog=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
