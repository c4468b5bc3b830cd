//! catalog-client - creates, searches, rates and uploads images of laptops.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tonic::transport::Channel;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use laptop_catalog::grpc::{
    CreateLaptopRequest, FilterMessage, ImageInfoMessage, LaptopServiceClient,
    RateLaptopRequest, SearchLaptopRequest, UploadImageData, UploadImageRequest,
};
use laptop_catalog::{sample, Filter, Laptop, Memory, MemoryUnit};

/// Laptop catalog gRPC client
#[derive(Parser)]
#[command(name = "catalog-client")]
#[command(version)]
struct Cli {
    /// Server endpoint
    #[arg(long, short = 'a', default_value = "http://127.0.0.1:8080")]
    address: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create random laptops
    Create {
        #[arg(long, short = 'n', default_value_t = 10)]
        count: usize,
    },
    /// Search laptops matching a filter
    Search {
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long, default_value_t = 0)]
        min_cores: u32,
        #[arg(long, default_value_t = 0.0)]
        min_ghz: f64,
        #[arg(long)]
        min_ram_gb: Option<u64>,
    },
    /// Upload an image file for a laptop
    UploadImage {
        laptop_id: String,
        path: PathBuf,
    },
    /// Rate a laptop once per given score
    Rate {
        laptop_id: String,
        #[arg(required = true)]
        scores: Vec<f64>,
    },
}

/// Bytes sent per upload message.
const CHUNK_SIZE: usize = 1024;

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    tracing::info!(address = %cli.address, "dial server");
    let mut client = LaptopServiceClient::connect(cli.address).await?;

    match cli.command {
        Command::Create { count } => {
            for _ in 0..count {
                create_laptop(&mut client, sample::new_laptop()).await?;
            }
        }
        Command::Search {
            max_price,
            min_cores,
            min_ghz,
            min_ram_gb,
        } => {
            let filter = Filter {
                max_price_usd: max_price,
                min_cpu_cores: min_cores,
                min_cpu_ghz: min_ghz,
                min_ram: min_ram_gb.map(|gb| Memory::new(gb, MemoryUnit::Gigabyte)),
            };
            search_laptop(&mut client, filter).await?;
        }
        Command::UploadImage { laptop_id, path } => {
            upload_image(&mut client, laptop_id, path).await?;
        }
        Command::Rate { laptop_id, scores } => {
            rate_laptop(&mut client, laptop_id, scores).await?;
        }
    }

    Ok(())
}

async fn create_laptop(
    client: &mut LaptopServiceClient<Channel>,
    laptop: Laptop,
) -> Result<(), tonic::Status> {
    let request = CreateLaptopRequest {
        laptop: Some(laptop.into()),
    };

    match client.create_laptop(request).await {
        Ok(response) => {
            tracing::info!(id = %response.into_inner().id, "created laptop");
            Ok(())
        }
        Err(status) if status.code() == tonic::Code::AlreadyExists => {
            tracing::info!("laptop already exists");
            Ok(())
        }
        Err(status) => Err(status),
    }
}

async fn search_laptop(
    client: &mut LaptopServiceClient<Channel>,
    filter: Filter,
) -> Result<(), tonic::Status> {
    tracing::info!(?filter, "search laptops");
    let request = SearchLaptopRequest {
        filter: Some(FilterMessage::from(filter)),
    };

    let mut stream = client.search_laptop(request).await?.into_inner();
    while let Some(response) = stream.message().await? {
        if let Some(laptop) = response.laptop.map(Laptop::from) {
            tracing::info!(
                id = %laptop.id,
                brand = %laptop.brand,
                name = %laptop.name,
                cores = laptop.cpu.number_cores,
                min_ghz = laptop.cpu.min_ghz,
                ram = ?laptop.ram,
                price_usd = laptop.price_usd,
                "found laptop"
            );
        }
    }

    Ok(())
}

async fn upload_image(
    client: &mut LaptopServiceClient<Channel>,
    laptop_id: String,
    path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(&path)?;
    let image_type = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    let mut messages = vec![UploadImageRequest {
        data: Some(UploadImageData::Info(ImageInfoMessage {
            laptop_id,
            image_type,
        })),
    }];
    messages.extend(data.chunks(CHUNK_SIZE).map(|chunk| UploadImageRequest {
        data: Some(UploadImageData::ChunkData(chunk.to_vec())),
    }));

    let response = client
        .upload_image(tokio_stream::iter(messages))
        .await?
        .into_inner();
    tracing::info!(id = %response.id, size = response.size, "uploaded image");
    Ok(())
}

async fn rate_laptop(
    client: &mut LaptopServiceClient<Channel>,
    laptop_id: String,
    scores: Vec<f64>,
) -> Result<(), tonic::Status> {
    let requests: Vec<_> = scores
        .into_iter()
        .map(|score| RateLaptopRequest {
            laptop_id: laptop_id.clone(),
            score,
        })
        .collect();

    let mut stream = client
        .rate_laptop(tokio_stream::iter(requests))
        .await?
        .into_inner();
    while let Some(response) = stream.message().await? {
        tracing::info!(
            laptop_id = %response.laptop_id,
            rated_count = response.rated_count,
            average_score = response.average_score,
            "received rating"
        );
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,laptop_catalog=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
