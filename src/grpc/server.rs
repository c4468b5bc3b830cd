//! LaptopServer - maps gRPC calls onto the laptop, image and rating stores.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::metadata::MetadataMap;
use tonic::{Request, Response, Status, Streaming};
use uuid::Uuid;

use super::messages::{
    CreateLaptopRequest, CreateLaptopResponse, FindLaptopRequest, FindLaptopResponse,
    RateLaptopRequest, RateLaptopResponse, SearchLaptopRequest, SearchLaptopResponse,
    UploadImageData, UploadImageRequest, UploadImageResponse,
};
use super::{LaptopService, LaptopServiceServer};
use crate::context::{Context, ContextError};
use crate::filter::Filter;
use crate::image::{ImageError, ImageStore, MAX_IMAGE_SIZE};
use crate::laptop::Laptop;
use crate::rating::{RatingError, RatingStore};
use crate::store::{LaptopStore, StoreError};

/// Matches buffered between the store scan and the response stream.
const SEARCH_BUFFER: usize = 16;

const RATING_BUFFER: usize = 16;

impl From<StoreError> for Status {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists(_) => {
                Status::already_exists(format!("cannot save laptop to the store: {}", err))
            }
            _ => Status::internal(err.to_string()),
        }
    }
}

impl From<ImageError> for Status {
    fn from(err: ImageError) -> Self {
        Status::internal(format!("cannot save image to the store: {}", err))
    }
}

impl From<RatingError> for Status {
    fn from(err: RatingError) -> Self {
        Status::internal(format!("cannot save rating to the store: {}", err))
    }
}

/// gRPC handler that wraps the shared stores and implements the generated
/// `LaptopService` trait.
pub struct LaptopServer<S, I, R> {
    laptop_store: Arc<S>,
    image_store: Arc<I>,
    rating_store: Arc<R>,
}

impl<S, I, R> LaptopServer<S, I, R> {
    pub fn new(laptop_store: Arc<S>, image_store: Arc<I>, rating_store: Arc<R>) -> Self {
        Self {
            laptop_store,
            image_store,
            rating_store,
        }
    }
}

#[tonic::async_trait]
impl<S, I, R> LaptopService for LaptopServer<S, I, R>
where
    S: LaptopStore + 'static,
    I: ImageStore + 'static,
    R: RatingStore + 'static,
{
    async fn create_laptop(
        &self,
        request: Request<CreateLaptopRequest>,
    ) -> Result<Response<CreateLaptopResponse>, Status> {
        let ctx = request_context(request.metadata());
        let mut laptop: Laptop = request
            .into_inner()
            .laptop
            .ok_or_else(|| Status::invalid_argument("laptop is required"))?
            .into();
        tracing::info!(id = %laptop.id, "receive a create-laptop request");

        if laptop.id.is_empty() {
            laptop.id = Uuid::new_v4().to_string();
        } else {
            Uuid::parse_str(&laptop.id).map_err(|e| {
                Status::invalid_argument(format!("laptop ID is not a valid UUID: {}", e))
            })?;
        }

        context_error(&ctx)?;

        // Saves wait behind any running search, so keep them off the runtime.
        let store = Arc::clone(&self.laptop_store);
        let id = laptop.id.clone();
        tokio::task::spawn_blocking(move || store.save(&laptop))
            .await
            .map_err(|e| Status::internal(format!("save task failed: {}", e)))?
            .map_err(|e| {
                tracing::warn!(%id, error = %e, "cannot save laptop");
                Status::from(e)
            })?;

        tracing::info!(%id, "saved laptop");
        Ok(Response::new(CreateLaptopResponse { id }))
    }

    async fn find_laptop(
        &self,
        request: Request<FindLaptopRequest>,
    ) -> Result<Response<FindLaptopResponse>, Status> {
        let id = request.into_inner().id;
        tracing::info!(%id, "receive a find-laptop request");

        match find_off_runtime(&self.laptop_store, id.clone()).await? {
            Some(laptop) => Ok(Response::new(FindLaptopResponse {
                laptop: Some(laptop.into()),
            })),
            None => Err(Status::not_found(format!("laptop {} not found", id))),
        }
    }

    type SearchLaptopStream = ReceiverStream<Result<SearchLaptopResponse, Status>>;

    async fn search_laptop(
        &self,
        request: Request<SearchLaptopRequest>,
    ) -> Result<Response<Self::SearchLaptopStream>, Status> {
        let ctx = request_context(request.metadata());
        let filter = request
            .into_inner()
            .filter
            .map(Filter::from)
            .unwrap_or_default();
        tracing::info!(?filter, "receive a search-laptop request");

        let (tx, rx) = mpsc::channel(SEARCH_BUFFER);

        // Stop scanning once nobody is reading the stream.
        let watcher = {
            let tx = tx.clone();
            let ctx = ctx.clone();
            tokio::spawn(async move {
                tx.closed().await;
                ctx.cancel();
            })
        };

        let store = Arc::clone(&self.laptop_store);
        tokio::task::spawn_blocking(move || {
            let result = store.search(&ctx, &filter, |laptop: Laptop| {
                tracing::debug!(id = %laptop.id, "found laptop");
                let response = SearchLaptopResponse {
                    laptop: Some(laptop.into()),
                };
                tx.blocking_send(Ok(response))
                    .map_err(|_| Status::cancelled("client stopped receiving"))
            });
            watcher.abort();

            if let Err(status) = result {
                tracing::warn!(%status, "laptop search aborted");
                let _ = tx.blocking_send(Err(status));
            }
        });

        Ok(Response::new(ReceiverStream::new(rx)))
    }

    async fn upload_image(
        &self,
        request: Request<Streaming<UploadImageRequest>>,
    ) -> Result<Response<UploadImageResponse>, Status> {
        let ctx = request_context(request.metadata());
        let mut stream = request.into_inner();

        let info = match stream.message().await? {
            Some(UploadImageRequest {
                data: Some(UploadImageData::Info(info)),
            }) => info,
            _ => return Err(Status::invalid_argument("first message must carry image info")),
        };
        tracing::info!(
            laptop_id = %info.laptop_id,
            image_type = %info.image_type,
            "receive an upload-image request"
        );

        if find_off_runtime(&self.laptop_store, info.laptop_id.clone())
            .await?
            .is_none()
        {
            return Err(Status::not_found(format!(
                "laptop {} doesn't exist",
                info.laptop_id
            )));
        }

        let mut image_data = Vec::new();
        loop {
            context_error(&ctx)?;

            let chunk = match stream.message().await? {
                Some(UploadImageRequest {
                    data: Some(UploadImageData::ChunkData(chunk)),
                }) => chunk,
                Some(_) => return Err(Status::invalid_argument("expected image chunk data")),
                None => {
                    tracing::debug!("no more image data");
                    break;
                }
            };

            let size = image_data.len() + chunk.len();
            if size > MAX_IMAGE_SIZE {
                return Err(Status::invalid_argument(format!(
                    "image is too large: {} > {}",
                    size, MAX_IMAGE_SIZE
                )));
            }
            image_data.extend_from_slice(&chunk);
        }

        let size = image_data.len();
        let store = Arc::clone(&self.image_store);
        let laptop_id = info.laptop_id;
        let image_type = info.image_type;
        let image_id = tokio::task::spawn_blocking(move || {
            store.save(&laptop_id, &image_type, &image_data)
        })
        .await
        .map_err(|e| Status::internal(format!("image task failed: {}", e)))??;

        tracing::info!(%image_id, size, "saved image");
        Ok(Response::new(UploadImageResponse {
            id: image_id,
            size: size as u32,
        }))
    }

    type RateLaptopStream = ReceiverStream<Result<RateLaptopResponse, Status>>;

    async fn rate_laptop(
        &self,
        request: Request<Streaming<RateLaptopRequest>>,
    ) -> Result<Response<Self::RateLaptopStream>, Status> {
        let mut stream = request.into_inner();
        let (tx, rx) = mpsc::channel(RATING_BUFFER);
        let laptop_store = Arc::clone(&self.laptop_store);
        let rating_store = Arc::clone(&self.rating_store);

        tokio::spawn(async move {
            loop {
                let request = match stream.message().await {
                    Ok(Some(request)) => request,
                    Ok(None) => {
                        tracing::debug!("no more ratings");
                        break;
                    }
                    Err(status) => {
                        tracing::warn!(%status, "cannot receive rating");
                        break;
                    }
                };

                let result = rate_one(&laptop_store, rating_store.as_ref(), request).await;
                let failed = result.is_err();
                if tx.send(result).await.is_err() || failed {
                    break;
                }
            }
        });

        Ok(Response::new(ReceiverStream::new(rx)))
    }
}

/// Store reads can queue behind a waiting writer, so they run off the runtime.
async fn find_off_runtime<S: LaptopStore + 'static>(
    store: &Arc<S>,
    id: String,
) -> Result<Option<Laptop>, Status> {
    let store = Arc::clone(store);
    tokio::task::spawn_blocking(move || store.find(&id))
        .await
        .map_err(|e| Status::internal(format!("find task failed: {}", e)))?
        .map_err(Status::from)
}

async fn rate_one<S: LaptopStore + 'static, R: RatingStore>(
    laptop_store: &Arc<S>,
    rating_store: &R,
    request: RateLaptopRequest,
) -> Result<RateLaptopResponse, Status> {
    let laptop_id = request.laptop_id;
    tracing::info!(%laptop_id, score = request.score, "receive a rate-laptop request");

    if find_off_runtime(laptop_store, laptop_id.clone())
        .await?
        .is_none()
    {
        return Err(Status::not_found(format!(
            "laptop {} doesn't exist",
            laptop_id
        )));
    }

    let rating = rating_store.add(&laptop_id, request.score)?;

    Ok(RateLaptopResponse {
        laptop_id,
        rated_count: rating.count,
        average_score: rating.average(),
    })
}

/// Build the context of a request from its `grpc-timeout` header.
pub(crate) fn request_context(metadata: &MetadataMap) -> Context {
    metadata
        .get("grpc-timeout")
        .and_then(|value| value.to_str().ok())
        .and_then(parse_grpc_timeout)
        .map(Context::with_timeout)
        .unwrap_or_else(Context::background)
}

/// Parse a `grpc-timeout` value: up to 8 digits followed by a unit letter.
fn parse_grpc_timeout(value: &str) -> Option<Duration> {
    if value.len() < 2 || value.len() > 9 {
        return None;
    }

    let (digits, unit) = value.split_at(value.len() - 1);
    let amount: u64 = digits.parse().ok()?;

    match unit {
        "H" => Some(Duration::from_secs(amount * 60 * 60)),
        "M" => Some(Duration::from_secs(amount * 60)),
        "S" => Some(Duration::from_secs(amount)),
        "m" => Some(Duration::from_millis(amount)),
        "u" => Some(Duration::from_micros(amount)),
        "n" => Some(Duration::from_nanos(amount)),
        _ => None,
    }
}

fn context_error(ctx: &Context) -> Result<(), Status> {
    match ctx.err() {
        Some(ContextError::Canceled) => {
            tracing::info!("request is canceled");
            Err(Status::cancelled("request is canceled"))
        }
        Some(ContextError::DeadlineExceeded) => {
            tracing::info!("deadline is exceeded");
            Err(Status::deadline_exceeded("deadline is exceeded"))
        }
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Create a `LaptopServiceServer` from the shared stores.
pub fn laptop_server<S, I, R>(
    laptop_store: Arc<S>,
    image_store: Arc<I>,
    rating_store: Arc<R>,
) -> LaptopServiceServer<LaptopServer<S, I, R>>
where
    S: LaptopStore + 'static,
    I: ImageStore + 'static,
    R: RatingStore + 'static,
{
    LaptopServiceServer::new(LaptopServer::new(laptop_store, image_store, rating_store))
}

/// Bind and serve the gRPC transport at the given address.
pub async fn serve_grpc<S, I, R>(
    laptop_store: Arc<S>,
    image_store: Arc<I>,
    rating_store: Arc<R>,
    addr: SocketAddr,
) -> Result<(), tonic::transport::Error>
where
    S: LaptopStore + 'static,
    I: ImageStore + 'static,
    R: RatingStore + 'static,
{
    tracing::info!(%addr, "start laptop server");
    tonic::transport::Server::builder()
        .add_service(laptop_server(laptop_store, image_store, rating_store))
        .serve(addr)
        .await
}
