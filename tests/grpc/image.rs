use std::sync::Arc;

use laptop_catalog::grpc::{ImageInfoMessage, UploadImageData, UploadImageRequest};
use laptop_catalog::{
    sample, DiskImageStore, ImageStore, InMemoryLaptopStore, InMemoryRatingStore, LaptopStore,
    MAX_IMAGE_SIZE,
};
use tonic::Code;

use crate::support::start_server_with;

fn info(laptop_id: &str) -> UploadImageRequest {
    UploadImageRequest {
        data: Some(UploadImageData::Info(ImageInfoMessage {
            laptop_id: laptop_id.into(),
            image_type: ".jpg".into(),
        })),
    }
}

fn chunk(data: &[u8]) -> UploadImageRequest {
    UploadImageRequest {
        data: Some(UploadImageData::ChunkData(data.to_vec())),
    }
}

fn stored_laptop() -> (Arc<InMemoryLaptopStore>, String) {
    let store = Arc::new(InMemoryLaptopStore::new());
    let laptop = sample::new_laptop();
    store.save(&laptop).unwrap();
    (store, laptop.id)
}

#[tokio::test]
async fn upload_writes_image_file() {
    let dir = tempfile::tempdir().unwrap();
    let (laptops, laptop_id) = stored_laptop();
    let images = Arc::new(DiskImageStore::new(dir.path()));
    let mut client =
        start_server_with(laptops, images.clone(), Arc::new(InMemoryRatingStore::new())).await;

    let data: Vec<u8> = (0..3000u32).map(|i| (i % 251) as u8).collect();
    let mut messages = vec![info(&laptop_id)];
    messages.extend(data.chunks(1024).map(chunk));

    let resp = client
        .upload_image(tokio_stream::iter(messages))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.size, 3000);
    let stored = images.find(&resp.id).unwrap().unwrap();
    assert_eq!(stored.laptop_id, laptop_id);
    assert_eq!(stored.path, dir.path().join(format!("{}.jpg", resp.id)));
    assert_eq!(std::fs::read(&stored.path).unwrap(), data);
}

#[tokio::test]
async fn upload_for_unknown_laptop() {
    let dir = tempfile::tempdir().unwrap();
    let mut client = start_server_with(
        Arc::new(InMemoryLaptopStore::new()),
        Arc::new(DiskImageStore::new(dir.path())),
        Arc::new(InMemoryRatingStore::new()),
    )
    .await;

    let status = client
        .upload_image(tokio_stream::iter(vec![info("missing"), chunk(b"data")]))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn upload_larger_than_limit_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (laptops, laptop_id) = stored_laptop();
    let images = Arc::new(DiskImageStore::new(dir.path()));
    let mut client =
        start_server_with(laptops, images, Arc::new(InMemoryRatingStore::new())).await;

    let block = vec![7u8; 64 * 1024];
    let mut messages = vec![info(&laptop_id)];
    for _ in 0..(MAX_IMAGE_SIZE / block.len()) {
        messages.push(chunk(&block));
    }
    messages.push(chunk(b"x"));

    let status = client
        .upload_image(tokio_stream::iter(messages))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[tokio::test]
async fn upload_of_exactly_the_limit_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let (laptops, laptop_id) = stored_laptop();
    let mut client = start_server_with(
        laptops,
        Arc::new(DiskImageStore::new(dir.path())),
        Arc::new(InMemoryRatingStore::new()),
    )
    .await;

    let block = vec![1u8; 64 * 1024];
    let mut messages = vec![info(&laptop_id)];
    for _ in 0..(MAX_IMAGE_SIZE / block.len()) {
        messages.push(chunk(&block));
    }

    let resp = client
        .upload_image(tokio_stream::iter(messages))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.size as usize, MAX_IMAGE_SIZE);
}

#[tokio::test]
async fn upload_must_start_with_info() {
    let dir = tempfile::tempdir().unwrap();
    let (laptops, _) = stored_laptop();
    let mut client = start_server_with(
        laptops,
        Arc::new(DiskImageStore::new(dir.path())),
        Arc::new(InMemoryRatingStore::new()),
    )
    .await;

    let status = client
        .upload_image(tokio_stream::iter(vec![chunk(b"data")]))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
}
