use std::sync::Arc;

use laptop_catalog::grpc::{CreateLaptopRequest, LaptopMessage};
use laptop_catalog::{sample, InMemoryLaptopStore, LaptopStore};
use tonic::Code;
use uuid::Uuid;

use crate::support::start_server;

#[tokio::test]
async fn create_with_id() {
    let store = Arc::new(InMemoryLaptopStore::new());
    let mut client = start_server(store.clone()).await;
    let laptop = sample::new_laptop();

    let resp = client
        .create_laptop(CreateLaptopRequest {
            laptop: Some(laptop.clone().into()),
        })
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.id, laptop.id);
    let stored = store.find(&laptop.id).unwrap().unwrap();
    assert_eq!(stored, laptop);
}

#[tokio::test]
async fn create_without_id_assigns_uuid() {
    let store = Arc::new(InMemoryLaptopStore::new());
    let mut client = start_server(store.clone()).await;
    let mut laptop = sample::new_laptop();
    laptop.id.clear();

    let resp = client
        .create_laptop(CreateLaptopRequest {
            laptop: Some(laptop.into()),
        })
        .await
        .unwrap()
        .into_inner();

    assert!(Uuid::parse_str(&resp.id).is_ok());
    assert!(store.find(&resp.id).unwrap().is_some());
}

#[tokio::test]
async fn create_with_invalid_id() {
    let store = Arc::new(InMemoryLaptopStore::new());
    let mut client = start_server(store.clone()).await;
    let mut laptop = sample::new_laptop();
    laptop.id = "not-a-uuid".into();

    let status = client
        .create_laptop(CreateLaptopRequest {
            laptop: Some(laptop.into()),
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn create_duplicate_id() {
    let store = Arc::new(InMemoryLaptopStore::new());
    let mut client = start_server(store.clone()).await;
    let laptop = sample::new_laptop();

    client
        .create_laptop(CreateLaptopRequest {
            laptop: Some(laptop.clone().into()),
        })
        .await
        .unwrap();

    let status = client
        .create_laptop(CreateLaptopRequest {
            laptop: Some(LaptopMessage::from(laptop)),
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::AlreadyExists);
    assert_eq!(store.len().unwrap(), 1);
}

#[tokio::test]
async fn create_without_laptop() {
    let store = Arc::new(InMemoryLaptopStore::new());
    let mut client = start_server(store).await;

    let status = client
        .create_laptop(CreateLaptopRequest { laptop: None })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
}
