//! A store whose copies always fail, to check how copy errors reach clients.

use std::sync::Arc;

use laptop_catalog::grpc::{CreateLaptopRequest, FindLaptopRequest, SearchLaptopRequest};
use laptop_catalog::{sample, Context, Filter, Laptop, LaptopStore, StoreError};
use tonic::Code;

use crate::support::start_server;

struct UncopyableStore;

fn copy_failed() -> StoreError {
    StoreError::CopyFailed("cannot encode laptop".into())
}

impl LaptopStore for UncopyableStore {
    fn save(&self, _laptop: &Laptop) -> Result<(), StoreError> {
        Err(copy_failed())
    }

    fn find(&self, _id: &str) -> Result<Option<Laptop>, StoreError> {
        Err(copy_failed())
    }

    fn search<E, F>(&self, _ctx: &Context, _filter: &Filter, _found: F) -> Result<(), E>
    where
        E: From<StoreError>,
        F: FnMut(Laptop) -> Result<(), E>,
    {
        Err(copy_failed().into())
    }
}

#[tokio::test]
async fn create_reports_internal() {
    let mut client = start_server(Arc::new(UncopyableStore)).await;

    let status = client
        .create_laptop(CreateLaptopRequest {
            laptop: Some(sample::new_laptop().into()),
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
    assert!(status.message().contains("cannot encode laptop"));
}

#[tokio::test]
async fn find_reports_internal() {
    let mut client = start_server(Arc::new(UncopyableStore)).await;

    let status = client
        .find_laptop(FindLaptopRequest { id: "any".into() })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
}

#[tokio::test]
async fn search_ends_with_internal() {
    let mut client = start_server(Arc::new(UncopyableStore)).await;

    let mut stream = client
        .search_laptop(SearchLaptopRequest { filter: None })
        .await
        .unwrap()
        .into_inner();

    let status = stream.message().await.unwrap_err();
    assert_eq!(status.code(), Code::Internal);
}
