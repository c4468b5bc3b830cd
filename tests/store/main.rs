//! Laptop store integration tests.

mod support;
mod save_find;
mod concurrency;
