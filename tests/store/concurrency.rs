use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use laptop_catalog::{Context, Filter, InMemoryLaptopStore, Laptop, LaptopStore, StoreError};

use crate::support::{gb, laptop};

#[test]
fn concurrent_saves_with_distinct_ids_all_land() {
    const WRITERS: usize = 32;
    let store = InMemoryLaptopStore::new();
    let barrier = Arc::new(Barrier::new(WRITERS));

    let handles: Vec<_> = (0..WRITERS)
        .map(|i| {
            let store = store.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.save(&laptop(&format!("laptop-{}", i), 1000.0, 4, 2.5, gb(8)))
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(store.len().unwrap(), WRITERS);
    for i in 0..WRITERS {
        assert!(store.find(&format!("laptop-{}", i)).unwrap().is_some());
    }
}

#[test]
fn concurrent_saves_of_one_id_have_exactly_one_winner() {
    const WRITERS: usize = 16;
    let store = InMemoryLaptopStore::new();
    let barrier = Arc::new(Barrier::new(WRITERS));

    let handles: Vec<_> = (0..WRITERS)
        .map(|i| {
            let store = store.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.save(&laptop("contested", 1000.0 + i as f64, 4, 2.5, gb(8)))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = results.iter().filter(|r| r.is_ok()).count();
    let losers = results
        .iter()
        .filter(|r| matches!(r, Err(StoreError::AlreadyExists(_))))
        .count();

    assert_eq!(winners, 1);
    assert_eq!(losers, WRITERS - 1);
}

#[test]
fn search_holds_off_writers_until_it_returns() {
    let store = InMemoryLaptopStore::new();
    store.save(&laptop("existing", 1000.0, 4, 2.5, gb(8))).unwrap();

    let saved = Arc::new(AtomicBool::new(false));
    let mut writer = None;

    store
        .search(&Context::background(), &Filter::any(), |_laptop: Laptop| {
            let writer_store = store.clone();
            let writer_saved = Arc::clone(&saved);
            writer = Some(thread::spawn(move || {
                writer_store
                    .save(&laptop("late", 1000.0, 4, 2.5, gb(8)))
                    .unwrap();
                writer_saved.store(true, Ordering::SeqCst);
            }));

            thread::sleep(Duration::from_millis(100));
            assert!(!saved.load(Ordering::SeqCst));
            Ok::<(), StoreError>(())
        })
        .unwrap();

    writer.take().unwrap().join().unwrap();
    assert!(saved.load(Ordering::SeqCst));
    assert!(store.find("late").unwrap().is_some());
}

#[test]
fn readers_run_side_by_side() {
    let store = InMemoryLaptopStore::new();
    for i in 0..50 {
        store
            .save(&laptop(&format!("l{}", i), 1000.0, 4, 2.5, gb(8)))
            .unwrap();
    }

    let visited = Arc::new(AtomicUsize::new(0));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            let visited = Arc::clone(&visited);
            thread::spawn(move || {
                store.search(&Context::background(), &Filter::any(), |_laptop: Laptop| {
                    visited.fetch_add(1, Ordering::SeqCst);
                    Ok::<(), StoreError>(())
                })
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(visited.load(Ordering::SeqCst), 200);
}
