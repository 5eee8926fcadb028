use shortly::domain::repositories::UrlStore;
use shortly::infrastructure::storage::MemoryStore;
use shortly::utils::code_generator::generate_code;
use std::collections::HashMap;
use std::sync::Arc;

#[tokio::test]
async fn test_many_generated_codes_round_trip() {
    let store = MemoryStore::new();
    let mut expected = HashMap::new();

    for i in 0..10_000 {
        let code = generate_code();
        let url = format!("https://example.com/{}", i);
        store.store_url(&code, &url).await.unwrap();
        expected.insert(code, url);
    }

    assert_eq!(store.len(), expected.len());

    for (code, url) in &expected {
        assert_eq!(store.get_url(code).await.unwrap().as_ref(), Some(url));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writers_and_readers() {
    let store = Arc::new(MemoryStore::new());
    let mut handles = Vec::new();

    for task in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..200 {
                let code = format!("t{}i{}", task, i);
                let url = format!("https://example.com/{}/{}", task, i);
                store.store_url(&code, &url).await.unwrap();

                let read = store.get_url(&code).await.unwrap();
                assert_eq!(read.as_deref(), Some(url.as_str()));
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.len(), 16 * 200);
    assert_eq!(
        store.get_url("t7i199").await.unwrap().as_deref(),
        Some("https://example.com/7/199")
    );
}

#[tokio::test]
async fn test_purge_keeps_live_entries() {
    let live = MemoryStore::with_ttl(chrono::Duration::hours(1));
    live.store_url("fresh001", "https://example.com")
        .await
        .unwrap();

    assert_eq!(live.purge_expired(), 0);
    assert_eq!(live.len(), 1);

    let stale = MemoryStore::with_ttl(chrono::Duration::seconds(-1));
    stale
        .store_url("stale001", "https://example.com")
        .await
        .unwrap();
    stale
        .store_url("stale002", "https://example.com")
        .await
        .unwrap();

    assert_eq!(stale.purge_expired(), 2);
    assert!(stale.is_empty());
}
