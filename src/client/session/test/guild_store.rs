use std::rc::Rc;

use super::*;

/// Tests guild-store caching.
///
/// Verifies that the store is fetched once per guild and that the cache
/// returns the identical object on subsequent calls with no further
/// network traffic.
#[tokio::test]
async fn returns_identical_cached_store_without_refetch() {
    let session = logged_in_session(vec![json_response(200, r#"{"prefixes":["!"]}"#)]);

    let first = session.ensure_guild_store("g1").await.unwrap();
    let second = session.ensure_guild_store("g1").await.unwrap();

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(first.prefixes, vec!["!".to_string()]);
    assert_eq!(session.transport().request_count(), 1);
}

/// Tests that stores are keyed by guild id.
#[tokio::test]
async fn fetches_each_guild_separately() {
    let session = logged_in_session(vec![
        json_response(200, r#"{"prefixes":["!"]}"#),
        json_response(200, r#"{"prefixes":["?"]}"#),
    ]);

    let g1 = session.ensure_guild_store("g1").await.unwrap();
    let g2 = session.ensure_guild_store("g2").await.unwrap();

    assert_eq!(g1.prefixes, vec!["!".to_string()]);
    assert_eq!(g2.prefixes, vec!["?".to_string()]);
    assert!(session.transport().request(0).url.contains("/data/g1"));
    assert!(session.transport().request(1).url.contains("/data/g2"));
}
