use super::*;
use crate::client::session::transport::Method;

/// Tests that prefix mutations adopt the backend's echoed list.
///
/// Verifies that adding then removing a prefix leaves the cached guild
/// store exactly equal to the backend's last returned list, with no
/// client-side merge logic.
#[tokio::test]
async fn add_then_remove_reflects_backend_list() {
    let session = logged_in_session(vec![
        json_response(200, r#"{"prefixes":["!","?"],"success":true}"#),
        json_response(200, r#"{"prefixes":["?"],"success":true}"#),
    ]);

    let added = session.add_prefix("g1", "!").await.unwrap();
    assert_eq!(added.prefixes, vec!["!".to_string(), "?".to_string()]);

    let removed = session.remove_prefix("g1", "!").await.unwrap();
    assert_eq!(removed.prefixes, vec!["?".to_string()]);

    // The cached store is the echoed list, served without further traffic.
    let store = session.ensure_guild_store("g1").await.unwrap();
    assert!(!store.prefixes.contains(&"!".to_string()));
    assert_eq!(store.prefixes, vec!["?".to_string()]);
    assert_eq!(session.transport().request_count(), 2);
}

/// Tests the wire shape of the prefix routes.
///
/// Expected: PUT and DELETE against /prefixes/{guild_id} with a
/// `{ "prefix": ... }` body
#[tokio::test]
async fn sends_put_and_delete_with_prefix_payload() {
    let session = logged_in_session(vec![
        json_response(200, r#"{"prefixes":["!"],"success":true}"#),
        json_response(200, r#"{"prefixes":[],"success":true}"#),
    ]);

    session.add_prefix("g1", "!").await.unwrap();
    session.remove_prefix("g1", "!").await.unwrap();

    let put = session.transport().request(0);
    assert_eq!(put.method, Method::Put);
    assert!(put.url.contains("/prefixes/g1"));
    assert_eq!(put.body.as_deref(), Some(r#"{"prefix":"!"}"#));

    let delete = session.transport().request(1);
    assert_eq!(delete.method, Method::Delete);
    assert_eq!(delete.body.as_deref(), Some(r#"{"prefix":"!"}"#));
}
