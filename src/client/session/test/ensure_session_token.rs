use super::*;

/// Tests adoption of a cookie-cached session token.
///
/// Expected: the cached token, zero network traffic
#[tokio::test]
async fn returns_cached_token_without_network() {
    let session = logged_in_session(vec![]);

    assert_eq!(session.ensure_session_token(false).await.unwrap(), "S1");
    assert_eq!(session.transport().request_count(), 0);
}

/// Tests session token issuance.
///
/// Verifies that with no cached session token one is requested through
/// `/auth/{user_id}` authenticated by the OAuth token pair, and persisted
/// without a client-side expiry.
#[tokio::test]
async fn issues_token_through_auth_route() {
    let store = MemoryStore::new();
    store.set("access_token", "oauth-token", Some(7.0));
    store.set("token_type", "Bearer", Some(7.0));
    store.set("user_data", USER_JSON, Some(1.0));
    let session = Session::new(
        MockTransport::new(vec![json_response(200, r#"{"token":"S1"}"#)]),
        store,
        SessionConfig::default(),
    );

    let token = session.ensure_session_token(false).await.unwrap();

    assert_eq!(token, "S1");
    let issue = session.transport().request(0);
    assert!(issue.url.contains("/auth/123?token=oauth-token&tt=Bearer"));
    assert_eq!(session.store().get("token").as_deref(), Some("S1"));
    assert_eq!(session.store().ttl_days("token"), Some(None));
}

/// Tests the forced reissue path used by the reauthentication protocol.
///
/// Expected: the cached token is bypassed and the fresh one persisted
#[tokio::test]
async fn force_reissues_over_cached_token() {
    let session = logged_in_session(vec![json_response(200, r#"{"token":"S2"}"#)]);

    assert_eq!(session.ensure_session_token(true).await.unwrap(), "S2");
    assert_eq!(session.store().get("token").as_deref(), Some("S2"));
}

/// Tests the ordering invariant: a session token is never requested
/// before an OAuth access token is known.
///
/// Expected: Err with zero network traffic
#[tokio::test]
async fn fails_when_logged_out() {
    let session = session(vec![]);

    assert!(session.ensure_session_token(false).await.is_err());
    assert_eq!(session.transport().request_count(), 0);
}
