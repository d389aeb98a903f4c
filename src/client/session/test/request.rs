use serde_json::json;

use super::*;
use crate::client::session::gateway::RequestOptions;
use crate::client::session::transport::Method;

/// Tests JSON payload handling.
///
/// Verifies that a JSON payload is serialized into the body with an
/// automatic `Content-Type: application/json`, that the session token
/// rides in the `Authorization` header, that the route is normalized to
/// a leading slash and that an empty parameter set adds no query string.
#[tokio::test]
async fn serializes_json_payload_with_content_type() {
    let session = logged_in_session(vec![json_response(200, "{}")]);

    session
        .request(
            Method::Post,
            "route-x",
            RequestOptions {
                json: Some(json!({ "a": 1 })),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let sent = session.transport().request(0);
    assert_eq!(sent.body.as_deref(), Some(r#"{"a":1}"#));
    assert_eq!(sent.header("content-type"), Some("application/json"));
    assert_eq!(sent.header("authorization"), Some("S1"));
    assert!(sent.url.ends_with("/route-x"));
}

/// Tests that a caller-supplied content type wins over the automatic one.
#[tokio::test]
async fn keeps_caller_supplied_content_type() {
    let session = logged_in_session(vec![json_response(200, "{}")]);

    session
        .request(
            Method::Post,
            "/route-x",
            RequestOptions {
                json: Some(json!({ "a": 1 })),
                headers: vec![("Content-Type".to_string(), "text/plain".to_string())],
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let sent = session.transport().request(0);
    assert_eq!(sent.header("content-type"), Some("text/plain"));
}

/// Tests the reauthentication protocol.
///
/// Verifies that a 401 carrying `force_reauth: true` refreshes the user
/// profile, forces a fresh session token and retries the request exactly
/// once with the new token.
///
/// Expected: Ok after four requests (fail, profile, token, retry)
#[tokio::test]
async fn retries_once_with_forced_token_on_force_reauth() {
    let session = logged_in_session(vec![
        json_response(401, r#"{"force_reauth":true}"#),
        json_response(200, USER_JSON),
        json_response(200, r#"{"token":"S2"}"#),
        json_response(200, r#"{"ok":true}"#),
    ]);

    let response = session
        .request(Method::Get, "/data/g1", RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    let transport = session.transport();
    assert_eq!(transport.request_count(), 4);
    assert_eq!(transport.request(0).header("authorization"), Some("S1"));
    assert!(transport.request(1).url.contains("/users/@me"));
    assert!(transport.request(2).url.contains("/auth/123"));
    assert_eq!(transport.request(3).header("authorization"), Some("S2"));
    // The refreshed profile was rewritten into its cookie cache.
    assert_eq!(session.store().ttl_days("user_data"), Some(Some(1.0)));
}

/// Tests the retry bound.
///
/// Verifies that a second consecutive `force_reauth` failure propagates
/// as an error rather than looping.
///
/// Expected: Err(Status 401) after exactly four requests
#[tokio::test]
async fn propagates_second_consecutive_reauth_failure() {
    let session = logged_in_session(vec![
        json_response(401, r#"{"force_reauth":true}"#),
        json_response(200, USER_JSON),
        json_response(200, r#"{"token":"S2"}"#),
        json_response(401, r#"{"force_reauth":true}"#),
    ]);

    let error = session
        .request(Method::Get, "/data/g1", RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(401));
    assert_eq!(session.transport().request_count(), 4);
}

/// Tests that unauthenticated requests neither attach a session token nor
/// trigger token issuance.
#[tokio::test]
async fn unauthenticated_requests_attach_no_token() {
    let session = session(vec![json_response(200, "{}")]);

    session
        .request(
            Method::Get,
            "/commands",
            RequestOptions {
                authenticate: false,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let sent = session.transport().request(0);
    assert_eq!(sent.header("authorization"), None);
    assert_eq!(session.transport().request_count(), 1);
}

/// Tests structured status errors.
///
/// Verifies that other non-2xx responses surface route, status and parsed
/// body, and that the display string prefers the backend's error
/// envelope.
#[tokio::test]
async fn surfaces_status_errors_with_parsed_body() {
    let session = logged_in_session(vec![json_response(404, r#"{"error":"Not found"}"#)]);

    let error = session
        .request(Method::Get, "/data/g1", RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(404));
    assert_eq!(error.message(), "Not found");
}
