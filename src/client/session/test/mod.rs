//! Native tests for the session manager and request gateway, driven by a
//! scripted transport and the in-memory store.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::client::session::transport::{HttpRequest, HttpResponse, Transport};
use crate::client::session::{Session, SessionConfig};
use crate::client::storage::{KeyValueStore, MemoryStore};

mod ensure_session_token;
mod guild_store;
mod prefixes;
mod request;

pub const USER_JSON: &str =
    r#"{"id":"123","username":"tester","discriminator":"0001","bot":false,"public_flags":0}"#;

/// Transport that replays scripted responses and records every request.
pub struct MockTransport {
    responses: RefCell<VecDeque<HttpResponse>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new(responses: Vec<HttpResponse>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn request(&self, index: usize) -> HttpRequest {
        self.requests.borrow()[index].clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| "no scripted response left".to_string())
    }
}

pub fn json_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        content_type: Some("application/json".to_string()),
        text: body.to_string(),
    }
}

pub type TestSession = Session<MockTransport, MemoryStore>;

pub fn session(responses: Vec<HttpResponse>) -> TestSession {
    Session::new(
        MockTransport::new(responses),
        MemoryStore::new(),
        SessionConfig::default(),
    )
}

pub fn session_with_code(responses: Vec<HttpResponse>, code: &str) -> TestSession {
    Session::new(
        MockTransport::new(responses),
        MemoryStore::new(),
        SessionConfig {
            auth_code: Some(code.to_string()),
            ..Default::default()
        },
    )
}

/// Session whose store already carries the full cookie set of a previous
/// login: OAuth token pair, cached profile and session token.
pub fn logged_in_session(responses: Vec<HttpResponse>) -> TestSession {
    let store = MemoryStore::new();
    store.set("access_token", "oauth-token", Some(7.0));
    store.set("token_type", "Bearer", Some(7.0));
    store.set("user_data", USER_JSON, Some(1.0));
    store.set("token", "S1", None);
    Session::new(
        MockTransport::new(responses),
        store,
        SessionConfig::default(),
    )
}
