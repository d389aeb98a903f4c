//! Browser wiring for the session: a `fetch`-backed transport, cookie
//! persistence, and construction from the current location.

use std::rc::Rc;

use dioxus::prelude::*;
use reqwasm::http::Request;

use crate::client::storage::CookieStore;

use super::gateway::query_param;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use super::{Session, SessionConfig};

pub type WebSession = Session<WebTransport, CookieStore>;

pub struct WebTransport;

impl Transport for WebTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
            Method::Patch => Request::new(&request.url).method(reqwasm::http::Method::PATCH),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|err| err.to_string())?;
        let status = response.status();
        let content_type = response.headers().get("content-type");
        let text = response.text().await.map_err(|err| err.to_string())?;

        Ok(HttpResponse {
            status,
            content_type,
            text,
        })
    }
}

/// The current location's query string, including the leading `?`.
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Builds the session from the current browser location: picks up the
/// OAuth `code` parameter on callback loads, and echoes the local
/// redirect URI during development so the exchange matches the one the
/// code was issued for.
pub fn session_from_location() -> WebSession {
    let auth_code = query_param(&location_search(), "code");

    let redirect_uri = web_sys::window().map(|window| window.location()).and_then(|location| {
        let hostname = location.hostname().unwrap_or_default();
        if hostname != "localhost" && hostname != "127.0.0.1" {
            return None;
        }
        let origin = location.origin().unwrap_or_default();
        let pathname = location.pathname().unwrap_or_default();
        Some(format!("{}{}", origin, pathname))
    });

    Session::new(
        WebTransport,
        CookieStore,
        SessionConfig {
            auth_code,
            redirect_uri,
            ..Default::default()
        },
    )
}

/// Provides the shared session at the top of the component tree.
pub fn provide_session() -> Rc<WebSession> {
    use_context_provider(|| Rc::new(session_from_location()))
}

/// The shared session provided by [`provide_session`].
pub fn use_session() -> Rc<WebSession> {
    use_context()
}
