//! The HTTP request gateway.
//!
//! One generic request operation with composed headers, query string and
//! body, typed response decoding, and the single bounded retry needed to
//! recover from an expired session token. Every completed request is
//! logged with its route, status and body text; failures at error level,
//! successes at debug level.

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::client::model::error::ApiError;
use crate::client::storage::KeyValueStore;

use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use super::Session;

pub struct RequestOptions {
    /// Raw request body; overwritten when `json` is set.
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
    /// JSON payload, serialized into the body with a
    /// `Content-Type: application/json` header unless the caller already
    /// set a content type.
    pub json: Option<serde_json::Value>,
    /// Query parameters, URL-encoded; the query string is omitted
    /// entirely when empty. Empty values are preserved as `key=`.
    pub params: Vec<(String, String)>,
    /// Base URL override; defaults to the configured backend origin.
    pub base: Option<String>,
    /// Attach the session token (issuing one first if needed).
    pub authenticate: bool,
    /// Permit the one reauthentication retry.
    pub allow_reauth: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            body: None,
            headers: Vec::new(),
            json: None,
            params: Vec::new(),
            base: None,
            authenticate: true,
            allow_reauth: true,
        }
    }
}

/// Normalizes a route path to always begin with `/`.
pub fn normalize_route(route: &str) -> String {
    if route.starts_with('/') {
        route.to_string()
    } else {
        format!("/{}", route)
    }
}

/// URL-encodes query parameters, with the leading `?`; empty when there
/// are no parameters.
pub fn encode_query(params: &[(String, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, value);
    }
    format!("?{}", serializer.finish())
}

/// Reads a query parameter out of a `?key=value` search string.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    url::form_urlencoded::parse(search.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

fn has_header(headers: &[(String, String)], name: &str) -> bool {
    headers.iter().any(|(key, _)| key.eq_ignore_ascii_case(name))
}

fn parse_json<D: DeserializeOwned>(route: &str, response: &HttpResponse) -> Result<D, ApiError> {
    if !response.is_json() {
        return Err(ApiError::Schema {
            route: normalize_route(route),
            message: format!(
                "expected a JSON response, got content type {:?}",
                response.content_type
            ),
        });
    }
    serde_json::from_str(&response.text).map_err(|err| ApiError::Schema {
        route: normalize_route(route),
        message: err.to_string(),
    })
}

impl<T: Transport, S: KeyValueStore> Session<T, S> {
    /// Builds and issues one HTTP request. No credential bootstrapping
    /// and no retry; this is the primitive both the credential chain and
    /// [`request`] are made of.
    ///
    /// [`request`]: Session::request
    async fn send_raw(
        &self,
        method: Method,
        route: &str,
        options: &RequestOptions,
        session_token: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        let route = normalize_route(route);
        let mut headers = options.headers.clone();
        let mut body = options.body.clone();

        if let Some(json) = &options.json {
            if !has_header(&headers, "content-type") {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
            }
            body = Some(serde_json::to_string(json).map_err(|err| ApiError::Transport {
                route: route.clone(),
                message: format!("failed to serialize request body: {}", err),
            })?);
        }

        if let Some(token) = session_token {
            if !has_header(&headers, "authorization") {
                headers.push(("Authorization".to_string(), token.to_string()));
            }
        }

        let base = options.base.as_deref().unwrap_or(&self.config().base_url);
        let url = format!("{}{}{}", base, route, encode_query(&options.params));

        let response = self
            .transport()
            .send(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await
            .map_err(|message| {
                tracing::error!("[{}] request failed: {}", route, message);
                ApiError::Transport {
                    route: route.clone(),
                    message,
                }
            })?;

        if response.is_success() {
            tracing::debug!(
                "[{}] received {}. Body: {}",
                route,
                response.status,
                response.text
            );
        } else {
            tracing::error!(
                "[{}] received {}. Body: {}",
                route,
                response.status,
                response.text
            );
        }
        Ok(response)
    }

    /// One request against the backend, with session-token attachment and
    /// the `force_reauth` recovery protocol: a 401 whose body carries
    /// `force_reauth: true` refreshes the user profile, forces a fresh
    /// session token and retries the request exactly once. The bound is
    /// structural: the loop flips `allow_reauth` off before retrying.
    pub async fn request(
        &self,
        method: Method,
        route: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, ApiError> {
        let mut allow_reauth = options.allow_reauth;

        loop {
            let session_token = if options.authenticate {
                Some(self.ensure_session_token(false).await?)
            } else {
                None
            };

            let response = self
                .send_raw(method, route, &options, session_token.as_deref())
                .await?;
            if response.is_success() {
                return Ok(response);
            }

            // Parse failure is swallowed; the error then carries no body.
            let body: Option<serde_json::Value> = serde_json::from_str(&response.text).ok();
            let force_reauth = body
                .as_ref()
                .and_then(|value| value.get("force_reauth"))
                .and_then(|value| value.as_bool())
                .unwrap_or(false);

            if force_reauth && response.status == 401 && options.authenticate && allow_reauth {
                allow_reauth = false;
                self.refresh_user_data().await?;
                self.ensure_session_token(true).await?;
                continue;
            }

            return Err(ApiError::Status {
                route: normalize_route(route),
                status: response.status,
                text: response.text,
                body,
            });
        }
    }

    /// [`request`] with the success body decoded into `D`.
    ///
    /// [`request`]: Session::request
    pub async fn request_json<D: DeserializeOwned>(
        &self,
        method: Method,
        route: &str,
        options: RequestOptions,
    ) -> Result<D, ApiError> {
        let response = self.request(method, route, options).await?;
        parse_json(route, &response)
    }

    /// Unauthenticated send with typed decoding and no retry; used by the
    /// credential chain itself, which cannot go through [`request`]
    /// without becoming circular.
    ///
    /// [`request`]: Session::request
    pub(crate) async fn fetch_json<D: DeserializeOwned>(
        &self,
        method: Method,
        route: &str,
        options: RequestOptions,
    ) -> Result<D, ApiError> {
        let response = self.send_raw(method, route, &options, None).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                route: normalize_route(route),
                status: response.status,
                body: serde_json::from_str(&response.text).ok(),
                text: response.text,
            });
        }
        parse_json(route, &response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_routes_to_leading_slash() {
        assert_eq!(normalize_route("prefixes/g1"), "/prefixes/g1");
        assert_eq!(normalize_route("/prefixes/g1"), "/prefixes/g1");
    }

    #[test]
    fn omits_query_string_without_params() {
        assert_eq!(encode_query(&[]), "");
    }

    #[test]
    fn encodes_params_including_empty_values() {
        let params = vec![
            ("code".to_string(), "a b".to_string()),
            ("q".to_string(), String::new()),
        ];
        assert_eq!(encode_query(&params), "?code=a+b&q=");
    }

    #[test]
    fn reads_query_params_from_search_strings() {
        assert_eq!(
            query_param("?code=abc&state=1", "code"),
            Some("abc".to_string())
        );
        assert_eq!(query_param("code=abc", "code"), Some("abc".to_string()));
        assert_eq!(query_param("?state=1", "code"), None);
    }
}
