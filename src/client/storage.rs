//! Client-side key-value persistence with TTL semantics.
//!
//! The session manager persists its credentials through the
//! [`KeyValueStore`] trait so the cookie jar can be swapped for any other
//! storage backend without touching the credential logic. The web build
//! uses [`CookieStore`] over `document.cookie`; tests and non-web builds
//! use [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that must be escaped inside a cookie value.
const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b',')
    .add(b';')
    .add(b'=')
    .add(b'\\');

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`. `ttl_days` is a fractional number of
    /// days after which the entry expires; `None` stores the entry with
    /// no explicit client-side expiry.
    fn set(&self, key: &str, value: &str, ttl_days: Option<f64>);

    fn remove(&self, key: &str);
}

/// In-memory store. TTLs are recorded but never enforced, which is all
/// the session logic needs outside a browser.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, (String, Option<f64>)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded TTL for `key`: `None` when absent, `Some(None)` when
    /// stored without an expiry.
    #[cfg(test)]
    pub fn ttl_days(&self, key: &str) -> Option<Option<f64>> {
        self.entries
            .borrow()
            .get(key)
            .map(|(_, ttl_days)| *ttl_days)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .borrow()
            .get(key)
            .map(|(value, _)| value.clone())
    }

    fn set(&self, key: &str, value: &str, ttl_days: Option<f64>) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), (value.to_string(), ttl_days));
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Extracts and percent-decodes the value of `key` from a `Cookie`-style
/// header (`a=1; b=2`).
pub fn read_cookie(header: &str, key: &str) -> Option<String> {
    header.split(';').find_map(|entry| {
        let (name, value) = entry.trim().split_once('=')?;
        if name != key {
            return None;
        }
        percent_decode_str(value)
            .decode_utf8()
            .ok()
            .map(|decoded| decoded.into_owned())
    })
}

/// Cookie jar over `document.cookie`. Values are percent-encoded; TTLs
/// map onto `max-age`.
#[cfg(feature = "web")]
pub struct CookieStore;

#[cfg(feature = "web")]
impl CookieStore {
    fn document() -> Option<web_sys::HtmlDocument> {
        use web_sys::wasm_bindgen::JsCast;

        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }

    fn write(cookie: &str) {
        if let Some(document) = Self::document() {
            let _ = document.set_cookie(cookie);
        }
    }
}

#[cfg(feature = "web")]
impl KeyValueStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        let header = Self::document()?.cookie().ok()?;
        read_cookie(&header, key)
    }

    fn set(&self, key: &str, value: &str, ttl_days: Option<f64>) {
        let encoded = utf8_percent_encode(value, COOKIE_VALUE);
        let mut cookie = format!("{}={}; path=/", key, encoded);
        if let Some(days) = ttl_days {
            cookie.push_str(&format!("; max-age={}", (days * 86_400.0) as i64));
        }
        Self::write(&cookie);
    }

    fn remove(&self, key: &str) {
        Self::write(&format!("{}=; path=/; max-age=0", key));
    }
}
