use crate::constants::{header, server};
use crate::util::header_key;
use indexmap::IndexMap;

/// Ordered key/value store used for server variables and cookies.
pub type Variables = IndexMap<String, String>;

/// Captured copy of a request's server variables and cookies.
///
/// Server variables follow the CGI naming convention: transport headers are
/// stored as `HTTP_<NAME>` (`User-Agent` becomes `HTTP_USER_AGENT`) next to
/// plain keys such as `REQUEST_METHOD` or `REMOTE_ADDR`. Insertion order is
/// kept and is the order validation reports offending keys in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestSnapshot {
    server: Variables,
    cookies: Variables,
}

impl RequestSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(server: Variables, cookies: Variables) -> Self {
        Self { server, cookies }
    }

    /// Builds a snapshot from raw HTTP header pairs.
    ///
    /// Repeated headers are joined with `", "`. `Content-Type` and
    /// `Content-Length` are also stored under their CGI keys, and `Cookie`
    /// headers populate the cookie map.
    pub fn from_headers<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut snapshot = Self::new();
        for (name, value) in headers {
            snapshot.append_header(name.as_ref(), value.as_ref());
        }
        snapshot
    }

    pub fn with_server(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_server(key, value);
        self
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_cookie(name, value);
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.append_header(name, value);
        self
    }

    pub fn insert_server(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.server.insert(key.into(), value.into());
    }

    pub fn insert_cookie(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.cookies.insert(name.into(), value.into());
    }

    pub fn remove_server(&mut self, key: &str) -> Option<String> {
        self.server.shift_remove(key)
    }

    /// Adds the cookies found in a `Cookie` header value (`a=1; b=2`).
    pub fn insert_cookie_header(&mut self, value: &str) {
        for (name, value) in parse_cookie_header(value) {
            self.cookies.insert(name, value);
        }
    }

    fn append_header(&mut self, name: &str, value: &str) {
        let key = header_key(name);
        let separator = if name.trim().eq_ignore_ascii_case(header::COOKIE) {
            "; "
        } else {
            ", "
        };

        self.server
            .entry(key.clone())
            .and_modify(|existing| {
                existing.push_str(separator);
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_owned());

        let name = name.trim();
        if name.eq_ignore_ascii_case(header::CONTENT_TYPE) {
            let joined = self.server.get(&key).cloned().unwrap_or_default();
            self.server.insert(server::CONTENT_TYPE.to_owned(), joined);
        } else if name.eq_ignore_ascii_case(header::CONTENT_LENGTH) {
            let joined = self.server.get(&key).cloned().unwrap_or_default();
            self.server.insert(server::CONTENT_LENGTH.to_owned(), joined);
        } else if name.eq_ignore_ascii_case(header::COOKIE) {
            self.insert_cookie_header(value);
        }
    }

    pub fn server(&self, key: &str) -> Option<&str> {
        self.server.get(key).map(String::as_str)
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Looks up a transport header by its HTTP name.
    pub fn header(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.server(&header_key(name)) {
            return Some(value);
        }

        let name = name.trim();
        if name.eq_ignore_ascii_case(header::CONTENT_TYPE) {
            self.server(server::CONTENT_TYPE)
        } else if name.eq_ignore_ascii_case(header::CONTENT_LENGTH) {
            self.server(server::CONTENT_LENGTH)
        } else {
            None
        }
    }

    pub fn server_vars(&self) -> &Variables {
        &self.server
    }

    pub fn cookies(&self) -> &Variables {
        &self.cookies
    }

    pub(crate) fn server_mut(&mut self) -> &mut Variables {
        &mut self.server
    }

    pub(crate) fn cookies_mut(&mut self) -> &mut Variables {
        &mut self.cookies
    }
}

pub(crate) fn parse_cookie_header(value: &str) -> impl Iterator<Item = (String, String)> + '_ {
    value.split(';').filter_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some((name.to_owned(), value.trim().to_owned()))
    })
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;
