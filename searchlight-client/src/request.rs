//! Request descriptor primitives shared by all endpoint namespaces
//!
//! Endpoint functions compile caller options down to a [`RequestDescriptor`];
//! the transport layer turns that descriptor into an actual network call.
//! Paths are built relative to the engine root (no leading slash) — the
//! transport owns host/port/scheme composition.

use serde_json::Value;
use std::fmt;

/// HTTP method of a request descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
}

impl Method {
    /// Get the method as an uppercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical request shape handed to the transport.
///
/// `path` is relative to the engine root and already carries the query
/// string, if any. Only write operations carry a body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: String) -> Self {
        Self {
            method,
            path,
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Builds a REST path from literal segments and comma-joined value lists.
#[derive(Debug, Default)]
pub struct PathBuilder {
    segments: Vec<String>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a literal path segment
    pub fn push(mut self, segment: &str) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Append the values joined with `,` as a single segment.
    ///
    /// An empty list adds nothing, so the built path never contains an
    /// empty segment or a trailing separator. Values are trusted to be
    /// URL-safe and must not contain `,` or `/`.
    pub fn push_list(mut self, values: &[String]) -> Self {
        if !values.is_empty() {
            self.segments.push(values.join(","));
        }
        self
    }

    pub fn build(self) -> String {
        self.segments.join("/")
    }
}

/// Collects query parameters in declaration order.
///
/// Each endpoint appends its parameters in a fixed order, so the encoded
/// string is byte-stable for identical options.
#[derive(Debug, Default)]
pub struct QueryString {
    params: Vec<(&'static str, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter when the value is present.
    ///
    /// Booleans render as the literal strings `true` / `false`.
    pub fn append<T: fmt::Display>(&mut self, key: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.params.push((key, value.to_string()));
        }
    }

    /// Encode as `?k=v&k2=v2`, or an empty string when no parameter was set
    pub fn encode(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }

        let mut out = String::from("?");
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}
