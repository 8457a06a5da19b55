//! Request/response boundary used by list controllers.
//!
//! The crate never performs I/O. A host [`Transport`] carries a [`Request`]
//! to the backend and hands back a [`Response`] or a [`Failure`]; failures
//! carry a display message that ends up in a [`Notifier`].

use crate::error::{Error, Result};
use crate::notify::{Notice, Notifier};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Header that carries the CSRF token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Read.
    Get,
    /// Create or run an action.
    Post,
    /// Remove.
    Delete,
}

impl Method {
    /// Upper-case method name.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request a controller wants sent.
///
/// ```
/// use console_paginator::request::{Method, Request};
/// use serde_json::json;
///
/// let req = Request::new(Method::Post, "/ra/resource/restore/")
///     .with_payload(json!({"resources": ["1", "2"]}))
///     .with_csrf("token123");
/// assert_eq!(req.body(), r#"{"resources":["1","2"]}"#);
/// assert!(req.headers().contains(&("X-CSRFToken", "token123".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Target URL.
    pub url: String,
    /// JSON payload.
    pub payload: Value,
    /// CSRF token, sent as [`CSRF_HEADER`].
    pub csrf_token: Option<String>,
}

impl Request {
    /// Creates a request with an empty JSON object payload.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            payload: Value::Object(Default::default()),
            csrf_token: None,
        }
    }

    /// Sets the payload (builder pattern).
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// Sets the CSRF token (builder pattern).
    pub fn with_csrf(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Serialized JSON body.
    pub fn body(&self) -> String {
        self.payload.to_string()
    }

    /// Headers the transport should send.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/json".to_string())];
        if let Some(token) = &self.csrf_token {
            headers.push((CSRF_HEADER, token.clone()));
        }
        headers
    }
}

/// A successful backend response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Response {
    /// HTTP status.
    pub status: u16,
    /// Decoded JSON body, `Null` if there was none.
    pub body: Value,
}

impl Response {
    /// Builds a response from a raw body. Non-JSON bodies decode to `Null`.
    pub fn from_body(status: u16, body: &str) -> Self {
        Self {
            status,
            body: serde_json::from_str(body).unwrap_or(Value::Null),
        }
    }

    /// The `message` field, if present.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// Where the page should go next (`redirect_url` or `redirect_link`).
    pub fn redirect_url(&self) -> Option<&str> {
        self.body
            .get("redirect_url")
            .or_else(|| self.body.get("redirect_link"))
            .and_then(Value::as_str)
    }
}

#[derive(Deserialize)]
struct FailureBody {
    message: String,
}

/// A failed backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// HTTP status, 0 if the request never got a response.
    pub status: u16,
    /// Message to show the user.
    pub message: String,
}

impl Failure {
    /// Extracts `{"message": ...}` from a failure body.
    ///
    /// ```
    /// use console_paginator::request::Failure;
    ///
    /// let f = Failure::from_body(403, r#"{"message": "Permission denied"}"#);
    /// assert_eq!(f.message, "Permission denied");
    ///
    /// let f = Failure::from_body(502, "<html>Bad gateway</html>");
    /// assert_eq!(f.message, "Request failed with status 502");
    /// ```
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<FailureBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| format!("Request failed with status {status}"));
        Self { status, message }
    }
}

impl From<Failure> for Error {
    fn from(failure: Failure) -> Self {
        Error::Request {
            message: failure.message,
        }
    }
}

/// Carries requests to the backend.
pub trait Transport {
    /// Sends `request` and waits for the outcome.
    fn submit(&mut self, request: &Request) -> std::result::Result<Response, Failure>;
}

/// Submits `request` and reports the outcome through `notifier`.
///
/// A response `message` is shown as a success notice; a failure message as an
/// error notice. Nothing else is touched, so callers keep their pre-request
/// state on failure.
pub fn submit_with_notice<T, N>(
    transport: &mut T,
    notifier: &mut N,
    request: &Request,
) -> Result<Response>
where
    T: Transport + ?Sized,
    N: Notifier + ?Sized,
{
    tracing::debug!(method = %request.method, url = %request.url, "submitting request");
    match transport.submit(request) {
        Ok(response) => {
            if let Some(message) = response.message() {
                notifier.notify(Notice::success(message));
            }
            Ok(response)
        }
        Err(failure) => {
            tracing::warn!(
                method = %request.method,
                url = %request.url,
                status = failure.status,
                message = %failure.message,
                "request failed"
            );
            notifier.notify(Notice::error(failure.message.clone()));
            Err(failure.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NoticeKind;
    use serde_json::json;

    struct Canned(std::result::Result<Response, Failure>, Vec<Request>);

    impl Transport for Canned {
        fn submit(&mut self, request: &Request) -> std::result::Result<Response, Failure> {
            self.1.push(request.clone());
            self.0.clone()
        }
    }

    #[test]
    fn test_headers_without_csrf() {
        let req = Request::new(Method::Delete, "/ra/outlook/delete/");
        assert_eq!(req.headers().len(), 1);
        assert_eq!(req.body(), "{}");
    }

    #[test]
    fn test_response_accessors() {
        let r = Response::from_body(200, r#"{"redirect_link": "/ra/outlook", "message": "ok"}"#);
        assert_eq!(r.redirect_url(), Some("/ra/outlook"));
        assert_eq!(r.message(), Some("ok"));
        assert_eq!(Response::from_body(204, "").body, Value::Null);
    }

    #[test]
    fn test_success_notifies_message() {
        let mut transport = Canned(Ok(Response::from_body(200, r#"{"message": "Link removed"}"#)), vec![]);
        let mut notices = Vec::new();
        let req = Request::new(Method::Delete, "/ra/outlook/delete/")
            .with_payload(json!({"outlook_id": "5"}));

        let resp = submit_with_notice(&mut transport, &mut notices, &req).unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(notices, vec![Notice::success("Link removed")]);
        assert_eq!(transport.1, vec![req]);
    }

    #[test]
    fn test_failure_notifies_error() {
        let mut transport = Canned(Err(Failure::from_body(400, r#"{"message": "Nope"}"#)), vec![]);
        let mut notices = Vec::new();
        let req = Request::new(Method::Post, "/ra/outlook/create/");

        let err = submit_with_notice(&mut transport, &mut notices, &req).unwrap_err();
        assert_eq!(
            err,
            Error::Request {
                message: "Nope".to_string()
            }
        );
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
    }
}
