//! HTTP pipeline: the single choke point for every backend call.
//!
//! Each dispatch runs an ordered pair of steps around the transport. The
//! outbound step reads the token store and attaches the bearer header; the
//! inbound step watches for 401 responses and invalidates the session
//! (clear the token, hard-navigate to the login view) before the caller
//! ever sees the result. The transport and the navigation target are trait
//! objects so the whole pipeline runs natively under test.
//!
//! No retries and no timeouts here; a failed request is reported once,
//! immediately, after the 401 side effects have run.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::token::TokenStore;

/// Path of the login view. 401 handling must never navigate away from it,
/// otherwise a rejected login attempt would start a redirect loop.
pub const LOGIN_PATH: &str = "/login";

/// HTTP methods used by the REST contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A request descriptor relative to the versioned API base.
///
/// Callers never set the authorization header themselves; the pipeline
/// annotates every descriptor with the current token when one exists.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_owned(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: &str) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn patch(path: &str) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body; serialization failure is a local error.
    pub fn with_body<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(|e| ApiError::Local(e.to_string()))?);
        Ok(self)
    }

    /// First header with the given name, if any.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A raw response: status code plus body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON; decode failure is a local error.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Local(e.to_string()))
    }
}

/// Sends a prepared request to the backend.
///
/// `Err` means no response was produced: `Transport` when the request
/// never reached the server, `Local` when it could not be built.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, base: &str, req: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Where the user currently is, and how to force them elsewhere.
///
/// Session invalidation uses a hard navigation (the `window.location`
/// kind), not the SPA router, so any in-flight view state is dropped.
pub trait Navigator {
    fn current_path(&self) -> String;
    fn go(&self, path: &str);
}

/// The HTTP client core shared by every domain API client.
pub struct ApiClient<T> {
    base: String,
    transport: T,
    tokens: Rc<dyn TokenStore>,
    navigator: Rc<dyn Navigator>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(
        base: String,
        transport: T,
        tokens: Rc<dyn TokenStore>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            base,
            transport,
            tokens,
            navigator,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn tokens(&self) -> &Rc<dyn TokenStore> {
        &self.tokens
    }

    /// Run one request through the full pipeline.
    ///
    /// Per-request order: token attachment, dispatch, 401 handling,
    /// rejection classification. The token is read at dispatch time, not
    /// at client construction, so a store cleared by another in-flight
    /// request is honored immediately. Errors always reach the caller.
    pub async fn dispatch(&self, mut req: ApiRequest) -> Result<ApiResponse, ApiError> {
        log::debug!("dispatch {} {}", req.method.as_str(), req.path);
        if let Some(token) = self.tokens.get() {
            req.headers
                .push(("Authorization".to_owned(), format!("Bearer {token}")));
        }

        let resp = self.transport.send(&self.base, &req).await?;

        if resp.status == 401 {
            self.invalidate_session();
        }
        if !resp.is_success() {
            return Err(ApiError::rejection(resp.status, &resp.body));
        }
        Ok(resp)
    }

    /// Clear the session and force the user back to the login view.
    ///
    /// Navigation is skipped when the current view already is the login
    /// view, so a rejected login attempt stays on the page and lets the
    /// form report the failure.
    fn invalidate_session(&self) {
        self.tokens.clear();
        if !self.navigator.current_path().contains(LOGIN_PATH) {
            log::info!("session invalidated, redirecting to login");
            self.navigator.go(LOGIN_PATH);
        }
    }

    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.dispatch(ApiRequest::get(path)).await?.json()
    }

    pub async fn get_json_query<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<R, ApiError> {
        self.dispatch(ApiRequest::get(path).with_query(query))
            .await?
            .json()
    }

    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.dispatch(ApiRequest::post(path).with_body(body)?)
            .await?
            .json()
    }

    pub async fn put_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.dispatch(ApiRequest::put(path).with_body(body)?)
            .await?
            .json()
    }

    /// Bodyless PATCH, used by the acknowledge operation.
    pub async fn patch_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.dispatch(ApiRequest::patch(path)).await?.json()
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.dispatch(ApiRequest::new(Method::Delete, path))
            .await
            .map(|_| ())
    }
}

/// gloo-net transport used in the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl Transport for GlooTransport {
    async fn send(&self, base: &str, req: &ApiRequest) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::Request;

        let url = format!("{base}{}", req.path);
        let mut builder = match req.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        if !req.query.is_empty() {
            builder = builder.query(req.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        let request = match &req.body {
            Some(body) => builder.json(body).map_err(|e| ApiError::Local(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Local(e.to_string()))?,
        };

        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }
}

/// `window.location`-backed navigator.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

#[cfg(feature = "hydrate")]
impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    fn go(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}

/// The client every page uses in the browser.
#[cfg(feature = "hydrate")]
pub type BrowserClient = ApiClient<GlooTransport>;

/// Client wired to localStorage tokens and `window.location`.
#[cfg(feature = "hydrate")]
pub fn browser_client() -> BrowserClient {
    ApiClient::new(
        super::api_base(),
        GlooTransport,
        Rc::new(super::token::BrowserTokens),
        Rc::new(BrowserNavigator),
    )
}
