/**
 * Authenticated API Client
 *
 * Every call made on behalf of the logged-in player goes through
 * `ApiClient::call`, which attaches the current bearer credential and turns
 * HTTP failures into `ApiError`s.
 *
 * # Session expiry
 *
 * A 401 from any endpoint means the stored session is dead. The client clears
 * the session store, asks the shell to show the login form and reports
 * `ApiError::SessionExpired` to the caller. Nothing is retried.
 */

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::egui_app::navigator::Navigator;
use crate::egui_app::session::SessionStore;
use crate::egui_app::types::Route;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not authenticated")]
    Unauthenticated,
    #[error("session expired")]
    SessionExpired,
    #[error("HTTP error {status}")]
    Http { status: u16 },
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Method, body, extra headers and URL parts for one call.
///
/// Path segments and query pairs are percent-encoded when the URL is built,
/// so ids can be passed through as they are.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    method: Method,
    body: Option<String>,
    headers: HeaderMap,
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: HeaderMap::new(),
            segments: Vec::new(),
            query: Vec::new(),
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn patch() -> Self {
        Self::new(Method::PATCH)
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }

    /// Append one path segment after the call path.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn query_pair(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Add a header. `Authorization` is ignored at send time.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<SessionStore>,
    navigator: Navigator,
}

impl ApiClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        store: Arc<SessionStore>,
        navigator: Navigator,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            store,
            navigator,
        }
    }

    /// Issue an authenticated request and return the raw 2xx response.
    pub async fn call(&self, path: &str, options: RequestOptions) -> Result<Response, ApiError> {
        let session = self.store.session().ok_or(ApiError::Unauthenticated)?;
        let mut authorization =
            HeaderValue::from_str(&session.bearer()).map_err(|_| ApiError::Unauthenticated)?;
        authorization.set_sensitive(true);

        let url = self.url(path, &options)?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);
        headers.insert(AUTHORIZATION, authorization);

        tracing::debug!("{} {}", options.method, url.path());

        let mut request = self.http.request(options.method, url).headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }
        let response = request.send().await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("Session expired during call to {}", path);
            self.store.clear();
            self.navigator.request(Route::Login);
            return Err(ApiError::SessionExpired);
        }
        if !status.is_success() {
            tracing::warn!("Call to {} failed with status {}", path, status);
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    fn url(&self, path: &str, options: &RequestOptions) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;
        if !options.segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(raw.clone()))?
                .pop_if_empty()
                .extend(&options.segments);
        }
        if !options.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&options.query);
        }
        Ok(url)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch_json(path, RequestOptions::get()).await
    }

    /// `call` with `options`, then decode the JSON body.
    pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T, ApiError> {
        let response = self.call(path, options).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
