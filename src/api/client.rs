//! API Gateway Client
//!
//! Single point of egress for all backend calls. Attaches the stored bearer
//! token to every request, unwraps the `data` response envelope, and
//! transparently recovers from an expired access token: one refresh exchange,
//! one retry of the original request, never more. Concurrent 401s share a
//! single in-flight refresh.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::session::{LocalStorageTokens, TokenStore};

const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Endpoints that must never trigger a refresh (avoids refresh loops)
const AUTH_PATHS: &[&str] = &["/auth/login", "/auth/signup", "/auth/refresh"];

thread_local! {
    static CLIENT: ApiClient = ApiClient::from_env();
}

/// Shared client handle. Clones are cheap and share the token store,
/// connection pool and refresh gate.
pub fn client() -> ApiClient {
    CLIENT.with(|c| c.clone())
}

/// Successful responses wrap the payload under a `data` key
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Error responses carry a human-readable `message`
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshResponse {
    access_token: String,
}

type SharedRefresh = Shared<LocalBoxFuture<'static, Result<String, ApiError>>>;

/// One attempt at sending a request. Retry state travels with the attempt
/// instead of being patched onto a shared request object.
struct Attempt {
    retried: bool,
    token: Option<String>,
}

impl Attempt {
    fn first(token: Option<String>) -> Self {
        Self {
            retried: false,
            token,
        }
    }

    fn retry_with(token: String) -> Self {
        Self {
            retried: true,
            token: Some(token),
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Rc<dyn TokenStore>,
    /// In-flight refresh exchange, shared by every waiter
    refresh_gate: Rc<RefCell<Option<SharedRefresh>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Rc<dyn TokenStore>) -> Self {
        let base_url = base_url.into();
        Self {
            http: build_http(),
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
            refresh_gate: Rc::new(RefCell::new(None)),
        }
    }

    /// Base URL comes from `CLOTHSHARE_API_URL` at build time
    pub fn from_env() -> Self {
        let base = option_env!("CLOTHSHARE_API_URL").unwrap_or(DEFAULT_API_BASE);
        Self::new(base, Rc::new(LocalStorageTokens))
    }

    // ========================
    // Session bookkeeping
    // ========================

    /// Store a fresh token pair (login / signup)
    pub fn store_session(&self, access: &str, refresh: &str) {
        self.tokens.store_pair(access, refresh);
    }

    /// Drop the stored token pair (logout / invalid session)
    pub fn clear_session(&self) {
        self.tokens.clear();
    }

    /// Whether an access token is currently stored
    pub fn has_session(&self) -> bool {
        self.tokens.access_token().is_some()
    }

    // ========================
    // Request surface
    // ========================

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// POST where the response body (if any) is discarded
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self.execute(Method::POST, path, None::<&()>).await?;
        discard_body(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.execute(Method::DELETE, path, None::<&()>).await?;
        discard_body(response).await
    }

    /// Send a request and decode the unwrapped `data` payload
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(method, path, body).await?;
        decode_envelope(response).await
    }

    /// Send with bearer auth and the single 401 -> refresh -> retry recovery
    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        let mut attempt = Attempt::first(self.tokens.access_token());
        loop {
            let response = self
                .send(method.clone(), path, body, attempt.token.as_deref())
                .await?;

            if response.status() == StatusCode::UNAUTHORIZED
                && !attempt.retried
                && !is_auth_path(path)
            {
                let fresh = self.refresh_access_token().await?;
                attempt = Attempt::retry_with(fresh);
                continue;
            }

            return Ok(response);
        }
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, &url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        Ok(builder.send().await?)
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// At most one exchange is in flight at a time; overlapping callers
    /// await the same shared future. Any failure clears the stored pair and
    /// forces re-login.
    fn refresh_access_token(&self) -> SharedRefresh {
        if let Some(pending) = self.refresh_gate.borrow().as_ref() {
            return pending.clone();
        }

        let http = self.http.clone();
        let base_url = self.base_url.clone();
        let tokens = Rc::clone(&self.tokens);
        let gate = Rc::clone(&self.refresh_gate);

        let fut: LocalBoxFuture<'static, Result<String, ApiError>> = Box::pin(async move {
            let result = run_refresh(&http, &base_url, tokens.as_ref()).await;
            gate.borrow_mut().take();
            if result.is_err() {
                tokens.clear();
                force_login_redirect();
            }
            result
        });

        let shared = fut.shared();
        *self.refresh_gate.borrow_mut() = Some(shared.clone());
        shared
    }
}

async fn run_refresh(
    http: &reqwest::Client,
    base_url: &str,
    tokens: &dyn TokenStore,
) -> Result<String, ApiError> {
    let refresh_token = tokens.refresh_token().ok_or(ApiError::SessionExpired)?;

    let url = format!("{base_url}/auth/refresh");
    let response = http
        .post(&url)
        .json(&RefreshRequest {
            refresh_token: &refresh_token,
        })
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ApiError::SessionExpired);
    }

    let envelope: Envelope<RefreshResponse> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    tokens.set_access_token(&envelope.data.access_token);
    Ok(envelope.data.access_token)
}

async fn decode_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(api_error(status, response).await);
    }
    let envelope: Envelope<T> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.data)
}

async fn discard_body(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(api_error(status, response).await);
    }
    Ok(())
}

async fn api_error(status: StatusCode, response: reqwest::Response) -> ApiError {
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    ApiError::Api {
        status: status.as_u16(),
        message,
    }
}

fn is_auth_path(path: &str) -> bool {
    AUTH_PATHS.iter().any(|auth| path.starts_with(auth))
}

fn build_http() -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    }
    #[cfg(target_arch = "wasm32")]
    {
        // fetch() carries no client-side timeout knob; the browser default applies
        reqwest::Client::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn force_login_redirect() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn force_login_redirect() {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokens;
    use mockito::{Matcher, Server};

    #[derive(Debug, PartialEq, Deserialize)]
    struct Probe {
        id: String,
    }

    fn client_for(server: &mockito::ServerGuard, tokens: Rc<MemoryTokens>) -> ApiClient {
        ApiClient::new(server.url(), tokens)
    }

    #[tokio::test]
    async fn attaches_bearer_token_and_unwraps_envelope() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/items/abc")
            .match_header("authorization", "Bearer tok-1")
            .with_status(200)
            .with_body(r#"{"data":{"id":"abc"}}"#)
            .create_async()
            .await;

        let tokens = Rc::new(MemoryTokens::new(Some("tok-1"), Some("ref-1")));
        let client = client_for(&server, tokens);

        let probe: Probe = client.get("/items/abc").await.unwrap();
        assert_eq!(probe.id, "abc");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn expired_token_refreshes_once_and_retries_with_new_token() {
        let mut server = Server::new_async().await;
        let stale = server
            .mock("GET", "/items/my/items")
            .match_header("authorization", "Bearer expired")
            .with_status(401)
            .expect(1)
            .create_async()
            .await;
        let refresh = server
            .mock("POST", "/auth/refresh")
            .match_body(Matcher::Json(serde_json::json!({"refreshToken": "ref-1"})))
            .with_status(200)
            .with_body(r#"{"data":{"accessToken":"fresh"}}"#)
            .expect(1)
            .create_async()
            .await;
        let retried = server
            .mock("GET", "/items/my/items")
            .match_header("authorization", "Bearer fresh")
            .with_status(200)
            .with_body(r#"{"data":{"id":"mine"}}"#)
            .expect(1)
            .create_async()
            .await;

        let tokens = Rc::new(MemoryTokens::new(Some("expired"), Some("ref-1")));
        let client = client_for(&server, Rc::clone(&tokens));

        let probe: Probe = client.get("/items/my/items").await.unwrap();
        assert_eq!(probe.id, "mine");
        assert_eq!(tokens.access_token().as_deref(), Some("fresh"));

        stale.assert_async().await;
        refresh.assert_async().await;
        retried.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_refresh_clears_tokens_and_stops() {
        let mut server = Server::new_async().await;
        let stale = server
            .mock("GET", "/users/me")
            .with_status(401)
            .expect(1)
            .create_async()
            .await;
        let refresh = server
            .mock("POST", "/auth/refresh")
            .with_status(401)
            .expect(1)
            .create_async()
            .await;

        let tokens = Rc::new(MemoryTokens::new(Some("expired"), Some("dead-ref")));
        let client = client_for(&server, Rc::clone(&tokens));

        let err = client.get::<Probe>("/users/me").await.unwrap_err();
        assert_eq!(err, ApiError::SessionExpired);
        assert_eq!(tokens.access_token(), None);
        assert_eq!(tokens.refresh_token(), None);

        stale.assert_async().await;
        refresh.assert_async().await;
    }

    #[tokio::test]
    async fn missing_refresh_token_fails_without_calling_refresh() {
        let mut server = Server::new_async().await;
        let stale = server
            .mock("GET", "/users/me")
            .with_status(401)
            .expect(1)
            .create_async()
            .await;
        let refresh = server
            .mock("POST", "/auth/refresh")
            .expect(0)
            .create_async()
            .await;

        let tokens = Rc::new(MemoryTokens::new(Some("expired"), None));
        let client = client_for(&server, Rc::clone(&tokens));

        let err = client.get::<Probe>("/users/me").await.unwrap_err();
        assert_eq!(err, ApiError::SessionExpired);
        assert_eq!(tokens.access_token(), None);

        stale.assert_async().await;
        refresh.assert_async().await;
    }

    #[tokio::test]
    async fn auth_endpoints_never_trigger_refresh() {
        let mut server = Server::new_async().await;
        let login = server
            .mock("POST", "/auth/login")
            .with_status(401)
            .with_body(r#"{"message":"Invalid credentials"}"#)
            .expect(1)
            .create_async()
            .await;
        let refresh = server
            .mock("POST", "/auth/refresh")
            .expect(0)
            .create_async()
            .await;

        let tokens = Rc::new(MemoryTokens::new(None, Some("ref-1")));
        let client = client_for(&server, tokens);

        let err = client
            .post::<_, Probe>("/auth/login", &serde_json::json!({"email": "a@b.c"}))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Api {
                status: 401,
                message: "Invalid credentials".to_string()
            }
        );

        login.assert_async().await;
        refresh.assert_async().await;
    }

    #[tokio::test]
    async fn non_401_errors_propagate_server_message() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/items")
            .with_status(400)
            .with_body(r#"{"message":"title is required"}"#)
            .create_async()
            .await;

        let tokens = Rc::new(MemoryTokens::new(Some("tok-1"), Some("ref-1")));
        let client = client_for(&server, Rc::clone(&tokens));

        let err = client
            .post::<_, Probe>("/items", &serde_json::json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "title is required");
        // a plain validation failure leaves the session alone
        assert_eq!(tokens.access_token().as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn concurrent_401s_share_one_refresh_exchange() {
        let mut server = Server::new_async().await;
        let stale_items = server
            .mock("GET", "/items/my/items")
            .match_header("authorization", "Bearer expired")
            .with_status(401)
            .expect(1)
            .create_async()
            .await;
        let stale_me = server
            .mock("GET", "/users/me")
            .match_header("authorization", "Bearer expired")
            .with_status(401)
            .expect(1)
            .create_async()
            .await;
        let refresh = server
            .mock("POST", "/auth/refresh")
            .with_status(200)
            .with_body(r#"{"data":{"accessToken":"fresh"}}"#)
            .expect(1)
            .create_async()
            .await;
        let fresh_items = server
            .mock("GET", "/items/my/items")
            .match_header("authorization", "Bearer fresh")
            .with_status(200)
            .with_body(r#"{"data":{"id":"mine"}}"#)
            .create_async()
            .await;
        let fresh_me = server
            .mock("GET", "/users/me")
            .match_header("authorization", "Bearer fresh")
            .with_status(200)
            .with_body(r#"{"data":{"id":"me"}}"#)
            .create_async()
            .await;

        let tokens = Rc::new(MemoryTokens::new(Some("expired"), Some("ref-1")));
        let client = client_for(&server, tokens);

        let (mine, me) = futures::join!(
            client.get::<Probe>("/items/my/items"),
            client.get::<Probe>("/users/me"),
        );
        assert_eq!(mine.unwrap().id, "mine");
        assert_eq!(me.unwrap().id, "me");

        stale_items.assert_async().await;
        stale_me.assert_async().await;
        refresh.assert_async().await;
        fresh_items.assert_async().await;
        fresh_me.assert_async().await;
    }

    #[tokio::test]
    async fn delete_accepts_empty_response_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/items/abc")
            .with_status(204)
            .create_async()
            .await;

        let tokens = Rc::new(MemoryTokens::new(Some("tok-1"), None));
        let client = client_for(&server, tokens);

        client.delete("/items/abc").await.unwrap();
        mock.assert_async().await;
    }
}
