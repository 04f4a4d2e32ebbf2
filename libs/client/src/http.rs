//! Authenticated backend client with transparent token refresh
//!
//! Every backend call goes through [`BackendClient`]: it attaches the bearer
//! access token, and on a 401 performs exactly one refresh-and-replay before
//! giving up. A failed refresh is terminal: both credentials are cleared and
//! subscribers of the session store are notified so the surface can redirect
//! to the login entry point.

use reqwest::{Client, Method, Response, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{ClientError, ClientResult};
use crate::models::{DataEnvelope, TokenGrant};
use crate::session::SessionStore;

/// Token-exchange endpoint accepting a refresh token
pub const REFRESH_PATH: &str = "/api/auth/v2/refresh";

/// HTTP client for the FrameHub backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl BackendClient {
    /// Create a client against the given backend base URL
    pub fn new(http: Client, base_url: impl Into<String>, session: SessionStore) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            session,
        }
    }

    /// Session store backing this client
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
    ) -> ClientResult<Response> {
        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(access) = self
            .session
            .get()
            .await
            .and_then(|tokens| tokens.access_token)
        {
            builder = builder.bearer_auth(access);
        }

        if let Some(body) = body {
            builder = builder.json(body);
        }

        Ok(builder.send().await?)
    }

    /// Execute a request, refreshing the session and replaying once if the
    /// first attempt is rejected as unauthorized.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<Response> {
        let url = self.url(path);
        let response = self.send_once(&method, &url, body.as_ref()).await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        // At most one refresh attempt per logical call
        self.refresh_session().await?;
        self.send_once(&method, &url, body.as_ref()).await
    }

    /// Exchange the stored refresh token for a new credential pair.
    ///
    /// Any failure here is terminal: the session is cleared so that
    /// subscribers can send the user back to login.
    async fn refresh_session(&self) -> ClientResult<()> {
        let Some(refresh_token) = self
            .session
            .get()
            .await
            .and_then(|tokens| tokens.refresh_token)
        else {
            warn!("Access token rejected and no refresh token is stored");
            self.session.clear().await;
            return Err(ClientError::Auth);
        };

        let url = self.url(REFRESH_PATH);
        let result = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "refreshToken": &refresh_token }))
            .send()
            .await;

        let response = match result {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                warn!(status = %response.status(), "Token refresh rejected");
                self.session.clear().await;
                return Err(ClientError::Auth);
            }
            Err(error) => {
                warn!("Token refresh transport failure: {}", error);
                self.session.clear().await;
                return Err(ClientError::Auth);
            }
        };

        let envelope: DataEnvelope<TokenGrant> = match response.json().await {
            Ok(envelope) => envelope,
            Err(error) => {
                warn!("Token refresh returned an unreadable payload: {}", error);
                self.session.clear().await;
                return Err(ClientError::Auth);
            }
        };

        let Some(tokens) = envelope.data.into_tokens(Some(refresh_token)) else {
            self.session.clear().await;
            return Err(ClientError::Auth);
        };

        info!("Session refreshed");
        self.session.set(tokens).await;

        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        if !status.is_success() {
            return Err(Self::backend_error(status, response).await);
        }
        Ok(response.json().await?)
    }

    async fn backend_error(status: StatusCode, response: Response) -> ClientError {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        ClientError::Backend {
            status: status.as_u16(),
            message,
        }
    }

    /// GET request decoding a JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.send(Method::GET, path, None).await?;
        Self::decode(response).await
    }

    /// POST request with a JSON body, decoding a JSON response
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        let response = self.send(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// PUT request with a JSON body, decoding a JSON response
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        let response = self.send(Method::PUT, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// DELETE request, optionally with a JSON body, decoding a JSON response
    pub async fn delete_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<T> {
        let body = body.map(serde_json::to_value).transpose()?;
        let response = self.send(Method::DELETE, path, body).await?;
        Self::decode(response).await
    }

    /// Execute a write whose response body is irrelevant; only success or
    /// the extracted backend message matter.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<()> {
        let response = self.send(method, path, body).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::backend_error(status, response).await)
    }
}
