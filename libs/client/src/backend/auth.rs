//! Authentication, user, and profile facade

use reqwest::Method;
use tracing::warn;

use crate::error::{ClientError, ClientResult};
use crate::http::BackendClient;
use crate::models::{DataEnvelope, Me, TokenGrant, UpdateUserRequest, User};
use crate::session::SessionTokens;
use crate::validation;

const LOGIN_PATH: &str = "/api/auth/v2/login";
const REGISTER_PATH: &str = "/api/auth/v2/register";
const ME_PATH: &str = "/api/auth/v2/me";
const USERS_PATH: &str = "/api/auth/v2/users";

/// Facade over the auth service
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: BackendClient,
}

impl AuthApi {
    /// Create the facade
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Authenticate with email and password.
    ///
    /// On success the returned credential pair is also stored in the
    /// session, so subsequent calls are authenticated.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<SessionTokens> {
        validation::validate_email(email)?;
        validation::validate_password(password)?;

        let body = serde_json::json!({ "email": email, "password": password });
        let envelope: DataEnvelope<TokenGrant> =
            self.client.post_json(LOGIN_PATH, &body).await?;

        let tokens = envelope.data.into_tokens(None).ok_or(ClientError::Backend {
            status: 200,
            message: "Login response carried no access token".to_string(),
        })?;

        self.client.session().set(tokens.clone()).await;
        Ok(tokens)
    }

    /// Create an account; the caller signs in separately afterwards
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> ClientResult<()> {
        validation::validate_name(name)?;
        validation::validate_email(email)?;
        validation::validate_password(password)?;
        validation::validate_password_confirmation(password, confirm_password)?;

        let body = serde_json::json!({ "name": name, "email": email, "password": password });
        self.client
            .execute(Method::POST, REGISTER_PATH, Some(body))
            .await
    }

    /// Identity of the authenticated user, or `None` when the session is
    /// not (or no longer) valid
    pub async fn me(&self) -> Option<Me> {
        match self.client.get_json::<DataEnvelope<Me>>(ME_PATH).await {
            Ok(envelope) => Some(envelope.data),
            Err(error) => {
                warn!("Viewer identity unavailable: {}", error);
                None
            }
        }
    }

    /// All registered users; degrades to empty on failure
    pub async fn all_users(&self) -> Vec<User> {
        match self.client.get_json::<Vec<User>>(USERS_PATH).await {
            Ok(users) => users,
            Err(error) => {
                warn!("User list read degraded to empty: {}", error);
                Vec::new()
            }
        }
    }

    /// A single user record, or `None` when absent
    pub async fn user_by_id(&self, id: &str) -> Option<User> {
        let path = format!("{}/{}", USERS_PATH, urlencoding::encode(id));
        match self.client.get_json::<User>(&path).await {
            Ok(user) => Some(user),
            Err(ClientError::NotFound) => None,
            Err(error) => {
                warn!("User read failed: {}", error);
                None
            }
        }
    }

    /// Search users by name; degrades to empty on failure
    pub async fn search_users(&self, name: &str) -> Vec<User> {
        let path = format!("{}/search?name={}", USERS_PATH, urlencoding::encode(name));
        match self.client.get_json::<Vec<User>>(&path).await {
            Ok(users) => users,
            Err(error) => {
                warn!("User search degraded to empty: {}", error);
                Vec::new()
            }
        }
    }

    /// Update the profile fields of a user (owner only, enforced server-side)
    pub async fn update_user(&self, id: &str, update: &UpdateUserRequest) -> ClientResult<()> {
        validation::validate_name(&update.name)?;

        let path = format!("{}/{}", USERS_PATH, urlencoding::encode(id));
        let body = serde_json::to_value(update)?;
        self.client.execute(Method::PUT, &path, Some(body)).await
    }
}
