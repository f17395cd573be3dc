/**
 * Authentication Module
 *
 * Login and registration calls plus the form state the auth view renders.
 * Neither call needs a session; both return the new session and profile.
 */

use reqwest::Client;
use thiserror::Error;

use crate::egui_app::config::ClientConfig;
use crate::shared::{AuthResponse, Credentials, ErrorBody};

/// Shortest password the registration form accepts
pub const MIN_PASSWORD_LEN: usize = 6;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Authentication form state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub error: Option<String>,
    pub loading: bool,
    /// Account name of the last successful login
    pub account: Option<String>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.loading = false;
    }
}

/// Client-side checks shared by both forms.
pub fn validate_login(credentials: &Credentials) -> Result<(), AuthError> {
    if credentials.account_name.trim().is_empty() || credentials.password.is_empty() {
        return Err(AuthError::InvalidInput(
            "Account name and password are required".to_string(),
        ));
    }
    Ok(())
}

/// Registration additionally enforces [`MIN_PASSWORD_LEN`].
pub fn validate_registration(credentials: &Credentials) -> Result<(), AuthError> {
    validate_login(credentials)?;
    if credentials.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::InvalidInput(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Login with account name and password
pub async fn login(
    http: &Client,
    config: &ClientConfig,
    credentials: &Credentials,
) -> Result<AuthResponse, AuthError> {
    validate_login(credentials)?;
    tracing::info!("Login request for: {}", credentials.account_name);
    authenticate(http, &config.api_url(LOGIN_PATH), credentials).await
}

/// Register a new account
pub async fn register(
    http: &Client,
    config: &ClientConfig,
    credentials: &Credentials,
) -> Result<AuthResponse, AuthError> {
    validate_registration(credentials)?;
    tracing::info!("Registration request for: {}", credentials.account_name);
    authenticate(http, &config.api_url(REGISTER_PATH), credentials).await
}

async fn authenticate(http: &Client, url: &str, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
    let response = http.post(url).json(credentials).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Authentication failed")
                    .to_string()
            });
        tracing::warn!("Authentication rejected with status {}", status);
        return Err(AuthError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| AuthError::Decode(e.to_string()))
}
