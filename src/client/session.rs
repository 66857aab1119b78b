/**
 * Session Controller
 *
 * Owns the authentication lifecycle: startup token validation, sign-in,
 * sign-up and logout. State changes go through a small reducer so the UI
 * and the async request functions share one set of transitions.
 */

use crate::client::api::ApiClient;
use crate::shared::auth::{LoginData, LoginResponse, RegisterData, User};
use crate::shared::error::{ApiError, CredentialStoreError};
use thiserror::Error;

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// Startup validation has not finished yet
    Checking,
    Authenticated,
    NotAuthenticated,
}

/// Authentication state
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub token: Option<String>,
    pub user: Option<User>,
    /// User-facing error, empty when there is nothing to show
    pub error_message: String,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            status: AuthStatus::Checking,
            token: None,
            user: None,
            error_message: String::new(),
        }
    }
}

/// Transitions of [`AuthState`]
#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    Authenticated { token: String, user: User },
    AddError(String),
    RemoveError,
    NotAuthenticated,
    Logout,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(&mut self, action: AuthAction) {
        match action {
            AuthAction::Authenticated { token, user } => {
                self.status = AuthStatus::Authenticated;
                self.token = Some(token);
                self.user = Some(user);
                self.error_message.clear();
            }
            AuthAction::AddError(message) => {
                self.status = AuthStatus::NotAuthenticated;
                self.token = None;
                self.user = None;
                self.error_message = message;
            }
            AuthAction::RemoveError => self.error_message.clear(),
            AuthAction::NotAuthenticated | AuthAction::Logout => {
                self.status = AuthStatus::NotAuthenticated;
                self.token = None;
                self.user = None;
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}

/// Session failures; `Display` is the message shown to the user
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid email and password")]
    InvalidCredentials,

    #[error("Invalid inputs")]
    InvalidInput,

    #[error("Check your inputs: email cannot be already registered and all inputs are required")]
    Registration,

    #[error("Unable to reach the server")]
    Unreachable(#[source] ApiError),

    #[error("Unexpected response from the server")]
    UnexpectedResponse(#[source] ApiError),

    #[error("Unable to save your session")]
    Storage(#[from] CredentialStoreError),
}

impl SessionError {
    /// Map everything but status errors; `on_status` decides those.
    fn from_api(err: ApiError, on_status: impl FnOnce(&ApiError) -> SessionError) -> Self {
        match err {
            ApiError::Status { .. } => on_status(&err),
            ApiError::Transport(_) => SessionError::Unreachable(err),
            ApiError::Decode { .. } => SessionError::UnexpectedResponse(err),
            ApiError::Credentials(e) => SessionError::Storage(e),
        }
    }
}

/// Outcome of validating the stored token at startup
#[derive(Debug, Clone)]
pub enum StoredSession {
    /// Nothing stored; no request was made
    Missing,
    /// The backend refused the token
    Rejected,
    /// Token accepted, carrying the rotated token and the user
    Valid(LoginResponse),
}

/// `POST /auth/login`, persisting the issued token on success
pub async fn request_sign_in(
    client: &ApiClient,
    data: &LoginData,
) -> Result<LoginResponse, SessionError> {
    let response: LoginResponse = client
        .post("/auth/login", data)
        .await
        .map_err(|e| {
            SessionError::from_api(e, |e| {
                tracing::debug!("Login rejected: {:?}", e.backend_message());
                if e.backend_message().is_some() {
                    SessionError::InvalidCredentials
                } else {
                    SessionError::InvalidInput
                }
            })
        })?;
    client.credentials().set_token(&response.token)?;
    Ok(response)
}

/// `POST /usuarios`, persisting the issued token on success
pub async fn request_sign_up(
    client: &ApiClient,
    data: &RegisterData,
) -> Result<LoginResponse, SessionError> {
    let response: LoginResponse = client
        .post("/usuarios", data)
        .await
        .map_err(|e| {
            SessionError::from_api(e, |e| {
                tracing::debug!("Signup rejected: {:?}", e.first_validation_message());
                if e.first_validation_message().is_some() {
                    SessionError::Registration
                } else {
                    SessionError::InvalidInput
                }
            })
        })?;
    client.credentials().set_token(&response.token)?;
    Ok(response)
}

/// Validate the stored token against `GET /auth`.
///
/// A rejected token is removed from the store. On success the rotated
/// token replaces the stored one.
pub async fn request_stored_session(client: &ApiClient) -> Result<StoredSession, SessionError> {
    let store = client.credentials();
    if store.get_token()?.is_none() {
        return Ok(StoredSession::Missing);
    }

    match client.get::<LoginResponse>("/auth").await {
        Ok(response) => {
            store.set_token(&response.token)?;
            Ok(StoredSession::Valid(response))
        }
        Err(ApiError::Status { status, .. }) => {
            tracing::info!("Stored session rejected with status {}", status);
            store.remove_token()?;
            Ok(StoredSession::Rejected)
        }
        Err(e) => Err(SessionError::from_api(e, |_| SessionError::InvalidInput)),
    }
}

/// Session controller: the auth state plus the client it talks through
#[derive(Debug, Clone)]
pub struct SessionController {
    client: ApiClient,
    state: AuthState,
}

impl SessionController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: AuthState::new(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn status(&self) -> AuthStatus {
        self.state.status
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.state.token.as_deref()
    }

    pub fn error_message(&self) -> &str {
        &self.state.error_message
    }

    pub fn remove_error(&mut self) {
        self.state.reduce(AuthAction::RemoveError);
    }

    /// Apply the result of [`request_sign_in`] or [`request_sign_up`]
    pub fn apply_auth_result(
        &mut self,
        result: Result<LoginResponse, SessionError>,
    ) -> Result<(), SessionError> {
        match result {
            Ok(LoginResponse { token, user }) => {
                tracing::info!("Authenticated as {}", user.email);
                self.state.reduce(AuthAction::Authenticated { token, user });
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Authentication failed: {:?}", e);
                self.state.reduce(AuthAction::AddError(e.to_string()));
                Err(e)
            }
        }
    }

    /// Apply the result of [`request_stored_session`].
    ///
    /// Any failure resolves to `NotAuthenticated`; the session never stays
    /// in `Checking`.
    pub fn apply_stored_session(
        &mut self,
        result: Result<StoredSession, SessionError>,
    ) -> Result<AuthStatus, SessionError> {
        match result {
            Ok(StoredSession::Valid(LoginResponse { token, user })) => {
                tracing::info!("Restored session for {}", user.email);
                self.state.reduce(AuthAction::Authenticated { token, user });
                Ok(self.status())
            }
            Ok(StoredSession::Missing) | Ok(StoredSession::Rejected) => {
                self.state.reduce(AuthAction::NotAuthenticated);
                Ok(self.status())
            }
            Err(e) => {
                tracing::error!("Startup session check failed: {}", e);
                self.state.reduce(AuthAction::NotAuthenticated);
                Err(e)
            }
        }
    }

    pub async fn sign_in(&mut self, data: LoginData) -> Result<(), SessionError> {
        let result = request_sign_in(&self.client, &data).await;
        self.apply_auth_result(result)
    }

    pub async fn sign_up(&mut self, data: RegisterData) -> Result<(), SessionError> {
        let result = request_sign_up(&self.client, &data).await;
        self.apply_auth_result(result)
    }

    /// Run once at startup
    pub async fn check_stored_session(&mut self) -> Result<AuthStatus, SessionError> {
        let result = request_stored_session(&self.client).await;
        self.apply_stored_session(result)
    }

    /// Forget the session locally and on disk.
    ///
    /// State is reset even when the token file cannot be removed.
    pub fn log_out(&mut self) -> Result<(), SessionError> {
        let removed = self.client.credentials().remove_token();
        self.state.reduce(AuthAction::Logout);
        tracing::info!("Logged out");
        removed.map_err(SessionError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role: "USER_ROLE".to_string(),
            active: true,
            federated_login: false,
            avatar_url: None,
        }
    }

    #[test]
    fn test_auth_state_starts_checking() {
        let state = AuthState::new();
        assert_eq!(state.status, AuthStatus::Checking);
        assert!(state.token.is_none());
        assert!(state.user.is_none());
        assert!(!state.has_error());
    }

    #[test]
    fn test_authenticated_requires_token_and_user() {
        let mut state = AuthState::new();
        state.reduce(AuthAction::Authenticated {
            token: "t".to_string(),
            user: user(),
        });
        assert!(state.is_authenticated());
        assert!(state.token.is_some() && state.user.is_some());

        state.reduce(AuthAction::Logout);
        assert_eq!(state.status, AuthStatus::NotAuthenticated);
        assert!(state.token.is_none() && state.user.is_none());
    }

    #[test]
    fn test_add_error_drops_session() {
        let mut state = AuthState::new();
        state.reduce(AuthAction::AddError("Invalid inputs".to_string()));
        assert_eq!(state.status, AuthStatus::NotAuthenticated);
        assert_eq!(state.error_message, "Invalid inputs");

        state.reduce(AuthAction::RemoveError);
        assert!(!state.has_error());
        assert_eq!(state.status, AuthStatus::NotAuthenticated);
    }

    #[test]
    fn test_successful_auth_clears_previous_error() {
        let mut state = AuthState::new();
        state.reduce(AuthAction::AddError("Invalid inputs".to_string()));
        state.reduce(AuthAction::Authenticated {
            token: "t".to_string(),
            user: user(),
        });
        assert!(!state.has_error());
    }

    #[test]
    fn test_session_error_messages() {
        assert_eq!(SessionError::InvalidCredentials.to_string(), "Invalid email and password");
        assert_eq!(SessionError::InvalidInput.to_string(), "Invalid inputs");
        assert!(SessionError::Registration.to_string().starts_with("Check your inputs"));
    }

    #[test]
    fn test_status_mapping_defers_to_callback() {
        let err = ApiError::status(400, serde_json::json!({ "msg": "x" }));
        let mapped = SessionError::from_api(err, |_| SessionError::InvalidCredentials);
        assert!(matches!(mapped, SessionError::InvalidCredentials));

        let err = ApiError::decode("bad");
        let mapped = SessionError::from_api(err, |_| SessionError::InvalidCredentials);
        assert!(matches!(mapped, SessionError::UnexpectedResponse(_)));
    }
}
