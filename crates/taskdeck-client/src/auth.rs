//! Auth Flows
//!
//! Sign-up, sign-in, logout and the entry-point redirect. Sign-up never
//! authenticates by itself; only sign-in writes the session.

use tracing::info;

use crate::api::TaskApi;
use crate::domain::{Credentials, User};
use crate::error::ClientResult;
use crate::gateway::Transport;
use crate::navigation::{Navigator, Route};
use crate::session::{KeyValueStore, Session};

pub const SIGN_UP_FAILED_MESSAGE: &str = "Failed to create account";
pub const SIGN_IN_FAILED_MESSAGE: &str = "Failed to sign in";

/// Registers the account, then sends the user to sign-in
pub async fn sign_up<T: Transport, N: Navigator>(
    api: &TaskApi<T>,
    navigator: &N,
    credentials: &Credentials,
) -> ClientResult<()> {
    credentials.validate_signup()?;
    api.sign_up(credentials).await?;
    info!("account created");
    navigator.navigate(Route::SignIn { registered: true });
    Ok(())
}

/// Authenticates, stores the token and user record, opens the dashboard
pub async fn sign_in<T: Transport, S: KeyValueStore, N: Navigator>(
    api: &TaskApi<T>,
    session: &Session<S>,
    navigator: &N,
    credentials: &Credentials,
) -> ClientResult<User> {
    let response = api.sign_in(credentials).await?;
    session.set_token(&response.access_token);
    session.set_user(&response.user);
    info!("signed in");
    navigator.navigate(Route::Dashboard);
    Ok(response.user)
}

pub fn logout<S: KeyValueStore, N: Navigator>(session: &Session<S>, navigator: &N) {
    session.clear();
    navigator.navigate(Route::sign_in());
}

/// Sends the entry point to the dashboard or to sign-in
pub fn enter<S: KeyValueStore, N: Navigator>(session: &Session<S>, navigator: &N) -> Route {
    let route = Route::resolve_home(session.is_authenticated());
    navigator.navigate(route);
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::ClientError;
    use crate::gateway::ApiGateway;
    use crate::session::MemoryStore;
    use crate::test_support::{RecordingNavigator, ScriptedTransport};
    use serde_json::json;

    fn api(transport: &ScriptedTransport) -> TaskApi<ScriptedTransport> {
        TaskApi::new(ApiGateway::new(ClientConfig::new("http://api.test"), transport.clone()))
    }

    fn user_json() -> serde_json::Value {
        json!({"id": "u-1", "email": "me@example.com", "created_at": "2024-01-01T00:00:00"})
    }

    #[tokio::test]
    async fn test_sign_up_redirects_without_authenticating() {
        let transport = ScriptedTransport::new();
        transport.reply_json(201, user_json());
        let navigator = RecordingNavigator::new();
        let session = Session::new(MemoryStore::new());

        sign_up(&api(&transport), &navigator, &Credentials::new("me@example.com", "longenough"))
            .await
            .unwrap();

        assert_eq!(navigator.last(), Some(Route::SignIn { registered: true }));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_up_short_password_sends_nothing() {
        let transport = ScriptedTransport::new();
        let navigator = RecordingNavigator::new();

        let err = sign_up(&api(&transport), &navigator, &Credentials::new("me@example.com", "short"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(transport.request_count(), 0);
        assert!(navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn test_sign_up_rejected_by_service() {
        let transport = ScriptedTransport::new();
        transport.reply(400, r#"{"error":{"code":"VALIDATION_ERROR","message":"Email already registered"}}"#);
        let navigator = RecordingNavigator::new();

        let err = sign_up(&api(&transport), &navigator, &Credentials::new("me@example.com", "longenough"))
            .await
            .unwrap_err();

        assert_eq!(err.user_message(SIGN_UP_FAILED_MESSAGE), "Email already registered");
        assert!(navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn test_sign_in_populates_session() {
        let transport = ScriptedTransport::new();
        transport.reply_json(
            200,
            json!({"access_token": "jwt-1", "token_type": "bearer", "user": user_json()}),
        );
        let navigator = RecordingNavigator::new();
        let session = Session::new(MemoryStore::new());

        let user = sign_in(&api(&transport), &session, &navigator, &Credentials::new("me@example.com", "pw"))
            .await
            .unwrap();

        assert_eq!(user.email, "me@example.com");
        assert_eq!(session.token().as_deref(), Some("jwt-1"));
        assert_eq!(session.user().unwrap().id, "u-1");
        assert_eq!(navigator.last(), Some(Route::Dashboard));
    }

    #[tokio::test]
    async fn test_sign_in_failure_leaves_session_empty() {
        let transport = ScriptedTransport::new();
        transport.reply(401, r#"{"error":{"code":"UNAUTHORIZED","message":"Invalid credentials"}}"#);
        let navigator = RecordingNavigator::new();
        let session = Session::new(MemoryStore::new());

        let err = sign_in(&api(&transport), &session, &navigator, &Credentials::new("me@example.com", "bad"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(!session.is_authenticated());
        assert!(navigator.routes().is_empty());
    }

    #[test]
    fn test_logout_and_enter() {
        let navigator = RecordingNavigator::new();
        let session = Session::new(MemoryStore::new());
        session.set_token("tok");

        assert_eq!(enter(&session, &navigator), Route::Dashboard);
        logout(&session, &navigator);
        assert!(!session.is_authenticated());
        assert_eq!(enter(&session, &navigator), Route::sign_in());
    }
}
