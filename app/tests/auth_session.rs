//! Store-level tests for the admin session: token persistence through the
//! login effect, and clearing on sign-out.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code

use boxoffice_app::auth::{
    AuthAction, AuthEnvironment, AuthGateway, AuthReducer, AuthState, AuthStatus,
};
use boxoffice_client::{ApiError, LoginData, LoginRequest};
use boxoffice_core::environment::SessionStore;
use boxoffice_domain::types::{Admin, AdminId};
use boxoffice_runtime::Store;
use boxoffice_testing::MemorySessionStore;
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Duration;

struct StubLogin(Result<LoginData, String>);

impl AuthGateway for StubLogin {
    fn login(&self, _request: LoginRequest) -> BoxFuture<'static, Result<LoginData, ApiError>> {
        let outcome = self.0.clone();
        Box::pin(async move { outcome.map_err(|message| ApiError::Rejected { message }) })
    }
}

fn admin() -> Admin {
    Admin {
        id: AdminId::new("a1"),
        email: "ops@example.com".to_string(),
        name: "Ops".to_string(),
        role: "admin".to_string(),
        created_at: None,
        updated_at: None,
    }
}

type AuthStore = Store<AuthState, AuthAction, AuthEnvironment, AuthReducer>;

async fn settled(store: &AuthStore) {
    tokio::time::timeout(Duration::from_secs(5), store.until_idle())
        .await
        .expect("auth effects should settle");
}

#[tokio::test]
async fn successful_login_persists_the_token_and_signs_in() {
    let session = Arc::new(MemorySessionStore::new());
    let gateway = StubLogin(Ok(LoginData {
        token: "fresh-token".to_string(),
        admin: admin(),
    }));
    let env = AuthEnvironment::new(Arc::new(gateway), Arc::clone(&session) as Arc<dyn SessionStore>);
    let store = Store::new(AuthState::default(), AuthReducer::new(), env);

    store
        .send(AuthAction::LoginSubmitted {
            email: "ops@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();
    settled(&store).await;

    assert!(store.state(AuthState::is_authenticated).await);
    assert_eq!(session.token().as_deref(), Some("fresh-token"));
    let name = store
        .state(|s| match &s.status {
            AuthStatus::SignedIn { admin } => admin.as_ref().map(|a| a.name.clone()),
            _ => None,
        })
        .await;
    assert_eq!(name.as_deref(), Some("Ops"));
}

#[tokio::test]
async fn rejected_login_leaves_no_session_behind() {
    let session = Arc::new(MemorySessionStore::new());
    let gateway = StubLogin(Err("Invalid credentials".to_string()));
    let env = AuthEnvironment::new(Arc::new(gateway), Arc::clone(&session) as Arc<dyn SessionStore>);
    let store = Store::new(AuthState::default(), AuthReducer::new(), env);

    store
        .send(AuthAction::LoginSubmitted {
            email: "ops@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap();
    settled(&store).await;

    assert!(!store.state(AuthState::is_authenticated).await);
    assert!(session.token().is_none());
    assert_eq!(
        store.state(|s| s.error.clone()).await.as_deref(),
        Some("Invalid credentials")
    );
}

#[tokio::test]
async fn sign_out_clears_the_persisted_token() {
    let session = Arc::new(MemorySessionStore::with_token("old-token"));
    let gateway = StubLogin(Err("unused".to_string()));
    let env = AuthEnvironment::new(Arc::new(gateway), Arc::clone(&session) as Arc<dyn SessionStore>);
    let store = Store::new(AuthState::default(), AuthReducer::new(), env);

    store.send(AuthAction::SessionRestored).await.unwrap();
    assert!(store.state(AuthState::is_authenticated).await);

    store.send(AuthAction::SignOutRequested).await.unwrap();
    settled(&store).await;

    assert!(!store.state(AuthState::is_authenticated).await);
    assert!(session.token().is_none());
}

#[tokio::test]
async fn invalidated_session_is_cleared_and_reported() {
    let session = Arc::new(MemorySessionStore::with_token("stale-token"));
    let gateway = StubLogin(Err("unused".to_string()));
    let env = AuthEnvironment::new(Arc::new(gateway), Arc::clone(&session) as Arc<dyn SessionStore>);
    let store = Store::new(AuthState::default(), AuthReducer::new(), env);

    store.send(AuthAction::SessionInvalidated).await.unwrap();
    settled(&store).await;

    assert!(session.token().is_none());
    assert_eq!(
        store.state(|s| s.error.clone()).await.as_deref(),
        Some("Your session has expired. Please sign in again.")
    );
}
