use axum_test::TestServer;
use coloc_server::core::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-do-not-reuse";

/// Build an AppState backed by the per-test database.
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool, TEST_JWT_SECRET.to_string()))
}

/// Build a TestServer around the full application router.
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = coloc_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Mint a JWT for a fixture user without going through /auth/login.
pub fn create_test_jwt(user_id: i64, email: &str, jwt_secret: &str) -> String {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Claims {
        exp: usize,
        iat: usize,
        id: i64,
        email: String,
    }

    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::hours(24))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        exp: expiration,
        iat: now.timestamp() as usize,
        id: user_id,
        email: email.to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Failed to create JWT token")
}
