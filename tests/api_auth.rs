//! Integration tests for the authentication endpoints.
//!
//! Covers:
//! - POST /auth/register
//! - POST /auth/login
//! - the Bearer-token middleware guarding the protected routes
//!
//! `#[sqlx::test]` provisions an isolated database per test, applies the
//! migrations from `migrations/` and loads the listed fixtures.

mod common;

#[cfg(test)]
mod auth_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::SqlitePool;

    // ============================================================
    // POST /auth/register - register_user
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_register_success(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let body = json!({
            "email": "newuser@example.com",
            "password": "Password123",
            "kind": "search"
        });

        let response = server.post("/auth/register").json(&body).await;

        response.assert_status(StatusCode::CREATED);
        let user: serde_json::Value = response.json();

        assert!(user.get("user_id").is_some(), "User should have an id");
        assert_eq!(user["email"], "newuser@example.com");
        assert_eq!(user["kind"], "search");
        assert_eq!(user["status"], "enabled");
        assert!(
            user.get("password").is_none(),
            "Password hash must not be serialized"
        );

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_register_duplicate_email(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let body = json!({
            "email": "alice@example.com",
            "password": "Password123",
            "kind": "search"
        });

        let response = server.post("/auth/register").json(&body).await;

        response.assert_status_conflict();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_register_invalid_email(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let body = json!({
            "email": "not-an-email",
            "password": "Password123",
            "kind": "search"
        });

        let response = server.post("/auth/register").json(&body).await;

        response.assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_register_password_too_short(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let body = json!({
            "email": "short@example.com",
            "password": "abc",
            "kind": "proposal"
        });

        let response = server.post("/auth/register").json(&body).await;

        response.assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_register_unknown_kind(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let body = json!({
            "email": "weird@example.com",
            "password": "Password123",
            "kind": "landlord"
        });

        let response = server.post("/auth/register").json(&body).await;

        // 422 when the body fails to deserialize
        response.assert_status_unprocessable_entity();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_register_missing_password(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let body = json!({
            "email": "nopass@example.com",
            "kind": "search"
        });

        let response = server.post("/auth/register").json(&body).await;

        response.assert_status_unprocessable_entity();
        Ok(())
    }

    // ============================================================
    // POST /auth/login - login_user
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_register_then_login(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let register_body = json!({
            "email": "logintest@example.com",
            "password": "TestLogin123",
            "kind": "search"
        });

        let register_response = server.post("/auth/register").json(&register_body).await;
        register_response.assert_status(StatusCode::CREATED);

        let login_body = json!({
            "email": "logintest@example.com",
            "password": "TestLogin123"
        });

        let response = server.post("/auth/login").json(&login_body).await;
        response.assert_status_ok();

        let headers = response.headers();
        assert!(
            headers.get("set-cookie").is_some(),
            "Set-Cookie header should be present"
        );

        let auth_header = headers
            .get("authorization")
            .expect("Authorization header should be present")
            .to_str()
            .unwrap();
        assert!(
            auth_header.starts_with("Bearer "),
            "Authorization should start with 'Bearer '"
        );

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_login_wrong_password(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let register_body = json!({
            "email": "wrongpass@example.com",
            "password": "RightPass123",
            "kind": "search"
        });
        server.post("/auth/register").json(&register_body).await;

        let body = json!({
            "email": "wrongpass@example.com",
            "password": "WrongPass123"
        });

        let response = server.post("/auth/login").json(&body).await;

        response.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_login_nonexistent_user(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let body = json!({
            "email": "ghost@example.com",
            "password": "Password123"
        });

        let response = server.post("/auth/login").json(&body).await;

        response.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_login_missing_password(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let body = json!({
            "email": "alice@example.com"
        });

        let response = server.post("/auth/login").json(&body).await;

        response.assert_status_unprocessable_entity();
        Ok(())
    }

    // ============================================================
    // Bearer-token middleware
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_protected_route_requires_token(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let response = server.get("/users/1").await;

        response.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_protected_route_rejects_garbage_token(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let response = server
            .get("/users/1")
            .authorization_bearer("not.a.jwt")
            .await;

        response.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_protected_route_accepts_valid_token(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let token = create_test_jwt(2, "bob@example.com", TEST_JWT_SECRET);

        let response = server.get("/users/1").authorization_bearer(&token).await;

        response.assert_status_ok();
        let user: serde_json::Value = response.json();
        assert_eq!(user["user_id"], 1);
        assert_eq!(user["email"], "alice@example.com");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_token_for_unknown_account_is_rejected(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        // Structurally valid token but no matching account
        let token = create_test_jwt(999, "nobody@example.com", TEST_JWT_SECRET);

        let response = server.get("/users/1").authorization_bearer(&token).await;

        response.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test]
    async fn test_root_is_public(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let response = server.get("/").await;

        response.assert_status_ok();
        Ok(())
    }
}
