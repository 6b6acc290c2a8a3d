//! Integration tests for the announcement and group CRUD endpoints.
//!
//! Covers:
//! - POST /announcements, GET/PATCH /announcements/{id}
//! - POST /groups, GET/PATCH /groups/{id}
//! - GET /users/{id}

mod common;

#[cfg(test)]
mod announcement_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::SqlitePool;

    fn token_for(user_id: i64, email: &str) -> String {
        create_test_jwt(user_id, email, TEST_JWT_SECRET)
    }

    // ============================================================
    // POST /announcements - create_announcement
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "announcements")))]
    async fn test_proposal_user_creates_announcement(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        // A fresh proposal account without an announcement yet
        let register = server
            .post("/auth/register")
            .json(&json!({
                "email": "owner@example.com",
                "password": "Password123",
                "kind": "proposal"
            }))
            .await;
        register.assert_status(StatusCode::CREATED);
        let user: serde_json::Value = register.json();
        let user_id = user["user_id"].as_i64().unwrap();

        let token = token_for(user_id, "owner@example.com");
        let body = json!({
            "title": "Bright studio near the station",
            "description": "Fifth floor with elevator."
        });

        let response = server
            .post("/announcements")
            .authorization_bearer(&token)
            .json(&body)
            .await;

        response.assert_status(StatusCode::CREATED);
        let announcement: serde_json::Value = response.json();
        assert_eq!(announcement["creator_id"], user_id);
        assert_eq!(announcement["title"], "Bright studio near the station");
        assert_eq!(announcement["status"], "enabled");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "announcements")))]
    async fn test_search_user_cannot_create_announcement(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());
        let token = token_for(2, "bob@example.com");

        let body = json!({ "title": "Not my role" });

        let response = server
            .post("/announcements")
            .authorization_bearer(&token)
            .json(&body)
            .await;

        response.assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "announcements")))]
    async fn test_second_announcement_is_rejected(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());
        // alice already owns announcement 1
        let token = token_for(1, "alice@example.com");

        let body = json!({ "title": "A second listing" });

        let response = server
            .post("/announcements")
            .authorization_bearer(&token)
            .json(&body)
            .await;

        response.assert_status_conflict();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "announcements")))]
    async fn test_announcement_title_too_short(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());
        // erin owns announcement 2, so use a fresh proposal account
        let register = server
            .post("/auth/register")
            .json(&json!({
                "email": "tiny@example.com",
                "password": "Password123",
                "kind": "proposal"
            }))
            .await;
        let user: serde_json::Value = register.json();
        let user_id = user["user_id"].as_i64().unwrap();
        let token = token_for(user_id, "tiny@example.com");

        let body = json!({ "title": "ab" });

        let response = server
            .post("/announcements")
            .authorization_bearer(&token)
            .json(&body)
            .await;

        response.assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "announcements")))]
    async fn test_announcement_missing_title(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());
        let register = server
            .post("/auth/register")
            .json(&json!({
                "email": "untitled@example.com",
                "password": "Password123",
                "kind": "proposal"
            }))
            .await;
        let user: serde_json::Value = register.json();
        let user_id = user["user_id"].as_i64().unwrap();
        let token = token_for(user_id, "untitled@example.com");

        let response = server
            .post("/announcements")
            .authorization_bearer(&token)
            .json(&json!({}))
            .await;

        response.assert_status_bad_request();
        Ok(())
    }

    // ============================================================
    // GET/PATCH /announcements/{id}
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "announcements")))]
    async fn test_get_announcement(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());
        let token = token_for(2, "bob@example.com");

        let response = server
            .get("/announcements/1")
            .authorization_bearer(&token)
            .await;

        response.assert_status_ok();
        let announcement: serde_json::Value = response.json();
        assert_eq!(announcement["announcement_id"], 1);
        assert_eq!(announcement["title"], "Sunny room near Belleville");
        assert_eq!(announcement["status"], "enabled");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "announcements")))]
    async fn test_get_missing_announcement(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());
        let token = token_for(2, "bob@example.com");

        let response = server
            .get("/announcements/999")
            .authorization_bearer(&token)
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "announcements")))]
    async fn test_creator_updates_announcement_status(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());
        let token = token_for(1, "alice@example.com");

        let response = server
            .patch("/announcements/1")
            .authorization_bearer(&token)
            .json(&json!({ "status": "filled" }))
            .await;

        response.assert_status_ok();
        let announcement: serde_json::Value = response.json();
        assert_eq!(announcement["status"], "filled");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "announcements")))]
    async fn test_non_creator_cannot_update_announcement(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());
        let token = token_for(2, "bob@example.com");

        let response = server
            .patch("/announcements/1")
            .authorization_bearer(&token)
            .json(&json!({ "status": "disabled" }))
            .await;

        response.assert_status_forbidden();
        Ok(())
    }

    // ============================================================
    // POST /groups and GET/PATCH /groups/{id}
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "groups")))]
    async fn test_search_user_creates_group(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());
        // frank has no group yet
        let token = token_for(6, "frank@example.com");

        let body = json!({
            "name": "Quiet east-side flatshare",
            "description": "Two people, no parties."
        });

        let response = server
            .post("/groups")
            .authorization_bearer(&token)
            .json(&body)
            .await;

        response.assert_status(StatusCode::CREATED);
        let group: serde_json::Value = response.json();
        assert_eq!(group["creator_id"], 6);
        assert_eq!(group["name"], "Quiet east-side flatshare");
        assert_eq!(group["status"], "opened");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "groups")))]
    async fn test_proposal_user_cannot_create_group(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());
        let token = token_for(1, "alice@example.com");

        let response = server
            .post("/groups")
            .authorization_bearer(&token)
            .json(&json!({ "name": "Wrong side" }))
            .await;

        response.assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "groups")))]
    async fn test_second_group_is_rejected(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());
        // carol already owns group 1
        let token = token_for(3, "carol@example.com");

        let response = server
            .post("/groups")
            .authorization_bearer(&token)
            .json(&json!({ "name": "Another crew" }))
            .await;

        response.assert_status_conflict();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "groups")))]
    async fn test_creator_closes_group(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());
        let token = token_for(3, "carol@example.com");

        let response = server
            .patch("/groups/1")
            .authorization_bearer(&token)
            .json(&json!({ "status": "closed" }))
            .await;

        response.assert_status_ok();
        let group: serde_json::Value = response.json();
        assert_eq!(group["status"], "closed");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "groups")))]
    async fn test_get_missing_group(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());
        let token = token_for(2, "bob@example.com");

        let response = server.get("/groups/999").authorization_bearer(&token).await;

        response.assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // GET /users/{id} - get_user_by_id
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_get_user_by_id(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());
        let token = token_for(1, "alice@example.com");

        let response = server.get("/users/2").authorization_bearer(&token).await;

        response.assert_status_ok();
        let user: serde_json::Value = response.json();
        assert_eq!(user["user_id"], 2);
        assert_eq!(user["kind"], "search");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_get_missing_user(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());
        let token = token_for(1, "alice@example.com");

        let response = server.get("/users/999").authorization_bearer(&token).await;

        response.assert_status_not_found();
        Ok(())
    }
}
