//! InvitationRepository - database access for invitations.

use chrono::Utc;
use sqlx::{Error, QueryBuilder, Sqlite, SqlitePool};

use super::{Create, Delete, Read};
use crate::dtos::{CreateInvitationDTO, InvitationFilter};
use crate::entities::{InvitableKind, Invitation, InvitationStatus};

const COLUMNS: &str = "invitation_id, invitable_kind, invitable_id, recipient_id, \
                       source_type, status, message, version, created_at";

pub struct InvitationRepository {
    connection_pool: SqlitePool,
}

impl InvitationRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Check whether a waiting invitation already links this recipient to
    /// this invitable; creation refuses duplicates.
    pub async fn has_waiting_invitation(
        &self,
        recipient_id: &i64,
        kind: InvitableKind,
        invitable_id: &i64,
    ) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM invitations \
             WHERE recipient_id = ? AND invitable_kind = ? AND invitable_id = ? AND status = 'waiting'",
        )
        .bind(recipient_id)
        .bind(kind)
        .bind(invitable_id)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(count > 0)
    }

    /// One page of invitations targeting an invitable, newest first, with
    /// the unpaged total.
    pub async fn find_page_by_invitable(
        &self,
        kind: InvitableKind,
        invitable_id: &i64,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Invitation>, i64), Error> {
        let items = sqlx::query_as::<_, Invitation>(&format!(
            "SELECT {COLUMNS} FROM invitations \
             WHERE invitable_kind = ? AND invitable_id = ? \
             ORDER BY created_at DESC, invitation_id DESC LIMIT ? OFFSET ?"
        ))
        .bind(kind)
        .bind(invitable_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.connection_pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM invitations WHERE invitable_kind = ? AND invitable_id = ?",
        )
        .bind(kind)
        .bind(invitable_id)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok((items, total))
    }

    /// Filtered search, newest first, with the unpaged total.
    pub async fn search(
        &self,
        filter: &InvitationFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Invitation>, i64), Error> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM invitations"));
        Self::push_filters(&mut query, filter);
        query.push(" ORDER BY created_at DESC, invitation_id DESC LIMIT ");
        query.push_bind(limit);
        query.push(" OFFSET ");
        query.push_bind(offset);

        let items = query
            .build_query_as::<Invitation>()
            .fetch_all(&self.connection_pool)
            .await?;

        let mut count: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(*) FROM invitations");
        Self::push_filters(&mut count, filter);

        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.connection_pool)
            .await?;

        Ok((items, total))
    }

    /// Optimistic status transition: a single conditional UPDATE guarded by
    /// the `waiting` status and the row version. Returns the number of rows
    /// affected; zero means another writer answered first (or the invitation
    /// was already terminal).
    pub async fn mark_answered(
        &self,
        invitation_id: &i64,
        expected_version: i64,
        status: InvitationStatus,
    ) -> Result<u64, Error> {
        let result = sqlx::query(
            "UPDATE invitations SET status = ?, version = version + 1 \
             WHERE invitation_id = ? AND status = 'waiting' AND version = ?",
        )
        .bind(status)
        .bind(invitation_id)
        .bind(expected_version)
        .execute(&self.connection_pool)
        .await?;

        Ok(result.rows_affected())
    }

    fn push_filters(query: &mut QueryBuilder<'_, Sqlite>, filter: &InvitationFilter) {
        let mut prefix = " WHERE ";
        if let Some(recipient_id) = filter.recipient_id {
            query.push(prefix).push("recipient_id = ").push_bind(recipient_id);
            prefix = " AND ";
        }
        if let Some(kind) = filter.invitable_kind {
            query.push(prefix).push("invitable_kind = ").push_bind(kind);
            prefix = " AND ";
        }
        if let Some(status) = filter.status {
            query.push(prefix).push("status = ").push_bind(status);
            prefix = " AND ";
        }
        if let Some(source_type) = filter.source_type {
            query.push(prefix).push("source_type = ").push_bind(source_type);
        }
    }
}

impl Create<Invitation, CreateInvitationDTO> for InvitationRepository {
    async fn create(&self, data: &CreateInvitationDTO) -> Result<Invitation, Error> {
        let now = Utc::now();
        let status = InvitationStatus::Waiting;

        let result = sqlx::query(
            "INSERT INTO invitations \
             (invitable_kind, invitable_id, recipient_id, source_type, status, message, version, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, 0, ?)",
        )
        .bind(data.invitable_kind)
        .bind(data.invitable_id)
        .bind(data.recipient_id)
        .bind(data.source_type)
        .bind(status)
        .bind(&data.message)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(Invitation {
            invitation_id: result.last_insert_rowid(),
            invitable_kind: data.invitable_kind,
            invitable_id: data.invitable_id,
            recipient_id: data.recipient_id,
            source_type: data.source_type,
            status,
            message: data.message.clone(),
            version: 0,
            created_at: now,
        })
    }
}

impl Read<Invitation, i64> for InvitationRepository {
    async fn read(&self, id: &i64) -> Result<Option<Invitation>, Error> {
        let invitation = sqlx::query_as::<_, Invitation>(&format!(
            "SELECT {COLUMNS} FROM invitations WHERE invitation_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(invitation)
    }
}

impl Delete<i64> for InvitationRepository {
    /// Deleting an absent invitation succeeds; delete is idempotent for
    /// callers.
    async fn delete(&self, id: &i64) -> Result<(), Error> {
        sqlx::query("DELETE FROM invitations WHERE invitation_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
