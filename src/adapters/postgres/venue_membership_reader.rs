//! PostgreSQL implementation of VenueMembershipReader.
//!
//! Reads the `venue_memberships` table. The `(user_id, venue_id)` unique
//! index guarantees at most one row per pair.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{
    DomainError, Timestamp, UserId, ValidationError, VenueId, VenueMembershipId,
};
use crate::domain::venue::{VenueMembership, VenueMembershipStatus, VenueRole};
use crate::ports::VenueMembershipReader;

/// PostgreSQL implementation of the VenueMembershipReader port.
pub struct PostgresVenueMembershipReader {
    pool: PgPool,
}

impl PostgresVenueMembershipReader {
    /// Creates a new PostgresVenueMembershipReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct VenueMembershipRow {
    id: Uuid,
    user_id: String,
    venue_id: String,
    role: String,
    status: String,
    joined_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn corrupt_row(id: Uuid, err: ValidationError) -> DomainError {
    DomainError::database(format!("Corrupt venue membership {}: {}", id, err))
        .with_detail("membership_id", id.to_string())
}

impl TryFrom<VenueMembershipRow> for VenueMembership {
    type Error = DomainError;

    fn try_from(row: VenueMembershipRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let role: VenueRole = row.role.parse().map_err(|e| corrupt_row(id, e))?;
        let status: VenueMembershipStatus = row.status.parse().map_err(|e| corrupt_row(id, e))?;

        Ok(VenueMembership {
            id: VenueMembershipId::from_uuid(id),
            user_id: UserId::new(row.user_id).map_err(|e| corrupt_row(id, e))?,
            venue_id: VenueId::new(row.venue_id).map_err(|e| corrupt_row(id, e))?,
            role,
            status,
            joined_at: Timestamp::from_datetime(row.joined_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

#[async_trait]
impl VenueMembershipReader for PostgresVenueMembershipReader {
    async fn find_membership(
        &self,
        user_id: &UserId,
        venue_id: &VenueId,
    ) -> Result<Option<VenueMembership>, DomainError> {
        let row: Option<VenueMembershipRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, venue_id, role, status, joined_at, updated_at
            FROM venue_memberships
            WHERE user_id = $1 AND venue_id = $2
            "#,
        )
        .bind(user_id.as_str())
        .bind(venue_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to get venue membership: {}", e)))?;

        row.map(VenueMembership::try_from).transpose()
    }
}
