//! Investment Model and Database Operations
//!
//! All operations take the owning user id and bake it into the WHERE
//! clause; update and delete affect zero rows when the record belongs to a
//! different user, which the handlers surface as 404.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Accepted investment kinds
pub const INVESTMENT_KINDS: [&str; 6] = [
    "stock",
    "bond",
    "mutual-fund",
    "crypto",
    "real-estate",
    "other",
];

/// Investment record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Investment {
    /// Unique record ID (UUID)
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Invested amount
    pub amount: f64,
    /// Investment kind (one of [`INVESTMENT_KINDS`])
    pub kind: String,
    /// Name of the asset
    pub asset_name: String,
    /// When the investment happened
    pub happened_at: DateTime<Utc>,
    /// Free-form description
    pub description: String,
    /// Returns so far
    pub returns: f64,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Field set for creating or updating an investment
#[derive(Debug, Clone)]
pub struct InvestmentFields {
    pub amount: f64,
    pub kind: String,
    pub asset_name: String,
    pub happened_at: DateTime<Utc>,
    pub description: String,
    pub returns: f64,
}

/// List all investments owned by a user, newest first
pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Investment>, sqlx::Error> {
    sqlx::query_as::<_, Investment>(
        r#"
        SELECT id, user_id, amount, kind, asset_name, happened_at, description, returns, created_at, updated_at
        FROM investments
        WHERE user_id = $1
        ORDER BY happened_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Insert a new investment for a user
pub async fn insert_for_user(
    pool: &PgPool,
    user_id: Uuid,
    fields: InvestmentFields,
) -> Result<Investment, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Investment>(
        r#"
        INSERT INTO investments (id, user_id, amount, kind, asset_name, happened_at, description, returns, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, user_id, amount, kind, asset_name, happened_at, description, returns, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(fields.amount)
    .bind(&fields.kind)
    .bind(&fields.asset_name)
    .bind(fields.happened_at)
    .bind(&fields.description)
    .bind(fields.returns)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Update an investment owned by a user
///
/// Returns `None` when no record matches both the id and the owner.
pub async fn update_for_user(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    fields: InvestmentFields,
) -> Result<Option<Investment>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Investment>(
        r#"
        UPDATE investments
        SET amount = $1, kind = $2, asset_name = $3, happened_at = $4, description = $5, returns = $6, updated_at = $7
        WHERE id = $8 AND user_id = $9
        RETURNING id, user_id, amount, kind, asset_name, happened_at, description, returns, created_at, updated_at
        "#,
    )
    .bind(fields.amount)
    .bind(&fields.kind)
    .bind(&fields.asset_name)
    .bind(fields.happened_at)
    .bind(&fields.description)
    .bind(fields.returns)
    .bind(now)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Delete an investment owned by a user
///
/// Returns `false` when no record matched both the id and the owner.
pub async fn delete_for_user(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM investments
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
