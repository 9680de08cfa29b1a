//! Investment Handlers
//!
//! HTTP handlers for the investment endpoints. All routes sit behind the
//! authorization middleware; the owning user id always comes from the
//! verified token via [`AuthUser`], never from the request body, so a
//! request can only ever touch the caller's own records.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::error::AuthError;
use crate::backend::investments::db::{
    self, Investment, InvestmentFields, INVESTMENT_KINDS,
};
use crate::backend::middleware::auth::AuthUser;

/// Request body for creating or updating an investment
#[derive(Deserialize, Serialize, Debug)]
pub struct InvestmentRequest {
    pub amount: f64,
    pub kind: String,
    pub asset_name: String,
    /// Defaults to "now" when omitted
    pub happened_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub returns: Option<f64>,
}

impl InvestmentRequest {
    /// Validate and normalize into the field set the store accepts
    fn into_fields(self) -> Result<InvestmentFields, AuthError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(AuthError::validation("amount", "Amount must be positive"));
        }

        if !INVESTMENT_KINDS.contains(&self.kind.as_str()) {
            return Err(AuthError::validation(
                "kind",
                format!("Kind must be one of: {}", INVESTMENT_KINDS.join(", ")),
            ));
        }

        if self.asset_name.trim().is_empty() {
            return Err(AuthError::validation(
                "asset_name",
                "Asset name is required",
            ));
        }

        Ok(InvestmentFields {
            amount: self.amount,
            kind: self.kind,
            asset_name: self.asset_name.trim().to_string(),
            happened_at: self.happened_at.unwrap_or_else(Utc::now),
            description: self.description.map(|d| d.trim().to_string()).unwrap_or_default(),
            returns: self.returns.unwrap_or(0.0),
        })
    }
}

/// List the caller's investments
pub async fn list_investments(
    State(pool): State<Option<PgPool>>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Investment>>, AuthError> {
    let pool = pool.ok_or(AuthError::StoreUnavailable)?;

    let investments = db::list_for_user(&pool, user.user_id).await?;
    Ok(Json(investments))
}

/// Create an investment for the caller
pub async fn create_investment(
    State(pool): State<Option<PgPool>>,
    AuthUser(user): AuthUser,
    Json(request): Json<InvestmentRequest>,
) -> Result<(StatusCode, Json<Investment>), AuthError> {
    let pool = pool.ok_or(AuthError::StoreUnavailable)?;
    let fields = request.into_fields()?;

    let investment = db::insert_for_user(&pool, user.user_id, fields).await?;

    tracing::info!(
        "investment created: {} for user {}",
        investment.id,
        user.user_id
    );
    Ok((StatusCode::CREATED, Json(investment)))
}

/// Update one of the caller's investments
pub async fn update_investment(
    State(pool): State<Option<PgPool>>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<InvestmentRequest>,
) -> Result<Json<Investment>, AuthError> {
    let pool = pool.ok_or(AuthError::StoreUnavailable)?;
    let fields = request.into_fields()?;

    let investment = db::update_for_user(&pool, user.user_id, id, fields)
        .await?
        .ok_or(AuthError::NotFound)?;

    Ok(Json(investment))
}

/// Delete one of the caller's investments
pub async fn delete_investment(
    State(pool): State<Option<PgPool>>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AuthError> {
    let pool = pool.ok_or(AuthError::StoreUnavailable)?;

    if !db::delete_for_user(&pool, user.user_id, id).await? {
        return Err(AuthError::NotFound);
    }

    Ok(Json(MessageResponse::ok("investment deleted")))
}
