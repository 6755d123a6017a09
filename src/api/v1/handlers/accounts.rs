/*
 * Responsibility
 * - GET /me: the identity attached by RequireAuth
 * - GET /admin/accounts/{account_id}: admin-only lookup (RequireAdmin)
 */
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    api::v1::{dto::accounts::AccountResponse, extractors::CurrentUser},
    error::AppError,
    state::AppState,
};

pub async fn me(CurrentUser(user): CurrentUser) -> Json<AccountResponse> {
    Json(user.account.into())
}

pub async fn get_account(
    State(state): State<AppState>,
    CurrentUser(admin): CurrentUser,
    Path(account_id): Path<Uuid>,
) -> Result<Json<AccountResponse>, AppError> {
    tracing::info!(admin_id = %admin.account.id, %account_id, "admin account lookup");

    let account = state
        .accounts
        .find_by_id(account_id)
        .await?
        .ok_or(AppError::not_found("account"))?;

    Ok(Json(account.into()))
}
