/*
 * Responsibility
 * - v1 URL structure
 * - which routes sit behind which auth policy (one sub-router per policy, merged)
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{
    accounts::{get_account, me},
    feed::feed,
    health::health,
};
use crate::middleware::auth::{self, Policy};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/health", get(health));

    let members = auth::apply(
        Router::new().route("/me", get(me)),
        state.clone(),
        Policy::Required,
    );

    let admins = auth::apply(
        Router::new().route("/admin/accounts/{account_id}", get(get_account)),
        state.clone(),
        Policy::Admin,
    );

    let anyone = auth::apply(
        Router::new().route("/feed", get(feed)),
        state,
        Policy::Optional,
    );

    public.merge(members).merge(admins).merge(anyone)
}
