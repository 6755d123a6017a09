/*
 * Responsibility
 * - GET /feed behind OptionalAuth: same route for anonymous and signed-in callers
 */
use axum::Json;

use crate::api::v1::{dto::accounts::FeedResponse, extractors::MaybeUser};

pub async fn feed(MaybeUser(user): MaybeUser) -> Json<FeedResponse> {
    let res = match user {
        Some(user) => FeedResponse {
            authenticated: true,
            greeting: format!("Welcome back, {}", user.account.user_name),
        },
        None => FeedResponse {
            authenticated: false,
            greeting: "Welcome, guest".to_string(),
        },
    };

    Json(res)
}
