//! Access gate: bearer token → verify → account lookup → policy decision → `AuthUser` in extensions
//!
//! One core procedure (`authenticate`) serves three policies:
//! - `Policy::Required`: any failure is a 401 with a message per failure kind
//! - `Policy::Admin`: same core, then the `isAdmin` check; every failure is a 403
//! - `Policy::Optional`: failures are swallowed, the request always proceeds
//!
//! Account store outages are not authentication failures: 500 for the mandatory
//! policies, swallowed (and logged) for the optional one.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthUser;
use crate::error::{AppError, AuthError};
use crate::middleware::auth::extract::extract_token;
use crate::services::accounts::resolve_account;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Required,
    Admin,
    Optional,
}

/// Gate every route of `router` with `policy`.
///
/// Example:
/// ```ignore
/// let admin = Router::new().route("/admin/accounts/{account_id}", get(get_account));
/// let admin = middleware::auth::apply(admin, state.clone(), Policy::Admin);
/// ```
pub fn apply(router: Router<AppState>, state: AppState, policy: Policy) -> Router<AppState> {
    // route_layer: unmatched paths fall through to 404 instead of being gated
    match policy {
        Policy::Required => router.route_layer(middleware::from_fn_with_state(state, require_auth)),
        Policy::Admin => router.route_layer(middleware::from_fn_with_state(state, require_admin)),
        Policy::Optional => {
            router.route_layer(middleware::from_fn_with_state(state, optional_auth))
        }
    }
}

pub async fn require_auth(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    gate(Policy::Required, &state, req, next).await
}

pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    gate(Policy::Admin, &state, req, next).await
}

pub async fn optional_auth(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    gate(Policy::Optional, &state, req, next).await
}

async fn gate(
    policy: Policy,
    state: &AppState,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let admitted = admit(policy, state, &parts.headers, parts.uri.query()).await?;

    // middleware → extractor hand-off; written once, only on success
    if let Some(user) = admitted {
        parts.extensions.insert(user);
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Extract, verify and resolve. Shared by every policy.
pub async fn authenticate(
    state: &AppState,
    headers: &HeaderMap,
    query: Option<&str>,
) -> Result<AuthUser, AuthError> {
    let token = extract_token(headers, query).ok_or(AuthError::NoToken)?;

    let claims = state.tokens.verify(&token)?;

    let account = resolve_account(state.accounts.as_ref(), claims.account_id).await?;

    Ok(AuthUser::new(account, token))
}

/// Policy decision over `authenticate`.
///
/// - `Ok(Some(_))`: admitted with an identity
/// - `Ok(None)`: admitted anonymously (optional policy only)
/// - `Err(_)`: rejected; the error is the response
pub async fn admit(
    policy: Policy,
    state: &AppState,
    headers: &HeaderMap,
    query: Option<&str>,
) -> Result<Option<AuthUser>, AppError> {
    let outcome = authenticate(state, headers, query).await;

    match policy {
        Policy::Required => match outcome {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                log_rejection(policy, &err);
                Err(AppError::from_auth(&err))
            }
        },
        Policy::Admin => match outcome {
            Ok(user) if user.is_admin() => Ok(Some(user)),
            Ok(user) => {
                tracing::warn!(account_id = %user.account.id, "admin role required");
                Err(AppError::from_admin_auth(&AuthError::RoleDenied))
            }
            Err(err) => {
                log_rejection(policy, &err);
                Err(AppError::from_admin_auth(&err))
            }
        },
        Policy::Optional => match outcome {
            Ok(user) => Ok(Some(user)),
            Err(AuthError::NoToken) => Ok(None),
            Err(err) if err.is_infrastructure() => {
                tracing::warn!(error = %err, "optional auth: account store failure, continuing anonymously");
                Ok(None)
            }
            Err(err) => {
                tracing::debug!(error = %err, "optional auth: ignoring credential");
                Ok(None)
            }
        },
    }
}

fn log_rejection(policy: Policy, err: &AuthError) {
    match err {
        AuthError::Store(source) => {
            tracing::error!(?policy, error = %source, "account store failure");
        }
        AuthError::NoToken => {
            tracing::debug!(?policy, "no access token provided");
        }
        _ => {
            tracing::warn!(?policy, error = %err, "access token rejected");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::http::{HeaderValue, StatusCode, header};
    use chrono::Utc;
    use jsonwebtoken::{Algorithm, EncodingKey, Header};
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::error::{MSG_ADMIN_AUTH_FAILED, MSG_ADMIN_REQUIRED, MSG_EXPIRED_TOKEN, MSG_NO_TOKEN};
    use crate::repos::{Account, error::RepoError};
    use crate::services::accounts::{AccountStore, MemoryAccountStore};
    use crate::services::auth::TokenVerifier;

    const SECRET: &str = "policy-test-secret";

    fn account(is_active: bool, is_admin: bool) -> Account {
        Account {
            id: Uuid::new_v4(),
            email: "lee@example.com".into(),
            user_name: "lee".into(),
            is_active,
            is_admin,
            created_at: Utc::now(),
        }
    }

    fn token_for(id: Uuid, exp_offset: i64) -> String {
        let claims = json!({"sub": id.to_string(), "exp": Utc::now().timestamp() + exp_offset});
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    fn state_with(accounts: Vec<Account>) -> AppState {
        AppState::new(
            Arc::new(TokenVerifier::new(SECRET, 0)),
            Arc::new(MemoryAccountStore::with_accounts(accounts)),
        )
    }

    struct DownStore;

    #[async_trait]
    impl AccountStore for DownStore {
        fn backend_name(&self) -> &'static str {
            "down"
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Account>, RepoError> {
            Err(RepoError::Unavailable("timeout".into()))
        }
    }

    #[tokio::test]
    async fn required_admits_active_account_and_keeps_raw_token() {
        let acc = account(true, false);
        let token = token_for(acc.id, 600);
        let state = state_with(vec![acc.clone()]);

        let user = admit(Policy::Required, &state, &bearer(&token), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.account, acc);
        assert_eq!(user.token, token);
    }

    #[tokio::test]
    async fn required_rejects_missing_token() {
        let state = state_with(vec![]);
        let err = admit(Policy::Required, &state, &HeaderMap::new(), None)
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), MSG_NO_TOKEN);
    }

    #[tokio::test]
    async fn required_reports_expired_token() {
        let acc = account(true, false);
        let state = state_with(vec![acc.clone()]);

        let err = admit(Policy::Required, &state, &bearer(&token_for(acc.id, -3600)), None)
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), MSG_EXPIRED_TOKEN);
    }

    #[tokio::test]
    async fn admin_rejects_non_admin_with_403() {
        let acc = account(true, false);
        let state = state_with(vec![acc.clone()]);

        let err = admit(Policy::Admin, &state, &bearer(&token_for(acc.id, 600)), None)
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
        assert_eq!(err.message(), MSG_ADMIN_REQUIRED);
    }

    #[tokio::test]
    async fn admin_reports_auth_failures_as_403() {
        let acc = account(false, true);
        let state = state_with(vec![acc.clone()]);

        for headers in [HeaderMap::new(), bearer("garbage"), bearer(&token_for(acc.id, 600))] {
            let err = admit(Policy::Admin, &state, &headers, None).await.unwrap_err();
            assert_eq!(err.status(), StatusCode::FORBIDDEN);
            assert_eq!(err.message(), MSG_ADMIN_AUTH_FAILED);
        }
    }

    #[tokio::test]
    async fn admin_admits_admin() {
        let acc = account(true, true);
        let state = state_with(vec![acc.clone()]);

        let user = admit(Policy::Admin, &state, &bearer(&token_for(acc.id, 600)), None)
            .await
            .unwrap()
            .unwrap();
        assert!(user.is_admin());
    }

    #[tokio::test]
    async fn optional_swallows_every_failure() {
        let inactive = account(false, false);
        let state = state_with(vec![inactive.clone()]);

        let cases = [
            HeaderMap::new(),
            bearer("garbage"),
            bearer(&token_for(inactive.id, -3600)),
            bearer(&token_for(inactive.id, 600)),
            bearer(&token_for(Uuid::new_v4(), 600)),
        ];
        for headers in cases {
            let admitted = admit(Policy::Optional, &state, &headers, None).await.unwrap();
            assert!(admitted.is_none());
        }
    }

    #[tokio::test]
    async fn store_outage_is_internal_for_mandatory_policies_only() {
        let id = Uuid::new_v4();
        let state = AppState::new(
            Arc::new(TokenVerifier::new(SECRET, 0)),
            Arc::new(DownStore),
        );
        let headers = bearer(&token_for(id, 600));

        for policy in [Policy::Required, Policy::Admin] {
            let err = admit(policy, &state, &headers, None).await.unwrap_err();
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }

        let admitted = admit(Policy::Optional, &state, &headers, None).await.unwrap();
        assert!(admitted.is_none());
    }

    #[tokio::test]
    async fn query_token_is_used_without_header() {
        let acc = account(true, false);
        let token = token_for(acc.id, 600);
        let state = state_with(vec![acc.clone()]);
        let query = format!("token={token}");

        let user = admit(Policy::Required, &state, &HeaderMap::new(), Some(&query))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.account.id, acc.id);
    }
}
