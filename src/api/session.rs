//! Session API endpoints.
//!
//! Authentication is mocked: any non-empty credentials sign in the demo
//! identity, and tokens are opaque UUIDs the frontend simply echoes back.
//! Real credential checks are out of scope for the MVP backend.

use axum::{extract::State, Json};
use uuid::Uuid;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{AuthSession, LoginRequest, RegisterRequest, SubscriptionTier, User};
use crate::AppState;

fn demo_user() -> User {
    User {
        id: "1".to_string(),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        avatar: Some("https://via.placeholder.com/150".to_string()),
        role: "creator".to_string(),
        subscription: SubscriptionTier::Premium,
    }
}

/// POST /api/auth/login - Sign in with the demo identity.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<AuthSession> {
    if request.email.trim().is_empty() || request.password.trim().is_empty() {
        return error(
            AppError::Validation("Email and password are required".to_string()),
            state.store.revision(),
        );
    }

    let user = demo_user();
    state.store.set_user(user.clone());

    success(
        AuthSession {
            user,
            token: Uuid::new_v4().to_string(),
        },
        state.store.revision(),
    )
}

/// POST /api/auth/register - Create a free-tier identity from the request.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<AuthSession> {
    if request.name.trim().is_empty()
        || request.email.trim().is_empty()
        || request.password.trim().is_empty()
    {
        return error(
            AppError::Validation("Name, email and password are required".to_string()),
            state.store.revision(),
        );
    }

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        email: request.email,
        avatar: Some("https://via.placeholder.com/150".to_string()),
        role: "creator".to_string(),
        subscription: SubscriptionTier::Free,
    };
    state.store.set_user(user.clone());

    success(
        AuthSession {
            user,
            token: Uuid::new_v4().to_string(),
        },
        state.store.revision(),
    )
}

/// POST /api/auth/logout - Clear the signed-in identity.
pub async fn logout(State(state): State<AppState>) -> ApiResult<()> {
    state.store.logout();
    success((), state.store.revision())
}

/// GET /api/auth/profile - The signed-in identity, 404 when signed out.
pub async fn profile(State(state): State<AppState>) -> ApiResult<User> {
    let snapshot = state.store.snapshot();
    match snapshot.user {
        Some(user) => success(user, snapshot.revision),
        None => error(
            AppError::NotFound("No user is signed in".to_string()),
            snapshot.revision,
        ),
    }
}
