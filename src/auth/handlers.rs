use axum::{
    extract::{FromRef, Path, State},
    routing::{post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{
        dto::{
            LoginRequest, LoginResponse, PublicUser, RegisterRequest, RegisterResponse,
            UpdateProfileRequest, UpdateProfileResponse,
        },
        repo::{NewUser, ProfileChanges, User},
        services::{hash_password, is_valid_email, verify_password, AuthUser, JwtKeys},
    },
    error::AppError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/update-profile/:id", put(update_profile))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AppError::Validation("Invalid email".into()));
    }
    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(AppError::Validation("Password too short".into()));
    }

    let hash = hash_password(&payload.password)?;

    // No pre-insert existence check: the UNIQUE constraint on email is the
    // arbiter, so concurrent registrations cannot both win.
    let user = match User::create(
        &state.db,
        NewUser {
            name: payload.name.trim(),
            email: &payload.email,
            password_hash: &hash,
            date_of_birth: payload.date_of_birth.as_deref(),
            city: payload.city.as_deref(),
            skills: payload.skills.as_deref(),
            experience: payload.experience.as_deref(),
            career_goal: payload.career_goal.as_deref(),
            qualification: payload.qualification.as_deref(),
        },
    )
    .await
    {
        Ok(u) => u,
        Err(e) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => {
            warn!(email = %payload.email, "email already registered");
            return Err(AppError::Conflict("Email already registered.".into()));
        }
        Err(e) => return Err(AppError::Database(e)),
    };

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(RegisterResponse {
        message: "Account created successfully!",
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.email = payload.email.trim().to_lowercase();

    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %payload.email, "login unknown email");
            return Err(AppError::Unauthorized("Invalid email or password".into()));
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(email = %payload.email, user_id = %user.id, "login invalid password");
        return Err(AppError::Unauthorized("Invalid email or password".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login success",
        token,
        user: PublicUser::from(user),
    }))
}

/// Overwrites the mutable profile columns for one user. The token must belong
/// to the same user id as the path.
#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(caller_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>, AppError> {
    if caller_id != id {
        warn!(caller_id = %caller_id, target = %id, "profile update for another user");
        return Err(AppError::Forbidden);
    }

    let affected = User::update_profile(
        &state.db,
        id,
        ProfileChanges {
            name: payload.name,
            city: payload.city,
            skills: payload.skills,
            experience: payload.experience,
            qualification: payload.qualification,
            career_goal: payload.career_goal,
            date_of_birth: payload.date_of_birth,
        },
    )
    .await?;

    if affected == 0 {
        warn!(user_id = %id, "profile update for unknown user");
        return Err(AppError::NotFound("User not found".into()));
    }

    info!(user_id = %id, "profile updated");
    Ok(Json(UpdateProfileResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_response_shape() {
        let json = serde_json::to_string(&RegisterResponse {
            message: "Account created successfully!",
        })
        .unwrap();
        assert_eq!(json, r#"{"message":"Account created successfully!"}"#);
    }

    #[test]
    fn update_response_shape() {
        let json = serde_json::to_string(&UpdateProfileResponse { success: true }).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }
}
