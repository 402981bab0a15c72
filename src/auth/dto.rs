use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo::User;

/// Request body for user registration. The client sends camelCase keys.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: Option<String>,
    pub city: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub career_goal: Option<String>,
    pub qualification: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after login: the user record minus the password hash,
/// plus a signed access token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub user: PublicUser,
}

/// Request body for the profile update. Every named column is overwritten;
/// an absent field is written as NULL.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub city: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub qualification: Option<String>,
    pub career_goal: Option<String>,
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub success: bool,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub date_of_birth: Option<String>,
    pub city: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub career_goal: Option<String>,
    pub qualification: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            date_of_birth: user.date_of_birth,
            city: user.city,
            skills: user.skills,
            experience: user.experience,
            career_goal: user.career_goal,
            qualification: user.qualification,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_accepts_camel_case_keys() {
        let body = r#"{
            "name": "Asha",
            "email": "asha@example.com",
            "password": "s3cretpass",
            "dateOfBirth": "2001-04-12",
            "careerGoal": "data engineer"
        }"#;
        let req: RegisterRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.date_of_birth.as_deref(), Some("2001-04-12"));
        assert_eq!(req.career_goal.as_deref(), Some("data engineer"));
        assert!(req.skills.is_none());
    }

    #[test]
    fn public_user_never_carries_the_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: Some("Asha".into()),
            email: "asha@example.com".into(),
            password_hash: "$argon2id$fake".into(),
            date_of_birth: None,
            city: None,
            skills: None,
            experience: None,
            career_goal: None,
            qualification: None,
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&PublicUser::from(user)).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
        assert!(json.contains("asha@example.com"));
    }
}
