use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database. The email column carries a UNIQUE
/// constraint; duplicate inserts surface as a unique-violation error.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub date_of_birth: Option<String>,
    pub city: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub career_goal: Option<String>,
    pub qualification: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Column values for a new user row.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub date_of_birth: Option<&'a str>,
    pub city: Option<&'a str>,
    pub skills: Option<&'a str>,
    pub experience: Option<&'a str>,
    pub career_goal: Option<&'a str>,
    pub qualification: Option<&'a str>,
}

/// New values for the mutable profile columns. Every column is overwritten;
/// a None is written as NULL.
#[derive(Debug, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub city: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub qualification: Option<String>,
    pub career_goal: Option<String>,
    pub date_of_birth: Option<String>,
}

const USER_COLUMNS: &str = "id, name, email, password_hash, date_of_birth, city, \
                            skills, experience, career_goal, qualification, created_at";

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert a new user. A duplicate email fails with a unique-violation
    /// database error; the caller maps that to a conflict.
    pub async fn create(db: &PgPool, new: NewUser<'_>) -> Result<User, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users
                (name, email, password_hash, date_of_birth, city,
                 skills, experience, career_goal, qualification)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(new.name)
        .bind(new.email)
        .bind(new.password_hash)
        .bind(new.date_of_birth)
        .bind(new.city)
        .bind(new.skills)
        .bind(new.experience)
        .bind(new.career_goal)
        .bind(new.qualification)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Overwrite the mutable profile columns unconditionally.
    pub async fn update_profile(
        db: &PgPool,
        id: Uuid,
        changes: ProfileChanges,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $1, city = $2, skills = $3, experience = $4,
                qualification = $5, career_goal = $6, date_of_birth = $7
            WHERE id = $8
            "#,
        )
        .bind(changes.name)
        .bind(changes.city)
        .bind(changes.skills)
        .bind(changes.experience)
        .bind(changes.qualification)
        .bind(changes.career_goal)
        .bind(changes.date_of_birth)
        .bind(id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }
}
