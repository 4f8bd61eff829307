//! Registration and login against the `users` table.
//!
//! Validation and credential checks are plain functions over row values, so
//! they are unit-testable without a database; the queries themselves run
//! over the shared [`PgPool`].

use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::errors::AppError;
use crate::models::User;

/// Column list shared across queries to avoid repetition.
const USER_COLUMNS: &str = "id, username, email, password_hash, created_at";

/// Registers a new account.
///
/// Existence is pre-checked with a single query; the window between check
/// and insert is closed by the unique constraints, whose violation is also
/// surfaced as [`AppError::DuplicateIdentity`]. The plaintext password never
/// touches storage, only its Argon2id digest does.
pub async fn register(
    pool: &PgPool,
    username: &str,
    email: &str,
    password: &str,
) -> Result<User, AppError> {
    let (username, email) = validate_registration(username, email, password)?;

    if find_by_username_or_email(pool, &username, &email)
        .await?
        .is_some()
    {
        return Err(AppError::DuplicateIdentity);
    }

    let password_hash =
        hash_password(password).map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))?;

    let query = format!(
        "INSERT INTO users (id, username, email, password_hash)
         VALUES ($1, $2, $3, $4)
         RETURNING {USER_COLUMNS}"
    );
    sqlx::query_as::<_, User>(&query)
        .bind(Uuid::new_v4())
        .bind(&username)
        .bind(&email)
        .bind(&password_hash)
        .fetch_one(pool)
        .await
        .map_err(classify_insert_error)
}

/// Checks a username/password pair, returning the matching user.
///
/// Unknown username and wrong password fail with the same
/// [`AppError::InvalidCredentials`]; nothing in the response distinguishes
/// the two cases.
pub async fn authenticate(
    pool: &PgPool,
    username: &str,
    password: &str,
) -> Result<User, AppError> {
    let user = find_by_username(pool, username.trim()).await?;
    verify_credentials(user, password)
}

async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");
    sqlx::query_as::<_, User>(&query)
        .bind(username)
        .fetch_optional(pool)
        .await
}

async fn find_by_username_or_email(
    pool: &PgPool,
    username: &str,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1 OR email = $2");
    sqlx::query_as::<_, User>(&query)
        .bind(username)
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Validates registration input, returning the trimmed username and email
/// that get stored. Both identity fields are trimmed before any duplicate
/// check so padded and unpadded forms name the same account.
fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(String, String), AppError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::Validation(
            "username cannot be empty".to_string(),
        ));
    }

    let email = email.trim();
    if !valid_email(email) {
        return Err(AppError::Validation(
            "email address is not valid".to_string(),
        ));
    }

    if password.is_empty() {
        return Err(AppError::Validation(
            "password cannot be empty".to_string(),
        ));
    }

    Ok((username.to_string(), email.to_string()))
}

/// Minimal syntactic check: one `@` with a non-empty local part and a
/// dotted domain. Deliverability is not this layer's problem.
fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Resolves the uniform credential check over an optional user row.
fn verify_credentials(user: Option<User>, password: &str) -> Result<User, AppError> {
    let Some(user) = user else {
        return Err(AppError::InvalidCredentials);
    };

    let matches = verify_password(password, &user.password_hash)
        .map_err(|e| anyhow::anyhow!("stored password hash is malformed: {e}"))?;

    if matches {
        Ok(user)
    } else {
        Err(AppError::InvalidCredentials)
    }
}

/// Maps an insert failure: a unique-constraint violation means the identity
/// lost the race with a concurrent registration, anything else is a plain
/// database error.
fn classify_insert_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::DuplicateIdentity
        }
        _ => AppError::Database(err),
    }
}
