use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};

use crate::{
    error::AppError,
    users::{
        dto::{CreateUserRequest, UpdateUserRequest},
        repo::{StoreError, UserRepo},
        repo_types::{NewUser, User, UserChanges},
    },
};

const NOT_FOUND: &str = "User not found";

/// Dot-atom local part and a domain of two or more hostname labels: no empty
/// labels, no leading, trailing or doubled dots on either side of the `@`.
pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(concat!(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
            r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+",
            r"[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?$",
        ))
        .expect("email pattern compiles");
    }
    email.len() <= 254 && EMAIL_RE.is_match(email)
}

fn check_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::InvalidInput("name must not be empty".into()));
    }
    Ok(())
}

/// Trims surrounding whitespace, checks the address shape and lowercases the
/// domain so `a@EXAMPLE.com` and `a@example.com` are the same mailbox.
fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim();
    let invalid = || AppError::InvalidInput("email is not a valid email address".into());
    if !is_valid_email(email) {
        return Err(invalid());
    }
    let (local, domain) = email.rsplit_once('@').ok_or_else(invalid)?;
    Ok(format!("{local}@{}", domain.to_ascii_lowercase()))
}

pub async fn create_user(repo: &dyn UserRepo, req: CreateUserRequest) -> Result<User, AppError> {
    check_name(&req.name)?;
    let email = normalize_email(&req.email)?;

    let user = repo
        .create(NewUser {
            name: req.name,
            email,
        })
        .await
        .map_err(|e| {
            if matches!(e, StoreError::DuplicateEmail) {
                warn!("create rejected: email already registered");
            }
            AppError::from(e)
        })?;

    info!(user_id = user.id, "user created");
    Ok(user)
}

pub async fn list_users(repo: &dyn UserRepo, skip: i64, limit: i64) -> Result<Vec<User>, AppError> {
    // Out-of-range paging yields fewer rows, never an error.
    let users = repo.list(skip.max(0), limit.max(0)).await?;
    Ok(users)
}

pub async fn get_user(repo: &dyn UserRepo, id: i64) -> Result<User, AppError> {
    repo.find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))
}

pub async fn update_user(
    repo: &dyn UserRepo,
    id: i64,
    req: UpdateUserRequest,
) -> Result<User, AppError> {
    if let Some(name) = &req.name {
        check_name(name)?;
    }
    let email = req.email.as_deref().map(normalize_email).transpose()?;

    let changes = UserChanges {
        name: req.name,
        email,
    };
    let user = repo
        .update(id, changes)
        .await
        .map_err(|e| {
            if matches!(e, StoreError::DuplicateEmail) {
                warn!(user_id = id, "update rejected: email already registered");
            }
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    info!(user_id = user.id, "user updated");
    Ok(user)
}

pub async fn delete_user(repo: &dyn UserRepo, id: i64) -> Result<(), AppError> {
    if !repo.delete(id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    info!(user_id = id, "user deleted");
    Ok(())
}
