//! User management service.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::{PageRequest, UserRepository};
use crate::error::AppError;
use crate::utils::credential::hash_credential;

/// Service for managing users.
///
/// Raw credentials never leave this service: they are hashed before being
/// handed to the repository.
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self, page: PageRequest) -> Result<Vec<User>, AppError> {
        self.repository.list(page).await
    }

    /// Retrieves a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the handle is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, handle: String, password: &str) -> Result<User, AppError> {
        if self.repository.find_by_handle(&handle).await?.is_some() {
            return Err(AppError::conflict(
                "Handle already taken",
                json!({ "handle": handle }),
            ));
        }

        let user = self
            .repository
            .create(NewUser {
                handle,
                credential_hash: hash_credential(password),
            })
            .await?;
        tracing::info!(user_id = user.id, handle = %user.handle, "User created");

        Ok(user)
    }

    /// Replaces handle and credential of a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if the handle belongs to another user.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn replace_user(
        &self,
        id: i64,
        handle: String,
        password: &str,
    ) -> Result<User, AppError> {
        let current = self.get_user(id).await?;

        if current.handle != handle
            && let Some(existing) = self.repository.find_by_handle(&handle).await?
            && existing.id != id
        {
            return Err(AppError::conflict(
                "Handle already taken",
                json!({ "handle": handle }),
            ));
        }

        self.repository
            .replace(
                id,
                NewUser {
                    handle,
                    credential_hash: hash_credential(password),
                },
            )
            .await
    }

    /// Deletes a user together with their ratings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<User, AppError> {
        let user = self.repository.delete(id).await?;
        tracing::info!(user_id = id, "User deleted");

        Ok(user)
    }

    /// Counts all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
