use std::sync::Arc;

use tracing::{error, info};

use crate::models::user::User;
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::user_service_errors::UserServiceError;

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository + Send + Sync>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository + Send + Sync>) -> Self {
        UserService { repository }
    }

    /// Unconditionally writes `user` to the users table.
    ///
    /// Failures are logged with the attempted record and returned as-is; the
    /// Lambda platform decides whether the whole invocation is retried.
    pub async fn upsert_user(&self, user: &User) -> Result<(), UserServiceError> {
        let user_json = serde_json::to_string(user).map_err(|e| {
            error!(username = %user.username, error = %e, "Failed to parse User into json format");
            UserServiceError::Serialization(e.to_string())
        })?;

        info!(user = %user_json, "User signed up, migrate user into dynamodb");

        if let Err(e) = self.repository.put_user(user).await {
            error!(user = %user_json, error = %e, "Failed to migrate user into dynamodb");
            return Err(e.into());
        }

        info!(
            user = %user_json,
            table = %self.repository.table_name(),
            "Successfully inserted user into dynamodb"
        );
        Ok(())
    }
}
