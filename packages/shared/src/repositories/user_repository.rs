use crate::models::user::User;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;
use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::Client;
use serde_dynamo::to_item;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

pub struct DynamoDbUserRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbUserRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Writes the user keyed by username, replacing any existing item.
    async fn put_user(&self, user: &User) -> Result<(), UserRepositoryError>;

    fn table_name(&self) -> String;
}

#[async_trait]
impl UserRepository for DynamoDbUserRepository {
    async fn put_user(&self, user: &User) -> Result<(), UserRepositoryError> {
        let item = to_item(user).map_err(|e| UserRepositoryError::Serialization(e.to_string()))?;
        // No condition expression: concurrent confirmations are last write wins.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| UserRepositoryError::DynamoDb(DisplayErrorContext(&e).to_string()))?;
        debug!(table = %self.table_name, username = %user.username, "PutItem succeeded");
        Ok(())
    }

    fn table_name(&self) -> String {
        self.table_name.clone()
    }
}
