use lambda_runtime::Error;
use shared::models::cognito::CognitoTriggerEvent;
use shared::models::user::User;
use shared::services::errors::user_service_errors::UserServiceError;
use shared::services::user_service::UserService;
use tracing::debug;

/// Copies newly confirmed Cognito users into the users table.
#[derive(Clone)]
pub struct PostConfirmationProcessor {
    user_service: UserService,
}

impl PostConfirmationProcessor {
    pub fn new(user_service: UserService) -> Self {
        Self { user_service }
    }

    /// Returns the event unchanged once the user is stored. A failed write
    /// fails the invocation, which blocks the confirmation in Cognito.
    pub async fn handle(&self, event: CognitoTriggerEvent) -> Result<CognitoTriggerEvent, Error> {
        let user = self.confirm_user(&event).await.map_err(|e| {
            Error::from(format!(
                "Failed to store confirmed user {}: {}",
                event.user_name(),
                e
            ))
        })?;

        debug!(username = %user.username, "Post confirmation complete");
        Ok(event)
    }

    pub async fn confirm_user(&self, event: &CognitoTriggerEvent) -> Result<User, UserServiceError> {
        debug!(trigger_source = %event.trigger_source(), "Processing confirmation event");

        let user = User::from_confirmation(event);
        self.user_service.upsert_user(&user).await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::repositories::errors::user_repository_errors::UserRepositoryError;
    use shared::testing::{InMemoryUserRepository, LogCapture};
    use std::sync::Arc;

    fn processor_with(repository: &InMemoryUserRepository) -> PostConfirmationProcessor {
        PostConfirmationProcessor::new(UserService::new(Arc::new(repository.clone())))
    }

    fn confirmation_event(user_name: &str, attributes: serde_json::Value) -> CognitoTriggerEvent {
        serde_json::from_value(json!({
            "version": "1",
            "triggerSource": "PostConfirmation_ConfirmSignUp",
            "region": "us-east-1",
            "userPoolId": "us-east-1_example",
            "userName": user_name,
            "callerContext": {
                "awsSdkVersion": "aws-sdk-unknown-unknown",
                "clientId": "client-123"
            },
            "request": { "userAttributes": attributes },
            "response": {}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_handle_stores_verified_user() {
        let repository = InMemoryUserRepository::new();
        let processor = processor_with(&repository);
        let event = confirmation_event(
            "alice",
            json!({ "email": "alice@example.com", "email_verified": "true" }),
        );

        let response = processor.handle(event.clone()).await.unwrap();

        assert_eq!(response, event);
        assert_eq!(
            repository.puts(),
            vec![User::new(
                "alice".to_string(),
                "alice@example.com".to_string(),
                true
            )]
        );
    }

    #[tokio::test]
    async fn test_handle_missing_email_verified_stores_false() {
        let repository = InMemoryUserRepository::new();
        let processor = processor_with(&repository);

        processor
            .handle(confirmation_event("bob", json!({ "email": "bob@example.com" })))
            .await
            .unwrap();

        assert_eq!(
            repository.stored("bob"),
            Some(User::new(
                "bob".to_string(),
                "bob@example.com".to_string(),
                false
            ))
        );
    }

    #[tokio::test]
    async fn test_handle_missing_email_stores_empty_string() {
        let repository = InMemoryUserRepository::new();
        let processor = processor_with(&repository);

        processor
            .handle(confirmation_event("carol", json!({ "email_verified": "TRUE" })))
            .await
            .unwrap();

        let stored = repository.stored("carol").unwrap();
        assert_eq!(stored.email, "");
        assert!(!stored.email_verified);
    }

    #[tokio::test]
    async fn test_handle_store_failure_returns_error() {
        let (logs, _guard) = LogCapture::install();
        let repository = InMemoryUserRepository::new().failing_with("ThrottlingException");
        let processor = processor_with(&repository);
        let event = confirmation_event(
            "alice",
            json!({ "email": "alice@example.com", "email_verified": "true" }),
        );

        let err = processor.handle(event).await.unwrap_err();

        assert!(err.to_string().contains("alice"));
        assert!(err.to_string().contains("ThrottlingException"));
        assert!(repository.puts().is_empty());

        let errors = logs.entries_at("ERROR");
        assert_eq!(errors.len(), 1);
        let logged_user = errors[0]["fields"]["user"].as_str().unwrap();
        assert!(logged_user.contains("\"username\":\"alice\""));
        assert!(errors[0]["fields"]["error"]
            .as_str()
            .unwrap()
            .contains("ThrottlingException"));
    }

    #[tokio::test]
    async fn test_confirm_user_failure_leaves_event_unmodified() {
        let repository = InMemoryUserRepository::new().failing_with("AccessDeniedException");
        let processor = processor_with(&repository);
        let event = confirmation_event("dave", json!({ "email": "dave@example.com" }));
        let before = event.clone();

        let result = processor.confirm_user(&event).await;

        match result {
            Err(UserServiceError::RepositoryError(UserRepositoryError::DynamoDb(msg))) => {
                assert_eq!(msg, "AccessDeniedException")
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(event, before);
    }

    #[tokio::test]
    async fn test_handle_same_event_twice_is_last_write_wins() {
        let repository = InMemoryUserRepository::new();
        let processor = processor_with(&repository);
        let event = confirmation_event(
            "alice",
            json!({ "email": "alice@example.com", "email_verified": "true" }),
        );

        processor.handle(event.clone()).await.unwrap();
        processor.handle(event).await.unwrap();

        let puts = repository.puts();
        assert_eq!(puts.len(), 2);
        assert_eq!(puts[0], puts[1]);
        assert_eq!(repository.stored("alice"), Some(puts[0].clone()));
    }

    #[tokio::test]
    async fn test_handle_logs_record_before_and_after_write() {
        let (logs, _guard) = LogCapture::install();
        let repository = InMemoryUserRepository::new();
        let processor = processor_with(&repository);

        processor
            .handle(confirmation_event(
                "erin",
                json!({ "email": "erin@example.com", "email_verified": "false" }),
            ))
            .await
            .unwrap();

        let infos = logs.entries_at("INFO");
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[1]["fields"]["table"], "users");
        for entry in &infos {
            assert_eq!(
                entry["fields"]["user"],
                r#"{"username":"erin","email":"erin@example.com","email-verified":false}"#
            );
        }
        assert!(logs.entries_at("ERROR").is_empty());
    }
}
