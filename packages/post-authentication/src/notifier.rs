use lambda_runtime::Error;
use shared::models::cognito::CognitoTriggerEvent;
use tracing::info;

const USERNAME_ATTRIBUTE: &str = "username";

#[derive(Clone, Default)]
pub struct PostAuthenticationNotifier;

impl PostAuthenticationNotifier {
    pub fn new() -> Self {
        Self
    }

    /// Logs the `username` user attribute and hands the event back to Cognito.
    pub async fn handle(&self, event: CognitoTriggerEvent) -> Result<CognitoTriggerEvent, Error> {
        let username = event.user_attribute(USERNAME_ATTRIBUTE).unwrap_or_default();

        info!(
            username = %username,
            trigger_source = %event.trigger_source(),
            "User authenticated, mark user as online"
        );
        Ok(event)
    }
}
