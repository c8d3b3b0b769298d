use lambda_runtime::Error;
use shared::models::cognito::CognitoTriggerEvent;
use tracing::info;

/// Logs users as they sign in. Cognito gets its event back untouched.
#[derive(Clone, Default)]
pub struct SignInNotifier;

impl SignInNotifier {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(&self, event: CognitoTriggerEvent) -> Result<CognitoTriggerEvent, Error> {
        info!(
            username = %event.user_name(),
            trigger_source = %event.trigger_source(),
            "User signed in, mark user as online"
        );
        Ok(event)
    }
}
