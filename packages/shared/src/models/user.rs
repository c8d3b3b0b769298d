use serde::{Deserialize, Serialize};

use crate::models::cognito::CognitoTriggerEvent;

/// The user record written to the users table, keyed by `username`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(rename = "email-verified")]
    pub email_verified: bool,
}

impl User {
    pub fn new(username: String, email: String, email_verified: bool) -> Self {
        User {
            username,
            email,
            email_verified,
        }
    }

    /// Builds the record for a confirmed user.
    ///
    /// Cognito has already validated the sign-up, so missing attributes are
    /// not rejected: no `email` gives an empty email, and only the exact
    /// string `"true"` counts as a verified email.
    pub fn from_confirmation(event: &CognitoTriggerEvent) -> Self {
        User::new(
            event.user_name().to_string(),
            event.user_attribute("email").unwrap_or_default().to_string(),
            event.user_attribute("email_verified") == Some("true"),
        )
    }
}
