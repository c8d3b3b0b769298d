use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A Cognito user pool trigger event.
///
/// Only the fields the triggers read are typed. Everything else is kept in
/// `extra` so the event can be handed back to Cognito exactly as received.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CognitoTriggerEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_context: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub request: TriggerRequest,
    #[serde(default, deserialize_with = "null_as_default")]
    pub response: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TriggerRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_attributes: HashMap<String, String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub client_metadata: HashMap<String, String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Cognito sends `null` for empty maps; treat it like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CognitoTriggerEvent {
    /// The top-level `userName`, empty when Cognito did not send one.
    pub fn user_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or_default()
    }

    pub fn user_attribute(&self, key: &str) -> Option<&str> {
        self.request.user_attributes.get(key).map(String::as_str)
    }

    pub fn trigger_source(&self) -> &str {
        self.trigger_source.as_deref().unwrap_or_default()
    }
}
