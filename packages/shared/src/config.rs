use std::env;

pub const DEFAULT_USERS_TABLE: &str = "users";

/// Where confirmed users are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub table_name: String,
}

impl StoreConfig {
    /// Reads `USERS_TABLE`, then `DB_NAME`, then falls back to `users`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = ["USERS_TABLE", "DB_NAME"]
            .iter()
            .filter_map(|key| lookup(key))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_USERS_TABLE.to_string());

        StoreConfig { table_name }
    }
}
