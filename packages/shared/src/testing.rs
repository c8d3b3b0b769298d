//! Fakes for exercising the triggers without AWS.

use std::io::Write;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::subscriber::DefaultGuard;

use crate::config::DEFAULT_USERS_TABLE;
use crate::models::user::User;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;
use crate::repositories::user_repository::UserRepository;

/// Records every put. Optionally fails every write with a fixed message.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    pub puts: Arc<Mutex<Vec<User>>>,
    pub failure: Option<String>,
    pub table_name: String,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self {
            puts: Arc::new(Mutex::new(Vec::new())),
            failure: None,
            table_name: DEFAULT_USERS_TABLE.to_string(),
        }
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_with(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn puts(&self) -> Vec<User> {
        self.puts.lock().map(|puts| puts.clone()).unwrap_or_default()
    }

    /// Final table state: later puts for the same username replace earlier ones.
    pub fn stored(&self, username: &str) -> Option<User> {
        self.puts()
            .into_iter()
            .rev()
            .find(|user| user.username == username)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn put_user(&self, user: &User) -> Result<(), UserRepositoryError> {
        if let Some(message) = &self.failure {
            return Err(UserRepositoryError::DynamoDb(message.clone()));
        }
        if let Ok(mut puts) = self.puts.lock() {
            puts.push(user.clone());
        }
        Ok(())
    }

    fn table_name(&self) -> String {
        self.table_name.clone()
    }
}

/// Captures JSON log lines emitted on the current thread while the guard lives.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut buffer) = self.0.lock() {
            buffer.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    pub fn install() -> (Self, DefaultGuard) {
        let capture = LogCapture::default();
        let buffer = capture.buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .with_current_span(false)
            .without_time()
            .with_writer(move || CaptureWriter(buffer.clone()))
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    /// Parsed log entries, one per line.
    pub fn entries(&self) -> Vec<serde_json::Value> {
        let bytes = self
            .buffer
            .lock()
            .map(|buffer| buffer.clone())
            .unwrap_or_default();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    /// Entries at `level` (`"INFO"`, `"ERROR"`, ...).
    pub fn entries_at(&self, level: &str) -> Vec<serde_json::Value> {
        self.entries()
            .into_iter()
            .filter(|entry| entry["level"] == level)
            .collect()
    }
}
