pub mod config;
pub mod models;
pub mod repositories;
pub mod services;
pub mod telemetry;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;
