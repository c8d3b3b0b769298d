pub mod user_service_errors;
