pub mod cognito;
pub mod user;
