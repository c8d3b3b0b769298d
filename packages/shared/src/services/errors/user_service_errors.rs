use crate::repositories::errors::user_repository_errors::UserRepositoryError;

#[derive(Debug)]
pub enum UserServiceError {
    Serialization(String),
    RepositoryError(UserRepositoryError),
}

impl std::fmt::Display for UserServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserServiceError::Serialization(msg) => {
                write!(f, "Failed to render user as JSON: {}", msg)
            }
            UserServiceError::RepositoryError(err) => write!(f, "Repository error: {}", err),
        }
    }
}

impl std::error::Error for UserServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UserServiceError::RepositoryError(err) => Some(err),
            UserServiceError::Serialization(_) => None,
        }
    }
}

impl From<UserRepositoryError> for UserServiceError {
    fn from(err: UserRepositoryError) -> Self {
        UserServiceError::RepositoryError(err)
    }
}
