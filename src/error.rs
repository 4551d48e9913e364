use crate::services::ServiceError;

#[derive(thiserror::Error, Debug)]
pub enum DetailError {
    #[error("no recipe loaded")] NotLoaded,
    #[error("recipe not found")] NotFound,
    #[error("session rejected by server")] Unauthorized,
    #[error("service error: {0}")] Service(ServiceError),
}

impl From<ServiceError> for DetailError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound => DetailError::NotFound,
            ServiceError::Unauthorized => DetailError::Unauthorized,
            other => DetailError::Service(other),
        }
    }
}

pub type DetailResult<T> = Result<T, DetailError>;
