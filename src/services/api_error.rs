use crate::errors::ServerError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Network(String),
    Status(u16, String),
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status(code, body) => write!(f, "API returned {code}: {body}"),
            ApiError::Decode(msg) => write!(f, "Response decode error: {msg}"),
        }
    }
}

impl Error for ApiError {}

impl From<ApiError> for ServerError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status(404, _) => ServerError::NotFound,
            ApiError::Status(401, _) | ApiError::Status(403, _) => {
                ServerError::Unauthorized("remote API rejected the token".into())
            }
            other => ServerError::Upstream(other.to_string()),
        }
    }
}
