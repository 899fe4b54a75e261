use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, bad input) or downstream layers (DB, upstream catalog).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Payload Too Large: over {0} bytes")]
    PayloadTooLarge(u64),
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Upstream Error: {0}")]
    Upstream(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::PayloadTooLarge(_) => 413,
            ServerError::Upstream(_) => 502,
            ServerError::DbError(_) | ServerError::InternalError => 500,
        }
    }

    /// Message safe to show to a visitor.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::BadRequest(msg) => msg.clone(),
            ServerError::NotFound => "Not Found".to_string(),
            ServerError::PayloadTooLarge(limit) => {
                format!("Request body too large (limit {limit} bytes)")
            }
            ServerError::Upstream(_) => "The catalog is unavailable right now".to_string(),
            ServerError::DbError(_) | ServerError::InternalError => {
                "Internal Server Error".to_string()
            }
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_variant() {
        assert_eq!(ServerError::NotFound.status(), 404);
        assert_eq!(ServerError::BadRequest("x".into()).status(), 400);
        assert_eq!(ServerError::PayloadTooLarge(10).status(), 413);
        assert_eq!(ServerError::DbError("x".into()).status(), 500);
        assert_eq!(ServerError::Upstream("x".into()).status(), 502);
    }

    #[test]
    fn db_details_are_not_public() {
        let err = ServerError::DbError("no such table: trucks".into());
        assert_eq!(err.to_string(), "Database Error: no such table: trucks");
        assert_eq!(err.public_message(), "Internal Server Error");
    }
}
