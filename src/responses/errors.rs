use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;
use tracing::{error, warn};

pub use crate::errors::ResultResp;

fn log_error(err: &ServerError) {
    match err {
        ServerError::NotFound | ServerError::BadRequest(_) => {}
        ServerError::PayloadTooLarge(limit) => warn!(limit, "request body over the limit"),
        ServerError::Upstream(_) => warn!(error = %err, "upstream failure"),
        ServerError::DbError(_) | ServerError::InternalError => {
            error!(error = %err, "request failed")
        }
    }
}

fn fallback() -> Response {
    Response::new(Body::from("Internal Server Error"))
}

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    log_error(&err);
    html_error_response(err.status(), &err.public_message())
}

/// Build an HTML error page
pub fn html_error_response(status: u16, message: &str) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(error_page(status, message).into_string()))
        .unwrap_or_else(|_| fallback())
}

/// `{"success": false, "message": ...}` with the error's status.
pub fn json_error_response(err: ServerError) -> Response {
    log_error(&err);
    let body = json!({ "success": false, "message": err.public_message() }).to_string();

    ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", "application/json; charset=utf-8")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::from(body))
        .unwrap_or_else(|_| fallback())
}
