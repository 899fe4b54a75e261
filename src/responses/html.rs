use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_with_status(200, markup)
}

pub fn html_with_status(status: u16, markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// An htmx fragment that also updates the browser's address bar.
pub fn html_fragment(markup: Markup, push_url: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("HX-Push-Url", push_url)
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Serves a compiled-in asset with a day of browser caching.
pub fn asset_response(content_type: &str, body: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header("Cache-Control", "public, max-age=86400")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
