use crate::app::App;
use crate::catalog::{CatalogQuery, StoreStatus};
use crate::db::{drivers, trucks};
use crate::domain::carousel::Carousel;
use crate::domain::screen::{NavEvent, Screen};
use crate::domain::{NewApplicant, NewListing};
use crate::errors::ServerError;
use crate::responses::{
    asset_response, html_fragment, html_response, html_with_status, json_error_response,
    json_response, preflight_response, ResultResp,
};
use crate::templates::components::{self, hero::SLIDES};
use crate::templates::pages::{self, FormOutcome, HomeVm};
use astra::Request;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::io::Read;
use std::time::Instant;
use tracing::{debug, info};

const MAX_BODY_BYTES: u64 = 64 * 1024;
const STYLESHEET: &str = include_str!("../static/main.css");

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let query = req.uri().query().map(str::to_owned);
    let query = query.as_deref();
    debug!(%method, %path, "request");

    // API failures are reported as JSON, never as an error page.
    if path.starts_with("/api/") {
        return Ok(api(&mut req, &method, &path, app).unwrap_or_else(json_error_response));
    }

    match (method.as_str(), segments(&path).as_slice()) {
        ("GET", ["catalog"]) => catalog_fragment(app, query),
        ("GET", ["hero"]) => html_response(components::hero(&carousel(app, query))),
        ("GET", ["trucks", id]) => truck_fragment(app, id, query),
        ("POST", ["drivers", "register"]) => register_driver(&mut req, app),
        ("GET", ["static", "main.css"]) => asset_response("text/css; charset=utf-8", STYLESHEET),
        ("GET", _) => match NavEvent::from_path(&path) {
            Some(event) => screen(Screen::default().on(event), app, query),
            None => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::NotFound),
    }
}

fn api(req: &mut Request, method: &str, path: &str, app: &App) -> ResultResp {
    match (method, segments(path).as_slice()) {
        ("OPTIONS", _) => preflight_response(),
        ("GET", ["api", "trucks"]) => {
            let listings = app.db.with_conn(|conn| trucks::list_trucks(conn))?;
            json_response(200, &listings)
        }
        ("GET", ["api", "trucks", id]) => {
            let id = parse_id(id)?;
            let listing = app
                .db
                .with_conn(|conn| trucks::get_truck(conn, id))?
                .ok_or(ServerError::NotFound)?;
            json_response(200, &listing)
        }
        ("POST", ["api", "trucks"]) => {
            let input = if is_json(req) {
                read_json::<NewListing>(req)?
            } else {
                NewListing::from_pairs(&read_form(req)?)
            };
            let valid = input.validate()?;
            let id = app.db.with_conn(|conn| trucks::insert_truck(conn, &valid))?;
            info!(id, make = %valid.fields.make, model = %valid.fields.model, "truck listed");
            json_response(200, &json!({ "success": true, "id": id }))
        }
        ("DELETE", ["api", "trucks", id]) => {
            let id = parse_id(id)?;
            if !app.db.with_conn(|conn| trucks::delete_truck(conn, id))? {
                return Err(ServerError::NotFound);
            }
            info!(id, "truck removed");
            json_response(200, &json!({ "success": true }))
        }
        ("GET", ["api", "drivers"]) => {
            let applicants = app.db.with_conn(|conn| drivers::list_drivers(conn))?;
            json_response(200, &applicants)
        }
        ("POST", ["api", "drivers"]) => {
            let input = if is_json(req) {
                read_json::<NewApplicant>(req)?
            } else {
                NewApplicant::from_pairs(&read_form(req)?)
            };
            let valid = input.validate()?;
            let id = app.db.with_conn(|conn| drivers::insert_driver(conn, &valid))?;
            info!(id, "driver registered");
            json_response(
                200,
                &json!({ "success": true, "message": "Driver registered successfully" }),
            )
        }
        _ => Err(ServerError::NotFound),
    }
}

fn screen(screen: Screen, app: &App, query: Option<&str>) -> ResultResp {
    match screen {
        Screen::Home => home(app, query),
        Screen::Inventory => inventory(app, query),
        Screen::Drivers => {
            let applicants = app.db.with_conn(|conn| drivers::list_drivers(conn))?;
            html_response(pages::drivers_page(&applicants, app.assets()))
        }
        Screen::Register => html_response(pages::register_page(&NewApplicant::default(), None)),
        Screen::Financing => html_response(pages::financing_page()),
    }
}

fn home(app: &App, query: Option<&str>) -> ResultResp {
    let catalog_query = CatalogQuery::from_query(query);
    let store = app.catalog();
    let view = store.view(&catalog_query, app.settings.page_size);
    let carousel = carousel(app, query);

    html_response(pages::home_page(&HomeVm {
        carousel: &carousel,
        query: &catalog_query,
        view: &view,
        assets: app.assets(),
    }))
}

/// The grid alone, for htmx swaps. The address bar follows the filters so
/// the result can be shared or reloaded.
fn catalog_fragment(app: &App, query: Option<&str>) -> ResultResp {
    let catalog_query = CatalogQuery::from_query(query);
    let store = app.catalog();
    let view = store.view(&catalog_query, app.settings.page_size);

    let canonical = catalog_query.to_query();
    let push_url = if canonical.is_empty() {
        "/".to_string()
    } else {
        format!("/?{canonical}")
    };
    html_fragment(components::catalog_grid(&view, app.assets()), &push_url)
}

/// Carousel for the home screen showing `?slide=`. A poll from a running
/// hero (`advance=1`) counts as one elapsed interval.
fn carousel(app: &App, query: Option<&str>) -> Carousel {
    let pairs = query_pairs(query);
    let now = Instant::now();
    let mut carousel = Carousel::new(SLIDES.len(), app.settings.carousel_interval());
    carousel.follow(Screen::Home, now);
    carousel.select(index_param(&pairs, "slide"));
    if param(&pairs, "advance").is_some() {
        carousel.tick(now + carousel.interval());
    }
    carousel
}

fn inventory(app: &App, query: Option<&str>) -> ResultResp {
    let pairs = query_pairs(query);
    let store = app.catalog();

    let modal = param(&pairs, "truck")
        .and_then(|id| id.trim().parse::<i64>().ok())
        .and_then(|id| store.get(id))
        .map(|listing| components::truck_modal(listing, index_param(&pairs, "img"), app.assets()));

    html_response(pages::inventory_page(&store, modal, app.assets()))
}

fn truck_fragment(app: &App, id: &str, query: Option<&str>) -> ResultResp {
    let id = parse_id(id)?;
    let store = app.catalog();
    if store.status() == StoreStatus::Unavailable {
        return Err(ServerError::Upstream("catalog snapshot unavailable".into()));
    }
    let listing = store.get(id).ok_or(ServerError::NotFound)?;
    let img = index_param(&query_pairs(query), "img");
    html_response(components::truck_modal(listing, img, app.assets()))
}

fn register_driver(req: &mut Request, app: &App) -> ResultResp {
    let form = NewApplicant::from_pairs(&read_form(req)?);

    match form.clone().validate() {
        Ok(valid) => {
            let id = app.db.with_conn(|conn| drivers::insert_driver(conn, &valid))?;
            info!(id, "driver registered");
            html_response(pages::register_page(
                &NewApplicant::default(),
                Some(&FormOutcome::Saved),
            ))
        }
        Err(ServerError::BadRequest(message)) => {
            debug!(%message, "registration rejected");
            html_with_status(
                400,
                pages::register_page(&form, Some(&FormOutcome::Rejected(message))),
            )
        }
        Err(e) => Err(e),
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn parse_id(id: &str) -> Result<i64, ServerError> {
    id.parse().map_err(|_| ServerError::NotFound)
}

fn query_pairs(query: Option<&str>) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.unwrap_or_default().as_bytes())
        .into_owned()
        .collect()
}

fn param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Non-negative index parameter; anything unparseable is 0.
fn index_param(pairs: &[(String, String)], key: &str) -> usize {
    param(pairs, key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

/// Whole body as UTF-8. Bodies over `MAX_BODY_BYTES` are refused, never cut.
fn read_body(req: &mut Request) -> Result<String, ServerError> {
    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable request body: {e}")))?;

    if bytes.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::PayloadTooLarge(MAX_BODY_BYTES));
    }
    String::from_utf8(bytes)
        .map_err(|_| ServerError::BadRequest("Request body is not valid UTF-8".into()))
}

fn read_form(req: &mut Request) -> Result<Vec<(String, String)>, ServerError> {
    let body = read_body(req)?;
    Ok(url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect())
}

fn read_json<T: DeserializeOwned>(req: &mut Request) -> Result<T, ServerError> {
    let body = read_body(req)?;
    serde_json::from_str(&body).map_err(|e| ServerError::BadRequest(format!("Invalid JSON: {e}")))
}
