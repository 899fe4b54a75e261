use crate::app::App;
use crate::config::Settings;
use crate::db::trucks::insert_truck;
use crate::db::{init_db, Database};
use crate::domain::NewListing;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh app over a throw-away database with the production schema.
pub fn test_app(tag: &str) -> App {
    test_app_with(tag, |_| {})
}

pub fn test_app_with(tag: &str, tweak: impl FnOnce(&mut Settings)) -> App {
    let path = std::env::temp_dir().join(format!(
        "jamoh_{tag}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let mut settings = Settings {
        database_path: path.to_string_lossy().to_string(),
        ..Settings::default()
    };
    tweak(&mut settings);

    let db = Database::new(settings.database_path.clone());
    init_db(&db, &settings.schema_path)
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    App::new(db, settings)
}

/// Inserts a cash listing and returns its id.
pub fn seed_truck(app: &App, make: &str, model: &str, year: i64, price: &str, location: &str) -> i64 {
    let valid = NewListing {
        make: make.into(),
        model: model.into(),
        year: year.to_string(),
        price: price.into(),
        location: location.into(),
        ..NewListing::default()
    }
    .validate()
    .expect("valid listing");

    app.db
        .with_conn(|conn| insert_truck(conn, &valid))
        .expect("insert truck")
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn request(method: Method, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}
