use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, seed_truck, test_app, test_app_with};
use scraper::{Html, Selector};

fn card_ids(html: &str) -> Vec<i64> {
    let doc = Html::parse_document(html);
    let cards = Selector::parse("article.truck-card").unwrap();
    doc.select(&cards)
        .filter_map(|el| el.value().attr("data-id"))
        .map(|id| id.parse().unwrap())
        .collect()
}

fn seed_three(app: &crate::app::App) -> (i64, i64, i64) {
    let volvo = seed_truck(app, "Volvo", "FH16", 2020, "4000000", "Nairobi");
    let scania = seed_truck(app, "Scania", "R450", 2021, "6500000", "Mombasa");
    let fmx = seed_truck(app, "Volvo", "FMX", 2019, "7000000", "Nairobi");
    (volvo, scania, fmx)
}

#[test]
fn home_page_lists_newest_first() {
    let app = test_app("home");
    let (volvo, scania, fmx) = seed_three(&app);

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Found 3 results"));
    assert_eq!(card_ids(&body), vec![fmx, scania, volvo]);

    let doc = Html::parse_document(&body);
    let hero = Selector::parse("section#hero").unwrap();
    assert_eq!(doc.select(&hero).count(), 1);
}

#[test]
fn make_and_price_range_narrow_the_grid() {
    let app = test_app("filter");
    let (volvo, _, _) = seed_three(&app);

    let resp = handle(get("/?make=Volvo&priceRange=3000000-6000000"), &app).unwrap();
    let body = body_string(resp);
    assert_eq!(card_ids(&body), vec![volvo]);
    assert!(body.contains("Found 1 results"));

    // the sidebar keeps the chosen values
    let doc = Html::parse_document(&body);
    let selected = Selector::parse("#filter-make option[selected]").unwrap();
    let chosen: Vec<_> = doc.select(&selected).map(|o| o.inner_html()).collect();
    assert_eq!(chosen, vec!["Volvo"]);
}

#[test]
fn catalog_fragment_is_sorted_and_has_no_chrome() {
    let app = test_app("fragment");
    let (volvo, scania, fmx) = seed_three(&app);

    let resp = handle(get("/catalog?sort=price-high"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(!body.contains("<!DOCTYPE"));
    assert!(body.starts_with(r#"<div id="truck-grid">"#));
    assert_eq!(card_ids(&body), vec![fmx, scania, volvo]);
}

#[test]
fn catalog_fragment_pushes_the_canonical_url() {
    let app = test_app("push");

    let resp = handle(get("/catalog?make=Volvo&model=&sort=price-high"), &app).unwrap();
    assert_eq!(
        resp.headers().get("HX-Push-Url").unwrap(),
        "/?make=Volvo&sort=price-high"
    );

    let resp = handle(get("/catalog?sort=newest"), &app).unwrap();
    assert_eq!(resp.headers().get("HX-Push-Url").unwrap(), "/");
}

#[test]
fn no_matches_shows_the_empty_state() {
    let app = test_app("empty");
    seed_three(&app);

    let body = body_string(handle(get("/catalog?make=DAF"), &app).unwrap());
    assert!(body.contains("Found 0 results"));
    assert!(body.contains("No trucks match these filters."));
    assert!(card_ids(&body).is_empty());
}

#[test]
fn grid_is_windowed_to_the_page_size() {
    let app = test_app_with("window", |s| s.page_size = 2);
    let (_, scania, fmx) = seed_three(&app);

    let body = body_string(handle(get("/catalog"), &app).unwrap());
    assert_eq!(card_ids(&body), vec![fmx, scania]);
    assert!(body.contains("Found 3 results (showing 2)"));
}

#[test]
fn unreachable_catalog_renders_a_notice() {
    let app = test_app_with("offline", |s| {
        s.catalog_url = Some("http://127.0.0.1:9/getTrucks.php".into())
    });

    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("could not load the inventory"));
    assert!(card_ids(&body).is_empty());

    assert!(matches!(
        handle(get("/trucks/1"), &app),
        Err(ServerError::Upstream(_))
    ));

    let inventory = body_string(handle(get("/inventory"), &app).unwrap());
    assert!(inventory.contains("could not load the inventory"));
    assert!(!inventory.contains("Loading trucks"));
}

#[test]
fn hero_fragment_selects_slide_and_polls_next() {
    let app = test_app("hero");

    let body = body_string(handle(get("/hero?slide=1"), &app).unwrap());
    assert!(body.contains(r#"data-slide="1""#));
    assert!(body.contains(r#"hx-get="/hero?slide=1&amp;advance=1""#));
    assert!(body.contains(r#"hx-trigger="every 5s""#));

    // a poll moves one slide on
    let body = body_string(handle(get("/hero?slide=1&advance=1"), &app).unwrap());
    assert!(body.contains(r#"data-slide="2""#));

    let body = body_string(handle(get("/hero?slide=2&advance=1"), &app).unwrap());
    assert!(body.contains(r#"data-slide="0""#));

    // out-of-range selections wrap
    let body = body_string(handle(get("/?slide=4"), &app).unwrap());
    assert!(body.contains(r#"data-slide="1""#));
}

#[test]
fn stylesheet_is_served() {
    let app = test_app("css");
    let resp = handle(get("/static/main.css"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
}

#[test]
fn unknown_path_is_not_found() {
    let app = test_app("missing");
    assert!(matches!(
        handle(get("/no-such-page"), &app),
        Err(ServerError::NotFound)
    ));
}
