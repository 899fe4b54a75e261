use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, test_app};
use scraper::{Html, Selector};

#[test]
fn registration_form_renders() {
    let app = test_app("register_form");
    let resp = handle(get("/drivers/register"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let doc = Html::parse_document(&body_string(resp));
    let inputs = Selector::parse("form.driver-form input[required]").unwrap();
    let names: Vec<_> = doc
        .select(&inputs)
        .filter_map(|el| el.value().attr("name"))
        .collect();
    assert_eq!(
        names,
        vec!["fullName", "phoneNumber", "experienceYears", "currentLocation"]
    );
}

#[test]
fn registration_saves_and_shows_on_the_drivers_page() {
    let app = test_app("register_ok");

    let resp = handle(
        post_form(
            "/drivers/register",
            "fullName=Kamau+Njoroge&phoneNumber=%2B254700000000&email=Kamau%40Example.com\
             &licenseClass=CE&experienceYears=7&currentLocation=Mombasa&expectedSalary=45000\
             &documents=src%2Fassets%2Fdrivers%2Fk.webp",
        ),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Registration successful!"));

    let body = body_string(handle(get("/drivers"), &app).unwrap());
    assert!(body.contains("Found 1 registered professionals"));
    assert!(body.contains("Kamau Njoroge"));
    assert!(body.contains("KES 45,000"));
    assert!(body.contains("7 Years"));

    let doc = Html::parse_document(&body);
    let photo = Selector::parse(".driver-photo img").unwrap();
    let src = doc
        .select(&photo)
        .next()
        .and_then(|el| el.value().attr("src"));
    assert_eq!(src, Some("/src/assets/drivers/k.webp"));
}

#[test]
fn invalid_registration_is_rejected_with_the_form_kept() {
    let app = test_app("register_bad");

    let resp = handle(
        post_form(
            "/drivers/register",
            "fullName=Achieng&phoneNumber=0712345678&experienceYears=many&currentLocation=Kisumu",
        ),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 400);

    let body = body_string(resp);
    assert!(body.contains("years of experience must be a whole number"));
    assert!(body.contains(r#"value="Achieng""#));

    let drivers = body_string(handle(get("/drivers"), &app).unwrap());
    assert!(drivers.contains("Found 0 registered professionals"));
}

#[test]
fn financing_page_renders_with_nav_state() {
    let app = test_app("financing");
    let body = body_string(handle(get("/financing"), &app).unwrap());
    assert!(body.contains("Truck Financing"));
    assert!(body.contains("micro-lending"));

    // no hero carousel off the home screen
    assert!(!body.contains(r#"id="hero""#));
}

#[test]
fn oversized_registration_is_refused() {
    let app = test_app("register_oversized");
    let body = format!(
        "fullName=Kamau&phoneNumber=0711&experienceYears=7&currentLocation={}",
        "Nairobi".repeat(10_000)
    );

    assert!(matches!(
        handle(post_form("/drivers/register", &body), &app),
        Err(ServerError::PayloadTooLarge(_))
    ));

    let drivers = body_string(handle(get("/drivers"), &app).unwrap());
    assert!(drivers.contains("Found 0 registered professionals"));
}
