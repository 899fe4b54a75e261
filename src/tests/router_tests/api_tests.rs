use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, post_json, request, seed_truck, test_app};
use http::Method;
use serde_json::{json, Value};

fn json_body(resp: astra::Response) -> Value {
    serde_json::from_str(&body_string(resp)).expect("JSON body")
}

#[test]
fn trucks_api_returns_legacy_shaped_rows() {
    let app = test_app("api_list");
    let older = seed_truck(&app, "Scania", "R450", 2021, "6500000", "Mombasa");
    let newer = seed_truck(&app, "Volvo", "FH16", 2020, "4000000", "Nairobi");

    let resp = handle(get("/api/trucks"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );

    let rows = json_body(resp);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], newer);
    assert_eq!(rows[1]["id"], older);
    assert_eq!(rows[0]["truck_condition"], "used");
    assert_eq!(rows[0]["paymentMethod"], "cash");
    assert!(rows[0]["images"].is_array());
}

#[test]
fn create_from_form_then_delete() {
    let app = test_app("api_create");

    let resp = handle(
        post_form(
            "/api/trucks",
            "make=Isuzu&model=FVZ&year=2018&price=2800000&location=Nakuru\
             &paymentMethod=skumaLoan&images%5B%5D=a.webp&images%5B%5D=b.webp",
        ),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    let created = json_body(resp);
    assert_eq!(created["success"], true);
    let id = created["id"].as_i64().unwrap();

    let rows = json_body(handle(get("/api/trucks"), &app).unwrap());
    assert_eq!(rows[0]["paymentMethod"], "loan");
    assert_eq!(rows[0]["images"], json!(["a.webp", "b.webp"]));

    let one = json_body(handle(get(&format!("/api/trucks/{id}")), &app).unwrap());
    assert_eq!(one["make"], "Isuzu");
    assert_eq!(one["location"], "Nakuru");

    let resp = handle(request(Method::DELETE, &format!("/api/trucks/{id}")), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(json_body(resp)["success"], true);

    let resp = handle(get(&format!("/api/trucks/{id}")), &app).unwrap();
    assert_eq!(resp.status(), 404);

    let resp = handle(request(Method::DELETE, &format!("/api/trucks/{id}")), &app).unwrap();
    assert_eq!(resp.status(), 404);
    assert_eq!(json_body(resp)["success"], false);
}

#[test]
fn invalid_listing_is_a_json_bad_request() {
    let app = test_app("api_invalid");

    let resp = handle(
        post_json("/api/trucks", json!({ "make": "Volvo", "model": "FH16", "year": "20x0", "price": "1" })),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 400);
    let body = json_body(resp);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("year"));

    let resp = handle(post_json("/api/trucks", json!("not an object")), &app).unwrap();
    assert_eq!(resp.status(), 400);
}

#[test]
fn drivers_api_registers_and_lists() {
    let app = test_app("api_drivers");

    let resp = handle(
        post_json(
            "/api/drivers",
            json!({
                "fullName": "Wanjiru", "phoneNumber": "0722000000", "experienceYears": 3,
                "currentLocation": "Nairobi", "documents": "src/assets/drivers/w.webp,src/assets/drivers/l.pdf"
            }),
        ),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    let body = json_body(resp);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Driver registered successfully");

    let rows = json_body(handle(get("/api/drivers"), &app).unwrap());
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["full_name"], "Wanjiru");
    assert_eq!(rows[0]["license_class"], "BCE");
    assert_eq!(rows[0]["availability"], "Immediate");
    assert_eq!(rows[0]["documents"].as_array().unwrap().len(), 2);
}

#[test]
fn bad_email_is_rejected() {
    let app = test_app("api_email");
    let resp = handle(
        post_form(
            "/api/drivers",
            "fullName=Otieno&phoneNumber=0733&experienceYears=2&currentLocation=Kisumu&email=otieno",
        ),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(json_body(resp)["success"], false);
}

#[test]
fn preflight_and_unknown_api_paths() {
    let app = test_app("api_misc");

    let resp = handle(request(Method::OPTIONS, "/api/drivers"), &app).unwrap();
    assert_eq!(resp.status(), 204);
    assert!(resp
        .headers()
        .get("Access-Control-Allow-Methods")
        .is_some());

    let resp = handle(get("/api/nothing"), &app).unwrap();
    assert_eq!(resp.status(), 404);
    assert_eq!(json_body(resp)["message"], "Not Found");
}

#[test]
fn oversized_form_is_refused_and_nothing_is_saved() {
    let app = test_app("api_oversized");

    // the 64 KiB boundary falls inside the trailing price field
    let padding = "x".repeat(64 * 1024 - 40);
    let body = format!("make=Volvo&model=FH16&year=2020&color={padding}&price=4000000");
    assert!(body.len() > 64 * 1024);

    let resp = handle(post_form("/api/trucks", &body), &app).unwrap();
    assert_eq!(resp.status(), 413);
    assert_eq!(json_body(resp)["success"], false);

    let rows = json_body(handle(get("/api/trucks"), &app).unwrap());
    assert!(rows.as_array().unwrap().is_empty());
}

#[test]
fn form_at_the_limit_is_accepted() {
    let app = test_app("api_at_limit");

    let head = "make=Volvo&model=FH16&year=2020&price=4000000&color=";
    let body = format!("{head}{}", "x".repeat(64 * 1024 - head.len()));
    assert_eq!(body.len(), 64 * 1024);

    let resp = handle(post_form("/api/trucks", &body), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let rows = json_body(handle(get("/api/trucks"), &app).unwrap());
    assert_eq!(rows[0]["price"], "4000000");
}
