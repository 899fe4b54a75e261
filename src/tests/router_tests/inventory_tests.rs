use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_json, seed_truck, test_app};
use scraper::{Html, Selector};
use serde_json::json;

#[test]
fn inventory_lists_every_truck_past_the_page_size() {
    let app = test_app("inventory");
    for i in 0..15 {
        seed_truck(&app, "Isuzu", &format!("FVZ-{i}"), 2018, "2800000", "Nakuru");
    }

    let body = body_string(handle(get("/inventory"), &app).unwrap());
    assert!(body.contains("15 Trucks found"));

    let doc = Html::parse_document(&body);
    let cards = Selector::parse("article.truck-card").unwrap();
    assert_eq!(doc.select(&cards).count(), 15);

    let modal = Selector::parse("#modal .modal-overlay").unwrap();
    assert_eq!(doc.select(&modal).count(), 0);
}

#[test]
fn inventory_opens_the_modal_for_a_truck() {
    let app = test_app("inventory_modal");
    let resp = handle(
        post_json(
            "/api/trucks",
            json!({
                "make": "Scania", "model": "R450", "year": 2021, "price": "6500000",
                "truck_condition": "New", "location": "Mombasa", "paymentMethod": "Finance",
                "deposit": "1500000", "bankBalance": "5000000", "monthlyInstallments": "180000",
                "images": ["a.webp", "b.webp"]
            }),
        ),
        &app,
    )
    .unwrap();
    let created: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    let id = created["id"].as_i64().unwrap();

    let body = body_string(handle(get(&format!("/inventory?truck={id}&img=1")), &app).unwrap());
    let doc = Html::parse_document(&body);

    let img = Selector::parse("#modal img.modal-img").unwrap();
    let src = doc
        .select(&img)
        .next()
        .and_then(|el| el.value().attr("src"))
        .unwrap();
    assert_eq!(src, "/b.webp");

    assert!(body.contains("Payment Plan"));
    assert!(body.contains("KES 180,000"));
    assert!(body.contains("KES 5,000,000"));
}

#[test]
fn truck_fragment_wraps_the_gallery_index() {
    let app = test_app("truck_fragment");
    let id = seed_truck(&app, "Volvo", "FH16", 2020, "4000000", "Nairobi");

    let resp = handle(get(&format!("/trucks/{id}?img=9")), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(!body.contains("<!DOCTYPE"));
    assert!(body.contains("Volvo FH16"));
    assert!(body.contains("Total Cash Price"));
    assert!(body.contains("No Images"));
}

#[test]
fn missing_truck_is_not_found() {
    let app = test_app("truck_missing");
    assert!(matches!(
        handle(get("/trucks/999"), &app),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(get("/trucks/abc"), &app),
        Err(ServerError::NotFound)
    ));

    // an unknown id on the inventory page just leaves the modal closed
    let resp = handle(get("/inventory?truck=999"), &app).unwrap();
    assert_eq!(resp.status(), 200);
}
