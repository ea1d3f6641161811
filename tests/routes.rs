use actix_web::{App, http::StatusCode, test, web};
use rust_decimal::Decimal;
use serde_json::{Value, json};

use premier_realty::domain::property::{Property, PropertyStatus};
use premier_realty::repository::memory::MemoryRepository;
use premier_realty::routes::inquiries::create_inquiry;
use premier_realty::routes::properties::{
    create_property, delete_property, get_property, list_properties, update_property,
};

macro_rules! init_app {
    ($repo:expr) => {
        test::init_service(
            App::new().app_data(web::Data::new($repo.clone())).service(
                web::scope("/api")
                    .service(list_properties)
                    .service(get_property)
                    .service(create_property)
                    .service(update_property)
                    .service(delete_property)
                    .service(create_inquiry),
            ),
        )
        .await
    };
}

fn property_payload(title: &str, price: &str) -> Value {
    json!({
        "title": title,
        "description": "Comfortable and bright",
        "price": price,
        "address": "321 Greenwood Estate",
        "city": "Springfield",
        "state": "CA",
        "zipCode": "90213",
        "propertyType": "house",
        "bedrooms": 5
    })
}

#[actix_web::test]
async fn create_then_list_with_status_filter_end_to_end() {
    let repo = MemoryRepository::new();
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/properties")
        .set_json(property_payload("Suburban Retreat", "595000.00"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Property = test::read_body_json(resp).await;
    assert_eq!(created.status, PropertyStatus::ForSale);
    assert_eq!(created.bedrooms, Some(5));

    let req = test::TestRequest::get()
        .uri("/api/properties?status=For%20Sale")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listings: Vec<Value> = test::read_body_json(resp).await;
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["title"], json!("Suburban Retreat"));
    assert_eq!(listings[0]["price"], json!("595000.00"));

    let req = test::TestRequest::get()
        .uri("/api/properties?status=Sold")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let listings: Vec<Value> = test::read_body_json(resp).await;
    assert!(listings.is_empty());
}

#[actix_web::test]
async fn get_property_returns_404_for_unknown_or_malformed_id() {
    let repo = MemoryRepository::new();
    let app = init_app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/properties/00000000-0000-4000-8000-000000000000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/properties/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn create_property_rejects_invalid_payloads() {
    let repo = MemoryRepository::new();
    let app = init_app!(repo);

    let mut missing_title = property_payload("ignored", "500000");
    missing_title.as_object_mut().expect("object").remove("title");
    let req = test::TestRequest::post()
        .uri("/api/properties")
        .set_json(missing_title)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/properties")
        .set_json(property_payload("Bargain", "-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/properties")
        .set_json(property_payload("   ", "500000"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/api/properties").to_request();
    let resp = test::call_service(&app, req).await;
    let listings: Vec<Value> = test::read_body_json(resp).await;
    assert!(listings.is_empty());
}

#[actix_web::test]
async fn update_property_distinguishes_not_found_and_validation() {
    let repo = MemoryRepository::new();
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/properties")
        .set_json(property_payload("Family Home", "500000"))
        .to_request();
    let created: Property = test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/properties/{}", created.id))
        .set_json(json!({"status": "Sold"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Property = test::read_body_json(resp).await;
    assert_eq!(updated.status, PropertyStatus::Sold);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.price, created.price);

    let req = test::TestRequest::put()
        .uri(&format!("/api/properties/{}", created.id))
        .set_json(json!({"price": "-5"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri("/api/properties/00000000-0000-4000-8000-000000000000")
        .set_json(json!({"status": "Sold"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_property_is_idempotent_from_the_caller_view() {
    let repo = MemoryRepository::new();
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/properties")
        .set_json(property_payload("Doomed Home", "500000"))
        .to_request();
    let created: Property = test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/properties/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/properties/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/properties/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn price_bounds_filter_and_degrade_over_http() {
    let repo = MemoryRepository::new();
    let app = init_app!(repo);

    for (title, price) in [
        ("Starter Home", "400000"),
        ("Mid Home", "600000"),
        ("Dream Home", "900000"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/properties")
            .set_json(property_payload(title, price))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/properties?minPrice=500000&maxPrice=800000")
        .to_request();
    let listings: Vec<Property> =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].price, Decimal::from(600_000));

    // Non-numeric bounds place no constraint.
    let req = test::TestRequest::get()
        .uri("/api/properties?minPrice=cheap")
        .to_request();
    let listings: Vec<Property> =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(listings.len(), 3);
}

#[actix_web::test]
async fn search_parameter_narrows_the_listing() {
    let repo = MemoryRepository::new();
    let app = init_app!(repo);

    for (title, price) in [("Modern Family Home", "750000"), ("Executive Condo", "650000")] {
        let req = test::TestRequest::post()
            .uri("/api/properties")
            .set_json(property_payload(title, price))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/properties?search=condo")
        .to_request();
    let listings: Vec<Property> =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].title, "Executive Condo");
}

#[actix_web::test]
async fn create_inquiry_accepts_dangling_reference_and_rejects_bad_email() {
    let repo = MemoryRepository::new();
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/inquiries")
        .set_json(json!({
            "propertyId": "00000000-0000-4000-8000-000000000000",
            "name": "Jane Buyer",
            "email": "jane@example.com",
            "message": "Is this still available?"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], json!("Inquiry sent successfully"));
    assert_eq!(body["inquiry"]["name"], json!("Jane Buyer"));
    assert_eq!(body["inquiry"]["phone"], Value::Null);

    let req = test::TestRequest::post()
        .uri("/api/inquiries")
        .set_json(json!({
            "name": "Jane Buyer",
            "email": "not-an-email",
            "message": "Hello"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
