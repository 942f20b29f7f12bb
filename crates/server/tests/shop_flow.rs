mod common;

use axum::http::{Method, StatusCode};
use common::{Session, TestApp, error_code};
use serde_json::{Value, json};
use shared::model::role::Role;

async fn admin(app: &TestApp) -> Session {
    let session = app.sign_up("admin@example.com", "Admin").await;
    app.promote(session.user_id, Role::Admin).await;
    session
}

async fn create_product(app: &TestApp, token: &str, title: &str, price: i64, featured: bool) -> i64 {
    let response = app
        .post(
            "/api/shop/products/",
            Some(token),
            json!({ "title": title, "price": price, "featured": featured }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
    response.json()["id"].as_i64().unwrap()
}

fn item_quantities(cart: &Value) -> Vec<(i64, i64)> {
    cart["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| (i["product_id"].as_i64().unwrap(), i["quantity"].as_i64().unwrap()))
        .collect()
}

#[tokio::test]
async fn test_products_are_public_and_filter_featured() {
    let app = TestApp::new();
    let admin = admin(&app).await;
    create_product(&app, &admin.access_token, "Pen", 300, false).await;
    create_product(&app, &admin.access_token, "Lamp", 4999, true).await;

    let all = app.get("/api/shop/products/", None).await;
    assert_eq!(all.status, StatusCode::OK, "{}", all.text);
    let body = all.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["count"], 2);
    assert_eq!(body["results"][0]["title"], "Lamp");
    assert_eq!(body["results"][0]["currency"], "GHS");

    let featured = app.get("/api/shop/products/?featured=true", None).await;
    let body = featured.json();
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["title"], "Lamp");
}

#[tokio::test]
async fn test_product_lookup_and_creation_rules() {
    let app = TestApp::new();
    let admin = admin(&app).await;
    let buyer = app.sign_up("buyer@example.com", "Buyer").await;
    let id = create_product(&app, &admin.access_token, "Mug", 1250, false).await;

    let found = app.get(&format!("/api/shop/products/{id}/"), None).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.json()["price"], 1250);

    let missing = app.get("/api/shop/products/9999/", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&missing), "NOT_FOUND");

    let anonymous = app
        .post("/api/shop/products/", None, json!({ "title": "X", "price": 1 }))
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&anonymous), "AUTH_REQUIRED");

    let forbidden = app
        .post(
            "/api/shop/products/",
            Some(&buyer.access_token),
            json!({ "title": "X", "price": 1 }),
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_cart_requires_bearer_token() {
    let app = TestApp::new();

    let response = app.get("/api/shop/cart/", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&response), "AUTH_REQUIRED");
}

#[tokio::test]
async fn test_adding_same_product_merges_quantities() {
    let app = TestApp::new();
    let admin = admin(&app).await;
    let buyer = app.sign_up("buyer@example.com", "Buyer").await;
    let mug = create_product(&app, &admin.access_token, "Mug", 1250, false).await;
    let lamp = create_product(&app, &admin.access_token, "Lamp", 4999, false).await;
    let token = Some(buyer.access_token.as_str());

    let empty = app.get("/api/shop/cart/", token).await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.json()["items_count"], 0);

    let added = app
        .post("/api/shop/cart/", token, json!({ "product_id": mug }))
        .await;
    assert_eq!(added.status, StatusCode::CREATED, "{}", added.text);
    assert_eq!(item_quantities(&added.json()), vec![(mug, 1)]);

    app.post("/api/shop/cart/", token, json!({ "product_id": lamp, "quantity": 2 }))
        .await;
    let merged = app
        .post("/api/shop/cart/", token, json!({ "product_id": mug, "quantity": 3 }))
        .await;
    let body = merged.json();
    assert_eq!(item_quantities(&body), vec![(mug, 4), (lamp, 2)]);
    assert_eq!(body["items_count"], 6);
    assert_eq!(body["total_amount"], 4 * 1250 + 2 * 4999);

    let unknown = app
        .post("/api/shop/cart/", token, json!({ "product_id": 9999 }))
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&unknown), "NOT_FOUND");
}

#[tokio::test]
async fn test_patch_and_delete_remove_lines() {
    let app = TestApp::new();
    let admin = admin(&app).await;
    let buyer = app.sign_up("buyer@example.com", "Buyer").await;
    let mug = create_product(&app, &admin.access_token, "Mug", 1250, false).await;
    let lamp = create_product(&app, &admin.access_token, "Lamp", 4999, false).await;
    let token = Some(buyer.access_token.as_str());

    app.post("/api/shop/cart/", token, json!({ "product_id": mug, "quantity": 2 }))
        .await;
    app.post("/api/shop/cart/", token, json!({ "product_id": lamp }))
        .await;

    let set = app
        .send(
            Method::PATCH,
            "/api/shop/cart/",
            token,
            Some(json!({ "item_id": mug, "quantity": 5 })),
        )
        .await;
    assert_eq!(set.status, StatusCode::OK, "{}", set.text);
    assert_eq!(item_quantities(&set.json()), vec![(mug, 5), (lamp, 1)]);

    let dropped = app
        .send(
            Method::PATCH,
            "/api/shop/cart/",
            token,
            Some(json!({ "item_id": lamp, "quantity": 0 })),
        )
        .await;
    assert_eq!(item_quantities(&dropped.json()), vec![(mug, 5)]);

    let missing = app
        .send(
            Method::PATCH,
            "/api/shop/cart/",
            token,
            Some(json!({ "item_id": lamp, "quantity": 3 })),
        )
        .await;
    assert_eq!(missing.status, StatusCode::OK);
    assert_eq!(item_quantities(&missing.json()), vec![(mug, 5)]);

    let deleted = app
        .send(
            Method::DELETE,
            "/api/shop/cart/",
            token,
            Some(json!({ "item_id": mug })),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK, "{}", deleted.text);
    let body = deleted.json();
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["total_amount"], 0);
}
