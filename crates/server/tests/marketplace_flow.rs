mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{form_post, get, multipart_post, send, spawn_app, FilePart, ANN_LISTING};

#[tokio::test]
async fn health_is_ok() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let resp = app.send(get("/health")).await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), json!({"status": "ok"}));
    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn listing_without_image_gets_placeholder() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let resp = app.send(multipart_post("/add-listing", ANN_LISTING, None)).await?;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location.as_deref(), Some("/seller"));

    let listed = app.send(get("/api/listings")).await?.json();
    let items = listed.as_array().expect("array");
    assert_eq!(items.len(), 1);
    let l = &items[0];
    assert_eq!(l["imageUrl"], "/placeholder.svg?height=200&width=200");
    assert_eq!(l["price"], json!(25.5));
    assert_eq!(l["isNew"], true);
    assert_eq!(l["rating"], json!(0.0));
    assert_eq!(l["seller"]["name"], "Ann");
    assert!(l["_id"].as_str().is_some_and(|id| id.parse::<i64>().is_ok()));

    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn listing_with_image_then_delete_removes_file() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let png = FilePart { file_name: "jacket.png", content_type: "image/png", bytes: b"\x89PNG fake" };

    let resp = app.send(multipart_post("/add-listing", ANN_LISTING, Some(png))).await?;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let listed = app.send(get("/api/listings")).await?.json();
    let l = &listed[0];
    let url = l["imageUrl"].as_str().expect("imageUrl").to_string();
    assert!(url.starts_with("/uploads/productImage-") && url.ends_with(".png"));
    let file = app.upload_dir().join(url.trim_start_matches("/uploads/"));
    assert!(file.exists());

    // uploaded image is served statically
    let served = app.send(get(&url)).await?;
    assert_eq!(served.status, StatusCode::OK);

    let id = l["_id"].as_str().expect("id").to_string();
    let del = app.send(form_post("/delete-listing", &format!("listingId={id}"))).await?;
    assert_eq!(del.status, StatusCode::SEE_OTHER);
    assert!(!file.exists());
    assert_eq!(app.send(get("/api/listings")).await?.json(), json!([]));

    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn rejected_listings_change_nothing() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let missing = app
        .send(multipart_post("/add-listing", &ANN_LISTING[..4], None))
        .await?;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body, "All required fields must be filled.");

    let text = FilePart { file_name: "notes.txt", content_type: "text/plain", bytes: b"hello" };
    let not_image = app.send(multipart_post("/add-listing", ANN_LISTING, Some(text))).await?;
    assert_eq!(not_image.status, StatusCode::BAD_REQUEST);
    assert_eq!(not_image.body, "Not an image! Please upload only images.");

    let big = vec![0u8; 2048];
    let oversize = FilePart { file_name: "big.png", content_type: "image/png", bytes: &big };
    let too_big = app.send(multipart_post("/add-listing", ANN_LISTING, Some(oversize))).await?;
    assert_eq!(too_big.status, StatusCode::BAD_REQUEST);

    assert_eq!(app.send(get("/api/listings")).await?.json(), json!([]));
    let mut uploads = tokio::fs::read_dir(app.upload_dir()).await?;
    assert!(uploads.next_entry().await?.is_none());

    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn deleting_unknown_listing_is_a_noop() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.send(multipart_post("/add-listing", ANN_LISTING, None)).await?;

    let resp = app.send(form_post("/delete-listing", "listingId=12345")).await?;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(app.send(get("/api/listings")).await?.json().as_array().map(Vec::len), Some(1));

    let no_id = app.send(form_post("/delete-listing", "")).await?;
    assert_eq!(no_id.status, StatusCode::BAD_REQUEST);
    assert_eq!(no_id.body, "Listing ID is required.");

    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn review_is_stored_as_integer_and_survives_restart() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let resp = app.send(form_post("/submit-review", "name=Bob&comment=Great&rating=5")).await?;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location.as_deref(), Some("/"));

    let expected = json!([{"name": "Bob", "comment": "Great", "rating": 5}]);
    assert_eq!(app.send(get("/api/reviews")).await?.json(), expected);

    let restarted = app.restart().await?;
    assert_eq!(send(&restarted, get("/api/reviews")).await?.json(), expected);

    let bad = app.send(form_post("/submit-review", "name=Bob&rating=5")).await?;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad.body, "All fields are required.");

    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn products_require_all_fields() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let ok = app
        .send(form_post(
            "/add-product",
            "name=Lamp&description=Brass&price=12&imageUrl=https%3A%2F%2Fimg.example%2Flamp.png",
        ))
        .await?;
    assert_eq!(ok.status, StatusCode::SEE_OTHER);

    let bad = app.send(form_post("/add-product", "name=Lamp&price=12")).await?;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);

    let listed = app.send(get("/api/products")).await?.json();
    assert_eq!(
        listed,
        json!([{"name": "Lamp", "description": "Brass", "price": 12.0, "imageUrl": "https://img.example/lamp.png"}])
    );

    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn corrupt_collection_file_stops_startup() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    tokio::fs::write(app.data_file("listings.json"), "[{ broken").await?;
    assert!(app.restart().await.is_err());
    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn failed_write_is_a_plain_text_500() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    tokio::fs::remove_dir_all(&app.cfg.storage.data_dir).await?;

    let resp = app.send(form_post("/submit-review", "name=Bob&comment=Great&rating=5")).await?;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.body, "Error saving review.");
    assert!(resp.location.is_none());

    // no rollback: the review stays in memory
    let listed = app.send(get("/api/reviews")).await?.json();
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    app.cleanup().await;
    Ok(())
}
