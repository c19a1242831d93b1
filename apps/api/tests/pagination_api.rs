//! HTTP-level integration tests for the page endpoint: parameter clamping,
//! owner filtering, ordering, and slicing.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{body_json, get, seed_record};
use serde_json::{json, Value};
use sqlx::PgPool;

/// Seed records one at a time, newest last, with a short pause so each row
/// gets a distinct `created_time` and the descending order is unambiguous.
async fn seed_in_order(pool: &PgPool, bodies: &[Value]) -> Vec<i64> {
    let mut ids = Vec::with_capacity(bodies.len());
    for body in bodies {
        ids.push(seed_record(pool, body.clone()).await);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    ids
}

fn item_ids(body: &Value) -> Vec<i64> {
    body["data"]["items"]
        .as_array()
        .expect("items must be an array")
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

#[sqlx::test(migrations = "./migrations")]
async fn zero_current_behaves_like_the_first_page(pool: PgPool) {
    seed_in_order(
        &pool,
        &[
            json!({"originalContent": "one"}),
            json!({"originalContent": "two"}),
            json!({"originalContent": "three"}),
        ],
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let first = body_json(get(app, "/resume/page?current=1&size=10").await).await;
    let app = common::build_test_app(pool);
    let clamped = body_json(get(app, "/resume/page?current=0&size=10").await).await;

    assert_eq!(clamped["success"], true);
    assert_eq!(clamped["data"]["current"], 1);
    assert_eq!(item_ids(&clamped), item_ids(&first));
}

#[sqlx::test(migrations = "./migrations")]
async fn out_of_range_size_falls_back_to_the_default(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/resume/page?size=0").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["size"], 10);

    let app = common::build_test_app(pool);
    let body = body_json(get(app, "/resume/page?size=1000").await).await;
    assert_eq!(body["data"]["size"], 10);
}

#[sqlx::test(migrations = "./migrations")]
async fn unfiltered_page_returns_all_records_newest_first(pool: PgPool) {
    let ids = seed_in_order(
        &pool,
        &[
            json!({"originalContent": "oldest"}),
            json!({"originalContent": "middle"}),
            json!({"originalContent": "newest"}),
        ],
    )
    .await;

    let app = common::build_test_app(pool);
    let body = body_json(get(app, "/resume/page").await).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["total"], 3);
    let expected: Vec<i64> = ids.into_iter().rev().collect();
    assert_eq!(item_ids(&body), expected);
}

#[sqlx::test(migrations = "./migrations")]
async fn owner_filter_returns_only_matching_records_newest_first(pool: PgPool) {
    let ids = seed_in_order(
        &pool,
        &[
            json!({"originalContent": "a", "userId": "u-1"}),
            json!({"originalContent": "b", "userId": "u-2"}),
            json!({"originalContent": "c", "userId": "u-1"}),
        ],
    )
    .await;

    let app = common::build_test_app(pool);
    let body = body_json(get(app, "/resume/page?userId=u-1").await).await;

    assert_eq!(body["data"]["total"], 2);
    assert_eq!(item_ids(&body), vec![ids[2], ids[0]]);
    for item in body["data"]["items"].as_array().unwrap() {
        assert_eq!(item["userId"], "u-1");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_owner_filter_behaves_like_no_filter(pool: PgPool) {
    seed_in_order(
        &pool,
        &[
            json!({"originalContent": "a", "userId": "u-1"}),
            json!({"originalContent": "b"}),
        ],
    )
    .await;

    let app = common::build_test_app(pool);
    let body = body_json(get(app, "/resume/page?userId=").await).await;

    assert_eq!(body["data"]["total"], 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn page_offset_slices_the_ordered_scan(pool: PgPool) {
    let ids = seed_in_order(
        &pool,
        &[
            json!({"originalContent": "1"}),
            json!({"originalContent": "2"}),
            json!({"originalContent": "3"}),
            json!({"originalContent": "4"}),
            json!({"originalContent": "5"}),
        ],
    )
    .await;

    let app = common::build_test_app(pool);
    let body = body_json(get(app, "/resume/page?current=2&size=2").await).await;

    assert_eq!(body["data"]["total"], 5);
    assert_eq!(body["data"]["current"], 2);
    assert_eq!(body["data"]["size"], 2);
    // Newest first: page 2 of size 2 holds the third- and fourth-newest.
    assert_eq!(item_ids(&body), vec![ids[2], ids[1]]);
}

#[sqlx::test(migrations = "./migrations")]
async fn page_past_the_end_is_empty_but_well_formed(pool: PgPool) {
    seed_in_order(&pool, &[json!({"originalContent": "only"})]).await;

    let app = common::build_test_app(pool);
    let body = body_json(get(app, "/resume/page?current=9&size=10").await).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["total"], 1);
    assert!(body["data"]["items"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["current"], 9);
}
