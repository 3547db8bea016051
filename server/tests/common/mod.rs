#![allow(dead_code)]
use std::net::SocketAddr;

use sqlx::{postgres::PgPoolOptions, PgPool};
use time::OffsetDateTime;

use charityevents_server::{api, AppState};

/// Spin up a real Axum server on a random port, returning its address and
/// the database pool. Returns None when TEST_DATABASE_URL is unset — the
/// tests write and delete rows and must not run against a shared database.
pub async fn setup_test_app() -> Option<(SocketAddr, PgPool)> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");

    // Run migrations to ensure schema is up-to-date
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let state = AppState { pool: pool.clone() };
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Some((addr, pool))
}

/// Unique display name so concurrent tests sharing a database cannot collide.
pub fn unique(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{} {}", prefix, nanos)
}

/// Create a test organization. Returns its id.
pub async fn create_test_org(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO organizations (name, mission, contact_email, contact_phone) \
         VALUES ($1, 'Test mission', 'contact@test.local', '+61 400 000 000') \
         RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("Failed to create test organization")
}

/// Create a test category. Returns its id.
pub async fn create_test_category(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO categories (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("Failed to create test category")
}

/// Create a test event with free entry, a $500 goal and $250 raised.
/// Returns its id.
pub async fn create_test_event(
    pool: &PgPool,
    category_id: i32,
    organization_id: i32,
    name: &str,
    date: OffsetDateTime,
    location: &str,
    is_suspended: bool,
) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO events (name, description, purpose, date, location, ticket_price, \
                             goal_amount, current_amount, is_suspended, category_id, organization_id) \
         VALUES ($1, 'Test description', 'Test purpose', $2, $3, 0, 500, 250, $4, $5, $6) \
         RETURNING id",
    )
    .bind(name)
    .bind(date)
    .bind(location)
    .bind(is_suspended)
    .bind(category_id)
    .bind(organization_id)
    .fetch_one(pool)
    .await
    .expect("Failed to create test event")
}

/// Build a reqwest client (reusable across requests in a test).
pub fn http_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Clean up all rows a test created. Call this at the end of tests.
pub async fn cleanup_test_data(pool: &PgPool, category_id: i32, organization_id: i32) {
    // Delete in dependency order (events first)
    let _ = sqlx::query("DELETE FROM events WHERE category_id = $1 OR organization_id = $2")
        .bind(category_id)
        .bind(organization_id)
        .execute(pool)
        .await;
    let _ = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(category_id)
        .execute(pool)
        .await;
    let _ = sqlx::query("DELETE FROM organizations WHERE id = $1")
        .bind(organization_id)
        .execute(pool)
        .await;
}
