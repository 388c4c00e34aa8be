//! Fixture helpers: raw inserts for the rows admin flows would normally own.

#![allow(dead_code)]

use sqlx::PgPool;

pub async fn organization(pool: &PgPool) -> i64 {
    sqlx::query_scalar("INSERT INTO organizations (name) VALUES ('Faculty of Science') RETURNING id")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// A service whose window contains the current instant under both the
/// absolute and the daily reading.
pub async fn open_service(pool: &PgPool, org: i64, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO services (organization_id, name, opens_at, closes_at) \
         VALUES ($1, $2, NOW() - INTERVAL '1 hour', NOW() + INTERVAL '1 hour') RETURNING id",
    )
    .bind(org)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// A service whose window excludes the current instant under both readings.
pub async fn closed_service(pool: &PgPool, org: i64, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO services (organization_id, name, opens_at, closes_at) \
         VALUES ($1, $2, NOW() + INTERVAL '2 hours', NOW() + INTERVAL '3 hours') RETURNING id",
    )
    .bind(org)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn group(pool: &PgPool, org: i64, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO groups (organization_id, name) VALUES ($1, $2) RETURNING id")
        .bind(org)
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn client(pool: &PgPool, org: i64, registration_id: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO clients (organization_id, registration_id, name) \
         VALUES ($1, $2, $2) RETURNING id",
    )
    .bind(org)
    .bind(registration_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn add_to_group(pool: &PgPool, client_id: i64, group_id: i64) {
    sqlx::query("INSERT INTO client_groups (client_id, group_id) VALUES ($1, $2)")
        .bind(client_id)
        .bind(group_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn queue(pool: &PgPool, org: i64, service_id: i64, name: &str, priority: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO queues (organization_id, service_id, name, priority) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(org)
    .bind(service_id)
    .bind(name)
    .bind(priority)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn attach_group(pool: &PgPool, queue_id: i64, group_id: i64) {
    sqlx::query("INSERT INTO queue_groups (queue_id, group_id) VALUES ($1, $2)")
        .bind(queue_id)
        .bind(group_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn desk(pool: &PgPool, org: i64, attendant_id: Option<i64>, services: &[i64]) -> i64 {
    let desk_id: i64 = sqlx::query_scalar(
        "INSERT INTO desks (organization_id, name, attendant_id) \
         VALUES ($1, 'Desk 1', $2) RETURNING id",
    )
    .bind(org)
    .bind(attendant_id)
    .fetch_one(pool)
    .await
    .unwrap();
    for &service_id in services {
        sqlx::query("INSERT INTO desk_services (desk_id, service_id) VALUES ($1, $2)")
            .bind(desk_id)
            .bind(service_id)
            .execute(pool)
            .await
            .unwrap();
    }
    desk_id
}

/// Insert a waiting entry with a controlled arrival time (`secs_ago` seconds
/// before now) so tests do not depend on statement timing.
pub async fn enqueue_at(pool: &PgPool, client_id: i64, queue_id: i64, secs_ago: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO queue_entries (client_id, queue_id, enqueued_at) \
         VALUES ($1, $2, NOW() - make_interval(secs => $3)) RETURNING id",
    )
    .bind(client_id)
    .bind(queue_id)
    .bind(secs_ago as f64)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn waiting_count_for_client(pool: &PgPool, client_id: i64) -> i64 {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM queue_entries WHERE client_id = $1 AND called_at IS NULL",
    )
    .bind(client_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
