use axum::{extract::State, Json};
use sqlx::PgPool;

use crate::{error::Result, models::category::Category};

pub async fn list(State(pool): State<PgPool>) -> Result<Json<Vec<Category>>> {
    let categories =
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
            .fetch_all(&pool)
            .await?;

    Ok(Json(categories))
}
