use serde::Serialize;

/// An event category, e.g. "Fun Run" or "Gala Dinner".
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}
