use axum::Json;

use crate::services::pricing::{self, CatalogEntry};

// GET /api/services
pub async fn get_services() -> Json<Vec<CatalogEntry>> {
    Json(pricing::catalog())
}
