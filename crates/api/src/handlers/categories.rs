//! Handlers for the category mapping table.

use axum::extract::Query;
use axum::Json;
use flowerdesk_core::category::{category_table, client_categories, map_to_client_category};
use serde::{Deserialize, Serialize};

use crate::response::DataResponse;

/// One admin → client mapping.
#[derive(Debug, Serialize)]
pub struct CategoryMapping {
    pub admin_category: String,
    pub client_category: &'static str,
}

/// The full table plus the distinct client categories.
#[derive(Debug, Serialize)]
pub struct CategoryTable {
    pub mappings: Vec<CategoryMapping>,
    pub client_categories: Vec<&'static str>,
}

/// Query parameters for `GET /categories/map`.
#[derive(Debug, Deserialize)]
pub struct MapParams {
    pub category: String,
}

/// GET /api/categories
pub async fn list_categories() -> Json<DataResponse<CategoryTable>> {
    let mappings = category_table()
        .iter()
        .map(|&(admin, client)| CategoryMapping {
            admin_category: admin.to_string(),
            client_category: client,
        })
        .collect();

    Json(DataResponse {
        data: CategoryTable {
            mappings,
            client_categories: client_categories(),
        },
    })
}

/// GET /api/categories/map?category=
///
/// Map a single admin label; unknown labels map to the fallback category.
pub async fn map_category(
    Query(params): Query<MapParams>,
) -> Json<DataResponse<CategoryMapping>> {
    let client_category = map_to_client_category(&params.category);
    Json(DataResponse {
        data: CategoryMapping {
            admin_category: params.category,
            client_category,
        },
    })
}
