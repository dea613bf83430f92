//! Marketplace API endpoints.
//!
//! The catalog is a fixed MVP listing; purchases and uploads stay in the
//! frontend mock until a real marketplace service exists.

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::AppState;

/// A marketplace listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceProduct {
    pub id: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub rating: f64,
    pub downloads: u64,
    pub category: String,
}

/// Query parameters for the catalog.
#[derive(Debug, Deserialize)]
pub struct MarketplaceQuery {
    #[serde(default)]
    pub category: Option<String>,
}

fn catalog() -> Vec<MarketplaceProduct> {
    vec![
        MarketplaceProduct {
            id: 1,
            title: "AI Logo Generator".to_string(),
            kind: "tool".to_string(),
            price: 29.99,
            rating: 4.7,
            downloads: 234,
            category: "Design".to_string(),
        },
        MarketplaceProduct {
            id: 2,
            title: "Content Templates Pack".to_string(),
            kind: "template".to_string(),
            price: 19.99,
            rating: 4.5,
            downloads: 156,
            category: "Content".to_string(),
        },
    ]
}

/// GET /api/marketplace - List products, optionally filtered by category.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<MarketplaceQuery>,
) -> ApiResult<Vec<MarketplaceProduct>> {
    let mut products = catalog();

    if let Some(category) = query.category.as_deref() {
        let category = category.to_lowercase();
        if !category.is_empty() && category != "all" {
            products.retain(|p| p.category.to_lowercase() == category);
        }
    }

    success(products, state.store.revision())
}
