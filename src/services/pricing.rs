use serde::Serialize;

use crate::models::ServiceTier;

pub fn price_for(tier: ServiceTier) -> f64 {
    match tier {
        ServiceTier::Basic => 15.0,
        ServiceTier::Deluxe => 25.0,
        ServiceTier::Royal => 50.0,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub price: f64,
}

/// The public service listing, cheapest first.
pub fn catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            id: ServiceTier::Basic.as_str(),
            title: "Basic Rinse",
            description: "Exterior wash & dry",
            price: price_for(ServiceTier::Basic),
        },
        CatalogEntry {
            id: ServiceTier::Deluxe.as_str(),
            title: "Deluxe Rinse",
            description: "Exterior + interior vacuum",
            price: price_for(ServiceTier::Deluxe),
        },
        CatalogEntry {
            id: ServiceTier::Royal.as_str(),
            title: "Royal Rinse",
            description: "Full detail: wax, polish, deep interior clean",
            price: price_for(ServiceTier::Royal),
        },
    ]
}
