//! Application state shared across handlers

use sqlx::PgPool;

use crate::repositories::ProductRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub product_repository: ProductRepository,
}

impl AppState {
    /// Build the state around an already opened pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            product_repository: ProductRepository::new(pool),
        }
    }
}
