//! Repositories for database operations

use common::error::{DatabaseError, DatabaseResult};
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;

use crate::models::{InventoryStats, NewProduct, Product};

/// Product repository for database operations
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

fn product_from_row(row: PgRow) -> Product {
    Product {
        id: row.get("id"),
        name: row.get("name"),
        category: row.get("category"),
        quantity: row.get("quantity"),
        price: row.get("price"),
        description: row.get("description"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl ProductRepository {
    /// Create a new product repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get all products, newest first
    pub async fn list_all(&self) -> DatabaseResult<Vec<Product>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, category, quantity, price, description, created_at, updated_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(rows.into_iter().map(product_from_row).collect())
    }

    /// Find a product by ID
    pub async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<Product>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, category, quantity, price, description, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(row.map(product_from_row))
    }

    /// Insert a product and return the id the store generated for it
    pub async fn create(&self, product: &NewProduct) -> DatabaseResult<i32> {
        info!("Creating product: {}", product.name);

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO products (name, category, quantity, price, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.quantity)
        .bind(product.price)
        .bind(&product.description)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(id)
    }

    /// Replace the mutable fields of a product
    ///
    /// Returns `false` when no row has the given id.
    pub async fn update(&self, id: i32, product: &NewProduct) -> DatabaseResult<bool> {
        info!("Updating product: {}", id);

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $1, category = $2, quantity = $3, price = $4, description = $5,
                updated_at = NOW()
            WHERE id = $6
            "#,
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.quantity)
        .bind(product.price)
        .bind(&product.description)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a product by ID
    ///
    /// Returns `false` when no row has the given id.
    pub async fn delete(&self, id: i32) -> DatabaseResult<bool> {
        info!("Deleting product: {}", id);

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(result.rows_affected() > 0)
    }

    /// Aggregate counts and stock value; all zero on an empty table
    pub async fn stats(&self) -> DatabaseResult<InventoryStats> {
        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*) AS total_products,
                COALESCE(SUM(quantity), 0)::BIGINT AS total_items,
                COUNT(DISTINCT category) AS categories,
                COALESCE(SUM(quantity * price), 0)::NUMERIC AS total_value
            FROM products
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(InventoryStats {
            total_products: row.get("total_products"),
            total_items: row.get("total_items"),
            categories: row.get("categories"),
            total_value: row.get("total_value"),
        })
    }
}
