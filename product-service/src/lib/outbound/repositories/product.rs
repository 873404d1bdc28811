use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductRepository;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: PgRow) -> Result<Product, ProductError> {
        Ok(Product {
            id: ProductId(
                row.try_get("id")
                    .map_err(|e| ProductError::DatabaseError(e.to_string()))?,
            ),
            name: row
                .try_get("name")
                .map_err(|e| ProductError::DatabaseError(e.to_string()))?,
            price: row
                .try_get("price")
                .map_err(|e| ProductError::DatabaseError(e.to_string()))?,
            category: row
                .try_get("category")
                .map_err(|e| ProductError::DatabaseError(e.to_string()))?,
        })
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, command: CreateProductCommand) -> Result<Product, ProductError> {
        let row = sqlx::query(
            r#"
            INSERT INTO products (name, price, category)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, category
            "#,
        )
        .bind(&command.name)
        .bind(command.price)
        .bind(&command.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Self::map_row(row)
    }

    async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, category
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::map_row).collect()
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, price, category
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        row.map(Self::map_row).transpose()
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, price = $3, category = $4
            WHERE id = $1
            "#,
        )
        .bind(product.id.0)
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.category)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(product.id.0));
        }

        Ok(product)
    }

    async fn delete(&self, id: &ProductId) -> Result<bool, ProductError> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
