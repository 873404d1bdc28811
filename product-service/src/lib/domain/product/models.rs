use std::fmt;

/// Product entity.
///
/// Plain catalog record. No invariants beyond field presence on create; no
/// versioning or soft delete.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// Product unique identifier (database-assigned sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new product.
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// Command to update an existing product.
///
/// All fields are optional; only provided fields change.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductCommand {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}
