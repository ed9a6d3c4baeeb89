use crate::model::{generate_id, now, Id, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl Brand {
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: generate_id(),
            name,
            description,
            is_active: true,
            created_at: now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    /// Product ids in the order they were attached
    pub products: Vec<Id>,
    pub created_at: Timestamp,
}

impl Category {
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: generate_id(),
            name,
            description,
            is_active: true,
            products: Vec::new(),
            created_at: now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Id,
    pub sku: String,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
    pub taxable: bool,
    pub is_active: bool,
    pub brand: Id,
    pub category: Id,
    pub created_at: Timestamp,
}

/// Input model for creating a product
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
    pub taxable: bool,
    pub brand: Id,
    pub category: Id,
}

impl NewProduct {
    pub fn into_product(self) -> Product {
        Product {
            id: generate_id(),
            sku: self.sku,
            name: self.name,
            description: self.description,
            quantity: self.quantity,
            price: self.price,
            taxable: self.taxable,
            is_active: true,
            brand: self.brand,
            category: self.category,
            created_at: now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_records_are_active() {
        let brand = Brand::new("Walton".to_string(), "Electronics".to_string());
        let category = Category::new("Audio".to_string(), "Speakers".to_string());

        assert!(brand.is_active);
        assert!(category.is_active);
        assert!(category.products.is_empty());
        assert_ne!(brand.id, category.id);
    }
}
