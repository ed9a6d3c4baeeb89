use anyhow::{bail, Result};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::model::{Brand, Category, Id, NewProduct, NewUser, Product, User};
use crate::store::traits::{BrandStore, CategoryStore, ProductStore, Store, UserStore};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    brands: Vec<Brand>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// In-process store with the same uniqueness rules as the Postgres schema.
///
/// Records keep insertion order, which makes list results stable for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Snapshot of every stored user
    pub fn users(&self) -> Vec<User> {
        self.tables.read().users.clone()
    }

    /// Snapshot of every stored product
    pub fn products(&self) -> Vec<Product> {
        self.tables.read().products.clone()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            bail!("Store is closed");
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.ensure_open()?;
        let tables = self.tables.read();
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User> {
        self.ensure_open()?;
        let mut tables = self.tables.write();
        if tables.users.iter().any(|u| u.email == user.email) {
            bail!("User with email {} already exists", user.email);
        }
        let user = user.into_user();
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn count_users(&self) -> Result<u64> {
        self.ensure_open()?;
        Ok(self.tables.read().users.len() as u64)
    }
}

#[async_trait::async_trait]
impl CategoryStore for MemoryStore {
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        self.ensure_open()?;
        let tables = self.tables.read();
        Ok(tables.categories.iter().find(|c| c.name == name).cloned())
    }

    async fn insert_category(&self, category: Category) -> Result<()> {
        self.ensure_open()?;
        let mut tables = self.tables.write();
        if tables.categories.iter().any(|c| c.name == category.name) {
            bail!("Category {} already exists", category.name);
        }
        tables.categories.push(category);
        Ok(())
    }

    async fn count_categories(&self) -> Result<u64> {
        self.ensure_open()?;
        Ok(self.tables.read().categories.len() as u64)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.ensure_open()?;
        Ok(self.tables.read().categories.clone())
    }

    async fn push_category_product(&self, category_id: &Id, product_id: &Id) -> Result<()> {
        self.ensure_open()?;
        let mut tables = self.tables.write();
        match tables.categories.iter_mut().find(|c| &c.id == category_id) {
            Some(category) => {
                category.products.push(product_id.clone());
                Ok(())
            }
            None => bail!("Category {} not found", category_id),
        }
    }
}

#[async_trait::async_trait]
impl BrandStore for MemoryStore {
    async fn find_brand_by_name(&self, name: &str) -> Result<Option<Brand>> {
        self.ensure_open()?;
        let tables = self.tables.read();
        Ok(tables.brands.iter().find(|b| b.name == name).cloned())
    }

    async fn insert_brand(&self, brand: Brand) -> Result<()> {
        self.ensure_open()?;
        let mut tables = self.tables.write();
        if tables.brands.iter().any(|b| b.name == brand.name) {
            bail!("Brand {} already exists", brand.name);
        }
        tables.brands.push(brand);
        Ok(())
    }

    async fn count_brands(&self) -> Result<u64> {
        self.ensure_open()?;
        Ok(self.tables.read().brands.len() as u64)
    }

    async fn list_brands(&self) -> Result<Vec<Brand>> {
        self.ensure_open()?;
        Ok(self.tables.read().brands.clone())
    }
}

#[async_trait::async_trait]
impl ProductStore for MemoryStore {
    async fn insert_product(&self, product: NewProduct) -> Result<Product> {
        self.ensure_open()?;
        let mut tables = self.tables.write();
        if !tables.brands.iter().any(|b| b.id == product.brand) {
            bail!("Brand {} not found", product.brand);
        }
        if !tables.categories.iter().any(|c| c.id == product.category) {
            bail!("Category {} not found", product.category);
        }
        let product = product.into_product();
        tables.products.push(product.clone());
        Ok(product)
    }

    async fn count_products(&self) -> Result<u64> {
        self.ensure_open()?;
        Ok(self.tables.read().products.len() as u64)
    }

    async fn count_products_for_brand(&self, brand_id: &Id) -> Result<u64> {
        self.ensure_open()?;
        let tables = self.tables.read();
        Ok(tables.products.iter().filter(|p| &p.brand == brand_id).count() as u64)
    }
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<()> {
        self.ensure_open()
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "hash".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            role: Role::Member,
        }
    }

    #[tokio::test]
    async fn test_user_email_is_unique() {
        let store = MemoryStore::new();
        store.insert_user(new_user("a@example.com")).await.unwrap();

        assert!(store.insert_user(new_user("a@example.com")).await.is_err());
        assert_eq!(store.count_users().await.unwrap(), 1);
        assert!(store
            .find_user_by_email("a@example.com")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_push_category_product_preserves_order() {
        let store = MemoryStore::new();
        let category = Category::new("Audio".to_string(), "Sound".to_string());
        let category_id = category.id.clone();
        store.insert_category(category).await.unwrap();

        store
            .push_category_product(&category_id, &"p1".to_string())
            .await
            .unwrap();
        store
            .push_category_product(&category_id, &"p2".to_string())
            .await
            .unwrap();

        let stored = store.find_category_by_name("Audio").await.unwrap().unwrap();
        assert_eq!(stored.products, vec!["p1".to_string(), "p2".to_string()]);
        assert!(store
            .push_category_product(&"missing".to_string(), &"p3".to_string())
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_product_requires_existing_references() {
        let store = MemoryStore::new();
        let product = NewProduct {
            sku: "ABC".to_string(),
            name: "Thing".to_string(),
            description: "A thing".to_string(),
            quantity: 1,
            price: 1.0,
            taxable: false,
            brand: "nope".to_string(),
            category: "nope".to_string(),
        };

        assert!(store.insert_product(product).await.is_err());
        assert_eq!(store.count_products().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_closed_store_rejects_operations() {
        let store = MemoryStore::new();
        assert!(store.ping().await.is_ok());

        store.close().await;

        assert!(store.is_closed());
        assert!(store.ping().await.is_err());
        assert!(store.count_brands().await.is_err());
    }
}
