use crate::model::{Brand, Category, Id, NewProduct, NewUser, Product, User};
use anyhow::Result;

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
    /// Insert a user; fails if the email is already taken
    async fn insert_user(&self, user: NewUser) -> Result<User>;
    async fn count_users(&self) -> Result<u64>;
}

#[async_trait::async_trait]
pub trait CategoryStore: Send + Sync {
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>>;
    /// Insert a category; fails if the name is already taken
    async fn insert_category(&self, category: Category) -> Result<()>;
    async fn count_categories(&self) -> Result<u64>;
    async fn list_categories(&self) -> Result<Vec<Category>>;
    /// Append a product id to the category's product list
    async fn push_category_product(&self, category_id: &Id, product_id: &Id) -> Result<()>;
}

#[async_trait::async_trait]
pub trait BrandStore: Send + Sync {
    async fn find_brand_by_name(&self, name: &str) -> Result<Option<Brand>>;
    /// Insert a brand; fails if the name is already taken
    async fn insert_brand(&self, brand: Brand) -> Result<()>;
    async fn count_brands(&self) -> Result<u64>;
    async fn list_brands(&self) -> Result<Vec<Brand>>;
}

#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    async fn insert_product(&self, product: NewProduct) -> Result<Product>;
    async fn count_products(&self) -> Result<u64>;
    async fn count_products_for_brand(&self, brand_id: &Id) -> Result<u64>;
}

#[async_trait::async_trait]
pub trait Store: UserStore + CategoryStore + BrandStore + ProductStore + Send + Sync {
    /// Cheap round trip used by health checks
    async fn ping(&self) -> Result<()>;
    /// Release the underlying connections
    async fn close(&self);
}
