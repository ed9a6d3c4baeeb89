use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, postgres::PgRow, PgPool, Row};

use crate::model::{Brand, Category, Id, NewProduct, NewUser, Product, User};
use crate::store::traits::{BrandStore, CategoryStore, ProductStore, Store, UserStore};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        role TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS brands (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        description TEXT NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS categories (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        description TEXT NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        products TEXT[] NOT NULL DEFAULT '{}',
        created_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id TEXT PRIMARY KEY,
        sku TEXT NOT NULL,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        quantity INTEGER NOT NULL,
        price DOUBLE PRECISION NOT NULL,
        taxable BOOLEAN NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        brand_id TEXT NOT NULL REFERENCES brands (id),
        category_id TEXT NOT NULL REFERENCES categories (id),
        created_at TIMESTAMPTZ NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS products_brand_id_idx ON products (brand_id)",
];

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool })
    }

    /// Create the storefront tables if they are missing
    pub async fn migrate(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .context("Failed to run schema migration")?;
        }
        log::info!("Database schema is up to date");
        Ok(())
    }
}

fn user_from_row(row: &PgRow) -> Result<User> {
    let role: String = row.try_get("role")?;
    Ok(User {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        password: row.try_get("password")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        role: role.parse()?,
        created_at: row.try_get("created_at")?,
    })
}

fn brand_from_row(row: &PgRow) -> Result<Brand> {
    Ok(Brand {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        is_active: row.try_get("is_active")?,
        created_at: row.try_get("created_at")?,
    })
}

fn category_from_row(row: &PgRow) -> Result<Category> {
    Ok(Category {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        is_active: row.try_get("is_active")?,
        products: row.try_get("products")?,
        created_at: row.try_get("created_at")?,
    })
}

fn count_from_row(row: &PgRow) -> Result<u64> {
    let count: i64 = row.try_get("count")?;
    Ok(count.max(0) as u64)
}

#[async_trait::async_trait]
impl UserStore for PostgresStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, email, password, first_name, last_name, role, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user")?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn insert_user(&self, user: NewUser) -> Result<User> {
        let user = user.into_user();
        sqlx::query(
            r#"
            INSERT INTO users (id, email, password, first_name, last_name, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to insert user {}", user.email))?;

        Ok(user)
    }

    async fn count_users(&self) -> Result<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count users")?;
        count_from_row(&row)
    }
}

#[async_trait::async_trait]
impl CategoryStore for PostgresStore {
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let row = sqlx::query(
            "SELECT id, name, description, is_active, products, created_at FROM categories WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch category")?;

        row.as_ref().map(category_from_row).transpose()
    }

    async fn insert_category(&self, category: Category) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, description, is_active, products, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.is_active)
        .bind(&category.products)
        .bind(category.created_at)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to insert category {}", category.name))?;

        Ok(())
    }

    async fn count_categories(&self) -> Result<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM categories")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count categories")?;
        count_from_row(&row)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let rows = sqlx::query(
            "SELECT id, name, description, is_active, products, created_at FROM categories ORDER BY created_at, name",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list categories")?;

        rows.iter().map(category_from_row).collect()
    }

    async fn push_category_product(&self, category_id: &Id, product_id: &Id) -> Result<()> {
        let result =
            sqlx::query("UPDATE categories SET products = array_append(products, $2) WHERE id = $1")
                .bind(category_id)
                .bind(product_id)
                .execute(&self.pool)
                .await
                .context("Failed to attach product to category")?;

        if result.rows_affected() == 0 {
            anyhow::bail!("Category {} not found", category_id);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrandStore for PostgresStore {
    async fn find_brand_by_name(&self, name: &str) -> Result<Option<Brand>> {
        let row = sqlx::query(
            "SELECT id, name, description, is_active, created_at FROM brands WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch brand")?;

        row.as_ref().map(brand_from_row).transpose()
    }

    async fn insert_brand(&self, brand: Brand) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO brands (id, name, description, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&brand.id)
        .bind(&brand.name)
        .bind(&brand.description)
        .bind(brand.is_active)
        .bind(brand.created_at)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to insert brand {}", brand.name))?;

        Ok(())
    }

    async fn count_brands(&self) -> Result<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM brands")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count brands")?;
        count_from_row(&row)
    }

    async fn list_brands(&self) -> Result<Vec<Brand>> {
        let rows = sqlx::query(
            "SELECT id, name, description, is_active, created_at FROM brands ORDER BY created_at, name",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list brands")?;

        rows.iter().map(brand_from_row).collect()
    }
}

#[async_trait::async_trait]
impl ProductStore for PostgresStore {
    async fn insert_product(&self, product: NewProduct) -> Result<Product> {
        let product = product.into_product();
        sqlx::query(
            r#"
            INSERT INTO products
                (id, sku, name, description, quantity, price, taxable, is_active, brand_id, category_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(&product.id)
        .bind(&product.sku)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.quantity)
        .bind(product.price)
        .bind(product.taxable)
        .bind(product.is_active)
        .bind(&product.brand)
        .bind(&product.category)
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to insert product {}", product.sku))?;

        Ok(product)
    }

    async fn count_products(&self) -> Result<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM products")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count products")?;
        count_from_row(&row)
    }

    async fn count_products_for_brand(&self, brand_id: &Id) -> Result<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM products WHERE brand_id = $1")
            .bind(brand_id)
            .fetch_one(&self.pool)
            .await
            .context("Failed to count brand products")?;
        count_from_row(&row)
    }
}

#[async_trait::async_trait]
impl Store for PostgresStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database ping failed")?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
