use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;

use crate::config::SeedConfig;
use crate::model::{Brand, Category, NewProduct, NewUser, Role};
use crate::seed::data::{self, PriceRange, BRAND_CATEGORIES, FEATURED_BRANDS};
use crate::seed::fake::{unique_name, Faker};
use crate::seed::password::hash_password;
use crate::seed::progress::{ConsoleProgress, Progress, Status};
use crate::seed::SeedError;
use crate::store::traits::Store;

const GENERIC_PRICE_RANGE: PriceRange = PriceRange { min: 1, max: 1000 };

/// Replacement login for the seeded admin account
#[derive(Debug, Clone, PartialEq)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct SeedOptions {
    pub counts: SeedConfig,
    pub admin_credentials: Option<AdminCredentials>,
}

/// What a seeding run changed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub users_created: u64,
    pub users_skipped: u64,
    pub categories_created: u64,
    pub categories_skipped: u64,
    pub brands_created: u64,
    pub brands_skipped: u64,
    pub products_created: u64,
    pub products_skipped: u64,
}

impl SeedReport {
    pub fn records_created(&self) -> u64 {
        self.users_created + self.categories_created + self.brands_created + self.products_created
    }
}

/// Seed the store with defaults and console output
pub async fn load_seed_data<S: Store + ?Sized>(store: &S, counts: SeedConfig) -> Result<SeedReport> {
    let options = SeedOptions {
        counts,
        admin_credentials: None,
    };
    seed_database(store, &options, &mut Faker::new(), &ConsoleProgress).await
}

/// Run the seeder, then close the store whatever the outcome
pub async fn run_seed<S: Store + ?Sized>(
    store: &S,
    options: &SeedOptions,
    faker: &mut Faker,
    progress: &dyn Progress,
) -> Result<SeedReport> {
    let result = seed_database(store, options, faker, progress).await;
    if let Err(e) = &result {
        progress.report(Status::Failed, "Error while seeding database");
        log::error!("{:#}", e);
    }

    store.close().await;
    progress.report(Status::Info, "Database connection closed!");

    result
}

/// Populate users, categories, brands and products.
///
/// Every step checks what already exists first, so repeated runs converge
/// on the same catalog instead of duplicating it.
pub async fn seed_database<S: Store + ?Sized>(
    store: &S,
    options: &SeedOptions,
    faker: &mut Faker,
    progress: &dyn Progress,
) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    progress.report(Status::Info, "Seed database started");

    seed_users(store, options, progress, &mut report).await?;
    let categories = seed_categories(store, &options.counts, faker, progress, &mut report).await?;
    let featured = seed_featured_brands(store, progress, &mut report).await?;
    seed_additional_brands(store, &options.counts, faker, progress, &mut report).await?;
    seed_products(
        store,
        &options.counts,
        &featured,
        &categories,
        faker,
        progress,
        &mut report,
    )
    .await?;

    log::info!(
        "Seeding finished: {} users, {} categories, {} brands, {} products created",
        report.users_created,
        report.categories_created,
        report.brands_created,
        report.products_created
    );
    Ok(report)
}

async fn seed_users<S: Store + ?Sized>(
    store: &S,
    options: &SeedOptions,
    progress: &dyn Progress,
    report: &mut SeedReport,
) -> Result<()> {
    let mut users = data::seed_users();
    if let Some(admin) = &options.admin_credentials {
        if let Some(user) = users.iter_mut().find(|u| u.role == Role::Admin) {
            user.email = admin.email.clone();
            user.password = admin.password.clone();
        }
    }

    for user in users {
        if user.email.is_empty() || user.password.is_empty() {
            return Err(SeedError::MissingCredentials.into());
        }

        if store.find_user_by_email(&user.email).await?.is_some() {
            progress.report(
                Status::Skipped,
                &format!("User {} already exists, skipping.", user.email),
            );
            report.users_skipped += 1;
            continue;
        }

        let password_hash =
            hash_password(&user.password).map_err(|e| SeedError::PasswordHash {
                email: user.email.clone(),
                message: e.to_string(),
            })?;
        let email = user.email.clone();
        store
            .insert_user(NewUser {
                email: user.email,
                password_hash,
                first_name: user.first_name,
                last_name: user.last_name,
                role: user.role,
            })
            .await?;

        progress.report(Status::Done, &format!("User {} seeded.", email));
        report.users_created += 1;
    }

    Ok(())
}

async fn seed_categories<S: Store + ?Sized>(
    store: &S,
    counts: &SeedConfig,
    faker: &mut Faker,
    progress: &dyn Progress,
    report: &mut SeedReport,
) -> Result<Vec<Category>> {
    let fixed = BRAND_CATEGORIES.len() as u64;
    if store.count_categories().await? >= counts.num_categories + fixed {
        progress.report(
            Status::Skipped,
            "Sufficient number of categories already exist, skipping seeding for categories.",
        );
        let categories = store.list_categories().await?;
        report.categories_skipped += categories.len() as u64;
        return Ok(categories);
    }

    for entry in BRAND_CATEGORIES {
        if store.find_category_by_name(entry.name).await?.is_some() {
            report.categories_skipped += 1;
        } else {
            store
                .insert_category(Category::new(
                    entry.name.to_string(),
                    entry.description.to_string(),
                ))
                .await?;
            report.categories_created += 1;
        }
    }

    let mut taken: HashSet<String> = store
        .list_categories()
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();
    let existing = store.count_categories().await?;
    for _ in existing..counts.num_categories {
        let name = unique_name(&faker.department(), &taken);
        taken.insert(name.clone());
        store
            .insert_category(Category::new(name, faker.sentence()))
            .await?;
        report.categories_created += 1;
    }

    progress.report(
        Status::Done,
        "Categories seeded, including brand-specific categories.",
    );
    store.list_categories().await
}

/// Find or create each featured brand, returned in catalog order
async fn seed_featured_brands<S: Store + ?Sized>(
    store: &S,
    progress: &dyn Progress,
    report: &mut SeedReport,
) -> Result<Vec<Brand>> {
    let mut featured = Vec::with_capacity(FEATURED_BRANDS.len());

    for entry in FEATURED_BRANDS {
        match store.find_brand_by_name(entry.name).await? {
            Some(existing) => {
                progress.report(
                    Status::Skipped,
                    &format!("{} brand already exists, skipping seeding.", entry.name),
                );
                report.brands_skipped += 1;
                featured.push(existing);
            }
            None => {
                let brand = Brand::new(entry.name.to_string(), entry.description.to_string());
                store.insert_brand(brand.clone()).await?;
                progress.report(Status::Done, &format!("{} brand seeded.", entry.name));
                report.brands_created += 1;
                featured.push(brand);
            }
        }
    }

    Ok(featured)
}

async fn seed_additional_brands<S: Store + ?Sized>(
    store: &S,
    counts: &SeedConfig,
    faker: &mut Faker,
    progress: &dyn Progress,
    report: &mut SeedReport,
) -> Result<()> {
    let existing = store.count_brands().await?;
    if existing >= counts.num_brands {
        progress.report(
            Status::Skipped,
            "Sufficient number of brands already exist, skipping seeding for additional brands.",
        );
        return Ok(());
    }

    let mut taken: HashSet<String> = store
        .list_brands()
        .await?
        .into_iter()
        .map(|b| b.name)
        .collect();
    for _ in existing..counts.num_brands {
        let name = unique_name(&faker.company_name(), &taken);
        taken.insert(name.clone());
        store.insert_brand(Brand::new(name, faker.sentence())).await?;
        report.brands_created += 1;
    }

    progress.report(Status::Done, "Additional brands seeded.");
    Ok(())
}

async fn seed_products<S: Store + ?Sized>(
    store: &S,
    counts: &SeedConfig,
    featured: &[Brand],
    categories: &[Category],
    faker: &mut Faker,
    progress: &dyn Progress,
    report: &mut SeedReport,
) -> Result<()> {
    let threshold =
        counts.num_products + counts.brand_specific_products * FEATURED_BRANDS.len() as u64;
    let existing = store.count_products().await?;
    if existing >= threshold {
        progress.report(
            Status::Skipped,
            "Sufficient number of products already exist, skipping seeding for products.",
        );
        report.products_skipped += existing;
        return Ok(());
    }

    let brands = store.list_brands().await?;

    for brand in featured {
        let existing = store.count_products_for_brand(&brand.id).await?;
        let remaining = counts.brand_specific_products.saturating_sub(existing);
        if remaining == 0 {
            progress.report(
                Status::Skipped,
                &format!(
                    "Sufficient {} products already exist, skipping seeding.",
                    brand.name
                ),
            );
            report.products_skipped += existing;
            continue;
        }

        seed_brand_products(store, brand, remaining, categories, faker, report).await?;
        progress.report(Status::Done, &format!("{} products seeded.", brand.name));
    }

    let remaining = counts
        .num_products
        .saturating_sub(store.count_products().await?);
    if remaining == 0 {
        return Ok(());
    }

    seed_generic_products(store, remaining, &brands, categories, faker, report).await?;
    progress.report(
        Status::Done,
        "Additional products seeded and associated with categories.",
    );
    Ok(())
}

/// Insert `count` products drawn from the brand's product lines
async fn seed_brand_products<S: Store + ?Sized>(
    store: &S,
    brand: &Brand,
    count: u64,
    categories: &[Category],
    faker: &mut Faker,
    report: &mut SeedReport,
) -> Result<()> {
    let lines = data::product_lines(&brand.name);
    if lines.is_empty() {
        return Err(SeedError::EmptyCatalog("product lines").into());
    }

    for _ in 0..count {
        let line = lines[faker.index(lines.len())];
        let category = categories
            .iter()
            .find(|c| c.name == line.category)
            .ok_or_else(|| SeedError::UnknownCategory(line.category.to_string()))?;

        let product = store
            .insert_product(NewProduct {
                sku: faker.alphanumeric(10),
                name: format!("{} {} {}", brand.name, line.prefix, faker.product_name()),
                description: format!(
                    "High-quality {} by {}. {}",
                    line.kind,
                    brand.name,
                    faker.sentence()
                ),
                quantity: faker.int(1, 50),
                price: faker.price(line.price_range),
                taxable: true,
                brand: brand.id.clone(),
                category: category.id.clone(),
            })
            .await?;
        store
            .push_category_product(&category.id, &product.id)
            .await?;
        report.products_created += 1;
    }

    Ok(())
}

/// Insert `count` products with a random brand and category
async fn seed_generic_products<S: Store + ?Sized>(
    store: &S,
    count: u64,
    brands: &[Brand],
    categories: &[Category],
    faker: &mut Faker,
    report: &mut SeedReport,
) -> Result<()> {
    if brands.is_empty() {
        return Err(SeedError::EmptyCatalog("brands").into());
    }
    if categories.is_empty() {
        return Err(SeedError::EmptyCatalog("categories").into());
    }

    for _ in 0..count {
        let category = &categories[faker.index(categories.len())];
        let brand = &brands[faker.index(brands.len())];

        let product = store
            .insert_product(NewProduct {
                sku: faker.alphanumeric(10),
                name: faker.product_name(),
                description: faker.sentence(),
                quantity: faker.int(1, 100),
                price: faker.price(GENERIC_PRICE_RANGE),
                taxable: faker.boolean(),
                brand: brand.id.clone(),
                category: category.id.clone(),
            })
            .await?;
        store
            .push_category_product(&category.id, &product.id)
            .await?;
        report.products_created += 1;
    }

    Ok(())
}
