//! Sample-data seeding for an empty record store.
//!
//! Populates the store with synthetic products at startup so cache
//! behavior can be exercised immediately. Generation is deterministic:
//! the RNG is seeded with a fixed value, so repeated runs produce the
//! same catalog.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use stockroom_core::{CatalogError, CatalogResult, Price, ProductDraft};
use stockroom_store::RecordStore;

/// Fixed RNG seed so seeded data is consistent across runs.
const SEED: u64 = 42;

const CATEGORIES: [&str; 10] = [
    "Electronics",
    "Books",
    "Clothing",
    "Home & Garden",
    "Sports",
    "Toys",
    "Food & Beverage",
    "Health & Beauty",
    "Automotive",
    "Office Supplies",
];

const SAMPLE_PRODUCTS: [(&str, &str); 20] = [
    ("MacBook Pro 16", "Apple M3 Max chip, 36GB RAM, 1TB SSD"),
    ("iPhone 15 Pro", "256GB, Titanium Blue"),
    ("Sony WH-1000XM5", "Wireless Noise Cancelling Headphones"),
    ("LG OLED TV", "55-inch 4K Smart TV"),
    ("Clean Code", "A Handbook of Agile Software Craftsmanship"),
    ("The Pragmatic Programmer", "Your Journey to Mastery"),
    ("Refactoring", "Improving the Design of Existing Code"),
    ("Domain-Driven Design", "Tackling Complexity in Software"),
    ("Nike Air Max", "Running Shoes, Size 10"),
    ("Levi's 501 Jeans", "Original Fit, Blue Denim"),
    ("North Face Jacket", "Waterproof, Winter Collection"),
    ("Timberland Boots", "Premium Leather, Wheat"),
    ("Dyson Vacuum", "Cordless Stick Vacuum V15"),
    ("KitchenAid Mixer", "Stand Mixer, 5-Quart"),
    ("Instant Pot", "7-in-1 Pressure Cooker"),
    ("Nest Thermostat", "Smart Learning Thermostat"),
    ("Peloton Bike", "Indoor Cycling Bike"),
    ("Yoga Mat", "Extra Thick Exercise Mat"),
    ("Fitbit Charge 6", "Fitness Tracker"),
    ("Garmin GPS Watch", "Forerunner 265"),
];

/// Base price in cents for a category, before random variation.
fn base_price_cents(category: &str) -> i64 {
    match category {
        "Electronics" => 50_000,
        "Books" => 3_000,
        "Clothing" => 5_000,
        "Home & Garden" => 10_000,
        "Sports" => 8_000,
        "Toys" => 2_500,
        "Food & Beverage" => 1_500,
        "Health & Beauty" => 4_000,
        "Automotive" => 20_000,
        "Office Supplies" => 2_000,
        _ => 5_000,
    }
}

/// Seed `count` sample products into `store` if it is empty.
///
/// Returns the number of records inserted; zero when the store already
/// holds data and seeding was skipped.
pub async fn seed_store<S: RecordStore>(store: &S, count: usize) -> CatalogResult<usize> {
    let existing = store.count().await?;
    if existing > 0 {
        tracing::info!(existing, "store already contains products, skipping seed");
        return Ok(0);
    }

    tracing::info!(count, "seeding sample products");
    let mut rng = StdRng::seed_from_u64(SEED);

    for i in 0..count {
        let category = CATEGORIES[i % CATEGORIES.len()];
        let (base_name, description) = SAMPLE_PRODUCTS[i % SAMPLE_PRODUCTS.len()];

        // Suffix repeats so names stay unique beyond the sample table
        let name = if i >= SAMPLE_PRODUCTS.len() {
            format!("{} - Model {}", base_name, i / SAMPLE_PRODUCTS.len() + 1)
        } else {
            base_name.to_string()
        };

        let cents = base_price_cents(category) + rng.random_range(0..50_000);
        let price = Price::from_cents(cents)
            .map_err(|e| CatalogError::store_unavailable(format!("seed price: {}", e)))?;
        let stock_quantity = 10 + rng.random_range(0..100u32);

        store
            .insert(ProductDraft {
                name,
                description: Some(description.to_string()),
                price,
                category: category.to_string(),
                stock_quantity,
            })
            .await?;
    }

    tracing::info!(count, "sample products loaded");
    Ok(count)
}
