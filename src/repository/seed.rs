//! Sample data for a fresh store.

use tracing::info;

use crate::models::{CategoryInput, Price, ProductInput};

use super::{CategoryRepository, ProductRepository, Result};

const CATEGORY_NAMES: [&str; 30] = [
    "Electronics", "Office", "Home", "Kitchen", "Sports", "Outdoors", "Toys", "Clothing",
    "Books", "Beauty", "Automotive", "Garden", "Health", "Pet Supplies", "Baby", "Grocery",
    "Tools", "Furniture", "Jewelry", "Music", "Movies", "Games", "Software", "Industrial",
    "Art", "Craft", "Luggage", "Footwear", "Watches", "Accessories",
];

const ADJECTIVES: [&str; 15] = [
    "Portable", "Advanced", "Classic", "Smart", "Compact", "Deluxe", "Eco", "Premium", "Mini",
    "Pro", "Ultra", "Lightweight", "Durable", "Wireless", "Rechargeable",
];

const NOUNS: [&str; 20] = [
    "Speaker", "Headphones", "Camera", "Blender", "Backpack", "Sneakers", "Watch", "Lamp",
    "Thermostat", "Drill", "Mixer", "Tablet", "Chair", "Book", "Game", "Router", "Monitor",
    "Keyboard", "Mouse", "Printer",
];

const SAMPLE_PRODUCTS: usize = 50;

/// Populates 30 categories and 50 products, assigned round-robin.
///
/// Does nothing when any category already exists. Returns whether data was
/// written.
pub async fn seed(
    categories: &dyn CategoryRepository,
    products: &dyn ProductRepository,
) -> Result<bool> {
    if !categories.get_all().await?.is_empty() {
        return Ok(false);
    }

    let mut category_ids = Vec::with_capacity(CATEGORY_NAMES.len());
    for name in CATEGORY_NAMES {
        let category = categories.add(&CategoryInput::new(name)).await?;
        category_ids.push(category.id);
    }

    for i in 1..=SAMPLE_PRODUCTS {
        products.add(&sample_product(i, &category_ids)).await?;
    }

    info!(
        categories = category_ids.len(),
        products = SAMPLE_PRODUCTS,
        "Seeded sample inventory"
    );
    Ok(true)
}

fn sample_product(i: usize, category_ids: &[i64]) -> ProductInput {
    let adjective = ADJECTIVES[(i - 1) % ADJECTIVES.len()];
    let noun = NOUNS[(i - 1) % NOUNS.len()];

    ProductInput {
        name: format!("{} {} {}", adjective, noun, i),
        description: Some(format!(
            "Sample product {}: {} {} for everyday use.",
            i, adjective, noun
        )),
        // 5 + i * 2.35, in cents
        price: Price::from_cents(500 + i as i64 * 235),
        stock: 10 + (i as i64 * 3) % 100,
        category_id: category_ids[(i - 1) % category_ids.len()],
    }
}
