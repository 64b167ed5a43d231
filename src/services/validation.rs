//! Field checks that gate every write before the repository is touched.

use crate::error::{Result, ServiceError};
use crate::models::{CategoryInput, Price, ProductInput};

pub const CATEGORY_NAME_LENGTH: (usize, usize) = (3, 50);
pub const PRODUCT_NAME_LENGTH: (usize, usize) = (3, 500);

/// Largest accepted price. Every amount up to it survives the `f64` JSON
/// encoding used on the wire and in the cache without losing a cent.
pub const MAX_PRICE: Price = Price::from_cents(99_999_999_999_99);

/// Ids addressed by an update must be positive.
pub fn validate_id(entity: &str, id: i64) -> Result<()> {
    if id <= 0 {
        return Err(ServiceError::validation(format!("Invalid {} id", entity)));
    }
    Ok(())
}

pub fn validate_category(input: &CategoryInput) -> Result<()> {
    validate_name("Category", &input.name, CATEGORY_NAME_LENGTH)
}

pub fn validate_product(input: &ProductInput) -> Result<()> {
    validate_name("Product", &input.name, PRODUCT_NAME_LENGTH)?;
    if input.price.is_negative() {
        return Err(ServiceError::validation("Price must be >= 0"));
    }
    if input.price > MAX_PRICE {
        return Err(ServiceError::validation(format!(
            "Price must be <= {}",
            MAX_PRICE
        )));
    }
    if input.stock < 0 {
        return Err(ServiceError::validation("Stock must be >= 0"));
    }
    Ok(())
}

fn validate_name(entity: &str, name: &str, (min, max): (usize, usize)) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ServiceError::validation(format!("{} name is required", entity)));
    }
    let length = name.chars().count();
    if length < min || length > max {
        return Err(ServiceError::validation(format!(
            "{} name must be between {} and {} characters",
            entity, min, max
        )));
    }
    Ok(())
}
