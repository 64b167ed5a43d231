//! Services Module
//!
//! Business operations for categories and products. Every read goes through
//! the shared cache first; every successful write invalidates the keys whose
//! cached values it may have changed.

mod category;
mod product;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use category::CategoryService;
pub use product::ProductService;
