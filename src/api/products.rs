use crate::models::{CreateProductInput, ListOptions, PaginatedList, Product, UpdateProductInput};
use crate::repositories::{ProductRepository, RepositoryError};

use super::client;

fn repository() -> Result<ProductRepository, RepositoryError> {
    Ok(ProductRepository::new(client()?))
}

/// Pages through products.
///
/// # Errors
///
/// Returns [`RepositoryError`] on failure, including an uninitialized client.
pub async fn get_products(options: &ListOptions) -> Result<PaginatedList<Product>, RepositoryError> {
    repository()?.find_with_pagination(options).await
}

/// Fetches one product.
///
/// # Errors
///
/// Returns [`RepositoryError`] on failure, including an uninitialized client.
pub async fn get_product(id: &str) -> Result<Option<Product>, RepositoryError> {
    repository()?.find_by_id(id).await
}

/// Creates a product.
///
/// # Errors
///
/// Returns [`RepositoryError`] on failure, including an uninitialized client.
pub async fn create_product(input: &CreateProductInput) -> Result<Product, RepositoryError> {
    repository()?.create(input).await
}

/// Updates the product named by `input.id`.
///
/// # Errors
///
/// Returns [`RepositoryError`] on failure, including an uninitialized client.
pub async fn update_product(input: &UpdateProductInput) -> Result<Product, RepositoryError> {
    repository()?.update(&input.id, input).await
}

/// Deletes a product.
///
/// # Errors
///
/// Returns [`RepositoryError`] on failure, including an uninitialized client.
pub async fn delete_product(id: &str) -> Result<bool, RepositoryError> {
    repository()?.delete(id).await
}
