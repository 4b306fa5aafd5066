use crate::models::{CreateCustomerInput, Customer, ListOptions, PaginatedList, UpdateCustomerInput};
use crate::repositories::{CustomerRepository, RepositoryError};

use super::client;

fn repository() -> Result<CustomerRepository, RepositoryError> {
    Ok(CustomerRepository::new(client()?))
}

/// Pages through customers.
///
/// # Errors
///
/// Returns [`RepositoryError`] on failure, including an uninitialized client.
pub async fn get_customers(options: &ListOptions) -> Result<PaginatedList<Customer>, RepositoryError> {
    repository()?.find_with_pagination(options).await
}

/// Fetches one customer.
///
/// # Errors
///
/// Returns [`RepositoryError`] on failure, including an uninitialized client.
pub async fn get_customer(id: &str) -> Result<Option<Customer>, RepositoryError> {
    repository()?.find_by_id(id).await
}

/// Creates a customer.
///
/// # Errors
///
/// Returns [`RepositoryError`] on failure, including an uninitialized client.
pub async fn create_customer(input: &CreateCustomerInput) -> Result<Customer, RepositoryError> {
    repository()?.create(input).await
}

/// Updates the customer named by `input.id`.
///
/// # Errors
///
/// Returns [`RepositoryError`] on failure, including an uninitialized client.
pub async fn update_customer(input: &UpdateCustomerInput) -> Result<Customer, RepositoryError> {
    repository()?.update(&input.id, input).await
}
