use crate::models::{ListOptions, Order, OrderStatusUpdateInput, PaginatedList};
use crate::repositories::{OrderRepository, RepositoryError};

use super::client;

fn repository() -> Result<OrderRepository, RepositoryError> {
    Ok(OrderRepository::new(client()?))
}

/// Pages through orders.
///
/// # Errors
///
/// Returns [`RepositoryError`] on failure, including an uninitialized client.
pub async fn get_orders(options: &ListOptions) -> Result<PaginatedList<Order>, RepositoryError> {
    repository()?.find_with_pagination(options).await
}

/// Fetches one order.
///
/// # Errors
///
/// Returns [`RepositoryError`] on failure, including an uninitialized client.
pub async fn get_order(id: &str) -> Result<Option<Order>, RepositoryError> {
    repository()?.find_by_id(id).await
}

/// Transitions an order to a new state.
///
/// # Errors
///
/// Returns [`RepositoryError`] on failure, including an uninitialized client
/// and a rejected transition.
pub async fn update_order_status(input: &OrderStatusUpdateInput) -> Result<Order, RepositoryError> {
    repository()?.update_order_status(input).await
}
