//! Order service.

use crate::client::{AdminClient, GraphqlExecutor};
use crate::models::{
    ComparisonOperator, FilterCriteria, FilterValue, ListOptions, Order, OrderStatusUpdateInput,
    PaginatedList,
};
use crate::repositories::RepositoryError;
use crate::services::Service;

/// Service for orders.
pub type OrderService<E = AdminClient> = Service<Order, E>;

fn single(field: &str, value: FilterValue) -> FilterCriteria {
    let mut criteria = FilterCriteria::new();
    criteria.insert(field.to_string(), value);
    criteria
}

impl<E: GraphqlExecutor> Service<Order, E> {
    /// Transitions an order to a new state.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn update_order_status(
        &self,
        input: &OrderStatusUpdateInput,
    ) -> Result<Order, RepositoryError> {
        self.repository().update_order_status(input).await
    }

    /// Pages through the orders of one customer.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn get_orders_by_customer(
        &self,
        customer_id: &str,
        options: &ListOptions,
    ) -> Result<PaginatedList<Order>, RepositoryError> {
        let criteria = single(
            "customer",
            FilterValue::nested("id", ComparisonOperator::Eq(customer_id.into())),
        );
        self.get_paginated(&options.with_filter(criteria)).await
    }

    /// Pages through orders in `state`.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn get_orders_by_status(
        &self,
        state: &str,
        options: &ListOptions,
    ) -> Result<PaginatedList<Order>, RepositoryError> {
        let criteria = single("state", ComparisonOperator::Eq(state.into()).into());
        self.get_paginated(&options.with_filter(criteria)).await
    }

    /// Pages through orders whose code contains `term`.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn search_orders(
        &self,
        term: &str,
        options: &ListOptions,
    ) -> Result<PaginatedList<Order>, RepositoryError> {
        let criteria = single("code", ComparisonOperator::Contains(term.to_string()).into());
        self.get_paginated(&options.with_filter(criteria)).await
    }
}
