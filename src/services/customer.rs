//! Customer service.

use crate::client::{AdminClient, GraphqlExecutor};
use crate::models::{
    ComparisonOperator, CreateCustomerInput, Customer, FilterCriteria, ListOptions, LogicalFilter,
    PaginatedList, UpdateCustomerInput,
};
use crate::repositories::RepositoryError;
use crate::services::Service;

/// Service for customers.
pub type CustomerService<E = AdminClient> = Service<Customer, E>;

const SEARCH_FIELDS: [&str; 3] = ["firstName", "lastName", "emailAddress"];

impl<E: GraphqlExecutor> Service<Customer, E> {
    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn create_customer(
        &self,
        input: &CreateCustomerInput,
    ) -> Result<Customer, RepositoryError> {
        self.create(input).await
    }

    /// Updates the customer named by `input.id`.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn update_customer(
        &self,
        input: &UpdateCustomerInput,
    ) -> Result<Customer, RepositoryError> {
        self.update(&input.id, input).await
    }

    /// Returns the first customer with this email address.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn get_customer_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Customer>, RepositoryError> {
        let mut filter = FilterCriteria::new();
        filter.insert(
            "emailAddress".to_string(),
            ComparisonOperator::Eq(email.into()).into(),
        );
        Ok(self.get_all(Some(&filter)).await?.into_iter().next())
    }

    /// Pages through customers whose first name, last name or email address
    /// contains `term`.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn search_customers(
        &self,
        term: &str,
        options: &ListOptions,
    ) -> Result<PaginatedList<Customer>, RepositoryError> {
        let groups = SEARCH_FIELDS
            .iter()
            .map(|field| {
                let mut criteria = FilterCriteria::new();
                criteria.insert(
                    (*field).to_string(),
                    ComparisonOperator::Contains(term.to_string()).into(),
                );
                criteria
            })
            .collect();

        let mut criteria = FilterCriteria::new();
        LogicalFilter::any_of(groups).apply_to(&mut criteria);
        self.get_paginated(&options.with_filter(criteria)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingExecutor;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_customer_by_email_returns_first() {
        let executor = RecordingExecutor::with_responses([
            json!({"customers": {"items": [
                {"id": "5", "firstName": "Ann", "lastName": "Lee", "emailAddress": "ann@example.com"}
            ], "totalItems": 1}}),
            json!({"customers": {"items": [], "totalItems": 0}}),
        ]);
        let service = CustomerService::<RecordingExecutor>::from_executor(executor.clone());

        let customer = service
            .get_customer_by_email("ann@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(customer.id, "5");
        assert_eq!(
            executor.last_call().variables,
            Some(json!({"options": {"filter": {"emailAddress": {"eq": "ann@example.com"}}}}))
        );

        assert!(service
            .get_customer_by_email("nobody@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_search_customers_uses_or_group() {
        let executor = RecordingExecutor::with_responses([json!({
            "customers": {"items": [], "totalItems": 0}
        })]);
        let service = CustomerService::<RecordingExecutor>::from_executor(executor.clone());

        service
            .search_customers("ann", &ListOptions::default())
            .await
            .unwrap();

        assert_eq!(
            executor.last_call().variables,
            Some(json!({"options": {"filter": {"or": [
                {"firstName": {"contains": "ann"}},
                {"lastName": {"contains": "ann"}},
                {"emailAddress": {"contains": "ann"}}
            ]}}}))
        );
    }
}
