//! Customer repository.
//!
//! Customers cannot be deleted through this repository.

use crate::client::AdminClient;
use crate::models::{CreateCustomerInput, Customer, UpdateCustomerInput};
use crate::queries::customers::{CREATE_CUSTOMER, GET_CUSTOMER, GET_CUSTOMERS, UPDATE_CUSTOMER};
use crate::repositories::{GraphqlOperation, GraphqlResource, Repository, ResourceOperation};

impl GraphqlResource for Customer {
    type CreateInput = CreateCustomerInput;
    type UpdateInput = UpdateCustomerInput;

    const NAME: &'static str = "Customer";
    const OPERATIONS: &'static [GraphqlOperation] = &[
        GraphqlOperation::query(ResourceOperation::Find, GET_CUSTOMER, "customer"),
        GraphqlOperation::query(ResourceOperation::All, GET_CUSTOMERS, "customers.items"),
        GraphqlOperation::mutation(ResourceOperation::Create, CREATE_CUSTOMER, "createCustomer"),
        GraphqlOperation::mutation(ResourceOperation::Update, UPDATE_CUSTOMER, "updateCustomer"),
        GraphqlOperation::query(ResourceOperation::Paginate, GET_CUSTOMERS, "customers"),
    ];
}

/// Repository for customers.
pub type CustomerRepository<E = AdminClient> = Repository<Customer, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::RepositoryError;
    use crate::test_support::RecordingExecutor;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_customer() {
        let executor = RecordingExecutor::with_responses([json!({
            "createCustomer": {"id": "5", "firstName": "Ann", "lastName": "Lee", "emailAddress": "ann@example.com"}
        })]);
        let repository = CustomerRepository::<RecordingExecutor>::new(executor.clone());

        let input = CreateCustomerInput {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email_address: "ann@example.com".to_string(),
            ..CreateCustomerInput::default()
        };
        let customer = repository.create(&input).await.unwrap();

        assert_eq!(customer.id, "5");
        assert_eq!(
            executor.last_call().variables,
            Some(json!({"input": {"firstName": "Ann", "lastName": "Lee", "emailAddress": "ann@example.com"}}))
        );
    }

    #[tokio::test]
    async fn test_email_conflict_is_rejected() {
        let executor = RecordingExecutor::with_responses([json!({
            "createCustomer": {"errorCode": "EMAIL_ADDRESS_CONFLICT_ERROR", "message": "The email address is not available."}
        })]);
        let repository = CustomerRepository::<RecordingExecutor>::new(executor);

        let result = repository.create(&CreateCustomerInput::default()).await;
        assert!(matches!(result, Err(RepositoryError::Rejected { ref code, .. }) if code == "EMAIL_ADDRESS_CONFLICT_ERROR"));
    }

    #[tokio::test]
    async fn test_delete_is_unsupported() {
        let executor = RecordingExecutor::empty();
        let repository = CustomerRepository::<RecordingExecutor>::new(executor.clone());

        let result = repository.delete("5").await;
        assert!(matches!(
            result,
            Err(RepositoryError::Unsupported {
                resource: "Customer",
                operation: ResourceOperation::Delete
            })
        ));
        assert!(executor.calls().is_empty());
    }
}
