//! Order repository.
//!
//! Orders can be read and paged but not created, edited or deleted; state
//! changes go through [`Repository::update_order_status`].

use crate::client::{AdminClient, GraphqlExecutor};
use crate::models::{Order, OrderStatusUpdateInput};
use crate::queries::orders::{GET_ORDER, GET_ORDERS, UPDATE_ORDER_STATUS};
use crate::repositories::operation::{decode_required, extract_result};
use crate::repositories::{
    GraphqlOperation, GraphqlResource, Repository, RepositoryError, ResourceOperation,
};

const TRANSITION_RESULT_PATH: &str = "transitionOrderToState";

impl GraphqlResource for Order {
    type CreateInput = serde_json::Value;
    type UpdateInput = serde_json::Value;

    const NAME: &'static str = "Order";
    const OPERATIONS: &'static [GraphqlOperation] = &[
        GraphqlOperation::query(ResourceOperation::Find, GET_ORDER, "order"),
        GraphqlOperation::query(ResourceOperation::All, GET_ORDERS, "orders.items"),
        GraphqlOperation::query(ResourceOperation::Paginate, GET_ORDERS, "orders"),
    ];
}

/// Repository for orders.
pub type OrderRepository<E = AdminClient> = Repository<Order, E>;

impl<E: GraphqlExecutor> Repository<Order, E> {
    /// Transitions an order to `input.status`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Rejected`] when the transition is not
    /// allowed, or another [`RepositoryError`] if the call fails.
    pub async fn update_order_status(
        &self,
        input: &OrderStatusUpdateInput,
    ) -> Result<Order, RepositoryError> {
        let variables = serde_json::json!({
            "id": input.order_id,
            "state": input.status,
        });

        tracing::debug!(order_id = %input.order_id, state = %input.status, "Transitioning order");

        let data = self
            .executor()
            .mutate(UPDATE_ORDER_STATUS, Some(variables))
            .await?;
        let value = extract_result(Order::NAME, &data, TRANSITION_RESULT_PATH)?;
        decode_required(Order::NAME, "update_order_status", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingExecutor;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_order_status_sends_id_and_state() {
        let executor = RecordingExecutor::with_responses([json!({
            "transitionOrderToState": {"id": "1", "code": "AB12", "state": "Shipped"}
        })]);
        let repository = OrderRepository::<RecordingExecutor>::new(executor.clone());

        let order = repository
            .update_order_status(&OrderStatusUpdateInput::new("1", "Shipped"))
            .await
            .unwrap();

        assert_eq!(order.state, "Shipped");
        let call = executor.last_call();
        assert_eq!(call.document, UPDATE_ORDER_STATUS);
        assert_eq!(call.variables, Some(json!({"id": "1", "state": "Shipped"})));
    }

    #[tokio::test]
    async fn test_rejected_transition() {
        let executor = RecordingExecutor::with_responses([json!({
            "transitionOrderToState": {
                "errorCode": "ORDER_STATE_TRANSITION_ERROR",
                "message": "Cannot transition Order from \"Delivered\" to \"AddingItems\"",
                "transitionError": "not allowed"
            }
        })]);
        let repository = OrderRepository::<RecordingExecutor>::new(executor);

        let result = repository
            .update_order_status(&OrderStatusUpdateInput::new("1", "AddingItems"))
            .await;
        assert!(matches!(
            result,
            Err(RepositoryError::Rejected { resource: "Order", .. })
        ));
    }

    #[tokio::test]
    async fn test_create_update_delete_are_unsupported() {
        let executor = RecordingExecutor::empty();
        let repository = OrderRepository::<RecordingExecutor>::new(executor.clone());

        assert!(matches!(
            repository.create(&json!({})).await,
            Err(RepositoryError::Unsupported {
                operation: ResourceOperation::Create,
                ..
            })
        ));
        assert!(matches!(
            repository.update("1", &json!({})).await,
            Err(RepositoryError::Unsupported {
                operation: ResourceOperation::Update,
                ..
            })
        ));
        assert!(matches!(
            repository.delete("1").await,
            Err(RepositoryError::Unsupported {
                operation: ResourceOperation::Delete,
                ..
            })
        ));
        assert!(executor.calls().is_empty());
    }

    #[tokio::test]
    async fn test_find_all_reads_items() {
        let executor = RecordingExecutor::with_responses([json!({
            "orders": {"items": [{"id": "1", "code": "AB12", "state": "PaymentSettled", "total": 100, "currencyCode": "USD"}], "totalItems": 1}
        })]);
        let repository = OrderRepository::<RecordingExecutor>::new(executor.clone());

        let orders = repository.find_all(None).await.unwrap();
        assert_eq!(orders[0].code, "AB12");
        assert_eq!(executor.last_call().variables, Some(json!({"options": {}})));
    }
}
