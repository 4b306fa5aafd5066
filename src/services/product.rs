//! Product service.

use crate::client::{AdminClient, GraphqlExecutor};
use crate::models::{
    ComparisonOperator, CreateProductInput, FilterCriteria, ListOptions, PaginatedList, Product,
    UpdateProductInput,
};
use crate::repositories::RepositoryError;
use crate::services::Service;

/// Service for products.
pub type ProductService<E = AdminClient> = Service<Product, E>;

impl<E: GraphqlExecutor> Service<Product, E> {
    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn create_product(&self, input: &CreateProductInput) -> Result<Product, RepositoryError> {
        self.create(input).await
    }

    /// Updates the product named by `input.id`.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn update_product(&self, input: &UpdateProductInput) -> Result<Product, RepositoryError> {
        self.update(&input.id, input).await
    }

    /// Returns the first product whose slug is exactly `slug`.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn get_product_by_slug(&self, slug: &str) -> Result<Option<Product>, RepositoryError> {
        let mut filter = FilterCriteria::new();
        filter.insert(
            "slug".to_string(),
            ComparisonOperator::Eq(slug.into()).into(),
        );
        let products = self.get_all(Some(&filter)).await?;
        Ok(products.into_iter().find(|product| product.slug == slug))
    }

    /// Pages through products whose name contains `term`, on top of any
    /// filter already in `options`.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn search_products(
        &self,
        term: &str,
        options: &ListOptions,
    ) -> Result<PaginatedList<Product>, RepositoryError> {
        let mut criteria = FilterCriteria::new();
        criteria.insert(
            "name".to_string(),
            ComparisonOperator::Contains(term.to_string()).into(),
        );
        self.get_paginated(&options.with_filter(criteria)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingExecutor;
    use serde_json::json;

    fn product(id: &str, slug: &str) -> serde_json::Value {
        json!({"id": id, "name": slug, "slug": slug, "enabled": true})
    }

    #[tokio::test]
    async fn test_get_product_by_slug_requires_exact_match() {
        let executor = RecordingExecutor::with_responses([json!({
            "products": {"items": [product("1", "laptop-bag"), product("2", "laptop")], "totalItems": 2}
        })]);
        let service = ProductService::<RecordingExecutor>::from_executor(executor.clone());

        let found = service.get_product_by_slug("laptop").await.unwrap().unwrap();
        assert_eq!(found.id, "2");
        assert_eq!(
            executor.last_call().variables,
            Some(json!({"options": {"filter": {"slug": {"eq": "laptop"}}}}))
        );
    }

    #[tokio::test]
    async fn test_get_product_by_slug_none_when_missing() {
        let executor = RecordingExecutor::with_responses([json!({
            "products": {"items": [], "totalItems": 0}
        })]);
        let service = ProductService::<RecordingExecutor>::from_executor(executor);
        assert!(service.get_product_by_slug("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_products_merges_name_filter() {
        let executor = RecordingExecutor::with_responses([json!({
            "products": {"items": [product("1", "laptop")], "totalItems": 1}
        })]);
        let service = ProductService::<RecordingExecutor>::from_executor(executor.clone());

        let options = ListOptions::default()
            .take(5)
            .filter_field("enabled", ComparisonOperator::Eq(json!(true)));
        let page = service.search_products("lap", &options).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(
            executor.last_call().variables,
            Some(json!({"options": {
                "take": 5,
                "filter": {"enabled": {"eq": true}, "name": {"contains": "lap"}}
            }}))
        );
    }

    #[tokio::test]
    async fn test_update_product_uses_input_id() {
        let executor = RecordingExecutor::with_responses([json!({"updateProduct": product("7", "mug")})]);
        let service = ProductService::<RecordingExecutor>::from_executor(executor.clone());

        let input = UpdateProductInput {
            id: "7".to_string(),
            enabled: Some(false),
            ..UpdateProductInput::default()
        };
        service.update_product(&input).await.unwrap();

        assert_eq!(
            executor.last_call().variables,
            Some(json!({"input": {"id": "7", "enabled": false}}))
        );
    }
}
