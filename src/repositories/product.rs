//! Product repository.
//!
//! # Example
//!
//! ```rust,ignore
//! use vendure_admin::repositories::ProductRepository;
//! use vendure_admin::models::ListOptions;
//!
//! let products = ProductRepository::new(client);
//! let page = products.find_with_pagination(&ListOptions::default().take(10)).await?;
//! for product in page.items {
//!     println!("{}: {}", product.id, product.name);
//! }
//! ```

use crate::client::AdminClient;
use crate::models::{CreateProductInput, Product, UpdateProductInput};
use crate::queries::products::{
    CREATE_PRODUCT, DELETE_PRODUCT, GET_PRODUCT, GET_PRODUCTS, UPDATE_PRODUCT,
};
use crate::repositories::{GraphqlOperation, GraphqlResource, Repository, ResourceOperation};

impl GraphqlResource for Product {
    type CreateInput = CreateProductInput;
    type UpdateInput = UpdateProductInput;

    const NAME: &'static str = "Product";
    const OPERATIONS: &'static [GraphqlOperation] = &[
        GraphqlOperation::query(ResourceOperation::Find, GET_PRODUCT, "product"),
        GraphqlOperation::query(ResourceOperation::All, GET_PRODUCTS, "products.items"),
        GraphqlOperation::mutation(ResourceOperation::Create, CREATE_PRODUCT, "createProduct"),
        GraphqlOperation::mutation(ResourceOperation::Update, UPDATE_PRODUCT, "updateProduct"),
        GraphqlOperation::mutation(ResourceOperation::Delete, DELETE_PRODUCT, "deleteProduct"),
        GraphqlOperation::query(ResourceOperation::Paginate, GET_PRODUCTS, "products"),
    ];
}

/// Repository for products.
pub type ProductRepository<E = AdminClient> = Repository<Product, E>;
