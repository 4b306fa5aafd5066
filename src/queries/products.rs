//! Product documents.

/// Lists products. Takes `$options: ProductListOptions`.
pub const GET_PRODUCTS: &str = r"
query GetProducts($options: ProductListOptions) {
  products(options: $options) {
    items {
      id
      name
      slug
      description
      enabled
      featuredAsset {
        id
        preview
      }
      variants {
        id
        name
        price
        sku
      }
    }
    totalItems
  }
}
";

/// Fetches one product by `$id`.
pub const GET_PRODUCT: &str = r"
query GetProduct($id: ID!) {
  product(id: $id) {
    id
    name
    slug
    description
    enabled
    featuredAsset {
      id
      preview
    }
    assets {
      id
      preview
      source
    }
    variants {
      id
      name
      price
      sku
      stockLevel
      stockOnHand
      assets {
        id
        preview
      }
    }
  }
}
";

pub const CREATE_PRODUCT: &str = r"
mutation CreateProduct($input: CreateProductInput!) {
  createProduct(input: $input) {
    id
    name
    slug
    description
    enabled
  }
}
";

pub const UPDATE_PRODUCT: &str = r"
mutation UpdateProduct($input: UpdateProductInput!) {
  updateProduct(input: $input) {
    id
    name
    slug
    description
    enabled
  }
}
";

/// Deletes a product by `$id`. Answers with a `DeletionResponse`.
pub const DELETE_PRODUCT: &str = r"
mutation DeleteProduct($id: ID!) {
  deleteProduct(id: $id) {
    result
    message
  }
}
";
