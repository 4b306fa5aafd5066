//! Customer documents.

/// Lists customers. Takes `$options: CustomerListOptions`.
pub const GET_CUSTOMERS: &str = r"
query GetCustomers($options: CustomerListOptions) {
  customers(options: $options) {
    items {
      id
      firstName
      lastName
      emailAddress
      phoneNumber
      user {
        id
        verified
      }
      addresses {
        id
        fullName
        streetLine1
        city
        postalCode
        country {
          code
          name
        }
      }
    }
    totalItems
  }
}
";

/// Fetches one customer by `$id` with addresses and order summaries.
pub const GET_CUSTOMER: &str = r"
query GetCustomer($id: ID!) {
  customer(id: $id) {
    id
    firstName
    lastName
    emailAddress
    phoneNumber
    user {
      id
      verified
      lastLogin
    }
    addresses {
      id
      fullName
      company
      streetLine1
      streetLine2
      city
      province
      postalCode
      country {
        code
        name
      }
      phoneNumber
      defaultBillingAddress
      defaultShippingAddress
    }
    orders {
      items {
        id
        code
        state
        total
        currencyCode
        orderPlacedAt
      }
    }
  }
}
";

pub const CREATE_CUSTOMER: &str = r"
mutation CreateCustomer($input: CreateCustomerInput!) {
  createCustomer(input: $input) {
    ... on Customer {
      id
      firstName
      lastName
      emailAddress
      phoneNumber
    }
    ... on ErrorResult {
      errorCode
      message
    }
  }
}
";

pub const UPDATE_CUSTOMER: &str = r"
mutation UpdateCustomer($input: UpdateCustomerInput!) {
  updateCustomer(input: $input) {
    ... on Customer {
      id
      firstName
      lastName
      emailAddress
      phoneNumber
    }
    ... on ErrorResult {
      errorCode
      message
    }
  }
}
";
