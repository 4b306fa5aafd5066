//! Order documents.
//!
//! Orders cannot be created, edited or deleted through these documents;
//! state changes go through [`UPDATE_ORDER_STATUS`].

/// Lists orders. Takes `$options: OrderListOptions`.
pub const GET_ORDERS: &str = r"
query GetOrders($options: OrderListOptions) {
  orders(options: $options) {
    items {
      id
      code
      state
      total
      currencyCode
      customer {
        id
        firstName
        lastName
        emailAddress
      }
      shippingAddress {
        fullName
        streetLine1
        streetLine2
        city
        province
        postalCode
        country
      }
    }
    totalItems
  }
}
";

/// Fetches one order by `$id` with its lines, payments and fulfillments.
pub const GET_ORDER: &str = r"
query GetOrder($id: ID!) {
  order(id: $id) {
    id
    code
    state
    active
    total
    currencyCode
    customer {
      id
      firstName
      lastName
      emailAddress
      phoneNumber
    }
    lines {
      id
      productVariant {
        id
        name
        sku
        product {
          id
          name
          slug
        }
      }
      unitPrice
      quantity
      totalPrice
    }
    shippingAddress {
      fullName
      company
      streetLine1
      streetLine2
      city
      province
      postalCode
      country
      phoneNumber
    }
    billingAddress {
      fullName
      company
      streetLine1
      streetLine2
      city
      province
      postalCode
      country
      phoneNumber
    }
    payments {
      id
      amount
      method
      state
      transactionId
      metadata
    }
    fulfillments {
      id
      state
      method
      trackingCode
    }
  }
}
";

/// Transitions order `$id` to `$state`.
pub const UPDATE_ORDER_STATUS: &str = r"
mutation TransitionOrderToState($id: ID!, $state: String!) {
  transitionOrderToState(id: $id, state: $state) {
    ... on Order {
      id
      code
      state
    }
    ... on OrderStateTransitionError {
      errorCode
      message
      transitionError
    }
  }
}
";
