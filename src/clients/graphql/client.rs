//! GraphQL client implementation for the Vendure Admin API.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::clients::graphql::{ApiError, GraphqlError};
use crate::clients::{HttpClient, HttpRequest, HttpResponse};
use crate::config::{AdminClientConfig, ApiUrl};

/// The kind of a GraphQL operation.
///
/// Both kinds travel as a JSON `POST`; the kind only affects logging and
/// the defaults of [`OperationOptions`](crate::client::OperationOptions).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OperationKind {
    /// A read-only query.
    #[default]
    Query,
    /// A mutation.
    Mutation,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => write!(f, "query"),
            Self::Mutation => write!(f, "mutation"),
        }
    }
}

/// A decoded GraphQL response.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphqlResponse {
    /// The `data` object (`Null` when the server returned none).
    pub data: serde_json::Value,
    /// Non-fatal errors that accompanied the data.
    pub errors: Vec<ApiError>,
    /// A session token issued through the `vendure-auth-token` header.
    pub auth_token: Option<String>,
    /// The `X-Request-Id` of the response, if any.
    pub request_id: Option<String>,
}

impl GraphqlResponse {
    /// Builds a response carrying only `data`.
    #[must_use]
    pub const fn from_data(data: serde_json::Value) -> Self {
        Self {
            data,
            errors: Vec::new(),
            auth_token: None,
            request_id: None,
        }
    }

    /// Decodes `data` into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Deserialize`] if `data` does not match `T`.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, GraphqlError> {
        Ok(T::deserialize(&self.data)?)
    }

    fn from_http(response: HttpResponse) -> Result<Self, GraphqlError> {
        let errors = match response.body.get("errors") {
            Some(serde_json::Value::Null) | None => Vec::new(),
            Some(errors) => serde_json::from_value::<Vec<ApiError>>(errors.clone())
                .unwrap_or_else(|_| {
                    vec![ApiError {
                        message: errors.to_string(),
                        ..ApiError::default()
                    }]
                }),
        };
        let data = response
            .body
            .get("data")
            .cloned()
            .unwrap_or(serde_json::Value::Null);

        if data.is_null() && !errors.is_empty() {
            return Err(GraphqlError::Graphql { errors });
        }

        if !errors.is_empty() {
            tracing::warn!(
                count = errors.len(),
                first = %errors[0].message,
                "GraphQL response contained errors alongside data"
            );
        }

        Ok(Self {
            data,
            errors,
            auth_token: response.auth_token().map(String::from),
            request_id: response.request_id().map(String::from),
        })
    }
}

/// GraphQL client for the Vendure Admin API.
///
/// Posts `{"query": ..., "variables": ...}` to the configured endpoint and
/// decodes the GraphQL envelope. The client itself holds no session state:
/// the bearer token is passed per call.
///
/// `GraphqlClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use vendure_admin::{AdminClientConfig, ApiUrl};
/// use vendure_admin::clients::graphql::GraphqlClient;
///
/// let config = AdminClientConfig::builder()
///     .api_url(ApiUrl::new("http://localhost:3000/admin-api").unwrap())
///     .build()
///     .unwrap();
/// let client = GraphqlClient::new(&config)?;
///
/// let response = client.query("query { me { id } }", None, Some("token")).await?;
/// println!("{}", response.data["me"]["id"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &AdminClientConfig) -> Result<Self, GraphqlError> {
        Ok(Self {
            http_client: HttpClient::from_config(config)?,
        })
    }

    /// Returns the endpoint this client talks to.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        self.http_client.api_url()
    }

    /// Executes a query.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn query(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
        auth_token: Option<&str>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        self.execute(OperationKind::Query, document, variables, auth_token)
            .await
    }

    /// Executes a mutation.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn mutate(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
        auth_token: Option<&str>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        self.execute(OperationKind::Mutation, document, variables, auth_token)
            .await
    }

    /// Executes a GraphQL operation.
    ///
    /// An `Authorization: Bearer <token>` header is sent when `auth_token` is
    /// set; otherwise the header is sent empty.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for transport failures and non-2xx
    /// responses, and [`GraphqlError::Graphql`] when the server returned
    /// `errors` without any `data`.
    pub async fn execute(
        &self,
        kind: OperationKind,
        document: &str,
        variables: Option<serde_json::Value>,
        auth_token: Option<&str>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let body = serde_json::json!({
            "query": document,
            "variables": variables.unwrap_or_else(|| serde_json::json!({})),
        });

        let authorization = auth_token
            .filter(|token| !token.is_empty())
            .map_or_else(String::new, |token| format!("Bearer {token}"));

        let request = HttpRequest::builder()
            .body(body)
            .header("Authorization", authorization)
            .build()
            .map_err(|e| GraphqlError::Http(e.into()))?;

        tracing::debug!(%kind, "Executing GraphQL operation");

        let response = self.http_client.request(request).await.map_err(|e| {
            tracing::error!(%kind, error = %e, "GraphQL operation failed");
            GraphqlError::from(e)
        })?;

        GraphqlResponse::from_http(response)
    }
}
