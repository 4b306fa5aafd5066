//! Recording executor used by unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde_json::Value;

use crate::auth::AuthResponse;
use crate::client::{ClientError, GraphqlExecutor};
use crate::clients::OperationKind;
use crate::queries::{LOGIN_MUTATION, LOGOUT_MUTATION};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub kind: OperationKind,
    pub document: String,
    pub variables: Option<Value>,
}

/// Answers each call with the next queued response, or `{}` when the queue is empty.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<VecDeque<Result<Value, ClientError>>>,
    authenticated: AtomicBool,
}

impl RecordingExecutor {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_responses(responses: impl IntoIterator<Item = Value>) -> Arc<Self> {
        let executor = Self::default();
        executor
            .responses
            .lock()
            .unwrap()
            .extend(responses.into_iter().map(Ok));
        Arc::new(executor)
    }

    pub fn push_error(&self, error: ClientError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        self.authenticated.store(authenticated, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls.lock().unwrap().last().cloned().unwrap()
    }

    fn record(&self, kind: OperationKind, document: &str, variables: Option<Value>) -> Result<Value, ClientError> {
        self.calls.lock().unwrap().push(RecordedCall {
            kind,
            document: document.to_string(),
            variables,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(serde_json::json!({})))
    }
}

impl GraphqlExecutor for RecordingExecutor {
    async fn query(&self, document: &str, variables: Option<Value>) -> Result<Value, ClientError> {
        self.record(OperationKind::Query, document, variables)
    }

    async fn mutate(&self, document: &str, variables: Option<Value>) -> Result<Value, ClientError> {
        self.record(OperationKind::Mutation, document, variables)
    }

    async fn login(
        &self,
        username: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<AuthResponse, ClientError> {
        let variables = serde_json::json!({
            "username": username,
            "password": password,
            "rememberMe": remember_me,
        });
        self.record(OperationKind::Mutation, LOGIN_MUTATION, Some(variables))?;
        self.set_authenticated(true);
        Ok(AuthResponse {
            token: "recorded-token".to_string(),
            refresh_token: None,
            expires: Utc::now(),
            user: None,
        })
    }

    async fn logout(&self) {
        if self.is_authenticated() {
            let _ = self.record(OperationKind::Mutation, LOGOUT_MUTATION, None);
        }
        self.set_authenticated(false);
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }
}
