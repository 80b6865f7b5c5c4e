//! Test doubles for the account API.
//!
//! Available inside this crate's tests and, for downstream crates, with the
//! `testing` feature.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::error::Result;
use crate::traits::BaseAccountApi;
use crate::types::{LoginRequest, RegisterRequest, Session, SessionUser};

/// Recording mock for [`BaseAccountApi`].
///
/// Responses are queued with the `with_*` builders and handed out in order.
/// When a queue runs dry, `register` answers `{}` and `login` answers a
/// learner session.
#[derive(Clone, Default)]
pub struct MockAccountApi {
    register_responses: Arc<Mutex<VecDeque<Result<serde_json::Value>>>>,
    login_responses: Arc<Mutex<VecDeque<Result<Session>>>>,
    register_calls: Arc<Mutex<Vec<RegisterRequest>>>,
    login_calls: Arc<Mutex<Vec<LoginRequest>>>,
    gate: Option<Arc<Notify>>,
}

impl MockAccountApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_register_response(self, response: Result<serde_json::Value>) -> Self {
        self.register_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn with_login_response(self, response: Result<Session>) -> Self {
        self.login_responses.lock().unwrap().push_back(response);
        self
    }

    /// Hold every call until `gate` is notified.
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Registration payloads received, in order
    pub fn register_calls(&self) -> Vec<RegisterRequest> {
        self.register_calls.lock().unwrap().clone()
    }

    /// Login payloads received, in order
    pub fn login_calls(&self) -> Vec<LoginRequest> {
        self.login_calls.lock().unwrap().clone()
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl BaseAccountApi for MockAccountApi {
    async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value> {
        self.register_calls.lock().unwrap().push(request.clone());
        self.wait_for_gate().await;
        let queued = self.register_responses.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| Ok(serde_json::json!({})))
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session> {
        self.login_calls.lock().unwrap().push(request.clone());
        self.wait_for_gate().await;
        let queued = self.login_responses.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| Ok(sample_session(false)))
    }
}

/// A session as the login endpoint would return it.
pub fn sample_session(is_mentor: bool) -> Session {
    Session {
        access_token: "test-token".to_string(),
        token_type: "bearer".to_string(),
        user: SessionUser {
            id: 1,
            full_name: "Test User".to_string(),
            email: if is_mentor {
                "mentor@demo.com".to_string()
            } else {
                "learner@demo.com".to_string()
            },
            is_mentor,
        },
        mentor_profile: None,
    }
}
