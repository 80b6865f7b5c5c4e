//! Stub account API for integration testing.
//!
//! Serves the same routes as the real account service on an ephemeral
//! loopback port and records what it receives, so tests exercise the real
//! HTTP client end to end.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use mentorship_client::{ClientConfig, MentorshipClient};
use serde_json::{json, Value};

use super::fixtures::{
    mentor_profile_json, session_json, user_json, DEMO_PASSWORD, LEARNER_EMAIL, MENTOR_EMAIL,
};

/// What `/register/` should answer with next.
#[derive(Debug, Clone)]
pub enum RegisterReply {
    /// 201 with the echoed user record
    Created,
    /// Given status with a JSON body
    Json(StatusCode, Value),
    /// Given status with a non-JSON body
    Text(StatusCode, &'static str),
}

/// A request as the stub saw it.
#[derive(Debug, Clone)]
pub struct Received {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct StubState {
    register_replies: Arc<Mutex<VecDeque<RegisterReply>>>,
    registrations: Arc<Mutex<Vec<Received>>>,
    logins: Arc<Mutex<Vec<Received>>>,
    mentor_updates: Arc<Mutex<Vec<Received>>>,
}

pub struct StubApi {
    pub base_url: String,
    state: StubState,
}

impl StubApi {
    /// Start the stub on `127.0.0.1:0`.
    pub async fn start() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let state = StubState::default();
        let app = Router::new()
            .route("/register/", post(register))
            .route("/login", post(login))
            .route("/users/", get(list_users))
            .route("/users/:id", get(get_user))
            .route("/mentors/", get(list_mentors))
            .route(
                "/mentors/:id",
                get(get_mentor).put(update_mentor).delete(delete_mentor),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind stub API")?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            state,
        })
    }

    pub fn client(&self) -> MentorshipClient {
        let config = ClientConfig {
            api_base_url: self.base_url.clone(),
            timeout: None,
        };
        MentorshipClient::new(&config).expect("client should build")
    }

    pub fn reply_to_register(&self, reply: RegisterReply) -> &Self {
        self.state.register_replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn registrations(&self) -> Vec<Received> {
        self.state.registrations.lock().unwrap().clone()
    }

    pub fn logins(&self) -> Vec<Received> {
        self.state.logins.lock().unwrap().clone()
    }

    pub fn mentor_updates(&self) -> Vec<Received> {
        self.state.mentor_updates.lock().unwrap().clone()
    }
}

/// A client pointed at a port nothing listens on.
pub async fn unreachable_client() -> Result<MentorshipClient> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let config = ClientConfig {
        api_base_url: format!("http://{}", addr),
        timeout: None,
    };
    Ok(MentorshipClient::new(&config)?)
}

fn record(headers: &HeaderMap, body: &Bytes) -> Received {
    Received {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(body).unwrap_or(Value::Null),
    }
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn register(State(state): State<StubState>, headers: HeaderMap, body: Bytes) -> Response {
    let received = record(&headers, &body);
    let echoed = received.body.clone();
    state.registrations.lock().unwrap().push(received);

    let reply = state
        .register_replies
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or(RegisterReply::Created);

    match reply {
        RegisterReply::Created => {
            let is_mentor = echoed["is_mentor"].as_bool().unwrap_or(false);
            let email = echoed["email"].as_str().unwrap_or_default().to_string();
            (StatusCode::CREATED, Json(user_json(42, &email, is_mentor))).into_response()
        }
        RegisterReply::Json(status, value) => (status, Json(value)).into_response(),
        RegisterReply::Text(status, text) => (status, text).into_response(),
    }
}

async fn login(State(state): State<StubState>, headers: HeaderMap, body: Bytes) -> Response {
    let received = record(&headers, &body);
    let email = received.body["email"].as_str().unwrap_or_default().to_string();
    let password = received.body["password"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    state.logins.lock().unwrap().push(received);

    let (user_id, is_mentor) = match email.as_str() {
        MENTOR_EMAIL => (1, true),
        LEARNER_EMAIL => (2, false),
        _ => return detail(StatusCode::NOT_FOUND, "User not found"),
    };
    if password != DEMO_PASSWORD {
        return detail(StatusCode::UNAUTHORIZED, "Incorrect password");
    }
    Json(session_json(user_id, &email, is_mentor)).into_response()
}

async fn list_users() -> Response {
    Json(json!([
        user_json(1, MENTOR_EMAIL, true),
        user_json(2, LEARNER_EMAIL, false),
    ]))
    .into_response()
}

async fn get_user(Path(id): Path<i64>) -> Response {
    match id {
        1 => Json(user_json(1, MENTOR_EMAIL, true)).into_response(),
        2 => Json(user_json(2, LEARNER_EMAIL, false)).into_response(),
        _ => detail(StatusCode::NOT_FOUND, "User not found"),
    }
}

async fn list_mentors() -> Response {
    Json(json!([mentor_profile_json(1, 1)])).into_response()
}

async fn get_mentor(Path(id): Path<i64>) -> Response {
    match id {
        1 => Json(mentor_profile_json(1, 1)).into_response(),
        _ => detail(StatusCode::NOT_FOUND, "Mentor profile not found"),
    }
}

async fn update_mentor(
    State(state): State<StubState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if id != 1 {
        return detail(StatusCode::NOT_FOUND, "Mentor profile not found");
    }
    let received = record(&headers, &body);
    let mut updated = received.body.clone();
    state.mentor_updates.lock().unwrap().push(received);

    updated["id"] = json!(id);
    Json(updated).into_response()
}

async fn delete_mentor(Path(id): Path<i64>) -> Response {
    match id {
        1 => Json(json!({ "ok": true })).into_response(),
        _ => detail(StatusCode::NOT_FOUND, "Mentor profile not found"),
    }
}
