// Trait definitions for dependency injection
//
// Infrastructure seam between the intake forms and the account API. The forms
// only ever talk to `BaseAccountApi`; tests swap in a mock.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{LoginRequest, RegisterRequest, Session};

#[async_trait]
pub trait BaseAccountApi: Send + Sync {
    /// Create an account. Returns the raw JSON body of a successful response;
    /// its shape is not checked.
    async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value>;

    /// Exchange credentials for a session.
    async fn login(&self, request: &LoginRequest) -> Result<Session>;
}

#[async_trait]
impl<T: BaseAccountApi + ?Sized> BaseAccountApi for std::sync::Arc<T> {
    async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value> {
        (**self).register(request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session> {
        (**self).login(request).await
    }
}
