//! Add thread use case

use forum_core::{CreateThread, CreatedThread, DomainResult};
use serde_json::Value;
use tracing::{info, instrument};

use super::context::ServiceContext;

pub struct AddThreadUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AddThreadUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate the payload and insert the thread
    #[instrument(skip(self, payload))]
    pub async fn execute(&self, payload: &Value) -> DomainResult<CreatedThread> {
        let new_thread = CreateThread::from_payload(payload)?;

        let created = self.ctx.thread_repo().add_thread(&new_thread).await?;

        info!(thread_id = %created.id, owner = %created.owner, "Thread created");
        Ok(created)
    }
}
