//! Remote completion service integration.

pub mod openai;

use async_trait::async_trait;

use crate::error::BlurResult;

/// A remote service that rewrites text.
#[async_trait]
pub trait Rewriter: Send + Sync {
    /// Send text for improvement and return the rewritten version.
    async fn rewrite(&self, text: &str) -> BlurResult<String>;
}
