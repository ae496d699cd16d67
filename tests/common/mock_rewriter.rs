use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use blur::core::Rewriter;
use blur::error::{BlurError, BlurResult};

/// Rewriter returning a scripted response. An optional gate lets tests hold
/// a request in flight until they release a permit.
pub struct MockRewriter {
    response: Result<String, String>,
    pub calls: AtomicUsize,
    gate: Option<Arc<Semaphore>>,
}

impl MockRewriter {
    pub fn fixed(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn gated(response: &str, gate: Arc<Semaphore>) -> Self {
        Self {
            response: Ok(response.to_string()),
            calls: AtomicUsize::new(0),
            gate: Some(gate),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Rewriter for MockRewriter {
    async fn rewrite(&self, _text: &str) -> BlurResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            let _permit = gate.acquire().await.expect("Gate closed");
        }
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(BlurError::Remote(message.clone())),
        }
    }
}
