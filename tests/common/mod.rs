pub mod mock_notifier;
pub mod mock_rewriter;
pub mod mock_source;

use std::time::Duration;

use blur::pipeline::Pipeline;

/// Poll until the pipeline has returned to idle.
pub async fn wait_idle(pipeline: &Pipeline) {
    for _ in 0..200 {
        if !pipeline.is_busy() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Pipeline did not return to idle");
}
