use std::time::Duration;

/// Service workers only exist in the browser.
pub fn register_service_worker(_path: &str) {}

/// Non-blocking wait on the tokio runtime entered by `main`
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
