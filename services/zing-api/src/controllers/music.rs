use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::catalog::MusicCatalog;
use crate::error::{ApiError, CatalogError};

#[derive(Clone)]
pub struct MusicController {
    catalog: Arc<dyn MusicCatalog>,
    timeout: Duration,
}

impl MusicController {
    pub fn new(catalog: Arc<dyn MusicCatalog>, timeout: Duration) -> Self {
        MusicController { catalog, timeout }
    }

    pub async fn search(&self, term: Option<&str>) -> Result<Value, ApiError> {
        info!("🔍 Searching: {}", term.unwrap_or("<absent>"));
        self.delegate("search", self.catalog.search(term)).await
    }

    pub async fn get_song(&self, id: Option<&str>) -> Result<Value, ApiError> {
        info!("🎵 Resolving song link for id: {}", id.unwrap_or("<absent>"));
        self.delegate("song", self.catalog.get_song(id)).await
    }

    async fn delegate(
        &self,
        op: &str,
        call: impl Future<Output = Result<Value, CatalogError>>,
    ) -> Result<Value, ApiError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(data)) => Ok(data),
            Ok(Err(e)) => {
                error!("{} failed: {}", op, e);
                Err(ApiError::Delegated(e))
            }
            Err(_) => {
                warn!("{} timed out after {:?}", op, self.timeout);
                Err(ApiError::Timeout(self.timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct SlowCatalog;

    #[async_trait]
    impl MusicCatalog for SlowCatalog {
        async fn search(&self, _term: Option<&str>) -> Result<Value, CatalogError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(json!({}))
        }

        async fn get_song(&self, id: Option<&str>) -> Result<Value, CatalogError> {
            Ok(json!({ "id": id }))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn hung_call_becomes_timeout() {
        let controller = MusicController::new(Arc::new(SlowCatalog), Duration::from_secs(2));
        let err = controller.search(Some("x")).await.unwrap_err();
        assert!(matches!(err, ApiError::Timeout(d) if d == Duration::from_secs(2)));
    }

    #[tokio::test]
    async fn fast_call_returns_payload() {
        let controller = MusicController::new(Arc::new(SlowCatalog), Duration::from_secs(2));
        let data = controller.get_song(Some("Z1")).await.unwrap();
        assert_eq!(data, json!({"id": "Z1"}));
    }
}
