use async_trait::async_trait;
use serde_json::Value;

use crate::error::CatalogError;

/// A music-metadata source the API delegates to.
///
/// Payloads are opaque JSON: whatever the source returns is handed back to
/// the caller untouched. `None` means the caller did not send the parameter
/// at all and is forwarded as such.
#[async_trait]
pub trait MusicCatalog: Send + Sync {
    async fn search(&self, term: Option<&str>) -> Result<Value, CatalogError>;

    async fn get_song(&self, id: Option<&str>) -> Result<Value, CatalogError>;
}
