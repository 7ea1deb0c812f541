// Zing MP3 web API client
use async_trait::async_trait;
use reqwest::{Client, header};
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::MusicCatalog;
use crate::config::ZingConfig;
use crate::error::CatalogError;

pub mod sign;

const SEARCH_PATH: &str = "/api/v2/search/multi";
const SONG_PATH: &str = "/api/v2/song/get/streaming";

pub struct ZingClient {
    client: Client,
    config: ZingConfig,
}

impl ZingClient {
    pub fn new(config: ZingConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Fetch a fresh session cookie from the landing page.
    async fn session_cookie(&self) -> Result<Option<String>, CatalogError> {
        let response = self.client.get(self.url("/")).send().await?;

        let cookies: Vec<&str> = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();

        // The landing page sets its API session cookie second
        let cookie = cookies
            .get(1)
            .or_else(|| cookies.first())
            .and_then(|c| c.split(';').next())
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        if cookie.is_none() {
            warn!("No session cookie from {}", self.config.base_url);
        }
        Ok(cookie)
    }

    async fn request(
        &self,
        path: &str,
        params: Vec<(&str, String)>,
        ctime: String,
        sig: String,
    ) -> Result<Value, CatalogError> {
        let cookie = self.session_cookie().await?;

        let mut query = params;
        query.push(("ctime", ctime));
        query.push(("version", self.config.version.clone()));
        query.push(("apiKey", self.config.api_key.clone()));
        query.push(("sig", sig));

        let mut request = self.client.get(self.url(path)).query(&query);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("GET {} -> {}", path, status);

        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

fn current_ctime() -> String {
    chrono::Utc::now().timestamp().to_string()
}

#[async_trait]
impl MusicCatalog for ZingClient {
    async fn search(&self, term: Option<&str>) -> Result<Value, CatalogError> {
        let ctime = current_ctime();
        let sig = sign::sign_path(
            SEARCH_PATH,
            &ctime,
            &self.config.version,
            &self.config.secret_key,
        );
        let params = term.map(|q| vec![("q", q.to_string())]).unwrap_or_default();
        self.request(SEARCH_PATH, params, ctime, sig).await
    }

    async fn get_song(&self, id: Option<&str>) -> Result<Value, CatalogError> {
        let ctime = current_ctime();
        let sig = sign::sign_path_with_id(
            SONG_PATH,
            id.unwrap_or_default(),
            &ctime,
            &self.config.version,
            &self.config.secret_key,
        );
        let params = id.map(|id| vec![("id", id.to_string())]).unwrap_or_default();
        self.request(SONG_PATH, params, ctime, sig).await
    }
}
